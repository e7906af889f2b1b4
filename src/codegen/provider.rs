//! Runtime accessor over the embedded (or lazily imported) locale values.

use super::declarations::{BANNER, write_common};
use super::printer::{TsWriter, string_literal};
use super::resource::write_resources;
use super::values::write_object;
use super::{Declarations, Output};
use crate::core::NamedValue;

pub fn emit(decl: &Declarations<'_>, lazy: bool) -> Output {
    if lazy {
        emit_lazy(decl)
    } else {
        emit_eager(decl)
    }
}

fn emit_eager(decl: &Declarations<'_>) -> Output {
    let mut w = TsWriter::new();
    write_common(&mut w, &decl.schema.canonical, &decl.locale_names());
    w.blank();
    write_resources(&mut w, decl, "const resources: Record<Locale, Messages> = ", |_| true);
    w.blank();
    write_default_locale(&mut w, decl);
    w.blank();
    write_is_locale(&mut w);
    w.blank();
    w.open("export function getMessages(locale: Locale = defaultLocale): Messages {");
    w.line("return resources[locale];");
    w.close("}");
    Output::Single(w.finish())
}

fn emit_lazy(decl: &Declarations<'_>) -> Output {
    let default_locale = decl.default_locale;

    let mut w = TsWriter::new();
    write_common(&mut w, &decl.schema.canonical, &decl.locale_names());
    w.blank();
    write_resources(
        &mut w,
        decl,
        "const resources: Partial<Record<Locale, Messages>> = ",
        |locale| locale == default_locale,
    );
    w.blank();

    let deferred: Vec<_> = decl
        .schema
        .locales
        .iter()
        .filter(|l| l.locale != default_locale)
        .collect();
    let head = "const loaders: Partial<Record<Locale, () => Promise<{ default: Messages }>>> = ";
    if deferred.is_empty() {
        w.line(format!("{}{{}};", head));
    } else {
        w.open(format!("{}{{", head));
        for locale in &deferred {
            w.line(format!(
                "{}: () => import({}),",
                string_literal(&locale.locale),
                string_literal(&format!("./{}", side_module(decl.module_name, &locale.locale)))
            ));
        }
        w.close("};");
    }
    w.blank();
    write_default_locale(&mut w, decl);
    w.blank();
    write_is_locale(&mut w);
    w.blank();
    w.open("export function isLoaded(locale: Locale): boolean {");
    w.line("return resources[locale] !== undefined;");
    w.close("}");
    w.blank();
    w.open("export async function loadLocale(locale: Locale): Promise<Messages> {");
    w.line("const cached = resources[locale];");
    w.open("if (cached) {");
    w.line("return cached;");
    w.close("}");
    w.line("const loader = loaders[locale];");
    w.open("if (!loader) {");
    w.line("throw new Error(`No messages for locale \"${locale}\"`);");
    w.close("}");
    w.line("const messages = (await loader()).default;");
    w.line("resources[locale] = messages;");
    w.line("return messages;");
    w.close("}");
    w.blank();
    w.open("export function getMessages(locale: Locale = defaultLocale): Messages {");
    w.line("const messages = resources[locale];");
    w.open("if (!messages) {");
    w.line("throw new Error(`Locale \"${locale}\" is not loaded; call loadLocale first`);");
    w.close("}");
    w.line("return messages;");
    w.close("}");

    let side = deferred
        .into_iter()
        .map(|locale| {
            let mut w = TsWriter::new();
            w.line(BANNER);
            w.blank();
            w.line(format!(
                "import type {{ Messages }} from {};",
                string_literal(&format!("./{}", decl.module_name))
            ));
            w.blank();
            write_object(&mut w, "const messages: Messages = ", &locale.value, ";");
            w.blank();
            w.line("export default messages;");
            NamedValue::new(locale.locale.clone(), w.finish())
        })
        .collect();

    Output::Split {
        main: w.finish(),
        locales: side,
    }
}

/// Module name of a lazily loaded locale, without extension.
pub fn side_module(module_name: &str, locale: &str) -> String {
    format!("{}.{}", module_name, locale)
}

fn write_default_locale(w: &mut TsWriter, decl: &Declarations<'_>) {
    w.line(format!(
        "export const defaultLocale: Locale = {};",
        string_literal(decl.default_locale)
    ));
}

fn write_is_locale(w: &mut TsWriter) {
    w.open("export function isLocale(value: string): value is Locale {");
    w.line("return (locales as readonly string[]).includes(value);");
    w.close("}");
}
