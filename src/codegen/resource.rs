use super::declarations::write_common;
use super::printer::{TsWriter, string_literal};
use super::values::write_object;
use super::{Declarations, Output};

/// Every locale's values in one `resources` record.
pub fn emit(decl: &Declarations<'_>) -> Output {
    let mut w = TsWriter::new();
    write_common(&mut w, &decl.schema.canonical, &decl.locale_names());
    w.blank();
    write_resources(&mut w, decl, "export const resources: Record<Locale, Messages> = ", |_| true);
    Output::Single(w.finish())
}

/// `<head>{ "en": {...}, ... };` for the locales accepted by `include`.
pub(super) fn write_resources(
    w: &mut TsWriter,
    decl: &Declarations<'_>,
    head: &str,
    include: impl Fn(&str) -> bool,
) {
    let locales: Vec<_> = decl
        .schema
        .locales
        .iter()
        .filter(|l| include(&l.locale))
        .collect();

    if locales.is_empty() {
        w.line(format!("{}{{}};", head));
        return;
    }

    w.open(format!("{}{{", head));
    for locale in locales {
        write_object(
            w,
            &format!("{}: ", string_literal(&locale.locale)),
            &locale.value,
            ",",
        );
    }
    w.close("};");
}
