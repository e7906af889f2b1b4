use super::declarations::write_common;
use super::printer::{TsWriter, string_literal};
use super::{Declarations, Output};

/// Only the shape and a loader contract; values come from the caller.
pub fn emit(decl: &Declarations<'_>) -> Output {
    let mut w = TsWriter::new();
    write_common(&mut w, &decl.schema.canonical, &decl.locale_names());
    w.blank();
    w.line(format!(
        "export const defaultLocale: Locale = {};",
        string_literal(decl.default_locale)
    ));
    w.blank();
    w.line("export type MessagesLoader = (locale: Locale) => Promise<Messages>;");
    Output::Single(w.finish())
}
