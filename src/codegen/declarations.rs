//! Type declarations shared by every output shape.

use super::printer::{TsWriter, property_key, string_literal, string_union};
use crate::core::{Group, TypeDescriptor, unique_param_names};

pub const BANNER: &str = "// Generated by glotgen. Do not edit.";

/// Banner, `Locale`, `locales`, `Param` and `Messages`.
pub fn write_common(w: &mut TsWriter, canonical: &Group, locales: &[&str]) {
    w.line(BANNER);
    w.blank();
    w.line(format!(
        "export type Locale = {};",
        string_union(locales.iter().copied())
    ));
    w.blank();
    w.line(format!(
        "export const locales: readonly Locale[] = [{}];",
        locales
            .iter()
            .map(|l| string_literal(l))
            .collect::<Vec<_>>()
            .join(", ")
    ));
    w.blank();
    w.line("export type Param = string | number;");
    w.blank();
    write_messages_type(w, canonical);
}

pub fn write_messages_type(w: &mut TsWriter, canonical: &Group) {
    if canonical.is_empty() {
        w.line("export type Messages = {};");
        return;
    }
    w.open("export type Messages = {");
    write_type_members(w, canonical);
    w.close("};");
}

fn write_type_members(w: &mut TsWriter, group: &Group) {
    for (key, descriptor) in group.iter() {
        let key = property_key(key);
        match descriptor {
            TypeDescriptor::Text(_) => w.line(format!("{}: string;", key)),
            TypeDescriptor::Call(args) => w.line(format!(
                "{}: (args: {{ {} }}) => string;",
                key,
                unique_param_names(args)
                    .into_iter()
                    .map(|name| format!("{}: Param", property_key(name)))
                    .collect::<Vec<_>>()
                    .join("; ")
            )),
            TypeDescriptor::Group(nested) if nested.is_empty() => w.line(format!("{}: {{}};", key)),
            TypeDescriptor::Group(nested) => {
                w.open(format!("{}: {{", key));
                write_type_members(w, nested);
                w.close("};");
            }
        }
    }
}
