//! Readers for locale message files.

pub mod json;
