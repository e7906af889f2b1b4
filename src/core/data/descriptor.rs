use std::fmt;

use indexmap::IndexMap;

/// One piece of a parameterized message.
///
/// `"Hello {name}!"` becomes `[Literal("Hello "), Param("name"), Literal("!")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Fixed text between placeholders. Not part of the signature.
    Literal(String),
    /// A named placeholder.
    Param(String),
}

/// Shape of a locale's message tree.
///
/// Only the variant matters when locales are compared; the payloads are kept
/// so a locale tree can still be printed as literal values later on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A plain message: `"submit": "Submit"`
    Text(String),
    /// A message with placeholders: `"welcome": "Hello {name}"`
    Call(Vec<Arg>),
    /// A nested namespace: `"nav": { "home": "Home" }`
    Group(Group),
}

/// Variant tag of a [`TypeDescriptor`], used for shape comparison and
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Text,
    Call,
    Group,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Text => write!(f, "text"),
            Kind::Call => write!(f, "parameterized text"),
            Kind::Group => write!(f, "group"),
        }
    }
}

impl TypeDescriptor {
    pub fn kind(&self) -> Kind {
        match self {
            TypeDescriptor::Text(_) => Kind::Text,
            TypeDescriptor::Call(_) => Kind::Call,
            TypeDescriptor::Group(_) => Kind::Group,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            TypeDescriptor::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// Names of the placeholders in `args`, in order, duplicates included.
pub fn param_names(args: &[Arg]) -> Vec<&str> {
    args.iter()
        .filter_map(|arg| match arg {
            Arg::Param(name) => Some(name.as_str()),
            Arg::Literal(_) => None,
        })
        .collect()
}

/// Placeholder names with duplicates removed, first occurrence wins.
pub fn unique_param_names(args: &[Arg]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for name in param_names(args) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// An ordered mapping from key to descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    entries: IndexMap<String, TypeDescriptor>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, descriptor: TypeDescriptor) {
        self.entries.insert(key.into(), descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&TypeDescriptor> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TypeDescriptor> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut TypeDescriptor)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaf messages in this group and every nested group.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|descriptor| match descriptor {
                TypeDescriptor::Group(group) => group.leaf_count(),
                _ => 1,
            })
            .sum()
    }
}

impl FromIterator<(String, TypeDescriptor)> for Group {
    fn from_iter<I: IntoIterator<Item = (String, TypeDescriptor)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A value tagged with the locale it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue<T> {
    pub locale: String,
    pub value: T,
}

impl<T> NamedValue<T> {
    pub fn new(locale: impl Into<String>, value: T) -> Self {
        Self {
            locale: locale.into(),
            value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NamedValue<U> {
        NamedValue {
            locale: self.locale,
            value: f(self.value),
        }
    }
}
