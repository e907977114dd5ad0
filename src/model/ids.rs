// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smol_str::SmolStr;

/// A short, cheaply clonable identifier (diagram type ids, renderer ids).
///
/// Ids are compared byte-for-byte; `"Mermaid"` and `"mermaid"` are different renderers.
/// The only enforced shape is "non-empty, no whitespace", because ids are printed
/// one-per-line by the CLI and used as JSON object keys by the config loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl AsRef<str>) -> Result<Self, IdError> {
        let value = value.as_ref();
        validate_id(value)?;
        Ok(Self {
            value: SmolStr::new(value),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value.to_string()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> PartialEq<str> for Id<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T> PartialEq<&str> for Id<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsWhitespace => f.write_str("id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagramTypeIdTag {}
pub type DiagramTypeId = Id<DiagramTypeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RendererIdTag {}
pub type RendererId = Id<RendererIdTag>;

#[cfg(test)]
mod tests {
    use super::{DiagramTypeId, Id, IdError, RendererId};
    use std::collections::BTreeMap;

    #[test]
    fn id_rejects_empty() {
        let result: Result<Id<()>, _> = Id::new("");
        assert_eq!(result, Err(IdError::Empty));
    }

    #[test]
    fn id_rejects_whitespace() {
        let result: Result<Id<()>, _> = Id::new("state diagram");
        assert_eq!(result, Err(IdError::ContainsWhitespace));
        let result: Result<Id<()>, _> = Id::new("math\n");
        assert_eq!(result, Err(IdError::ContainsWhitespace));
    }

    #[test]
    fn id_compares_against_plain_strings() {
        let id = DiagramTypeId::new("flowchart").expect("type id");
        assert_eq!(id, "flowchart");
        assert_eq!(id.to_string(), "flowchart");
        assert_eq!(id.clone().into_string(), "flowchart".to_owned());
    }

    #[test]
    fn renderer_ids_can_be_looked_up_by_str() {
        let mut map = BTreeMap::new();
        map.insert(RendererId::new("graphviz").expect("renderer id"), 1u8);
        assert_eq!(map.get("graphviz"), Some(&1));
        assert_eq!(map.get("Graphviz"), None);
    }
}
