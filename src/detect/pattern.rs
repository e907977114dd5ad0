// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memmem;
use regex::Regex;

use crate::model::DiagramTypeId;

/// A substring token counted by the keyword pass.
///
/// Matching is case-sensitive byte containment (`"Note"` does not match `note`).
#[derive(Debug, Clone)]
pub struct Keyword {
    token: String,
    finder: memmem::Finder<'static>,
}

impl Keyword {
    /// Callers must reject empty tokens; an empty needle is found in every haystack.
    pub(crate) fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let finder = memmem::Finder::new(token.as_bytes()).into_owned();
        Self { token, finder }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_present_in(&self, text: &str) -> bool {
        self.finder.find(text.as_bytes()).is_some()
    }
}

/// One row of the classifier's pattern table.
///
/// A row without a signature only takes part in the keyword pass.
#[derive(Debug, Clone)]
pub struct DiagramTypePattern {
    type_id: DiagramTypeId,
    signature: Option<Regex>,
    priority: u32,
    keywords: Vec<Keyword>,
}

impl DiagramTypePattern {
    pub(crate) fn new(
        type_id: DiagramTypeId,
        signature: Option<Regex>,
        priority: u32,
        keywords: Vec<Keyword>,
    ) -> Self {
        Self {
            type_id,
            signature,
            priority,
            keywords,
        }
    }

    pub fn type_id(&self) -> &DiagramTypeId {
        &self.type_id
    }

    pub fn signature(&self) -> Option<&Regex> {
        self.signature.as_ref()
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn signature_matches(&self, text: &str) -> bool {
        self.signature.as_ref().is_some_and(|signature| signature.is_match(text))
    }

    /// Number of keyword entries present in `text`. Repeated entries count once each.
    pub fn keyword_hits(&self, text: &str) -> u32 {
        self.keywords
            .iter()
            .filter(|keyword| keyword.is_present_in(text))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagramTypePattern, Keyword};
    use crate::model::DiagramTypeId;
    use regex::RegexBuilder;

    fn pattern(signature: Option<&str>, keywords: &[&str]) -> DiagramTypePattern {
        let signature = signature.map(|source| {
            RegexBuilder::new(source).case_insensitive(true).build().expect("signature")
        });
        DiagramTypePattern::new(
            DiagramTypeId::new("t").expect("type id"),
            signature,
            5,
            keywords.iter().map(|token| Keyword::new(*token)).collect(),
        )
    }

    #[test]
    fn keyword_matching_is_case_sensitive() {
        let keyword = Keyword::new("participant");
        assert!(keyword.is_present_in("  participant Alice"));
        assert!(!keyword.is_present_in("Participant Alice"));
    }

    #[test]
    fn keyword_hits_count_repeated_entries() {
        let row = pattern(None, &["-->", "-->", "-.->"]);
        assert_eq!(row.keyword_hits("A --> B"), 2);
        assert_eq!(row.keyword_hits("A -.-> B"), 1);
        assert_eq!(row.keyword_hits("A --- B"), 0);
    }

    #[test]
    fn rows_without_signature_never_match_the_signature_pass() {
        let row = pattern(None, &["node"]);
        assert!(!row.signature_matches("node"));
    }

    #[test]
    fn signature_is_case_insensitive_and_anchored_to_the_start() {
        let row = pattern(Some(r"^\s*gantt"), &[]);
        assert!(row.signature_matches("\n  GANTT\n title x"));
        assert!(!row.signature_matches("title x\ngantt"));
    }
}
