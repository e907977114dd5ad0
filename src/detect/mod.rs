// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram-type auto-detection.
//!
//! Given a source buffer and the renderer the user picked, [`Classifier::detect`] reports which
//! diagram grammar the text belongs to. Detection runs in two passes over an ordered pattern
//! table:
//!
//! 1. every anchored, case-insensitive signature regex that matches contributes a candidate
//!    with a flat score of [`SIGNATURE_SCORE`];
//! 2. only when no signature matched, every row scores [`KEYWORD_SCORE`] per keyword token
//!    contained in the text.
//!
//! Candidates are ranked by priority, then score, then table order. With no candidates at all
//! the renderer's default type is used. Detection is total: it never fails and never returns
//! an empty id.

mod defaults;
mod pattern;

use std::sync::OnceLock;

use smallvec::SmallVec;

use crate::config::ClassifierConfig;
use crate::model::DiagramTypeId;

pub use defaults::RendererDefaults;
pub use pattern::{DiagramTypePattern, Keyword};

/// Score given to every signature match; priority decides between them.
pub const SIGNATURE_SCORE: u32 = 100;

/// Score added per keyword token found during the keyword pass.
pub const KEYWORD_SCORE: u32 = 10;

/// Priority of table rows that declare no explicit priority.
pub const KEYWORD_ONLY_PRIORITY: u32 = 5;

/// Type reported for empty input, whatever the renderer.
pub const EMPTY_INPUT_TYPE: &str = "flowchart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectionSource {
    EmptyInput,
    Signature,
    Keywords,
    RendererDefault,
}

impl DetectionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::Signature => "signature",
            Self::Keywords => "keywords",
            Self::RendererDefault => "renderer_default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub type_id: DiagramTypeId,
    pub priority: u32,
    pub score: u32,
}

/// Outcome of a classification, including the ranked candidates that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub type_id: DiagramTypeId,
    pub source: DetectionSource,
    /// Ranked best-first. Empty for [`DetectionSource::EmptyInput`] and
    /// [`DetectionSource::RendererDefault`].
    pub candidates: SmallVec<[Candidate; 4]>,
}

/// Immutable classifier built from a validated [`ClassifierConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    patterns: Vec<DiagramTypePattern>,
    defaults: RendererDefaults,
    empty_input_type: DiagramTypeId,
}

static BUILTIN: OnceLock<Classifier> = OnceLock::new();

impl Classifier {
    pub(crate) fn new(
        patterns: Vec<DiagramTypePattern>,
        defaults: RendererDefaults,
        empty_input_type: DiagramTypeId,
    ) -> Self {
        Self {
            patterns,
            defaults,
            empty_input_type,
        }
    }

    /// Process-wide classifier over the built-in pattern table.
    pub fn builtin() -> &'static Classifier {
        BUILTIN.get_or_init(|| {
            ClassifierConfig::builtin()
                .compile()
                .expect("built-in classifier table is valid")
        })
    }

    pub fn patterns(&self) -> &[DiagramTypePattern] {
        &self.patterns
    }

    pub fn renderer_defaults(&self) -> &RendererDefaults {
        &self.defaults
    }

    pub fn detect(&self, text: &str, preferred_renderer: &str) -> DiagramTypeId {
        self.explain(text, preferred_renderer).type_id
    }

    /// Like [`Classifier::detect`], treating a missing buffer as empty input.
    pub fn detect_opt(&self, text: Option<&str>, preferred_renderer: &str) -> DiagramTypeId {
        self.detect(text.unwrap_or_default(), preferred_renderer)
    }

    pub fn explain(&self, text: &str, preferred_renderer: &str) -> Detection {
        if text.is_empty() {
            return Detection {
                type_id: self.empty_input_type.clone(),
                source: DetectionSource::EmptyInput,
                candidates: SmallVec::new(),
            };
        }

        let mut source = DetectionSource::Signature;
        let mut candidates = self.signature_candidates(text);
        if candidates.is_empty() {
            source = DetectionSource::Keywords;
            candidates = self.keyword_candidates(text);
        }

        if candidates.is_empty() {
            return Detection {
                type_id: self.defaults.resolve(preferred_renderer).clone(),
                source: DetectionSource::RendererDefault,
                candidates,
            };
        }

        // `sort_by` is stable, so equal (priority, score) keep table order.
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.score.cmp(&a.score)));

        Detection {
            type_id: candidates[0].type_id.clone(),
            source,
            candidates,
        }
    }

    fn signature_candidates(&self, text: &str) -> SmallVec<[Candidate; 4]> {
        self.patterns
            .iter()
            .filter(|pattern| pattern.signature_matches(text))
            .map(|pattern| Candidate {
                type_id: pattern.type_id().clone(),
                priority: pattern.priority(),
                score: SIGNATURE_SCORE,
            })
            .collect()
    }

    fn keyword_candidates(&self, text: &str) -> SmallVec<[Candidate; 4]> {
        self.patterns
            .iter()
            .filter_map(|pattern| {
                let score = pattern.keyword_hits(text).saturating_mul(KEYWORD_SCORE);
                (score > 0).then(|| Candidate {
                    type_id: pattern.type_id().clone(),
                    priority: pattern.priority(),
                    score,
                })
            })
            .collect()
    }
}

/// Classify `text` with the built-in classifier.
pub fn detect(text: &str, preferred_renderer: &str) -> DiagramTypeId {
    Classifier::builtin().detect(text, preferred_renderer)
}

/// Explain a classification made with the built-in classifier.
pub fn explain(text: &str, preferred_renderer: &str) -> Detection {
    Classifier::builtin().explain(text, preferred_renderer)
}

#[cfg(test)]
mod tests;
