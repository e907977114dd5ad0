// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source checks that run before a diagram is handed to a renderer.

use std::fmt;
use std::ops::RangeInclusive;

/// CJK Unified Ideographs accepted by the Mermaid ER grammar only inside quoted labels.
const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// An `erDiagram` source that names entities with CJK ideographs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErEntityNameError {
    line: usize,
    content: String,
}

impl ErEntityNameError {
    /// 1-based line number of the first offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for ErEntityNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ER entity names must be ASCII identifiers such as CUSTOMER or LINE_ITEM (line {}: {:?}); \
             use underscores instead of CJK characters and English verb phrases for relationship labels",
            self.line, self.content
        )
    }
}

impl std::error::Error for ErEntityNameError {}

pub fn check_er_entity_names(text: &str) -> Result<(), ErEntityNameError> {
    if !text.contains("erDiagram") {
        return Ok(());
    }

    let offending = text
        .lines()
        .enumerate()
        .find(|(_, line)| line.chars().any(|ch| CJK_IDEOGRAPHS.contains(&ch)));

    match offending {
        Some((index, line)) => Err(ErEntityNameError {
            line: index + 1,
            content: line.trim().to_owned(),
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintCode {
    ErEntityName,
}

impl LintCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ErEntityName => "er_entity_name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub code: LintCode,
    pub line: usize,
    pub message: String,
}

/// Run every source check; an empty result means the source may be rendered.
pub fn lint(text: &str) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    if let Err(err) = check_er_entity_names(text) {
        issues.push(LintIssue {
            code: LintCode::ErEntityName,
            line: err.line(),
            message: err.to_string(),
        });
    }
    issues
}
