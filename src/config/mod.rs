// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Classifier configuration.
//!
//! The pattern table and renderer defaults are plain data that can be loaded from JSON,
//! validated, and compiled into an immutable [`Classifier`]. The built-in table lives in
//! [`ClassifierConfig::builtin`].

mod builtin;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::detect::{
    Classifier, DiagramTypePattern, Keyword, RendererDefaults, EMPTY_INPUT_TYPE,
    KEYWORD_ONLY_PRIORITY,
};
use crate::model::{DiagramTypeId, IdError, RendererId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Table rows in registration order; earlier rows win exact ties.
    pub patterns: Vec<PatternConfig>,
    #[serde(default)]
    pub renderer_defaults: BTreeMap<String, String>,
    /// Type reported for renderers missing from `renderer_defaults`.
    #[serde(default = "default_fallback_type")]
    pub fallback_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    pub type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

fn default_fallback_type() -> String {
    EMPTY_INPUT_TYPE.to_owned()
}

impl ClassifierConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = ?path, patterns = config.patterns.len(), "loaded classifier config");
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Json { path: None, source })
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate the configuration and build a classifier from it.
    ///
    /// Renderer defaults may name any type that is either in the pattern table or supported
    /// by some renderer in the built-in catalog.
    pub fn compile(&self) -> Result<Classifier, ConfigError> {
        let mut seen = BTreeSet::new();
        let mut patterns = Vec::with_capacity(self.patterns.len());

        for row in &self.patterns {
            let type_id = parse_type_id("patterns.type_id", &row.type_id)?;
            if !seen.insert(type_id.clone()) {
                return Err(ConfigError::DuplicateType { type_id });
            }
            if row.signature.is_none() && row.keywords.is_empty() {
                return Err(ConfigError::InertPattern { type_id });
            }

            let signature = match row.signature.as_deref() {
                None => None,
                Some(source) => {
                    if !source.starts_with('^') {
                        return Err(ConfigError::UnanchoredSignature {
                            type_id,
                            signature: source.to_owned(),
                        });
                    }
                    let regex = RegexBuilder::new(source)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| ConfigError::InvalidSignature {
                            type_id: type_id.clone(),
                            source: Box::new(source),
                        })?;
                    Some(regex)
                }
            };

            if row.keywords.iter().any(|token| token.is_empty()) {
                return Err(ConfigError::EmptyKeyword { type_id });
            }
            let keywords = row.keywords.iter().map(|token| Keyword::new(token.as_str())).collect();
            let priority = row.priority.unwrap_or(KEYWORD_ONLY_PRIORITY);

            patterns.push(DiagramTypePattern::new(type_id, signature, priority, keywords));
        }

        let catalog = Catalog::builtin();
        let is_known = |type_id: &DiagramTypeId| {
            seen.contains(type_id) || catalog.known_type(type_id.as_str())
        };

        let mut by_renderer = BTreeMap::new();
        for (renderer, type_id) in &self.renderer_defaults {
            let renderer = RendererId::new(renderer).map_err(|source| ConfigError::InvalidId {
                field: "renderer_defaults",
                value: renderer.clone(),
                source,
            })?;
            let type_id = parse_type_id("renderer_defaults", type_id)?;
            if !is_known(&type_id) {
                return Err(ConfigError::UnknownDefaultType {
                    renderer: Some(renderer),
                    type_id,
                });
            }
            by_renderer.insert(renderer, type_id);
        }

        let fallback = parse_type_id("fallback_type", &self.fallback_type)?;
        if !is_known(&fallback) {
            return Err(ConfigError::UnknownDefaultType {
                renderer: None,
                type_id: fallback,
            });
        }

        let empty_input_type = parse_type_id("empty_input_type", EMPTY_INPUT_TYPE)?;

        Ok(Classifier::new(
            patterns,
            RendererDefaults::new(by_renderer, fallback),
            empty_input_type,
        ))
    }
}

fn parse_type_id(field: &'static str, value: &str) -> Result<DiagramTypeId, ConfigError> {
    DiagramTypeId::new(value).map_err(|source| ConfigError::InvalidId {
        field,
        value: value.to_owned(),
        source,
    })
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    DuplicateType {
        type_id: DiagramTypeId,
    },
    InertPattern {
        type_id: DiagramTypeId,
    },
    UnanchoredSignature {
        type_id: DiagramTypeId,
        signature: String,
    },
    InvalidSignature {
        type_id: DiagramTypeId,
        source: Box<regex::Error>,
    },
    EmptyKeyword {
        type_id: DiagramTypeId,
    },
    UnknownDefaultType {
        renderer: Option<RendererId>,
        type_id: DiagramTypeId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json {
                path: Some(path),
                source,
            } => write!(f, "json error at {path:?}: {source}"),
            Self::Json { path: None, source } => write!(f, "json error: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::DuplicateType { type_id } => {
                write!(f, "diagram type {type_id} is registered more than once")
            }
            Self::InertPattern { type_id } => {
                write!(f, "diagram type {type_id} has neither a signature nor keywords")
            }
            Self::UnanchoredSignature { type_id, signature } => write!(
                f,
                "signature for {type_id} must be anchored at the start with '^': {signature:?}"
            ),
            Self::InvalidSignature { type_id, source } => {
                write!(f, "invalid signature regex for {type_id}: {source}")
            }
            Self::EmptyKeyword { type_id } => {
                write!(f, "diagram type {type_id} has an empty keyword token")
            }
            Self::UnknownDefaultType {
                renderer: Some(renderer),
                type_id,
            } => write!(
                f,
                "default type {type_id} for renderer {renderer} is not a known diagram type"
            ),
            Self::UnknownDefaultType {
                renderer: None,
                type_id,
            } => write!(f, "fallback type {type_id} is not a known diagram type"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidSignature { source, .. } => Some(source.as_ref()),
            Self::DuplicateType { .. }
            | Self::InertPattern { .. }
            | Self::UnanchoredSignature { .. }
            | Self::EmptyKeyword { .. }
            | Self::UnknownDefaultType { .. } => None,
        }
    }
}
