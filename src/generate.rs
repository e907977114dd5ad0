// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plans a render request: lint the source, classify it, pick the backend.
//!
//! The detected type is bookkeeping for the caller; it never changes which renderer is used.

use std::fmt;

use crate::backend::{BackendError, Backends};
use crate::detect::Classifier;
use crate::lint::{check_er_entity_names, ErEntityNameError};
use crate::model::{DiagramTypeId, RendererId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub diagram_type: DiagramTypeId,
    pub renderer_id: RendererId,
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    EmptyInput,
    Lint(ErEntityNameError),
    Backend(BackendError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("diagram source is empty"),
            Self::Lint(err) => write!(f, "{err}"),
            Self::Backend(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::Lint(err) => Some(err),
            Self::Backend(err) => Some(err),
        }
    }
}

impl From<ErEntityNameError> for GenerateError {
    fn from(err: ErEntityNameError) -> Self {
        Self::Lint(err)
    }
}

impl From<BackendError> for GenerateError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

pub fn plan(
    classifier: &Classifier,
    backends: &Backends,
    text: &str,
    preferred_renderer: &str,
) -> Result<GenerationPlan, GenerateError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerateError::EmptyInput);
    }
    check_er_entity_names(text)?;

    let diagram_type = classifier.detect(text, preferred_renderer);
    let resolved = backends.resolve(preferred_renderer)?;
    tracing::debug!(
        diagram_type = %diagram_type,
        renderer = %resolved.renderer_id,
        fell_back = resolved.fell_back,
        "planned generation"
    );

    Ok(GenerationPlan {
        diagram_type,
        renderer_id: resolved.renderer_id,
        fell_back: resolved.fell_back,
    })
}
