// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{DiagramTypeId, RendererId};

/// Diagram type to report when neither the signature nor the keyword pass found anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererDefaults {
    by_renderer: BTreeMap<RendererId, DiagramTypeId>,
    fallback: DiagramTypeId,
}

impl RendererDefaults {
    pub(crate) fn new(
        by_renderer: BTreeMap<RendererId, DiagramTypeId>,
        fallback: DiagramTypeId,
    ) -> Self {
        Self { by_renderer, fallback }
    }

    /// Default for `renderer`, or the fallback type for renderers not in the map.
    pub fn resolve(&self, renderer: &str) -> &DiagramTypeId {
        self.by_renderer.get(renderer).unwrap_or(&self.fallback)
    }

    pub fn get(&self, renderer: &str) -> Option<&DiagramTypeId> {
        self.by_renderer.get(renderer)
    }

    pub fn fallback(&self) -> &DiagramTypeId {
        &self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RendererId, &DiagramTypeId)> {
        self.by_renderer.iter()
    }
}
