// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer backends: explicit handles for the external libraries that draw diagrams.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::RendererId;

/// Renderer used when the preferred one is missing or still loading.
pub const FALLBACK_RENDERER: &str = "mermaid";

pub trait RendererBackend: Send + Sync {
    fn renderer_id(&self) -> &RendererId;

    /// Whether the backend finished loading and can render right now.
    fn is_available(&self) -> bool;
}

/// A backend whose availability is flipped by the loader.
#[derive(Debug)]
pub struct StaticBackend {
    renderer_id: RendererId,
    available: AtomicBool,
}

impl StaticBackend {
    pub fn new(renderer_id: RendererId, available: bool) -> Self {
        Self { renderer_id, available: AtomicBool::new(available) }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Release);
    }
}

impl RendererBackend for StaticBackend {
    fn renderer_id(&self) -> &RendererId {
        &self.renderer_id
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBackend {
    pub renderer_id: RendererId,
    /// `true` when the preferred renderer was skipped in favour of the fallback.
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    Unavailable { preferred: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { preferred } => write!(
                f,
                "renderer {preferred:?} is unavailable and the {FALLBACK_RENDERER} fallback is not loaded"
            ),
        }
    }
}

impl std::error::Error for BackendError {}

#[derive(Clone, Default)]
pub struct Backends {
    by_id: BTreeMap<RendererId, Arc<dyn RendererBackend>>,
}

impl fmt::Debug for Backends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.by_id.iter().map(|(id, backend)| (id.as_str(), backend.is_available())))
            .finish()
    }
}

impl Backends {
    pub fn new() -> Self {
        Self::default()
    }

    /// One [`StaticBackend`] per catalog renderer, all with the same initial availability.
    pub fn from_catalog(catalog: &Catalog, available: bool) -> Self {
        let mut backends = Self::new();
        for info in catalog.renderers() {
            backends.register(Arc::new(StaticBackend::new(info.id.clone(), available)));
        }
        backends
    }

    /// Registers `backend`, replacing any earlier backend with the same id.
    pub fn register(
        &mut self,
        backend: Arc<dyn RendererBackend>,
    ) -> Option<Arc<dyn RendererBackend>> {
        self.by_id.insert(backend.renderer_id().clone(), backend)
    }

    pub fn get(&self, renderer_id: &str) -> Option<&Arc<dyn RendererBackend>> {
        self.by_id.get(renderer_id)
    }

    pub fn is_available(&self, renderer_id: &str) -> bool {
        self.get(renderer_id).is_some_and(|backend| backend.is_available())
    }

    pub fn ids(&self) -> impl Iterator<Item = &RendererId> {
        self.by_id.keys()
    }

    pub fn resolve(&self, preferred: &str) -> Result<ResolvedBackend, BackendError> {
        if let Some(backend) = self.get(preferred).filter(|backend| backend.is_available()) {
            return Ok(ResolvedBackend {
                renderer_id: backend.renderer_id().clone(),
                fell_back: false,
            });
        }

        match self.get(FALLBACK_RENDERER).filter(|backend| backend.is_available()) {
            Some(backend) => {
                tracing::debug!(
                    preferred,
                    fallback = FALLBACK_RENDERER,
                    "renderer unavailable, falling back"
                );
                Ok(ResolvedBackend { renderer_id: backend.renderer_id().clone(), fell_back: true })
            }
            None => Err(BackendError::Unavailable { preferred: preferred.to_owned() }),
        }
    }
}
