// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer catalog: which external renderers exist and which diagram types each supports.

use std::sync::OnceLock;

use crate::model::{DiagramTypeId, RendererId};

/// Minimum fuzzy ratio (0..=1) for [`Catalog::suggest_renderer`] to offer a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramTypeInfo {
    pub id: DiagramTypeId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInfo {
    pub id: RendererId,
    pub display_name: String,
    pub supported_types: Vec<DiagramTypeInfo>,
}

impl RendererInfo {
    pub fn supports(&self, type_id: &str) -> bool {
        self.supported_types.iter().any(|info| info.id == type_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    renderers: Vec<RendererInfo>,
}

const FLOWCHART: (&str, &str, &str) =
    ("flowchart", "Flowchart", "Business processes and step-by-step procedures");
const SEQUENCE: (&str, &str, &str) =
    ("sequence", "Sequence diagram", "Interactions between system components over time");
const STATE: (&str, &str, &str) =
    ("state", "State diagram", "States and the transitions between them");
const CLASS: (&str, &str, &str) = ("class", "Class diagram", "Classes and their relationships");

const BUILTIN_RENDERERS: &[(&str, &str, &[(&str, &str, &str)])] = &[
    (
        "mermaid",
        "Mermaid",
        &[
            FLOWCHART,
            SEQUENCE,
            STATE,
            CLASS,
            ("gantt", "Gantt chart", "Project schedules and time planning"),
            ("pie", "Pie chart", "Proportional data visualisation"),
            ("er", "ER diagram", "Entities and their relationships"),
            ("journey", "User journey", "Steps of a user experience"),
        ],
    ),
    (
        "plantuml",
        "PlantUML",
        &[
            CLASS,
            SEQUENCE,
            ("usecase", "Use case diagram", "Interactions between actors and the system"),
            ("activity", "Activity diagram", "Control flow of an activity"),
            ("component", "Component diagram", "System components and their interfaces"),
            STATE,
        ],
    ),
    (
        "graphviz",
        "Graphviz",
        &[
            ("digraph", "Directed graph", "Directed relationships"),
            ("graph", "Undirected graph", "Undirected relationships"),
            ("strict", "Strict graph", "Graphs without multi-edges"),
        ],
    ),
    ("mathjax", "MathJax", &[("math", "Math formula", "Mathematical expressions")]),
    (
        "flowchartjs",
        "Flowchart.js",
        &[("flowchart", "Simple flowchart", "Simple linear processes")],
    ),
];

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    pub fn new(renderers: Vec<RendererInfo>) -> Self {
        Self { renderers }
    }

    /// The renderers the tool ships with, in display order.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let renderers = BUILTIN_RENDERERS
                .iter()
                .map(|(id, display_name, types)| RendererInfo {
                    id: RendererId::new(id).expect("valid builtin renderer id"),
                    display_name: (*display_name).to_owned(),
                    supported_types: types
                        .iter()
                        .map(|(id, name, description)| DiagramTypeInfo {
                            id: DiagramTypeId::new(id).expect("valid builtin type id"),
                            name: (*name).to_owned(),
                            description: (*description).to_owned(),
                        })
                        .collect(),
                })
                .collect();
            Catalog::new(renderers)
        })
    }

    pub fn renderers(&self) -> &[RendererInfo] {
        &self.renderers
    }

    pub fn renderer(&self, renderer_id: &str) -> Option<&RendererInfo> {
        self.renderers.iter().find(|info| info.id == renderer_id)
    }

    /// Human-readable renderer name; unknown ids are shown as-is.
    pub fn display_name<'a>(&'a self, renderer_id: &'a str) -> &'a str {
        self.renderer(renderer_id).map(|info| info.display_name.as_str()).unwrap_or(renderer_id)
    }

    pub fn supports(&self, renderer_id: &str, type_id: &str) -> bool {
        self.renderer(renderer_id).is_some_and(|info| info.supports(type_id))
    }

    /// Whether any renderer supports `type_id`.
    pub fn known_type(&self, type_id: &str) -> bool {
        self.renderers.iter().any(|info| info.supports(type_id))
    }

    pub fn type_info(&self, renderer_id: &str, type_id: &str) -> Option<&DiagramTypeInfo> {
        self.renderer(renderer_id)?.supported_types.iter().find(|info| info.id == type_id)
    }

    /// Closest known renderer id for a mistyped one, e.g. `"graphvis"` -> `graphviz`.
    ///
    /// Comparison is case-insensitive. Exact (case-sensitive) matches return `None`, there is
    /// nothing to suggest.
    pub fn suggest_renderer(&self, input: &str) -> Option<&RendererId> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() || self.renderer(input).is_some() {
            return None;
        }

        self.renderers
            .iter()
            .map(|info| {
                let haystack = info.id.as_str().to_lowercase();
                let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
                (ratio, &info.id)
            })
            .filter(|(ratio, _)| *ratio >= SUGGESTION_THRESHOLD)
            .fold(None, |best: Option<(f64, &RendererId)>, (ratio, id)| match best {
                Some((best_ratio, _)) if best_ratio >= ratio => best,
                _ => Some((ratio, id)),
            })
            .map(|(_, id)| id)
    }
}
