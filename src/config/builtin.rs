// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::{ClassifierConfig, PatternConfig};
use crate::detect::EMPTY_INPUT_TYPE;

/// `(type_id, signature, priority, keywords)` in registration order.
///
/// Mermaid keywords open the document, so their rows outrank the PlantUML rows that share an
/// `@startuml` preamble and the DOT/TeX rows.
///
/// Leading whitespace includes a byte-order mark, and word boundaries and identifier
/// characters are ASCII-only, so a signature never hinges on non-ASCII letters.
const BUILTIN_PATTERNS: &[(&str, Option<&str>, u32, &[&str])] = &[
    // Mermaid
    (
        "flowchart",
        Some(r"^[\s\x{FEFF}]*(graph|flowchart)\s+(TD|BT|RL|LR|TB)"),
        10,
        // `-->` is listed twice: plain arrows count double for flowcharts.
        &["-->", "-->", "-->|", "-.->"],
    ),
    (
        "sequence",
        Some(r"^[\s\x{FEFF}]*sequenceDiagram"),
        10,
        &["->>", "-->>", "->", "note", "participant", "actor"],
    ),
    ("state", Some(r"^[\s\x{FEFF}]*stateDiagram(-v2)?"), 10, &["state", "[*]", "-->", "note"]),
    ("class", Some(r"^[\s\x{FEFF}]*classDiagram(-v2)?"), 10, &["class", "<|--", "*--", "o--"]),
    (
        "gantt",
        Some(r"^[\s\x{FEFF}]*gantt"),
        10,
        &["section", "dateFormat", "axisFormat", "title"],
    ),
    ("pie", Some(r"^[\s\x{FEFF}]*pie(\s+showData)?"), 10, &["title", "showData"]),
    ("er", Some(r"^[\s\x{FEFF}]*erDiagram"), 10, &["entity", "relationship", "||--o{"]),
    ("journey", Some(r"^[\s\x{FEFF}]*journey"), 10, &["section", "title", "task"]),
    // PlantUML
    (
        "usecase",
        Some(r"^[\s\x{FEFF}]*@startuml[\s\S]*?(?-u:\b)(usecase|actor)(?-u:\b)"),
        5,
        &["actor", "usecase", "-->"],
    ),
    (
        "activity",
        Some(concat!(
            r"^[\s\x{FEFF}]*@startuml[\s\S]*?",
            r"(?-u:\b)(start|\*\s*-->|partition|if|endif|fork|end fork)(?-u:\b)",
        )),
        5,
        &["start", "stop", "if", "then", "else"],
    ),
    (
        "component",
        Some(concat!(
            r"^[\s\x{FEFF}]*@startuml[\s\S]*?",
            r"(?-u:\b)(component|interface|package|node)(?-u:\b)",
        )),
        5,
        &["component", "interface", "[", "]"],
    ),
    // Graphviz
    (
        "digraph",
        Some(r"^[\s\x{FEFF}]*digraph\s+(?-u:\w)+\s*\{"),
        5,
        &["->", "node", "edge", "subgraph"],
    ),
    (
        "graph",
        Some(r"^[\s\x{FEFF}]*graph\s+(?-u:\w)+\s*\{"),
        5,
        &["--", "node", "edge", "subgraph"],
    ),
    ("strict", Some(r"^[\s\x{FEFF}]*strict\s+(digraph|graph)\s+(?-u:\w)+\s*\{"), 5, &[]),
    // MathJax
    (
        "math",
        Some(r"^[\s\x{FEFF}]*\\begin\{(equation|align|matrix|pmatrix|bmatrix|vmatrix)\}"),
        5,
        &[r"\frac", r"\sum", r"\int", r"\alpha", r"\beta"],
    ),
];

const BUILTIN_RENDERER_DEFAULTS: &[(&str, &str)] = &[
    ("mermaid", "flowchart"),
    ("plantuml", "sequence"),
    ("graphviz", "digraph"),
    ("mathjax", "math"),
    ("flowchartjs", "flowchart"),
];

impl ClassifierConfig {
    pub fn builtin() -> Self {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|(type_id, signature, priority, keywords)| PatternConfig {
                type_id: (*type_id).to_owned(),
                signature: signature.map(str::to_owned),
                priority: Some(*priority),
                keywords: keywords.iter().map(|token| (*token).to_owned()).collect(),
            })
            .collect();

        let renderer_defaults = BUILTIN_RENDERER_DEFAULTS
            .iter()
            .map(|(renderer, type_id)| ((*renderer).to_owned(), (*type_id).to_owned()))
            .collect::<BTreeMap<_, _>>();

        Self {
            patterns,
            renderer_defaults,
            fallback_type: EMPTY_INPUT_TYPE.to_owned(),
        }
    }
}
