// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic diagram sources sized for classification benchmarks.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Short source decided by a signature.
    SignatureSmall,
    /// Signature that has to scan past a long `@startuml` preamble.
    PlantumlLate,
    /// Headerless source that falls through to the keyword pass.
    KeywordsMedium,
    /// Large text nothing recognises.
    NoMatchLarge,
}

impl Case {
    pub const ALL: [Case; 4] =
        [Case::SignatureSmall, Case::PlantumlLate, Case::KeywordsMedium, Case::NoMatchLarge];

    pub fn id(self) -> &'static str {
        match self {
            Case::SignatureSmall => "signature_small",
            Case::PlantumlLate => "plantuml_late",
            Case::KeywordsMedium => "keywords_medium",
            Case::NoMatchLarge => "no_match_large",
        }
    }

    pub fn renderer(self) -> &'static str {
        match self {
            Case::PlantumlLate => "plantuml",
            Case::NoMatchLarge => "graphviz",
            _ => "mermaid",
        }
    }
}

pub fn source(case: Case) -> String {
    let mut out = String::new();
    match case {
        Case::SignatureSmall => {
            out.push_str("sequenceDiagram\n");
            for i in 0..8 {
                let _ = writeln!(out, "    A{i}->>B{i}: message {i}");
            }
        }
        Case::PlantumlLate => {
            out.push_str("@startuml\n");
            for i in 0..400 {
                let _ = writeln!(out, "Bob{i} -> Alice{i} : hello {i}");
            }
            out.push_str("component Billing\n@enduml\n");
        }
        Case::KeywordsMedium => {
            for i in 0..200 {
                let _ = writeln!(out, "N{i} --> N{} : step {i}", i + 1);
            }
            out.push_str("note right of N0: done\n");
        }
        Case::NoMatchLarge => {
            for i in 0..5_000 {
                let _ = writeln!(out, "lorem ipsum dolor sit amet {i}");
            }
        }
    }
    out
}
