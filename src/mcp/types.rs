// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectParams {
    /// Diagram source; omitted or empty text classifies as `flowchart`.
    #[serde(default)]
    pub text: Option<String>,
    /// Preferred renderer id (defaults to `mermaid`).
    #[serde(default)]
    pub renderer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectResponse {
    pub type_id: String,
    pub renderer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CandidateSummary {
    pub type_id: String,
    pub priority: u32,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExplainResponse {
    pub type_id: String,
    pub renderer: String,
    /// One of `empty_input`, `signature`, `keywords`, `renderer_default`.
    pub source: String,
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagramTypeSummary {
    pub type_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RendererSummary {
    pub renderer_id: String,
    pub display_name: String,
    /// Type reported for unrecognised text when this renderer is preferred.
    pub default_type: String,
    pub supported_types: Vec<DiagramTypeSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListRenderersResponse {
    pub renderers: Vec<RendererSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateGetParams {
    pub renderer: String,
    pub type_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateGetResponse {
    pub renderer: String,
    pub type_id: String,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceLintParams {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintIssueSummary {
    pub code: String,
    /// 1-based.
    pub line: u64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SourceLintResponse {
    pub ok: bool,
    pub issues: Vec<LintIssueSummary>,
}
