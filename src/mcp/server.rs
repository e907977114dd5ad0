// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};

use crate::catalog::Catalog;
use crate::detect::{Classifier, Detection};
use crate::lint::lint;
use crate::templates::template_for;

use super::types::*;

const DEFAULT_RENDERER: &str = "mermaid";

#[derive(Clone)]
pub struct SextantMcp {
    classifier: Arc<Classifier>,
    catalog: Arc<Catalog>,
    tool_router: ToolRouter<Self>,
}

impl Default for SextantMcp {
    fn default() -> Self {
        Self::new(Classifier::builtin().clone())
    }
}

#[tool_router]
impl SextantMcp {
    pub fn new(classifier: Classifier) -> Self {
        Self::new_with_catalog(classifier, Catalog::builtin().clone())
    }

    pub fn new_with_catalog(classifier: Classifier, catalog: Catalog) -> Self {
        Self {
            classifier: Arc::new(classifier),
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    fn explain_params(&self, params: &DetectParams) -> (String, Detection) {
        let renderer = params.renderer.as_deref().unwrap_or(DEFAULT_RENDERER).to_owned();
        let text = params.text.as_deref().unwrap_or_default();
        let detection = self.classifier.explain(text, &renderer);
        tracing::trace!(
            renderer = renderer.as_str(),
            type_id = %detection.type_id,
            "classified via mcp"
        );
        (renderer, detection)
    }

    /// Classify diagram source and return the diagram type id (e.g. `sequence`, `digraph`).
    /// Never fails; unrecognised text yields the preferred renderer's default type.
    #[tool(name = "diagram_type.detect")]
    async fn diagram_type_detect(
        &self,
        params: Parameters<DetectParams>,
    ) -> Result<Json<DetectResponse>, ErrorData> {
        let (renderer, detection) = self.explain_params(&params.0);
        Ok(Json(DetectResponse { type_id: detection.type_id.into_string(), renderer }))
    }

    /// Like `diagram_type.detect`, but also report which pass decided and the ranked
    /// candidates with their priority and score.
    #[tool(name = "diagram_type.explain")]
    async fn diagram_type_explain(
        &self,
        params: Parameters<DetectParams>,
    ) -> Result<Json<ExplainResponse>, ErrorData> {
        let (renderer, detection) = self.explain_params(&params.0);
        let candidates = detection
            .candidates
            .iter()
            .map(|candidate| CandidateSummary {
                type_id: candidate.type_id.as_str().to_owned(),
                priority: candidate.priority,
                score: candidate.score,
            })
            .collect::<Vec<_>>();

        Ok(Json(ExplainResponse {
            type_id: detection.type_id.into_string(),
            renderer,
            source: detection.source.as_str().to_owned(),
            candidates,
        }))
    }

    /// List known renderers with their supported diagram types and fallback type.
    #[tool(name = "renderer.list")]
    async fn renderer_list(&self) -> Result<Json<ListRenderersResponse>, ErrorData> {
        let defaults = self.classifier.renderer_defaults();
        let renderers = self
            .catalog
            .renderers()
            .iter()
            .map(|info| RendererSummary {
                renderer_id: info.id.as_str().to_owned(),
                display_name: info.display_name.clone(),
                default_type: defaults.resolve(info.id.as_str()).as_str().to_owned(),
                supported_types: info
                    .supported_types
                    .iter()
                    .map(|ty| DiagramTypeSummary {
                        type_id: ty.id.as_str().to_owned(),
                        name: ty.name.clone(),
                        description: ty.description.clone(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        Ok(Json(ListRenderersResponse { renderers }))
    }

    /// Starter source for a renderer and diagram type; use `renderer.list` for valid pairs.
    #[tool(name = "template.get")]
    async fn template_get(
        &self,
        params: Parameters<TemplateGetParams>,
    ) -> Result<Json<TemplateGetResponse>, ErrorData> {
        let TemplateGetParams { renderer, type_id } = params.0;

        let Some(template) = template_for(&renderer, &type_id) else {
            let hint = self
                .catalog
                .suggest_renderer(&renderer)
                .map(|suggestion| format!(" (did you mean renderer {:?}?)", suggestion.as_str()))
                .unwrap_or_default();
            return Err(ErrorData::invalid_params(
                format!("no template for renderer {renderer:?} and type {type_id:?}{hint}"),
                None,
            ));
        };

        Ok(Json(TemplateGetResponse { renderer, type_id, template: template.to_owned() }))
    }

    /// Check diagram source for problems renderers reject (e.g. CJK entity names in
    /// `erDiagram`). `ok` is true when no issues were found.
    #[tool(name = "source.lint")]
    async fn source_lint(
        &self,
        params: Parameters<SourceLintParams>,
    ) -> Result<Json<SourceLintResponse>, ErrorData> {
        let issues = lint(&params.0.text)
            .into_iter()
            .map(|issue| LintIssueSummary {
                code: issue.code.as_str().to_owned(),
                line: issue.line as u64,
                message: issue.message,
            })
            .collect::<Vec<_>>();

        Ok(Json(SourceLintResponse { ok: issues.is_empty(), issues }))
    }
}

#[tool_handler]
impl ServerHandler for SextantMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Sextant diagram-type detection server (tools: diagram_type.detect, diagram_type.explain, renderer.list, template.get, source.lint)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
