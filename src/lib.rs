// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sextant: diagram-type auto-detection for text-based diagram languages.
//!
//! [`detect::detect`] maps raw source (Mermaid, PlantUML, Graphviz DOT, TeX math) plus a
//! preferred renderer id to a diagram type id. The surrounding modules cover what an editor
//! needs around that call: a renderer catalog, starter templates, source checks, renderer
//! backend resolution and an MCP server.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod generate;
pub mod lint;
pub mod mcp;
pub mod model;
pub mod retry;
pub mod templates;
