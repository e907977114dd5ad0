// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sextant-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sextant and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Identifier types shared by the classifier, catalog and protocol surfaces.

pub mod ids;

pub use ids::{DiagramTypeId, Id, IdError, RendererId};
