// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gemstr: renders Nostr events as Gemtext.
//!
//! The pipeline scans prose for `nostr:` references, resolves each one to a display
//! name and link through an [`store::EventStore`], renders reply trees with bounded
//! depth, and finally reflows prose to a fixed width while leaving gemtext structure
//! untouched. Rendering is total: failed lookups degrade to fallback labels.
//!
//! ```
//! use gemstr::config::RenderConfig;
//! use gemstr::render::DocumentRenderer;
//! use gemstr::store::{LookupContext, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let ctx = LookupContext::background();
//! let config = RenderConfig::default();
//! let page = DocumentRenderer::new(&ctx, &store, &config).expand_page("plain text");
//! assert_eq!(page, "plain text");
//! ```

pub mod config;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod resolve;
pub mod store;
