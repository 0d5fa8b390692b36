// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gemtext rendering.
//!
//! Renderers produce line-oriented gemtext. Link lines (`=> url label`) always start at
//! column 0; prose is reflowed last, by [`clamp`], which leaves structural lines alone.

pub mod document;
pub mod portal;
pub mod text;
pub mod thread;
pub mod wrap;

pub use document::{aggregates_line, DocumentRenderer, NOTE_NOT_FOUND};
pub use portal::{
    entity_portal_links, event_identifier, event_link_lines, event_portal_links, link_line,
    portal_links, PortalLink,
};
pub use text::{relative_timestamp, short_pubkey};
pub use thread::{render_thread, ThreadRenderer, HIDDEN_REPLIES_MARKER, THREAD_NOT_FOUND};
pub use wrap::clamp;
