// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cross-reference identifier formats.
//!
//! `nip19` is the bech32 codec for the five identifier variants; `scan` finds
//! `nostr:`-prefixed references in prose.

pub mod nip19;
pub mod scan;

pub use nip19::{decode, encode, parse_event_id, parse_pubkey, Nip19Error};
pub use scan::{scan, scan_references, ReferenceMatch};
