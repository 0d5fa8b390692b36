// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;
use std::sync::OnceLock;

use memchr::memmem;
use regex::Regex;

use crate::model::SCHEME_PREFIX;

/// Scheme prefix, one of the five identifier prefixes, then a bech32 body.
const REFERENCE_PATTERN: &str = r"nostr:((?:npub|nprofile|note|nevent|naddr)1[02-9ac-hj-np-z]+)";

static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();

fn reference_re() -> &'static Regex {
    REFERENCE_RE.get_or_init(|| Regex::new(REFERENCE_PATTERN).expect("reference pattern is valid"))
}

/// One scheme-prefixed reference found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch<'a> {
    /// Byte range of the full match, scheme prefix included.
    pub span: Range<usize>,
    /// The bare identifier, scheme prefix stripped.
    pub token: &'a str,
}

impl<'a> ReferenceMatch<'a> {
    pub fn original_text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.span.clone()]
    }
}

/// All references in `text`, in order, duplicates retained.
///
/// Only the shape is checked here; bodies with a bad checksum still match and are
/// left for the resolver to reject.
pub fn scan_references(text: &str) -> Vec<ReferenceMatch<'_>> {
    if memmem::find(text.as_bytes(), SCHEME_PREFIX.as_bytes()).is_none() {
        return Vec::new();
    }
    reference_re()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let token = caps.get(1)?;
            Some(ReferenceMatch { span: whole.range(), token: token.as_str() })
        })
        .collect()
}

/// Bare identifier tokens in `text`, in order, duplicates retained.
pub fn scan(text: &str) -> Vec<&str> {
    scan_references(text).into_iter().map(|m| m.token).collect()
}
