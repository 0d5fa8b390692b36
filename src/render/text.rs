// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Utc};

const SHORT_PUBKEY_EDGE: usize = 8;

/// Keeps the first `max_len` chars and appends `marker` when anything was cut.
pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize, marker: &str) -> String {
    if text_len(text) <= max_len {
        return text.to_owned();
    }

    let mut out: String = text.chars().take(max_len).collect();
    out.push_str(marker);
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// `first8...last8`; keys of 16 chars or fewer are returned whole.
pub fn short_pubkey(pubkey: &str) -> String {
    let len = text_len(pubkey);
    if len <= SHORT_PUBKEY_EDGE * 2 {
        return pubkey.to_owned();
    }
    let head: String = pubkey.chars().take(SHORT_PUBKEY_EDGE).collect();
    let tail: String = pubkey.chars().skip(len - SHORT_PUBKEY_EDGE).collect();
    format!("{head}...{tail}")
}

/// First 8 chars of an id followed by `...`.
pub(crate) fn short_id(id: &str) -> String {
    let head: String = id.chars().take(SHORT_PUBKEY_EDGE).collect();
    format!("{head}...")
}

pub(crate) fn first_non_empty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Collapses runs of whitespace (newlines included) into single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Human-friendly age of `created_at` relative to `now` (both unix seconds).
pub fn relative_timestamp(created_at: i64, now: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let age = now.saturating_sub(created_at);
    match age {
        i64::MIN..=59 => "just now".to_owned(),
        60..=3_599 => format!("{}m ago", age / MINUTE),
        3_600..=86_399 => format!("{}h ago", age / HOUR),
        86_400..=604_799 => format!("{}d ago", age / DAY),
        _ => utc_date(created_at),
    }
}

pub(crate) fn utc_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

pub(crate) fn unix_now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{
        collapse_whitespace, first_non_empty_line, relative_timestamp, short_id, short_pubkey,
        text_len, truncate_with_ellipsis, utc_date,
    };
    use crate::model::fixtures::ALICE;

    #[test]
    fn truncate_with_ellipsis_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("hello", 5, "..."), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 4, "..."), "hell...");
        assert_eq!(truncate_with_ellipsis("hello", 0, "…"), "…");
    }

    #[test]
    fn truncate_with_ellipsis_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2, "..."), "αβ...");
    }

    #[test]
    fn short_pubkey_abbreviates_long_keys_only() {
        assert_eq!(short_pubkey(ALICE), "7e7e9c42...86addf4e");
        assert_eq!(short_pubkey("0123456789abcdef"), "0123456789abcdef");
        assert_eq!(short_pubkey("abc"), "abc");
        assert_eq!(short_id("abcdef1234"), "abcdef12...");
    }

    #[test]
    fn line_helpers() {
        assert_eq!(first_non_empty_line("\n  \n  first  \nsecond"), Some("first"));
        assert_eq!(first_non_empty_line(" \n\t"), None);
        assert_eq!(collapse_whitespace(" a\n\nb \t c "), "a b c");
    }

    #[rstest]
    #[case(0, "just now")]
    #[case(-30, "just now")]
    #[case(59, "just now")]
    #[case(60, "1m ago")]
    #[case(3_599, "59m ago")]
    #[case(7_200, "2h ago")]
    #[case(3 * 86_400, "3d ago")]
    fn relative_timestamp_buckets(#[case] age: i64, #[case] expected: &str) {
        let now = 1_700_000_000;
        assert_eq!(relative_timestamp(now - age, now), expected);
    }

    #[test]
    fn old_timestamps_render_as_dates() {
        assert_eq!(relative_timestamp(0, 30 * 86_400), "1970-01-01");
        assert_eq!(utc_date(1_700_000_000), "2023-11-14");
    }
}
