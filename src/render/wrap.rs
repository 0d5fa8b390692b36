// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::text::text_len;

/// Line prefixes that carry gemtext structure and are never reflowed.
const STRUCTURAL_PREFIXES: [&str; 4] = ["```", "=>", "#", "* "];

/// Greedily word-wraps prose lines of `document` to `width` chars.
///
/// `width == 0` returns the document unchanged. Blank lines and lines starting (after
/// leading whitespace) with a fence, link, heading or bullet marker pass through as-is.
/// A word longer than `width` gets a line of its own and is never split.
pub fn clamp(document: &str, width: usize) -> String {
    if width == 0 {
        return document.to_owned();
    }

    let mut out = Vec::<String>::new();
    for line in document.split('\n') {
        if line.trim().is_empty() || is_structural(line) {
            out.push(line.to_owned());
        } else {
            wrap_words(line, width, &mut out);
        }
    }
    out.join("\n")
}

pub(crate) fn is_structural(line: &str) -> bool {
    let content = line.trim_start();
    STRUCTURAL_PREFIXES.iter().any(|prefix| content.starts_with(prefix))
}

fn wrap_words(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = text_len(word);
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
}
