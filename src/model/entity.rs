// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::pointer::EntityKind;

/// URI scheme that prefixes every inline cross-reference.
pub const SCHEME_PREFIX: &str = "nostr:";

/// A cross-reference that was decoded and named during one render.
///
/// Identity is `original_text`: the exact matched substring, scheme included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub kind: EntityKind,
    pub display_name: String,
    pub link_path: String,
    pub original_text: String,
}

impl ResolvedEntity {
    /// The bech32 identifier without the scheme prefix.
    pub fn identifier(&self) -> &str {
        self.original_text.strip_prefix(SCHEME_PREFIX).unwrap_or(&self.original_text)
    }
}

/// Drops entities whose `original_text` was already seen, keeping first-seen order.
pub fn dedup_entities<I>(entities: I) -> Vec<ResolvedEntity>
where
    I: IntoIterator<Item = ResolvedEntity>,
{
    let mut seen = HashSet::<String>::new();
    entities
        .into_iter()
        .filter(|entity| seen.insert(entity.original_text.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{dedup_entities, ResolvedEntity};
    use crate::model::pointer::EntityKind;

    fn entity(original: &str) -> ResolvedEntity {
        ResolvedEntity {
            kind: EntityKind::Note,
            display_name: format!("name of {original}"),
            link_path: format!("/note/{original}"),
            original_text: format!("nostr:{original}"),
        }
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let input = vec![entity("b"), entity("a"), entity("b"), entity("c"), entity("a")];
        let out = dedup_entities(input);
        let names = out.iter().map(|e| e.identifier()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn identifier_strips_scheme() {
        assert_eq!(entity("note1xyz").identifier(), "note1xyz");
    }

    proptest! {
        #[test]
        fn dedup_is_idempotent(keys in proptest::collection::vec("[a-e]{1,2}", 0..24)) {
            let input = keys.iter().map(|k| entity(k)).collect::<Vec<_>>();
            let once = dedup_entities(input.clone());
            let twice = dedup_entities(once.clone());
            prop_assert_eq!(&once, &twice);

            let mut expected = Vec::<String>::new();
            for k in &keys {
                if !expected.contains(k) {
                    expected.push(k.clone());
                }
            }
            let got = once.iter().map(|e| e.identifier().to_owned()).collect::<Vec<_>>();
            prop_assert_eq!(got, expected);
        }
    }
}
