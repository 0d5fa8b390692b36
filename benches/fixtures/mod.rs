// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use gemstr::model::{kinds, Event, ThreadNode};
use gemstr::store::MemoryStore;

pub const NOW: i64 = 1_700_000_000;
pub const ALICE: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";
pub const ALICE_NPUB: &str = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";
pub const NOTE_BECH32: &str = "note140x77y35xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6qmjfa6e";
pub const ARTICLE_NADDR: &str = "naddr1qq9x67fdv9e8g6trd3jsygr706wy92gmlmcel2ffuh76rdewp67p5nq3g9nnufu5ydxcdtwlfcpsgqqqw4rse48hyj";

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn scale(self) -> usize {
        match self {
            Self::Small => 4,
            Self::Medium => 32,
            Self::Large => 256,
        }
    }
}

pub fn event_id(seed: usize) -> String {
    format!("{seed:064x}")
}

pub fn store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert(Event::new(
        event_id(usize::MAX),
        ALICE,
        kinds::METADATA,
        NOW,
        r#"{"name":"alice"}"#,
    ));
    store.insert(
        Event::new(event_id(usize::MAX - 1), ALICE, kinds::LONG_FORM, NOW, "body")
            .with_tag(["d", "my-article"])
            .with_tag(["title", "Hello World"]),
    );
    store.set_read_relays(ALICE, vec!["wss://relay.example.com".to_owned()]);
    store
}

/// Prose paragraphs with references sprinkled in, some repeated.
pub fn prose(case: Case) -> String {
    let refs = [ALICE_NPUB, NOTE_BECH32, ARTICLE_NADDR];
    (0..case.scale())
        .map(|idx| {
            format!(
                "Paragraph {idx} mentions nostr:{} and keeps going with plain words so the \
                 wrapper has something to chew on before the next line.",
                refs[idx % refs.len()]
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A root with `scale` direct replies, each carrying a short reply chain.
pub fn thread(case: Case) -> ThreadNode {
    let mut root = ThreadNode::new(Event::new(
        event_id(0),
        ALICE,
        kinds::TEXT_NOTE,
        NOW - 86_400,
        format!("root post by nostr:{ALICE_NPUB}"),
    ));
    for branch in 0..case.scale() {
        let mut node = None::<ThreadNode>;
        for depth in (0..4).rev() {
            let seed = 1 + branch * 4 + depth;
            let event = Event::new(
                event_id(seed),
                ALICE,
                kinds::TEXT_NOTE,
                NOW - 3_600 + seed as i64,
                format!("reply {seed} at depth {depth}"),
            );
            let mut current = ThreadNode::new(event);
            if let Some(child) = node.take() {
                current.children.push(child);
            }
            node = Some(current);
        }
        root.children.extend(node);
    }
    root
}
