// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::event::{kinds, Event};
use crate::store::MemoryStore;

/// Pubkey from the NIP-19 reference vectors.
pub(crate) const ALICE: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";
pub(crate) const ALICE_NPUB: &str =
    "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";
pub(crate) const ALICE_NPROFILE: &str = "nprofile1qqs8ul5ug253hlh3n75jne0a5xmjur4urfxpzst88cnegg6ds6ka7nspzamhxue69uhhyetvv9ujuetcv9khqmr99e3k7mg3lnphh";

pub(crate) const BOB: &str = "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d";

/// Event id `abcdef12` followed by `34` repeated.
pub(crate) const NOTE_ID: &str = "abcdef1234343434343434343434343434343434343434343434343434343434";
pub(crate) const NOTE_BECH32: &str =
    "note140x77y35xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6qmjfa6e";
/// `nevent` for [`NOTE_ID`] with relay `wss://relay.example.com`, author [`ALICE`], kind 1.
pub(crate) const NOTE_NEVENT: &str = "nevent1qqs2hn00zg6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdp5xs6rgdqpzamhxue69uhhyetvv9ujuetcv9khqmr99e3k7mgzypl8a8zz4ydlauvl4y57tldpkuhqa0q6fsg5zee7y72zxnvx4h05uqcyqqqqqqgac7cyw";

/// `naddr` for kind 30023, author [`ALICE`], identifier `my-article`.
pub(crate) const ARTICLE_NADDR: &str = "naddr1qq9x67fdv9e8g6trd3jsygr706wy92gmlmcel2ffuh76rdewp67p5nq3g9nnufu5ydxcdtwlfcpsgqqqw4rse48hyj";
/// Same address with relay `wss://relay.example.com`.
pub(crate) const ARTICLE_NADDR_WITH_RELAY: &str = "naddr1qq9x67fdv9e8g6trd3jsz9mhwden5te0wfjkccte9ejhsctdwpkx2tnrdaksygr706wy92gmlmcel2ffuh76rdewp67p5nq3g9nnufu5ydxcdtwlfcpsgqqqw4rstnle8h";
/// `naddr` for kind 30023, author [`ALICE`], empty identifier.
pub(crate) const EMPTY_IDENT_NADDR: &str =
    "naddr1qqqqygr706wy92gmlmcel2ffuh76rdewp67p5nq3g9nnufu5ydxcdtwlfcpsgqqqw4rsnqqq86";

/// A secret key encoding: decodes fine but is not a renderable variant.
pub(crate) const ALICE_NSEC: &str =
    "nsec10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qw6eqda";

pub(crate) const RELAY: &str = "wss://relay.example.com";

pub(crate) fn hex_id(seed: u8) -> String {
    format!("{seed:02x}").repeat(32)
}

pub(crate) fn text_note(id: &str, pubkey: &str, created_at: i64, content: &str) -> Event {
    Event::new(id, pubkey, kinds::TEXT_NOTE, created_at, content)
}

pub(crate) fn metadata(pubkey: &str, created_at: i64, json: &str) -> Event {
    Event::new(hex_id((created_at % 251) as u8), pubkey, kinds::METADATA, created_at, json)
}

pub(crate) fn article(id: &str, pubkey: &str, identifier: &str, title: Option<&str>) -> Event {
    let mut event = Event::new(id, pubkey, kinds::LONG_FORM, 1_700_000_000, "# Body")
        .with_tag(["d", identifier]);
    if let Some(title) = title {
        event = event.with_tag(["title", title]);
    }
    event
}

pub(crate) fn reply_to(
    id: &str,
    root: &str,
    parent: &str,
    created_at: i64,
    content: &str,
) -> Event {
    text_note(id, BOB, created_at, content)
        .with_tag(["e", root, "", "root"])
        .with_tag(["e", parent, "", "reply"])
}

pub(crate) fn store_with(events: impl IntoIterator<Item = Event>) -> MemoryStore {
    let mut store = MemoryStore::new();
    for event in events {
        store.insert(event);
    }
    store
}
