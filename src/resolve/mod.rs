// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Identifier resolution: bech32 token → typed pointer → display name + link path.
//!
//! Display names come from the store when it has a matching record and fall back to a
//! deterministic label otherwise. Store failures never surface past this module.

use std::fmt;

use tracing::debug;

use crate::format::nip19::{self, Nip19Error};
use crate::model::{
    kinds, AddressPointer, DecodedPointer, Event, EventPointer, ProfileMetadata, ProfilePointer,
    ResolvedEntity, SCHEME_PREFIX,
};
use crate::render::text::{first_non_empty_line, short_id, short_pubkey, truncate_with_ellipsis};
use crate::store::{EventStore, Filter, LookupContext};

pub mod replace;

pub use replace::expand;

/// Max chars of a note's first line used as its display name.
pub const NOTE_TITLE_LENGTH: usize = 40;
const NOTE_TITLE_ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Bad encoding, checksum or payload.
    Decode(Nip19Error),
    /// Decoded fine, but the prefix is not one of the renderable variants.
    UnsupportedVariant(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "cannot decode identifier: {err}"),
            Self::UnsupportedVariant(prefix) => write!(f, "unsupported identifier '{prefix}'"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::UnsupportedVariant(_) => None,
        }
    }
}

impl From<Nip19Error> for ResolveError {
    fn from(value: Nip19Error) -> Self {
        match value {
            Nip19Error::UnsupportedPrefix(prefix) => Self::UnsupportedVariant(prefix),
            other => Self::Decode(other),
        }
    }
}

/// Names identifiers using a storage collaborator. Holds no per-render state.
#[derive(Clone, Copy)]
pub struct Resolver<'s> {
    store: &'s dyn EventStore,
}

impl<'s> Resolver<'s> {
    pub fn new(store: &'s dyn EventStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'s dyn EventStore {
        self.store
    }

    /// Resolves a bare token (scheme prefix stripped).
    pub fn resolve(
        &self,
        ctx: &LookupContext,
        token: &str,
    ) -> Result<ResolvedEntity, ResolveError> {
        let pointer = nip19::decode(token)?;
        Ok(ResolvedEntity {
            kind: pointer.kind(),
            display_name: self.display_name(ctx, &pointer),
            link_path: pointer.link_path(),
            original_text: format!("{SCHEME_PREFIX}{token}"),
        })
    }

    pub fn display_name(&self, ctx: &LookupContext, pointer: &DecodedPointer) -> String {
        match pointer {
            DecodedPointer::Pubkey(pubkey)
            | DecodedPointer::Profile(ProfilePointer { pubkey, .. }) => {
                self.profile_name(ctx, pubkey.as_str())
            }
            DecodedPointer::Note(id) | DecodedPointer::Event(EventPointer { id, .. }) => {
                self.event_name(ctx, id.as_str())
            }
            DecodedPointer::Address(addr) => self.address_name(ctx, addr),
        }
    }

    /// `display_name > name > nip05` from stored metadata, else the shortened key.
    pub fn profile_name(&self, ctx: &LookupContext, pubkey: &str) -> String {
        let filter = Filter::new().author(pubkey).kind(kinds::METADATA).limit(1);
        self.first_match(ctx, &filter)
            .and_then(|event| ProfileMetadata::from_content(&event.content))
            .and_then(|meta| meta.best_name().map(str::to_owned))
            .unwrap_or_else(|| short_pubkey(pubkey))
    }

    /// Stored profile metadata for `pubkey`, if any.
    pub fn profile_metadata(&self, ctx: &LookupContext, pubkey: &str) -> Option<ProfileMetadata> {
        let filter = Filter::new().author(pubkey).kind(kinds::METADATA).limit(1);
        self.first_match(ctx, &filter)
            .and_then(|event| ProfileMetadata::from_content(&event.content))
    }

    pub fn event_name(&self, ctx: &LookupContext, id: &str) -> String {
        match self.first_match(ctx, &Filter::new().id(id).limit(1)) {
            Some(event) => stored_event_name(&event),
            None => format!("Note {}", short_id(id)),
        }
    }

    pub fn address_name(&self, ctx: &LookupContext, addr: &AddressPointer) -> String {
        let author = short_pubkey(addr.pubkey.as_str());
        let Ok(kind) = u16::try_from(addr.kind) else {
            return address_fallback(&addr.identifier, &author);
        };
        let filter = Filter::new()
            .author(addr.pubkey.as_str())
            .kind(kind)
            .tag('d', addr.identifier.clone())
            .limit(1);

        match self.first_match(ctx, &filter) {
            Some(event) => match event.title() {
                Some(title) if !title.trim().is_empty() => title.to_owned(),
                _ if !addr.identifier.is_empty() => addr.identifier.clone(),
                _ => format!("Article by {author}"),
            },
            None => address_fallback(&addr.identifier, &author),
        }
    }

    pub fn fetch_event(&self, ctx: &LookupContext, id: &str) -> Option<Event> {
        self.first_match(ctx, &Filter::new().id(id).limit(1))
    }

    fn first_match(&self, ctx: &LookupContext, filter: &Filter) -> Option<Event> {
        match self.store.query_events(ctx, filter) {
            Ok(events) => {
                let first = events.into_iter().next();
                if first.is_none() {
                    debug!(?filter, "lookup found nothing; using fallback label");
                }
                first
            }
            Err(err) => {
                debug!(%err, ?filter, "lookup failed; using fallback label");
                None
            }
        }
    }
}

fn stored_event_name(event: &Event) -> String {
    if event.is_text_note() {
        if let Some(line) = first_non_empty_line(&event.content) {
            return truncate_with_ellipsis(line, NOTE_TITLE_LENGTH, NOTE_TITLE_ELLIPSIS);
        }
    }
    match event.title() {
        Some(title) if !title.trim().is_empty() => title.to_owned(),
        _ => format!("Event {}", short_id(&event.id)),
    }
}

fn address_fallback(identifier: &str, author: &str) -> String {
    if identifier.is_empty() {
        format!("Article by {author}")
    } else {
        format!("{identifier} by {author}")
    }
}
