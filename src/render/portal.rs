// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mirror-gateway links.
//!
//! A portal is a third-party web viewer; linking an identifier's canonical bech32 form
//! to each configured portal lets readers open content this document cannot show.

use tracing::debug;

use crate::config::RenderConfig;
use crate::format::nip19;
use crate::model::{
    kinds, AddressPointer, DecodedPointer, Event, EventIdHex, EventPointer, PublicKeyHex,
    RelayHints, ResolvedEntity,
};
use crate::store::{EventStore, LookupContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalLink {
    pub url: String,
    pub label: String,
}

impl PortalLink {
    pub fn to_line(&self) -> String {
        link_line(&self.url, &self.label)
    }
}

/// A gemtext link line. The `=>` marker must start the line.
pub fn link_line(url: &str, label: &str) -> String {
    if label.is_empty() {
        format!("=> {url}")
    } else {
        format!("=> {url} {label}")
    }
}

/// One link per non-blank portal, pointing at `identifier` (bare bech32).
pub fn portal_links(identifier: &str, portals: &[String]) -> Vec<PortalLink> {
    portals
        .iter()
        .map(|base| base.trim())
        .filter(|base| !base.is_empty())
        .map(|base| {
            let mut url = base.to_owned();
            if !url.ends_with('/') {
                url.push('/');
            }
            url.push_str(identifier);
            PortalLink { url, label: format!("View on {}", portal_host(base)) }
        })
        .collect()
}

pub fn entity_portal_links(entity: &ResolvedEntity, portals: &[String]) -> Vec<PortalLink> {
    portal_links(entity.identifier(), portals)
}

/// Re-derives a canonical identifier for an event that was not referenced by one.
///
/// Long-form events carrying a `d` tag are addressed as `naddr`; everything else, and
/// any long-form event whose address cannot be encoded, as `nevent`. Both carry up to
/// `hint_limit` of the author's read relays. `None` when neither encoding succeeds.
pub fn event_identifier(
    ctx: &LookupContext,
    store: &dyn EventStore,
    event: &Event,
    hint_limit: usize,
) -> Option<String> {
    let relays = store
        .read_relays(ctx, &event.pubkey)
        .into_iter()
        .take(hint_limit)
        .collect::<RelayHints>();

    if event.kind == kinds::LONG_FORM {
        if let Some(identifier) = event.identifier() {
            match address_pointer(event, identifier, relays.clone()) {
                Ok(pointer) => match nip19::encode(&pointer) {
                    Ok(encoded) => return Some(encoded),
                    Err(err) => debug!(id = %event.id, %err, "naddr encoding failed"),
                },
                Err(err) => debug!(id = %event.id, %err, "event has no usable address"),
            }
        }
    }

    let id = match EventIdHex::new(event.id.as_str()) {
        Ok(id) => id,
        Err(err) => {
            debug!(id = %event.id, %err, "event id cannot be encoded; no portal links");
            return None;
        }
    };
    let pointer = DecodedPointer::Event(EventPointer {
        id,
        relays,
        author: PublicKeyHex::new(event.pubkey.as_str()).ok(),
        kind: Some(u32::from(event.kind)),
    });
    nip19::encode(&pointer)
        .map_err(|err| debug!(id = %event.id, %err, "nevent encoding failed"))
        .ok()
}

/// Portal links for a bare event; empty when no identifier can be derived.
pub fn event_portal_links(
    ctx: &LookupContext,
    store: &dyn EventStore,
    event: &Event,
    portals: &[String],
    hint_limit: usize,
) -> Vec<PortalLink> {
    if portals.is_empty() {
        return Vec::new();
    }
    match event_identifier(ctx, store, event, hint_limit) {
        Some(identifier) => portal_links(&identifier, portals),
        None => Vec::new(),
    }
}

/// Internal link label used when no portal link can be derived.
pub const NOTE_LINK_LABEL: &str = "View note";

/// Link lines for an event: its portal links, or a single internal `/note/{id}` link.
pub fn event_link_lines(
    ctx: &LookupContext,
    store: &dyn EventStore,
    event: &Event,
    config: &RenderConfig,
) -> Vec<String> {
    let links = event_portal_links(ctx, store, event, &config.portals, config.relay_hint_limit);
    if links.is_empty() {
        return vec![link_line(&format!("/note/{}", event.id), NOTE_LINK_LABEL)];
    }
    links.iter().map(PortalLink::to_line).collect()
}

fn address_pointer(
    event: &Event,
    identifier: &str,
    relays: RelayHints,
) -> Result<DecodedPointer, crate::model::IdError> {
    Ok(DecodedPointer::Address(AddressPointer {
        kind: u32::from(event.kind),
        pubkey: PublicKeyHex::new(event.pubkey.as_str())?,
        identifier: identifier.to_owned(),
        relays,
    }))
}

fn portal_host(base: &str) -> &str {
    let rest = base.split_once("://").map_or(base, |(_, rest)| rest);
    let host = rest.split('/').next().unwrap_or(rest);
    if host.is_empty() {
        base
    } else {
        host
    }
}
