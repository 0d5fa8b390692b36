// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;
use tracing::debug;

use crate::model::{kinds, Event, EventAggregates};
use crate::store::{EventStore, Filter, LookupContext};

/// Reaction content that counts as a plain like.
const LIKE: &str = "+";

/// The zap request embedded in a zap receipt's `description` tag.
#[derive(Debug, Deserialize)]
struct ZapRequest {
    #[serde(default)]
    tags: Vec<Vec<String>>,
}

/// Counts replies, reactions and zapped millisats referencing `event_id`.
///
/// A failed lookup yields zeroed aggregates.
pub fn tally(ctx: &LookupContext, store: &dyn EventStore, event_id: &str) -> EventAggregates {
    let filter = Filter::new()
        .kind(kinds::TEXT_NOTE)
        .kind(kinds::REACTION)
        .kind(kinds::ZAP_RECEIPT)
        .tag('e', event_id);
    let events = match store.query_events(ctx, &filter) {
        Ok(events) => events,
        Err(err) => {
            debug!(event_id, %err, "aggregate lookup failed");
            return EventAggregates::default();
        }
    };

    let mut aggregates = EventAggregates::default();
    for event in &events {
        match event.kind {
            kinds::TEXT_NOTE => aggregates.replies += 1,
            kinds::REACTION => {
                aggregates.reactions += 1;
                *aggregates.reactions_by_content.entry(reaction_key(&event.content)).or_default() +=
                    1;
            }
            kinds::ZAP_RECEIPT => {
                aggregates.zap_msats = aggregates.zap_msats.saturating_add(zap_msats(event));
            }
            _ => {}
        }
    }
    aggregates
}

fn reaction_key(content: &str) -> String {
    match content.trim() {
        "" => LIKE.to_owned(),
        other => other.to_owned(),
    }
}

/// Amount requested in the receipt's embedded zap request; `0` when absent or malformed.
fn zap_msats(receipt: &Event) -> u64 {
    let Some(description) = receipt.tag_value("description") else {
        return 0;
    };
    let request = match serde_json::from_str::<ZapRequest>(description) {
        Ok(request) => request,
        Err(err) => {
            debug!(id = %receipt.id, %err, "unreadable zap request");
            return 0;
        }
    };
    request
        .tags
        .iter()
        .find(|tag| tag.first().map(String::as_str) == Some("amount"))
        .and_then(|tag| tag.get(1))
        .and_then(|amount| amount.parse::<u64>().ok())
        .unwrap_or(0)
}
