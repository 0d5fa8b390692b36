// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use crate::model::{kinds, Event, ThreadNode};
use crate::store::{EventStore, Filter, LookupContext};

/// Upper bound on replies loaded for one thread.
pub const THREAD_REPLY_LIMIT: usize = 500;

/// Loads the thread containing `focus_id`.
///
/// The root is the focus event's `root` reference, or the focus itself when it has
/// none or the root is not stored. `None` only when the focus event is unknown.
pub fn fetch_thread(
    ctx: &LookupContext,
    store: &dyn EventStore,
    focus_id: &str,
) -> Option<ThreadNode> {
    let focus = fetch_one(ctx, store, focus_id)?;
    let root = match focus.root_id() {
        Some(root_id) if root_id != focus.id => fetch_one(ctx, store, root_id).unwrap_or_else(|| {
            debug!(focus_id, root_id, "thread root not stored; rooting at focus");
            focus.clone()
        }),
        _ => focus.clone(),
    };

    let filter = Filter::new()
        .kind(kinds::TEXT_NOTE)
        .tag('e', root.id.clone())
        .limit(THREAD_REPLY_LIMIT);
    let mut replies = store.query_events(ctx, &filter).unwrap_or_else(|err| {
        debug!(%err, root = %root.id, "reply lookup failed; rendering root only");
        Vec::new()
    });
    if focus.id != root.id {
        replies.push(focus);
    }

    Some(ThreadNode::assemble(root, replies))
}

fn fetch_one(ctx: &LookupContext, store: &dyn EventStore, id: &str) -> Option<Event> {
    match store.query_events(ctx, &Filter::new().id(id).limit(1)) {
        Ok(events) => events.into_iter().next(),
        Err(err) => {
            debug!(id, %err, "event lookup failed");
            None
        }
    }
}
