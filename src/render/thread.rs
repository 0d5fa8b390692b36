// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reply-tree rendering.
//!
//! Pre-order, depth-first: each node becomes an indented bullet followed by its link
//! lines, then its children in the order the tree holds them.

use tracing::warn;

use super::portal::event_link_lines;
use super::text::{collapse_whitespace, relative_timestamp, truncate_with_ellipsis, unix_now};
use crate::config::{normalize_max_depth, RenderConfig};
use crate::model::{Event, ThreadNode};
use crate::resolve::{expand, Resolver};
use crate::store::{EventStore, LookupContext};

/// Emitted in place of a subtree that is deeper than the configured limit.
pub const HIDDEN_REPLIES_MARKER: &str = "… additional replies hidden";
/// The whole output of a thread render without a root.
pub const THREAD_NOT_FOUND: &str = "Thread not found.";

pub struct ThreadRenderer<'a> {
    ctx: &'a LookupContext,
    store: &'a dyn EventStore,
    config: &'a RenderConfig,
    now: i64,
}

impl<'a> ThreadRenderer<'a> {
    pub fn new(
        ctx: &'a LookupContext,
        store: &'a dyn EventStore,
        config: &'a RenderConfig,
    ) -> Self {
        Self { ctx, store, config, now: unix_now() }
    }

    /// Pins the clock used for relative timestamps.
    pub fn at(mut self, now: i64) -> Self {
        self.now = now;
        self
    }

    pub fn render(&self, root: &ThreadNode, focus_id: &str) -> String {
        let mut out = Vec::new();
        self.render_node(root, 0, focus_id, self.config.max_thread_depth, &mut out);
        out.join("\n")
    }

    /// Appends the lines for `node` and its visible descendants to `out`.
    ///
    /// `max_depth == 0` means the default depth.
    pub fn render_node(
        &self,
        node: &ThreadNode,
        depth: usize,
        focus_id: &str,
        max_depth: usize,
        out: &mut Vec<String>,
    ) {
        let max_depth = normalize_max_depth(max_depth);
        let indent = self.config.thread_indent.repeat(depth);
        if depth >= max_depth {
            out.push(format!("{indent}{HIDDEN_REPLIES_MARKER}"));
            return;
        }

        let event = &node.event;
        let mut line = format!(
            "{indent}* {} ({})",
            self.summary(event),
            relative_timestamp(event.created_at, self.now)
        );
        let markers = [(depth == 0, "root"), (event.id == focus_id, "you are here")]
            .into_iter()
            .filter_map(|(applies, marker)| applies.then_some(marker))
            .collect::<Vec<_>>();
        if !markers.is_empty() {
            line.push_str(&format!(" [{}]", markers.join(", ")));
        }
        out.push(line);
        out.extend(event_link_lines(self.ctx, self.store, event, self.config));

        for child in &node.children {
            self.render_node(child, depth + 1, focus_id, max_depth, out);
        }
    }

    pub fn summary(&self, event: &Event) -> String {
        summarize(self.ctx, self.store, self.config, &event.content)
    }
}

/// Single-line content preview with references shown by display name.
pub(crate) fn summarize(
    ctx: &LookupContext,
    store: &dyn EventStore,
    config: &RenderConfig,
    content: &str,
) -> String {
    let (expanded, _) =
        expand(ctx, &Resolver::new(store), content, |entity| entity.display_name.clone());
    truncate_with_ellipsis(
        &collapse_whitespace(&expanded),
        config.summary_length,
        &config.summary_ellipsis,
    )
}

/// Renders a thread, or the not-found placeholder when there is no root.
pub fn render_thread(
    ctx: &LookupContext,
    store: &dyn EventStore,
    root: Option<&ThreadNode>,
    focus_id: &str,
    config: &RenderConfig,
) -> String {
    match root {
        Some(root) => ThreadRenderer::new(ctx, store, config).render(root, focus_id),
        None => {
            warn!(focus_id, "thread render without a root");
            THREAD_NOT_FOUND.to_owned()
        }
    }
}
