// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::event::Event;

/// One event in a reply tree. Parents own their children; there are no back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadNode {
    pub event: Event,
    pub children: Vec<ThreadNode>,
}

impl ThreadNode {
    pub fn new(event: Event) -> Self {
        Self { event, children: Vec::new() }
    }

    pub fn with_child(mut self, child: ThreadNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &str {
        &self.event.id
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ThreadNode::len).sum::<usize>()
    }

    pub fn find(&self, id: &str) -> Option<&ThreadNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Builds a tree from a root and a flat set of replies.
    ///
    /// Each reply hangs under its `e`-tag parent when that parent is part of the set,
    /// otherwise directly under the root. Siblings are ordered oldest first. Duplicate
    /// ids are placed once, and reference cycles are broken at the first revisit.
    pub fn assemble<I>(root: Event, replies: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        let mut seen = HashSet::<String>::new();
        seen.insert(root.id.clone());
        let mut events = Vec::<Option<Event>>::new();
        for reply in replies {
            if seen.insert(reply.id.clone()) {
                events.push(Some(reply));
            }
        }

        let index_by_id = events
            .iter()
            .enumerate()
            .filter_map(|(idx, event)| event.as_ref().map(|e| (e.id.clone(), idx)))
            .collect::<HashMap<_, _>>();

        let mut children_of = HashMap::<Option<usize>, Vec<usize>>::new();
        for (idx, event) in events.iter().enumerate() {
            let Some(event) = event else { continue };
            let parent = event
                .parent_id()
                .and_then(|parent| index_by_id.get(parent).copied())
                .filter(|&parent| parent != idx);
            children_of.entry(parent).or_default().push(idx);
        }
        for siblings in children_of.values_mut() {
            siblings.sort_by(|&a, &b| {
                let (a, b) = (events[a].as_ref(), events[b].as_ref());
                a.map(|e| (e.created_at, &e.id)).cmp(&b.map(|e| (e.created_at, &e.id)))
            });
        }

        let mut node = ThreadNode::new(root);
        let top = children_of.get(&None).cloned().unwrap_or_default();
        for idx in top {
            if let Some(child) = take_subtree(idx, &mut events, &children_of) {
                node.children.push(child);
            }
        }

        // Members of parent cycles are unreachable from the root; surface them at the top.
        let leftovers = (0..events.len()).filter(|&idx| events[idx].is_some()).collect::<Vec<_>>();
        for idx in leftovers {
            if let Some(child) = take_subtree(idx, &mut events, &children_of) {
                node.children.push(child);
            }
        }

        node
    }
}

fn take_subtree(
    idx: usize,
    events: &mut [Option<Event>],
    children_of: &HashMap<Option<usize>, Vec<usize>>,
) -> Option<ThreadNode> {
    let event = events.get_mut(idx)?.take()?;
    let mut node = ThreadNode::new(event);
    if let Some(children) = children_of.get(&Some(idx)) {
        for &child in children {
            if let Some(child) = take_subtree(child, events, children_of) {
                node.children.push(child);
            }
        }
    }
    Some(node)
}

/// Read-only engagement counts shown next to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventAggregates {
    pub replies: u64,
    pub reactions: u64,
    /// Reaction count per reaction content (`+`, emoji, ...).
    pub reactions_by_content: BTreeMap<String, u64>,
    pub zap_msats: u64,
}

impl EventAggregates {
    pub fn is_empty(&self) -> bool {
        self.replies == 0 && self.reactions == 0 && self.zap_msats == 0
    }

    pub fn zap_sats(&self) -> u64 {
        self.zap_msats / 1000
    }
}
