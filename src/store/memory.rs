// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::{self, BufRead};

use tracing::debug;

use super::{EventStore, Filter, LookupContext, StoreError};
use crate::model::{kinds, Event};

/// In-process event store. Useful for tests, fixtures and offline rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
    ids: HashSet<String>,
    read_relays: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event; a second event with an already-known id is ignored.
    pub fn insert(&mut self, event: Event) -> bool {
        if !self.ids.insert(event.id.clone()) {
            return false;
        }
        self.events.push(event);
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Overrides the read relays reported for `pubkey`.
    pub fn set_read_relays(&mut self, pubkey: impl Into<String>, relays: Vec<String>) {
        self.read_relays.insert(pubkey.into(), relays);
    }

    /// Loads one JSON event per line. Blank lines are skipped.
    pub fn from_jsonl(reader: impl BufRead) -> Result<Self, MemoryStoreError> {
        let mut store = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(MemoryStoreError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            let event = serde_json::from_str::<Event>(&line).map_err(|err| {
                MemoryStoreError::Parse { line: idx + 1, message: err.to_string() }
            })?;
            store.insert(event);
        }
        debug!(events = store.len(), "loaded memory store");
        Ok(store)
    }

    /// Read relays from the author's latest relay-list event (`r` tags without a
    /// `write` marker).
    fn relay_list_read_relays(&self, pubkey: &str) -> Vec<String> {
        let latest = self
            .events
            .iter()
            .filter(|e| e.kind == kinds::RELAY_LIST && e.pubkey == pubkey)
            .max_by_key(|e| e.created_at);
        let Some(list) = latest else {
            return Vec::new();
        };
        list.tags_named("r")
            .filter(|tag| tag.get(2).map_or(true, |marker| marker == "read"))
            .filter_map(|tag| tag.get(1).cloned())
            .collect()
    }
}

impl EventStore for MemoryStore {
    fn query_events(&self, ctx: &LookupContext, filter: &Filter) -> Result<Vec<Event>, StoreError> {
        ctx.check()?;
        let mut matched = self.events.iter().filter(|e| filter.matches(e)).collect::<Vec<_>>();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        let limit = filter.limit.unwrap_or(usize::MAX);
        Ok(matched.into_iter().take(limit).cloned().collect())
    }

    fn read_relays(&self, ctx: &LookupContext, pubkey: &str) -> Vec<String> {
        if ctx.check().is_err() {
            return Vec::new();
        }
        match self.read_relays.get(pubkey) {
            Some(relays) => relays.clone(),
            None => self.relay_list_read_relays(pubkey),
        }
    }
}

#[derive(Debug)]
pub enum MemoryStoreError {
    Io(io::Error),
    Parse { line: usize, message: String },
}

impl fmt::Display for MemoryStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read events: {err}"),
            Self::Parse { line, message } => write!(f, "invalid event on line {line}: {message}"),
        }
    }
}

impl std::error::Error for MemoryStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } => None,
        }
    }
}
