// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Storage collaborator contract.
//!
//! Rendering never talks to relays or disk itself; every lookup goes through an
//! [`EventStore`] and carries the caller's [`LookupContext`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::Event;

pub mod memory;

pub use memory::{MemoryStore, MemoryStoreError};

/// Advisory cancellation and deadline for lookups made during one render.
///
/// Clones share the cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct LookupContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl LookupContext {
    /// A context that never expires on its own.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self { cancelled: Arc::new(AtomicBool::new(false)), deadline: Some(deadline) }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// `Ok` while lookups may still proceed.
    pub fn check(&self) -> Result<(), StoreError> {
        if self.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(StoreError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

/// Query filter understood by [`EventStore::query_events`].
///
/// `None` fields do not constrain; tag filters match when the event carries any
/// of the listed values under that single-letter tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub ids: Option<Vec<String>>,
    pub authors: Option<Vec<String>>,
    pub kinds: Option<Vec<u16>>,
    pub tags: BTreeMap<char, Vec<String>>,
    pub limit: Option<usize>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    pub fn author(mut self, pubkey: impl Into<String>) -> Self {
        self.authors.get_or_insert_with(Vec::new).push(pubkey.into());
        self
    }

    pub fn kind(mut self, kind: u16) -> Self {
        self.kinds.get_or_insert_with(Vec::new).push(kind);
        self
    }

    pub fn tag(mut self, name: char, value: impl Into<String>) -> Self {
        self.tags.entry(name).or_default().push(value.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.iter().any(|id| id == &event.id) {
                return false;
            }
        }
        if let Some(authors) = &self.authors {
            if !authors.iter().any(|author| author == &event.pubkey) {
                return false;
            }
        }
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&event.kind) {
                return false;
            }
        }
        self.tags.iter().all(|(name, values)| {
            let mut buf = [0u8; 4];
            let name: &str = name.encode_utf8(&mut buf);
            // Bound before returning: the iterator borrows `buf`.
            let found =
                event.tags_named(name).any(|tag| tag.get(1).is_some_and(|v| values.contains(v)));
            found
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Cancelled,
    DeadlineExceeded,
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("lookup cancelled"),
            Self::DeadlineExceeded => f.write_str("lookup deadline exceeded"),
            Self::Backend(err) => write!(f, "store error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Filtered event lookup plus relay discovery.
pub trait EventStore {
    /// Matching events, most recent first.
    fn query_events(&self, ctx: &LookupContext, filter: &Filter) -> Result<Vec<Event>, StoreError>;

    /// Read relays advertised by `pubkey`. Best effort: empty when unknown or on failure.
    fn read_relays(&self, ctx: &LookupContext, pubkey: &str) -> Vec<String>;
}

impl<S: EventStore + ?Sized> EventStore for &S {
    fn query_events(&self, ctx: &LookupContext, filter: &Filter) -> Result<Vec<Event>, StoreError> {
        (**self).query_events(ctx, filter)
    }

    fn read_relays(&self, ctx: &LookupContext, pubkey: &str) -> Vec<String> {
        (**self).read_relays(ctx, pubkey)
    }
}

impl<S: EventStore + ?Sized> EventStore for Arc<S> {
    fn query_events(&self, ctx: &LookupContext, filter: &Filter) -> Result<Vec<Event>, StoreError> {
        (**self).query_events(ctx, filter)
    }

    fn read_relays(&self, ctx: &LookupContext, pubkey: &str) -> Vec<String> {
        (**self).read_relays(ctx, pubkey)
    }
}
