// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Events as handed over by storage, decoded identifier pointers, resolved entities and
//! reply trees. Everything here is built fresh per render and dropped on return.

pub mod entity;
pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod pointer;
pub mod thread;

pub use entity::{dedup_entities, ResolvedEntity, SCHEME_PREFIX};
pub use event::{kinds, Event, ProfileMetadata};
pub use ids::{EventIdHex, HexId, IdError, PublicKeyHex};
pub use pointer::{
    AddressPointer, DecodedPointer, EntityKind, EventPointer, ProfilePointer, RelayHints,
};
pub use thread::{EventAggregates, ThreadNode};
