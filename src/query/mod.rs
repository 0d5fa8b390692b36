// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Store-backed read-only queries.
//!
//! Queries derive render inputs (reply trees, engagement counts) from an [`EventStore`].
//! They degrade to empty results instead of failing.
//!
//! [`EventStore`]: crate::store::EventStore

pub mod aggregates;
pub mod thread;

pub use aggregates::tally;
pub use thread::fetch_thread;
