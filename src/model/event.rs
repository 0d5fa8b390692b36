// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Well-known event kinds the renderer distinguishes.
pub mod kinds {
    pub const METADATA: u16 = 0;
    pub const TEXT_NOTE: u16 = 1;
    pub const REACTION: u16 = 7;
    pub const ZAP_RECEIPT: u16 = 9735;
    pub const RELAY_LIST: u16 = 10002;
    pub const LONG_FORM: u16 = 30023;
}

/// A decoded protocol event as handed over by the storage collaborator.
///
/// Fields are kept as plain strings: events come from outside and may be
/// malformed, so typed ids are only derived where an operation needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub pubkey: String,
    pub kind: u16,
    pub created_at: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        pubkey: impl Into<String>,
        kind: u16,
        created_at: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pubkey: pubkey.into(),
            kind,
            created_at,
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag<I, S>(mut self, tag: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.push(tag.into_iter().map(Into::into).collect());
        self
    }

    /// Value of the first tag named `name` that carries a value.
    pub fn tag_value(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.first().map(String::as_str) == Some(name) && tag.len() > 1)
            .map(|tag| tag[1].as_str())
    }

    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.first().map(String::as_str) == Some(name))
            .map(Vec::as_slice)
    }

    pub fn title(&self) -> Option<&str> {
        self.tag_value("title")
    }

    /// The `d` tag value addressing a parameterized replaceable event.
    pub fn identifier(&self) -> Option<&str> {
        self.tag_value("d")
    }

    pub fn is_text_note(&self) -> bool {
        self.kind == kinds::TEXT_NOTE
    }

    /// Thread root referenced by this event, if any.
    ///
    /// Prefers an `e` tag marked `root`; falls back to the first positional `e` tag.
    pub fn root_id(&self) -> Option<&str> {
        let mut first = None;
        for tag in self.tags_named("e") {
            let Some(id) = tag.get(1) else { continue };
            if tag.get(3).map(String::as_str) == Some("root") {
                return Some(id.as_str());
            }
            if first.is_none() && tag.get(3).map_or(true, |m| m.is_empty()) {
                first = Some(id.as_str());
            }
        }
        first
    }

    /// Direct parent referenced by this event, if any.
    ///
    /// Marker order: `reply`, then `root`, then the last unmarked `e` tag.
    pub fn parent_id(&self) -> Option<&str> {
        let mut root = None;
        let mut positional = None;
        for tag in self.tags_named("e") {
            let Some(id) = tag.get(1) else { continue };
            match tag.get(3).map(String::as_str) {
                Some("reply") => return Some(id.as_str()),
                Some("root") => root = Some(id.as_str()),
                Some("mention") => {}
                _ => positional = Some(id.as_str()),
            }
        }
        root.or(positional)
    }
}

/// Profile metadata carried as JSON in a kind-0 event's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name_camel: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nip05: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub lud16: Option<String>,
}

impl ProfileMetadata {
    /// Parses metadata content, treating malformed JSON as absent metadata.
    pub fn from_content(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// First non-blank of `display_name` (either spelling), `name`, `nip05`.
    pub fn best_name(&self) -> Option<&str> {
        [&self.display_name, &self.display_name_camel, &self.name, &self.nip05]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}
