// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render configuration.

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PORTAL: &str = "https://njump.me/";
pub const DEFAULT_MAX_THREAD_DEPTH: usize = 10;
pub const DEFAULT_SUMMARY_LENGTH: usize = 100;
pub const DEFAULT_SUMMARY_ELLIPSIS: &str = "...";
pub const DEFAULT_THREAD_INDENT: &str = "  ";
pub const DEFAULT_RELAY_HINT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Mirror gateway base URLs; an identifier is appended to each.
    pub portals: Vec<String>,
    pub thread_indent: String,
    /// `0` means the default depth. Negative values read as `0`.
    #[serde(deserialize_with = "non_negative_field")]
    pub max_thread_depth: usize,
    pub summary_length: usize,
    pub summary_ellipsis: String,
    /// `0` disables reflowing. Negative values read as `0`.
    #[serde(deserialize_with = "non_negative_field")]
    pub line_width: usize,
    /// Relay hints embedded in re-derived identifiers.
    pub relay_hint_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            portals: vec![DEFAULT_PORTAL.to_owned()],
            thread_indent: DEFAULT_THREAD_INDENT.to_owned(),
            max_thread_depth: DEFAULT_MAX_THREAD_DEPTH,
            summary_length: DEFAULT_SUMMARY_LENGTH,
            summary_ellipsis: DEFAULT_SUMMARY_ELLIPSIS.to_owned(),
            line_width: 0,
            relay_hint_limit: DEFAULT_RELAY_HINT_LIMIT,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    pub fn effective_max_depth(&self) -> usize {
        normalize_max_depth(self.max_thread_depth)
    }
}

/// Collapses negative widths and depths to `0`.
pub fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

fn non_negative_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    i64::deserialize(deserializer).map(non_negative)
}

pub(crate) fn normalize_max_depth(max_depth: usize) -> usize {
    if max_depth == 0 {
        DEFAULT_MAX_THREAD_DEPTH
    } else {
        max_depth
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(_) => None,
        }
    }
}
