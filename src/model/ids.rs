// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Length of a decoded key or event id in bytes.
pub const HEX_ID_BYTES: usize = 32;

/// A 32-byte identifier held in its canonical lowercase hex form.
///
/// Pubkeys and event ids share the representation; the marker type keeps them
/// from being mixed up at call sites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexId<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HexId<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let mut value = value.into();
        validate_hex_id(&value)?;
        value.make_ascii_lowercase();
        Ok(Self { value, _marker: PhantomData })
    }

    pub fn from_bytes(bytes: &[u8; HEX_ID_BYTES]) -> Self {
        Self { value: hex::encode(bytes), _marker: PhantomData }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let bytes: &[u8; HEX_ID_BYTES] =
            bytes.try_into().map_err(|_| IdError::InvalidLength { actual: bytes.len() * 2 })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_bytes(&self) -> [u8; HEX_ID_BYTES] {
        let mut out = [0u8; HEX_ID_BYTES];
        // Validated on construction.
        if hex::decode_to_slice(&self.value, &mut out).is_err() {
            out = [0u8; HEX_ID_BYTES];
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for HexId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for HexId<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for HexId<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for HexId<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for HexId<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    InvalidLength { actual: usize },
    InvalidHex,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::InvalidLength { actual } => {
                write!(f, "id must be {} hex chars, got {actual}", HEX_ID_BYTES * 2)
            }
            Self::InvalidHex => f.write_str("id must be hex encoded"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_hex_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.len() != HEX_ID_BYTES * 2 {
        return Err(IdError::InvalidLength { actual: value.len() });
    }
    if !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdError::InvalidHex);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublicKeyTag {}
pub type PublicKeyHex = HexId<PublicKeyTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventIdTag {}
pub type EventIdHex = HexId<EventIdTag>;
