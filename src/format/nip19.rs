// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bech32 identifier codec (`npub`, `nprofile`, `note`, `nevent`, `naddr`).
//!
//! Shareable variants carry a TLV payload:
//! - `0` special: pubkey (`nprofile`), event id (`nevent`) or identifier (`naddr`)
//! - `1` relay URL, repeatable
//! - `2` author pubkey
//! - `3` kind, 32-bit big-endian

use std::fmt;

use bech32::{Bech32, Hrp};

use crate::model::ids::{EventIdHex, HexId, PublicKeyHex, HEX_ID_BYTES};
use crate::model::pointer::{
    AddressPointer, DecodedPointer, EntityKind, EventPointer, ProfilePointer, RelayHints,
};

const TLV_SPECIAL: u8 = 0;
const TLV_RELAY: u8 = 1;
const TLV_AUTHOR: u8 = 2;
const TLV_KIND: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nip19Error {
    /// Bad bech32 encoding or checksum.
    Bech32(String),
    /// Well-formed bech32 whose prefix is not one of the five renderable variants.
    UnsupportedPrefix(String),
    MissingField(&'static str),
    InvalidLength { field: &'static str, expected: usize, actual: usize },
    MalformedTlv,
    InvalidUtf8(&'static str),
    Encode(String),
}

impl fmt::Display for Nip19Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bech32(err) => write!(f, "invalid bech32: {err}"),
            Self::UnsupportedPrefix(prefix) => {
                write!(f, "unsupported identifier prefix '{prefix}'")
            }
            Self::MissingField(field) => write!(f, "identifier is missing {field}"),
            Self::InvalidLength { field, expected, actual } => {
                write!(f, "{field} must be {expected} bytes, got {actual}")
            }
            Self::MalformedTlv => f.write_str("truncated TLV payload"),
            Self::InvalidUtf8(field) => write!(f, "{field} is not valid UTF-8"),
            Self::Encode(err) => write!(f, "cannot encode identifier: {err}"),
        }
    }
}

impl std::error::Error for Nip19Error {}

/// Decodes a bare identifier (no scheme prefix) into a typed pointer.
pub fn decode(token: &str) -> Result<DecodedPointer, Nip19Error> {
    let (hrp, data) = bech32::decode(token).map_err(|err| Nip19Error::Bech32(err.to_string()))?;
    let prefix = hrp.as_str().to_ascii_lowercase();
    let Some(kind) = EntityKind::from_hrp(&prefix) else {
        return Err(Nip19Error::UnsupportedPrefix(prefix));
    };

    match kind {
        EntityKind::Pubkey => Ok(DecodedPointer::Pubkey(hex_id(&data, "pubkey")?)),
        EntityKind::Note => Ok(DecodedPointer::Note(hex_id(&data, "event id")?)),
        EntityKind::Profile => {
            let tlv = Tlv::parse(&data)?;
            let special = tlv.special.ok_or(Nip19Error::MissingField("pubkey"))?;
            Ok(DecodedPointer::Profile(ProfilePointer {
                pubkey: hex_id(special, "pubkey")?,
                relays: tlv.relays,
            }))
        }
        EntityKind::Event => {
            let tlv = Tlv::parse(&data)?;
            let special = tlv.special.ok_or(Nip19Error::MissingField("event id"))?;
            Ok(DecodedPointer::Event(EventPointer {
                id: hex_id(special, "event id")?,
                relays: tlv.relays,
                author: tlv.author.map(|author| hex_id(author, "author")).transpose()?,
                kind: tlv.kind,
            }))
        }
        EntityKind::Parameterized => {
            let tlv = Tlv::parse(&data)?;
            let special = tlv.special.ok_or(Nip19Error::MissingField("identifier"))?;
            let identifier = std::str::from_utf8(special)
                .map_err(|_| Nip19Error::InvalidUtf8("identifier"))?
                .to_owned();
            let author = tlv.author.ok_or(Nip19Error::MissingField("author"))?;
            Ok(DecodedPointer::Address(AddressPointer {
                kind: tlv.kind.ok_or(Nip19Error::MissingField("kind"))?,
                pubkey: hex_id(author, "author")?,
                identifier,
                relays: tlv.relays,
            }))
        }
    }
}

/// Encodes a pointer into its canonical bare bech32 form.
pub fn encode(pointer: &DecodedPointer) -> Result<String, Nip19Error> {
    let hrp = pointer.kind().hrp();
    match pointer {
        DecodedPointer::Pubkey(pubkey) => encode_bech32(hrp, &pubkey.to_bytes()),
        DecodedPointer::Note(id) => encode_bech32(hrp, &id.to_bytes()),
        DecodedPointer::Profile(profile) => {
            let mut out = Vec::new();
            push_tlv(&mut out, TLV_SPECIAL, &profile.pubkey.to_bytes())?;
            push_relays(&mut out, &profile.relays)?;
            encode_bech32(hrp, &out)
        }
        DecodedPointer::Event(event) => {
            let mut out = Vec::new();
            push_tlv(&mut out, TLV_SPECIAL, &event.id.to_bytes())?;
            push_relays(&mut out, &event.relays)?;
            if let Some(author) = &event.author {
                push_tlv(&mut out, TLV_AUTHOR, &author.to_bytes())?;
            }
            if let Some(kind) = event.kind {
                push_tlv(&mut out, TLV_KIND, &kind.to_be_bytes())?;
            }
            encode_bech32(hrp, &out)
        }
        DecodedPointer::Address(addr) => {
            let mut out = Vec::new();
            push_tlv(&mut out, TLV_SPECIAL, addr.identifier.as_bytes())?;
            push_relays(&mut out, &addr.relays)?;
            push_tlv(&mut out, TLV_AUTHOR, &addr.pubkey.to_bytes())?;
            push_tlv(&mut out, TLV_KIND, &addr.kind.to_be_bytes())?;
            encode_bech32(hrp, &out)
        }
    }
}

fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String, Nip19Error> {
    let hrp = Hrp::parse(hrp).map_err(|err| Nip19Error::Encode(err.to_string()))?;
    bech32::encode::<Bech32>(hrp, data).map_err(|err| Nip19Error::Encode(err.to_string()))
}

fn push_tlv(out: &mut Vec<u8>, tag: u8, value: &[u8]) -> Result<(), Nip19Error> {
    let len = u8::try_from(value.len())
        .map_err(|_| Nip19Error::Encode(format!("TLV value of {} bytes", value.len())))?;
    out.push(tag);
    out.push(len);
    out.extend_from_slice(value);
    Ok(())
}

fn push_relays(out: &mut Vec<u8>, relays: &[String]) -> Result<(), Nip19Error> {
    for relay in relays {
        push_tlv(out, TLV_RELAY, relay.as_bytes())?;
    }
    Ok(())
}

fn hex_id<T>(bytes: &[u8], field: &'static str) -> Result<HexId<T>, Nip19Error> {
    HexId::from_slice(bytes).map_err(|_| Nip19Error::InvalidLength {
        field,
        expected: HEX_ID_BYTES,
        actual: bytes.len(),
    })
}

/// Fields of a TLV payload. Only the first special/author/kind entry counts;
/// unknown tags are skipped.
#[derive(Debug, Default)]
struct Tlv<'a> {
    special: Option<&'a [u8]>,
    relays: RelayHints,
    author: Option<&'a [u8]>,
    kind: Option<u32>,
}

impl<'a> Tlv<'a> {
    fn parse(mut data: &'a [u8]) -> Result<Self, Nip19Error> {
        let mut tlv = Tlv::default();
        while !data.is_empty() {
            let [tag, len, rest @ ..] = data else {
                return Err(Nip19Error::MalformedTlv);
            };
            let len = usize::from(*len);
            if rest.len() < len {
                return Err(Nip19Error::MalformedTlv);
            }
            let (value, remaining) = rest.split_at(len);
            data = remaining;

            match *tag {
                TLV_SPECIAL if tlv.special.is_none() => tlv.special = Some(value),
                TLV_RELAY => {
                    if let Ok(relay) = std::str::from_utf8(value) {
                        tlv.relays.push(relay.to_owned());
                    }
                }
                TLV_AUTHOR if tlv.author.is_none() => tlv.author = Some(value),
                TLV_KIND if tlv.kind.is_none() => {
                    let bytes: [u8; 4] = value.try_into().map_err(|_| {
                        Nip19Error::InvalidLength { field: "kind", expected: 4, actual: len }
                    })?;
                    tlv.kind = Some(u32::from_be_bytes(bytes));
                }
                _ => {}
            }
        }
        Ok(tlv)
    }
}

/// Hex pubkey helper shared by callers that only hold raw strings.
pub fn encode_npub(pubkey: &str) -> Result<String, Nip19Error> {
    let pubkey = PublicKeyHex::new(pubkey).map_err(|err| Nip19Error::Encode(err.to_string()))?;
    encode(&DecodedPointer::Pubkey(pubkey))
}

/// Accepts either a hex pubkey or an `npub`/`nprofile` identifier.
pub fn parse_pubkey(input: &str) -> Option<PublicKeyHex> {
    let input = input.trim();
    let input = input.strip_prefix(crate::model::SCHEME_PREFIX).unwrap_or(input);
    if let Ok(pubkey) = PublicKeyHex::new(input) {
        return Some(pubkey);
    }
    match decode(input).ok()? {
        DecodedPointer::Pubkey(pubkey) | DecodedPointer::Profile(ProfilePointer { pubkey, .. }) => {
            Some(pubkey)
        }
        _ => None,
    }
}

/// Accepts either a hex event id or a `note`/`nevent` identifier.
pub fn parse_event_id(input: &str) -> Option<EventIdHex> {
    let input = input.trim();
    let input = input.strip_prefix(crate::model::SCHEME_PREFIX).unwrap_or(input);
    if let Ok(id) = EventIdHex::new(input) {
        return Some(id);
    }
    match decode(input).ok()? {
        DecodedPointer::Note(id) | DecodedPointer::Event(EventPointer { id, .. }) => Some(id),
        _ => None,
    }
}
