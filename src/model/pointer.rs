// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gemstr-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gemstr and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::ids::{EventIdHex, PublicKeyHex};

/// Relay URLs carried alongside a pointer. Most identifiers carry zero to two.
pub type RelayHints = SmallVec<[String; 2]>;

/// The five identifier variants the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Pubkey,
    Profile,
    Note,
    Event,
    Parameterized,
}

impl EntityKind {
    /// Bech32 human-readable prefix for this variant.
    pub fn hrp(self) -> &'static str {
        match self {
            Self::Pubkey => "npub",
            Self::Profile => "nprofile",
            Self::Note => "note",
            Self::Event => "nevent",
            Self::Parameterized => "naddr",
        }
    }

    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "npub" => Some(Self::Pubkey),
            "nprofile" => Some(Self::Profile),
            "note" => Some(Self::Note),
            "nevent" => Some(Self::Event),
            "naddr" => Some(Self::Parameterized),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pubkey => "pubkey",
            Self::Profile => "profile",
            Self::Note => "note",
            Self::Event => "event",
            Self::Parameterized => "parameterized",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePointer {
    pub pubkey: PublicKeyHex,
    pub relays: RelayHints,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPointer {
    pub id: EventIdHex,
    pub relays: RelayHints,
    pub author: Option<PublicKeyHex>,
    pub kind: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPointer {
    pub kind: u32,
    pub pubkey: PublicKeyHex,
    pub identifier: String,
    pub relays: RelayHints,
}

/// A decoded cross-reference identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPointer {
    Pubkey(PublicKeyHex),
    Profile(ProfilePointer),
    Note(EventIdHex),
    Event(EventPointer),
    Address(AddressPointer),
}

impl DecodedPointer {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Pubkey(_) => EntityKind::Pubkey,
            Self::Profile(_) => EntityKind::Profile,
            Self::Note(_) => EntityKind::Note,
            Self::Event(_) => EntityKind::Event,
            Self::Address(_) => EntityKind::Parameterized,
        }
    }

    /// Internal link path for the pointed-to entity.
    pub fn link_path(&self) -> String {
        match self {
            Self::Pubkey(pubkey) | Self::Profile(ProfilePointer { pubkey, .. }) => {
                format!("/profile/{pubkey}")
            }
            Self::Note(id) | Self::Event(EventPointer { id, .. }) => format!("/note/{id}"),
            Self::Address(addr) => format!(
                "/addr/{}/{}/{}",
                addr.kind,
                addr.pubkey,
                urlencoding::encode(&addr.identifier)
            ),
        }
    }

    pub fn relays(&self) -> &[String] {
        match self {
            Self::Pubkey(_) | Self::Note(_) => &[],
            Self::Profile(p) => p.relays.as_slice(),
            Self::Event(e) => e.relays.as_slice(),
            Self::Address(a) => a.relays.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressPointer, DecodedPointer, EntityKind, EventPointer, RelayHints};
    use crate::model::ids::{EventIdHex, PublicKeyHex};

    const PK: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

    #[test]
    fn hrp_roundtrips_for_every_kind() {
        for kind in [
            EntityKind::Pubkey,
            EntityKind::Profile,
            EntityKind::Note,
            EntityKind::Event,
            EntityKind::Parameterized,
        ] {
            assert_eq!(EntityKind::from_hrp(kind.hrp()), Some(kind));
        }
        assert_eq!(EntityKind::from_hrp("nsec"), None);
    }

    #[test]
    fn link_paths_follow_variant() {
        let pubkey = PublicKeyHex::new(PK).expect("pubkey");
        let id = EventIdHex::new("ab".repeat(32)).expect("id");

        assert_eq!(DecodedPointer::Pubkey(pubkey.clone()).link_path(), format!("/profile/{PK}"));

        let event = DecodedPointer::Event(EventPointer {
            id: id.clone(),
            relays: RelayHints::new(),
            author: None,
            kind: None,
        });
        assert_eq!(event.link_path(), format!("/note/{id}"));

        let addr = DecodedPointer::Address(AddressPointer {
            kind: 30023,
            pubkey,
            identifier: "my article".to_owned(),
            relays: RelayHints::new(),
        });
        assert_eq!(addr.link_path(), format!("/addr/30023/{PK}/my%20article"));
        assert_eq!(addr.kind(), EntityKind::Parameterized);
    }
}
