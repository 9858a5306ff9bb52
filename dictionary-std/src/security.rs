//! Security Local Set dictionary implementation.
//!
//! The MISB ST 0102 Security Local Set travels nested inside the UAS
//! Datalink Local Set (tag 48). The subset recorded here covers the
//! mandatory marking fields; additional tags decode as unknown
//! elements without loss.

use klv_core::dictionary::{LocalSetDictionary, LocalSetEntryRef, ValueKind};
use klv_core::Tag;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type E<'a> = LocalSetEntryRef<'a>;

/// Entries of the MISB ST 0102 Security Local Set.
pub const SECURITY_ENTRIES: &[E<'static>] = &[
    E {
        key: &[0x01],
        name: "Security Classification",
        kind: ValueKind::Integer { domain: (0, 255) },
    },
    E {
        key: &[0x02],
        name: "Classifying Country Coding Method",
        kind: ValueKind::Integer { domain: (0, 255) },
    },
    E {
        key: &[0x03],
        name: "Classifying Country",
        kind: ValueKind::Text,
    },
    E {
        key: &[0x04],
        name: "Security-SCI/SHI Information",
        kind: ValueKind::Text,
    },
    E {
        key: &[0x05],
        name: "Caveats",
        kind: ValueKind::Text,
    },
    E {
        key: &[0x06],
        name: "Releasing Instructions",
        kind: ValueKind::Text,
    },
    E {
        key: &[0x0C],
        name: "Object Country Coding Method",
        kind: ValueKind::Integer { domain: (0, 255) },
    },
    E {
        key: &[0x0D],
        name: "Object Country Codes",
        kind: ValueKind::Text,
    },
    E {
        key: &[0x16],
        name: "Security Metadata Version",
        kind: ValueKind::Integer { domain: (0, 65535) },
    },
];

/// The index over [`SECURITY_ENTRIES`], built on first use.
#[derive(Debug)]
pub struct SecurityLocalSetRegistry {
    by_key: HashMap<&'static [u8], &'static E<'static>>,
    by_tag: HashMap<Tag, &'static E<'static>>,
}

static DICT: Lazy<SecurityLocalSetRegistry> = Lazy::new(init_dictionary);

fn init_dictionary() -> SecurityLocalSetRegistry {
    let mut by_key = HashMap::with_capacity(SECURITY_ENTRIES.len());
    let mut by_tag = HashMap::with_capacity(SECURITY_ENTRIES.len());
    for entry in SECURITY_ENTRIES {
        by_key.insert(entry.key, entry);
        by_tag.insert(entry.tag(), entry);
    }
    SecurityLocalSetRegistry { by_key, by_tag }
}

/// Retrieve a singleton instance of the Security Local Set registry.
#[inline]
pub fn security_registry() -> &'static SecurityLocalSetRegistry {
    &DICT
}

/// A dictionary of the Security Local Set tags,
/// backed by a lazily initialized registry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecurityLocalSet;

impl LocalSetDictionary for SecurityLocalSet {
    fn name(&self) -> &str {
        "Security Local Set"
    }

    fn by_key(&self, key: &[u8]) -> Option<&LocalSetEntryRef<'static>> {
        security_registry().by_key.get(key).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&LocalSetEntryRef<'static>> {
        security_registry().by_tag.get(&tag).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_entries_are_indexed() {
        let dict = SecurityLocalSet;
        let entry = dict.by_key(&[0x03]).unwrap();
        assert_eq!(entry.name, "Classifying Country");
        assert_eq!(dict.by_tag(Tag(22)).unwrap().name, "Security Metadata Version");
        assert!(dict.by_key(&[0x70]).is_none());
    }
}
