//! UAS Datalink Local Set dictionary implementation,
//! and the registry of standard universal labels.

use crate::entries::ENTRIES;
use klv_core::dictionary::{
    LocalSetDictionary, LocalSetEntryRef, UlDictionary, UlEntryRef, ValueKind,
};
use klv_core::{Tag, UniversalLabel};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The universal label of the MISB ST 0601 UAS Datalink Local Set.
pub const UAS_DATALINK_LOCAL_SET: UniversalLabel = UniversalLabel::new([
    0x06, 0x0E, 0x2B, 0x34, 0x02, 0x0B, 0x01, 0x01, 0x0E, 0x01, 0x03, 0x01, 0x01, 0x00, 0x00,
    0x00,
]);

/// The index over the UAS Datalink entry table, built on first use.
///
/// This structure is made opaque via the unit type
/// [`UasDatalinkLocalSet`], which provides a lazily loaded singleton
/// implementing the necessary traits.
#[derive(Debug)]
pub struct UasDatalinkRegistry {
    /// mapping: encoded key bytes → entry
    by_key: HashMap<&'static [u8], &'static LocalSetEntryRef<'static>>,
    /// mapping: numeric tag → entry
    by_tag: HashMap<Tag, &'static LocalSetEntryRef<'static>>,
}

static DICT: Lazy<UasDatalinkRegistry> = Lazy::new(init_dictionary);

fn init_dictionary() -> UasDatalinkRegistry {
    let mut by_key = HashMap::with_capacity(ENTRIES.len());
    let mut by_tag = HashMap::with_capacity(ENTRIES.len());
    for entry in ENTRIES {
        by_key.insert(entry.key, entry);
        by_tag.insert(entry.tag(), entry);
    }
    UasDatalinkRegistry { by_key, by_tag }
}

/// Retrieve a singleton instance of the UAS Datalink registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
#[inline]
pub fn registry() -> &'static UasDatalinkRegistry {
    &DICT
}

/// A dictionary of the UAS Datalink Local Set tags,
/// backed by a lazily initialized registry.
///
/// This is the dictionary which would generally be used
/// whenever ST 0601 metadata is being read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UasDatalinkLocalSet;

impl LocalSetDictionary for UasDatalinkLocalSet {
    fn name(&self) -> &str {
        "UAS Datalink Local Set"
    }

    fn by_key(&self, key: &[u8]) -> Option<&LocalSetEntryRef<'static>> {
        registry().by_key.get(key).copied()
    }

    fn by_tag(&self, tag: Tag) -> Option<&LocalSetEntryRef<'static>> {
        registry().by_tag.get(&tag).copied()
    }
}

static UL_ENTRIES: &[UlEntryRef<'static>] = &[UlEntryRef {
    ul: UAS_DATALINK_LOCAL_SET,
    name: "UAS Datalink Local Set",
    dictionary: &UasDatalinkLocalSet,
}];

static UL_DICT: Lazy<HashMap<UniversalLabel, &'static UlEntryRef<'static>>> = Lazy::new(|| {
    UL_ENTRIES.iter().map(|entry| (entry.ul, entry)).collect()
});

/// The dictionary of standard universal labels. A stream parser built
/// over it recognizes the UAS Datalink Local Set; anything else in the
/// stream is treated as noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardUlDictionary;

impl UlDictionary for StandardUlDictionary {
    fn by_ul(&self, ul: &UniversalLabel) -> Option<&UlEntryRef<'static>> {
        UL_DICT.get(ul).copied()
    }
}
