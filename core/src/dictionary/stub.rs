//! This module contains a stub dictionary.

use super::{LocalSetDictionary, LocalSetEntryRef};

/// An empty local set dictionary. Parsing against it preserves
/// every element as an unknown tag with its raw bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubDictionary;

impl LocalSetDictionary for StubDictionary {
    fn name(&self) -> &str {
        "stub"
    }

    fn by_key(&self, _: &[u8]) -> Option<&LocalSetEntryRef<'static>> {
        None
    }
}
