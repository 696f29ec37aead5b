pub mod printer;

use std::collections::HashMap;
use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::code::Code;
use crate::codegen;

/// A named code in a registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub name: &'static str,
    pub code: Code,
}

impl Entry {
    pub const fn new(name: &'static str, code: Code) -> Self {
        Entry { name, code }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("code {name} with value {identifier} is already used by {first}")]
pub struct DuplicateCodeError {
    /// The later entry that collides.
    pub name: &'static str,
    pub identifier: u16,
    /// The entry that claimed the identifier first.
    pub first: &'static str,
}

/// Check that no two entries share an identifier. Fails on the first
/// collision in declaration order.
pub fn validate_unique(entries: &[Entry]) -> Result<(), DuplicateCodeError> {
    let mut used: HashMap<u16, &'static str> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let identifier = entry.code.identifier();
        if let Some(first) = used.insert(identifier, entry.name) {
            return Err(DuplicateCodeError { name: entry.name, identifier, first });
        }
    }
    Ok(())
}

/// A validated, immutable collection of codes in declaration order.
///
/// The only way to get one is [`Registry::new`], so every `Registry` value
/// has already passed the uniqueness check.
#[derive(Debug, Clone)]
pub struct Registry {
    name: &'static str,
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new(name: &'static str, entries: impl Into<Vec<Entry>>) -> Result<Self, DuplicateCodeError> {
        let entries = entries.into();
        validate_unique(&entries)?;
        tracing::debug!(registry = name, entries = entries.len(), "registry validated");
        Ok(Registry { name, entries })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.entries.iter().map(|e| e.code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by numeric identifier (e.g. `101`).
    pub fn lookup(&self, identifier: u16) -> Option<&Entry> {
        self.entries.iter().find(|e| e.code.identifier() == identifier)
    }

    /// Look up an entry by its declared name. Case sensitive.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn dump_json<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        codegen::json::dump(self, sink)
    }

    pub fn dump_enum<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        codegen::cpp::dump_enum(self, sink)
    }

    pub fn dump_message_map<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        codegen::cpp::dump_message_map(self, sink)
    }

    pub fn dump_translation_stubs<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        codegen::cpp::dump_translation_stubs(self, sink)
    }
}

/// Serializes as `{ "<lowercased name>": <code>, ... }` in declaration order.
impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name.to_lowercase(), &entry.code)?;
        }
        map.end()
    }
}
