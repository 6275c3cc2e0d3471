//! Per-parse string interning.
//!
//! Each parse owns a fresh `SymbolTable`. When parsing succeeds the table
//! moves into the compiled expression so names can be resolved at evaluation
//! time. Nothing here is shared between unrelated parses.

use rustc_hash::FxHashMap;

use super::Name;

/// Append-only pool of identifier strings with hash-based dedup.
#[derive(Clone)]
pub struct SymbolTable {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = SymbolTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(16),
        };
        table.map.insert("".into(), Name::EMPTY);
        table.strings.push("".into());
        table
    }

    /// Intern `text`, returning the existing `Name` if it was seen before.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        // Sources are capped at u32::MAX bytes, so the count of distinct
        // symbols always fits.
        let name = Name::from_raw(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(text.into());
        self.map.insert(text.into(), name);
        name
    }

    /// Look up `text` without interning it.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.map.get(text).copied()
    }

    /// Text of `name`. Names from another table resolve to `""`.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the pre-interned empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }

    /// All interned strings in insertion order, skipping the empty string.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &str)> {
        self.strings
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, s)| (Name::from_raw(u32::try_from(i).unwrap_or(u32::MAX)), &**s))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.strings.len())
            .finish()
    }
}
