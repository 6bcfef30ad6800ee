//! Hash-keyed symbol table.
//!
//! Entries live in a slot vector addressed by [`EntryId`]; a hash map from
//! lexeme to id gives O(1) lookup. Deleted slots are left empty and never
//! reused, so an id held by an old token can go stale but cannot alias a
//! newer entry.

use delta_ir::{DecNumber, EntryId, TokenCategory};
use rustc_hash::FxHashMap;
use tracing::{debug, error};

use crate::builtins::{self, MathFn};
use crate::command::CommandImpl;

/// Value stored with an entry.
#[derive(Copy, Clone, Debug)]
pub enum EntryAttribute {
    /// Keywords, and identifiers that were never assigned.
    Unset,
    /// Constants and workspace variables.
    Number(DecNumber),
    Function(MathFn),
    Command(CommandImpl),
}

#[derive(Clone, Debug)]
pub struct SymbolEntry {
    pub lexeme: String,
    pub category: TokenCategory,
    pub attribute: EntryAttribute,
}

impl SymbolEntry {
    pub fn new(
        lexeme: impl Into<String>,
        category: TokenCategory,
        attribute: EntryAttribute,
    ) -> Self {
        SymbolEntry {
            lexeme: lexeme.into(),
            category,
            attribute,
        }
    }

    /// A fresh user identifier without a value.
    pub fn identifier(lexeme: impl Into<String>) -> Self {
        SymbolEntry::new(lexeme, TokenCategory::Identifier, EntryAttribute::Unset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolTableError {
    #[error("`{0}` is already in the symbol table")]
    DuplicateKey(String),
    #[error("the symbol table cannot hold more than {} entries", u32::MAX)]
    Full,
}

/// Symbol table shared by the lexer and the command layer.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    slots: Vec<Option<SymbolEntry>>,
    index: FxHashMap<Box<str>, EntryId>,
}

impl SymbolTable {
    /// A table seeded with every keyword, constant, math function and command.
    pub fn new() -> Self {
        let mut table = SymbolTable::empty();
        let seeded = table.seed(builtins::entries());
        debug_assert!(seeded.is_ok(), "built-in names collide: {seeded:?}");
        if let Err(err) = seeded {
            error!(%err, "built-in names collide");
        }
        debug!(entries = table.len(), "seeded symbol table");
        table
    }

    /// Insert every entry of `entries`.
    ///
    /// Entries after a rejected one are still inserted; the first rejection
    /// is returned.
    pub fn seed(
        &mut self,
        entries: impl IntoIterator<Item = SymbolEntry>,
    ) -> Result<(), SymbolTableError> {
        let mut first_error = None;
        for entry in entries {
            if let Err(err) = self.insert(entry) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// A table with no entries at all.
    pub fn empty() -> Self {
        SymbolTable::default()
    }

    #[inline]
    pub fn lookup(&self, lexeme: &str) -> Option<EntryId> {
        self.index.get(lexeme).copied()
    }

    #[inline]
    pub fn get(&self, id: EntryId) -> Option<&SymbolEntry> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut SymbolEntry> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Take ownership of `entry`. Fails if its lexeme is already present.
    pub fn insert(&mut self, entry: SymbolEntry) -> Result<EntryId, SymbolTableError> {
        if self.index.contains_key(entry.lexeme.as_str()) {
            return Err(SymbolTableError::DuplicateKey(entry.lexeme));
        }
        let id = u32::try_from(self.slots.len())
            .map(EntryId::new)
            .map_err(|_| SymbolTableError::Full)?;

        debug!(lexeme = %entry.lexeme, category = %entry.category, "inserted symbol");
        self.index.insert(entry.lexeme.as_str().into(), id);
        self.slots.push(Some(entry));
        Ok(id)
    }

    /// Entry for `lexeme`, inserting a fresh identifier on first sighting.
    pub fn intern_identifier(&mut self, lexeme: &str) -> Result<EntryId, SymbolTableError> {
        match self.lookup(lexeme) {
            Some(id) => Ok(id),
            None => self.insert(SymbolEntry::identifier(lexeme)),
        }
    }

    /// Remove every entry of `category`; returns how many were removed.
    pub fn delete_by_category(&mut self, category: TokenCategory) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|entry| entry.category == category) {
                if let Some(entry) = slot.take() {
                    self.index.remove(entry.lexeme.as_str());
                    removed += 1;
                }
            }
        }
        debug!(%category, removed, "deleted symbols by category");
        removed
    }

    /// Entries of `category`, in insertion order.
    pub fn iter_by_category(
        &self,
        category: TokenCategory,
    ) -> impl Iterator<Item = (EntryId, &SymbolEntry)> + '_ {
        self.iter().filter(move |(_, entry)| entry.category == category)
    }

    /// Every live entry, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &SymbolEntry)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let entry = slot.as_ref()?;
            let id = EntryId::new(u32::try_from(index).ok()?);
            Some((id, entry))
        })
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Drop every entry and the table itself.
    pub fn destroy(self) {
        debug!(entries = self.len(), "destroyed symbol table");
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
