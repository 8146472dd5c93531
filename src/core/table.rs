//! Symbol table: token → rendering lookup shared by the engine and scanner
//!
//! The table starts from the built-in groups in `data::symbols` and layers an
//! optional user mapping file on top. Entries keep their insertion order so
//! an exported mapping file reads like the defaults. Substitution needs the
//! keys longest-first; that order is computed once and kept up to date by
//! `upsert` instead of re-sorting on every call.

use std::cmp::Ordering;
use std::path::Path;

use crate::data::symbols::{FxIndexMap, DEFAULT_SYMBOLS};
use crate::features::mappings::load_mappings;
use crate::utils::error::{FixError, FixWarning};

/// Editable token → rendering mapping
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: FxIndexMap<String, String>,
    /// Indices into `entries`, longest key first
    by_length: Vec<usize>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SymbolTable {
    /// A table with no entries at all
    pub fn empty() -> Self {
        Self {
            entries: FxIndexMap::default(),
            by_length: Vec::new(),
        }
    }

    /// A table holding only the built-in mappings
    pub fn with_defaults() -> Self {
        Self::from_entries(
            DEFAULT_SYMBOLS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    /// Build a table from arbitrary entries, later duplicates winning
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        for (token, rendering) in entries {
            let token = token.into();
            if token.is_empty() {
                continue;
            }
            table.entries.insert(token, rendering.into());
        }
        table.reindex();
        table
    }

    /// Defaults merged with the mapping file at `override_path`, if any.
    ///
    /// Problems with the file are logged and otherwise ignored.
    pub fn build(override_path: Option<&Path>) -> Self {
        Self::build_with_warnings(override_path).0
    }

    /// Like [`SymbolTable::build`], also handing back the non-fatal problem
    /// so a driver can report it.
    pub fn build_with_warnings(override_path: Option<&Path>) -> (Self, Option<FixWarning>) {
        let mut table = Self::with_defaults();
        let Some(path) = override_path else {
            return (table, None);
        };

        if !path.exists() {
            log::debug!(
                "Mapping file {} not found, using built-in mappings",
                path.display()
            );
            return (table, None);
        }

        match load_mappings(path) {
            Ok(overrides) => {
                log::debug!(
                    "Loaded {} custom mappings from {}",
                    overrides.len(),
                    path.display()
                );
                table.merge(overrides);
                (table, None)
            }
            Err(err) => {
                log::warn!("Could not load custom mappings: {}", err);
                let warning = FixWarning::from(err)
                    .with_suggestion("continuing with built-in mappings only");
                (table, Some(warning))
            }
        }
    }

    /// Layer `overrides` on top of the current entries
    pub fn merge<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (token, rendering) in overrides {
            self.upsert(token, rendering);
        }
    }

    /// Exact, case-sensitive lookup
    #[inline]
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Add or replace an entry, returning the previous rendering.
    ///
    /// Empty tokens are ignored: they would match everywhere.
    pub fn upsert(&mut self, token: impl Into<String>, rendering: impl Into<String>) -> Option<String> {
        let token = token.into();
        if token.is_empty() {
            log::debug!("Ignoring mapping with an empty token");
            return None;
        }

        let (index, previous) = self.entries.insert_full(token, rendering.into());
        if previous.is_none() {
            let key = self.key_at(index);
            let pos = self
                .by_length
                .partition_point(|&i| longest_first(self.key_at(i), key) == Ordering::Less);
            self.by_length.insert(pos, index);
        }
        previous
    }

    /// Entries ordered for substitution: longest key first, ties by key
    pub fn keys_longest_first(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_length.iter().filter_map(move |&i| {
            self.entries
                .get_index(i)
                .map(|(k, v)| (k.as_str(), v.as_str()))
        })
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The full current mapping, ready for persistence
    pub fn export(&self) -> &FxIndexMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key_at(&self, index: usize) -> &str {
        self.entries
            .get_index(index)
            .map(|(k, _)| k.as_str())
            .unwrap_or_default()
    }

    fn reindex(&mut self) {
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| longest_first(self.key_at(a), self.key_at(b)));
        self.by_length = order;
    }
}

impl TryFrom<&Path> for SymbolTable {
    type Error = FixError;

    /// Strict variant of [`SymbolTable::build`]: a bad mapping file is an error
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let mut table = Self::with_defaults();
        table.merge(load_mappings(path)?);
        Ok(table)
    }
}

#[inline]
fn longest_first(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_loaded() {
        let table = SymbolTable::with_defaults();
        assert_eq!(table.lookup(r"\alpha"), Some("α"));
        assert_eq!(table.lookup(r"\beta"), Some("β"));
        assert_eq!(table.lookup("x^2"), Some("x²"));
        assert_eq!(table.lookup(r"\times"), Some("×"));
        assert_eq!(table.lookup(r"\leq"), Some("≤"));
        assert_eq!(table.lookup(r"\in"), Some("∈"));
        assert_eq!(table.lookup(r"\sum"), Some("∑"));
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let table = SymbolTable::with_defaults();
        assert_eq!(table.lookup(r"\Delta"), Some("Δ"));
        assert_eq!(table.lookup(r"\delta"), Some("δ"));
        assert_eq!(table.lookup(r"\DELTA"), None);
        assert_eq!(table.lookup(r"\alpha "), None);
    }

    #[test]
    fn test_longest_first_order() {
        let table = SymbolTable::with_defaults();
        let lengths: Vec<usize> = table.keys_longest_first().map(|(k, _)| k.len()).collect();
        assert_eq!(lengths.len(), table.len());
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));

        let pos = |needle: &str| {
            table
                .keys_longest_first()
                .position(|(k, _)| k == needle)
                .unwrap()
        };
        assert!(pos(r"\infty") < pos(r"\in"));
        assert!(pos(r"\sum_{i=1}^n") < pos(r"\sum"));
    }

    #[test]
    fn test_upsert_replaces_and_keeps_order_valid() {
        let mut table = SymbolTable::with_defaults();
        let before = table.len();

        assert_eq!(table.upsert(r"\alpha", "alpha"), Some("α".to_string()));
        assert_eq!(table.len(), before);
        assert_eq!(table.lookup(r"\alpha"), Some("alpha"));

        assert_eq!(table.upsert(r"\mathcal{O}(n)", "O(n)"), None);
        assert_eq!(table.len(), before + 1);
        let lengths: Vec<usize> = table.keys_longest_first().map(|(k, _)| k.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert!(table
            .keys_longest_first()
            .any(|(k, v)| k == r"\mathcal{O}(n)" && v == "O(n)"));
    }

    #[test]
    fn test_upsert_ignores_empty_token() {
        let mut table = SymbolTable::empty();
        assert_eq!(table.upsert("", "nothing"), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_export_preserves_insertion_order() {
        let mut table = SymbolTable::from_entries([("b", "2"), ("a", "1")]);
        table.upsert("c", "3");
        table.upsert("b", "two");
        let keys: Vec<&String> = table.export().keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(table.export()["b"], "two");
    }

    #[test]
    fn test_build_without_override() {
        let (table, warning) = SymbolTable::build_with_warnings(None);
        assert!(warning.is_none());
        assert_eq!(table.len(), SymbolTable::with_defaults().len());
    }

    #[test]
    fn test_build_with_missing_override_is_silent() {
        let path = Path::new("definitely/not/here/math_mappings.json");
        let (table, warning) = SymbolTable::build_with_warnings(Some(path));
        assert!(warning.is_none());
        assert_eq!(table.lookup(r"\alpha"), Some("α"));
    }
}
