//! Hierarchical path alias resolution.
//!
//! Aliases are symbolic, slash-delimited path shortcuts marked with the `@`
//! sigil (`@app/views` -> `/var/www/app/views`). The table is keyed by the
//! root segment of each alias; several nested aliases may share one root,
//! and lookups pick the most specific registered name.
//!
//! Resolution of an unknown alias is a recoverable condition, never a panic:
//! URL and template helpers fall back to treating the input as a literal
//! path, and the host surfaces the diagnostic.

use std::collections::HashMap;

use crate::error::{RockError, RockResult};
use crate::text;

/// Path delimiter inside alias names and resolved paths.
const DELIMITER: char = '/';

/// The character marking a string as an alias reference.
const SIGIL: char = '@';

/// Value stored under a root key.
///
/// `Leaf` holds the single resolved path of a root registered on its own.
/// `Nested` holds the paths of every alias sharing the root, keyed by full
/// alias name (the root name itself included, when it was registered flat
/// before nested aliases arrived).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasEntry {
    Leaf(String),
    Nested(HashMap<String, String>),
}

/// Registry of path aliases.
///
/// One instance is created by the composition root at startup, populated
/// with [`set`](AliasResolver::set) and queried with
/// [`get`](AliasResolver::get) thereafter. Concurrent mutation needs
/// external synchronization: `set` performs a read-then-write on the root
/// key.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    aliases: HashMap<String, AliasEntry>,
}

impl AliasResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` as a shortcut for `path`, or deletes the entry
    /// when `path` is `None`.
    ///
    /// A missing `@` sigil on `alias` is coerced. A literal `path` is
    /// right-trimmed of trailing slashes and backslashes; an alias `path`
    /// is resolved eagerly against the table as it stands now, so later
    /// re-registration of its target does not move this entry. An alias
    /// `path` that does not resolve fails the registration and leaves the
    /// table unchanged.
    pub fn set(&mut self, alias: &str, path: Option<&str>) -> RockResult<()> {
        let alias = Self::with_sigil(alias);
        let root = Self::root_of(&alias).to_string();
        let is_root = root == alias;

        let Some(path) = path else {
            self.delete(&root, &alias, is_root);
            return Ok(());
        };

        let path = if path.starts_with(SIGIL) {
            self.get(path)?
        } else {
            text::trim_end_any(path, &['/', '\\']).to_string()
        };

        let entry = match self.aliases.remove(&root) {
            None => {
                if is_root {
                    AliasEntry::Leaf(path)
                } else {
                    AliasEntry::Nested(HashMap::from([(alias, path)]))
                }
            }
            Some(AliasEntry::Leaf(old)) => {
                if is_root {
                    AliasEntry::Leaf(path)
                } else {
                    // The root had a flat value: keep it reachable under
                    // the root name next to the new nested alias.
                    AliasEntry::Nested(HashMap::from([(alias, path), (root.clone(), old)]))
                }
            }
            Some(AliasEntry::Nested(mut nested)) => {
                nested.insert(alias, path);
                AliasEntry::Nested(nested)
            }
        };
        self.aliases.insert(root, entry);
        Ok(())
    }

    /// Resolves a symbolic alias into a concrete path.
    ///
    /// Strings without the `@` sigil are already literal paths and pass
    /// through unchanged. Only the registered prefix is replaced; the
    /// remaining sub-path suffix is appended verbatim.
    pub fn get(&self, alias: &str) -> RockResult<String> {
        if !alias.starts_with(SIGIL) {
            // not an alias
            return Ok(alias.to_string());
        }

        let root = Self::root_of(alias);

        match self.aliases.get(root) {
            Some(AliasEntry::Leaf(path)) => Ok(format!("{}{}", path, &alias[root.len()..])),
            Some(AliasEntry::Nested(nested)) => {
                // Prefix comparison with a trailing delimiter on both sides
                // keeps matches on segment boundaries: `@app2` never matches
                // a lookup under `@app`.
                let lookup = format!("{}{}", alias, DELIMITER);
                let mut candidates: Vec<(&String, &String)> = nested
                    .iter()
                    .filter(|(name, _)| lookup.starts_with(&format!("{}{}", name, DELIMITER)))
                    .collect();
                // longest registered name wins
                candidates.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
                candidates
                    .first()
                    .map(|(name, path)| format!("{}{}", path, &alias[name.len()..]))
                    .ok_or_else(|| RockError::InvalidAlias(alias.to_string()))
            }
            None => Err(RockError::InvalidAlias(alias.to_string())),
        }
    }

    /// Drops the whole root entry for `alias`, nested siblings included.
    ///
    /// `set(alias, None)` is the finer-grained alternative that removes a
    /// single nested entry.
    pub fn remove(&mut self, alias: &str) {
        let alias = Self::with_sigil(alias);
        self.aliases.remove(Self::root_of(&alias));
    }

    /// Number of registered roots.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn delete(&mut self, root: &str, alias: &str, is_root: bool) {
        let drop_root = match self.aliases.get_mut(root) {
            Some(AliasEntry::Nested(nested)) => {
                nested.remove(alias);
                false
            }
            Some(AliasEntry::Leaf(_)) => is_root,
            None => false,
        };
        if drop_root {
            self.aliases.remove(root);
        }
    }

    fn root_of(alias: &str) -> &str {
        alias.find(DELIMITER).map_or(alias, |pos| &alias[..pos])
    }

    fn with_sigil(alias: &str) -> String {
        if alias.starts_with(SIGIL) {
            alias.to_string()
        } else {
            format!("{}{}", SIGIL, alias)
        }
    }
}

#[cfg(test)]
mod tests;
