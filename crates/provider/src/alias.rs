//! Type alias table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

/// One `name -> type identifier` indirection declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    /// Short, friendly name. Matched case-insensitively.
    pub name: String,
    /// Fully-qualified identifier handed to the type loader.
    #[serde(rename = "type")]
    pub type_identifier: String,
}

impl TypeAlias {
    /// Create an alias entry.
    pub fn new(name: impl Into<String>, type_identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_identifier: type_identifier.into(),
        }
    }
}

/// Case-insensitive lookup over the declared aliases.
///
/// When several aliases share a name (ignoring case) the first declared one
/// wins. An alias with an empty target counts as no alias at all.
///
/// ```
/// use nebula_provider::{AliasTable, TypeAlias};
///
/// let table = AliasTable::new(&[TypeAlias::new("fast", "acme::FastProvider")]);
/// assert_eq!(table.lookup("FAST"), Some("acme::FastProvider"));
/// assert_eq!(table.lookup("slow"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    targets: HashMap<String, String>,
}

impl AliasTable {
    /// Build the table from aliases in declaration order.
    pub fn new(aliases: &[TypeAlias]) -> Self {
        let mut targets = HashMap::with_capacity(aliases.len());
        for alias in aliases {
            if let Entry::Vacant(slot) = targets.entry(fold(&alias.name)) {
                slot.insert(alias.type_identifier.clone());
            }
        }
        Self { targets }
    }

    /// Canonical type identifier for `name`, if an alias declares one.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.targets
            .get(&fold(name))
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }

    /// Number of distinct alias names.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no aliases are configured.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Per-character lowercase, so no context rule (Greek final sigma) applies.
fn fold(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}
