//! Key/value settings layers.

use std::str::FromStr;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{ProviderLoadError, SettingsScope, TypeReference};
use crate::resolver::TypeResolver;
use crate::section::SettingEntry;
use crate::types::ResolvedType;

/// Free-form settings of one scope plus its optional complex data parser.
///
/// Keys are unique. Iteration follows the position of each key's first
/// declaration; when a key is declared again, the later value replaces the
/// earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    values: IndexMap<String, String>,
    parser_type: Option<ResolvedType>,
}

impl Settings {
    /// Create settings from prepared values.
    pub fn new(values: IndexMap<String, String>, parser_type: Option<ResolvedType>) -> Self {
        Self {
            values,
            parser_type,
        }
    }

    /// Value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of `key` parsed as `T`.
    ///
    /// Returns `None` if the key is absent, `Some(Err(_))` if it does not parse.
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use nebula_provider::Settings;
    ///
    /// let settings = Settings::new(IndexMap::from([("retries".into(), "3".into())]), None);
    /// assert_eq!(settings.get_parsed::<u32>("retries"), Some(Ok(3)));
    /// assert!(settings.get_parsed::<u32>("missing").is_none());
    /// ```
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(str::parse)
    }

    /// Whether `key` is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The underlying map.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }

    /// Resolved parser type for complex values, if one was configured.
    pub fn parser_type(&self) -> Option<&ResolvedType> {
        self.parser_type.as_ref()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collect the settings of one scope.
///
/// Returns `Ok(None)` when `entries` is empty; the parser string is then not
/// evaluated. An empty parser string counts as absent; any other string,
/// whitespace included, is resolved. Parser resolution failures surface as
/// the resolver's own errors.
pub fn collect_settings(
    resolver: &TypeResolver<'_>,
    scope: SettingsScope,
    entries: &[SettingEntry],
    parser_type: Option<&str>,
) -> Result<Option<Settings>, ProviderLoadError> {
    if entries.is_empty() {
        return Ok(None);
    }

    let mut values = IndexMap::with_capacity(entries.len());
    for entry in entries {
        match values.entry(entry.key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(entry.value.clone());
            }
            Entry::Occupied(mut slot) => {
                tracing::warn!(key = %entry.key, %scope, "duplicate setting key, later value wins");
                slot.insert(entry.value.clone());
            }
        }
    }

    let parser_type = match parser_type.filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(resolver.resolve(raw, &TypeReference::Parser(scope))?),
        None => None,
    };

    Ok(Some(Settings::new(values, parser_type)))
}
