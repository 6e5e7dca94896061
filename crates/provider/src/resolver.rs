//! Alias-then-literal type resolution.

use crate::alias::AliasTable;
use crate::error::{ProviderLoadError, TypeReference};
use crate::types::{ResolvedType, TypeLoader};

/// Resolves raw type strings from configuration to loadable types.
///
/// The alias table is consulted first. On a hit, only the alias target is
/// tried; on a miss, the raw string itself is handed to the loader. Provider
/// types and parser types go through the same path.
#[derive(Clone, Copy)]
pub struct TypeResolver<'a> {
    aliases: &'a AliasTable,
    loader: &'a dyn TypeLoader,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver over an alias table and a type loader.
    pub fn new(aliases: &'a AliasTable, loader: &'a dyn TypeLoader) -> Self {
        Self { aliases, loader }
    }

    /// Resolve `raw`, attributing failures to `referenced_by`.
    pub fn resolve(
        &self,
        raw: &str,
        referenced_by: &TypeReference,
    ) -> Result<ResolvedType, ProviderLoadError> {
        if let Some(target) = self.aliases.lookup(raw) {
            let resolved =
                self.loader
                    .load(target)
                    .ok_or_else(|| ProviderLoadError::InvalidAliasedType {
                        alias: raw.to_owned(),
                        target: target.to_owned(),
                        referenced_by: referenced_by.clone(),
                    })?;
            tracing::debug!(raw, target, path = "alias", %referenced_by, "resolved type");
            return Ok(resolved);
        }

        let resolved = self
            .loader
            .load(raw)
            .ok_or_else(|| ProviderLoadError::UnresolvedType {
                raw: raw.to_owned(),
                referenced_by: referenced_by.clone(),
            })?;
        tracing::debug!(raw, path = "literal", %referenced_by, "resolved type");
        Ok(resolved)
    }
}

impl std::fmt::Debug for TypeResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeResolver")
            .field("aliases", &self.aliases.len())
            .finish_non_exhaustive()
    }
}
