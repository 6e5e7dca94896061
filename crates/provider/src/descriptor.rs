//! Provider descriptors and how one is built from a provider entry.

use crate::error::{ProviderLoadError, SettingsScope, TypeReference};
use crate::provider::PROVIDER_CAPABILITY;
use crate::resolver::TypeResolver;
use crate::section::ProviderEntry;
use crate::settings::{Settings, collect_settings};
use crate::types::ResolvedType;

/// Immutable description of one loaded provider.
///
/// The implementation type always satisfies the provider capability;
/// descriptors are only produced by a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    name: String,
    group: String,
    implementation_type: ResolvedType,
    settings: Option<Settings>,
    enabled: bool,
}

impl ProviderDescriptor {
    pub(crate) fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        implementation_type: ResolvedType,
        settings: Option<Settings>,
    ) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            implementation_type,
            settings,
            enabled: true,
        }
    }

    /// Provider name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group label as declared, possibly empty.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The resolved implementation type.
    pub fn implementation_type(&self) -> &ResolvedType {
        &self.implementation_type
    }

    /// Provider-scoped settings; `None` when the entry declared none.
    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    /// Always `true`: disabled entries never produce a descriptor.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Build the descriptor of an enabled provider entry.
///
/// Resolves the implementation type, checks the provider capability, then
/// collects the provider's settings. The first failure is returned as is.
pub fn build_descriptor(
    resolver: &TypeResolver<'_>,
    entry: &ProviderEntry,
) -> Result<ProviderDescriptor, ProviderLoadError> {
    let implementation_type =
        resolver.resolve(&entry.type_name, &TypeReference::Provider(entry.name.clone()))?;

    if !implementation_type.implements_provider() {
        return Err(ProviderLoadError::TypeDoesNotImplementCapability {
            provider: entry.name.clone(),
            type_identifier: implementation_type.identifier().to_owned(),
            capability: PROVIDER_CAPABILITY,
        });
    }

    let settings = collect_settings(
        resolver,
        SettingsScope::Provider(entry.name.clone()),
        &entry.settings.entries,
        entry.settings.data_parser_type.as_deref(),
    )?;

    Ok(ProviderDescriptor::new(
        entry.name.as_str(),
        entry.group.as_str(),
        implementation_type,
        settings,
    ))
}
