//! Assembling provider data from a configuration section.

use std::path::Path;

use crate::alias::AliasTable;
use crate::data::ProviderData;
use crate::descriptor::build_descriptor;
use crate::error::{ProviderLoadError, SectionError, SettingsScope};
use crate::resolver::TypeResolver;
use crate::section::{DocumentFormat, ProviderSection, SECTION_NAME};
use crate::settings::collect_settings;
use crate::types::TypeLoader;

/// Assemble [`ProviderData`] from a configuration section.
///
/// Fails with [`ProviderLoadError::MissingConfigurationSection`] when
/// `section` is `None`. Disabled providers are skipped before their types are
/// looked at. Any failure aborts the whole load.
///
/// ```
/// use nebula_provider::{Provider, ProviderEntry, ProviderSection, TypeRegistry, assemble};
///
/// #[derive(Debug, Default)]
/// struct Smtp;
/// impl Provider for Smtp {}
///
/// let mut types = TypeRegistry::new();
/// types.register_provider::<Smtp>("mail::Smtp").unwrap();
///
/// let section = ProviderSection::new()
///     .alias("smtp", "mail::Smtp")
///     .provider(ProviderEntry::new("primary", "SMTP").group("mail"));
///
/// let data = assemble(Some(&section), &types).unwrap();
/// assert_eq!(data.len(), 1);
/// assert!(data.get("primary").unwrap().implementation_type().is::<Smtp>());
/// ```
pub fn assemble(
    section: Option<&ProviderSection>,
    loader: &dyn TypeLoader,
) -> Result<ProviderData, ProviderLoadError> {
    let section = section.ok_or_else(|| ProviderLoadError::MissingConfigurationSection {
        section: SECTION_NAME.to_owned(),
    })?;

    let aliases = AliasTable::new(&section.types);
    let resolver = TypeResolver::new(&aliases, loader);

    let general_settings = collect_settings(
        &resolver,
        SettingsScope::General,
        &section.settings.entries,
        section.settings.data_parser_type.as_deref(),
    )?;

    let mut descriptors = Vec::with_capacity(section.providers.len());
    for entry in &section.providers {
        if !entry.enabled {
            tracing::debug!(provider = %entry.name, "skipping disabled provider");
            continue;
        }
        descriptors.push(build_descriptor(&resolver, entry)?);
    }

    tracing::debug!(
        providers = descriptors.len(),
        declared = section.providers.len(),
        aliases = aliases.len(),
        general_settings = general_settings.is_some(),
        "assembled provider data"
    );

    Ok(ProviderData::new(descriptors, general_settings))
}

/// Source of [`ProviderData`] for a provider-loading framework.
///
/// Implementations produce a fresh result per call; caching belongs to the
/// caller.
pub trait ProviderLoader {
    /// Load provider data.
    fn load(&self) -> Result<ProviderData, ProviderLoadError>;
}

/// [`ProviderLoader`] backed by a configuration section and a type loader.
///
/// The section is captured at construction; a missing section is reported
/// by [`load`](ProviderLoader::load), not by the constructor.
#[derive(Debug, Clone)]
pub struct ConfigProviderLoader<L> {
    section: Option<ProviderSection>,
    types: L,
}

impl<L: TypeLoader> ConfigProviderLoader<L> {
    /// Create a loader over an already materialized section.
    pub fn new(section: Option<ProviderSection>, types: L) -> Self {
        Self { section, types }
    }

    /// Create a loader from the text of a configuration document.
    pub fn from_document(
        text: &str,
        format: DocumentFormat,
        types: L,
    ) -> Result<Self, SectionError> {
        Ok(Self::new(ProviderSection::from_document(text, format)?, types))
    }

    /// Create a loader from a configuration file.
    pub fn from_path(path: impl AsRef<Path>, types: L) -> Result<Self, SectionError> {
        Ok(Self::new(ProviderSection::from_path(path)?, types))
    }

    /// The captured section, if any.
    pub fn section(&self) -> Option<&ProviderSection> {
        self.section.as_ref()
    }

    /// The type loader.
    pub fn types(&self) -> &L {
        &self.types
    }
}

impl<L: TypeLoader> ProviderLoader for ConfigProviderLoader<L> {
    fn load(&self) -> Result<ProviderData, ProviderLoadError> {
        assemble(self.section.as_ref(), &self.types)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::section::ProviderEntry;
    use crate::{Provider, TypeRegistry};

    #[derive(Debug, Default)]
    struct Smtp;
    impl Provider for Smtp {}

    struct Json;

    fn registry() -> TypeRegistry {
        let mut types = TypeRegistry::new();
        types.register_provider::<Smtp>("mail::Smtp").unwrap();
        types.register::<Json>("parse::Json").unwrap();
        types
    }

    #[test]
    fn missing_section() {
        let err = assemble(None, &registry()).unwrap_err();
        assert_eq!(
            err,
            ProviderLoadError::MissingConfigurationSection {
                section: "common_provider".into()
            }
        );
    }

    #[test]
    fn empty_section() {
        let data = assemble(Some(&ProviderSection::new()), &registry()).unwrap();
        assert_eq!(data, ProviderData::default());
    }

    #[test]
    fn general_parser_failure_aborts_before_providers() {
        let section = ProviderSection::new()
            .setting("a", "1")
            .data_parser("parse::Missing")
            .provider(ProviderEntry::new("p", "mail::Smtp"));
        let err = assemble(Some(&section), &registry()).unwrap_err();
        assert_eq!(err.provider(), None);
        assert!(matches!(err, ProviderLoadError::UnresolvedType { .. }));
    }

    #[test]
    fn config_loader_from_json_document() {
        let text = r#"{
            "common_provider": {
                "types": [{ "name": "json", "type": "parse::Json" }],
                "settings": { "data_parser_type": "json", "entries": [{ "key": "a", "value": "1" }] },
                "providers": [{ "name": "primary", "type": "mail::Smtp" }]
            }
        }"#;
        let loader =
            ConfigProviderLoader::from_document(text, DocumentFormat::Json, registry()).unwrap();
        assert!(loader.section().is_some());

        let data = loader.load().unwrap();
        assert_eq!(data.len(), 1);
        let general = data.general_settings().unwrap();
        assert_eq!(general.get("a"), Some("1"));
        assert!(general.parser_type().unwrap().is::<Json>());
    }

    #[test]
    fn config_loader_without_section_fails_on_load() {
        let loader =
            ConfigProviderLoader::from_document("{}", DocumentFormat::Json, registry()).unwrap();
        assert!(loader.section().is_none());
        assert!(matches!(
            loader.load(),
            Err(ProviderLoadError::MissingConfigurationSection { .. })
        ));
    }

    #[test]
    fn loads_are_independent() {
        let loader = ConfigProviderLoader::new(
            Some(ProviderSection::new().provider(ProviderEntry::new("p", "mail::Smtp"))),
            registry(),
        );
        assert_eq!(loader.load().unwrap(), loader.load().unwrap());
        assert_eq!(loader.types().len(), 2);
    }
}
