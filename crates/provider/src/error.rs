//! Provider loading error types.

use std::fmt;

/// The settings layer a value or parser type belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingsScope {
    /// Section-level settings shared by every provider.
    General,
    /// Settings declared on one provider entry.
    Provider(String),
}

impl fmt::Display for SettingsScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => f.write_str("general settings"),
            Self::Provider(name) => write!(f, "provider '{name}'"),
        }
    }
}

/// The entity whose raw type string was being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// The implementation type of the named provider.
    Provider(String),
    /// The complex data parser of a settings scope.
    Parser(SettingsScope),
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(name) => write!(f, "provider '{name}'"),
            Self::Parser(scope) => write!(f, "data parser of {scope}"),
        }
    }
}

/// Configuration errors raised while assembling provider data.
///
/// Every variant aborts the whole load: there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderLoadError {
    /// The provider configuration section was not supplied.
    #[error("config section '{section}' not defined")]
    MissingConfigurationSection {
        /// Expected section identifier.
        section: String,
    },

    /// A raw type string matched no alias and is not a loadable type itself.
    #[error("no type found for '{raw}' (literal type identifier, referenced by {referenced_by})")]
    UnresolvedType {
        /// The raw string as written in configuration.
        raw: String,
        /// Who referenced it.
        referenced_by: TypeReference,
    },

    /// A raw type string matched an alias whose target does not load.
    #[error(
        "type alias '{alias}' maps to '{target}', which is not a valid type \
         (from the type alias table, referenced by {referenced_by})"
    )]
    InvalidAliasedType {
        /// The raw string that matched the alias.
        alias: String,
        /// The alias table target that failed to load.
        target: String,
        /// Who referenced it.
        referenced_by: TypeReference,
    },

    /// A provider's type loaded but does not implement the provider capability.
    #[error("type '{type_identifier}' of provider '{provider}' doesn't implement '{capability}'")]
    TypeDoesNotImplementCapability {
        /// Provider entry name.
        provider: String,
        /// Resolved identifier of the offending type.
        type_identifier: String,
        /// Name of the required capability.
        capability: &'static str,
    },
}

impl ProviderLoadError {
    /// Name of the provider this error concerns, if it is provider-specific.
    pub fn provider(&self) -> Option<&str> {
        let reference = match self {
            Self::MissingConfigurationSection { .. } => return None,
            Self::TypeDoesNotImplementCapability { provider, .. } => return Some(provider.as_str()),
            Self::UnresolvedType { referenced_by, .. }
            | Self::InvalidAliasedType { referenced_by, .. } => referenced_by,
        };
        match reference {
            TypeReference::Provider(name)
            | TypeReference::Parser(SettingsScope::Provider(name)) => Some(name.as_str()),
            TypeReference::Parser(SettingsScope::General) => None,
        }
    }
}

/// Errors from reading a provider section out of a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    /// TOML syntax or shape error.
    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax or shape error.
    #[cfg(feature = "yaml")]
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no enabled format.
    #[error("unsupported configuration format: '{0}'")]
    UnsupportedFormat(String),
}

/// Errors from registering types in a [`TypeRegistry`](crate::TypeRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The identifier is already taken.
    #[error("type '{0}' already registered")]
    AlreadyRegistered(String),

    /// Identifiers must contain at least one non-whitespace character.
    #[error("type identifier cannot be empty or whitespace")]
    EmptyIdentifier,
}
