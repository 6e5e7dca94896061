//! Configuration section model.
//!
//! The section is the already-parsed input of a load: type aliases, the
//! general settings layer, and the provider entries. It can be built in code
//! or read from a configuration document that carries it under
//! [`SECTION_NAME`]:
//!
//! ```toml
//! [[common_provider.types]]
//! name = "smtp"
//! type = "mail::SmtpProvider"
//!
//! [common_provider.settings]
//! data_parser_type = "json"
//! entries = [{ key = "timeout", value = "30" }]
//!
//! [[common_provider.providers]]
//! name = "primary"
//! group = "mail"
//! type = "smtp"
//! settings = { entries = [{ key = "host", value = "localhost" }] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alias::TypeAlias;
use crate::error::SectionError;

/// Key under which configuration documents carry the provider section.
pub const SECTION_NAME: &str = "common_provider";

/// One declared setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingEntry {
    /// Setting key.
    pub key: String,
    /// Raw setting value.
    pub value: String,
}

impl SettingEntry {
    /// Create a setting entry.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Settings declared for one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSection {
    /// Raw complex data parser type, alias or literal identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_parser_type: Option<String>,
    /// Settings in declaration order.
    pub entries: Vec<SettingEntry>,
}

/// One declared provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Provider name; identity within the loaded data.
    pub name: String,
    /// Free-form group label.
    #[serde(default)]
    pub group: String,
    /// Raw implementation type, alias or literal identifier.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Disabled entries are skipped entirely.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Provider-scoped settings.
    #[serde(default)]
    pub settings: SettingsSection,
}

fn default_enabled() -> bool {
    true
}

impl ProviderEntry {
    /// Create an enabled entry with no group and no settings.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: String::new(),
            type_name: type_name.into(),
            enabled: true,
            settings: SettingsSection::default(),
        }
    }

    /// Set the group label.
    #[must_use = "builder methods must be chained or built"]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the enabled flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Mark the entry disabled.
    #[must_use = "builder methods must be chained or built"]
    pub fn disabled(self) -> Self {
        self.enabled(false)
    }

    /// Append a provider-scoped setting.
    #[must_use = "builder methods must be chained or built"]
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.entries.push(SettingEntry::new(key, value));
        self
    }

    /// Set the provider-scoped data parser type.
    #[must_use = "builder methods must be chained or built"]
    pub fn data_parser(mut self, type_name: impl Into<String>) -> Self {
        self.settings.data_parser_type = Some(type_name.into());
        self
    }
}

/// Supported configuration document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// TOML (feature `toml`).
    Toml,
    /// JSON.
    Json,
    /// YAML (feature `yaml`).
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SectionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SectionError::UnsupportedFormat(ext)),
        }
    }
}

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "common_provider")]
    section: Option<ProviderSection>,
}

/// The provider configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Type alias declarations.
    pub types: Vec<TypeAlias>,
    /// General settings layer.
    pub settings: SettingsSection,
    /// Provider entries in declaration order.
    pub providers: Vec<ProviderEntry>,
}

impl ProviderSection {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type alias.
    #[must_use = "builder methods must be chained or built"]
    pub fn alias(mut self, name: impl Into<String>, type_identifier: impl Into<String>) -> Self {
        self.types.push(TypeAlias::new(name, type_identifier));
        self
    }

    /// Append a general setting.
    #[must_use = "builder methods must be chained or built"]
    pub fn setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.entries.push(SettingEntry::new(key, value));
        self
    }

    /// Set the general data parser type.
    #[must_use = "builder methods must be chained or built"]
    pub fn data_parser(mut self, type_name: impl Into<String>) -> Self {
        self.settings.data_parser_type = Some(type_name.into());
        self
    }

    /// Append a provider entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn provider(mut self, entry: ProviderEntry) -> Self {
        self.providers.push(entry);
        self
    }

    /// Read the section out of a document in the given format.
    ///
    /// `Ok(None)` means the document parsed but has no [`SECTION_NAME`] key.
    pub fn from_document(text: &str, format: DocumentFormat) -> Result<Option<Self>, SectionError> {
        match format {
            DocumentFormat::Toml => Self::from_toml_document(text),
            DocumentFormat::Json => Self::from_json_document(text),
            DocumentFormat::Yaml => Self::from_yaml_document(text),
        }
    }

    /// Read the section out of a TOML document.
    #[cfg(feature = "toml")]
    pub fn from_toml_document(text: &str) -> Result<Option<Self>, SectionError> {
        Ok(toml::from_str::<Document>(text)?.section)
    }

    /// TOML support is compiled out.
    #[cfg(not(feature = "toml"))]
    pub fn from_toml_document(_text: &str) -> Result<Option<Self>, SectionError> {
        Err(SectionError::UnsupportedFormat("toml".into()))
    }

    /// Read the section out of a JSON document.
    pub fn from_json_document(text: &str) -> Result<Option<Self>, SectionError> {
        Ok(serde_json::from_str::<Document>(text)?.section)
    }

    /// Read the section out of a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_document(text: &str) -> Result<Option<Self>, SectionError> {
        Ok(serde_yaml::from_str::<Document>(text)?.section)
    }

    /// YAML support is compiled out.
    #[cfg(not(feature = "yaml"))]
    pub fn from_yaml_document(_text: &str) -> Result<Option<Self>, SectionError> {
        Err(SectionError::UnsupportedFormat("yaml".into()))
    }

    /// Read the section out of a configuration file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Self>, SectionError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| SectionError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_document(&text, format)
    }
}
