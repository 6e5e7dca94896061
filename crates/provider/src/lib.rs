//! # Nebula Provider
//!
//! Configuration-driven provider loading for Nebula.
//!
//! A **provider** is a named component whose implementation type is chosen in
//! configuration. Loading turns a [`ProviderSection`] into [`ProviderData`]:
//!
//! 1. type aliases build an [`AliasTable`];
//! 2. the general settings layer is collected into [`Settings`];
//! 3. every enabled [`ProviderEntry`] has its type resolved (alias first, then
//!    literal identifier), checked against the [`Provider`] capability, and
//!    its own settings collected into a [`ProviderDescriptor`].
//!
//! Types are looked up through a [`TypeLoader`]; [`TypeRegistry`] is the
//! in-memory implementation. Any failure aborts the load with a
//! [`ProviderLoadError`].
//!
//! ## Core Types
//!
//! - [`assemble`] — the load pass
//! - [`ProviderLoader`] / [`ConfigProviderLoader`] — the seam a caching framework calls
//! - [`TypeResolver`] — alias-then-literal resolution shared by providers and parsers
//! - [`ProviderSection`] — the configuration section model, readable from TOML/JSON/YAML

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod alias;
mod data;
mod descriptor;
mod error;
mod loader;
mod provider;
mod resolver;
mod section;
mod settings;
mod types;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use alias::{AliasTable, TypeAlias};
pub use data::ProviderData;
pub use descriptor::{ProviderDescriptor, build_descriptor};
pub use error::{ProviderLoadError, RegistryError, SectionError, SettingsScope, TypeReference};
pub use loader::{ConfigProviderLoader, ProviderLoader, assemble};
pub use provider::{PROVIDER_CAPABILITY, Provider};
pub use resolver::TypeResolver;
pub use section::{
    DocumentFormat, ProviderEntry, ProviderSection, SECTION_NAME, SettingEntry, SettingsSection,
};
pub use settings::{Settings, collect_settings};
pub use types::{ResolvedType, TypeLoader, TypeRegistry};
