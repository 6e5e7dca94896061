//! The provider capability.

use std::fmt::Debug;

use crate::descriptor::ProviderDescriptor;
use crate::settings::Settings;

/// Name of the capability every provider implementation type must satisfy.
pub const PROVIDER_CAPABILITY: &str = "Provider";

/// Base trait for all provider implementations.
///
/// A provider is a named, independently configured component. Configuration
/// names its implementation type; a type only qualifies when it was loaded
/// as a provider (see [`ResolvedType::provider`](crate::ResolvedType::provider)).
///
/// This trait is **object-safe** so providers can be stored as `Box<dyn Provider>`.
pub trait Provider: Send + Sync + Debug + 'static {
    /// Hook for the hosting framework to hand a fresh instance its
    /// configuration. The default does nothing.
    fn initialize(&mut self, descriptor: &ProviderDescriptor, general: Option<&Settings>) {
        let _ = (descriptor, general);
    }
}
