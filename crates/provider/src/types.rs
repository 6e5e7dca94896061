//! Loadable types and the type-loading facility.
//!
//! Configuration names types by string. A [`TypeLoader`] turns such a string
//! into a [`ResolvedType`] handle, or reports that nothing by that name can be
//! loaded. [`TypeRegistry`] is the in-memory loader used by applications;
//! tests can pass any `Fn(&str) -> Option<ResolvedType>` instead.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::provider::Provider;

type ProviderFactory = fn() -> Box<dyn Provider>;

fn construct<P: Provider + Default>() -> Box<dyn Provider> {
    Box::new(P::default())
}

struct TypeInfo {
    identifier: String,
    type_name: &'static str,
    type_id: TypeId,
    factory: Option<ProviderFactory>,
}

/// A successfully loaded type, identified by the string it was loaded under.
///
/// Cloning is cheap. Two handles are equal when they carry the same
/// identifier and the same Rust type.
#[derive(Clone)]
pub struct ResolvedType {
    inner: Arc<TypeInfo>,
}

impl ResolvedType {
    /// Describe an arbitrary type `T` under `identifier`.
    ///
    /// Such a type loads, but does not satisfy the provider capability.
    pub fn of<T: 'static>(identifier: impl Into<String>) -> Self {
        Self::with_factory::<T>(identifier.into(), None)
    }

    /// Describe a provider type `P` under `identifier`.
    ///
    /// ```
    /// use nebula_provider::{Provider, ResolvedType};
    ///
    /// #[derive(Debug, Default)]
    /// struct Smtp;
    /// impl Provider for Smtp {}
    ///
    /// let ty = ResolvedType::provider::<Smtp>("mail::Smtp");
    /// assert!(ty.implements_provider());
    /// assert_eq!(ty.identifier(), "mail::Smtp");
    /// ```
    pub fn provider<P: Provider + Default>(identifier: impl Into<String>) -> Self {
        Self::with_factory::<P>(identifier.into(), Some(construct::<P>))
    }

    fn with_factory<T: 'static>(identifier: String, factory: Option<ProviderFactory>) -> Self {
        Self {
            inner: Arc::new(TypeInfo {
                identifier,
                type_name: type_name::<T>(),
                type_id: TypeId::of::<T>(),
                factory,
            }),
        }
    }

    /// The identifier this type was loaded under.
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    /// The Rust type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name
    }

    /// The Rust [`TypeId`] of the described type.
    pub fn type_id(&self) -> TypeId {
        self.inner.type_id
    }

    /// Whether `T` is the described type.
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.type_id == TypeId::of::<T>()
    }

    /// Whether the type satisfies the [`Provider`] capability.
    pub fn implements_provider(&self) -> bool {
        self.inner.factory.is_some()
    }

    /// Construct a fresh provider instance, if this is a provider type.
    pub fn instantiate(&self) -> Option<Box<dyn Provider>> {
        self.inner.factory.map(|factory| factory())
    }
}

impl PartialEq for ResolvedType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.type_id == other.inner.type_id
            && self.inner.identifier == other.inner.identifier
    }
}

impl Eq for ResolvedType {}

impl fmt::Debug for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedType")
            .field("identifier", &self.inner.identifier)
            .field("type_name", &self.inner.type_name)
            .field("provider", &self.implements_provider())
            .finish()
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.identifier)
    }
}

/// Resolves a type identifier to a loadable type.
///
/// Returns `None` when nothing can be loaded under `identifier`. Lookups are
/// expected to be fast and side-effect free.
pub trait TypeLoader {
    /// Load the type named `identifier`.
    fn load(&self, identifier: &str) -> Option<ResolvedType>;
}

impl<F> TypeLoader for F
where
    F: Fn(&str) -> Option<ResolvedType>,
{
    fn load(&self, identifier: &str) -> Option<ResolvedType> {
        self(identifier)
    }
}

/// In-memory [`TypeLoader`] mapping identifiers to registered types.
///
/// Identifier lookup is exact. Thread-safety is the caller's
/// responsibility; wrap in `RwLock` if shared and mutated across threads.
///
/// ```
/// use nebula_provider::{Provider, TypeLoader, TypeRegistry};
///
/// #[derive(Debug, Default)]
/// struct Echo;
/// impl Provider for Echo {}
///
/// let mut registry = TypeRegistry::new();
/// registry.register_provider::<Echo>("demo::Echo").unwrap();
/// registry.register::<String>("std::string::String").unwrap();
///
/// assert!(registry.load("demo::Echo").unwrap().implements_provider());
/// assert!(!registry.load("std::string::String").unwrap().implements_provider());
/// assert!(registry.load("demo::echo").is_none());
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, ResolvedType>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an arbitrary type, e.g. a complex data parser.
    pub fn register<T: 'static>(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.insert(ResolvedType::of::<T>(identifier))
    }

    /// Register a provider type. Fails if the identifier already exists.
    pub fn register_provider<P: Provider + Default>(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.insert(ResolvedType::provider::<P>(identifier))
    }

    /// Register a prepared handle. Fails if the identifier already exists.
    pub fn insert(&mut self, resolved: ResolvedType) -> Result<(), RegistryError> {
        let identifier = resolved.identifier();
        if identifier.trim().is_empty() {
            return Err(RegistryError::EmptyIdentifier);
        }
        if self.types.contains_key(identifier) {
            return Err(RegistryError::AlreadyRegistered(identifier.to_owned()));
        }
        self.types.insert(identifier.to_owned(), resolved);
        Ok(())
    }

    /// Register or replace a handle under its identifier.
    pub fn insert_or_replace(&mut self, resolved: ResolvedType) {
        self.types.insert(resolved.identifier().to_owned(), resolved);
    }

    /// Remove a registered type.
    pub fn remove(&mut self, identifier: &str) -> Option<ResolvedType> {
        self.types.remove(identifier)
    }

    /// Whether a type is registered under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.types.contains_key(identifier)
    }

    /// All registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.types.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeLoader for TypeRegistry {
    fn load(&self, identifier: &str) -> Option<ResolvedType> {
        self.types.get(identifier).cloned()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("count", &self.types.len())
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
