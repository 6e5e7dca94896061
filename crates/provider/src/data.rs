//! The result of a provider load.

use crate::descriptor::ProviderDescriptor;
use crate::settings::Settings;

/// Loaded provider descriptors plus the general settings layer.
///
/// Immutable. Descriptors keep the declaration order of their entries.
/// Names are not required to be unique; [`get`](Self::get) returns the first
/// match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderData {
    descriptors: Vec<ProviderDescriptor>,
    general_settings: Option<Settings>,
}

impl ProviderData {
    pub(crate) fn new(
        descriptors: Vec<ProviderDescriptor>,
        general_settings: Option<Settings>,
    ) -> Self {
        Self {
            descriptors,
            general_settings,
        }
    }

    /// All descriptors in declaration order.
    pub fn descriptors(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }

    /// Iterate descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProviderDescriptor> {
        self.descriptors.iter()
    }

    /// Section-level settings; `None` when none were declared.
    pub fn general_settings(&self) -> Option<&Settings> {
        self.general_settings.as_ref()
    }

    /// First descriptor named `name`.
    pub fn get(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// Descriptors whose group is `group`.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ProviderDescriptor> {
        self.descriptors.iter().filter(move |d| d.group() == group)
    }

    /// Distinct groups in first-seen order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for descriptor in &self.descriptors {
            if !groups.contains(&descriptor.group()) {
                groups.push(descriptor.group());
            }
        }
        groups
    }

    /// Number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no provider was loaded.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProviderData {
    type Item = &'a ProviderDescriptor;
    type IntoIter = std::slice::Iter<'a, ProviderDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Provider, ResolvedType};

    #[derive(Debug, Default)]
    struct Stub;
    impl Provider for Stub {}

    fn descriptor(name: &str, group: &str) -> ProviderDescriptor {
        ProviderDescriptor::new(name, group, ResolvedType::provider::<Stub>("stub"), None)
    }

    fn data() -> ProviderData {
        ProviderData::new(
            vec![
                descriptor("a", "mail"),
                descriptor("b", "sms"),
                descriptor("a", "sms"),
                descriptor("c", "mail"),
            ],
            None,
        )
    }

    #[test]
    fn get_returns_first_match() {
        let data = data();
        assert_eq!(data.get("a").map(ProviderDescriptor::group), Some("mail"));
        assert!(data.get("zzz").is_none());
    }

    #[test]
    fn group_queries() {
        let data = data();
        let sms: Vec<&str> = data.in_group("sms").map(ProviderDescriptor::name).collect();
        assert_eq!(sms, vec!["b", "a"]);
        assert_eq!(data.groups(), vec!["mail", "sms"]);
    }

    #[test]
    fn iteration_keeps_order() {
        let data = data();
        let names: Vec<&str> = (&data).into_iter().map(ProviderDescriptor::name).collect();
        assert_eq!(names, vec!["a", "b", "a", "c"]);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn default_is_empty() {
        let data = ProviderData::default();
        assert!(data.is_empty());
        assert!(data.general_settings().is_none());
        assert!(data.groups().is_empty());
    }
}
