//! Loading providers from configuration files on disk.

use std::io::Write;

use nebula_provider::{
    ConfigProviderLoader, Provider, ProviderLoadError, ProviderLoader, SectionError, TypeRegistry,
};
use pretty_assertions::assert_eq;

#[derive(Debug, Default)]
struct SmtpProvider;
impl Provider for SmtpProvider {}

#[derive(Debug, Default)]
struct SmsProvider;
impl Provider for SmsProvider {}

struct JsonParser;

fn registry() -> TypeRegistry {
    let mut types = TypeRegistry::new();
    types
        .register_provider::<SmtpProvider>("mail::SmtpProvider")
        .unwrap();
    types
        .register_provider::<SmsProvider>("sms::SmsProvider")
        .unwrap();
    types.register::<JsonParser>("parse::JsonParser").unwrap();
    types
}

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[cfg(feature = "toml")]
#[test]
fn loads_toml_file() {
    let file = write_config(
        ".toml",
        r#"
        [server]
        port = 8080

        [[common_provider.types]]
        name = "smtp"
        type = "mail::SmtpProvider"

        [[common_provider.types]]
        name = "json"
        type = "parse::JsonParser"

        [common_provider.settings]
        data_parser_type = "json"
        entries = [
            { key = "retries", value = "3" },
            { key = "region", value = "eu" },
        ]

        [[common_provider.providers]]
        name = "primary"
        group = "mail"
        type = "SMTP"
        settings = { entries = [{ key = "host", value = "localhost" }] }

        [[common_provider.providers]]
        name = "pager"
        group = "sms"
        type = "sms::SmsProvider"
        enabled = false
        "#,
    );

    let loader = ConfigProviderLoader::from_path(file.path(), registry()).unwrap();
    let data = loader.load().unwrap();

    assert_eq!(data.len(), 1);
    let primary = data.get("primary").unwrap();
    assert_eq!(primary.group(), "mail");
    assert!(primary.implementation_type().is::<SmtpProvider>());
    assert_eq!(primary.settings().unwrap().get("host"), Some("localhost"));
    assert!(primary.settings().unwrap().parser_type().is_none());

    let general = data.general_settings().unwrap();
    assert_eq!(general.get_parsed::<u32>("retries"), Some(Ok(3)));
    assert_eq!(general.keys().collect::<Vec<_>>(), vec!["retries", "region"]);
    assert!(general.parser_type().unwrap().is::<JsonParser>());
}

#[test]
fn loads_json_file() {
    let file = write_config(
        ".json",
        r#"{
            "common_provider": {
                "providers": [
                    { "name": "pager", "group": "sms", "type": "sms::SmsProvider" }
                ]
            }
        }"#,
    );

    let data = ConfigProviderLoader::from_path(file.path(), registry())
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(data.groups(), vec!["sms"]);
    assert_eq!(data.general_settings(), None);
}

#[test]
fn file_without_section_fails_at_load() {
    let file = write_config(".json", r#"{ "server": { "port": 8080 } }"#);

    let loader = ConfigProviderLoader::from_path(file.path(), registry()).unwrap();
    assert!(matches!(
        loader.load(),
        Err(ProviderLoadError::MissingConfigurationSection { section }) if section == "common_provider"
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let file = write_config(".ini", "[common_provider]");
    let err = ConfigProviderLoader::from_path(file.path(), registry()).unwrap_err();
    assert!(matches!(err, SectionError::UnsupportedFormat(ext) if ext == "ini"));
}

#[cfg(feature = "yaml")]
#[test]
fn loads_yaml_file() {
    let file = write_config(
        ".yaml",
        "common_provider:\n  providers:\n    - name: primary\n      type: mail::SmtpProvider\n",
    );
    let data = ConfigProviderLoader::from_path(file.path(), registry())
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(data.len(), 1);
}
