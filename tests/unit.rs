//! Unit tests for configuration, link handling and error messages.
use flavourfind::config::{ENV_DATA_DIR, ENV_DATASET, ENV_LOG};
use flavourfind::links::parse_link;
use flavourfind::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Records every URI it is asked to open and optionally fails.
#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, uri: &Url) -> std::result::Result<(), LinkError> {
        self.opened.borrow_mut().push(uri.to_string());
        if self.fail {
            return Err(LinkError::ExternalLinkFailure {
                uri: uri.to_string(),
                message: "no handler".to_string(),
            });
        }
        Ok(())
    }
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, SAVED_RECIPES_KEY);
        assert_eq!(config.search_delay_ms, 0);
        assert_eq!(config.log_level, "warn");
        assert!(!config.ephemeral);
        assert!(config.contact_links.is_empty());
        assert_eq!(config.backend_choice(), BackendChoice::File);
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
            data_dir = "/tmp/flavourfind"
            storage_key = "favourites"
            search_delay_ms = 1000

            [[contact_links]]
            label = "Email"
            url = "mailto:hello@example.com"
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/flavourfind")));
        assert_eq!(config.storage_key, "favourites");
        assert_eq!(config.search_delay().as_millis(), 1000);
        assert_eq!(config.contact_links.len(), 1);
        assert_eq!(config.contact_links[0].label, "Email");
        // Unset fields keep their defaults
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = AppConfig::from_toml_str("storage_kee = \"x\"", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "inline"));
    }

    #[test]
    fn test_empty_storage_key_is_invalid() {
        let err = AppConfig::from_toml_str("storage_key = \"  \"", "inline").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "storage_key",
                ..
            }
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = AppConfig::from_toml_str("data_dir = \"/from/file\"", "inline")
            .unwrap()
            .with_env(env_from(&[
                (ENV_DATA_DIR, "/from/env"),
                (ENV_DATASET, "/data/recipes.json"),
                (ENV_LOG, "debug"),
            ]))
            .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/from/env")));
        assert_eq!(
            config.dataset_path,
            Some(PathBuf::from("/data/recipes.json"))
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let config = AppConfig::from_toml_str("data_dir = \"/from/file\"", "inline")
            .unwrap()
            .with_env(env_from(&[(ENV_DATA_DIR, "   "), (ENV_LOG, "")]))
            .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/from/file")));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            AppConfig::from_file(&missing).unwrap(),
            AppConfig::default()
        );

        let path = dir.path().join("flavourfind.toml");
        std::fs::write(&path, "ephemeral = true\nlog_level = \"info\"\n").unwrap();
        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.ephemeral);
        assert_eq!(config.backend_choice(), BackendChoice::Memory);

        std::fs::write(&path, "ephemeral = \"yes\"\n").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("flavourfind.toml"));
    }

    #[test]
    fn test_resolved_data_dir_prefers_configured_dir() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/recipes")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolved_data_dir(), Path::new("/srv/recipes"));

        let fallback = AppConfig::default().resolved_data_dir();
        assert!(fallback.ends_with("flavourfind") || fallback.ends_with(".flavourfind"));
    }

    #[test]
    fn test_example_config_ships_contact_links() {
        let config = AppConfig::from_toml_str(
            include_str!("../flavourfind.example.toml"),
            "flavourfind.example.toml",
        )
        .unwrap();
        let labels: Vec<&str> = config
            .contact_links
            .iter()
            .map(|link| link.label.as_str())
            .collect();
        assert_eq!(labels, ["GitHub", "LinkedIn"]);
        for link in &config.contact_links {
            assert!(parse_link(&link.url).is_ok(), "bad link {:?}", link);
        }
        assert_eq!(config.storage_key, SAVED_RECIPES_KEY);
    }

    #[test]
    fn test_missing_dataset_is_an_io_error() {
        let config = AppConfig {
            dataset_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_catalog(),
            Err(CatalogError::Io { .. })
        ));
    }
}

#[cfg(test)]
mod link_tests {
    use super::*;

    #[test]
    fn test_parse_link_trims_and_accepts_common_schemes() {
        let url = parse_link("  https://github.com/example  ").unwrap();
        assert_eq!(url.as_str(), "https://github.com/example");
        assert_eq!(
            parse_link("mailto:hello@example.com").unwrap().scheme(),
            "mailto"
        );
        assert_eq!(parse_link("tel:+15550100").unwrap().scheme(), "tel");
    }

    #[test]
    fn test_parse_link_rejects_invalid_uris() {
        assert!(matches!(
            parse_link("not a link"),
            Err(LinkError::InvalidUri { .. })
        ));
        assert!(matches!(parse_link(""), Err(LinkError::InvalidUri { .. })));
        assert!(matches!(
            parse_link("javascript:alert(1)"),
            Err(LinkError::InvalidUri { .. })
        ));
    }

    #[test]
    fn test_open_link_reports_success() {
        let opener = RecordingOpener::default();
        assert!(open_link(&opener, " https://example.com/recipes "));
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://example.com/recipes"]
        );
    }

    #[test]
    fn test_open_link_failures_do_not_panic() {
        let failing = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };
        assert!(!open_link(&failing, "https://example.com"));
        assert_eq!(failing.opened.borrow().len(), 1);

        // Invalid links never reach the opener
        let opener = RecordingOpener::default();
        assert!(!open_link(&opener, "::::"));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_system_opener_rejects_invalid_links_before_launching() {
        let opener: &dyn LinkOpener = &SystemLinkOpener;
        assert!(!open_link(opener, "javascript:alert(1)"));
        assert!(!open_link(opener, "   "));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::OutOfRange {
            position: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Position 4 is out of range for a collection of 2 saved recipes"
        );

        let err = StoreError::StorageWriteFailure {
            key: SAVED_RECIPES_KEY.to_string(),
            message: "disk full".to_string(),
        };
        assert!(err.to_string().contains("savedRecipes"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_conversion_error_keeps_its_source() {
        use std::error::Error;

        let err = CatalogError::Conversion {
            index: 7,
            source: RecipeConversionError::MissingField("title"),
        };
        assert_eq!(
            err.to_string(),
            "Record 7 could not be converted: Missing required field 'title'"
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Missing required field 'title'"));
    }

    #[test]
    fn test_link_error_messages() {
        let err = LinkError::ExternalLinkFailure {
            uri: "https://example.com".to_string(),
            message: "no handler".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to open 'https://example.com': no handler"
        );
    }
}
