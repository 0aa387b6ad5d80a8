//! Launch configuration for the storefront GUI.
//!
//! Settings merge in order: built-in defaults, then the first `storefront.toml`
//! found (working directory, then the OS config dir), then environment
//! variables. Command line flags are merged last by `main`.

use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, Default)]
pub struct GuiSettings {
    /// Catalog JSON to load instead of the bundled demo data.
    pub catalog_path: Option<PathBuf>,
    /// Simulated latency for the local order gateway, in milliseconds.
    pub order_latency_ms: Option<u64>,
}

pub fn load_settings() -> GuiSettings {
    let mut settings = GuiSettings::default();

    for candidate in config_file_candidates() {
        if let Ok(raw) = fs::read_to_string(&candidate) {
            apply_config_file(&mut settings, &raw);
            break;
        }
    }

    if let Ok(v) = std::env::var("STOREFRONT_CATALOG") {
        if !v.trim().is_empty() {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }
    if let Ok(v) = std::env::var("STOREFRONT_ORDER_LATENCY_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.order_latency_ms = Some(parsed);
        }
    }

    settings
}

fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("storefront.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("verdant-harvest").join("storefront.toml"));
    }
    candidates
}

fn apply_config_file(settings: &mut GuiSettings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("catalog_path") {
            settings.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = file_cfg.get("order_latency_ms") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.order_latency_ms = Some(parsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn config_file_keys_override_defaults() {
        let mut settings = GuiSettings::default();
        apply_config_file(
            &mut settings,
            "catalog_path = \"/tmp/catalog.json\"\norder_latency_ms = \"250\"\n",
        );
        assert_eq!(
            settings.catalog_path.as_deref(),
            Some(Path::new("/tmp/catalog.json"))
        );
        assert_eq!(settings.order_latency_ms, Some(250));
    }

    #[test]
    fn malformed_config_leaves_defaults_in_place() {
        let mut settings = GuiSettings::default();
        apply_config_file(&mut settings, "not toml at all [[[");
        assert!(settings.catalog_path.is_none());
        assert!(settings.order_latency_ms.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut settings = GuiSettings::default();
        apply_config_file(&mut settings, "theme = \"dark\"\n");
        assert!(settings.catalog_path.is_none());
    }
}
