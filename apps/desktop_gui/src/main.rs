//! Desktop storefront for the Verdant Harvest catalog. The UI thread owns an
//! egui app; catalog loads and order placement run on a backend worker thread
//! behind a bounded command/event channel pair.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use storefront_core::{
    BundledCatalog, CatalogSource, JsonFileCatalog, LocalOrderGateway, OrderGateway,
};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use backend_bridge::runtime::{launch, BackendServices};
use config::{load_settings, GuiSettings};
use controller::events::UiEvent;
use ui::theme::{PersistedStorefrontSettings, SETTINGS_STORAGE_KEY};
use ui::StorefrontApp;

#[derive(Parser, Debug)]
struct Args {
    /// Catalog JSON file; wins over the config file and environment.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Simulated latency of the demo order gateway, in milliseconds.
    #[arg(long)]
    order_latency_ms: Option<u64>,
}

fn apply_cli_overrides(settings: &mut GuiSettings, args: &Args) {
    if let Some(path) = &args.catalog {
        settings.catalog_path = Some(path.clone());
    }
    if let Some(latency) = args.order_latency_ms {
        settings.order_latency_ms = Some(latency);
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let mut settings = load_settings();
    apply_cli_overrides(&mut settings, &args);

    let catalog: Arc<dyn CatalogSource> = match &settings.catalog_path {
        Some(path) => Arc::new(JsonFileCatalog::new(path.clone())),
        None => Arc::new(BundledCatalog),
    };
    let orders: Arc<dyn OrderGateway> = match settings.order_latency_ms {
        Some(latency) => Arc::new(LocalOrderGateway::new(Duration::from_millis(latency))),
        None => Arc::new(LocalOrderGateway::default()),
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    launch(BackendServices { catalog, orders }, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Verdant Harvest")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Verdant Harvest",
        options,
        Box::new(|cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage.get_string(SETTINGS_STORAGE_KEY).and_then(|text| {
                    serde_json::from_str::<PersistedStorefrontSettings>(&text).ok()
                })
            });
            Ok(Box::new(StorefrontApp::new(cmd_tx, ui_rx, persisted_settings)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::{apply_cli_overrides, Args, GuiSettings};
    use std::path::{Path, PathBuf};

    #[test]
    fn cli_flags_win_over_file_and_env_settings() {
        let mut settings = GuiSettings {
            catalog_path: Some(PathBuf::from("/etc/storefront/catalog.json")),
            order_latency_ms: Some(900),
        };
        let args = Args {
            catalog: Some(PathBuf::from("/tmp/override.json")),
            order_latency_ms: Some(50),
        };
        apply_cli_overrides(&mut settings, &args);
        assert_eq!(
            settings.catalog_path.as_deref(),
            Some(Path::new("/tmp/override.json"))
        );
        assert_eq!(settings.order_latency_ms, Some(50));
    }

    #[test]
    fn absent_cli_flags_leave_settings_untouched() {
        let mut settings = GuiSettings {
            catalog_path: Some(PathBuf::from("/etc/storefront/catalog.json")),
            order_latency_ms: None,
        };
        let args = Args {
            catalog: None,
            order_latency_ms: None,
        };
        apply_cli_overrides(&mut settings, &args);
        assert_eq!(
            settings.catalog_path.as_deref(),
            Some(Path::new("/etc/storefront/catalog.json"))
        );
        assert_eq!(settings.order_latency_ms, None);
    }
}
