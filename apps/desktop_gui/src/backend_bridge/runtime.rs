//! Runtime bridge between UI command queue and backend event intake.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use storefront_core::{CatalogSource, OrderGateway};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Services the backend worker drives on behalf of the UI thread.
pub struct BackendServices {
    pub catalog: Arc<dyn CatalogSource>,
    pub orders: Arc<dyn OrderGateway>,
}

/// Spawns the backend worker thread. Commands arrive over `cmd_rx`; results
/// flow back over `ui_tx` with `try_send` so a stalled UI never blocks the
/// worker.
pub fn launch(services: BackendServices, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("Failed to start backend runtime: {err}"),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog => {
                        info!("backend: load_catalog");
                        match services.catalog.load().await {
                            Ok(products) => {
                                info!("backend: catalog ready with {} products", products.len());
                                let _ = ui_tx.try_send(UiEvent::CatalogLoaded(products));
                            }
                            Err(err) => {
                                error!("backend: load_catalog failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::CatalogFailed(
                                    UiError::from_message(
                                        UiErrorContext::LoadCatalog,
                                        err.to_string(),
                                    ),
                                ));
                            }
                        }
                    }
                    BackendCommand::LoadReviews => {
                        info!("backend: load_reviews");
                        let reviews = storefront_core::demo_reviews();
                        let _ = ui_tx.try_send(UiEvent::ReviewsLoaded(reviews));
                    }
                    BackendCommand::PlaceCodOrder { draft } => {
                        info!(lines = draft.lines.len(), "backend: place_cod_order");
                        match services.orders.place_cod_order(&draft).await {
                            Ok(receipt) => {
                                let _ = ui_tx.try_send(UiEvent::OrderPlaced(receipt));
                            }
                            Err(err) => {
                                error!("backend: place_cod_order failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                                    UiErrorContext::PlaceOrder,
                                    err.to_string(),
                                )));
                            }
                        }
                    }
                }
            }
            info!("backend: worker stopping, command queue closed");
        });
    });
}
