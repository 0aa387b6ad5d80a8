//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::LoadCatalog => "load_catalog",
        BackendCommand::LoadReviews => "load_reviews",
        BackendCommand::PlaceCodOrder { .. } => "place_cod_order",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn a_full_queue_asks_the_user_to_retry() {
        // Zero-capacity channel with no waiting receiver always reports Full.
        let (tx, _rx) = bounded(0);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::LoadCatalog, &mut status);
        assert_eq!(status, "UI command queue is full; please retry");
    }

    #[test]
    fn a_dead_worker_is_reported_on_the_status_line() {
        let (tx, rx) = bounded::<BackendCommand>(4);
        drop(rx);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::LoadReviews, &mut status);
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn a_queued_command_leaves_the_status_line_alone() {
        let (tx, _rx) = bounded(4);
        let mut status = String::new();
        dispatch_backend_command(&tx, BackendCommand::LoadCatalog, &mut status);
        assert!(status.is_empty());
    }
}
