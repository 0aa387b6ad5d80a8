//! Backend commands queued from UI to backend worker.

use shared::domain::OrderDraft;

pub enum BackendCommand {
    LoadCatalog,
    LoadReviews,
    PlaceCodOrder { draft: OrderDraft },
}
