use tracing::{debug, error};

use crate::domain::{models::event::DateSelection, ports::EventRepository};
use crate::error::AppError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub upserted: usize,
    pub deleted: usize,
}

/// Applies each selection in order: selected dates are upserted with `event`,
/// unselected dates lose their record. Dates already applied stay applied if
/// a later one fails.
pub async fn reconcile(
    repo: &dyn EventRepository,
    event: &str,
    selections: &[DateSelection],
) -> Result<ReconcileSummary, AppError> {
    let mut summary = ReconcileSummary::default();

    for (applied, selection) in selections.iter().enumerate() {
        let step = if selection.is_selected {
            repo.upsert(selection.date, event).await.map(|_| summary.upserted += 1)
        } else {
            repo.delete_by_schedule(selection.date).await.map(|removed| {
                if removed > 0 {
                    summary.deleted += 1;
                }
            })
        };

        if let Err(e) = step {
            error!(
                date = %selection.date,
                applied,
                total = selections.len(),
                "Reconciliation stopped partway through the batch"
            );
            return Err(e);
        }
        debug!(date = %selection.date, selected = selection.is_selected, "Reconciled date");
    }

    Ok(summary)
}
