//! Bulk operations: one user action fanned out over several records
//!
//! All per-record requests run concurrently and every one of them is awaited
//! before reporting. A failure never cancels its siblings.

use std::future::Future;

use backoffice_core::{LeadStatus, RecordId, Resource};
use futures_util::future::join_all;

use crate::api::AdminApi;
use crate::error::Error;

/// Per-id result of a bulk operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: Vec<RecordId>,
    pub failed: Vec<(RecordId, String)>,
}

impl BulkOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// One-line report, e.g. "Deleted 2 of 3 (failed: #4 not found)"
    pub fn summary(&self, verb: &str) -> String {
        if self.all_succeeded() {
            return format!("{verb} {}", self.succeeded.len());
        }
        let failures = self
            .failed
            .iter()
            .map(|(id, reason)| format!("#{id} {reason}"))
            .collect::<Vec<_>>()
            .join("; ");
        format!(
            "{verb} {} of {} (failed: {failures})",
            self.succeeded.len(),
            self.attempted()
        )
    }
}

/// Run `op` for every id concurrently and collect each outcome
pub async fn settle_all<F, Fut>(ids: &[RecordId], op: F) -> BulkOutcome
where
    F: Fn(RecordId) -> Fut,
    Fut: Future<Output = Result<(), Error>>,
{
    let results = join_all(ids.iter().map(|&id| {
        let fut = op(id);
        async move { (id, fut.await) }
    }))
    .await;

    let mut outcome = BulkOutcome::default();
    for (id, result) in results {
        match result {
            Ok(()) => outcome.succeeded.push(id),
            Err(err) => {
                tracing::warn!("Bulk operation failed for #{}: {}", id, err);
                outcome.failed.push((id, err.to_string()));
            }
        }
    }
    outcome
}

/// Delete every id. FAQs go out as a single `delete-multiple` request whose
/// result applies to all ids.
pub async fn bulk_delete<A>(api: &A, resource: Resource, ids: &[RecordId]) -> BulkOutcome
where
    A: AdminApi + Sync,
{
    if resource == Resource::Faqs {
        return match api.delete_faqs(ids.to_vec()).await {
            Ok(()) => BulkOutcome {
                succeeded: ids.to_vec(),
                failed: Vec::new(),
            },
            Err(err) => {
                tracing::warn!("Bulk FAQ delete failed: {}", err);
                let reason = err.to_string();
                BulkOutcome {
                    succeeded: Vec::new(),
                    failed: ids.iter().map(|&id| (id, reason.clone())).collect(),
                }
            }
        };
    }

    settle_all(ids, |id| api.delete(resource, id)).await
}

/// Set the same status on every lead
pub async fn bulk_set_lead_status<A>(api: &A, ids: &[RecordId], status: LeadStatus) -> BulkOutcome
where
    A: AdminApi + Sync,
{
    settle_all(ids, |id| api.set_lead_status(id, status)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn settle_all_reports_each_id() {
        let outcome = settle_all(&[1, 2, 3], |id| async move {
            if id == 2 {
                Err(Error::Http {
                    status: 404,
                    message: "Not Found".to_string(),
                })
            } else {
                Ok(())
            }
        })
        .await;

        assert_eq!(outcome.succeeded, vec![1, 3]);
        assert_eq!(outcome.failed.len(), 1);
        assert_eq!(outcome.failed[0].0, 2);
        assert!(!outcome.all_succeeded());
    }

    #[tokio::test]
    async fn settle_all_empty_is_noop() {
        let outcome = settle_all(&[], |_| async { Ok(()) }).await;
        assert_eq!(outcome.attempted(), 0);
        assert!(outcome.all_succeeded());
    }

    #[test]
    fn summary_lists_failures() {
        let outcome = BulkOutcome {
            succeeded: vec![1, 3],
            failed: vec![(2, "HTTP 404: Not Found".to_string())],
        };
        assert_eq!(
            outcome.summary("Deleted"),
            "Deleted 2 of 3 (failed: #2 HTTP 404: Not Found)"
        );

        let ok = BulkOutcome {
            succeeded: vec![1],
            failed: vec![],
        };
        assert_eq!(ok.summary("Deleted"), "Deleted 1");
    }
}
