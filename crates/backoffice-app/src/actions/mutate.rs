//! Create, update and bulk mutations

use backoffice_client::{bulk, AdminApi, BulkOutcome, FormPayload};
use backoffice_core::{LeadStatus, RecordId, Resource};
use tracing::{info, warn};

use crate::form::FormMode;

pub async fn submit_form<A>(
    api: &A,
    resource: Resource,
    mode: FormMode,
    payload: FormPayload,
) -> Result<(), String>
where
    A: AdminApi + Sync,
{
    let result = match mode {
        FormMode::Create => api.create(resource, payload).await,
        FormMode::Edit(id) => api.update(resource, id, payload).await,
    };
    match result {
        Ok(()) => {
            info!("Saved {} ({:?})", resource.noun(), mode);
            Ok(())
        }
        Err(e) => {
            warn!("Failed to save {}: {}", resource.noun(), e);
            Err(e.to_string())
        }
    }
}

pub async fn bulk_delete<A>(api: &A, resource: Resource, ids: &[RecordId]) -> BulkOutcome
where
    A: AdminApi + Sync,
{
    info!("Deleting {} {} records", ids.len(), resource.noun());
    bulk::bulk_delete(api, resource, ids).await
}

pub async fn set_lead_status<A>(api: &A, ids: &[RecordId], status: LeadStatus) -> BulkOutcome
where
    A: AdminApi + Sync,
{
    info!("Marking {} lead(s) as {}", ids.len(), status.label());
    bulk::bulk_set_lead_status(api, ids, status).await
}
