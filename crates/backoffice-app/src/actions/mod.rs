//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back by sending a
//! [`Message`] on the event channel. Errors are carried in the message as
//! display strings; they never escape a task.

use std::sync::Arc;

use backoffice_client::AdminApi;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::handler::UpdateAction;
use crate::message::Message;

pub mod fetch;
pub mod mutate;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: AdminApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchList { token, request } => {
            tokio::spawn(async move {
                let result = fetch::fetch_list(api.as_ref(), request).await;
                send(&msg_tx, Message::ListLoaded { token, result }).await;
            });
        }

        UpdateAction::FetchLeadStats { token } => {
            tokio::spawn(async move {
                let result = api.lead_stats().await.map_err(|e| {
                    warn!("Lead stats request failed: {}", e);
                    e.to_string()
                });
                send(&msg_tx, Message::StatsLoaded { token, result }).await;
            });
        }

        UpdateAction::FetchBlogForEdit { token, id } => {
            tokio::spawn(async move {
                let result = api.get_blog(id).await.map_err(|e| {
                    warn!("Failed to load blog #{}: {}", id, e);
                    e.to_string()
                });
                send(&msg_tx, Message::EditRecordLoaded { token, result }).await;
            });
        }

        UpdateAction::ScheduleSearch { generation, delay } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                send(&msg_tx, Message::SearchDebounced { generation }).await;
            });
        }

        UpdateAction::SubmitForm {
            token,
            resource,
            mode,
            payload,
        } => {
            tokio::spawn(async move {
                let result = mutate::submit_form(api.as_ref(), resource, mode, payload).await;
                send(&msg_tx, Message::FormSubmitted { token, result }).await;
            });
        }

        UpdateAction::DeleteRecord { resource, id } => {
            tokio::spawn(async move {
                let result = api.delete(resource, id).await.map_err(|e| e.to_string());
                send(
                    &msg_tx,
                    Message::RecordDeleted {
                        resource,
                        id,
                        result,
                    },
                )
                .await;
            });
        }

        UpdateAction::BulkDelete { resource, ids } => {
            tokio::spawn(async move {
                let outcome = mutate::bulk_delete(api.as_ref(), resource, &ids).await;
                send(&msg_tx, Message::BulkDeleted { resource, outcome }).await;
            });
        }

        UpdateAction::SetLeadStatus { ids, status } => {
            tokio::spawn(async move {
                let outcome = mutate::set_lead_status(api.as_ref(), &ids, status).await;
                send(&msg_tx, Message::LeadStatusApplied { status, outcome }).await;
            });
        }

        UpdateAction::ToggleService { id } => {
            tokio::spawn(async move {
                let result = api.toggle_service(id).await.map_err(|e| e.to_string());
                send(&msg_tx, Message::ServiceToggled { id, result }).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Event channel closed; dropping task result");
    }
}
