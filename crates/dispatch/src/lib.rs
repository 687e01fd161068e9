use compute::ComputeControl;
use lambda_runtime::{tracing, Error, LambdaEvent};
use model::event::{InboundEvent, ToggleUpdate};
use model::{Response, ToggleStatus, TOGGLE_NAME};
use state::StateStore;

mod response;
mod routes;
pub mod savings;
mod shutdown;

/// Entry point for every inbound event.
///
/// The event arrives pre-classified as an [`InboundEvent`]; each shape
/// is delegated to exactly one handler. Domain failures become
/// structured responses here, never an `Err` that would fail the
/// invocation.
pub async fn handle(
    event: LambdaEvent<InboundEvent>,
    store: &dyn StateStore,
    control: &dyn ComputeControl,
) -> Result<Response, Error> {
    let response: Response = match event.payload {
        InboundEvent::Http(request) => routes::route(request, store).await,
        InboundEvent::Notification(notification) => {
            match notification.records.into_iter().next() {
                Some(record) => shutdown::handle_alarm(record, store, control).await,
                None => {
                    tracing::warn!("Notification event carried no records");

                    response::unknown_event(serde_json::json!({"Records": []}))
                }
            }
        }
        InboundEvent::ToggleUpdate(update) => update_toggle_direct(update, store).await,
        InboundEvent::Unknown(value) => {
            tracing::warn!("Unrecognised event shape");

            response::unknown_event(value)
        }
    };

    Ok(response)
}

/// The persisted toggle, defaulting to `ON` when the record is missing
/// or the store is unreachable (fail-open).
pub(crate) async fn effective_toggle(store: &dyn StateStore) -> ToggleStatus {
    match store.get_toggle(TOGGLE_NAME).await {
        Ok(Some(status)) => status,
        Ok(None) => ToggleStatus::On,
        Err(err) => {
            tracing::warn!("Failed to read toggle, defaulting to ON: {err}");

            ToggleStatus::On
        }
    }
}

/// Legacy direct invocation: same effect as the update-toggle route,
/// but with a bare status/body response and no CORS headers.
async fn update_toggle_direct(update: ToggleUpdate, store: &dyn StateStore) -> Response {
    let Ok(status) = update.status.parse::<ToggleStatus>() else {
        return Response::plain(400, "Invalid status value");
    };

    match store.put_toggle(TOGGLE_NAME, status).await {
        Ok(()) => {
            tracing::info!(status = status.as_str(), "Toggle updated via direct invocation");

            Response::plain(200, format!("Toggle updated to {status}"))
        }
        Err(err) => {
            tracing::error!("Failed to update toggle: {err}");

            Response::plain(500, format!("Error: {err}"))
        }
    }
}
