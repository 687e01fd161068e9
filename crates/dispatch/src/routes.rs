use crate::{effective_toggle, response};
use lambda_runtime::tracing;
use model::event::{HttpRequest, ToggleUpdate};
use model::{Response, SavingsLogRecord, ToggleStatus, TOGGLE_NAME};
use serde_json::json;
use state::StateStore;

pub(crate) async fn route(request: HttpRequest, store: &dyn StateStore) -> Response {
    // CORS preflight short-circuits before any routing
    if request.method() == "OPTIONS" {
        return response::http(200, json!({"message": "OK"}));
    }

    let method: &str = request.method();
    let path: &str = request.path();

    tracing::debug!(method, path, "Routing HTTP request");

    // Substring match keeps stage-prefixed paths working
    if method == "GET" && path.contains("/fetch-logs") {
        fetch_logs(store).await
    } else if method == "GET" && path.contains("/toggle-status") {
        toggle_status(store).await
    } else if method == "POST" && path.contains("/update-toggle") {
        update_toggle(request.body.as_deref(), store).await
    } else {
        response::http(
            404,
            json!({"error": "Not Found", "path": path, "method": method}),
        )
    }
}

async fn fetch_logs(store: &dyn StateStore) -> Response {
    let records: Vec<SavingsLogRecord> = match store.scan_logs().await {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("Failed to scan savings logs: {err}");
            return response::error(500, "Failed to fetch logs");
        }
    };

    match serde_json::to_value(&records) {
        Ok(body) => response::http(200, body),
        Err(err) => {
            tracing::error!("Failed to serialise savings logs: {err}");
            response::error(500, "Failed to fetch logs")
        }
    }
}

async fn toggle_status(store: &dyn StateStore) -> Response {
    let status: ToggleStatus = effective_toggle(store).await;

    response::http(200, json!({"status": status}))
}

async fn update_toggle(body: Option<&str>, store: &dyn StateStore) -> Response {
    let update: ToggleUpdate = match serde_json::from_str(body.unwrap_or("{}")) {
        Ok(update) => update,
        Err(err) => return response::error(400, format!("Invalid request body: {err}")),
    };

    let Ok(status) = update.status.parse::<ToggleStatus>() else {
        return response::error(400, "Invalid status. Use ON or OFF");
    };

    match store.put_toggle(TOGGLE_NAME, status).await {
        Ok(()) => {
            tracing::info!(status = status.as_str(), "Toggle updated");

            response::http(200, json!({"message": format!("Toggle updated to {status}")}))
        }
        Err(err) => {
            tracing::error!("Failed to update toggle: {err}");

            response::error(500, "Failed to update toggle")
        }
    }
}
