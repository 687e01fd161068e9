use crate::savings::{estimate_savings, Savings};
use crate::{effective_toggle, response};
use chrono::{DateTime, Utc};
use compute::ComputeControl;
use lambda_runtime::tracing;
use model::alarm::AlarmMessage;
use model::event::NotificationRecord;
use model::{Response, SavingsLogRecord};
use state::StateStore;
use uuid::Uuid;

/// Body returned when the toggle gate skips the stop. A successful
/// no-op, worded so it cannot be mistaken for an actual stop.
pub(crate) const SKIPPED_BODY: &str = "EC2 stop feature is OFF. No instances stopped.";

/// Toggle-gated shutdown: stop the instance named by the alarm, then
/// record the estimated saving.
pub(crate) async fn handle_alarm(
    notification: NotificationRecord,
    store: &dyn StateStore,
    control: &dyn ComputeControl,
) -> Response {
    if !effective_toggle(store).await.is_on() {
        tracing::info!("Stop feature is toggled OFF, skipping instance stop");

        return Response::plain(200, SKIPPED_BODY);
    }

    let message: AlarmMessage = match serde_json::from_str(&notification.sns.message) {
        Ok(message) => message,
        Err(err) => {
            tracing::error!("Failed to parse alarm message: {err}");

            return Response::plain(500, format!("Error: {err}"));
        }
    };

    // A malformed alarm names no instance; never guess one
    let Some(instance_id) = message.instance_id() else {
        tracing::warn!("Alarm carried no InstanceId dimension");

        return Response::plain(400, "No instance ID found");
    };

    tracing::info!(instance_id, "Stopping instance");

    if let Err(err) = control.stop_instance(instance_id).await {
        tracing::error!("Failed to stop instance {instance_id}: {err}");

        return Response::plain(500, format!("Error: {err}"));
    }

    let now: DateTime<Utc> = Utc::now();
    let savings: Savings = estimate_savings(now);

    let record: SavingsLogRecord = SavingsLogRecord {
        id: Uuid::new_v4().to_string(),
        instance_id: instance_id.to_string(),
        date: now,
        week_number: savings.week_number,
        hours_saved: savings.hours_saved,
        cost_saved: savings.cost_saved,
    };

    if let Err(err) = store.append_log(record).await {
        // The stop already happened; an unrecorded saving must surface
        tracing::error!("Stopped instance {instance_id} but failed to log savings: {err}");

        return Response::plain(500, format!("Error: {err}"));
    }

    tracing::info!(
        instance_id,
        cost_saved = savings.cost_saved,
        "Recorded estimated savings"
    );

    Response::plain(200, format!("Successfully stopped instance {instance_id}"))
}
