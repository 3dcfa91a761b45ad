/// Outbound email notifications
///
/// Best-effort, fire-and-forget delivery through the EmailJS REST API on
/// two triggers: a cleaning was logged, a payment was processed. A failed
/// send is logged, reported as a status flag, and otherwise lost — there
/// is no retry and no queue, and a failure never affects the action that
/// triggered the notification.
pub mod dispatcher;
pub mod models;
pub mod templates;

pub use dispatcher::EmailDispatcher;
pub use models::NotificationStatus;
