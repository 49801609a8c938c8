//! HTTP adapter for the notification feed.
//!
//! - `GET /api/notifications` - Payment outcomes, then due and overdue bills

mod handlers;
mod routes;

pub use handlers::NotificationListResponse;
pub use routes::notification_routes;
