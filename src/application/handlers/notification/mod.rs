//! Notification handlers.

mod get_notifications;

pub use get_notifications::{GetNotificationsHandler, GetNotificationsQuery, GetNotificationsResult};
