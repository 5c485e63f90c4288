//! Notification Entity

use chrono::{DateTime, Utc};
use kernel::id::{NotificationId, UserId};

/// Notification entity
///
/// Created by admins or internally by workflow events; only the recipient
/// or an admin may flip the read flag.
#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_id: NotificationId,
    /// Recipient
    pub user_id: UserId,
    pub title: String,
    pub body: Option<String>,
    /// Free-form payload for clients
    pub data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        user_id: UserId,
        title: String,
        body: Option<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        Self {
            notification_id: NotificationId::new(),
            user_id,
            title,
            body,
            data,
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_new_notification_is_unread() {
        let mut note = Notification::new(Id::new(), "New application".to_string(), None, None);
        assert!(!note.read);
        note.mark_read();
        assert!(note.read);
    }
}
