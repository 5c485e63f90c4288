//! Notification Use Cases
//!
//! Recipient-scoped reads and read-flag updates; creation is admin-only
//! (workflow events create notifications internally, not through here).

use std::sync::Arc;

use auth::{AuthUser, Authorizer, UserRole};
use kernel::id::{NotificationId, UserId};

use crate::domain::entity::notification::Notification;
use crate::domain::repository::NotificationRepository;
use crate::error::{BoardError, BoardResult};

/// Notification use cases
pub struct NotificationsUseCase<N>
where
    N: NotificationRepository,
{
    notification_repo: Arc<N>,
}

impl<N> NotificationsUseCase<N>
where
    N: NotificationRepository,
{
    pub fn new(notification_repo: Arc<N>) -> Self {
        Self { notification_repo }
    }

    /// The acting user's notifications, newest first.
    pub async fn list(&self, acting: &AuthUser) -> BoardResult<Vec<Notification>> {
        self.notification_repo.list_for_user(&acting.user_id).await
    }

    /// Mark a notification read. Permitted to the recipient or an admin;
    /// this is identity-scoped, not employer-scoped.
    pub async fn mark_read(
        &self,
        acting: &AuthUser,
        notification_id: NotificationId,
    ) -> BoardResult<Notification> {
        let mut note = self
            .notification_repo
            .find_by_id(&notification_id)
            .await?
            .ok_or(BoardError::NotificationNotFound)?;

        if note.user_id != acting.user_id && !acting.role.is_admin() {
            return Err(BoardError::Auth(auth::AuthError::Forbidden));
        }

        note.mark_read();
        self.notification_repo.update(&note).await?;

        Ok(note)
    }

    /// Admin-created notification.
    pub async fn create(
        &self,
        acting: &AuthUser,
        user_id: UserId,
        title: String,
        body: Option<String>,
        data: Option<serde_json::Value>,
    ) -> BoardResult<Notification> {
        Authorizer::require_role(acting, &[UserRole::Admin])?;

        if title.is_empty() {
            return Err(BoardError::Validation(
                "userId and title required".to_string(),
            ));
        }

        let note = Notification::new(user_id, title, body, data);
        self.notification_repo.create(&note).await?;

        Ok(note)
    }
}
