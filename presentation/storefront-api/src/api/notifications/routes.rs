use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::api::notifications::dto::NotificationResponse;
use crate::api::tags::ApiTags;
use crate::observers::toast::ToastNotifier;

pub struct NotificationsApi {
    notifier: Arc<ToastNotifier>,
}

impl NotificationsApi {
    pub fn new(notifier: Arc<ToastNotifier>) -> Self {
        Self { notifier }
    }
}

#[OpenApi]
impl NotificationsApi {
    /// Active toasts
    ///
    /// Returns notifications that have not dismissed themselves yet, oldest
    /// first.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn active(&self) -> Json<Vec<NotificationResponse>> {
        Json(
            self.notifier
                .active()
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }
}
