use poem_openapi::Object;

use crate::observers::toast::Toast;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub id: u64,
    pub message: String,
    /// Milliseconds until the toast dismisses itself
    pub remaining_ms: u64,
}

impl From<Toast> for NotificationResponse {
    fn from(toast: Toast) -> Self {
        Self {
            id: toast.id,
            message: toast.message,
            remaining_ms: u64::try_from(toast.remaining.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
