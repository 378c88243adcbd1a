use crate::app::domain::messages::{Notification, NotificationKind};
use crate::app::infrastructure::dom::Element;

/// Sink for user-visible messages raised by controllers.
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: NotificationKind);
}

/// Collects notifications so the coordinator can display them after an event.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.push(Notification {
            message: message.to_string(),
            kind,
        });
    }
}

/// Shows notifications in the dashboard's notification banner.
#[derive(Debug, Clone)]
pub struct NotificationService {
    container_id: String,
    text_id: String,
    auto_hide_ms: u64,
    last: Option<Notification>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new("notification", "notification-text", 3000)
    }
}

impl NotificationService {
    pub fn new(container_id: &str, text_id: &str, auto_hide_ms: u64) -> Self {
        Self {
            container_id: container_id.to_string(),
            text_id: text_id.to_string(),
            auto_hide_ms,
            last: None,
        }
    }

    /// Write the message into the banner and mark it visible.
    ///
    /// The banner carries `data-hide-after` when it should be hidden again;
    /// the host schedules [`NotificationService::hide`] accordingly.
    pub fn show(&mut self, page: &mut Element, notification: Notification) {
        tracing::debug!("notification [{}]: {}", notification.kind.as_str(), notification.message);
        if let Some(text) = page.find_by_id_mut(&self.text_id) {
            text.set_text(&notification.message);
        } else {
            return;
        }
        let Some(container) = page.find_by_id_mut(&self.container_id) else {
            return;
        };
        container.set_class_name(&format!(
            "notification notification-{} show",
            notification.kind.as_str()
        ));
        if self.auto_hide_ms > 0 {
            container.set_attr("data-hide-after", &self.auto_hide_ms.to_string());
        }
        self.last = Some(notification);
    }

    pub fn hide(&mut self, page: &mut Element) {
        if let Some(container) = page.find_by_id_mut(&self.container_id) {
            container.remove_class("show");
            container.remove_attr("data-hide-after");
        }
    }

    /// Last notification displayed
    pub fn last(&self) -> Option<&Notification> {
        self.last.as_ref()
    }
}
