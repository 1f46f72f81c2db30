// src/notify.rs
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

/// Where blocking error messages go. The board only knows this trait; the
/// default pops a browser alert.
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// Non-blocking alternative: writes to the browser console instead.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        gloo::console::warn!(message.to_string());
    }
}

/// Notifier selected by the `notifier` config key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Alert,
    Console,
}

impl NotifierKind {
    pub fn handle(self) -> NotifierHandle {
        match self {
            NotifierKind::Alert => NotifierHandle::new(AlertNotifier),
            NotifierKind::Console => NotifierHandle::new(ConsoleNotifier),
        }
    }
}

/// Prop value wrapping the active notifier. Equality is identity, which is
/// all Yew needs to decide whether consumers re-render.
#[derive(Clone)]
pub struct NotifierHandle(Rc<dyn Notifier>);

impl NotifierHandle {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Rc::new(notifier))
    }

    pub fn notify(&self, message: &str) {
        self.0.notify(message);
    }
}

impl PartialEq for NotifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NotifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotifierHandle")
    }
}
