// src/status.rs
//! Status region for signup results: hidden → visible(success|error) → hidden.
//!
//! Every `Show` starts a new generation. The hide timer carries the generation
//! it was started for, so a timer left over from an earlier message can never
//! hide a newer one.

use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub enum StatusAction {
    Show(StatusMessage),
    Hide { generation: u64 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusRegion {
    // Last text stays in place while hidden, like the static page did.
    message: Option<StatusMessage>,
    visible: bool,
    generation: u64,
}

impl StatusRegion {
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Reducible for StatusRegion {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            StatusAction::Show(message) => Rc::new(StatusRegion {
                message: Some(message),
                visible: true,
                generation: self.generation + 1,
            }),
            StatusAction::Hide { generation } if generation == self.generation && self.visible => {
                Rc::new(StatusRegion {
                    visible: false,
                    ..(*self).clone()
                })
            }
            StatusAction::Hide { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_hide() {
        let region = Rc::new(StatusRegion::default());
        assert!(!region.is_visible());

        let region = region.reduce(StatusAction::Show(StatusMessage::success("Signed up!")));
        assert!(region.is_visible());
        assert_eq!(region.message().unwrap().kind.class(), "success");

        let gen = region.generation();
        let region = region.reduce(StatusAction::Hide { generation: gen });
        assert!(!region.is_visible());
        assert_eq!(region.message().unwrap().text, "Signed up!");
    }

    #[test]
    fn old_timer_cannot_hide_newer_message() {
        let region = Rc::new(StatusRegion::default())
            .reduce(StatusAction::Show(StatusMessage::error("Already signed up")));
        let first = region.generation();

        let region = region.reduce(StatusAction::Show(StatusMessage::success("Signed up!")));
        let region = region.reduce(StatusAction::Hide { generation: first });
        assert!(region.is_visible());
        assert_eq!(region.message().unwrap().text, "Signed up!");

        let latest = region.generation();
        let region = region.reduce(StatusAction::Hide { generation: latest });
        assert!(!region.is_visible());
    }

    #[test]
    fn repeated_hide_is_a_no_op() {
        let region = Rc::new(StatusRegion::default())
            .reduce(StatusAction::Show(StatusMessage::error("x")));
        let gen = region.generation();
        let hidden = region.reduce(StatusAction::Hide { generation: gen });
        let again = Rc::clone(&hidden).reduce(StatusAction::Hide { generation: gen });
        assert!(Rc::ptr_eq(&hidden, &again));
    }
}
