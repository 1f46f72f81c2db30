// src/signup.rs
use crate::api::SignupResponse;
use crate::board::BoardAction;
use crate::error::ApiError;
use crate::status::{StatusAction, StatusMessage};

pub const GENERIC_FAILURE: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// What a signup attempt turned into, from the form's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Accepted { message: String },
    Rejected { detail: String },
    Failed,
}

impl SignupOutcome {
    pub fn from_result(result: Result<SignupResponse, ApiError>) -> Self {
        let resp = match result {
            Ok(resp) => resp,
            Err(_) => return SignupOutcome::Failed,
        };
        // An unparsable body is a failure even on 2xx.
        let reply = match resp.reply {
            Ok(reply) => reply,
            Err(_) => return SignupOutcome::Failed,
        };
        if resp.ok {
            SignupOutcome::Accepted {
                message: reply.message.unwrap_or_default(),
            }
        } else {
            SignupOutcome::Rejected {
                detail: reply
                    .detail_text()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(GENERIC_FAILURE)
                    .to_string(),
            }
        }
    }

    pub fn status(&self) -> StatusMessage {
        match self {
            SignupOutcome::Accepted { message } => StatusMessage::success(message.clone()),
            SignupOutcome::Rejected { detail } => StatusMessage::error(detail.clone()),
            SignupOutcome::Failed => StatusMessage::error(SIGNUP_FAILED),
        }
    }

    /// Only an accepted signup clears the form and refreshes the list.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SignupOutcome::Accepted { .. })
    }

    pub fn reaction(&self) -> SignupReaction {
        let accepted = self.is_accepted();
        SignupReaction {
            status: self.status(),
            clear_form: accepted,
            refresh: accepted,
        }
    }
}

/// Everything the page changes once a signup attempt settles.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupReaction {
    pub status: StatusMessage,
    /// Empty the email field and go back to the placeholder option.
    pub clear_form: bool,
    pub refresh: bool,
}

impl SignupReaction {
    /// Actions for the status region and, on success, the board.
    pub fn into_actions(self) -> (StatusAction, Option<BoardAction>) {
        let board = self.refresh.then_some(BoardAction::SignupSucceeded);
        (StatusAction::Show(self.status), board)
    }
}
