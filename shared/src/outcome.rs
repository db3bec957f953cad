//! What the board does once a signup or unregister call settles.

use crate::api::{MessageResponse, Mutation};
use crate::error::ClientResult;
use crate::message::TransientMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomePlan {
    pub message: TransientMessage,
    /// Re-run the catalog loader.
    pub reload: bool,
    /// Clear the signup form fields.
    pub reset_form: bool,
}

impl OutcomePlan {
    pub fn new(mutation: Mutation, outcome: &ClientResult<MessageResponse>) -> Self {
        let succeeded = outcome.is_ok();
        Self {
            message: TransientMessage::from_outcome(mutation, outcome),
            reload: succeeded,
            reset_form: succeeded && mutation == Mutation::Signup,
        }
    }

    /// Show the message, then reset and reload as planned. Each effect runs
    /// at most once.
    pub fn run(
        self,
        show: impl FnOnce(TransientMessage),
        reset_form: impl FnOnce(),
        reload: impl FnOnce(),
    ) {
        show(self.message);
        if self.reset_form {
            reset_form();
        }
        if self.reload {
            reload();
        }
    }
}
