use crate::{
    message::{Message, MessageResult},
    service::ResultCallback,
};
use mxl_relm4_components::relm4::gtk::glib;

/// Callback of a queued message, consumed on dismissal.
pub struct Completion(Option<ResultCallback>);

impl Completion {
    pub fn new(callback: ResultCallback) -> Self {
        Self(Some(callback))
    }

    pub(super) fn complete(&mut self, result: MessageResult) {
        if let Some(callback) = self.0.take() {
            callback(result);
        }
    }

    /// Completes from an idle source of the main context, so the callback can
    /// present the next blocking message while the dialog keeps running.
    pub(super) fn complete_when_idle(mut self, result: MessageResult, then: impl FnOnce() + 'static) {
        glib::idle_add_local_once(move || {
            self.complete(result);
            then();
        });
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        // Dialog went away with the message still queued.
        self.complete(MessageResult::None);
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Completion")
            .field(&if self.0.is_some() { "pending" } else { "done" })
            .finish()
    }
}

#[derive(Debug)]
pub enum MessageDialogInput {
    Show(Message, Completion),
    PrivateMessage(internal::PrivateMsg),
}

#[derive(Debug)]
pub enum MessageDialogOutput {
    Dismissed(MessageResult),
}

pub(super) mod internal {
    use crate::message::MessageResult;

    #[derive(Debug)]
    pub enum PrivateMsg {
        ButtonPressed(MessageResult),
        CloseRequested,
    }
}
