use crate::{
    error::{MessageError, Result},
    localization::helper::fl,
    message::{Message, MessageOptions, MessageResult, Severity},
};
use log::*;

/// Invoked once when a single-acknowledgment message is dismissed.
pub type CompletedCallback = Box<dyn FnOnce() + Send + 'static>;

/// Invoked once with the user's choice when a message is dismissed.
pub type ResultCallback = Box<dyn FnOnce(MessageResult) + Send + 'static>;

/// Presents messages to the user without tying the caller to a toolkit.
///
/// Adapters implement [`present`](Self::present) and
/// [`present_async`](Self::present_async); callers use the `show*` methods,
/// which validate their arguments before the adapter is involved.
///
/// There is no guarantee that the `show*` methods with a callback run
/// asynchronously, only that the callback is invoked exactly once when the
/// message is dismissed. The callback may run on another thread or in a later
/// main loop iteration.
pub trait MessageService {
    /// Presents `message` and waits until it is dismissed.
    fn present(&self, message: Message) -> Result<MessageResult>;

    /// Presents `message` and returns; `on_dismissed` is invoked exactly once
    /// with the result.
    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()>;

    /// Shows an error message derived from `error`.
    ///
    /// Fails with [`MessageError::InvalidArgument`] if `error` is `None`.
    fn show_exception(&self, error: Option<&anyhow::Error>, completed: Option<CompletedCallback>) -> Result<()> {
        let error = error.ok_or_else(|| MessageError::invalid_argument("error", "is absent"))?;
        let mut text = format!("{error:#}");
        if text.trim().is_empty() {
            text = fl!("unknown-error");
        }
        show_severity(self, &text, "", Severity::Error, completed)
    }

    /// Shows an error message.
    fn show_error(&self, message: &str, caption: &str, completed: Option<CompletedCallback>) -> Result<()> {
        show_severity(self, message, caption, Severity::Error, completed)
    }

    /// Shows a warning message.
    fn show_warning(&self, message: &str, caption: &str, completed: Option<CompletedCallback>) -> Result<()> {
        show_severity(self, message, caption, Severity::Warning, completed)
    }

    /// Shows an information message.
    fn show_information(&self, message: &str, caption: &str, completed: Option<CompletedCallback>) -> Result<()> {
        show_severity(self, message, caption, Severity::Information, completed)
    }

    /// Shows a message and returns the user's choice.
    fn show(&self, message: &str, caption: &str, options: MessageOptions) -> Result<MessageResult> {
        let message = Message::new(message, caption, options, Severity::Custom)?;
        debug!("Show message '{}' with {:?}", message.caption(), options);
        let result = self.present(message)?;
        debug!("Message dismissed with {result:?}");
        Ok(result)
    }

    /// Shows a message; the user's choice is delivered to `completed`.
    fn show_async(
        &self,
        message: &str,
        caption: &str,
        options: MessageOptions,
        completed: Option<ResultCallback>,
    ) -> Result<()> {
        let message = Message::new(message, caption, options, Severity::Custom)?;
        debug!("Show message '{}' with {:?} without waiting", message.caption(), options);
        self.present_async(message, completion(completed))
    }
}

fn show_severity<S: MessageService + ?Sized>(
    service: &S,
    message: &str,
    caption: &str,
    severity: Severity,
    completed: Option<CompletedCallback>,
) -> Result<()> {
    let message = Message::new(message, caption, severity.options(), severity)?;
    debug!("Show {severity:?} message '{}'", message.caption());
    let completed = completed.map(|completed| -> ResultCallback { Box::new(move |_| completed()) });
    service.present_async(message, completion(completed))
}

fn completion(completed: Option<ResultCallback>) -> ResultCallback {
    match completed {
        Some(completed) => completed,
        None => Box::new(|result| trace!("Message dismissed with {result:?}, no callback registered")),
    }
}

impl<S: MessageService + ?Sized> MessageService for std::sync::Arc<S> {
    fn present(&self, message: Message) -> Result<MessageResult> {
        (**self).present(message)
    }

    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()> {
        (**self).present_async(message, on_dismissed)
    }
}

impl<S: MessageService + ?Sized> MessageService for Box<S> {
    fn present(&self, message: Message) -> Result<MessageResult> {
        (**self).present(message)
    }

    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()> {
        (**self).present_async(message, on_dismissed)
    }
}
