//! A [`MessageService`] that answers from a prepared script.
//!
//! Used to drive view-model code in tests: queue the answers the "user"
//! gives, run the code, then inspect which messages were shown.

use crate::{
    error::{MessageError, Result},
    message::{Message, MessageButton, MessageImage, MessageResult, Severity},
    service::{MessageService, ResultCallback},
};
use log::*;
use std::{collections::VecDeque, sync::Mutex};

/// Record of a presented message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownMessage {
    pub text: String,
    pub caption: String,
    pub button: MessageButton,
    pub image: MessageImage,
    pub severity: Severity,
}

impl From<&Message> for ShownMessage {
    fn from(message: &Message) -> Self {
        Self {
            text: message.text().to_owned(),
            caption: message.caption().to_owned(),
            button: message.button(),
            image: message.image(),
            severity: message.severity(),
        }
    }
}

#[derive(Default)]
struct ScriptState {
    results: VecDeque<MessageResult>,
    shown: Vec<ShownMessage>,
    pending: Vec<(MessageResult, ResultCallback)>,
}

#[derive(Default)]
pub struct ScriptedMessageService {
    deferred: bool,
    state: Mutex<ScriptState>,
}

impl ScriptedMessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: impl IntoIterator<Item = MessageResult>) -> Self {
        let service = Self::new();
        service.lock().results.extend(results);
        service
    }

    /// Park callbacks of non-blocking presentations until
    /// [`dismiss_pending`](Self::dismiss_pending) is called.
    pub fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }

    pub fn push_result(&self, result: MessageResult) {
        self.lock().results.push_back(result);
    }

    /// Snapshot of all messages presented so far, oldest first.
    pub fn shown(&self) -> Vec<ShownMessage> {
        self.lock().shown.clone()
    }

    pub fn clear(&self) {
        self.lock().shown.clear();
    }

    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Invokes all parked callbacks in presentation order and returns how
    /// many fired.
    pub fn dismiss_pending(&self) -> usize {
        let pending = std::mem::take(&mut self.lock().pending);
        let count = pending.len();
        for (result, callback) in pending {
            debug!("Dismiss parked message with {result:?}");
            callback(result);
        }
        count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        // Callbacks never run under the lock, the state stays consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn answer(&self, state: &mut ScriptState, message: &Message) -> Result<MessageResult> {
        state.shown.push(message.into());
        let button = message.button();
        match state.results.pop_front() {
            Some(result) if button.offers(result) => Ok(result),
            Some(result) => Err(MessageError::UnexpectedResult { result, button }),
            None => {
                trace!("No scripted result left, dismiss '{}'", message.caption());
                Ok(button.dismiss_result())
            }
        }
    }
}

impl MessageService for ScriptedMessageService {
    fn present(&self, message: Message) -> Result<MessageResult> {
        let mut state = self.lock();
        self.answer(&mut state, &message)
    }

    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()> {
        let result = {
            let mut state = self.lock();
            let result = self.answer(&mut state, &message)?;
            if self.deferred {
                state.pending.push((result, on_dismissed));
                return Ok(());
            }
            result
        };
        on_dismissed(result);
        Ok(())
    }
}

impl Drop for ScriptedMessageService {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner());
        for (_, callback) in state.pending.drain(..) {
            debug!("Service dropped, dismiss parked message without result");
            callback(MessageResult::None);
        }
    }
}
