use crate::{
    error::{MessageError, Result},
    message::{Message, MessageResult},
    service::{MessageService, ResultCallback},
    ui::message_dialog::{
        messages::{Completion, MessageDialogInput},
        model::MessageDialog,
    },
};
use anyhow::anyhow;
use log::*;
use mxl_relm4_components::relm4::{self, gtk::glib, prelude::*};
use std::sync::{mpsc, Arc, Mutex};

/// [`MessageService`] backed by a [`MessageDialog`] component.
///
/// Can be cloned and handed to view models on any thread. Blocking calls made
/// on the GTK main thread keep the main context running until the dialog is
/// dismissed; calls from other threads wait on a channel.
#[derive(Clone)]
pub struct DialogMessageService {
    sender: relm4::Sender<MessageDialogInput>,
}

impl DialogMessageService {
    pub fn new(sender: relm4::Sender<MessageDialogInput>) -> Self {
        Self { sender }
    }

    pub fn from_controller(controller: &Controller<MessageDialog>) -> Self {
        Self::new(controller.sender().clone())
    }

    fn wait_on_main_context(&self, context: &glib::MainContext, message: Message) -> Result<MessageResult> {
        let slot = Arc::new(Mutex::new(None));
        let callback_slot = Arc::clone(&slot);
        self.present_async(
            message,
            Box::new(move |result| {
                if let Ok(mut slot) = callback_slot.lock() {
                    *slot = Some(result);
                }
            }),
        )?;

        loop {
            let result = slot.lock().map_err(|_| anyhow!("Message result lock is poisoned"))?.take();
            if let Some(result) = result {
                return Ok(result);
            }
            context.iteration(true);
        }
    }
}

impl MessageService for DialogMessageService {
    fn present(&self, message: Message) -> Result<MessageResult> {
        let context = glib::MainContext::default();
        if context.is_owner() {
            return self.wait_on_main_context(&context, message);
        }

        let (tx, rx) = mpsc::channel();
        self.present_async(
            message,
            Box::new(move |result| {
                tx.send(result).unwrap_or_default();
            }),
        )?;
        rx.recv()
            .map_err(|_| MessageError::Backend(anyhow!("Message dialog was dropped before it was dismissed")))
    }

    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()> {
        self.sender
            .send(MessageDialogInput::Show(message, Completion::new(on_dismissed)))
            .map_err(|input| {
                warn!("Cannot show message, dialog is gone - {input:?}");
                anyhow!("Message dialog is not running")
            })?;
        Ok(())
    }
}
