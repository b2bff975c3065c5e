#[cfg(feature = "gtk")]
pub extern crate mxl_relm4_components;

pub mod console;
pub mod error;
mod localization;
pub mod message;
pub mod misc;
pub mod scripted;
pub mod service;
#[cfg(feature = "gtk")]
pub mod ui;

pub use error::{MessageError, Result};
pub use message::{Message, MessageButton, MessageImage, MessageOptions, MessageResult, Severity};
pub use misc::init;
pub use service::{CompletedCallback, MessageService, ResultCallback};
