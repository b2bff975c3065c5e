pub mod message_dialog;
pub mod message_service;
