use super::messages::Completion;
use crate::message::{Message, MessageImage, MessageResult};
use mxl_relm4_components::relm4::gtk;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct MessageDialog {
    pub(super) hidden: bool,
    pub(super) current: Option<(Message, Completion)>,
    pub(super) queue: VecDeque<(Message, Completion)>,
    pub(super) text_buffer: gtk::TextBuffer,
}

impl MessageDialog {
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub(super) fn caption(&self) -> &str {
        self.current.as_ref().map_or("", |(message, _)| message.caption())
    }

    pub(super) fn offers(&self, result: MessageResult) -> bool {
        offers(self.current.as_ref().map(|(message, _)| message), result)
    }

    pub(super) fn icon_name(&self) -> Option<&'static str> {
        let image = self.current.as_ref().map_or(MessageImage::None, |(message, _)| message.image());
        icon_name(image)
    }
}

fn offers(message: Option<&Message>, result: MessageResult) -> bool {
    message.is_some_and(|message| message.button().offers(result))
}

fn icon_name(image: MessageImage) -> Option<&'static str> {
    match image {
        MessageImage::None => None,
        MessageImage::Information => Some("dialog-information-symbolic"),
        MessageImage::Question => Some("dialog-question-symbolic"),
        MessageImage::Exclamation | MessageImage::Warning => Some("dialog-warning-symbolic"),
        MessageImage::Error | MessageImage::Stop => Some("dialog-error-symbolic"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageButton, MessageOptions, Severity};

    fn message(button: MessageButton) -> Message {
        Message::new("Delete file?", "Confirm", MessageOptions::new(button, MessageImage::None), Severity::Custom).unwrap()
    }

    #[test]
    fn buttons_are_visible_per_button_set() {
        use MessageResult::{Cancel, No, Ok, Yes};

        let expected = [
            (MessageButton::Ok, [Ok].as_slice()),
            (MessageButton::OkCancel, [Ok, Cancel].as_slice()),
            (MessageButton::YesNo, [Yes, No].as_slice()),
            (MessageButton::YesNoCancel, [Yes, No, Cancel].as_slice()),
        ];
        for (button, visible) in expected {
            let message = message(button);
            for result in [Ok, Cancel, Yes, No] {
                assert_eq!(offers(Some(&message), result), visible.contains(&result), "{button:?} {result:?}");
            }
            assert!(!offers(Some(&message), MessageResult::None));
        }
    }

    #[test]
    fn no_button_is_visible_without_message() {
        for result in [MessageResult::Ok, MessageResult::Cancel, MessageResult::Yes, MessageResult::No] {
            assert!(!offers(None, result));
        }
    }

    #[test]
    fn images_map_to_themed_icons() {
        assert_eq!(icon_name(MessageImage::None), None);
        assert_eq!(icon_name(MessageImage::Information), Some("dialog-information-symbolic"));
        assert_eq!(icon_name(MessageImage::Question), Some("dialog-question-symbolic"));
        assert_eq!(icon_name(MessageImage::Exclamation), Some("dialog-warning-symbolic"));
        assert_eq!(icon_name(MessageImage::Warning), Some("dialog-warning-symbolic"));
        assert_eq!(icon_name(MessageImage::Error), Some("dialog-error-symbolic"));
        assert_eq!(icon_name(MessageImage::Stop), Some("dialog-error-symbolic"));
    }
}
