use crate::{
    error::{MessageError, Result},
    localization::helper::fl,
};

/// Available message results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageResult {
    /// No result available.
    #[default]
    None,
    /// Message is acknowledged.
    Ok,
    /// Message is canceled.
    Cancel,
    /// Message is acknowledged with yes.
    Yes,
    /// Message is acknowledged with no.
    No,
}

impl MessageResult {
    /// Localized label of the button producing this result.
    pub fn label(&self) -> Option<String> {
        match self {
            MessageResult::None => None,
            MessageResult::Ok => Some(fl!("button-ok")),
            MessageResult::Cancel => Some(fl!("button-cancel")),
            MessageResult::Yes => Some(fl!("button-yes")),
            MessageResult::No => Some(fl!("button-no")),
        }
    }

    fn canonical_name(&self) -> &'static str {
        match self {
            MessageResult::None => "none",
            MessageResult::Ok => "ok",
            MessageResult::Cancel => "cancel",
            MessageResult::Yes => "yes",
            MessageResult::No => "no",
        }
    }

    /// Whether `answer` names this result, either by its localized label,
    /// its english name, or the first letter of one of them.
    pub fn matches_answer(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        if answer.is_empty() {
            return false;
        }
        let canonical = self.canonical_name();
        let label = self.label().map(|label| label.to_lowercase());

        let names = std::iter::once(canonical.to_owned()).chain(label);
        for name in names {
            if name == answer {
                return true;
            }
            if answer.chars().count() == 1 && name.chars().next() == answer.chars().next() {
                return true;
            }
        }
        false
    }
}

/// Available message buttons.
///
/// The discriminants are flag values, so a set can be passed through
/// toolkits that store it as a bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum MessageButton {
    /// OK button.
    #[default]
    Ok = 1,
    /// OK and Cancel buttons.
    OkCancel = 2,
    /// Yes and No buttons.
    YesNo = 4,
    /// Yes, No and Cancel buttons.
    YesNoCancel = 8,
}

impl MessageButton {
    pub fn bits(self) -> u32 {
        self as u32
    }

    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(MessageButton::Ok),
            2 => Ok(MessageButton::OkCancel),
            4 => Ok(MessageButton::YesNo),
            8 => Ok(MessageButton::YesNoCancel),
            _ => Err(MessageError::invalid_argument("button", "undefined button set")),
        }
    }

    /// Results of the offered buttons in display order.
    pub fn results(self) -> &'static [MessageResult] {
        match self {
            MessageButton::Ok => &[MessageResult::Ok],
            MessageButton::OkCancel => &[MessageResult::Ok, MessageResult::Cancel],
            MessageButton::YesNo => &[MessageResult::Yes, MessageResult::No],
            MessageButton::YesNoCancel => &[MessageResult::Yes, MessageResult::No, MessageResult::Cancel],
        }
    }

    pub fn offers(self, result: MessageResult) -> bool {
        self.results().contains(&result)
    }

    /// Result reported when the message is closed without pressing a button.
    pub fn dismiss_result(self) -> MessageResult {
        match self {
            MessageButton::Ok => MessageResult::Ok,
            MessageButton::OkCancel | MessageButton::YesNoCancel => MessageResult::Cancel,
            MessageButton::YesNo => MessageResult::No,
        }
    }
}

impl TryFrom<u32> for MessageButton {
    type Error = MessageError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

/// Available message images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageImage {
    /// Show no image.
    #[default]
    None,
    Information,
    Question,
    Exclamation,
    Error,
    Stop,
    Warning,
}

impl MessageImage {
    /// Short localized tag used by text renderers.
    pub fn label(&self) -> Option<String> {
        match self {
            MessageImage::None => None,
            MessageImage::Information => Some(fl!("image-information")),
            MessageImage::Question => Some(fl!("image-question")),
            MessageImage::Exclamation => Some(fl!("image-exclamation")),
            MessageImage::Error => Some(fl!("image-error")),
            MessageImage::Stop => Some(fl!("image-stop")),
            MessageImage::Warning => Some(fl!("image-warning")),
        }
    }
}

/// Per-call configuration of [`MessageService::show`](crate::service::MessageService::show).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageOptions {
    pub button: MessageButton,
    pub image: MessageImage,
}

impl MessageOptions {
    pub fn new(button: MessageButton, image: MessageImage) -> Self {
        Self { button, image }
    }

    pub fn with_button(mut self, button: MessageButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_image(mut self, image: MessageImage) -> Self {
        self.image = image;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Custom,
}

impl Severity {
    pub fn default_caption(&self) -> String {
        match self {
            Severity::Error => fl!("error-title"),
            Severity::Warning => fl!("warning-title"),
            Severity::Information => fl!("information-title"),
            Severity::Custom => fl!("message-title"),
        }
    }

    /// Options of the single-acknowledgment message of this severity.
    pub fn options(&self) -> MessageOptions {
        let image = match self {
            Severity::Error => MessageImage::Error,
            Severity::Warning => MessageImage::Warning,
            Severity::Information => MessageImage::Information,
            Severity::Custom => MessageImage::None,
        };
        MessageOptions::new(MessageButton::Ok, image)
    }
}

/// A validated message ready to be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    caption: String,
    options: MessageOptions,
    severity: Severity,
}

impl Message {
    /// Fails with [`MessageError::InvalidArgument`] if `text` is empty or
    /// whitespace-only. A blank caption falls back to the default caption of
    /// `severity`.
    pub fn new(text: &str, caption: &str, options: MessageOptions, severity: Severity) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(MessageError::invalid_argument("message", "is empty or whitespace"));
        }
        let caption = if caption.trim().is_empty() {
            severity.default_caption()
        } else {
            caption.to_owned()
        };
        Ok(Self {
            text: text.to_owned(),
            caption,
            options,
            severity,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn options(&self) -> MessageOptions {
        self.options
    }

    pub fn button(&self) -> MessageButton {
        self.options.button
    }

    pub fn image(&self) -> MessageImage {
        self.options.image
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_flags_are_preserved() {
        for button in [
            MessageButton::Ok,
            MessageButton::OkCancel,
            MessageButton::YesNo,
            MessageButton::YesNoCancel,
        ] {
            assert_eq!(MessageButton::from_bits(button.bits()).unwrap(), button);
        }
        assert_eq!(MessageButton::YesNoCancel.bits(), 8);
        assert!(MessageButton::try_from(3).unwrap_err().is_invalid_argument());
        assert!(MessageButton::from_bits(0).is_err());
    }

    #[test]
    fn dismiss_result_is_offered_by_the_set() {
        for button in [
            MessageButton::Ok,
            MessageButton::OkCancel,
            MessageButton::YesNo,
            MessageButton::YesNoCancel,
        ] {
            assert!(button.offers(button.dismiss_result()));
            assert!(!button.offers(MessageResult::None));
        }
    }

    #[test]
    fn blank_caption_falls_back_to_severity_title() {
        let message = Message::new("Disk full", "\t", Severity::Error.options(), Severity::Error).unwrap();
        assert_eq!(message.caption(), "Error");
        assert_eq!(message.image(), MessageImage::Error);
        assert_eq!(message.button(), MessageButton::Ok);
    }
}
