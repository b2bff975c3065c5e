//! Terminal rendition of the message service.

use crate::{
    error::Result,
    localization::helper::fl,
    message::{Message, MessageButton, MessageResult},
    service::{MessageService, ResultCallback},
};
use log::*;
use std::{
    io::{self, BufRead, Write},
    sync::Mutex,
};

const DEFAULT_MAX_ATTEMPTS: usize = 3;

#[derive(Debug)]
pub struct ConsoleMessageServiceBuilder {
    prompt: bool,
    max_attempts: usize,
}

impl Default for ConsoleMessageServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleMessageServiceBuilder {
    pub fn new() -> Self {
        Self {
            prompt: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// When disabled, messages are only printed and dismissed right away.
    pub fn prompt(&mut self, prompt: bool) -> &mut Self {
        self.prompt = prompt;
        self
    }

    /// Number of answers read before an unrecognised answer dismisses the
    /// message. Values below one are treated as one.
    pub fn max_attempts(&mut self, max_attempts: usize) -> &mut Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn build<R: BufRead, W: Write>(&self, reader: R, writer: W) -> ConsoleMessageService<R, W> {
        ConsoleMessageService {
            prompt: self.prompt,
            max_attempts: self.max_attempts,
            io: Mutex::new(ConsoleIo { reader, writer }),
        }
    }
}

struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

pub struct ConsoleMessageService<R, W> {
    prompt: bool,
    max_attempts: usize,
    io: Mutex<ConsoleIo<R, W>>,
}

impl ConsoleMessageService<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        ConsoleMessageServiceBuilder::new().build(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleMessageService<R, W> {
    pub fn builder() -> ConsoleMessageServiceBuilder {
        ConsoleMessageServiceBuilder::new()
    }

    /// Returns the reader and writer, e.g. to inspect the rendered output.
    pub fn into_inner(self) -> (R, W) {
        let io = self.io.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        (io.reader, io.writer)
    }

    fn run(&self, message: &Message) -> Result<MessageResult> {
        let mut io = self.io.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let ConsoleIo { reader, writer } = &mut *io;

        render(writer, message)?;
        let button = message.button();
        if !self.prompt {
            writer.flush()?;
            return Ok(button.dismiss_result());
        }

        let prompt = prompt_line(button);
        for attempt in 1..=self.max_attempts {
            write!(writer, "{prompt}")?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                debug!("End of input, dismiss '{}'", message.caption());
                writeln!(writer)?;
                return Ok(button.dismiss_result());
            }
            trace!("Answer #{attempt}: {:?}", line.trim_end());

            if let Some(result) = parse_answer(button, &line) {
                return Ok(result);
            }
            warn!("Unrecognised answer {:?} for {button:?}", line.trim());
        }
        debug!("No valid answer, dismiss '{}'", message.caption());
        writeln!(writer)?;
        Ok(button.dismiss_result())
    }
}

fn render<W: Write>(writer: &mut W, message: &Message) -> io::Result<()> {
    match message.image().label() {
        Some(label) => writeln!(writer, "[{label}] {}", message.caption())?,
        None => writeln!(writer, "{}", message.caption())?,
    }
    writeln!(writer, "{}", message.text())
}

fn prompt_line(button: MessageButton) -> String {
    if button == MessageButton::Ok {
        return format!("{} ", fl!("button-prompt-acknowledge"));
    }
    let choices: Vec<String> = button
        .results()
        .iter()
        .filter_map(|result| result.label())
        .map(|label| {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => format!("[{}]{}", first.to_uppercase(), chars.as_str()),
                None => label,
            }
        })
        .collect();
    format!("{}: ", choices.join(" / "))
}

fn parse_answer(button: MessageButton, line: &str) -> Option<MessageResult> {
    if button == MessageButton::Ok {
        // Any line acknowledges.
        return Some(MessageResult::Ok);
    }
    button.results().iter().copied().find(|result| result.matches_answer(line))
}

impl<R: BufRead, W: Write> MessageService for ConsoleMessageService<R, W> {
    fn present(&self, message: Message) -> Result<MessageResult> {
        self.run(&message)
    }

    fn present_async(&self, message: Message, on_dismissed: ResultCallback) -> Result<()> {
        let result = self.run(&message)?;
        on_dismissed(result);
        Ok(())
    }
}
