use ircline_parser::{decode_line, Clock, Message, ParseError, SystemClock};

use crate::Config;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Malformed(#[from] ParseError),
    #[error("line is {length} bytes long, the limit is {max}")]
    LineTooLong { length: usize, max: usize },
}

/// Decodes framed lines according to a [`Config`].
///
/// Holds no per-line state, so a single decoder can be shared by every
/// connection as long as its clock can.
#[derive(Debug)]
pub struct LineDecoder<C: Clock = SystemClock> {
    max_line_length: Option<usize>,
    log_rejected_lines: bool,
    clock: C,
}

impl LineDecoder<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> LineDecoder<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            max_line_length: config.max_line_length,
            log_rejected_lines: config.log_rejected_lines,
            clock,
        }
    }

    pub fn decode(&self, line: &str) -> Result<Message, DecodeError> {
        let result = self.try_decode(line);
        match &result {
            Ok(message) => log::trace!("decoded {} from {}", message.command(), message.origin()),
            Err(err) if self.log_rejected_lines => log::warn!("error when parsing line: {err}"),
            Err(_) => {}
        }
        result
    }

    fn try_decode(&self, line: &str) -> Result<Message, DecodeError> {
        if let Some(max) = self.max_line_length {
            let length = line.strip_suffix("\r\n").unwrap_or(line).len();
            if length > max {
                return Err(DecodeError::LineTooLong { length, max });
            }
        }
        let message = decode_line(line, &self.clock)?;
        Ok(message)
    }
}
