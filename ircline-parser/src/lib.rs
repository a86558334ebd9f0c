//! Note: IRCv3 message tags and CTCP payloads are not handled.
use std::time::SystemTime;

use smallvec::SmallVec;

mod clock;
mod error;
mod outgoing;
mod parser;

pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::error::ParseError;
pub use crate::outgoing::privmsg;
pub use crate::parser::{decode_line, decode_line_now};

pub type Parameters = SmallVec<[String; 15]>;

/// The `nick!user@host` form of a message origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub nick: String,
    pub user: String,
    pub host: String,
}

///
/// A single line received from a server, decoded.
///
/// See: https://www.rfc-editor.org/rfc/rfc2812#section-2.3.1
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    origin: String,
    source: Option<Source>,
    command: String,
    parameters: Parameters,
    trailing: Option<String>,
    raw: String,
    received_at: SystemTime,
}

impl Message {
    /// The raw prefix, without the leading `:`. Empty when the line had none.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn nick(&self) -> &str {
        self.source.as_ref().map_or("", |s| s.nick.as_str())
    }

    pub fn user(&self) -> &str {
        self.source.as_ref().map_or("", |s| s.user.as_str())
    }

    pub fn host(&self) -> &str {
        self.source.as_ref().map_or("", |s| s.host.as_str())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Middle parameters only, the trailing argument is never part of them.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn first_parameter(&self) -> Option<&str> {
        self.parameters.first().map(String::as_str)
    }

    /// `Some("")` for a line ending in `" :"`, `None` when there is no trailing argument.
    pub fn trailing(&self) -> Option<&str> {
        self.trailing.as_deref()
    }

    /// The decoded line with its CR+LF and its prefix stripped.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn received_at(&self) -> SystemTime {
        self.received_at
    }

    pub fn is_parsed(&self) -> bool {
        !self.command.is_empty()
    }

    /// Builds a PRIVMSG addressed to the nick this message came from.
    pub fn direct_reply(&self, body: &str) -> String {
        privmsg(self.nick(), body)
    }
}
