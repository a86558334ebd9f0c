mod config;
mod decoder;

pub use config::Config;
pub use decoder::{DecodeError, LineDecoder};
pub use ircline_parser::{
    privmsg, Clock, FixedClock, Message, Parameters, ParseError, Source, SystemClock,
};
