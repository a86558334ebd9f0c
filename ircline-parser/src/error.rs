#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("line cannot be parsed; it is not a valid RFC2812 IRC message")]
    MalformedLine,
}
