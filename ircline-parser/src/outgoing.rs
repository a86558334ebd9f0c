/// Formats `PRIVMSG <recipient> :<body>`.
///
/// No CR+LF is appended and neither argument is validated: a body containing
/// a line break will produce more than one line on the wire.
pub fn privmsg(recipient: &str, body: &str) -> String {
    format!("PRIVMSG {recipient} :{body}")
}
