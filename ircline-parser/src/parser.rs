use nom::{
    bytes::complete::{tag, take_till, take_till1, take_until, take_while},
    character::complete::char,
    combinator::{opt, rest},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::{Clock, Message, Parameters, ParseError, Source, SystemClock};

// prefix ::= ':' <origin> SPACE
fn parse_prefix(buf: &str) -> IResult<&str, &str> {
    preceded(char(':'), terminated(take_till(|c: char| c == ' '), char(' ')))(buf)
}

// source ::= <nick> '!' <user> '@' <host>
// The first '!' has to come before the first '@', otherwise there is no source.
fn parse_source(origin: &str) -> IResult<&str, Source> {
    let (buf, (nick, _, user, _, host)) = tuple((
        take_till(|c: char| c == '!' || c == '@'),
        char('!'),
        take_till(|c: char| c == '@'),
        char('@'),
        rest,
    ))(origin)?;
    let source = Source {
        nick: nick.to_string(),
        user: user.to_string(),
        host: host.to_string(),
    };
    Ok((buf, source))
}

// body ::= <command> { <middle> } [ " :" <trailing> ]
fn parse_trailing(buf: &str) -> IResult<&str, Option<&str>> {
    opt(terminated(take_until(" :"), tag(" :")))(buf)
}

fn split_trailing(body: &str) -> (&str, Option<&str>) {
    match parse_trailing(body) {
        Ok((trailing, Some(middle))) => (middle, Some(trailing)),
        _ => (body, None),
    }
}

fn parse_tokens(mut buf: &str) -> IResult<&str, Parameters> {
    let mut tokens = Parameters::new();
    loop {
        let (buf_, _spaces) = take_while(char::is_whitespace)(buf)?;
        buf = buf_;

        if buf.is_empty() {
            break;
        }

        let (buf_, token) = take_till1(char::is_whitespace)(buf)?;
        tokens.push(token.to_string());
        buf = buf_;
    }

    Ok((buf, tokens))
}

/// Decodes one line received from a server.
///
/// The line should already be framed; a trailing CR+LF is tolerated and stripped.
/// `clock` is read once to timestamp the message.
pub fn decode_line<C: Clock + ?Sized>(line: &str, clock: &C) -> Result<Message, ParseError> {
    let line = line.strip_suffix("\r\n").unwrap_or(line);
    let received_at = clock.now();

    let (body, origin) = match line.chars().next() {
        None | Some(' ') => return Err(ParseError::MalformedLine),
        Some(':') => parse_prefix(line).map_err(|_| ParseError::MalformedLine)?,
        Some(_) => (line, ""),
    };
    let source = parse_source(origin).ok().map(|(_, source)| source);

    let (middle, trailing) = split_trailing(body);
    let (_, mut parameters) = parse_tokens(middle).map_err(|_| ParseError::MalformedLine)?;
    if parameters.is_empty() {
        return Err(ParseError::MalformedLine);
    }
    let command = parameters.remove(0);

    Ok(Message {
        origin: origin.to_string(),
        source,
        command,
        parameters,
        trailing: trailing.map(str::to_string),
        raw: body.trim_start_matches(' ').to_string(),
        received_at,
    })
}

/// Same as [`decode_line`], timestamped with the system clock.
pub fn decode_line_now(line: &str) -> Result<Message, ParseError> {
    decode_line(line, &SystemClock)
}
