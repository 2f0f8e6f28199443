use crate::errors::UoRconError;

/// One wire argument. The encoding set is closed: a `Bool` always contributes
/// exactly one byte and can never be widened into the 4-byte `Int` encoding,
/// no matter what arguments surround it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// UTF-8 bytes followed by a NUL terminator.
    Str(String),
    /// A single `0x00`/`0x01` byte.
    Bool(bool),
    /// Four bytes, big-endian.
    Int(i32),
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Int(i)
    }
}

pub const START_BYTES: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
pub const END_BYTE: u8 = b'\n';

/// Command byte of the parameterless challenge request.
const CHALLENGE_REQUEST: u8 = 0x1A;

/// The challenge token sits at a fixed offset in the challenge reply.
const CHALLENGE_OFFSET: usize = 6;
pub const CHALLENGE_SIZE: usize = 8;

fn encode_args(buffer: &mut Vec<u8>, args: &[Arg]) {
    for arg in args {
        match arg {
            Arg::Str(s) => {
                buffer.extend_from_slice(s.as_bytes());
                buffer.push(0);
            }
            Arg::Bool(b) => buffer.push(u8::from(*b)),
            Arg::Int(i) => buffer.extend_from_slice(&i.to_be_bytes()),
        }
    }
}

/// `START | 0x1A | END`, no arguments, no auth block.
pub fn build_challenge_request() -> Vec<u8> {
    build_unauthenticated(CHALLENGE_REQUEST, &[])
}

/// `START | cmd | args | END`.
pub fn build_unauthenticated(cmd: u8, args: &[Arg]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(START_BYTES.len() + 2);
    buffer.extend_from_slice(&START_BYTES);
    buffer.push(cmd);
    encode_args(&mut buffer, args);
    buffer.push(END_BYTE);
    buffer
}

/// `START | cmd | challenge | password | NUL | args | END`.
pub fn build_authenticated(
    cmd: u8,
    challenge: &[u8; CHALLENGE_SIZE],
    password: &str,
    args: &[Arg],
) -> Vec<u8> {
    let mut buffer =
        Vec::with_capacity(START_BYTES.len() + 2 + CHALLENGE_SIZE + password.len() + 1);
    buffer.extend_from_slice(&START_BYTES);
    buffer.push(cmd);
    buffer.extend_from_slice(challenge);
    buffer.extend_from_slice(password.as_bytes());
    buffer.push(0);
    encode_args(&mut buffer, args);
    buffer.push(END_BYTE);
    buffer
}

/// Slices the 8-byte challenge token out of a challenge-request reply.
/// The server puts it at bytes 6..14; anything shorter cannot carry a token.
pub fn extract_challenge(reply: &[u8]) -> Result<[u8; CHALLENGE_SIZE], UoRconError> {
    let end = CHALLENGE_OFFSET + CHALLENGE_SIZE;
    let token = reply.get(CHALLENGE_OFFSET..end).ok_or_else(|| {
        UoRconError::Protocol(format!(
            "challenge reply too short: {} bytes, need at least {}",
            reply.len(),
            end
        ))
    })?;

    let mut challenge = [0u8; CHALLENGE_SIZE];
    challenge.copy_from_slice(token);
    Ok(challenge)
}
