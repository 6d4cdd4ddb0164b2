// crates/palgraph-core/src/codec/value.rs
//
// RFC 4648 base32 digits (A-Z, 2-7) for single integers, plus the one-char
// sign token. No 0/1 in the digit alphabet, so sign chars never collide.

use crate::error::{PalError, Result};

pub const BASE32: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub const SIGN_NON_NEGATIVE: char = '1';
pub const SIGN_NEGATIVE: char = '0';

/// Minimum token width; shorter encodings are left-padded with `A`.
pub const MIN_WIDTH: usize = 2;

pub fn encode_value(n: i32) -> Result<String> {
    if n < 0 {
        return Err(PalError::Range(format!("cannot encode negative value {n}")));
    }

    let mut digits: Vec<u8> = Vec::with_capacity(4);
    let mut v = n as u32;
    while v > 0 {
        digits.push(BASE32[(v % 32) as usize]);
        v /= 32;
    }
    while digits.len() < MIN_WIDTH {
        digits.push(BASE32[0]);
    }
    digits.reverse();

    Ok(digits.into_iter().map(char::from).collect())
}

/// Encode into exactly `width` characters; values that need more are a range error.
pub fn encode_fixed(n: i32, width: usize) -> Result<String> {
    let s = encode_value(n)?;
    if s.len() > width {
        return Err(PalError::Range(format!(
            "value {n} does not fit a {width}-char token (max {})",
            max_fixed(width)
        )));
    }
    Ok(format!("{}{}", "A".repeat(width - s.len()), s))
}

/// Largest value a `width`-char token can hold.
pub fn max_fixed(width: usize) -> i32 {
    32i32.saturating_pow(width as u32).saturating_sub(1)
}

pub fn decode_value(token: &str) -> Result<i32> {
    if token.is_empty() {
        return Err(PalError::Format("empty base32 token".into()));
    }

    let mut acc: i32 = 0;
    for ch in token.bytes() {
        let v = digit_val(ch)
            .ok_or_else(|| PalError::Format(format!("invalid base32 char {:?} in {token:?}", ch as char)))?;
        acc = acc
            .checked_mul(32)
            .and_then(|a| a.checked_add(v as i32))
            .ok_or_else(|| PalError::Format(format!("base32 token {token:?} overflows")))?;
    }
    Ok(acc)
}

pub fn encode_sign(delta: i32) -> char {
    if delta < 0 {
        SIGN_NEGATIVE
    } else {
        SIGN_NON_NEGATIVE
    }
}

pub fn decode_sign(ch: char) -> Result<i32> {
    match ch {
        SIGN_NON_NEGATIVE => Ok(1),
        SIGN_NEGATIVE => Ok(-1),
        _ => Err(PalError::Format(format!("invalid sign char {ch:?}"))),
    }
}

pub fn is_digit(ch: u8) -> bool {
    digit_val(ch).is_some()
}

fn digit_val(ch: u8) -> Option<u8> {
    match ch {
        b'A'..=b'Z' => Some(ch - b'A'),
        b'2'..=b'7' => Some(ch - b'2' + 26),
        _ => None,
    }
}
