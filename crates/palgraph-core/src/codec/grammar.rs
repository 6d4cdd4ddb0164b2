// crates/palgraph-core/src/codec/grammar.rs
//
// h-<pt>(-<pt>)*-s-<pt>(-<pt>)*-l-<pt>(-<pt>)*-p(-<swatch>)*
//
// boundary <pt>: DDDD S DD          (7)
// interior <pt>: DDDDDD S DDDD S DD (14)
// <swatch>:      DD                 (2)

use crate::codec::value::{is_digit, SIGN_NEGATIVE, SIGN_NON_NEGATIVE};
use crate::error::{PalError, Result};
use crate::model::point::Channel;

pub const BOUNDARY_TOKEN_LEN: usize = 7;
pub const INTERIOR_TOKEN_LEN: usize = 14;
pub const SWATCH_TOKEN_LEN: usize = 2;
pub const SWATCH_TAG: &str = "p";

/// Token shapes: `D` = base32 digit, `S` = sign char.
const BOUNDARY_SHAPE: &[u8; BOUNDARY_TOKEN_LEN] = b"DDDDSDD";
const INTERIOR_SHAPE: &[u8; INTERIOR_TOKEN_LEN] = b"DDDDDDSDDDDSDD";
const SWATCH_SHAPE: &[u8; SWATCH_TOKEN_LEN] = b"DD";

/// A validated path split into its four top-level parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// Point tokens per channel, in `Channel::ALL` order.
    pub channels: [Vec<&'a str>; 3],
    pub swatches: Vec<&'a str>,
}

/// Validate the whole string and split it. Nothing is decoded here.
pub fn split_path(path: &str) -> Result<PathParts<'_>> {
    let mut fields = path.split('-').peekable();
    let mut channels: [Vec<&str>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for c in Channel::ALL {
        let tag = c.tag().to_string();
        match fields.next() {
            Some(f) if f == tag => {}
            other => {
                return Err(bad(format!("expected channel tag {tag:?}, found {other:?}")));
            }
        }

        let tokens = &mut channels[c.index()];
        while let Some(&f) = fields.peek() {
            if f.len() != BOUNDARY_TOKEN_LEN && f.len() != INTERIOR_TOKEN_LEN {
                break;
            }
            tokens.push(f);
            fields.next();
        }
        check_channel_tokens(c, tokens)?;
    }

    match fields.next() {
        Some(SWATCH_TAG) => {}
        other => return Err(bad(format!("expected swatch tag \"p\", found {other:?}"))),
    }

    let mut swatches = Vec::new();
    for f in fields {
        if !matches_shape(f, SWATCH_SHAPE) {
            return Err(bad(format!("malformed swatch token {f:?}")));
        }
        swatches.push(f);
    }

    Ok(PathParts { channels, swatches })
}

pub fn is_valid_path(path: &str) -> bool {
    split_path(path).is_ok()
}

fn check_channel_tokens(c: Channel, tokens: &[&str]) -> Result<()> {
    if tokens.len() < 2 {
        return Err(bad(format!("{c} needs at least 2 points, found {}", tokens.len())));
    }
    let last = tokens.len() - 1;
    for (i, t) in tokens.iter().enumerate() {
        let ok = if i == 0 || i == last {
            matches_shape(t, BOUNDARY_SHAPE)
        } else {
            matches_shape(t, INTERIOR_SHAPE)
        };
        if !ok {
            return Err(bad(format!("malformed {c} point token #{i} {t:?}")));
        }
    }
    Ok(())
}

fn matches_shape(token: &str, shape: &[u8]) -> bool {
    token.len() == shape.len()
        && token.bytes().zip(shape).all(|(ch, &kind)| match kind {
            b'D' => is_digit(ch),
            _ => ch == SIGN_NEGATIVE as u8 || ch == SIGN_NON_NEGATIVE as u8,
        })
}

fn bad(msg: String) -> PalError {
    PalError::Format(format!("path: {msg}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_minimal_path() {
        let p = "h-IAAK1GI-IAAU1GI-s-IAAK1GI-IAAU1GI-l-IAAK1GI-IAAU1GI-p-AK";
        let parts = split_path(p).unwrap();
        assert_eq!(parts.channels[0], vec!["IAAK1GI", "IAAU1GI"]);
        assert_eq!(parts.swatches, vec!["AK"]);
    }

    #[test]
    fn swatch_list_may_be_empty() {
        let p = "h-IAAK1GI-IAAU1GI-s-IAAK1GI-IAAU1GI-l-IAAK1GI-IAAU1GI-p";
        assert!(split_path(p).unwrap().swatches.is_empty());
    }

    #[test]
    fn interior_token_in_boundary_slot_is_rejected() {
        let p = "h-QAIAAK1GIAK1GI-IAAU1GI-s-IAAK1GI-IAAU1GI-l-IAAK1GI-IAAU1GI-p";
        assert!(!is_valid_path(p));
    }

    #[test]
    fn trailing_dash_is_rejected() {
        let p = "h-IAAK1GI-IAAU1GI-s-IAAK1GI-IAAU1GI-l-IAAK1GI-IAAU1GI-p-";
        assert!(!is_valid_path(p));
    }
}
