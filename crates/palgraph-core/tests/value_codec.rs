use palgraph_core::codec::value::{decode_sign, decode_value, encode_fixed, encode_sign, encode_value, max_fixed};
use palgraph_core::PalError;

#[test]
fn value_roundtrip_at_edges() {
    for n in [0, 1, 31, 32, 1023, 1024] {
        let s = encode_value(n).expect("encode ok");
        assert_eq!(decode_value(&s).unwrap(), n, "n={n} token={s}");
    }
}

#[test]
fn value_tokens_are_minimal_and_padded() {
    assert_eq!(encode_value(0).unwrap(), "AA");
    assert_eq!(encode_value(1).unwrap(), "AB");
    assert_eq!(encode_value(31).unwrap(), "A7");
    assert_eq!(encode_value(32).unwrap(), "BA");
    assert_eq!(encode_value(1023).unwrap(), "77");
    assert_eq!(encode_value(1024).unwrap(), "BAA");
}

#[test]
fn negative_value_is_range_error() {
    assert!(matches!(encode_value(-1), Err(PalError::Range(_))));
}

#[test]
fn fixed_width_rejects_overflow() {
    assert_eq!(max_fixed(2), 1023);
    assert_eq!(encode_fixed(1023, 2).unwrap(), "77");
    assert_eq!(encode_fixed(5, 3).unwrap(), "AAF");
    assert!(matches!(encode_fixed(1024, 2), Err(PalError::Range(_))));
}

#[test]
fn decode_rejects_foreign_chars() {
    for bad in ["", "A1", "a", "A-", "A8", "Z0"] {
        assert!(matches!(decode_value(bad), Err(PalError::Format(_))), "accepted {bad:?}");
    }
}

#[test]
fn sign_roundtrip() {
    assert_eq!(decode_sign(encode_sign(-5)).unwrap(), -1);
    assert_eq!(decode_sign(encode_sign(0)).unwrap(), 1);
    assert_eq!(decode_sign(encode_sign(5)).unwrap(), 1);
}

#[test]
fn sign_rejects_other_chars() {
    for ch in ['2', 'A', '-', '+'] {
        assert!(decode_sign(ch).is_err(), "accepted {ch:?}");
    }
}
