use super::*;

#[test]
fn packed_len_multiplies_channels() {
    assert_eq!(packed_len(4, 3, 3).unwrap(), 36);
    assert_eq!(packed_len(4, 3, 4).unwrap(), 48);
    assert_eq!(packed_len(0, 7, 4).unwrap(), 0);
}

#[test]
fn packed_len_reports_overflow() {
    if usize::BITS == 64 {
        assert!(packed_len(u32::MAX, u32::MAX, usize::MAX).is_err());
    } else {
        assert!(packed_len(u32::MAX, u32::MAX, 4).is_err());
    }
}

#[test]
fn round_u8_clamps_and_rounds() {
    assert_eq!(round_u8(-3.0), 0);
    assert_eq!(round_u8(300.0), 255);
    assert_eq!(round_u8(124.39), 124);
    assert_eq!(round_u8(124.5), 125);
    assert_eq!(round_u8(0.49), 0);
}
