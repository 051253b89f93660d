use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MirageError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        MirageError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        MirageError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MirageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
