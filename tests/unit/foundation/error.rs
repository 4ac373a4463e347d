use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LogoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LogoError::generation("x")
            .to_string()
            .contains("generation error:")
    );
    assert!(
        LogoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LogoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: LogoError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LogoError::Serde(_)));
}
