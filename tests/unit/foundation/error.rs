use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(ReelError::config("x").to_string().contains("config error:"));
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_and_other_preserve_source() {
    let err = ReelError::from(std::io::Error::other("disk gone"));
    assert!(err.to_string().contains("disk gone"));

    let err = ReelError::Other(anyhow::anyhow!("boom"));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = ReelError::from(json_err);
    assert!(matches!(err, ReelError::Serde(_)));
}
