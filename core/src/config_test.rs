use super::*;
use crate::Error;

#[test]
fn new_should_parse_endpoint() {
    let config = SiteConfig::new("https://intake.example.com/f/abc").unwrap();
    assert_eq!(Some("intake.example.com"), config.intake_endpoint.host_str());
    assert!(!config.is_placeholder());
}

#[test]
fn new_should_reject_invalid_endpoint() {
    let err = SiteConfig::new("formspree").unwrap_err();
    assert!(matches!(err, Error::InvalidEndpoint(_)));
}

#[test]
fn placeholder_should_be_detected() {
    let config = SiteConfig::new(DEFAULT_INTAKE_ENDPOINT).unwrap();
    assert!(config.is_placeholder());
}

#[test]
fn from_build_env_should_be_valid() {
    assert!(SiteConfig::from_build_env().is_ok());
}

#[test]
fn deserialize_should_work() {
    let config: SiteConfig =
        serde_json::from_str(r#"{ "intake_endpoint": "https://intake.example.com/f/abc" }"#)
            .unwrap();
    assert_eq!("/f/abc", config.intake_endpoint.path());
}
