use super::*;

#[test]
fn error_from_parse_error_should_work() {
    let err: Error = url::Url::parse("not a url").unwrap_err().into();
    assert!(matches!(err, Error::InvalidEndpoint(_)));
}

#[test]
fn rejected_should_report_status() {
    let err = Error::Rejected(422);
    assert_eq!(
        "form intake rejected the submission with status 422",
        err.to_string()
    );
}
