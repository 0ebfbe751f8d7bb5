use std::io;
use crate::Error;

#[test]
fn test_conversions() {
    let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk"));
    assert!(matches!(err, Error::Io(_)));

    let err = Error::from(url::Url::parse("::").unwrap_err());
    assert!(matches!(err, Error::Argument(_)));

    let err = Error::from(serde_json::from_str::<u32>("x").unwrap_err());
    assert!(matches!(err, Error::Protocol(_)));
    assert!(!err.is_not_found());

    let err = Error::NotFound("gone".into());
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "gone");
}
