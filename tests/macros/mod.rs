use error_trail::{bail, codef, errorf, Error, ErrorKind};

#[test]
fn errorf_formats_a_root() {
    let name = "db";
    let err = errorf!("service {} unavailable after {} retries", name, 3);

    assert_eq!(err.to_string(), "service db unavailable after 3 retries");
    assert_eq!(err.kind(), ErrorKind::Fundamental);
    assert_eq!(err.code(), None);
    assert!(err.stack().is_some());
}

#[test]
fn errorf_supports_inline_arguments() {
    let port = 8080;
    assert_eq!(errorf!("port {port} in use").to_string(), "port 8080 in use");
}

#[test]
fn codef_formats_a_coded_root() {
    let err = codef!(3, "test {}", "codef");

    assert_eq!(err.to_string(), "test codef");
    assert_eq!(err.kind(), ErrorKind::Fundamental);
    assert_eq!(err.code(), Some(3));
    assert!(format!("{:#}", err).starts_with("code: 3, test codef"));
}

#[test]
fn bail_returns_early() {
    fn check(value: i32) -> Result<i32, Error> {
        if value > 10 {
            bail!("value {} exceeds limit", value);
        }
        Ok(value * 2)
    }

    assert_eq!(check(4).unwrap(), 8);
    assert_eq!(check(11).unwrap_err().to_string(), "value 11 exceeds limit");
}

#[test]
fn bail_converts_into_boxed_errors() {
    fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        bail!("stopped");
    }

    assert_eq!(run().unwrap_err().to_string(), "stopped");
}
