use error_trail::{Error, ErrorKind, ResultExt};
use std::cell::Cell;
use std::io;

fn io_failure() -> Result<u8, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn ok_values_pass_through_untouched() {
    let ok: Result<u8, io::Error> = Ok(7);

    assert_eq!(ok.wrap("ctx").unwrap(), 7);
    let ok: Result<u8, Error> = Ok(8);
    assert_eq!(ok.with_code(3).unwrap(), 8);
}

#[test]
fn wrap_converts_foreign_errors() {
    let err = io_failure().wrap("opening config").unwrap_err();

    assert_eq!(err.to_string(), "opening config: no such file");
    assert_eq!(err.kind(), ErrorKind::WithStack);
    let io = err.root_cause().downcast_ref::<io::Error>().unwrap();
    assert_eq!(io.kind(), io::ErrorKind::NotFound);
}

#[test]
fn wrap_with_runs_closure_only_on_failure() {
    let calls = Cell::new(0);
    let ok: Result<(), Error> = Ok(());
    ok.wrap_with(|| {
        calls.set(calls.get() + 1);
        "unused"
    })
    .unwrap();
    assert_eq!(calls.get(), 0);

    let err = io_failure()
        .wrap_with(|| {
            calls.set(calls.get() + 1);
            format!("attempt {}", calls.get())
        })
        .unwrap_err();
    assert_eq!(calls.get(), 1);
    assert_eq!(err.to_string(), "attempt 1: no such file");
}

#[test]
fn annotations_compose_in_call_order() {
    let err = io_failure()
        .with_message("reading")
        .with_code(404)
        .with_stack()
        .wrap_code(500)
        .unwrap_err();

    let kinds: Vec<ErrorKind> = err.chain().map(Error::kind).collect();
    assert_eq!(
        kinds,
        [
            ErrorKind::WithStack,
            ErrorKind::WithCode,
            ErrorKind::WithStack,
            ErrorKind::WithCode,
            ErrorKind::WithMessage,
            ErrorKind::External,
        ]
    );
    assert_eq!(err.to_string(), "code: 500, code: 404, reading: no such file");
    assert_eq!(err.first_code(), Some(500));
    assert!(err.is_code(404));
}

#[test]
fn question_mark_converts_foreign_errors() {
    fn parse(input: &str) -> Result<i32, Error> {
        let value: i32 = input.parse()?;
        Ok(value)
    }

    assert_eq!(parse("12").unwrap(), 12);
    let err = parse("x").unwrap_err();
    assert!(err.is::<std::num::ParseIntError>());
}
