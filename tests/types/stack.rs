use error_trail::{Error, ResultExt};

fn failing_operation() -> Result<(), Error> {
    Err(Error::new("failed"))
}

#[test]
fn stack_starts_at_the_constructing_function() {
    let err = Error::new("here");
    let frames = err.stack().unwrap().frames();

    assert!(!frames.is_empty());
    assert!(!frames[0].function().starts_with("error_trail::"), "got: {:?}", frames[0]);
    assert!(frames.iter().any(|f| f.function().contains("stack_starts_at_the_constructing_function")));
}

#[test]
fn wrap_records_the_wrapping_site() {
    let err = failing_operation().wrap("outer").unwrap_err();
    let frames = err.stack().unwrap().frames();

    assert!(frames[0].function().contains("wrap_records_the_wrapping_site"), "got: {:?}", frames[0]);
}

#[test]
fn frames_carry_source_locations() {
    let err = Error::new("located");
    let frames = err.stack().unwrap().frames();

    let own = frames
        .iter()
        .find(|f| f.function().contains("frames_carry_source_locations"))
        .unwrap();
    assert!(own.file().is_some_and(|file| file.ends_with(".rs")));
    assert!(own.line().is_some());
}

#[test]
fn render_is_empty_unless_extended() {
    let err = Error::new("x");
    let stack = err.stack().unwrap();

    assert_eq!(stack.render(false), "");
    let extended = stack.render(true);
    assert_eq!(extended.lines().filter(|l| l.starts_with("    at ")).count(), stack.frames().len());
}
