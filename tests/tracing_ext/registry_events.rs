use error_trail::registry::Registry;
use error_trail::DefaultCoder;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Records the level and `code` field of every event.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(Level, Option<u64>)>>>,
}

struct CodeField(Option<u64>);

impl Visit for CodeField {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "code" {
            self.0 = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl Subscriber for Recorder {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut code = CodeField(None);
        event.record(&mut code);
        self.events.lock().unwrap().push((*event.metadata().level(), code.0));
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

#[test]
fn registry_changes_emit_events_with_code() {
    let recorder = Recorder::default();
    let registry = Registry::new();

    tracing::subscriber::with_default(recorder.clone(), || {
        registry.register(DefaultCoder::new(70, "seventy")).unwrap();
        assert!(registry.register(DefaultCoder::new(70, "again")).is_err());
        assert!(registry.register(DefaultCoder::new(1, "reserved")).is_err());
        assert!(registry.unregister(70).is_some());
        assert!(registry.unregister(70).is_none());
    });

    let events = recorder.events.lock().unwrap().clone();
    assert_eq!(
        events,
        [
            (Level::DEBUG, Some(70)),
            (Level::WARN, Some(70)),
            (Level::WARN, Some(1)),
            (Level::DEBUG, Some(70)),
        ]
    );
}
