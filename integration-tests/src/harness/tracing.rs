use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, registry};

#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: String,
    pub target: String,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Shared sink of every event the engine emits during the test run.
///
/// The first caller installs the capturing subscriber as the global default;
/// tests share the sink, so assertions must search it rather than expect
/// exclusive contents.
pub fn captured_events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    static SINK: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

    SINK.get_or_init(|| {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = registry().with(CaptureLayer {
            events: events.clone(),
        });

        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to install capturing subscriber");

        events
    })
    .clone()
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Vec::new();
        event.record(&mut FieldVisitor {
            fields: &mut fields,
        });

        let meta = event.metadata();
        self.events
            .lock()
            .expect("event sink poisoned")
            .push(CapturedEvent {
                level: meta.level().to_string(),
                target: meta.target().to_string(),
                fields,
            });
    }
}

struct FieldVisitor<'a> {
    fields: &'a mut Vec<(String, String)>,
}

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{value:?}")));
    }
}
