use std::sync::{Arc, Mutex};

use deckhand_engine::deck::Deck;
use deckhand_engine::store::MemoryStore;
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    entries: Arc<Mutex<Vec<Captured>>>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{:?}", value);
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn capture(f: impl FnOnce()) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let entries = Arc::clone(&layer.entries);
    let registry = Registry::default().with(layer);
    tracing::subscriber::with_default(registry, f);
    let captured = entries.lock().unwrap().clone();
    captured
}

#[test]
fn draws_are_logged_at_debug_with_counts() {
    let entries = capture(|| {
        let mut deck = Deck::new(1, false).unwrap();
        deck.draw(3).unwrap();
    });
    let draw = entries
        .iter()
        .find(|e| e.message.contains("drew cards"))
        .expect("draw event");
    assert_eq!(draw.level, Level::DEBUG);
    assert!(draw.fields.iter().any(|(k, v)| k == "drawn" && v == "3"));
    assert!(draw.fields.iter().any(|(k, v)| k == "remaining" && v == "49"));
}

#[test]
fn store_lifecycle_is_logged_at_info() {
    let entries = capture(|| {
        let mut store = MemoryStore::new();
        let mut deck = Deck::create_in(&mut store, 1, true).unwrap();
        deck.delete(&mut store).unwrap();
    });
    let info: Vec<&str> = entries
        .iter()
        .filter(|e| e.level == Level::INFO)
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(info, ["created deck", "deleted deck"]);
    assert!(entries
        .iter()
        .filter(|e| e.level == Level::INFO)
        .all(|e| e.fields.iter().any(|(k, _)| k == "deck_id")));
}
