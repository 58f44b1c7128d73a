//! Observability for the SurfsUp service
//!
//! Structured JSON logging of lifecycle events and completed requests.
//!
//! ```ignore
//! use surfsup::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ServerListening, &[("addr", "127.0.0.1:5000")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}
