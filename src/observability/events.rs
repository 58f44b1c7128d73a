//! Lifecycle and request events emitted by the service

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot
    /// Boot sequence begins
    BootStart,
    /// Configuration file parsed and validated
    ConfigLoaded,
    /// Dataset opened and its schema verified
    SchemaVerified,
    /// Dataset could not be opened at boot
    BootFailed,

    // Server
    /// Listener bound, accepting requests
    ServerListening,
    /// Server loop exited
    ServerStopped,

    // Requests
    /// A request finished, any status
    RequestComplete,
    /// A dataset query failed while serving a request
    QueryFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SURFSUP_BOOT_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaVerified => "SCHEMA_VERIFIED",
            Event::BootFailed => "SURFSUP_BOOT_FAILED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::QueryFailed => "QUERY_FAILED",
        }
    }

    /// Events after which the process exits
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
