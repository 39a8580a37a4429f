//! fluesterpost-observability – Structured Logging
//!
//! Das Plugin laeuft im Prozess des Chat-Clients. Ein Subscriber wird nur
//! installiert, wenn der Host noch keinen gesetzt hat.

pub mod logging;

pub use logging::{log_level_gueltig, logging_initialisieren, LogFormat};
