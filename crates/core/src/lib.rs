//! fluesterpost-core – Gemeinsame Typen und Schnittstellen
//!
//! Dieses Crate stellt die Bausteine bereit, die zwischen dem Plugin und
//! seinen externen Kollaborateuren (Channel-Engine und Chat-Client) liegen.
//!
//! - [`engine::ChannelEngine`] – opake Secure-Channel-Zustandsmaschine
//! - [`host::Host`] – Transport, Anzeige und Kontext des Chat-Clients
//! - [`types`] – Konversations-IDs und Wire-Nachrichten

pub mod engine;
pub mod error;
pub mod host;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use engine::{ChannelEngine, Empfang};
pub use error::{EngineFehler, EngineResult};
pub use host::{Host, Meldung, MeldungsStufe};
pub use types::{KonversationsId, WireNachricht};
