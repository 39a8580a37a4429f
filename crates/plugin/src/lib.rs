//! fluesterpost-plugin – E2E-Abfangschicht fuer Chat-Clients
//!
//! Dieses Crate haengt sich an die PRIVMSG-Hooks und einen Benutzerbefehl
//! eines Chat-Clients und leitet alles durch eine externe Channel-Engine.
//!
//! # Architektur
//! - [`plugin::Plugin`] – Aktivierung, Hook-Routing, Entladen
//! - [`orchestrator::SitzungsOrchestrator`] – Engine-Aufrufe pro Konversation
//! - [`interceptor`] – Abfaenger fuer aus- und eingehende Nachrichten
//! - [`commands::BefehlsVerteiler`] – `start` / `stop`
//! - [`registry::SitzungsRegistry`] – beobachtete Sitzungsphasen
//! - [`config::PluginKonfiguration`] – TOML-Konfiguration

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod interceptor;
pub mod irc;
pub mod orchestrator;
pub mod plugin;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;

// Bequeme Re-Exporte
pub use commands::{Befehl, BefehlsStatus, BefehlsVerteiler};
pub use config::PluginKonfiguration;
pub use error::{PluginError, Result};
pub use events::{Abfangergebnis, Empfangsausgang, Sendeausgang};
pub use interceptor::{AusgangsAbfang, EingangsAbfang};
pub use orchestrator::SitzungsOrchestrator;
pub use plugin::Plugin;
pub use registry::SitzungsRegistry;
pub use types::{SitzungsInfo, SitzungsPhase};
