//! Fehlertypen fuer die Abfangschicht
//!
//! Jeder Fehler wird an der Komponentengrenze, an der er entsteht, in eine
//! Diagnose fuer den Benutzer umgewandelt. Nichts davon wird weiter nach
//! oben propagiert.

use fluesterpost_core::EngineFehler;
use thiserror::Error;

/// Alle moeglichen Fehler im Plugin
#[derive(Debug, Error)]
pub enum PluginError {
    // --- Lebenszyklus ---
    #[error("Initializing failed, {0}")]
    Initialisierung(String),

    #[error("Konfigurationsfehler: {0}")]
    Konfiguration(String),

    // --- Handshake ---
    #[error("Invalid Offer Message, {0}")]
    Handshake(String),

    #[error("Invalid Close Message, {0}")]
    Teardown(String),

    #[error("Invalid Offer Message, offer to {0} still pending")]
    SitzungBereitsAktiv(String),

    // --- Nachrichten ---
    #[error("Sending error, {0}")]
    Kodierung(String),

    #[error("Receiving error, {0}")]
    Dekodierung(String),

    // --- Benutzereingabe ---
    #[error("Unknown argument.")]
    UnbekannterBefehl(String),

    #[error("Missing arguments.")]
    FehlendesArgument,

    // --- IO ---
    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl PluginError {
    /// Ordnet einen Fehler der Engine beim Sitzungsstart ein
    pub fn handshake(e: EngineFehler) -> Self {
        Self::Handshake(e.to_string())
    }

    /// Ordnet einen Fehler der Engine beim Sitzungsende ein
    pub fn teardown(e: EngineFehler) -> Self {
        Self::Teardown(e.to_string())
    }

    /// Gibt true zurueck, wenn der Fehler durch Benutzereingabe entstand
    pub fn ist_eingabefehler(&self) -> bool {
        matches!(self, Self::UnbekannterBefehl(_) | Self::FehlendesArgument)
    }
}

/// Result-Alias fuer das Plugin
pub type Result<T> = std::result::Result<T, PluginError>;
