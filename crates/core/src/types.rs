//! Gemeinsame Identifikationstypen fuer Fluesterpost
//!
//! Newtypes verhindern, dass Konversations-IDs, Wire-Nachrichten und
//! Klartext zur Compilezeit verwechselt werden.

use serde::{Deserialize, Serialize};

use crate::error::{EngineFehler, EngineResult};

/// Name eines Chat-Kontexts (Nick des Gegenuebers oder Kurzname des Puffers)
///
/// Einziger Schluessel in den Sitzungsspeicher der Engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KonversationsId(String);

impl KonversationsId {
    /// Prueft einen Namen und erstellt daraus eine KonversationsId
    ///
    /// Leere Namen, Whitespace und Steuerzeichen werden abgelehnt.
    pub fn parsen(name: &str) -> EngineResult<Self> {
        if name.is_empty() {
            return Err(EngineFehler::UngueltigeId("empty name".into()));
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(EngineFehler::UngueltigeId(format!(
                "illegal characters in '{}'",
                name.escape_debug()
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Gibt den Namen als &str zurueck
    pub fn als_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for KonversationsId {
    type Error = EngineFehler;

    fn try_from(name: String) -> EngineResult<Self> {
        Self::parsen(&name)
    }
}

impl From<KonversationsId> for String {
    fn from(id: KonversationsId) -> Self {
        id.0
    }
}

impl std::fmt::Display for KonversationsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opake Nachricht der Engine, die unveraendert auf den Transport geht
///
/// Handshake-Angebot, Handshake-Abschluss, Bestaetigung oder Chiffretext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNachricht(pub String);

impl WireNachricht {
    pub fn new(inhalt: impl Into<String>) -> Self {
        Self(inhalt.into())
    }

    /// Gibt den Inhalt als &str zurueck
    pub fn als_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WireNachricht {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
