//! Schnittstelle zum Chat-Client
//!
//! Der Host liefert den Transport (Befehle an den Server), die Anzeige in
//! einem Konversationspuffer und den aktuell aktiven Kontext. Kommando-
//! Parsing des Clients, Puffer-Lookup und Rendering bleiben beim Host.

use serde::{Deserialize, Serialize};

use crate::types::{KonversationsId, WireNachricht};

/// Art einer Meldung in der Konversationsansicht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldungsStufe {
    /// Lebenszyklus-Ereignis (Angebot gesendet, Bestaetigung, ...)
    Aktion,
    /// Fehlerdiagnose
    Fehler,
    /// Lokales Echo einer eigenen Nachricht (`nick\ttext`)
    Chat,
}

/// Eine fuer den Benutzer sichtbare Zeile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meldung {
    pub stufe: MeldungsStufe,
    pub text: String,
}

impl Meldung {
    pub fn aktion(text: impl Into<String>) -> Self {
        Self {
            stufe: MeldungsStufe::Aktion,
            text: text.into(),
        }
    }

    pub fn fehler(text: impl Into<String>) -> Self {
        Self {
            stufe: MeldungsStufe::Fehler,
            text: text.into(),
        }
    }

    /// Lokales Echo: Nick und Text durch Tab getrennt
    pub fn chat(nick: &str, text: &str) -> Self {
        Self {
            stufe: MeldungsStufe::Chat,
            text: format!("{nick}\t{text}"),
        }
    }
}

/// Trait fuer den Chat-Client
///
/// Alle Methoden sind synchron: der Host liefert Ereignisse seriell und
/// jeder Hook laeuft bis zum Ende, bevor das naechste Ereignis kommt.
pub trait Host: Send + Sync {
    /// Schickt eine Wire-Nachricht auf den Transport
    fn transport_senden(&self, nachricht: &WireNachricht);

    /// Zeigt eine Meldung im Puffer von `ziel` an (`None` = Hauptpuffer)
    fn anzeigen(&self, ziel: Option<&KonversationsId>, meldung: &Meldung);

    /// Kurzname des aktuell aktiven Puffers, falls einer aktiv ist
    fn aktuelle_konversation(&self) -> Option<String>;

    /// Eigener Nick fuer das lokale Echo
    fn eigener_nick(&self) -> String;
}
