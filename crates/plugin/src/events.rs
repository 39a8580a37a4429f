//! Abfangergebnisse fuer die Transport-Hooks
//!
//! Beide Hooks liefern dieselbe dreiwertige Antwort an den Host. Dazu
//! kommen die feineren Ausgaenge des Orchestrators, die unterscheiden,
//! *warum* eine Nachricht durchgereicht oder unterdrueckt wurde.

use fluesterpost_core::WireNachricht;
use serde::{Deserialize, Serialize};

/// Was der Transport mit der abgefangenen Nachricht tun soll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Abfangergebnis {
    /// Nachricht unveraendert weitergeben
    Durchreichen,
    /// Nachricht durch eine andere Nutzlast ersetzen
    Ersetzen { nutzlast: String },
    /// Nachricht verwerfen
    Unterdruecken,
}

impl Abfangergebnis {
    /// Gibt true zurueck, wenn die Nachricht verworfen wird
    pub fn ist_unterdrueckt(&self) -> bool {
        matches!(self, Self::Unterdruecken)
    }

    /// Uebersetzt das Ergebnis in die String-Konvention eines Modifier-Hooks
    ///
    /// Der Host verwirft leere Strings. Ein Ersetzen durch einen leeren
    /// String ist damit auf Host-Seite nicht von Unterdruecken zu
    /// unterscheiden, hier aber schon.
    pub fn in_modifier(&self, original: &str) -> String {
        match self {
            Self::Durchreichen => original.to_string(),
            Self::Ersetzen { nutzlast } => nutzlast.clone(),
            Self::Unterdruecken => String::new(),
        }
    }
}

/// Ausgang eines Sende-Aufrufs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sendeausgang {
    /// Die Engine hat verschluesselt, die Wire-Nachricht ist bereits gesendet
    Verschluesselt(WireNachricht),
    /// Keine Sitzung fuer diese Konversation
    KeineSitzung,
    /// Die Engine wurde gefragt und ist gescheitert
    Fehlgeschlagen(String),
}

impl Sendeausgang {
    /// Klartext geht nie ungeschuetzt raus, wenn die Engine gescheitert ist
    pub fn abfangergebnis(&self) -> Abfangergebnis {
        match self {
            Self::Verschluesselt(_) => Abfangergebnis::Unterdruecken,
            Self::KeineSitzung => Abfangergebnis::Durchreichen,
            Self::Fehlgeschlagen(_) => Abfangergebnis::Unterdruecken,
        }
    }
}

/// Ausgang eines Empfangs-Aufrufs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Empfangsausgang {
    /// Handshake-Bestaetigung; die Antwort (falls vorhanden) ist gesendet
    Bestaetigt(Option<WireNachricht>),
    /// Entschluesselter Klartext fuer die Anzeige
    Entschluesselt(String),
    /// Nachricht gehoert zu keiner Sitzung
    NichtZustaendig,
    /// Dekodierung gescheitert, die Rohnachricht bleibt sichtbar
    Fehlgeschlagen(String),
}

impl Empfangsausgang {
    pub fn abfangergebnis(&self) -> Abfangergebnis {
        match self {
            Self::Bestaetigt(_) => Abfangergebnis::Unterdruecken,
            Self::Entschluesselt(text) => Abfangergebnis::Ersetzen {
                nutzlast: text.clone(),
            },
            Self::NichtZustaendig | Self::Fehlgeschlagen(_) => Abfangergebnis::Durchreichen,
        }
    }
}
