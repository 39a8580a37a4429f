//! Schnittstelle zur Channel-Engine
//!
//! Die Engine haelt den gesamten kryptografischen Zustand und einen
//! Sitzungsspeicher, der ausschliesslich ueber die [`KonversationsId`]
//! adressiert wird. Das Plugin sieht den Sitzungszustand nur indirekt ueber
//! die Rueckgabeformen der Aufrufe.
//!
//! Implementierungen muessen innere Veraenderbarkeit selbst regeln; das
//! Plugin serialisiert Aufrufe pro Konversation, nicht global.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::types::{KonversationsId, WireNachricht};

/// Rohergebnis eines Empfangs-Aufrufs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empfang {
    /// Eine Handshake-Bestaetigung wurde empfangen
    pub bestaetigung: bool,
    /// Bei Bestaetigung: Antwort fuer den Transport, sonst entschluesselter Klartext
    pub nutzlast: Option<String>,
}

impl Empfang {
    /// Handshake-Bestaetigung mit Antwortnachricht
    pub fn bestaetigung(antwort: impl Into<String>) -> Self {
        Self {
            bestaetigung: true,
            nutzlast: Some(antwort.into()),
        }
    }

    /// Entschluesselter Klartext
    pub fn klartext(text: impl Into<String>) -> Self {
        Self {
            bestaetigung: false,
            nutzlast: Some(text.into()),
        }
    }
}

/// Opake Secure-Channel-Zustandsmaschine pro Konversation
///
/// Die Engine wird pro Plugin-Aktivierung genau einmal ueber eine Fabrik
/// erzeugt und beim Entladen ueber [`ChannelEngine::herunterfahren`] beendet.
pub trait ChannelEngine: Send + Sync {
    /// Erzeugt ein Handshake-Angebot fuer `id`
    fn sitzung_starten(&self, id: &KonversationsId) -> EngineResult<WireNachricht>;

    /// Erzeugt eine Abschlussnachricht fuer die Sitzung von `id`
    fn sitzung_beenden(&self, id: &KonversationsId) -> EngineResult<WireNachricht>;

    /// Kodiert Klartext fuer die aktuelle Sitzung von `id`
    ///
    /// `Ok(None)` bedeutet: keine Sitzung, der Klartext darf unveraendert raus.
    fn senden(&self, id: &KonversationsId, klartext: &str) -> EngineResult<Option<WireNachricht>>;

    /// Dekodiert eine eingehende Rohzeile des Transports
    ///
    /// `Ok(None)` bedeutet: die Nachricht gehoert zu keiner Sitzung.
    fn empfangen(&self, id: &KonversationsId, nutzlast: &str) -> EngineResult<Option<Empfang>>;

    /// Gibt Ressourcen frei, wenn der Host das Plugin entlaedt
    fn herunterfahren(&self) {}
}

/// Eine geteilte Engine ist selbst eine Engine
impl<E: ChannelEngine + ?Sized> ChannelEngine for std::sync::Arc<E> {
    fn sitzung_starten(&self, id: &KonversationsId) -> EngineResult<WireNachricht> {
        (**self).sitzung_starten(id)
    }

    fn sitzung_beenden(&self, id: &KonversationsId) -> EngineResult<WireNachricht> {
        (**self).sitzung_beenden(id)
    }

    fn senden(&self, id: &KonversationsId, klartext: &str) -> EngineResult<Option<WireNachricht>> {
        (**self).senden(id, klartext)
    }

    fn empfangen(&self, id: &KonversationsId, nutzlast: &str) -> EngineResult<Option<Empfang>> {
        (**self).empfangen(id, nutzlast)
    }

    fn herunterfahren(&self) {
        (**self).herunterfahren()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empfang_konstruktoren() {
        let b = Empfang::bestaetigung("ACK:1");
        assert!(b.bestaetigung);
        assert_eq!(b.nutzlast.as_deref(), Some("ACK:1"));

        let k = Empfang::klartext("hi there");
        assert!(!k.bestaetigung);
        assert_eq!(k.nutzlast.as_deref(), Some("hi there"));
    }

    #[test]
    fn empfang_serde() {
        let e = Empfang::klartext("hallo");
        let json = serde_json::to_string(&e).unwrap();
        let e2: Empfang = serde_json::from_str(&json).unwrap();
        assert_eq!(e, e2);
    }
}
