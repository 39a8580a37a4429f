//! Transport-Hooks fuer aus- und eingehende Nachrichten
//!
//! Beide Abfaenger werden fuer jede Nachricht aufgerufen, unabhaengig davon
//! ob fuer die Konversation eine Sitzung besteht. Die Entscheidung trifft
//! allein der [`SitzungsOrchestrator`].

use std::sync::Arc;

use fluesterpost_core::{Host, KonversationsId};
use tracing::debug;

use crate::events::Abfangergebnis;
use crate::irc;
use crate::orchestrator::SitzungsOrchestrator;

/// Konversation des aktiven Puffers zum Zeitpunkt des Aufrufs
pub(crate) fn aktuelle_konversation(host: &dyn Host) -> Option<KonversationsId> {
    host.aktuelle_konversation()
        .and_then(|name| KonversationsId::parsen(&name).ok())
}

/// Abfaenger fuer ausgehende PRIVMSG-Zeilen
pub struct AusgangsAbfang {
    orchestrator: Arc<SitzungsOrchestrator>,
    host: Arc<dyn Host>,
}

impl AusgangsAbfang {
    pub fn neu(orchestrator: Arc<SitzungsOrchestrator>, host: Arc<dyn Host>) -> Self {
        Self { orchestrator, host }
    }

    /// Leitet eine ausgehende Zeile durch den Orchestrator
    ///
    /// Nur der Nachrichtentext geht an die Engine. Eine erzeugte
    /// Wire-Nachricht liegt bereits auf dem Transport, wenn hier
    /// `Unterdruecken` zurueckkommt.
    pub fn abfangen(&self, zeile: &str) -> Abfangergebnis {
        let Some(id) = aktuelle_konversation(self.host.as_ref()) else {
            debug!("Kein aktiver Puffer, ausgehende Nachricht unveraendert");
            return Abfangergebnis::Durchreichen;
        };
        let text = irc::nachrichtentext(zeile);
        self.orchestrator.senden(&id, text).abfangergebnis()
    }
}

/// Abfaenger fuer eingehende PRIVMSG-Zeilen
pub struct EingangsAbfang {
    orchestrator: Arc<SitzungsOrchestrator>,
    host: Arc<dyn Host>,
}

impl EingangsAbfang {
    pub fn neu(orchestrator: Arc<SitzungsOrchestrator>, host: Arc<dyn Host>) -> Self {
        Self { orchestrator, host }
    }

    /// Leitet eine eingehende Rohzeile durch den Orchestrator
    ///
    /// Die Konversation kommt aus dem aktiven Puffer, nicht aus der Zeile.
    pub fn abfangen(&self, zeile: &str) -> Abfangergebnis {
        let Some(id) = aktuelle_konversation(self.host.as_ref()) else {
            debug!("Kein aktiver Puffer, eingehende Nachricht unveraendert");
            return Abfangergebnis::Durchreichen;
        };
        self.orchestrator.empfangen(&id, zeile).abfangergebnis()
    }
}
