//! Befehlsverteiler fuer `/<befehl> start|stop [ziel]`
//!
//! Fehler enden hier: sie werden im Puffer angezeigt und als
//! [`BefehlsStatus::Fehler`] an den Host gemeldet.

use std::sync::Arc;

use fluesterpost_core::{Host, KonversationsId, Meldung};
use tracing::{debug, warn};

use crate::error::{PluginError, Result};
use crate::interceptor::aktuelle_konversation;
use crate::orchestrator::SitzungsOrchestrator;

/// Ein geparster Benutzerbefehl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Befehl {
    /// Handshake-Angebot senden
    Start { ziel: Option<String> },
    /// Sitzung schliessen
    Stop { ziel: Option<String> },
}

impl Befehl {
    /// Explizites Ziel, falls angegeben
    pub fn ziel(&self) -> Option<&str> {
        match self {
            Self::Start { ziel } | Self::Stop { ziel } => ziel.as_deref(),
        }
    }
}

/// Rueckmeldung an den Host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BefehlsStatus {
    Ok,
    Fehler,
}

/// Parst die Argumente nach dem Befehlsnamen
///
/// Format: `start [ziel]` oder `stop [ziel]`. Weitere Tokens werden ignoriert.
pub fn befehl_parsen(argumente: &str) -> Result<Befehl> {
    let mut tokens = argumente.split_whitespace();
    let verb = tokens.next().ok_or(PluginError::FehlendesArgument)?;
    let ziel = tokens.next().map(str::to_string);

    match verb {
        "start" => Ok(Befehl::Start { ziel }),
        "stop" => Ok(Befehl::Stop { ziel }),
        _ => Err(PluginError::UnbekannterBefehl(verb.to_string())),
    }
}

/// Uebersetzt Benutzerbefehle in Lebenszyklus-Aufrufe
pub struct BefehlsVerteiler {
    orchestrator: Arc<SitzungsOrchestrator>,
    host: Arc<dyn Host>,
}

impl BefehlsVerteiler {
    pub fn neu(orchestrator: Arc<SitzungsOrchestrator>, host: Arc<dyn Host>) -> Self {
        Self { orchestrator, host }
    }

    /// Fuehrt einen Befehl aus und meldet Fehler im aktiven Puffer
    pub fn ausfuehren(&self, argumente: &str) -> BefehlsStatus {
        match self.verarbeiten(argumente) {
            Ok(()) => BefehlsStatus::Ok,
            Err(e) => {
                if e.ist_eingabefehler() {
                    debug!(fehler = %e, "Ungueltige Befehlseingabe");
                } else {
                    warn!(fehler = %e, "Befehl fehlgeschlagen");
                }
                let puffer = aktuelle_konversation(self.host.as_ref());
                self.orchestrator
                    .melden(puffer.as_ref(), Meldung::fehler(e.to_string()));
                BefehlsStatus::Fehler
            }
        }
    }

    fn verarbeiten(&self, argumente: &str) -> Result<()> {
        let befehl = befehl_parsen(argumente)?;
        let id = self.ziel_bestimmen(befehl.ziel())?;

        match befehl {
            Befehl::Start { .. } => self.orchestrator.sitzung_starten(&id)?,
            Befehl::Stop { .. } => self.orchestrator.sitzung_beenden(&id)?,
        };
        Ok(())
    }

    /// Explizites Ziel oder Kurzname des aktiven Puffers
    ///
    /// Fehlt beides oder ist der Name unbrauchbar, wird die Engine nicht gefragt.
    fn ziel_bestimmen(&self, explizit: Option<&str>) -> Result<KonversationsId> {
        let name = match explizit {
            Some(ziel) => ziel.to_string(),
            None => self
                .host
                .aktuelle_konversation()
                .ok_or(PluginError::FehlendesArgument)?,
        };
        KonversationsId::parsen(&name).map_err(|_| PluginError::FehlendesArgument)
    }
}
