//! Plugin – Aktivierung, Hook-Routing und Entladen
//!
//! Fuehrt Konfiguration, Engine, Orchestrator, Abfaenger und
//! Befehlsverteiler zusammen. Die Engine entsteht genau einmal pro
//! Aktivierung ueber eine Fabrik und wird beim Drop heruntergefahren.

use std::sync::Arc;

use fluesterpost_core::{ChannelEngine, EngineResult, Host, Meldung};
use fluesterpost_observability::logging_initialisieren;
use tracing::{debug, error, info};

use crate::commands::{BefehlsStatus, BefehlsVerteiler};
use crate::config::PluginKonfiguration;
use crate::error::{PluginError, Result};
use crate::events::Abfangergebnis;
use crate::interceptor::{AusgangsAbfang, EingangsAbfang};
use crate::orchestrator::SitzungsOrchestrator;

/// Ein aktiviertes Plugin
pub struct Plugin {
    konfiguration: PluginKonfiguration,
    orchestrator: Arc<SitzungsOrchestrator>,
    ausgang: AusgangsAbfang,
    eingang: EingangsAbfang,
    befehle: BefehlsVerteiler,
}

impl Plugin {
    /// Aktiviert das Plugin
    ///
    /// Scheitert die Engine-Fabrik, wird der Fehler im Hauptpuffer angezeigt
    /// und die Aktivierung abgebrochen.
    pub fn aktivieren<E, F>(
        konfiguration: PluginKonfiguration,
        engine_fabrik: F,
        host: Arc<dyn Host>,
    ) -> Result<Self>
    where
        E: ChannelEngine + 'static,
        F: FnOnce() -> EngineResult<E>,
    {
        konfiguration.validieren()?;

        if konfiguration.logging.aktiviert {
            logging_initialisieren(&konfiguration.logging.level, &konfiguration.logging.format);
        }

        let engine = engine_fabrik().map_err(|e| {
            let fehler = PluginError::Initialisierung(e.to_string());
            error!(fehler = %e, "Engine-Initialisierung fehlgeschlagen");
            host.anzeigen(
                None,
                &Meldung::fehler(format!("{}: {}", konfiguration.anzeige.praefix, fehler)),
            );
            fehler
        })?;

        let orchestrator = Arc::new(SitzungsOrchestrator::neu(
            Arc::new(engine),
            host.clone(),
            konfiguration.anzeige.clone(),
        ));

        info!(
            befehl = %konfiguration.plugin.befehl,
            eingang = %konfiguration.hooks.eingang,
            ausgang = %konfiguration.hooks.ausgang,
            "Plugin aktiviert"
        );

        Ok(Self {
            ausgang: AusgangsAbfang::neu(orchestrator.clone(), host.clone()),
            eingang: EingangsAbfang::neu(orchestrator.clone(), host.clone()),
            befehle: BefehlsVerteiler::neu(orchestrator.clone(), host),
            orchestrator,
            konfiguration,
        })
    }

    /// Konfiguration, mit der das Plugin aktiviert wurde
    pub fn konfiguration(&self) -> &PluginKonfiguration {
        &self.konfiguration
    }

    /// Name des Benutzerbefehls
    pub fn befehl(&self) -> &str {
        &self.konfiguration.plugin.befehl
    }

    /// Zugriff auf den Orchestrator (z.B. fuer Sitzungslisten)
    pub fn orchestrator(&self) -> &SitzungsOrchestrator {
        &self.orchestrator
    }

    /// Fuehrt `/<befehl> <argumente>` aus
    pub fn befehl_ausfuehren(&self, argumente: &str) -> BefehlsStatus {
        self.befehle.ausfuehren(argumente)
    }

    /// Leitet einen Modifier-Aufruf an den passenden Abfaenger
    ///
    /// Unbekannte Modifier werden unveraendert durchgereicht.
    pub fn abfangen(&self, modifier: &str, zeile: &str) -> Abfangergebnis {
        if modifier == self.konfiguration.hooks.ausgang {
            self.ausgang.abfangen(zeile)
        } else if modifier == self.konfiguration.hooks.eingang {
            self.eingang.abfangen(zeile)
        } else {
            debug!(modifier, "Unbekannter Modifier, durchgereicht");
            Abfangergebnis::Durchreichen
        }
    }

    /// Wie [`Plugin::abfangen`], aber in der String-Konvention des Hosts
    pub fn modifier_ausfuehren(&self, modifier: &str, zeile: &str) -> String {
        self.abfangen(modifier, zeile).in_modifier(zeile)
    }
}

impl Drop for Plugin {
    fn drop(&mut self) {
        self.orchestrator.herunterfahren();
        info!("Plugin entladen");
    }
}
