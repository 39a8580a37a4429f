//! SitzungsOrchestrator – vermittelt zwischen Hooks, Befehlen und Engine
//!
//! Der Orchestrator haelt keinen kryptografischen Zustand. Er ruft die
//! Engine pro Konversation in fester Reihenfolge auf, deutet die
//! Rueckgabeform und erzeugt daraus Transport-Nachrichten, Diagnosen und
//! Abfangergebnisse.
//!
//! Aufrufe fuer dieselbe Konversation werden ueber eine Sperre pro
//! [`KonversationsId`] serialisiert. Verschiedene Konversationen blockieren
//! sich nicht gegenseitig.

use std::sync::Arc;

use dashmap::DashMap;
use fluesterpost_core::{
    ChannelEngine, Empfang, EngineFehler, Host, KonversationsId, Meldung, WireNachricht,
};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::AnzeigeEinstellungen;
use crate::error::{PluginError, Result};
use crate::events::{Empfangsausgang, Sendeausgang};
use crate::registry::SitzungsRegistry;
use crate::types::{SitzungsInfo, SitzungsPhase};

/// SitzungsOrchestrator – sequenziert alle Engine-Aufrufe
pub struct SitzungsOrchestrator {
    engine: Arc<dyn ChannelEngine>,
    host: Arc<dyn Host>,
    registry: SitzungsRegistry,
    sperren: DashMap<KonversationsId, Arc<Mutex<()>>>,
    anzeige: AnzeigeEinstellungen,
}

impl SitzungsOrchestrator {
    /// Erstellt einen neuen Orchestrator ueber einer bereits initialisierten Engine
    pub fn neu(
        engine: Arc<dyn ChannelEngine>,
        host: Arc<dyn Host>,
        anzeige: AnzeigeEinstellungen,
    ) -> Self {
        Self {
            engine,
            host,
            registry: SitzungsRegistry::neu(),
            sperren: DashMap::new(),
            anzeige,
        }
    }

    /// Fuehrt `f` unter der Sperre fuer `id` aus
    ///
    /// Host-Aufrufe gehoeren nicht in `f`: der Transport kann synchron in
    /// die Hooks zurueckkehren. Eine Sperre bleibt nur so lange in der
    /// Tabelle, wie jemand sie haelt oder auf sie wartet.
    fn gesperrt<T>(&self, id: &KonversationsId, f: impl FnOnce() -> T) -> T {
        let sperre = self.sperren.entry(id.clone()).or_default().clone();
        let ergebnis = {
            let _guard = sperre.lock();
            f()
        };
        drop(sperre);
        self.sperren.remove_if(id, |_, s| Arc::strong_count(s) == 1);
        ergebnis
    }

    /// Zeigt eine Diagnose mit dem konfigurierten Praefix an
    pub(crate) fn melden(&self, ziel: Option<&KonversationsId>, meldung: Meldung) {
        let meldung = Meldung {
            text: format!("{}: {}", self.anzeige.praefix, meldung.text),
            ..meldung
        };
        self.host.anzeigen(ziel, &meldung);
    }

    /// Fordert ein Handshake-Angebot an und sendet es
    ///
    /// Solange ein eigenes Angebot offen ist, wird ein weiterer Start
    /// abgelehnt, ohne die Engine zu fragen. Ueber eine aufgebaute Sitzung
    /// entscheidet die Engine.
    pub fn sitzung_starten(&self, id: &KonversationsId) -> Result<WireNachricht> {
        let angebot = self.gesperrt(id, || -> Result<WireNachricht> {
            if self.registry.phase(id) == Some(SitzungsPhase::Angeboten) {
                warn!(konversation = %id, "Start bei offenem Angebot abgelehnt");
                return Err(PluginError::SitzungBereitsAktiv(id.to_string()));
            }
            let angebot = self
                .engine
                .sitzung_starten(id)
                .map_err(PluginError::handshake)?;
            self.registry.phase_setzen(id, SitzungsPhase::Angeboten);
            Ok(angebot)
        })?;

        self.host.transport_senden(&angebot);
        self.melden(Some(id), Meldung::aktion("Sending Offer"));
        info!(konversation = %id, "Handshake-Angebot gesendet");
        Ok(angebot)
    }

    /// Fordert eine Abschlussnachricht an und sendet sie
    ///
    /// Kennt die Engine keine Sitzung, gilt auch der beobachtete Eintrag
    /// als geschlossen.
    pub fn sitzung_beenden(&self, id: &KonversationsId) -> Result<WireNachricht> {
        let abschluss = self.gesperrt(id, || match self.engine.sitzung_beenden(id) {
            Ok(abschluss) => {
                self.registry.phase_setzen(id, SitzungsPhase::Geschlossen);
                Ok(abschluss)
            }
            Err(e) => {
                if let (EngineFehler::KeineSitzung(_), Some(alt)) = (&e, self.registry.phase(id)) {
                    debug!(konversation = %id, phase = %alt, "Engine kennt die Sitzung nicht mehr");
                    self.registry.phase_setzen(id, SitzungsPhase::Geschlossen);
                }
                Err(PluginError::teardown(e))
            }
        })?;

        self.host.transport_senden(&abschluss);
        self.melden(Some(id), Meldung::aktion("Sending Close"));
        info!(konversation = %id, "Sitzung geschlossen");
        Ok(abschluss)
    }

    /// Laesst Klartext von der Engine kodieren
    ///
    /// Bei Erfolg ist die Wire-Nachricht bereits auf dem Transport, bevor
    /// diese Methode zurueckkehrt; das lokale Echo folgt danach.
    pub fn senden(&self, id: &KonversationsId, klartext: &str) -> Sendeausgang {
        let ausgang = self.gesperrt(id, || match self.engine.senden(id, klartext) {
            Err(e) => Sendeausgang::Fehlgeschlagen(e.to_string()),
            Ok(Some(chiffrat)) => {
                self.registry.phase_setzen(id, SitzungsPhase::Aufgebaut);
                Sendeausgang::Verschluesselt(chiffrat)
            }
            Ok(None) => {
                // Gegenseite oder Engine hat die Sitzung beendet; ein offenes Angebot bleibt
                if self.registry.phase(id) == Some(SitzungsPhase::Aufgebaut) {
                    self.registry.phase_setzen(id, SitzungsPhase::Geschlossen);
                }
                Sendeausgang::KeineSitzung
            }
        });

        match &ausgang {
            Sendeausgang::Fehlgeschlagen(grund) => {
                warn!(konversation = %id, fehler = %grund, "Kodierung fehlgeschlagen, Nachricht verworfen");
                let fehler = PluginError::Kodierung(grund.clone());
                self.melden(Some(id), Meldung::fehler(fehler.to_string()));
            }
            Sendeausgang::Verschluesselt(chiffrat) => {
                self.host.transport_senden(chiffrat);
                if self.anzeige.lokales_echo {
                    let nick = self.host.eigener_nick();
                    self.host.anzeigen(Some(id), &Meldung::chat(&nick, klartext));
                }
                debug!(konversation = %id, "Nachricht verschluesselt gesendet");
            }
            Sendeausgang::KeineSitzung => {
                debug!(konversation = %id, "Keine Sitzung, Nachricht unveraendert");
            }
        }
        ausgang
    }

    /// Laesst eine eingehende Nutzlast von der Engine dekodieren
    ///
    /// Eine Bestaetigung hat Vorrang: ihre Nutzlast ist eine Antwort fuer
    /// den Transport und wird nie angezeigt.
    pub fn empfangen(&self, id: &KonversationsId, nutzlast: &str) -> Empfangsausgang {
        let ausgang = self.gesperrt(id, || match self.engine.empfangen(id, nutzlast) {
            Err(e) => Empfangsausgang::Fehlgeschlagen(e.to_string()),
            Ok(Some(Empfang {
                bestaetigung: true,
                nutzlast: antwort,
            })) => {
                self.registry.phase_setzen(id, SitzungsPhase::Aufgebaut);
                Empfangsausgang::Bestaetigt(antwort.map(WireNachricht))
            }
            Ok(Some(Empfang {
                bestaetigung: false,
                nutzlast: Some(klartext),
            })) => Empfangsausgang::Entschluesselt(klartext),
            Ok(_) => Empfangsausgang::NichtZustaendig,
        });

        match &ausgang {
            Empfangsausgang::Fehlgeschlagen(grund) => {
                warn!(konversation = %id, fehler = %grund, "Dekodierung fehlgeschlagen, Rohnachricht bleibt sichtbar");
                let fehler = PluginError::Dekodierung(grund.clone());
                self.melden(Some(id), Meldung::fehler(fehler.to_string()));
            }
            Empfangsausgang::Bestaetigt(antwort) => {
                match antwort {
                    Some(a) => self.host.transport_senden(a),
                    None => debug!(konversation = %id, "Bestaetigung ohne Antwortnachricht"),
                }
                self.melden(Some(id), Meldung::aktion("Acknowledge conversation"));
                info!(konversation = %id, "Handshake bestaetigt");
            }
            Empfangsausgang::Entschluesselt(_) => {
                debug!(konversation = %id, "Nachricht entschluesselt");
            }
            Empfangsausgang::NichtZustaendig => {
                debug!(konversation = %id, "Nachricht gehoert zu keiner Sitzung");
            }
        }
        ausgang
    }

    /// Beobachtete Phase einer Konversation
    pub fn phase(&self, id: &KonversationsId) -> Option<SitzungsPhase> {
        self.registry.phase(id)
    }

    /// Alle beobachteten Sitzungen, sortiert nach Konversation
    pub fn sitzungen_auflisten(&self) -> Vec<SitzungsInfo> {
        self.registry.alle()
    }

    /// Anzahl der Sperren, die gerade gehalten oder erwartet werden
    #[cfg(test)]
    pub(crate) fn offene_sperren(&self) -> usize {
        self.sperren.len()
    }

    /// Gibt die Engine beim Entladen frei
    pub(crate) fn herunterfahren(&self) {
        self.engine.herunterfahren();
    }
}
