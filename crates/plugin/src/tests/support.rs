//! Test-Hilfen: Engine mit festen Antworten und aufzeichnender Host

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fluesterpost_core::{
    ChannelEngine, Empfang, EngineFehler, EngineResult, Host, KonversationsId, Meldung,
    MeldungsStufe, WireNachricht,
};
use parking_lot::Mutex;

use crate::config::AnzeigeEinstellungen;
use crate::orchestrator::SitzungsOrchestrator;

/// Engine, die auf jede Operation mit einer vorher gesetzten Antwort reagiert
pub(crate) struct SkriptEngine {
    pub(crate) start: Mutex<Result<String, String>>,
    pub(crate) stop: Mutex<Result<String, String>>,
    pub(crate) senden: Mutex<Result<Option<String>, String>>,
    pub(crate) empfangen: Mutex<Result<Option<Empfang>, String>>,
    pub(crate) aufrufe: Mutex<Vec<String>>,
    pub(crate) heruntergefahren: AtomicBool,
}

impl SkriptEngine {
    pub(crate) fn neu() -> Arc<Self> {
        Arc::new(Self {
            start: Mutex::new(Ok("PRIVMSG alice :?FP:OFFER".into())),
            stop: Mutex::new(Ok("PRIVMSG alice :?FP:CLOSE".into())),
            senden: Mutex::new(Ok(None)),
            empfangen: Mutex::new(Ok(None)),
            aufrufe: Mutex::new(Vec::new()),
            heruntergefahren: AtomicBool::new(false),
        })
    }

    pub(crate) fn aufrufe(&self) -> Vec<String> {
        self.aufrufe.lock().clone()
    }

    pub(crate) fn ist_heruntergefahren(&self) -> bool {
        self.heruntergefahren.load(Ordering::SeqCst)
    }

    fn protokollieren(&self, eintrag: String) {
        self.aufrufe.lock().push(eintrag);
    }
}

impl ChannelEngine for SkriptEngine {
    fn sitzung_starten(&self, id: &KonversationsId) -> EngineResult<WireNachricht> {
        self.protokollieren(format!("start:{id}"));
        self.start
            .lock()
            .clone()
            .map(WireNachricht)
            .map_err(EngineFehler::SitzungAktiv)
    }

    fn sitzung_beenden(&self, id: &KonversationsId) -> EngineResult<WireNachricht> {
        self.protokollieren(format!("stop:{id}"));
        self.stop
            .lock()
            .clone()
            .map(WireNachricht)
            .map_err(EngineFehler::KeineSitzung)
    }

    fn senden(&self, id: &KonversationsId, klartext: &str) -> EngineResult<Option<WireNachricht>> {
        self.protokollieren(format!("senden:{id}:{klartext}"));
        self.senden
            .lock()
            .clone()
            .map(|w| w.map(WireNachricht))
            .map_err(EngineFehler::Kodierung)
    }

    fn empfangen(&self, id: &KonversationsId, nutzlast: &str) -> EngineResult<Option<Empfang>> {
        self.protokollieren(format!("empfangen:{id}:{nutzlast}"));
        self.empfangen
            .lock()
            .clone()
            .map_err(EngineFehler::Dekodierung)
    }

    fn herunterfahren(&self) {
        self.heruntergefahren.store(true, Ordering::SeqCst);
    }
}

/// Host, der Transport und Anzeige mitschreibt
pub(crate) struct TestHost {
    pub(crate) transport: Mutex<Vec<String>>,
    pub(crate) anzeige: Mutex<Vec<(Option<String>, Meldung)>>,
    pub(crate) aktuell: Mutex<Option<String>>,
}

impl TestHost {
    pub(crate) fn neu(aktuell: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            transport: Mutex::new(Vec::new()),
            anzeige: Mutex::new(Vec::new()),
            aktuell: Mutex::new(aktuell.map(str::to_string)),
        })
    }

    pub(crate) fn gesendet(&self) -> Vec<String> {
        self.transport.lock().clone()
    }

    pub(crate) fn meldungen(&self) -> Vec<Meldung> {
        self.anzeige.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    pub(crate) fn fehler(&self) -> Vec<String> {
        self.meldungen()
            .into_iter()
            .filter(|m| m.stufe == MeldungsStufe::Fehler)
            .map(|m| m.text)
            .collect()
    }

    pub(crate) fn puffer_wechseln(&self, name: Option<&str>) {
        *self.aktuell.lock() = name.map(str::to_string);
    }
}

impl Host for TestHost {
    fn transport_senden(&self, nachricht: &WireNachricht) {
        self.transport.lock().push(nachricht.0.clone());
    }

    fn anzeigen(&self, ziel: Option<&KonversationsId>, meldung: &Meldung) {
        self.anzeige
            .lock()
            .push((ziel.map(|z| z.to_string()), meldung.clone()));
    }

    fn aktuelle_konversation(&self) -> Option<String> {
        self.aktuell.lock().clone()
    }

    fn eigener_nick(&self) -> String {
        "me".into()
    }
}

pub(crate) fn id(name: &str) -> KonversationsId {
    KonversationsId::parsen(name).expect("gueltige Test-ID")
}

pub(crate) fn orchestrator(
    engine: &Arc<SkriptEngine>,
    host: &Arc<TestHost>,
) -> Arc<SitzungsOrchestrator> {
    Arc::new(SitzungsOrchestrator::neu(
        engine.clone(),
        host.clone(),
        AnzeigeEinstellungen::default(),
    ))
}
