//! Sitzungs-Registry – beobachtete Phase pro Konversation
//!
//! Spiegelt, was sich aus den Engine-Antworten ueber eine Sitzung ableiten
//! laesst. Haelt keinen kryptografischen Zustand.

use chrono::Utc;
use dashmap::DashMap;
use fluesterpost_core::KonversationsId;

use crate::types::{SitzungsInfo, SitzungsPhase};

/// Sitzungs-Registry – thread-sicher via DashMap
pub struct SitzungsRegistry {
    eintraege: DashMap<KonversationsId, SitzungsInfo>,
}

impl SitzungsRegistry {
    /// Erstellt eine neue leere Registry
    pub fn neu() -> Self {
        Self {
            eintraege: DashMap::new(),
        }
    }

    /// Setzt die Phase einer Sitzung
    ///
    /// `seit` wird nur beim Uebergang in eine neue Sitzung zurueckgesetzt,
    /// also beim ersten Eintrag oder beim Neustart nach `Geschlossen`.
    pub fn phase_setzen(&self, id: &KonversationsId, phase: SitzungsPhase) {
        let jetzt = Utc::now();
        self.eintraege
            .entry(id.clone())
            .and_modify(|e| {
                if e.phase == SitzungsPhase::Geschlossen && phase != SitzungsPhase::Geschlossen {
                    e.seit = jetzt;
                }
                e.phase = phase;
                e.geaendert_am = jetzt;
            })
            .or_insert_with(|| SitzungsInfo {
                id: id.clone(),
                phase,
                seit: jetzt,
                geaendert_am: jetzt,
            });
    }

    /// Gibt die beobachtete Phase zurueck, `None` = keine Sitzung bekannt
    pub fn phase(&self, id: &KonversationsId) -> Option<SitzungsPhase> {
        self.eintraege.get(id).map(|e| e.phase)
    }

    /// Gibt alle Eintraege als Liste zurueck, sortiert nach Konversation
    pub fn alle(&self) -> Vec<SitzungsInfo> {
        let mut alle: Vec<_> = self.eintraege.iter().map(|e| e.value().clone()).collect();
        alle.sort_by(|a, b| a.id.cmp(&b.id));
        alle
    }
}

impl Default for SitzungsRegistry {
    fn default() -> Self {
        Self::neu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> KonversationsId {
        KonversationsId::parsen(name).unwrap()
    }

    #[test]
    fn unbekannt_hat_keine_phase() {
        let registry = SitzungsRegistry::neu();
        assert!(registry.phase(&id("alice")).is_none());
        assert!(registry.alle().is_empty());
    }

    #[test]
    fn phase_setzen_und_lesen() {
        let registry = SitzungsRegistry::neu();
        registry.phase_setzen(&id("alice"), SitzungsPhase::Angeboten);
        assert_eq!(registry.phase(&id("alice")), Some(SitzungsPhase::Angeboten));

        registry.phase_setzen(&id("alice"), SitzungsPhase::Aufgebaut);
        assert_eq!(registry.phase(&id("alice")), Some(SitzungsPhase::Aufgebaut));
        assert_eq!(registry.alle().len(), 1);
    }

    #[test]
    fn schliessen_behaelt_eintrag() {
        let registry = SitzungsRegistry::neu();
        registry.phase_setzen(&id("alice"), SitzungsPhase::Aufgebaut);
        registry.phase_setzen(&id("alice"), SitzungsPhase::Geschlossen);
        assert_eq!(registry.phase(&id("alice")), Some(SitzungsPhase::Geschlossen));
        assert_eq!(registry.alle().len(), 1);
    }

    #[test]
    fn neustart_setzt_seit_zurueck() {
        let registry = SitzungsRegistry::neu();
        registry.phase_setzen(&id("alice"), SitzungsPhase::Angeboten);
        let erster_start = registry.alle()[0].seit;
        registry.phase_setzen(&id("alice"), SitzungsPhase::Geschlossen);
        std::thread::sleep(std::time::Duration::from_millis(2));
        registry.phase_setzen(&id("alice"), SitzungsPhase::Angeboten);
        assert!(registry.alle()[0].seit > erster_start);
    }

    #[test]
    fn alle_sortiert_mit_geschlossenen() {
        let registry = SitzungsRegistry::neu();
        registry.phase_setzen(&id("carol"), SitzungsPhase::Aufgebaut);
        registry.phase_setzen(&id("bob"), SitzungsPhase::Geschlossen);
        registry.phase_setzen(&id("alice"), SitzungsPhase::Angeboten);

        let alle = registry.alle();
        let namen: Vec<_> = alle.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(namen, vec!["alice", "bob", "carol"]);
        assert_eq!(alle[1].phase, SitzungsPhase::Geschlossen);
    }
}
