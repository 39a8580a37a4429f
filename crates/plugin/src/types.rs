//! Grundlegende Typen fuer die beobachteten Sitzungen

use chrono::{DateTime, Utc};
use fluesterpost_core::KonversationsId;
use serde::{Deserialize, Serialize};

/// Aus den Engine-Antworten abgeleitete Phase einer Sitzung
///
/// Die Engine bleibt die Quelle der Wahrheit. Ohne Eintrag gilt die
/// Sitzung als nicht vorhanden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SitzungsPhase {
    /// Angebot gesendet, Bestaetigung steht aus
    Angeboten,
    /// Handshake abgeschlossen
    Aufgebaut,
    /// Abschlussnachricht gesendet
    Geschlossen,
}

impl std::fmt::Display for SitzungsPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SitzungsPhase::Angeboten => write!(f, "Angeboten"),
            SitzungsPhase::Aufgebaut => write!(f, "Aufgebaut"),
            SitzungsPhase::Geschlossen => write!(f, "Geschlossen"),
        }
    }
}

/// Oeffentliche Informationen ueber eine beobachtete Sitzung
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitzungsInfo {
    pub id: KonversationsId,
    pub phase: SitzungsPhase,
    pub seit: DateTime<Utc>,
    pub geaendert_am: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_anzeige() {
        assert_eq!(SitzungsPhase::Angeboten.to_string(), "Angeboten");
        assert_eq!(SitzungsPhase::Geschlossen.to_string(), "Geschlossen");
    }

    #[test]
    fn sitzungs_info_serde() {
        let info = SitzungsInfo {
            id: KonversationsId::parsen("alice").unwrap(),
            phase: SitzungsPhase::Aufgebaut,
            seit: Utc::now(),
            geaendert_am: Utc::now(),
        };
        let json = serde_json::to_string(&info).unwrap();
        let info2: SitzungsInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info.id, info2.id);
        assert_eq!(info.phase, info2.phase);
    }
}
