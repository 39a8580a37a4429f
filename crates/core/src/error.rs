//! Fehlertypen der Channel-Engine
//!
//! Die Engine meldet Fehler nur als Grund-Text. Das Plugin entscheidet
//! anhand der aufgerufenen Operation, wie der Fehler eingeordnet wird.
//! Die Texte landen in den Diagnosen im Chat-Puffer und sind deshalb
//! englisch wie diese.

use thiserror::Error;

/// Result-Alias fuer Engine-Aufrufe
pub type EngineResult<T> = std::result::Result<T, EngineFehler>;

/// Alle Fehler, die eine Channel-Engine melden kann
#[derive(Debug, Error)]
pub enum EngineFehler {
    #[error("engine initialization failed: {0}")]
    Initialisierung(String),

    #[error("invalid conversation id: {0}")]
    UngueltigeId(String),

    #[error("session already active: {0}")]
    SitzungAktiv(String),

    #[error("no active session: {0}")]
    KeineSitzung(String),

    #[error("encoding failed: {0}")]
    Kodierung(String),

    #[error("decoding failed: {0}")]
    Dekodierung(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl EngineFehler {
    /// Erstellt einen Kodierungsfehler aus einer beliebigen Nachricht
    pub fn kodierung(msg: impl Into<String>) -> Self {
        Self::Kodierung(msg.into())
    }

    /// Erstellt einen Dekodierungsfehler aus einer beliebigen Nachricht
    pub fn dekodierung(msg: impl Into<String>) -> Self {
        Self::Dekodierung(msg.into())
    }
}
