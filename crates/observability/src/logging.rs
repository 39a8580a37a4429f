//! Logging im Prozess des Chat-Clients via tracing-subscriber
//!
//! Level und Format kommen aus der Plugin-Konfiguration. `FP_LOG_LEVEL`
//! und `FP_LOG_FORMAT` ueberschreiben beides, ohne dass die
//! Konfigurationsdatei angefasst werden muss. Ausgabe geht immer nach
//! stderr, stdout gehoert dem Host.

use tracing_subscriber::{fmt, EnvFilter};

const ENV_LEVEL: &str = "FP_LOG_LEVEL";
const ENV_FORMAT: &str = "FP_LOG_FORMAT";

/// Ausgabeformat der Log-Zeilen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parst `text` oder `json`, alles andere ist unbekannt
    pub fn parsen(format: &str) -> Option<Self> {
        match format {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Validiert ob ein Log-Level-String gueltig ist.
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error")
}

/// Wirksame Einstellungen nach Anwendung der Umgebung
#[derive(Debug, Clone, PartialEq, Eq)]
struct Wirksam {
    filter: String,
    format: LogFormat,
}

/// Umgebung vor Konfiguration; ein unbekanntes Format faellt auf Text zurueck
fn aufloesen(
    level: &str,
    format: &str,
    env_level: Option<String>,
    env_format: Option<String>,
) -> Wirksam {
    let filter = env_level
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| level.to_string());
    let format = env_format
        .as_deref()
        .and_then(LogFormat::parsen)
        .or_else(|| LogFormat::parsen(format))
        .unwrap_or(LogFormat::Text);
    Wirksam { filter, format }
}

/// Installiert den globalen Subscriber.
///
/// Gibt `false` zurueck, wenn bereits einer gesetzt ist (vom Host, von
/// einer frueheren Aktivierung oder von einem Test). Das Plugin laeuft
/// dann mit dem vorhandenen weiter.
pub fn logging_initialisieren(level: &str, format: &str) -> bool {
    let wirksam = aufloesen(
        level,
        format,
        std::env::var(ENV_LEVEL).ok(),
        std::env::var(ENV_FORMAT).ok(),
    );
    let filter = EnvFilter::try_new(&wirksam.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let ergebnis = match wirksam.format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    ergebnis.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_gueltige_werte() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(log_level_gueltig(level));
        }
        assert!(!log_level_gueltig("verbose"));
        assert!(!log_level_gueltig("INFO"));
    }

    #[test]
    fn format_parsen() {
        assert_eq!(LogFormat::parsen("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parsen("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parsen("JSON"), None);
        assert_eq!(LogFormat::parsen("xml"), None);
    }

    #[test]
    fn ohne_umgebung_gilt_konfiguration() {
        let w = aufloesen("debug", "json", None, None);
        assert_eq!(w.filter, "debug");
        assert_eq!(w.format, LogFormat::Json);
    }

    #[test]
    fn umgebung_hat_vorrang() {
        let w = aufloesen(
            "info",
            "text",
            Some("fluesterpost_plugin=trace".into()),
            Some("json".into()),
        );
        assert_eq!(w.filter, "fluesterpost_plugin=trace");
        assert_eq!(w.format, LogFormat::Json);
    }

    #[test]
    fn leere_oder_kaputte_umgebung_wird_ignoriert() {
        let w = aufloesen("warn", "json", Some("  ".into()), Some("xml".into()));
        assert_eq!(w.filter, "warn");
        assert_eq!(w.format, LogFormat::Json);

        assert_eq!(aufloesen("info", "yaml", None, None).format, LogFormat::Text);
    }

    #[test]
    fn zweite_initialisierung_scheitert_still() {
        logging_initialisieren("debug", "text");
        assert!(!logging_initialisieren("info", "json"));
    }
}
