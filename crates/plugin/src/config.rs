//! Plugin-Konfiguration
//!
//! Wird beim Aktivieren aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass das Plugin ohne Konfigurationsdatei
//! lauffaehig ist.

use serde::{Deserialize, Serialize};
use std::path::Path;

use fluesterpost_observability::{log_level_gueltig, LogFormat};

use crate::error::{PluginError, Result};

/// Vollstaendige Plugin-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginKonfiguration {
    /// Metadaten und Befehlsname
    pub plugin: PluginEinstellungen,
    /// Namen der Transport-Hooks
    pub hooks: HookEinstellungen,
    /// Anzeige von Diagnosen und lokalem Echo
    pub anzeige: AnzeigeEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Metadaten und Befehlsname
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginEinstellungen {
    pub name: String,
    pub beschreibung: String,
    /// Name des Benutzerbefehls (ohne Schraegstrich)
    pub befehl: String,
}

impl Default for PluginEinstellungen {
    fn default() -> Self {
        Self {
            name: "fluesterpost".into(),
            beschreibung: "E2E crypto for IRC".into(),
            befehl: "fluesterpost".into(),
        }
    }
}

/// Namen der Modifier, an denen die Abfaenger haengen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HookEinstellungen {
    /// Eingehende PRIVMSG, nach dem Parsen durch den Client
    pub eingang: String,
    /// Ausgehende PRIVMSG, bevor sie den Transport erreicht
    pub ausgang: String,
}

impl Default for HookEinstellungen {
    fn default() -> Self {
        Self {
            eingang: "irc_in2_privmsg".into(),
            ausgang: "irc_out1_privmsg".into(),
        }
    }
}

/// Anzeige-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnzeigeEinstellungen {
    /// Verschluesselte eigene Nachrichten lokal als Klartext anzeigen
    pub lokales_echo: bool,
    /// Praefix vor jeder Diagnose ("<praefix>: Sending Offer")
    pub praefix: String,
}

impl Default for AnzeigeEinstellungen {
    fn default() -> Self {
        Self {
            lokales_echo: true,
            praefix: "fluesterpost".into(),
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Subscriber beim Aktivieren installieren (nur wenn noch keiner existiert)
    pub aktiviert: bool,
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            aktiviert: true,
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl PluginKonfiguration {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &Path) -> Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => toml::from_str(&inhalt).map_err(|e| {
                PluginError::Konfiguration(format!("{}: {}", pfad.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = %pfad.display(),
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parst eine Konfiguration aus einem TOML-String
    pub fn parse(inhalt: &str) -> Result<Self> {
        toml::from_str(inhalt).map_err(|e| PluginError::Konfiguration(e.to_string()))
    }

    /// Validiert Pflichtfelder und bekannte Werte
    pub fn validieren(&self) -> Result<()> {
        let pflicht = [
            ("plugin.name", &self.plugin.name),
            ("plugin.befehl", &self.plugin.befehl),
            ("hooks.eingang", &self.hooks.eingang),
            ("hooks.ausgang", &self.hooks.ausgang),
        ];
        for (feld, wert) in pflicht {
            if wert.trim().is_empty() {
                return Err(PluginError::Konfiguration(format!("Pflichtfeld fehlt: {feld}")));
            }
        }
        if self.hooks.eingang == self.hooks.ausgang {
            return Err(PluginError::Konfiguration(
                "hooks.eingang und hooks.ausgang muessen verschieden sein".into(),
            ));
        }
        if !log_level_gueltig(&self.logging.level) {
            return Err(PluginError::Konfiguration(format!(
                "Unbekannter Log-Level: {}",
                self.logging.level
            )));
        }
        if LogFormat::parsen(&self.logging.format).is_none() {
            return Err(PluginError::Konfiguration(format!(
                "Unbekanntes Log-Format: {}",
                self.logging.format
            )));
        }
        Ok(())
    }
}
