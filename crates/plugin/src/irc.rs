//! Minimaler Parser fuer PRIVMSG-Zeilen
//!
//! Die Hooks sehen rohe IRC-Zeilen, ausgehend `PRIVMSG ziel :text`,
//! eingehend zusaetzlich mit Quell-Praefix `:nick!user@host PRIVMSG ...`.

/// Eine zerlegte PRIVMSG-Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Privmsg<'a> {
    /// Quell-Praefix ohne fuehrenden Doppelpunkt
    pub quelle: Option<&'a str>,
    pub ziel: &'a str,
    pub text: &'a str,
}

/// Zerlegt eine PRIVMSG-Zeile, `None` bei anderen Befehlen
pub fn privmsg_parsen(zeile: &str) -> Option<Privmsg<'_>> {
    let zeile = zeile.trim_end_matches(|c| c == '\r' || c == '\n');
    let (quelle, rest) = match zeile.strip_prefix(':') {
        Some(ohne) => {
            let (q, rest) = ohne.split_once(' ')?;
            (Some(q), rest.trim_start())
        }
        None => (None, zeile),
    };

    let (befehl, rest) = rest.split_once(' ')?;
    if !befehl.eq_ignore_ascii_case("PRIVMSG") {
        return None;
    }
    let (ziel, text) = rest.trim_start().split_once(' ')?;
    let text = text.trim_start().strip_prefix(':').unwrap_or(text);

    Some(Privmsg { quelle, ziel, text })
}

/// Anzeigetext einer Zeile
///
/// Faellt auf alles nach dem ersten Doppelpunkt zurueck und zuletzt auf
/// die ganze Zeile.
pub fn nachrichtentext(zeile: &str) -> &str {
    if let Some(p) = privmsg_parsen(zeile) {
        return p.text;
    }
    zeile.split_once(':').map_or(zeile, |(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ausgehend_ohne_quelle() {
        let p = privmsg_parsen("PRIVMSG alice :hello world").unwrap();
        assert_eq!(p.quelle, None);
        assert_eq!(p.ziel, "alice");
        assert_eq!(p.text, "hello world");
    }

    #[test]
    fn eingehend_mit_quelle() {
        let p = privmsg_parsen(":bob!~bob@example.org PRIVMSG alice :?FP:abc\r\n").unwrap();
        assert_eq!(p.quelle, Some("bob!~bob@example.org"));
        assert_eq!(p.ziel, "alice");
        assert_eq!(p.text, "?FP:abc");
    }

    #[test]
    fn text_mit_doppelpunkten_bleibt_ganz() {
        let p = privmsg_parsen("PRIVMSG #rust :zeit: 12:30").unwrap();
        assert_eq!(p.text, "zeit: 12:30");
    }

    #[test]
    fn anderer_befehl() {
        assert!(privmsg_parsen("NOTICE alice :hi").is_none());
        assert!(privmsg_parsen("PING").is_none());
    }

    #[test]
    fn nachrichtentext_fallbacks() {
        assert_eq!(nachrichtentext("PRIVMSG alice :hello"), "hello");
        assert_eq!(nachrichtentext("irgendwas:rest"), "rest");
        assert_eq!(nachrichtentext("ohne doppelpunkt"), "ohne doppelpunkt");
    }
}
