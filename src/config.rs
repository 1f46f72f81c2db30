// src/config.rs
use serde::Deserialize;
use web_sys::window;

use crate::notify::NotifierKind;

/// Element id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "activity-board-config";

pub const DEFAULT_STATUS_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// How long a signup status message stays visible.
    pub status_hide_ms: u32,
    /// `"alert"` (blocking) or `"console"` for unregister failures.
    pub notifier: NotifierKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_hide_ms: DEFAULT_STATUS_HIDE_MS,
            notifier: NotifierKind::Alert,
        }
    }
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: BoardConfig = serde_json::from_str(text)?;
        cfg.api_base = cfg.api_base.trim().trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Reads the embedded config block. A missing block yields the defaults;
    /// a broken one also yields the defaults and reports why.
    pub fn load() -> (Self, Option<String>) {
        match config_json_from_dom() {
            None => (Self::default(), None),
            Some(text) if text.trim().is_empty() => (Self::default(), None),
            Some(text) => match Self::from_json(&text) {
                Ok(cfg) => (cfg, None),
                Err(e) => (
                    Self::default(),
                    Some(format!("ignoring #{CONFIG_ELEMENT_ID}: {e}")),
                ),
            },
        }
    }
}

fn config_json_from_dom() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let cfg = BoardConfig::from_json("{}").unwrap();
        assert_eq!(cfg, BoardConfig::default());
        assert_eq!(cfg.status_hide_ms, 5_000);
        assert_eq!(cfg.api_base, "");
        assert_eq!(cfg.notifier, NotifierKind::Alert);
    }

    #[test]
    fn picks_console_notifier() {
        let cfg = BoardConfig::from_json(r#"{"notifier": "console"}"#).unwrap();
        assert_eq!(cfg.notifier, NotifierKind::Console);
        assert!(BoardConfig::from_json(r#"{"notifier": "toast"}"#).is_err());
    }

    #[test]
    fn trims_trailing_slash() {
        let cfg =
            BoardConfig::from_json(r#"{"api_base": " https://api.example.org/ ", "status_hide_ms": 2500}"#)
                .unwrap();
        assert_eq!(cfg.api_base, "https://api.example.org");
        assert_eq!(cfg.status_hide_ms, 2500);
    }

    #[test]
    fn rejects_garbage() {
        assert!(BoardConfig::from_json("{ api_base: nope").is_err());
        assert!(BoardConfig::from_json(r#"{"status_hide_ms": -1}"#).is_err());
    }
}
