// Player audio preferences, persisted in localStorage as JSON.
use crate::util::{local_storage, persist};
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "balloon_blast_settings";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_effects: bool,
    pub music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_effects: true,
            music: true,
        }
    }
}

impl Settings {
    /// Decode a stored value; anything unreadable yields `None`.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn load() -> Self {
        local_storage()
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| Self::decode(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self) {
        let Some(store) = local_storage() else { return };
        match serde_json::to_string(self) {
            Ok(s) => {
                persist(&store, STORAGE_KEY, &s);
            }
            Err(e) => log::warn!("could not encode settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fill_in_defaults() {
        let s = Settings::decode(r#"{ "music": false }"#).unwrap();
        assert!(!s.music);
        assert!(s.sound_effects);
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(Settings::decode("not json"), None);
        assert_eq!(Settings::decode(r#"{ "music": "loud" }"#), None);
    }

    #[test]
    fn defaults_enable_all_audio() {
        let s = Settings::default();
        assert!(s.sound_effects && s.music);
    }
}
