//! Sound capability used by the game logic.
//! Playback is fire-and-forget: failures are logged and never reach game state.

use crate::config::GameConfig;
use std::cell::Cell;
use std::fmt;
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Pop,
    Inflate,
    Music,
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoundCue::Pop => "pop",
            SoundCue::Inflate => "inflate",
            SoundCue::Music => "music",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("{cue} sound unavailable: {reason}")]
    Unavailable { cue: SoundCue, reason: String },
    #[error("{cue} playback rejected (autoplay blocked?): {reason}")]
    Rejected { cue: SoundCue, reason: String },
}

/// Anything that can play a cue. Implementations must not fail loudly.
pub trait SoundPlayer {
    fn play(&self, cue: SoundCue);

    fn stop(&self, _cue: SoundCue) {}
}

fn js_reason(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

fn load(cue: SoundCue, src: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(el) => Some(el),
        Err(e) => {
            let err = SoundError::Unavailable {
                cue,
                reason: js_reason(&e),
            };
            log::warn!("{err}");
            None
        }
    }
}

/// `HtmlAudioElement`-backed player. Effects and music can be muted
/// independently; the flags are updated from persisted settings.
pub struct WebSoundPlayer {
    pop: Option<HtmlAudioElement>,
    inflate: Option<HtmlAudioElement>,
    music: Option<HtmlAudioElement>,
    effects_enabled: Cell<bool>,
    music_enabled: Cell<bool>,
}

impl WebSoundPlayer {
    pub fn new(cfg: &GameConfig) -> Self {
        let music = load(SoundCue::Music, &cfg.assets.music);
        if let Some(m) = &music {
            m.set_loop(true);
            m.set_volume(cfg.music_volume);
        }
        Self {
            pop: load(SoundCue::Pop, &cfg.assets.pop_sound),
            inflate: load(SoundCue::Inflate, &cfg.assets.inflate_sound),
            music,
            effects_enabled: Cell::new(true),
            music_enabled: Cell::new(true),
        }
    }

    pub fn set_effects_enabled(&self, on: bool) {
        self.effects_enabled.set(on);
    }

    pub fn set_music_enabled(&self, on: bool) {
        let was = self.music_enabled.replace(on);
        if was && !on {
            self.stop(SoundCue::Music);
        } else if !was && on {
            self.play(SoundCue::Music);
        }
    }

    fn element(&self, cue: SoundCue) -> Option<&HtmlAudioElement> {
        match cue {
            SoundCue::Pop => self.pop.as_ref(),
            SoundCue::Inflate => self.inflate.as_ref(),
            SoundCue::Music => self.music.as_ref(),
        }
    }

    fn enabled(&self, cue: SoundCue) -> bool {
        match cue {
            SoundCue::Music => self.music_enabled.get(),
            SoundCue::Pop | SoundCue::Inflate => self.effects_enabled.get(),
        }
    }
}

impl SoundPlayer for WebSoundPlayer {
    fn play(&self, cue: SoundCue) {
        if !self.enabled(cue) {
            return;
        }
        let Some(el) = self.element(cue) else { return };
        // Restart short effects so rapid pops each make a sound.
        if cue != SoundCue::Music {
            el.set_current_time(0.0);
        }
        let promise: js_sys::Promise = match el.play() {
            Ok(p) => p,
            Err(e) => {
                let err = SoundError::Rejected {
                    cue,
                    reason: js_reason(&e),
                };
                log::warn!("{err}");
                return;
            }
        };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let err = SoundError::Rejected {
                    cue,
                    reason: js_reason(&e),
                };
                log::warn!("{err}");
            }
        });
    }

    fn stop(&self, cue: SoundCue) {
        if let Some(el) = self.element(cue) {
            if let Err(e) = el.pause() {
                log::warn!("could not pause {cue}: {}", js_reason(&e));
            }
        }
    }
}
