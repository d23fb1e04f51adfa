use super::{
    balloon::BalloonView, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    hud::Hud, intro_overlay::IntroOverlay, pump::Pump, settings_modal::SettingsModal,
    stats_panel::StatsPanel,
};
use crate::audio::{SoundCue, SoundPlayer, WebSoundPlayer};
use crate::config::GameConfig;
use crate::model::{Game, GameAction};
use crate::state::Settings;
use crate::util::{local_storage, persist};
use std::rc::Rc;
use yew::prelude::*;

const INTRO_SEEN_KEY: &str = "balloon_blast_intro_seen";

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::load());
    let player = {
        let config = config.clone();
        use_memo((), move |_| WebSoundPlayer::new(&config))
    };
    let game = {
        let config = config.clone();
        let sound: Rc<dyn SoundPlayer> = player.clone();
        use_reducer(move || Game::new(config, sound))
    };
    let settings = use_state(Settings::load);
    let open_settings = use_state(|| false);
    let show_intro = use_state(|| {
        local_storage()
            .and_then(|store| store.get_item(INTRO_SEEN_KEY).ok().flatten())
            .is_none()
    });

    // Apply & persist audio settings
    {
        let player = player.clone();
        use_effect_with(*settings, move |s| {
            player.set_effects_enabled(s.sound_effects);
            player.set_music_enabled(s.music);
            s.save();
            || ()
        });
    }
    // Background music starts with the session
    {
        let player = player.clone();
        use_effect_with((), move |_| {
            log::info!("session started");
            player.play(SoundCue::Music);
            || ()
        });
    }

    let on_pop = {
        let game = game.clone();
        Callback::from(move |id: u64| game.dispatch(GameAction::Pop { id }))
    };
    let on_reset: Callback<()> = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::Reset))
    };
    let toggle_effects_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| {
            settings.set(Settings {
                sound_effects: !settings.sound_effects,
                ..*settings
            })
        })
    };
    let toggle_music_cb: Callback<()> = {
        let settings = settings.clone();
        Callback::from(move |()| {
            settings.set(Settings {
                music: !settings.music,
                ..*settings
            })
        })
    };
    let open_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let hide_intro_cb: Callback<()> = {
        let show_intro = show_intro.clone();
        Callback::from(move |()| {
            show_intro.set(false);
            if let Some(store) = local_storage() {
                persist(&store, INTRO_SEEN_KEY, "1");
            }
        })
    };
    // Help re-shows the intro without clearing the seen flag
    let show_help_cb: Callback<()> = {
        let show_intro = show_intro.clone();
        Callback::from(move |()| show_intro.set(true))
    };

    let state = &game.state;
    let assets = &state.config.assets;

    html! {
        <div class="game-container">
            <Hud target={state.round.target} score={state.score} game_over={state.game_over} on_restart={on_reset.clone()} />
            <StatsPanel correct_pops={state.correct_pops} pops_to_win={state.config.pops_to_win} />
            <ControlsPanel on_show_help={show_help_cb} on_open_settings={open_settings_cb} />
            <Pump pump_image={AttrValue::from(assets.pump_image.clone())} machine_image={AttrValue::from(assets.machine_image.clone())} on_pump={on_reset.clone()} />
            <div class="field">
                { for state.round.balloons.iter().map(|b| html! {
                    <BalloonView key={b.id} balloon={b.clone()} on_pop={on_pop.clone()} />
                }) }
            </div>
            <IntroOverlay show={*show_intro} game_over={state.game_over} pops_to_win={state.config.pops_to_win} hide_intro={hide_intro_cb} />
            <SettingsModal show={*open_settings} on_close={close_settings_cb} sound_effects={settings.sound_effects} on_toggle_sound_effects={toggle_effects_cb} music={settings.music} on_toggle_music={toggle_music_cb} />
            <GameOverOverlay show={state.game_over} score={state.score} correct_pops={state.correct_pops} restart={on_reset} />
        </div>
    }
}
