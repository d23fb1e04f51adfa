use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub sound_effects: bool,
    pub on_toggle_sound_effects: Callback<()>,
    pub music: bool,
    pub on_toggle_music: Callback<()>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_effects_cb = {
        let cb = props.on_toggle_sound_effects.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_music_cb = {
        let cb = props.on_toggle_music.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div class="modal-backdrop">
        <div class="modal">
            <div class="modal-header">
                <h3>{"Settings"}</h3>
                <button onclick={close_cb.clone()}>{"Close"}</button>
            </div>
            <label class="toggle">
                <input type="checkbox" checked={props.sound_effects} onclick={toggle_effects_cb} />
                <span>{"Sound Effects"}</span>
            </label>
            <label class="toggle">
                <input type="checkbox" checked={props.music} onclick={toggle_music_cb} />
                <span>{"Background Music"}</span>
            </label>
            <button onclick={close_cb}>{"Done"}</button>
            <div class="hint">{"Settings are saved in this browser."}</div>
        </div>
    </div>}
}
