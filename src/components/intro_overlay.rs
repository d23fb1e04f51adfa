use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub game_over: bool,
    pub pops_to_win: u32,
    pub hide_intro: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    if !props.show || props.game_over {
        return html! {};
    }
    let hide_cb = props.hide_intro.clone();
    let start_btn = Callback::from(move |_| hide_cb.emit(()));
    html! {
        <div class="overlay intro">
            <h2>{"Alphabet Balloon Blast"}</h2>
            <p>{"Find the letter and pop its balloon!"}</p>
            <ul>
                <li>{"The target letter is shown at the top."}</li>
                <li>{"Click the balloon with that letter to score a point."}</li>
                <li>{"Popping the wrong balloon costs a point."}</li>
                <li>{ format!("Pop {} correct balloons to finish the game.", props.pops_to_win) }</li>
                <li>{"Click the pump at any time for a brand new game."}</li>
            </ul>
            <button onclick={start_btn}>{"Start"}</button>
        </div>
    }
}
