use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub score: u32,
    pub correct_pops: u32,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div class="overlay game-over">
            <h2>{"Well done!"}</h2>
            <p>{ format!("Balloons popped: {}", props.correct_pops) }</p>
            <p>{ format!("Final score: {}", props.score) }</p>
            <button class="reset-button" onclick={restart_btn}>{"Play Again"}</button>
        </div>
    }
}
