use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub target: char,
    pub score: u32,
    pub game_over: bool,
    pub on_restart: Callback<()>,
}

#[function_component(Hud)]
pub fn hud(props: &HudProps) -> Html {
    let restart = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="hud">
            <h1 class="title">{"🎈 Alphabet Balloon Blast 🎈"}</h1>
            <h2 class="target">
                {"Target Letter: "}<span class="highlight">{ props.target.to_string() }</span>
            </h2>
            <h2 class="score">{ format!("Score: {}", props.score) }</h2>
            if props.game_over {
                <button class="reset-button" onclick={restart}>{"Restart Game"}</button>
            }
        </div>
    }
}
