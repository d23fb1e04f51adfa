use crate::model::Balloon;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BalloonViewProps {
    pub balloon: Balloon,
    pub on_pop: Callback<u64>,
}

/// One clickable balloon: the balloon art with its letter layered on top.
#[function_component(BalloonView)]
pub fn balloon_view(props: &BalloonViewProps) -> Html {
    let b = &props.balloon;
    let onclick = {
        let cb = props.on_pop.clone();
        let id = b.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };
    let letter = match &b.letter_image {
        Some(src) => html! { <img src={src.clone()} class="letter-img" alt={b.letter.to_string()} /> },
        None => html! { <span class="letter-text">{ b.letter.to_string() }</span> },
    };
    html! {
        <div class="balloon" style={format!("transform: translate({}px, {}px);", b.x, b.y)} {onclick}>
            <img src={b.image.clone()} class="balloon-img floating" alt="Balloon" />
            { letter }
        </div>
    }
}
