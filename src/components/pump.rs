use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PumpProps {
    pub pump_image: AttrValue,
    pub machine_image: AttrValue,
    pub on_pump: Callback<()>,
}

// Clicking the pump inflates a fresh set of balloons and restarts the game.
#[function_component(Pump)]
pub fn pump(props: &PumpProps) -> Html {
    let onclick = {
        let cb = props.on_pump.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <>
            <img src={props.machine_image.clone()} class="machine" alt="Machine" />
            <img src={props.pump_image.clone()} class="pump" alt="Pump" title="Pump new balloons" {onclick} />
        </>
    }
}
