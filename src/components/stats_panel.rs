use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub correct_pops: u32,
    pub pops_to_win: u32,
}

/// Share of the goal reached, capped at 100.
pub fn progress_percent(correct_pops: u32, pops_to_win: u32) -> f64 {
    let goal = pops_to_win.max(1);
    correct_pops.min(goal) as f64 * 100.0 / goal as f64
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let done = props.correct_pops.min(props.pops_to_win);
    let pct = progress_percent(props.correct_pops, props.pops_to_win);
    html! {
        <div class="progress">
            <span class="progress-label">{ format!("🎈 {} / {}", done, props.pops_to_win) }</span>
            <div class="progress-track">
                <div class="progress-fill" style={format!("width:{pct:.0}%;")}></div>
            </div>
        </div>
    }
}
