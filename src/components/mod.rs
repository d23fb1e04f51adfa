pub mod app;
pub mod balloon;
pub mod controls_panel;
pub mod game_over_overlay;
pub mod hud;
pub mod intro_overlay;
pub mod pump;
pub mod settings_modal;
pub mod stats_panel;
