//! Core data models for Alphabet Balloon Blast.
//! Round generation, pop resolution and reset are plain methods on
//! `GameState`; `Game` adapts them to a yew reducer.

use crate::assets::{self, ALPHABET};
use crate::audio::{SoundCue, SoundPlayer};
use crate::config::GameConfig;
use rand::Rng;
use rand::seq::SliceRandom;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct Balloon {
    /// Unique for the lifetime of a `GameState`, across rounds and resets.
    pub id: u64,
    pub letter: char,
    /// Offset inside the play field, in CSS pixels.
    pub x: f64,
    pub y: f64,
    pub image: String,
    /// `None` when the letter has no artwork; rendered as text instead.
    pub letter_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    pub balloons: Vec<Balloon>,
    pub target: char,
}

impl Round {
    pub fn balloon(&self, id: u64) -> Option<&Balloon> {
        self.balloons.iter().find(|b| b.id == id)
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.balloons.iter().any(|b| b.letter == letter)
    }
}

/// Build a fresh round: distinct letters via partial Fisher-Yates, uniform
/// positions, and a target picked from the chosen letters.
/// `next_id` is advanced by the number of balloons created.
pub fn generate_round<R: Rng + ?Sized>(
    rng: &mut R,
    cfg: &GameConfig,
    next_id: &mut u64,
) -> Round {
    let count = cfg.balloons_per_round.clamp(1, ALPHABET.len());
    if count != cfg.balloons_per_round {
        log::warn!(
            "balloons_per_round {} out of range; using {count}",
            cfg.balloons_per_round
        );
    }
    let mut letters = ALPHABET;
    let (chosen, _) = letters.partial_shuffle(rng, count);
    let balloons: Vec<Balloon> = chosen
        .iter()
        .enumerate()
        .map(|(index, &letter)| {
            let id = *next_id;
            *next_id += 1;
            Balloon {
                id,
                letter,
                x: rng.gen_range(0.0..cfg.field.width),
                y: rng.gen_range(0.0..cfg.field.height),
                image: assets::balloon_image_path(&cfg.assets, index),
                letter_image: assets::letter_image_path(&cfg.assets, letter),
            }
        })
        .collect();
    // count >= 1, so the target is always one of the balloons.
    let target = balloons[rng.gen_range(0..balloons.len())].letter;
    let round = Round { balloons, target };
    debug_assert!(round.contains_letter(round.target));
    round
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopOutcome {
    Correct,
    Wrong,
    /// Unknown balloon, or the game is already over.
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub config: Rc<GameConfig>,
    pub round: Round,
    pub score: u32,
    pub correct_pops: u32,
    /// One-way latch; cleared only by `reset`.
    pub game_over: bool,
    next_id: u64,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(config: Rc<GameConfig>, rng: &mut R) -> Self {
        let mut next_id = 0;
        let round = generate_round(rng, &config, &mut next_id);
        Self {
            config,
            round,
            score: 0,
            correct_pops: 0,
            game_over: false,
            next_id,
        }
    }

    /// Replace the whole balloon set and target.
    pub fn generate_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.round = generate_round(rng, &self.config, &mut self.next_id);
    }

    pub fn resolve_pop<R: Rng + ?Sized>(
        &mut self,
        id: u64,
        rng: &mut R,
        sound: &dyn SoundPlayer,
    ) -> PopOutcome {
        if self.game_over {
            return PopOutcome::Ignored;
        }
        let Some(letter) = self.round.balloon(id).map(|b| b.letter) else {
            return PopOutcome::Ignored;
        };
        if letter == self.round.target {
            self.score = self.score.saturating_add(1);
            self.correct_pops = self.correct_pops.saturating_add(1);
            sound.play(SoundCue::Pop);
            self.generate_round(rng);
            if self.correct_pops >= self.config.pops_to_win {
                self.game_over = true;
            }
            PopOutcome::Correct
        } else {
            self.score = self.score.saturating_sub(1);
            self.round.balloons.retain(|b| b.id != id);
            PopOutcome::Wrong
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, sound: &dyn SoundPlayer) {
        sound.play(SoundCue::Inflate);
        self.score = 0;
        self.correct_pops = 0;
        self.game_over = false;
        self.generate_round(rng);
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    Pop { id: u64 },
    Reset,
}

/// Reducer state: the game plus the sound capability its transitions use.
#[derive(Clone)]
pub struct Game {
    pub state: GameState,
    sound: Rc<dyn SoundPlayer>,
}

impl Game {
    pub fn new(config: Rc<GameConfig>, sound: Rc<dyn SoundPlayer>) -> Self {
        Self {
            state: GameState::new(config, &mut rand::thread_rng()),
            sound,
        }
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        let mut rng = rand::thread_rng();
        match action {
            GameAction::Pop { id } => {
                let outcome = new.state.resolve_pop(id, &mut rng, new.sound.as_ref());
                log::debug!(
                    "pop {id}: {outcome:?} (score {}, correct {}/{})",
                    new.state.score,
                    new.state.correct_pops,
                    new.state.config.pops_to_win
                );
                match outcome {
                    PopOutcome::Ignored => return self,
                    PopOutcome::Correct if new.state.game_over => {
                        log::info!("game over with score {}", new.state.score);
                    }
                    _ => {}
                }
            }
            GameAction::Reset => {
                new.state.reset(&mut rng, new.sound.as_ref());
                log::info!("game reset");
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::Recorder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn new_state(seed: u64) -> (GameState, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(Rc::new(GameConfig::default()), &mut rng);
        (state, rng)
    }

    fn target_id(state: &GameState) -> u64 {
        state
            .round
            .balloons
            .iter()
            .find(|b| b.letter == state.round.target)
            .map(|b| b.id)
            .unwrap()
    }

    fn wrong_id(state: &GameState) -> u64 {
        state
            .round
            .balloons
            .iter()
            .find(|b| b.letter != state.round.target)
            .map(|b| b.id)
            .unwrap()
    }

    fn assert_valid_round(round: &Round, cfg: &GameConfig) {
        assert_eq!(round.balloons.len(), cfg.balloons_per_round);
        let letters: HashSet<char> = round.balloons.iter().map(|b| b.letter).collect();
        assert_eq!(letters.len(), round.balloons.len(), "letters must be distinct");
        assert!(letters.iter().all(|l| ALPHABET.contains(l)));
        assert!(round.contains_letter(round.target));
        for b in &round.balloons {
            assert!((0.0..cfg.field.width).contains(&b.x));
            assert!((0.0..cfg.field.height).contains(&b.y));
        }
    }

    #[test]
    fn generated_rounds_are_valid() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut next_id = 0;
        for _ in 0..200 {
            let round = generate_round(&mut rng, &cfg, &mut next_id);
            assert_valid_round(&round, &cfg);
        }
        assert_eq!(next_id, 2000);
    }

    #[test]
    fn round_size_follows_config() {
        let cfg = GameConfig {
            balloons_per_round: 26,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let round = generate_round(&mut rng, &cfg, &mut 0);
        assert_valid_round(&round, &cfg);
    }

    #[test]
    fn out_of_range_round_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(21);
        for (asked, expected) in [(0, 1), (40, 26)] {
            let cfg = GameConfig {
                balloons_per_round: asked,
                ..GameConfig::default()
            };
            let round = generate_round(&mut rng, &cfg, &mut 0);
            assert_eq!(round.balloons.len(), expected);
            assert!(round.contains_letter(round.target));
        }
    }

    #[test]
    fn balloons_carry_artwork_paths() {
        let (state, _) = new_state(11);
        for (i, b) in state.round.balloons.iter().enumerate() {
            assert_eq!(b.image, format!("/assets/balloons/balloon ({}).png", i + 1));
            assert!(b.letter_image.as_deref().unwrap().starts_with("/assets/letters/Symbol 100"));
        }
    }

    #[test]
    fn correct_pop_scores_and_starts_new_round() {
        let (mut state, mut rng) = new_state(1);
        let sound = Recorder::default();
        let old_ids: HashSet<u64> = state.round.balloons.iter().map(|b| b.id).collect();
        let id = target_id(&state);

        let outcome = state.resolve_pop(id, &mut rng, &sound);

        assert_eq!(outcome, PopOutcome::Correct);
        assert_eq!(state.score, 1);
        assert_eq!(state.correct_pops, 1);
        assert!(!state.game_over);
        assert_eq!(*sound.played.borrow(), vec![SoundCue::Pop]);
        assert_valid_round(&state.round, &state.config);
        assert!(state.round.balloons.iter().all(|b| !old_ids.contains(&b.id)));
    }

    #[test]
    fn wrong_pop_at_zero_keeps_score_and_removes_only_that_balloon() {
        let (mut state, mut rng) = new_state(2);
        let sound = Recorder::default();
        let before = state.round.clone();
        let id = wrong_id(&state);

        let outcome = state.resolve_pop(id, &mut rng, &sound);

        assert_eq!(outcome, PopOutcome::Wrong);
        assert_eq!(state.score, 0);
        assert_eq!(state.correct_pops, 0);
        assert_eq!(state.round.target, before.target);
        assert_eq!(state.round.balloons.len(), before.balloons.len() - 1);
        let expected: Vec<&Balloon> = before.balloons.iter().filter(|b| b.id != id).collect();
        let actual: Vec<&Balloon> = state.round.balloons.iter().collect();
        assert_eq!(actual, expected);
        assert!(sound.played.borrow().is_empty());
    }

    #[test]
    fn wrong_pop_costs_one_point() {
        let (mut state, mut rng) = new_state(4);
        let sound = Recorder::default();
        state.resolve_pop(target_id(&state), &mut rng, &sound);
        state.resolve_pop(target_id(&state), &mut rng, &sound);
        assert_eq!(state.score, 2);
        state.resolve_pop(wrong_id(&state), &mut rng, &sound);
        assert_eq!(state.score, 1);
        assert_eq!(state.correct_pops, 2);
    }

    #[test]
    fn score_never_goes_negative() {
        let (mut state, mut rng) = new_state(5);
        let sound = Recorder::default();
        state.resolve_pop(target_id(&state), &mut rng, &sound);
        // Pop every wrong balloon in the round; the target always survives.
        while state.round.balloons.len() > 1 {
            state.resolve_pop(wrong_id(&state), &mut rng, &sound);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.round.balloons.len(), 1);
        assert_eq!(state.round.balloons[0].letter, state.round.target);
    }

    #[test]
    fn unknown_balloon_is_ignored() {
        let (mut state, mut rng) = new_state(6);
        let before = state.clone();
        let outcome = state.resolve_pop(u64::MAX, &mut rng, &Recorder::default());
        assert_eq!(outcome, PopOutcome::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn popping_a_replaced_balloon_is_ignored() {
        let (mut state, mut rng) = new_state(8);
        let sound = Recorder::default();
        let stale = wrong_id(&state);
        state.resolve_pop(target_id(&state), &mut rng, &sound);
        assert_eq!(state.resolve_pop(stale, &mut rng, &sound), PopOutcome::Ignored);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn game_over_latches_after_ten_correct_pops() {
        let (mut state, mut rng) = new_state(9);
        let sound = Recorder::default();
        for n in 1..=10 {
            assert!(!state.game_over, "latched early at pop {n}");
            assert_eq!(state.resolve_pop(target_id(&state), &mut rng, &sound), PopOutcome::Correct);
        }
        assert!(state.game_over);
        assert_eq!(state.correct_pops, 10);
        assert_eq!(state.score, 10);

        // Further pops do nothing until reset.
        assert_eq!(
            state.resolve_pop(target_id(&state), &mut rng, &sound),
            PopOutcome::Ignored
        );
        assert_eq!(state.resolve_pop(wrong_id(&state), &mut rng, &sound), PopOutcome::Ignored);
        assert!(state.game_over);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn wrong_pops_do_not_count_towards_game_over() {
        let (mut state, mut rng) = new_state(10);
        let sound = Recorder::default();
        for _ in 0..9 {
            state.resolve_pop(target_id(&state), &mut rng, &sound);
            state.resolve_pop(wrong_id(&state), &mut rng, &sound);
        }
        assert_eq!(state.correct_pops, 9);
        assert!(!state.game_over);
        state.resolve_pop(target_id(&state), &mut rng, &sound);
        assert!(state.game_over);
    }

    #[test]
    fn reset_restores_a_fresh_game() {
        let (mut state, mut rng) = new_state(12);
        let sound = Recorder::default();
        for _ in 0..10 {
            state.resolve_pop(target_id(&state), &mut rng, &sound);
        }
        assert!(state.game_over);
        sound.played.borrow_mut().clear();

        state.reset(&mut rng, &sound);

        assert_eq!(state.score, 0);
        assert_eq!(state.correct_pops, 0);
        assert!(!state.game_over);
        assert_valid_round(&state.round, &state.config);
        assert_eq!(*sound.played.borrow(), vec![SoundCue::Inflate]);
        assert_eq!(state.resolve_pop(target_id(&state), &mut rng, &sound), PopOutcome::Correct);
    }

    #[test]
    fn ids_stay_unique_across_rounds_and_resets() {
        let (mut state, mut rng) = new_state(13);
        let sound = Recorder::default();
        let mut seen: HashSet<u64> = state.round.balloons.iter().map(|b| b.id).collect();
        for i in 0..30 {
            if i % 7 == 6 {
                state.reset(&mut rng, &sound);
            } else {
                state.resolve_pop(target_id(&state), &mut rng, &sound);
                if state.game_over {
                    state.reset(&mut rng, &sound);
                }
            }
            for b in &state.round.balloons {
                assert!(seen.insert(b.id), "id {} reused", b.id);
            }
        }
    }

    #[test]
    fn reducer_skips_ignored_pops() {
        let sound: Rc<dyn SoundPlayer> = Rc::new(Recorder::default());
        let game = Rc::new(Game::new(Rc::new(GameConfig::default()), sound));
        let after = game.clone().reduce(GameAction::Pop { id: u64::MAX });
        assert!(Rc::ptr_eq(&game, &after));
    }

    #[test]
    fn reducer_applies_pops_and_reset() {
        let sound: Rc<dyn SoundPlayer> = Rc::new(Recorder::default());
        let game = Rc::new(Game::new(Rc::new(GameConfig::default()), sound));
        let id = target_id(&game.state);
        let game = game.reduce(GameAction::Pop { id });
        assert_eq!(game.state.score, 1);
        let game = game.reduce(GameAction::Reset);
        assert_eq!(game.state.score, 0);
        assert_eq!(game.state.correct_pops, 0);
    }
}
