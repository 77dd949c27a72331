//! Frame orchestrator
//!
//! [`Game::frame`] is the function the host calls once per display refresh.
//! It measures elapsed time, turns queued input into a [`TickInput`], runs the
//! simulation tick and commits the high score when a run ends. Drawing is a
//! separate [`Game::render`] call so the loop can run headless.

use crate::animation::{BoostAnimation, PingPong};
use crate::consts::MAX_FRAME_MS;
use crate::highscores::HighScores;
use crate::input::{InputEvent, InputQueue};
use crate::persistence::KeyValueStore;
use crate::renderer::scene::{Scene, draw_frame};
use crate::renderer::RenderSurface;
use crate::sim::{GameEvent, GamePhase, GameSession, TickInput, autopilot, tick};
use crate::tuning::Tuning;
use crate::ui::{MenuAction, MenuLayout};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub phase: GamePhase,
    pub score: u32,
    /// Milliseconds fed to the simulation this frame
    pub elapsed_ms: f32,
    pub events: Vec<GameEvent>,
    /// The fullscreen button was pressed; the host should try to comply
    pub fullscreen_requested: bool,
    /// Leaderboard rank achieved by a run that ended this frame
    pub rank: Option<usize>,
}

/// Game instance holding all state
pub struct Game<S: KeyValueStore> {
    session: GameSession,
    highscores: HighScores,
    store: S,
    tuning: Tuning,
    layout: MenuLayout,
    input: InputQueue,
    last_time: Option<f64>,
    background: PingPong,
    boost: BoostAnimation,
    autopilot: bool,
    autopilot_holding: bool,
}

impl<S: KeyValueStore> Game<S> {
    /// Load tuning and high scores from `store` and sit on the title screen
    pub fn new(store: S, seed: u64) -> Self {
        let tuning = Tuning::load(&store);
        Self::with_tuning(store, tuning, seed)
    }

    /// Use `tuning` if it is valid, otherwise the defaults
    pub fn with_tuning(store: S, tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.or_default_if_invalid();
        let highscores = HighScores::load(&store);
        log::info!("Game initialized with seed: {seed}");
        Self {
            session: GameSession::new(&tuning, seed),
            highscores,
            store,
            layout: MenuLayout::new(tuning.field_width, tuning.field_height),
            tuning,
            input: InputQueue::new(),
            last_time: None,
            background: PingPong::default(),
            boost: BoostAnimation::default(),
            autopilot: false,
            autopilot_holding: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Queue an input event for the next frame
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Let the demo pilot play (it feeds the input queue like a player would)
    pub fn set_autopilot(&mut self, enabled: bool) {
        if self.autopilot != enabled {
            log::info!("Autopilot: {enabled}");
        }
        self.autopilot = enabled;
        if !enabled && self.autopilot_holding {
            self.autopilot_holding = false;
            self.input.push(InputEvent::PrimaryRelease);
        }
    }

    /// Run one frame at host timestamp `time_ms`
    pub fn frame(&mut self, time_ms: f64) -> FrameReport {
        let elapsed_ms = self.elapsed_since_last(time_ms);

        // Ambient animation runs in every phase
        self.background.advance(elapsed_ms);

        if self.autopilot {
            self.queue_autopilot_input();
        }
        let (input, fullscreen_requested) = self.drain_input();

        let events = tick(&mut self.session, &input, elapsed_ms);

        let mut rank = None;
        for event in &events {
            match *event {
                GameEvent::Started => self.boost.reset(),
                GameEvent::Crashed { cause, score } => {
                    rank = self.highscores.commit(score, &mut self.store);
                    match rank {
                        Some(r) => log::info!("Game over ({cause:?}): {score}, rank {r}"),
                        None => log::info!("Game over ({cause:?}): {score}"),
                    }
                }
                GameEvent::Scored { .. } => {}
            }
        }

        self.boost.advance(self.session.boosting, elapsed_ms);

        FrameReport {
            phase: self.session.phase,
            score: self.session.score,
            elapsed_ms,
            events,
            fullscreen_requested,
            rank,
        }
    }

    /// Draw the current state
    pub fn render(&self, surface: &mut impl RenderSurface) {
        let scene = Scene {
            session: &self.session,
            highscores: &self.highscores,
            layout: &self.layout,
            background_frame: self.background.frame(),
            boost_frame: self.boost.frame(),
        };
        draw_frame(surface, &scene);
    }

    /// First frame counts as zero; later ones are clamped to a sane range
    fn elapsed_since_last(&mut self, time_ms: f64) -> f32 {
        let elapsed = match self.last_time {
            Some(last) => (time_ms - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(time_ms);

        if elapsed.is_finite() {
            elapsed.clamp(0.0, MAX_FRAME_MS)
        } else {
            0.0
        }
    }

    /// Collapse queued events into this tick's input
    fn drain_input(&mut self) -> (TickInput, bool) {
        let phase = self.session.phase;
        let mut input = TickInput::default();
        let mut fullscreen = false;

        for event in self.input.drain() {
            match event {
                InputEvent::PointerDown(pos) => match self.layout.hit_test(phase, pos) {
                    Some(MenuAction::Start) => input.start = true,
                    Some(MenuAction::Fullscreen) => fullscreen = true,
                    None if phase == GamePhase::Playing => {
                        input.impulse = true;
                        input.boosting = Some(true);
                    }
                    None => {}
                },
                InputEvent::PrimaryPress if phase == GamePhase::Playing => {
                    input.impulse = true;
                    input.boosting = Some(true);
                }
                InputEvent::PrimaryPress => {}
                InputEvent::PrimaryRelease => input.boosting = Some(false),
            }
        }

        (input, fullscreen)
    }

    fn queue_autopilot_input(&mut self) {
        match self.session.phase {
            GamePhase::Start | GamePhase::GameOver => {
                let pos = self.layout.start.rect.center();
                self.input.push(InputEvent::PointerDown(pos));
            }
            GamePhase::Playing => {
                if autopilot::wants_impulse(&self.session) {
                    self.autopilot_holding = true;
                    self.input.push(InputEvent::PrimaryPress);
                } else if self.autopilot_holding {
                    self.autopilot_holding = false;
                    self.input.push(InputEvent::PrimaryRelease);
                }
            }
        }
    }
}
