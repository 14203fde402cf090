//! Game lifecycle inside the terminal: owns the Snake instance and its tick timer.
//!
//! The session keeps one invariant: a tick timer is registered exactly while a game exists and is
//! running. Every transition ends in [`GameSession::sync_timer`], which acquires or releases the
//! [`IntervalHandle`] to match the phase.

use std::rc::Rc;

use leptos::logging;
use platform_host::{IntervalCallback, IntervalHandle, IntervalScheduler, RandomSource};

use crate::snake::{GamePhase, SnakeGame, SnakeKey, TickOutcome, TICK_PERIOD};

/// What the terminal should do after a key reached the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// No game is active; the key belongs to the terminal.
    NotActive,
    /// The game consumed the key.
    Consumed,
    /// The key means nothing to the game.
    Ignored,
    /// The game was destroyed; control returns to the prompt.
    Quit,
}

/// Owner of the optional Snake instance and its timer.
pub struct GameSession {
    scheduler: Rc<dyn IntervalScheduler>,
    rng: Box<dyn RandomSource>,
    on_tick: IntervalCallback,
    game: Option<SnakeGame>,
    timer: Option<IntervalHandle>,
}

impl GameSession {
    /// Creates an idle session.
    ///
    /// `on_tick` is what the host timer invokes each period; it is expected to route back to
    /// [`GameSession::tick`].
    pub fn new(
        scheduler: Rc<dyn IntervalScheduler>,
        rng: Box<dyn RandomSource>,
        on_tick: IntervalCallback,
    ) -> Self {
        Self {
            scheduler,
            rng,
            on_tick,
            game: None,
            timer: None,
        }
    }

    /// Replaces the callback handed to timers armed from now on.
    pub fn set_tick_callback(&mut self, on_tick: IntervalCallback) {
        self.on_tick = on_tick;
    }

    /// The live game, if any.
    pub fn game(&self) -> Option<&SnakeGame> {
        self.game.as_ref()
    }

    /// Whether a game instance exists.
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Whether a tick timer is currently registered.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts a fresh game, replacing any existing one.
    pub fn start(&mut self) {
        self.timer = None;
        self.game = Some(SnakeGame::new());
        logging::log!("snake game started");
        self.sync_timer();
    }

    /// Destroys the game and releases the timer. No-op when idle.
    pub fn quit(&mut self) -> bool {
        self.timer = None;
        let had_game = self.game.take().is_some();
        if had_game {
            logging::log!("snake game quit");
        }
        had_game
    }

    /// Routes a key to the game.
    pub fn handle_key(&mut self, key: Option<SnakeKey>) -> KeyDisposition {
        let Some(game) = self.game.as_mut() else {
            return KeyDisposition::NotActive;
        };

        let disposition = match key {
            Some(SnakeKey::Quit) => {
                self.quit();
                return KeyDisposition::Quit;
            }
            Some(SnakeKey::TogglePause) => {
                game.toggle_pause();
                KeyDisposition::Consumed
            }
            Some(SnakeKey::Turn(heading)) => {
                game.steer(heading);
                KeyDisposition::Consumed
            }
            None => KeyDisposition::Ignored,
        };
        self.sync_timer();
        disposition
    }

    /// Runs one simulation step. A tick with no running game does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(game) = self.game.as_mut() else {
            return TickOutcome::Idle;
        };
        let outcome = game.tick(self.rng.as_mut());
        if outcome == TickOutcome::Collided {
            logging::log!("snake game over, score {}", game.score());
        }
        self.sync_timer();
        outcome
    }

    fn sync_timer(&mut self) {
        let running = self
            .game
            .as_ref()
            .is_some_and(|game| game.phase() == GamePhase::Running);

        match (running, self.timer.is_some()) {
            (true, false) => match self.scheduler.start(TICK_PERIOD, self.on_tick.clone()) {
                Ok(handle) => self.timer = Some(handle),
                Err(err) => logging::warn!("snake tick timer unavailable: {err}"),
            },
            (false, true) => self.timer = None,
            _ => {}
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.quit();
    }
}
