//! Snake simulation: grid state, tick rules, and key interpretation.
//!
//! The engine is host-agnostic. It never owns a timer; [`crate::session::GameSession`] decides
//! when [`SnakeGame::tick`] runs.

use std::time::Duration;

use platform_host::RandomSource;
use serde::{Deserialize, Serialize};

/// Width and height of the square board, in cells.
pub const GRID_SIZE: i32 = 20;
/// Fixed simulation period.
pub const TICK_PERIOD: Duration = Duration::from_millis(150);
/// Score awarded for each food eaten.
pub const FOOD_SCORE: u32 = 10;

const INITIAL_SEGMENTS: [GridPoint; 3] = [
    GridPoint { x: 10, y: 10 },
    GridPoint { x: 9, y: 10 },
    GridPoint { x: 8, y: 10 },
];
const INITIAL_FOOD: GridPoint = GridPoint { x: 15, y: 15 };

/// Integer board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl GridPoint {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    fn on_board(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// Movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// Unit direction in the 4-neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Heading {
    /// All four headings.
    pub const ALL: [Heading; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector `(dx, dy)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis this heading travels along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// Simulation phase while a game instance exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticking.
    Running,
    /// Frozen until the pause key is pressed again.
    Paused,
    /// A collision happened; only quitting leaves this phase.
    Ended,
}

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeKey {
    /// Destroy the game and return to the prompt.
    Quit,
    /// Flip between running and paused.
    TogglePause,
    /// Queue a turn.
    Turn(Heading),
}

impl SnakeKey {
    /// Maps a DOM `KeyboardEvent.key` name to a game key.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "q" | "Q" => Some(Self::Quit),
            " " | "Spacebar" => Some(Self::TogglePause),
            "ArrowUp" => Some(Self::Turn(Heading::Up)),
            "ArrowDown" => Some(Self::Turn(Heading::Down)),
            "ArrowLeft" => Some(Self::Turn(Heading::Left)),
            "ArrowRight" => Some(Self::Turn(Heading::Right)),
            _ => None,
        }
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto the food and grew.
    Ate,
    /// The next head left the board or hit the body; the game ended.
    Collided,
}

/// What a board cell holds, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Nothing.
    Empty,
    /// The first segment.
    Head,
    /// Any other segment.
    Body,
    /// The food pellet.
    Food,
}

/// One live Snake game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeGame {
    segments: Vec<GridPoint>,
    food: GridPoint,
    heading: Heading,
    pending_heading: Heading,
    score: u32,
    phase: GamePhase,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    /// Starts a game: three segments heading right, food at a fixed cell, phase running.
    pub fn new() -> Self {
        Self {
            segments: INITIAL_SEGMENTS.to_vec(),
            food: INITIAL_FOOD,
            heading: Heading::Right,
            pending_heading: Heading::Right,
            score: 0,
            phase: GamePhase::Running,
        }
    }

    /// Segments, head first.
    pub fn segments(&self) -> &[GridPoint] {
        &self.segments
    }

    /// Current head cell.
    pub fn head(&self) -> GridPoint {
        self.segments[0]
    }

    /// Current food cell.
    pub fn food(&self) -> GridPoint {
        self.food
    }

    /// Committed heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Heading staged for the next tick.
    pub fn pending_heading(&self) -> Heading {
        self.pending_heading
    }

    /// Points scored so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Queues a turn. Accepted only while running and only across the current axis.
    ///
    /// Returns whether the turn was staged.
    pub fn steer(&mut self, requested: Heading) -> bool {
        if self.phase != GamePhase::Running || requested.axis() == self.heading.axis() {
            return false;
        }
        self.pending_heading = requested;
        true
    }

    /// Flips running and paused. Ignored once the game has ended.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Ended => return false,
        };
        true
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self, rng: &mut dyn RandomSource) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }

        let heading = if self.pending_heading == self.heading.reverse() {
            self.heading
        } else {
            self.pending_heading
        };
        let next_head = self.head().step(heading);

        if !next_head.on_board() || self.segments.contains(&next_head) {
            self.phase = GamePhase::Ended;
            return TickOutcome::Collided;
        }

        self.heading = heading;
        self.pending_heading = heading;
        self.segments.insert(0, next_head);

        if next_head == self.food {
            self.score += FOOD_SCORE;
            if let Some(food) = place_food(&self.segments, rng) {
                self.food = food;
            }
            TickOutcome::Ate
        } else {
            self.segments.pop();
            TickOutcome::Moved
        }
    }

    /// Classifies a board cell.
    pub fn cell_at(&self, point: GridPoint) -> CellKind {
        if self.head() == point {
            CellKind::Head
        } else if self.segments[1..].contains(&point) {
            CellKind::Body
        } else if self.food == point {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        segments: Vec<GridPoint>,
        food: GridPoint,
        heading: Heading,
        phase: GamePhase,
    ) -> Self {
        Self {
            segments,
            food,
            heading,
            pending_heading: heading,
            score: 0,
            phase,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_pending(&mut self, heading: Heading) {
        self.pending_heading = heading;
    }
}

/// Picks a free cell by rejection sampling, falling back to a scan when the random source fails.
///
/// Returns `None` only on a full board.
fn place_food(occupied: &[GridPoint], rng: &mut dyn RandomSource) -> Option<GridPoint> {
    let cell_count = (GRID_SIZE * GRID_SIZE) as usize;
    if occupied.len() >= cell_count {
        return None;
    }

    loop {
        let draw = rng
            .next_below(GRID_SIZE as u32)
            .and_then(|x| rng.next_below(GRID_SIZE as u32).map(|y| (x, y)));
        match draw {
            Ok((x, y)) => {
                let candidate = GridPoint::new(x as i32, y as i32);
                if !occupied.contains(&candidate) {
                    return Some(candidate);
                }
            }
            Err(err) => {
                leptos::logging::warn!("snake food placement fell back to scan: {err}");
                return (0..GRID_SIZE)
                    .flat_map(|y| (0..GRID_SIZE).map(move |x| GridPoint::new(x, y)))
                    .find(|cell| !occupied.contains(cell));
            }
        }
    }
}
