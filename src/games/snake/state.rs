use super::config::{FoodSpawn, GameConfig, ReversalPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// One grid square, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Heading of the snake. Row 0 is the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dcol, drow) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Why a tick ended the game. Only logged; callers just see `is_over`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collision {
    Wall,
    Body,
}

/// What a call to [`GameState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not enough time has passed since the last move
    Waiting,
    /// The snake advanced one cell
    Moved,
    /// The snake advanced onto the food and grew
    Ate,
    /// The move hit a wall or the body; the game is now over
    Crashed,
    /// The game was already over
    Finished,
}

/// Read-only copy of the state for renderers and logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Head first
    pub body: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    body: VecDeque<Cell>,
    direction: Direction,
    food: Cell,
    over: bool,
    score: u32,
    last_update: Option<Instant>,
    grid_width: u16,
    grid_height: u16,
    tick_interval: Duration,
    reversal: ReversalPolicy,
    food_spawn: FoodSpawn,
    rng: StdRng,
}

impl GameState {
    /// One-cell snake in the middle of the grid heading right, food placed at random.
    pub fn new(config: &GameConfig) -> Self {
        let center = Cell::new(
            i32::from(config.grid_width / 2),
            i32::from(config.grid_height / 2),
        );
        let mut state = Self::with_snake(config, center, [], Direction::Right, center);
        state.spawn_food();
        state
    }

    /// Build a state from an explicit body (`head` then `tail` cells) and food cell.
    pub fn with_snake(
        config: &GameConfig,
        head: Cell,
        tail: impl IntoIterator<Item = Cell>,
        direction: Direction,
        food: Cell,
    ) -> Self {
        let mut body: VecDeque<Cell> = tail.into_iter().collect();
        body.push_front(head);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            body,
            direction,
            food,
            over: false,
            score: 0,
            last_update: None,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            tick_interval: config.tick_interval(),
            reversal: config.reversal,
            food_spawn: config.food_spawn,
            rng,
        }
    }

    /// Store the requested heading. Under [`ReversalPolicy::Ignore`] a request
    /// that would step onto the neck is dropped. Returns whether it was stored.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.reversal == ReversalPolicy::Ignore
            && self.body.get(1) == Some(&self.head().step(requested))
        {
            trace!(?requested, "reversal ignored");
            return false;
        }
        self.direction = requested;
        true
    }

    /// Advance one cell if the game is running and a full tick interval has
    /// passed since the last move. The first tick always qualifies.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.over {
            return TickOutcome::Finished;
        }
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < self.tick_interval {
                return TickOutcome::Waiting;
            }
        }

        let new_head = self.head().step(self.direction);

        if let Some(collision) = self.collision_at(new_head) {
            debug!(?collision, head = ?new_head, score = self.score, "snake crashed");
            self.over = true;
            return TickOutcome::Crashed;
        }

        self.body.push_front(new_head);
        let outcome = if new_head == self.food {
            self.score += 1;
            self.spawn_food();
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        };

        self.last_update = Some(now);
        outcome
    }

    /// Place food on a uniformly random cell. Under [`FoodSpawn::Anywhere`]
    /// the cell may be part of the body.
    pub fn spawn_food(&mut self) {
        self.food = match self.food_spawn {
            FoodSpawn::Anywhere => self.random_cell(),
            FoodSpawn::FreeCell => match self.random_free_cell() {
                Some(cell) => cell,
                None => {
                    warn!(len = self.body.len(), "no free cell left, placing food anywhere");
                    self.random_cell()
                }
            },
        };
        trace!(food = ?self.food, "food spawned");
    }

    fn collision_at(&self, cell: Cell) -> Option<Collision> {
        if !self.in_bounds(cell) {
            return Some(Collision::Wall);
        }
        if self.body.contains(&cell) {
            return Some(Collision::Body);
        }
        None
    }

    fn random_cell(&mut self) -> Cell {
        Cell::new(
            self.rng.random_range(0..i32::from(self.grid_width)),
            self.rng.random_range(0..i32::from(self.grid_height)),
        )
    }

    fn random_free_cell(&mut self) -> Option<Cell> {
        let free: Vec<Cell> = (0..i32::from(self.grid_height))
            .flat_map(|row| (0..i32::from(self.grid_width)).map(move |col| Cell::new(col, row)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }

    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.col < i32::from(self.grid_width)
            && cell.row >= 0
            && cell.row < i32::from(self.grid_height)
    }

    pub fn head(&self) -> Cell {
        // body is never empty: built with a head and only shrinks after a push
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.grid_width, self.grid_height)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            body: self.body.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            over: self.over,
        }
    }
}
