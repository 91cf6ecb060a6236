use rand::Rng;
use winit::event::VirtualKeyCode;

use crate::border::Border;
use crate::config::Config;
use crate::food::Apple;
use crate::snake::{Direction, Snake};
use crate::utils::Point;

/// Initial head cell and facing, restored on every reset.
pub const SNAKE_START: Point = Point { x: 1, y: 1 };
pub const SNAKE_START_DIRECTION: Direction = Direction::Down;

/// Result of one simulation step. Terminal covers both self-collision and
/// leaving the playfield; the loop treats it as a normal state transition.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Continue,
    Terminal,
}

/// All mutable game state: one snake, one apple, the bounds, and the pause
/// flag gating the simulation after a game over.
pub struct Game {
    snake: Snake,
    apple: Apple,
    border: Border,
    self_collision_grace: usize,
    paused: bool,
    last_score: usize,
}

impl Game {
    pub fn new(config: &Config) -> Self {
        Self {
            snake: Snake::new(SNAKE_START, SNAKE_START_DIRECTION),
            apple: Apple::new(),
            border: Border::new(config.grid_width, config.grid_height),
            self_collision_grace: config.self_collision_grace,
            paused: false,
            last_score: 0,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Score of the last finished game, shown on the game-over screen.
    pub fn last_score(&self) -> usize {
        self.last_score
    }

    /// Score is simply the snake's length.
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Direction keys only store the facing for the next tick, and are
    /// ignored while paused.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.paused {
            self.snake.set_direction(direction);
        }
    }

    pub fn key_to_direction(key: VirtualKeyCode) -> Option<Direction> {
        match key {
            VirtualKeyCode::Up => Some(Direction::Up),
            VirtualKeyCode::Down => Some(Direction::Down),
            VirtualKeyCode::Left => Some(Direction::Left),
            VirtualKeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Advance the simulation one tick: walk, eat, then collision checks.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> StepOutcome {
        self.snake.walk();
        let head = self.snake.head();

        if head == self.apple.position {
            self.snake.grow();
            self.apple.relocate(rng, &self.border);
        }

        // Segments closer than the grace window cannot end the game; they
        // overlap the head transiently right after growth.
        for seg in self.snake.body().iter().skip(self.self_collision_grace) {
            if head == *seg {
                return StepOutcome::Terminal;
            }
        }

        if !self.border.is_inside(head) {
            return StepOutcome::Terminal;
        }

        StepOutcome::Continue
    }

    /// Record the final score, pause, and rebuild snake and apple so the next
    /// resume starts a fresh game.
    pub fn enter_game_over(&mut self) {
        self.last_score = self.score();
        self.paused = true;
        self.snake = Snake::new(SNAKE_START, SNAKE_START_DIRECTION);
        self.apple = Apple::new();
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }
}
