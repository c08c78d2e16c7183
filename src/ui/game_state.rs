//! Session state for the four-in-a-row GUI
//!
//! Wraps the copy-on-write [`GameState`] with what only the front-end
//! cares about: who is human, the background opponent thread, timers and
//! status messages.

use crate::config::{AppConfig, OpponentConfig};
use crate::game::{check_move, GameState};
use crate::{AIEngine, Difficulty, EngineError, MoveResult, Player, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player, difficulty: Difficulty },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::X,
            difficulty: Difficulty::Medium,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn restart(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// One GUI session: the current game plus front-end bookkeeping
pub struct Session {
    pub game: GameState,
    pub mode: GameMode,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    starting_player: Player,
    engine_config: OpponentConfig,
    ai_delay: Duration,
}

impl Session {
    pub fn new(mode: GameMode, config: &AppConfig) -> Self {
        Self {
            game: GameState::new(config.game.starting_player),
            mode,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            starting_player: config.game.starting_player,
            engine_config: config.engine.clone(),
            ai_delay: Duration::from_millis(config.game.ai_delay_ms),
        }
    }

    /// PvE session using the configured side and difficulty
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            GameMode::PvE {
                human: config.game.human_player,
                difficulty: config.game.difficulty,
            },
            config,
        )
    }

    /// Start over in `mode` with the configured starting player
    pub fn new_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_to(GameState::new(self.starting_player));
    }

    /// Start over with the player who would have moved next
    pub fn rematch(&mut self) {
        let next = self.game.rematch();
        debug!(starting = %next.starting_player(), "rematch");
        self.reset_to(next);
    }

    fn reset_to(&mut self, game: GameState) {
        self.game = game;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Change difficulty mid-game; only meaningful in PvE
    pub fn set_difficulty(&mut self, new: Difficulty) {
        if let GameMode::PvE { difficulty, .. } = &mut self.mode {
            *difficulty = new;
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.game.current_player() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.game.current_player() != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move at the given cell
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        let mover = self.game.current_player();
        check_move(&self.game, mover, pos.row as i32, pos.col as i32)
            .map_err(|reason| reason.to_string())?;
        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let next = self.game.apply_move(pos.row as i32, pos.col as i32);
        if next == self.game {
            warn!(%pos, "move unexpectedly rejected");
            return;
        }
        self.game = next;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.restart();
    }

    /// Start AI thinking on a worker thread.
    ///
    /// The worker holds its result back until at least the configured
    /// delay has passed, so quick answers don't appear instantly.
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }
        let GameMode::PvE { difficulty, .. } = self.mode else {
            return;
        };

        let board = *self.game.board();
        let player = self.game.current_player();
        let config = self.engine_config.clone();
        let delay = self.ai_delay;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            let mut engine = AIEngine::with_config(config);
            let result = engine.choose_move(&board, player, difficulty);
            if let Some(rest) = delay.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let (result, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);
        match result {
            Ok(move_result) => {
                let pos = move_result.best_move;
                self.last_ai_result = Some(move_result);
                self.execute_move(pos);
            }
            Err(e) => {
                warn!(error = %e, "AI could not move");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the Medium strategy for a hint (PvP)
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }
        let mut engine = AIEngine::with_config(self.engine_config.clone());
        match engine.choose_move(self.game.board(), self.game.current_player(), Difficulty::Medium) {
            Ok(result) => {
                self.suggested_move = Some(result.best_move);
                self.last_ai_result = Some(result);
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// In PvE the AI reply and the human move are taken back together
    fn steps(&self) -> usize {
        match self.mode {
            GameMode::PvE { human, .. }
                if self.game.last_move().is_some_and(|m| m.mover != human) =>
            {
                2
            }
            _ => 1,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.is_ai_thinking() && self.game.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.is_ai_thinking() && self.game.can_redo()
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if !self.can_undo() {
            return;
        }
        for _ in 0..self.steps() {
            self.game = self.game.undo();
        }
        self.suggested_move = None;
        self.message = None;
        self.move_timer.restart();
    }

    /// Redo the last undone move; in PvE the AI reply is replayed with it
    pub fn redo(&mut self) {
        if !self.can_redo() {
            return;
        }
        self.game = self.game.redo();
        if self.is_ai_turn() && self.game.can_redo() {
            self.game = self.game.redo();
        }
        self.suggested_move = None;
        self.message = None;
        self.move_timer.restart();
    }
}
