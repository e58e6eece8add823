use crate::board::{Board, Mark};
use crate::boards::tic_tac_toe::{Position, TicTacToeBoard};
use crate::minimax::best_move;
use crate::random::RandomGenerator;
use thiserror::Error;
use tracing::debug;

/// Errors a player's move can run into.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Position ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },

    #[error("Position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("It is {0}'s turn")]
    NotYourTurn(Mark),

    #[error("The game is already over")]
    GameOver,

    #[error("No move available")]
    NoMoveAvailable,
}

/// How the computer chooses its moves.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum BotKind {
    /// Perfect play through exhaustive minimax search.
    #[default]
    Minimax,
    /// A uniformly random empty cell.
    Random,
}

/// The state of a game as seen after a move.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// One game between a human and the computer.
///
/// The session owns the board and the turn. `X` always moves first.
pub struct GameSession<K: RandomGenerator> {
    board: TicTacToeBoard,
    to_move: Mark,
    human: Mark,
    bot: BotKind,
    random: K,
}

/// A builder for creating instances of `GameSession`.
pub struct GameSessionBuilder<K: RandomGenerator> {
    human: Mark,
    bot: BotKind,
    random_generator: K,
}

impl<K: RandomGenerator> GameSessionBuilder<K> {
    /// Creates a builder for a human playing `X` against the minimax bot.
    pub fn new() -> Self {
        Self {
            human: Mark::X,
            bot: BotKind::default(),
            random_generator: K::default(),
        }
    }

    /// Sets the mark the human plays. The computer takes the other one.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human = mark;
        self
    }

    pub fn with_bot(mut self, bot: BotKind) -> Self {
        self.bot = bot;
        self
    }

    /// Sets the random number generator used by the random bot.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn build(self) -> GameSession<K> {
        debug!(human = %self.human, bot = ?self.bot, "starting game session");
        GameSession {
            board: TicTacToeBoard::new(),
            to_move: Mark::X,
            human: self.human,
            bot: self.bot,
            random: self.random_generator,
        }
    }
}

impl<K: RandomGenerator> Default for GameSessionBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> GameSession<K> {
    /// Returns a new builder for `GameSession`.
    pub fn builder() -> GameSessionBuilder<K> {
        GameSessionBuilder::new()
    }

    pub fn board(&self) -> &TicTacToeBoard {
        &self.board
    }

    /// The mark that moves next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn human_mark(&self) -> Mark {
        self.human
    }

    pub fn bot_mark(&self) -> Mark {
        self.human.opponent()
    }

    pub fn is_human_turn(&self) -> bool {
        self.to_move == self.human
    }

    /// Classifies the board. A win is checked before a draw.
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_draw() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Commits the human's move after validating it.
    pub fn play_human(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(SessionError::NotYourTurn(self.to_move));
        }
        self.commit(pos)
    }

    /// Lets the bot choose a move and commits it.
    pub fn play_bot(&mut self) -> Result<(Position, GameStatus), SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_human_turn() {
            return Err(SessionError::NotYourTurn(self.to_move));
        }
        let pos = self.calculate_bot_move()?;
        let status = self.commit(pos)?;
        Ok((pos, status))
    }

    fn calculate_bot_move(&mut self) -> Result<Position, SessionError> {
        let mark = self.bot_mark();
        let pos = match self.bot {
            BotKind::Minimax => {
                let result = best_move(&mut self.board, mark);
                debug!(%mark, outcome = ?result.outcome, "minimax bot evaluated position");
                result.best_move
            }
            BotKind::Random => {
                let moves = self.board.available_moves();
                self.random.pick(&moves).copied()
            }
        };
        pos.ok_or(SessionError::NoMoveAvailable)
    }

    fn commit(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }
        if !pos.is_on_board() {
            return Err(SessionError::OutOfRange {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.board.is_empty_at(pos) {
            return Err(SessionError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.place(pos, self.to_move);
        debug!(mark = %self.to_move, row = pos.row, col = pos.col, "move committed");
        let status = self.status();
        if !status.is_over() {
            self.to_move = self.to_move.opponent();
        }
        Ok(status)
    }
}

/// Parses "row,column" with 1-based coordinates into a zero-based `Position`.
pub fn parse_position(input: &str) -> Result<Position, SessionError> {
    let parts: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    let [row, col] = parts.as_slice() else {
        return Err(SessionError::InvalidInput(format!(
            "expected 'row,column', got '{}'",
            input.trim()
        )));
    };

    let parse = |text: &str| {
        text.parse::<usize>()
            .map_err(|_| SessionError::InvalidInput(format!("'{text}' is not a number")))
    };
    let (row, col) = (parse(*row)?, parse(*col)?);

    match (row.checked_sub(1), col.checked_sub(1)) {
        (Some(row), Some(col)) if Position::new(row, col).is_on_board() => {
            Ok(Position::new(row, col))
        }
        _ => Err(SessionError::OutOfRange { row, col }),
    }
}
