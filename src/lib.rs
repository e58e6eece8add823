//! A small and simple library that plays perfect tic-tac-toe.
//!
//! The engine explores every legal continuation of a position with plain minimax
//! search. `X` moves first and minimizes the outcome, `O` maximizes it; the value
//! of a position is `-1` when `X` has a forced win, `+1` when `O` has one and `0`
//! when best play ends in a draw. Among equally good moves the first one in
//! row-major order is returned, so the search is fully deterministic.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::board::{Mark, Outcome};
//! use minimax_ttt::boards::tic_tac_toe::{Position, TicTacToeBoard};
//! use minimax_ttt::minimax::search;
//!
//! let x = Some(Mark::X);
//! let o = Some(Mark::O);
//! let mut board = TicTacToeBoard::from_rows([[x, x, None], [o, o, None], [None; 3]]);
//!
//! // X to move, minimizing
//! let result = search(&mut board, Mark::X, false);
//!
//! assert_eq!(result.outcome, Outcome::XWins);
//! assert_eq!(result.best_move, Some(Position::new(0, 2)));
//! ```

/// Contains the `Board` trait and the mark and outcome types it is expressed in.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// The core module of the library: exhaustive minimax search and move analysis.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Contains the result types produced by the search.
pub mod search_result;
/// A human-versus-computer game built on top of the search.
pub mod session;
