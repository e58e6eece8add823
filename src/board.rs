use std::fmt::{Display, Formatter};

/// The central trait of the library, defining the interface for a game position.
///
/// It provides the minimax engine with everything it needs to classify a position
/// and to walk its continuations: win and draw detection, the legal moves, and a
/// way to speculatively place a mark and take it back.
pub trait Board: Default + Clone {
    /// The type representing a move in the game.
    type Move: Copy;

    /// Returns `true` if any winning line is fully occupied by `mark`.
    fn has_won(&self, mark: Mark) -> bool;

    /// Returns `true` if no cell is empty. Does not look at wins, so callers must check
    /// those first.
    fn is_draw(&self) -> bool;

    /// Returns all empty cells, in the order the search should try them.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Puts `mark` into the cell addressed by `b_move`.
    fn place(&mut self, b_move: Self::Move, mark: Mark);

    /// Empties the cell addressed by `b_move`.
    fn clear(&mut self, b_move: Self::Move);

    /// Returns the mark owning a winning line, checking `X` before `O`.
    fn winner(&self) -> Option<Mark> {
        if self.has_won(Mark::X) {
            Some(Mark::X)
        } else if self.has_won(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }
}

/// A player's symbol. `X` always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    /// The first player, minimizing the outcome.
    X,
    /// The second player, maximizing the outcome.
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// `O` is the maximizing side, `X` the minimizing one.
    pub fn is_maximizing(self) -> bool {
        self == Mark::O
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The minimax value of a position under optimal play by both sides.
///
/// Variants are declared in ascending order of value, so the derived ordering
/// matches the numeric one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub enum Outcome {
    /// `X` has a forced win.
    XWins = -1,
    /// The position is drawn.
    Draw = 0,
    /// `O` has a forced win.
    OWins = 1,
}

impl Outcome {
    /// Returns the numeric value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// The outcome in which `mark` wins.
    pub fn win_for(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Mark, Outcome};

    #[test]
    fn outcome_order_matches_value() {
        assert!(Outcome::XWins < Outcome::Draw);
        assert!(Outcome::Draw < Outcome::OWins);
        assert_eq!(Outcome::XWins.value(), -1);
        assert_eq!(Outcome::Draw.value(), 0);
        assert_eq!(Outcome::OWins.value(), 1);
    }

    #[test]
    fn marks_alternate() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert!(Mark::O.is_maximizing());
        assert!(!Mark::X.is_maximizing());
        assert_eq!(Outcome::win_for(Mark::X), Outcome::XWins);
        assert_eq!(Outcome::win_for(Mark::O), Outcome::OWins);
    }
}
