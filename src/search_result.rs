use crate::board::{Mark, Outcome};

/// The answer of a minimax search: the value of the position and the move that
/// achieves it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct SearchResult<M> {
    /// The minimax value of the searched position.
    pub outcome: Outcome,
    /// The first move, in generation order, that achieves `outcome`.
    /// `None` when the position was already terminal.
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    /// A result for a position that is already decided.
    pub fn terminal(outcome: Outcome) -> Self {
        Self {
            outcome,
            best_move: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.best_move.is_none()
    }
}

/// A node of the analysis tree built by `minimax::analyze`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct AnalysisNode<M> {
    /// The move that led to this node's position. `None` for the root.
    pub played: Option<(Mark, M)>,
    /// The minimax value of this node's position.
    pub outcome: Outcome,
}
