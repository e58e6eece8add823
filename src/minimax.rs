use crate::board::{Board, Mark, Outcome};
use crate::search_result::{AnalysisNode, SearchResult};
use ego_tree::Tree;
use tracing::trace;

/// Finds the minimax value of `board` and the move that achieves it.
///
/// `mark_to_place` is put into every empty cell in turn, and the search recurses with
/// the opposite mark and role. When `maximizing`, the greatest value wins, otherwise
/// the least. Ties keep the first move in generation order.
///
/// The board is mutated during the search but is restored before returning.
/// Calling this on a board that is full or already won returns the terminal value
/// with no move.
pub fn search<B: Board>(
    board: &mut B,
    mark_to_place: Mark,
    maximizing: bool,
) -> SearchResult<B::Move> {
    let mut visited = 0u64;
    let result = search_node(board, mark_to_place, maximizing, &mut visited);
    trace!(
        visited,
        outcome = ?result.outcome,
        mark = %mark_to_place,
        maximizing,
        "minimax search finished"
    );
    result
}

/// Searches for `mark`, taking the role that mark plays: `O` maximizes, `X` minimizes.
pub fn best_move<B: Board>(board: &mut B, mark: Mark) -> SearchResult<B::Move> {
    search(board, mark, mark.is_maximizing())
}

/// Builds a tree describing the principal variation from `board`.
///
/// The root holds the value of the position. Its children hold every candidate move
/// with the value of the position it leads to, and the child the search prefers is
/// expanded the same way until the game is over. The board is restored before
/// returning.
pub fn analyze<B: Board>(
    board: &mut B,
    mark_to_place: Mark,
    maximizing: bool,
) -> Tree<AnalysisNode<B::Move>> {
    let target = search(board, mark_to_place, maximizing).outcome;
    let mut tree = Tree::new(AnalysisNode {
        played: None,
        outcome: target,
    });
    let mut current = tree.root().id();
    let mut line = Vec::new();
    let mut mark = mark_to_place;
    let mut maximizing = maximizing;

    while terminal_outcome(board).is_none() {
        let mut candidates = Vec::new();
        for b_move in board.available_moves() {
            board.place(b_move, mark);
            let child = search(board, mark.opponent(), !maximizing);
            board.clear(b_move);
            candidates.push((b_move, child.outcome));
        }

        let mut chosen = None;
        if let Some(mut node) = tree.get_mut(current) {
            for (b_move, outcome) in candidates {
                let child_id = node
                    .append(AnalysisNode {
                        played: Some((mark, b_move)),
                        outcome,
                    })
                    .id();
                if chosen.is_none() && outcome == target {
                    chosen = Some((child_id, b_move));
                }
            }
        }

        let Some((child_id, b_move)) = chosen else {
            break;
        };
        board.place(b_move, mark);
        line.push(b_move);
        current = child_id;
        mark = mark.opponent();
        maximizing = !maximizing;
    }

    for b_move in line.into_iter().rev() {
        board.clear(b_move);
    }
    tree
}

/// Returns the moves along the line `analyze` followed, starting at the root.
pub fn principal_variation<M: Copy>(tree: &Tree<AnalysisNode<M>>) -> Vec<(Mark, M)> {
    let target = tree.root().value().outcome;
    let mut line = Vec::new();
    let mut node = tree.root();
    while let Some(next) = node
        .children()
        .find(|child| child.value().outcome == target)
    {
        if let Some(played) = next.value().played {
            line.push(played);
        }
        node = next;
    }
    line
}

/// X's win is checked before O's, and both before the draw.
fn terminal_outcome<B: Board>(board: &B) -> Option<Outcome> {
    if board.has_won(Mark::X) {
        Some(Outcome::XWins)
    } else if board.has_won(Mark::O) {
        Some(Outcome::OWins)
    } else if board.is_draw() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

fn search_node<B: Board>(
    board: &mut B,
    mark: Mark,
    maximizing: bool,
    visited: &mut u64,
) -> SearchResult<B::Move> {
    *visited += 1;
    if let Some(outcome) = terminal_outcome(board) {
        return SearchResult::terminal(outcome);
    }

    let mut best: Option<(Outcome, B::Move)> = None;
    for b_move in board.available_moves() {
        board.place(b_move, mark);
        let child = search_node(board, mark.opponent(), !maximizing, visited);
        board.clear(b_move);

        let improves = match best {
            None => true,
            Some((value, _)) if maximizing => child.outcome > value,
            Some((value, _)) => child.outcome < value,
        };
        if improves {
            best = Some((child.outcome, b_move));
        }
    }

    match best {
        Some((outcome, b_move)) => SearchResult {
            outcome,
            best_move: Some(b_move),
        },
        // a board with no moves is full, which the terminal check already covers
        None => SearchResult::terminal(Outcome::Draw),
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Mark, Outcome};
    use crate::boards::tic_tac_toe::{Position, TicTacToeBoard};
    use crate::minimax::{analyze, best_move, principal_variation, search};

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn x_completes_top_row() {
        // arrange
        let mut board = TicTacToeBoard::from_rows([[X, X, E], [O, O, E], [E, E, E]]);

        // act
        let result = search(&mut board, Mark::X, false);

        // assert
        assert_eq!(result.outcome, Outcome::XWins);
        assert_eq!(result.outcome.value(), -1);
        assert_eq!(result.best_move, Some(Position::new(0, 2)));
    }

    #[test]
    fn o_completes_middle_column() {
        let mut board = TicTacToeBoard::from_rows([[X, O, X], [X, O, O], [E, E, E]]);
        let result = search(&mut board, Mark::O, true);
        assert_eq!(result.outcome, Outcome::OWins);
        assert_eq!(result.best_move, Some(Position::new(2, 1)));
    }

    #[test]
    fn equal_values_keep_first_cell() {
        // (0,2) loses for X, (1,2) and (2,0) both win; the earlier one is returned
        let mut board = TicTacToeBoard::from_rows([[X, O, E], [X, X, E], [E, O, O]]);
        let result = search(&mut board, Mark::X, false);
        assert_eq!(result.outcome, Outcome::XWins);
        assert_eq!(result.best_move, Some(Position::new(1, 2)));
    }

    #[test]
    fn empty_board_is_a_draw_and_picks_corner() {
        let mut board = TicTacToeBoard::new();
        let result = search(&mut board, Mark::O, true);
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.best_move, Some(Position::new(0, 0)));
    }

    #[test]
    fn terminal_boards_return_no_move() {
        let mut x_won = TicTacToeBoard::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(
            search(&mut x_won, Mark::O, true),
            crate::search_result::SearchResult::terminal(Outcome::XWins)
        );

        let mut o_won = TicTacToeBoard::from_rows([[X, X, O], [X, O, E], [O, E, E]]);
        let result = search(&mut o_won, Mark::X, false);
        assert_eq!(result.outcome, Outcome::OWins);
        assert!(result.is_terminal());

        let mut full = TicTacToeBoard::from_rows([[X, X, O], [O, O, X], [X, X, O]]);
        let result = search(&mut full, Mark::O, true);
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn search_leaves_board_untouched() {
        let mut board = TicTacToeBoard::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let before = board;
        let first = search(&mut board, Mark::O, true);
        assert_eq!(board, before);
        let second = search(&mut board, Mark::O, true);
        assert_eq!(first, second);
    }

    #[test]
    fn best_move_derives_role_from_mark() {
        let mut board = TicTacToeBoard::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(best_move(&mut board, Mark::X), search(&mut board, Mark::X, false));

        // blocking at (0,2) forks (1,2) and (2,0), so it wins as surely as (1,2) and comes first
        let result = best_move(&mut board, Mark::O);
        assert_eq!(result.outcome, Outcome::OWins);
        assert_eq!(result.best_move, Some(Position::new(0, 2)));
    }

    #[test]
    fn analysis_follows_principal_variation() {
        // arrange
        let mut board = TicTacToeBoard::from_rows([[X, O, X], [X, O, O], [E, E, E]]);
        let before = board;

        // act
        let tree = analyze(&mut board, Mark::O, true);

        // assert
        assert_eq!(board, before);
        let root = tree.root();
        assert_eq!(root.value().outcome, Outcome::OWins);
        assert_eq!(root.value().played, None);
        let children: Vec<_> = root.children().map(|c| *c.value()).collect();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].played, Some((Mark::O, Position::new(2, 0))));
        assert_eq!(children[0].outcome, Outcome::Draw);
        assert_eq!(children[1].played, Some((Mark::O, Position::new(2, 1))));
        assert_eq!(children[1].outcome, Outcome::OWins);
        assert_eq!(
            principal_variation(&tree),
            vec![(Mark::O, Position::new(2, 1))]
        );
    }

    #[test]
    fn analysis_of_terminal_board_is_a_single_node() {
        let mut board = TicTacToeBoard::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let tree = analyze(&mut board, Mark::O, true);
        assert_eq!(tree.root().value().outcome, Outcome::XWins);
        assert!(tree.root().children().next().is_none());
        assert!(principal_variation(&tree).is_empty());
    }

    #[test]
    fn principal_variation_from_empty_board_ends_drawn() {
        let mut board = TicTacToeBoard::new();
        let tree = analyze(&mut board, Mark::X, false);
        let line = principal_variation(&tree);
        assert_eq!(line.len(), 9);
        assert_eq!(line[0], (Mark::X, Position::new(0, 0)));

        let mut played = TicTacToeBoard::new();
        for (mark, pos) in line {
            played.place(pos, mark);
        }
        assert!(played.is_draw());
        assert_eq!(played.winner(), None);
    }
}
