//! Pairwise outcome table for the help view.

use serde::Serialize;

use super::MoveSet;

/// Label of the top-left corner cell
const CORNER_LABEL: &str = "pc \\ user";

/// (N+1) x (N+1) grid of labels: row 0 and column 0 carry the move
/// names, every inner cell holds the outcome of (computer row, user
/// column). A pure projection of the dominance rule, no round state.
#[derive(Clone, Debug, Serialize)]
pub struct OutcomeMatrix {
    cells: Vec<Vec<String>>,
}

impl OutcomeMatrix {
    /// Materialize the full table for a move set
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let mut cells = vec![vec![String::new(); n + 1]; n + 1];
        cells[0][0] = CORNER_LABEL.to_string();

        for i in 1..=n {
            cells[0][i] = moves.name(i - 1).to_string();
            cells[i][0] = moves.name(i - 1).to_string();
            for j in 1..=n {
                let outcome = moves
                    .resolve(moves.name(i - 1), moves.name(j - 1))
                    .expect("both moves come from the set");
                cells[i][j] = outcome.as_str().to_string();
            }
        }

        Self { cells }
    }

    /// All rows, header row first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Table side length, move count plus the header
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}
