use tracing::{debug, info, trace};

use super::player::Seats;
use super::{Board, Cell, Dimensions, Player, PlayerId};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// What a call to [`GameSession::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Piece landed, game continues with the other player.
    Placed { row: usize, column: usize },
    /// Piece landed and completed a line for `player`.
    Won {
        row: usize,
        column: usize,
        player: PlayerId,
    },
    /// Piece landed in the last empty cell without completing a line.
    Tied { row: usize, column: usize },
    /// Nothing changed.
    Ignored,
}

impl MoveResult {
    pub fn is_ignored(self) -> bool {
        self == MoveResult::Ignored
    }

    /// Where the piece landed, if one was placed
    pub fn position(self) -> Option<(usize, usize)> {
        match self {
            MoveResult::Placed { row, column }
            | MoveResult::Won { row, column, .. }
            | MoveResult::Tied { row, column } => Some((row, column)),
            MoveResult::Ignored => None,
        }
    }

    /// Whether this move ended the game
    pub fn ends_game(self) -> bool {
        matches!(self, MoveResult::Won { .. } | MoveResult::Tied { .. })
    }
}

/// One game from first move to win or tie.
///
/// `A` is an opaque per-player attribute (a colour, a name) handed back
/// untouched. A finished session stays finished; start a new one for a
/// rematch.
#[derive(Debug, Clone)]
pub struct GameSession<A> {
    board: Board,
    players: Seats<A>,
    active: PlayerId,
    last_mover: Option<PlayerId>,
    status: GameStatus,
    move_count: usize,
}

impl<A> GameSession<A> {
    /// Create a session on a standard 6x7 board
    pub fn new(first: A, second: A) -> Self {
        Self::with_dimensions(first, second, Dimensions::default())
    }

    pub fn with_dimensions(first: A, second: A, dims: Dimensions) -> Self {
        GameSession {
            board: Board::new(dims),
            players: Seats::new(first, second),
            active: PlayerId::One,
            last_mover: None,
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> Dimensions {
        self.board.dimensions()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The player to move, or the winner once the game is won. `None` after a tie.
    pub fn active_player(&self) -> Option<&Player<A>> {
        match self.status {
            GameStatus::Tied => None,
            GameStatus::InProgress | GameStatus::Won(_) => Some(self.players.get(self.active)),
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player<A> {
        self.players.get(id)
    }

    pub fn players(&self) -> &[Player<A>; 2] {
        self.players.as_slice()
    }

    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn cell_at(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    /// Pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Row a piece dropped in `column` would land in; `None` if the column is
    /// full or does not exist.
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        self.board.landing_row(column)
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Whether the player who moved last owns a line of four anywhere on the
    /// board. Scans the whole board; [`GameSession::apply_move`] uses the
    /// cheaper check around the piece it just placed.
    pub fn check_for_win(&self) -> bool {
        self.last_mover
            .is_some_and(|player| self.board.has_four_in_a_row(player))
    }

    /// Drop a piece for the active player, or explain why not.
    ///
    /// On error nothing is changed.
    pub fn try_apply_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::SessionTerminated);
        }

        let player = self.active;
        let row = self.board.drop_piece(column, player)?;
        self.move_count += 1;
        self.last_mover = Some(player);

        if self.board.check_win(row, column) {
            self.status = GameStatus::Won(player);
            info!(player = player.number(), row, column, moves = self.move_count, "game won");
            return Ok(MoveResult::Won { row, column, player });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(row, column, moves = self.move_count, "game tied");
            return Ok(MoveResult::Tied { row, column });
        }

        self.active = player.other();
        debug!(player = player.number(), row, column, "piece placed");
        Ok(MoveResult::Placed { row, column })
    }

    /// Drop a piece for the active player. Moves after the game ended, into
    /// a full column, or into a column that does not exist come back as
    /// [`MoveResult::Ignored`] and change nothing.
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        match self.try_apply_move(column) {
            Ok(result) => result,
            Err(err) => {
                trace!(column, %err, "move ignored");
                MoveResult::Ignored
            }
        }
    }
}
