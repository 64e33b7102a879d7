use tracing::{debug, info};

use super::{Board, PlayerId, CONNECT, MAX_DIMENSION};
use crate::error::{MoveError, SetupError};

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

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// What a successful placement changed, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
    pub status: GameStatus,
}

/// One game: the grid, the two players' display attributes, whose turn it
/// is, and whether the game has ended.
///
/// `C` is whatever the caller uses to tell the players apart on screen
/// (usually a color). The engine only stores it and hands it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<C> {
    board: Board,
    players: [C; 2],
    active_player: PlayerId,
    status: GameStatus,
}

impl<C: Clone + PartialEq> GameState<C> {
    /// Create initial game state with `player1` to move
    pub fn create(
        height: usize,
        width: usize,
        player1: C,
        player2: C,
    ) -> Result<Self, SetupError> {
        if height < CONNECT || width < CONNECT {
            return Err(SetupError::BoardTooSmall { height, width });
        }
        if height > MAX_DIMENSION || width > MAX_DIMENSION {
            return Err(SetupError::BoardTooLarge {
                height,
                width,
                max: MAX_DIMENSION,
            });
        }
        if player1 == player2 {
            return Err(SetupError::IndistinctPlayers);
        }

        Ok(GameState {
            board: Board::new(height, width),
            players: [player1, player2],
            active_player: PlayerId::One,
            status: GameStatus::InProgress,
        })
    }

    /// Fresh game with the same players and dimensions
    pub fn reset(&self) -> Self {
        info!(
            height = self.height(),
            width = self.width(),
            "game reset"
        );
        GameState {
            board: Board::new(self.height(), self.width()),
            players: self.players.clone(),
            active_player: PlayerId::One,
            status: GameStatus::InProgress,
        }
    }
}

impl<C> GameState<C> {
    /// Get the player whose turn it is
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Display attribute of the player whose turn it is
    pub fn active_color(&self) -> &C {
        self.color_of(self.active_player)
    }

    pub fn color_of(&self, player: PlayerId) -> &C {
        &self.players[player.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }

    /// Columns that can still take a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `column` would land on
    pub fn find_drop_row(&self, column: usize) -> Result<usize, MoveError> {
        self.board.find_drop_row(column)
    }

    pub fn check_for_win(&self, player: PlayerId) -> bool {
        self.board.check_win(player)
    }

    pub fn check_full(&self) -> bool {
        self.board.is_full()
    }

    /// Coordinates of the winning line, if the game was won
    pub fn winning_line(&self) -> Option<[(usize, usize); CONNECT]> {
        self.status
            .winner()
            .and_then(|player| self.board.winning_line(player))
    }

    /// Drop the active player's piece into `column`.
    ///
    /// On error nothing changes. On success the piece is placed and the
    /// status is updated; the turn passes to the other player only if the
    /// game is still in progress.
    pub fn place_piece(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.active_player;
        let row = self.board.drop_piece(column, player)?;
        debug!(row, column, player = player.name(), "piece placed");

        // Win is checked first so a winning move that fills the board is a win
        if self.check_for_win(player) {
            self.status = GameStatus::Won(player);
            info!(player = player.name(), moves = self.move_count(), "game won");
        } else if self.check_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.move_count(), "game tied");
        } else {
            self.active_player = player.other();
        }

        Ok(Placement {
            row,
            column,
            player,
            status: self.status,
        })
    }
}

impl<C: Clone> GameState<C> {
    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState<C>, Placement), MoveError> {
        let mut next = self.clone();
        let placement = next.place_piece(column)?;
        Ok((next, placement))
    }
}
