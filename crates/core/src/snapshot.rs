//! Read-only view of a game for renderers and observers.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::types::{GameMode, GameStatus, LastClear, PieceKind, NEXT_QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub status: GameStatus,
    pub board: Board,
    pub active: ActivePiece,
    pub ghost: ActivePiece,
    pub hold: Option<PieceKind>,
    pub hold_used: bool,
    pub next_queue: [PieceKind; NEXT_QUEUE_LEN],
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub elapsed_ms: u32,
    pub gravity_ms: u32,
    pub last_clear: LastClear,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Cell contents with the active piece drawn over the board, row by row.
    ///
    /// Cells of the piece above the playfield are dropped.
    pub fn composited(&self) -> Board {
        let mut board = self.board;
        board.merge(&self.active.cells(), self.active.kind);
        board
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let active = ActivePiece::spawn(PieceKind::I);
        Self {
            mode: GameMode::Endless,
            status: GameStatus::Playing,
            board: Board::new(),
            active,
            ghost: active,
            hold: None,
            hold_used: false,
            next_queue: [PieceKind::I; NEXT_QUEUE_LEN],
            score: 0,
            lines: 0,
            level: 1,
            elapsed_ms: 0,
            gravity_ms: 0,
            last_clear: LastClear::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::with_seed(GameMode::TimeLimit, 8);
        let snap = state.snapshot();

        assert_eq!(snap.mode, GameMode::TimeLimit);
        assert!(snap.playable());
        assert_eq!(snap.active, state.active());
        assert_eq!(snap.ghost, state.ghost());
        assert_eq!(snap.next_queue.to_vec(), Vec::from(state.next_queue().clone()));
        assert_eq!(snap.gravity_ms, 1000);
        assert_eq!(snap.level, 1);
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut state = GameState::with_seed(GameMode::Endless, 8);
        let mut snap = GameSnapshot::default();
        state.snapshot_into(&mut snap);
        state.hard_drop();
        state.snapshot_into(&mut snap);
        assert_eq!(snap, state.snapshot());
        assert_eq!(snap.board.filled_count(), 4);
    }

    #[test]
    fn test_composited_draws_active_piece() {
        let mut state = GameState::with_seed(GameMode::Endless, 8);
        for _ in 0..3 {
            state.soft_drop_step(false);
        }
        let snap = state.snapshot();
        assert_eq!(snap.board.filled_count(), 0);
        assert_eq!(snap.composited().filled_count(), 4);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameState::with_seed(GameMode::Endless, 2).snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
