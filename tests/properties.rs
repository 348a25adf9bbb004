//! Property tests for grid clearing, rotation, the bag and rejected actions.

use proptest::prelude::*;

use neon_tetris::core::board::Row;
use neon_tetris::core::pieces::{base_shape, rotate_cell};
use neon_tetris::core::{get_shape, BagRandomizer, Board, GameState};
use neon_tetris::types::{
    GameMode, PieceKind, Rotation, RotationDirection, BOARD_HEIGHT, BOARD_WIDTH,
};

const HEIGHT: usize = BOARD_HEIGHT as usize;
const WIDTH: usize = BOARD_WIDTH as usize;

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Rows that are full with some probability, random noise otherwise.
fn row_strategy() -> impl Strategy<Value = Row> {
    prop_oneof![
        1 => Just([Some(PieceKind::I); WIDTH]),
        3 => prop::array::uniform10(prop::option::of(kind_strategy())),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(row_strategy(), HEIGHT).prop_map(|rows| {
        let mut grid = [[None; WIDTH]; HEIGHT];
        for (dst, src) in grid.iter_mut().zip(rows) {
            *dst = src;
        }
        Board::from_rows(grid)
    })
}

fn is_full(row: &Row) -> bool {
    row.iter().all(|c| c.is_some())
}

fn rotation_strategy() -> impl Strategy<Value = Rotation> {
    (0usize..4).prop_map(Rotation::from_index)
}

fn sorted(mut cells: [(i8, i8); 4]) -> [(i8, i8); 4] {
    cells.sort();
    cells
}

proptest! {
    #[test]
    fn clearing_keeps_height_and_survivor_order(board in board_strategy()) {
        let clear = board.clear_full_rows();
        let survivors: Vec<Row> = board.rows().iter().filter(|r| !is_full(r)).copied().collect();
        let full = HEIGHT - survivors.len();

        prop_assert_eq!(clear.count(), full);
        prop_assert_eq!(clear.board.rows().len(), HEIGHT);

        // Empty padding on top, survivors in order below.
        for row in &clear.board.rows()[..full] {
            prop_assert!(row.iter().all(|c| c.is_none()));
        }
        prop_assert_eq!(&clear.board.rows()[full..], survivors.as_slice());

        if full == 0 {
            prop_assert_eq!(clear.board, board);
        }
    }

    #[test]
    fn rotating_then_inverting_restores_cells(kind in kind_strategy(), k in 0usize..4) {
        let turn = Rotation::from_index(k);
        let inverse = Rotation::from_index((4 - k) % 4);
        for cell in base_shape(kind) {
            prop_assert_eq!(rotate_cell(rotate_cell(cell, turn), inverse), cell);
        }
    }

    #[test]
    fn quarter_turns_compose_to_identity(kind in kind_strategy(), k in 0usize..4) {
        let quarter = |cells: [(i8, i8); 4]| cells.map(|c| rotate_cell(c, Rotation::East));
        let mut cells = base_shape(kind);
        for _ in 0..k {
            cells = quarter(cells);
        }
        prop_assert_eq!(sorted(cells), sorted(get_shape(kind, Rotation::from_index(k))));
        for _ in 0..(4 - k) % 4 {
            cells = quarter(cells);
        }
        prop_assert_eq!(cells, base_shape(kind));
    }

    #[test]
    fn clockwise_then_counter_clockwise_is_identity(
        kind in kind_strategy(),
        from in rotation_strategy(),
    ) {
        let there = from.rotate(RotationDirection::Clockwise);
        let back = there.rotate(RotationDirection::CounterClockwise);
        prop_assert_eq!(back, from);
        prop_assert_eq!(get_shape(kind, back), get_shape(kind, from));
    }

    #[test]
    fn every_bag_is_a_permutation(seed in any::<u64>(), bags in 1usize..8) {
        let mut bag = BagRandomizer::new(seed);
        for _ in 0..bags {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.next()).collect();
            drawn.sort_by_key(|k| k.as_str());
            let mut all = PieceKind::ALL.to_vec();
            all.sort_by_key(|k| k.as_str());
            prop_assert_eq!(drawn, all);
        }
    }

    #[test]
    fn rejected_actions_do_not_mutate(
        seed in any::<u64>(),
        script in prop::collection::vec(0u8..5, 1..60),
    ) {
        let mut state = GameState::with_seed(GameMode::Endless, seed);

        for op in script {
            let before = state.snapshot();
            let (accepted, is_player_action) = match op {
                0 => (state.move_piece(-1), true),
                1 => (state.move_piece(1), true),
                2 => (state.rotate(RotationDirection::Clockwise), true),
                3 => (state.rotate(RotationDirection::CounterClockwise), true),
                _ => (state.hard_drop(), false),
            };
            if is_player_action && !accepted {
                prop_assert_eq!(state.snapshot(), before);
            }
            prop_assert!(state.is_over() || state.can_place(&state.active()));
            if state.is_over() {
                break;
            }
        }
    }
}
