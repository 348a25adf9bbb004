//! Pieces module - tetromino geometry
//!
//! Each kind is four cells in a 4x4 reference frame at rotation state 0. Other
//! rotation states are derived by turning the whole frame, so every kind rotates
//! about the same frame center no matter how many of its 16 cells are filled.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece's frame origin: (dx, dy) = (column, row)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Side length of the reference frame, minus one.
const FRAME_MAX: i8 = 3;

const I_SHAPE: PieceShape = [(0, 1), (1, 1), (2, 1), (3, 1)];
const O_SHAPE: PieceShape = [(1, 1), (2, 1), (1, 2), (2, 2)];
const T_SHAPE: PieceShape = [(1, 1), (0, 2), (1, 2), (2, 2)];
const S_SHAPE: PieceShape = [(1, 1), (2, 1), (0, 2), (1, 2)];
const Z_SHAPE: PieceShape = [(0, 1), (1, 1), (1, 2), (2, 2)];
const J_SHAPE: PieceShape = [(0, 1), (0, 2), (1, 2), (2, 2)];
const L_SHAPE: PieceShape = [(2, 1), (0, 2), (1, 2), (2, 2)];

/// Cells of `kind` at rotation state 0
pub fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Turn one frame cell into rotation state `rotation`.
///
/// In (row, col) terms: state 1 maps to (col, 3-row), state 2 to (3-row, 3-col) and
/// state 3 to (3-col, row).
pub fn rotate_cell((x, y): MinoOffset, rotation: Rotation) -> MinoOffset {
    match rotation {
        Rotation::North => (x, y),
        Rotation::East => (FRAME_MAX - y, x),
        Rotation::South => (FRAME_MAX - x, FRAME_MAX - y),
        Rotation::West => (y, FRAME_MAX - x),
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    base_shape(kind).map(|cell| rotate_cell(cell, rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut shape: PieceShape) -> PieceShape {
        shape.sort();
        shape
    }

    #[test]
    fn test_base_shapes_fit_frame() {
        for kind in PieceKind::ALL {
            for (x, y) in base_shape(kind) {
                assert!((0..=FRAME_MAX).contains(&x));
                assert!((0..=FRAME_MAX).contains(&y));
            }
        }
    }

    #[test]
    fn test_i_turns_vertical_in_column_two() {
        assert_eq!(
            sorted(get_shape(PieceKind::I, Rotation::East)),
            [(2, 0), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_t_east_points_right() {
        // Stem on the right-hand side after a clockwise turn.
        assert_eq!(
            sorted(get_shape(PieceKind::T, Rotation::East)),
            [(1, 0), (1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn test_o_shape_is_rotation_invariant() {
        let north = sorted(get_shape(PieceKind::O, Rotation::North));
        for rotation in [Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(sorted(get_shape(PieceKind::O, rotation)), north);
        }
    }

    #[test]
    fn test_quarter_turns_compose() {
        for kind in PieceKind::ALL {
            for (x, y) in base_shape(kind) {
                let twice = rotate_cell(rotate_cell((x, y), Rotation::East), Rotation::East);
                assert_eq!(twice, rotate_cell((x, y), Rotation::South));
            }
        }
    }
}
