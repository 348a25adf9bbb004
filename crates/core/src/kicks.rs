//! Wall kick tables
//!
//! A rotation that collides in place is retried at each offset of its transition's
//! kick list, in order. Offsets are (dx, dy) with dy growing downward, so a negative
//! dy lifts the piece. O never kicks; I has its own table; J, L, S, T and Z share one.
//! Transitions without an entry (a half turn, or no turn at all) only try the identity.

use crate::types::{PieceKind, Rotation};

/// Translation tried during a rotation: (dx, dy)
pub type Offset = (i8, i8);

/// Kick lists indexed by `[from.index()][to.index()]`
pub type KickTable = [[&'static [Offset]; 4]; 4];

const IDENTITY: &[Offset] = &[(0, 0)];

const JLSTZ_0_1: &[Offset] = &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_1_0: &[Offset] = &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)];
const JLSTZ_1_2: &[Offset] = &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)];
const JLSTZ_2_1: &[Offset] = &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)];
const JLSTZ_2_3: &[Offset] = &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)];
const JLSTZ_3_2: &[Offset] = &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_3_0: &[Offset] = &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];
const JLSTZ_0_3: &[Offset] = &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)];

const I_0_1: &[Offset] = &[(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)];
const I_1_0: &[Offset] = &[(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)];
const I_1_2: &[Offset] = &[(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)];
const I_2_1: &[Offset] = &[(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)];
const I_2_3: &[Offset] = &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)];
const I_3_2: &[Offset] = &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)];
const I_3_0: &[Offset] = &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)];
const I_0_3: &[Offset] = &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    [IDENTITY, JLSTZ_0_1, IDENTITY, JLSTZ_0_3],
    [JLSTZ_1_0, IDENTITY, JLSTZ_1_2, IDENTITY],
    [IDENTITY, JLSTZ_2_1, IDENTITY, JLSTZ_2_3],
    [JLSTZ_3_0, IDENTITY, JLSTZ_3_2, IDENTITY],
];

/// I piece kick table (different from JLSTZ)
const I_KICKS: KickTable = [
    [IDENTITY, I_0_1, IDENTITY, I_0_3],
    [I_1_0, IDENTITY, I_1_2, IDENTITY],
    [IDENTITY, I_2_1, IDENTITY, I_2_3],
    [I_3_0, IDENTITY, I_3_2, IDENTITY],
];

/// O piece has no kicks
const O_KICKS: KickTable = [[IDENTITY; 4]; 4];

/// Get kick table for a piece kind
pub fn get_kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Candidate offsets for rotating `kind` from `from` to `to`, in priority order
pub fn kick_offsets(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [Offset] {
    get_kick_table(kind)[from.index()][to.index()]
}
