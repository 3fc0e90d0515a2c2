//! Shape catalog - base cell offsets and rotation classes
//!
//! Pure data: each of the 8 shape kinds maps to a fixed ordered offset list
//! and a rotation class. The first offset in every list is the reference
//! point the rotation transform pivots around.

use arrayvec::ArrayVec;

use crate::types::{RotationClass, ShapeKind};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i8, i8);

/// Cell offsets of a shape (4 for tetrominoes, 1 for Dot)
pub type CellList = ArrayVec<CellOffset, 4>;

const O_CELLS: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const J_CELLS: [CellOffset; 4] = [(1, 1), (1, 0), (0, 2), (1, 2)];
const L_CELLS: [CellOffset; 4] = [(0, 1), (0, 0), (0, 2), (1, 2)];
const S_CELLS: [CellOffset; 4] = [(1, 1), (1, 0), (2, 0), (0, 1)];
const Z_CELLS: [CellOffset; 4] = [(1, 1), (0, 0), (1, 0), (2, 1)];
const T_CELLS: [CellOffset; 4] = [(1, 0), (0, 0), (2, 0), (1, 1)];
const I_CELLS: [CellOffset; 4] = [(1, 0), (0, 0), (2, 0), (3, 0)];
const DOT_CELLS: [CellOffset; 1] = [(0, 0)];

/// Get the base (unrotated) cell offsets for a shape kind
///
/// The first offset is the reference point. Total over the closed kind set,
/// no error paths.
pub fn cells_for(kind: ShapeKind) -> CellList {
    let cells: &[CellOffset] = match kind {
        ShapeKind::O => &O_CELLS,
        ShapeKind::J => &J_CELLS,
        ShapeKind::L => &L_CELLS,
        ShapeKind::S => &S_CELLS,
        ShapeKind::Z => &Z_CELLS,
        ShapeKind::T => &T_CELLS,
        ShapeKind::I => &I_CELLS,
        ShapeKind::Dot => &DOT_CELLS,
    };
    cells.iter().copied().collect()
}

/// Get the rotation class for a shape kind
pub fn rotation_class(kind: ShapeKind) -> RotationClass {
    match kind {
        ShapeKind::O | ShapeKind::Dot => RotationClass::None,
        ShapeKind::J | ShapeKind::L | ShapeKind::T => RotationClass::FourState,
        ShapeKind::S | ShapeKind::Z | ShapeKind::I => RotationClass::TwoState,
    }
}

/// Number of distinct rotation states for a shape kind
pub fn rotation_states(kind: ShapeKind) -> u8 {
    match rotation_class(kind) {
        RotationClass::None => 1,
        RotationClass::TwoState => 2,
        RotationClass::FourState => 4,
    }
}

/// Rotate cells 90 degrees clockwise around the reference point `r`
///
/// new_x = r.x + (r.y - c.y); new_y = r.y + (c.x - r.x)
/// `r` itself is a fixed point of this transform.
fn rotate_cw_in_place(cells: &mut [CellOffset], r: CellOffset) {
    for c in cells {
        *c = (r.0 + (r.1 - c.1), r.1 + (c.0 - r.0));
    }
}

/// Get the cell offsets for a shape kind at a given rotation index
///
/// The transform is always rebuilt from the base offsets, never composed
/// onto previously rotated cells, so repeated rotation cannot drift.
/// For `TwoState` kinds index 1 is one clockwise application; toggling back
/// to index 0 is the inverse by construction.
pub fn offsets_for(kind: ShapeKind, rotation_index: u8) -> CellList {
    let mut cells = cells_for(kind);
    let steps = rotation_index % rotation_states(kind);
    let r = cells[0];
    for _ in 0..steps {
        rotate_cw_in_place(&mut cells, r);
    }
    cells
}
