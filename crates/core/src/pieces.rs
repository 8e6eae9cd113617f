//! Pieces module - tetromino shape tables and spawn placement
//!
//! Each kind has four rotation states, each a set of four cell offsets from
//! the piece origin. Rotation cycles clockwise through the states with no
//! wall kicks: a rotation either fits at the current origin or is rejected.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i16, i16);

/// Shape of a piece - 4 cell offsets from the piece origin
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

/// I piece shapes (two distinct states)
fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (2, 0), (3, 0)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (0, 2), (0, 3)],
    }
}

/// O piece shapes (same for all rotations)
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// T piece shapes
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (2, 0), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 1)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 0)],
        Rotation::West => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

/// S piece shapes (two distinct states)
fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 1), (1, 1), (1, 0), (2, 0)],
        Rotation::East | Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece shapes (two distinct states)
fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North | Rotation::South => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East | Rotation::West => [(1, 0), (1, 1), (0, 1), (0, 2)],
    }
}

/// J piece shapes
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 0)],
        Rotation::West => [(2, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// L piece shapes
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(0, 0), (1, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 0)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (2, 2)],
    }
}

/// Width of the piece's bounding box in cells
///
/// Measured between the leftmost and rightmost occupied columns, so leading
/// empty columns in the shape table do not count.
pub fn bounding_width(kind: PieceKind, rotation: Rotation) -> i16 {
    let (min_x, max_x) = shape(kind, rotation)
        .iter()
        .fold((i16::MAX, i16::MIN), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        });
    max_x - min_x + 1
}

/// Spawn column for a kind: centered horizontally in its spawn rotation
pub fn spawn_x(kind: PieceKind, field_width: u8) -> i16 {
    let width = field_width as i16;
    (width - bounding_width(kind, Rotation::North)).div_euclid(2)
}
