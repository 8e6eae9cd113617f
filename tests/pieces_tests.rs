//! Pieces module tests - shape tables and spawn placement

use blockfall::core::pieces::{bounding_width, shape, spawn_x};
use blockfall::types::{PieceKind, Rotation};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = shape(PieceKind::I, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (2, 0), (3, 0)]);

    let east = shape(PieceKind::I, Rotation::East);
    assert_eq!(east, [(0, 0), (0, 1), (0, 2), (0, 3)]);

    // I only has two distinct states
    assert_eq!(shape(PieceKind::I, Rotation::South), north);
    assert_eq!(shape(PieceKind::I, Rotation::West), east);
}

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all rotations
    let north = shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (0, 1), (1, 1)]);

    assert_eq!(shape(PieceKind::O, Rotation::East), north);
    assert_eq!(shape(PieceKind::O, Rotation::South), north);
    assert_eq!(shape(PieceKind::O, Rotation::West), north);
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        shape(PieceKind::T, Rotation::North),
        [(0, 0), (1, 0), (2, 0), (1, 1)]
    );
    assert_eq!(
        shape(PieceKind::T, Rotation::East),
        [(1, 0), (1, 1), (1, 2), (2, 1)]
    );
    assert_eq!(
        shape(PieceKind::T, Rotation::South),
        [(0, 1), (1, 1), (2, 1), (1, 0)]
    );
    assert_eq!(
        shape(PieceKind::T, Rotation::West),
        [(0, 1), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_s_piece_shapes() {
    let north = shape(PieceKind::S, Rotation::North);
    assert_eq!(north, [(0, 1), (1, 1), (1, 0), (2, 0)]);

    let east = shape(PieceKind::S, Rotation::East);
    assert_eq!(east, [(0, 0), (0, 1), (1, 1), (1, 2)]);

    assert_eq!(shape(PieceKind::S, Rotation::South), north);
    assert_eq!(shape(PieceKind::S, Rotation::West), east);
}

#[test]
fn test_z_piece_shapes() {
    let north = shape(PieceKind::Z, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (1, 1), (2, 1)]);

    let east = shape(PieceKind::Z, Rotation::East);
    assert_eq!(east, [(1, 0), (1, 1), (0, 1), (0, 2)]);

    assert_eq!(shape(PieceKind::Z, Rotation::South), north);
    assert_eq!(shape(PieceKind::Z, Rotation::West), east);
}

#[test]
fn test_j_piece_shapes() {
    assert_eq!(
        shape(PieceKind::J, Rotation::North),
        [(0, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        shape(PieceKind::J, Rotation::East),
        [(1, 0), (1, 1), (1, 2), (0, 2)]
    );
    assert_eq!(
        shape(PieceKind::J, Rotation::South),
        [(0, 1), (1, 1), (2, 1), (2, 0)]
    );
    assert_eq!(
        shape(PieceKind::J, Rotation::West),
        [(2, 0), (1, 0), (1, 1), (1, 2)]
    );
}

#[test]
fn test_l_piece_shapes() {
    assert_eq!(
        shape(PieceKind::L, Rotation::North),
        [(2, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        shape(PieceKind::L, Rotation::East),
        [(0, 0), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        shape(PieceKind::L, Rotation::South),
        [(0, 1), (1, 1), (2, 1), (0, 0)]
    );
    assert_eq!(
        shape(PieceKind::L, Rotation::West),
        [(1, 0), (1, 1), (1, 2), (2, 2)]
    );
}

// ============== Spawn Placement Tests ==============

#[test]
fn test_bounding_widths() {
    assert_eq!(bounding_width(PieceKind::I, Rotation::North), 4);
    assert_eq!(bounding_width(PieceKind::I, Rotation::East), 1);
    assert_eq!(bounding_width(PieceKind::O, Rotation::North), 2);
    assert_eq!(bounding_width(PieceKind::T, Rotation::North), 3);
    assert_eq!(bounding_width(PieceKind::S, Rotation::North), 3);
    assert_eq!(bounding_width(PieceKind::Z, Rotation::North), 3);
    assert_eq!(bounding_width(PieceKind::J, Rotation::North), 3);
    assert_eq!(bounding_width(PieceKind::L, Rotation::North), 3);
}

#[test]
fn test_bounding_width_measures_occupied_columns_only() {
    // Shapes whose cells sit in columns 1..=2 of the box are two wide.
    assert_eq!(bounding_width(PieceKind::T, Rotation::East), 2);
    assert_eq!(bounding_width(PieceKind::J, Rotation::West), 2);
    assert_eq!(bounding_width(PieceKind::L, Rotation::West), 2);

    // All four cells in one column.
    assert_eq!(bounding_width(PieceKind::I, Rotation::West), 1);
}

#[test]
fn test_spawn_x_centers_on_standard_field() {
    assert_eq!(spawn_x(PieceKind::I, 10), 3);
    assert_eq!(spawn_x(PieceKind::O, 10), 4);
    assert_eq!(spawn_x(PieceKind::T, 10), 3);
    assert_eq!(spawn_x(PieceKind::S, 10), 3);
    assert_eq!(spawn_x(PieceKind::Z, 10), 3);
    assert_eq!(spawn_x(PieceKind::J, 10), 3);
    assert_eq!(spawn_x(PieceKind::L, 10), 3);
}

// ============== Shape Consistency Tests ==============

#[test]
fn test_all_shapes_have_4_cells() {
    for kind in PieceKind::ALL {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            let cells = shape(kind, rotation);
            assert_eq!(cells.len(), 4, "{:?} {:?} should have 4 cells", kind, rotation);
        }
    }
}

#[test]
fn test_shape_bounds_reasonable() {
    // All shape coordinates should fit a 4x4 box
    for kind in PieceKind::ALL {
        for rotation in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            let cells = shape(kind, rotation);
            for (x, y) in cells.iter() {
                assert!(*x >= 0 && *x <= 3, "Shape coordinate out of bounds");
                assert!(*y >= 0 && *y <= 3, "Shape coordinate out of bounds");
            }
        }
    }
}
