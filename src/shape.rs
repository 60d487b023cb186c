use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifies one footprint in the shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Square,
    LineHorizontal,
    LineVertical,
    Z,
    ReverseZ,
    T,
    L,
    ReverseL,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Square,
        ShapeKind::LineHorizontal,
        ShapeKind::LineVertical,
        ShapeKind::Z,
        ShapeKind::ReverseZ,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::ReverseL,
    ];

    fn matrix(self) -> &'static [&'static [u8]] {
        match self {
            ShapeKind::Square => &[&[1, 1], &[1, 1]],
            ShapeKind::LineHorizontal => &[&[1, 1, 1, 1]],
            ShapeKind::LineVertical => &[&[1], &[1], &[1], &[1]],
            ShapeKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            ShapeKind::ReverseZ => &[&[0, 1, 1], &[1, 1, 0]],
            ShapeKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            ShapeKind::L => &[&[1, 1], &[1, 0]],
            ShapeKind::ReverseL => &[&[1, 1], &[0, 1]],
        }
    }
}

/// An immutable polyomino footprint.
///
/// Rows may be jagged. Only cells equal to 1 are part of the footprint;
/// their `(row, col)` offsets are cached at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    rows: Vec<Vec<u8>>,
    cells: Vec<(u8, u8)>,
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        let rows: Vec<Vec<u8>> = kind.matrix().iter().map(|row| row.to_vec()).collect();
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == 1)
                    .map(move |(c, _)| (r as u8, c as u8))
            })
            .collect();

        Self { kind, rows, cells }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Raw 0/1 matrix, row by row.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Filled cells as `(row, col)` offsets from the top-left corner.
    pub fn cells(&self) -> &[(u8, u8)] {
        &self.cells
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }
}

static CATALOG: Lazy<Vec<Shape>> =
    Lazy::new(|| ShapeKind::ALL.iter().map(|&kind| Shape::new(kind)).collect());

/// Every shape the game can spawn, in catalog order.
pub fn all_shapes() -> &'static [Shape] {
    &CATALOG
}

/// Looks up the catalog entry for `kind`.
pub fn shape_of(kind: ShapeKind) -> &'static Shape {
    // CATALOG is built from ShapeKind::ALL, which follows declaration order.
    &CATALOG[kind as usize]
}

/// Uniform pick among catalog entries.
pub fn random_shape<R: Rng>(rng: &mut R) -> &'static Shape {
    let shapes = all_shapes();
    &shapes[rng.random_range(0..shapes.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn catalog_has_eight_shapes_in_declared_order() {
        let kinds: Vec<ShapeKind> = all_shapes().iter().map(Shape::kind).collect();

        assert_eq!(kinds, ShapeKind::ALL.to_vec());
    }

    #[test]
    fn shape_of_returns_the_matching_entry() {
        for kind in ShapeKind::ALL {
            assert_eq!(shape_of(kind).kind(), kind);
        }
    }

    #[test]
    fn cells_skip_zero_entries() {
        let z = shape_of(ShapeKind::Z);

        assert_eq!(z.cells(), &[(0, 0), (0, 1), (1, 1), (1, 2)]);
        assert_eq!(z.width(), 3);
        assert_eq!(z.height(), 2);
    }

    #[test]
    fn every_shape_has_at_least_three_cells() {
        // A single free cell must never be enough to keep the game going.
        assert!(all_shapes().iter().all(|shape| shape.area() >= 3));
    }

    #[test]
    fn vertical_line_is_four_rows_of_one() {
        let line = shape_of(ShapeKind::LineVertical);

        assert_eq!(line.rows(), &[vec![1u8], vec![1], vec![1], vec![1]]);
        assert_eq!(line.width(), 1);
        assert_eq!(line.height(), 4);
    }

    #[test]
    fn random_shape_eventually_draws_every_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = Vec::new();

        for _ in 0..500 {
            let kind = random_shape(&mut rng).kind();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }

        assert_eq!(seen.len(), ShapeKind::ALL.len());
    }
}
