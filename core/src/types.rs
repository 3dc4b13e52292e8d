/// Single coordinate axis, used for board width, height and positions.
pub type Coord = u8;

/// Count type for mines, flags and total cells. Wide enough for a full 255×255 board.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Offsets of the 8-neighborhood, the center excluded.
const NEIGHBOR_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shifts `coords` by `delta`, yielding nothing when the result leaves `[0, size)`.
fn offset(coords: Coord2, delta: (i8, i8), size: Coord2) -> Option<Coord2> {
    let x = coords.0.checked_add_signed(delta.0)?;
    let y = coords.1.checked_add_signed(delta.1)?;
    (x < size.0 && y < size.1).then_some((x, y))
}

/// Iterates the in-bounds cells at Chebyshev distance exactly 1 from `center`.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord2,
    next_delta: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            next_delta: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = NEIGHBOR_DELTAS.get(self.next_delta) {
            self.next_delta += 1;
            if let Some(coords) = offset(self.center, delta, self.size) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(NEIGHBOR_DELTAS.len() - self.next_delta))
    }
}

/// Iterates every coordinate of a `size` board, column by column.
pub fn iter_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    let (width, height) = size;
    (0..width).flat_map(move |x| (0..height).map(move |y| (x, y)))
}
