/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Step-budget type: the maximum path length handed to the solver.
pub type StepCount = u16;

/// Integer type shared by the text format and the solver board exchange.
pub type Wire = i32;

/// Two-dimensional coordinates `(row, column)`, 0-based.
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
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
