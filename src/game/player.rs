use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Player,
    Computer,
}

impl Owner {
    /// Convert mover to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Owner::Player => Cell::Player,
            Owner::Computer => Cell::Computer,
        }
    }
}
