use crate::grid::OccupancyGrid;

/// Storage for the guest roster. Implemented by the store crate.
pub trait GuestRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write every booking currently in the grid, replacing what was stored.
    fn save(&self, grid: &OccupancyGrid) -> Result<(), Self::Error>;

    /// Rebuild a grid from storage. Missing storage yields an empty grid.
    fn load(&self) -> Result<OccupancyGrid, Self::Error>;

    /// Drop every stored booking.
    fn clear(&self) -> Result<(), Self::Error>;
}
