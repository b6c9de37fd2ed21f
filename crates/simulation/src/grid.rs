use bevy::prelude::*;

use crate::config::GRID_SIZE;
use crate::structures::StructureKind;

/// One cell of the plant floor. Occupancy is mirrored between the entity
/// reference (for the behavior systems) and the kind tag (for cheap
/// grid-local passes like conductivity lookup and the overview map).
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    pub structure_id: Option<Entity>,
    pub kind: Option<StructureKind>,
    /// Credits paid when the occupant was built; 0 while empty.
    pub price_paid: i64,
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        self.structure_id.is_some()
    }

    /// Heat flow across this cell's boundary is scaled by this factor.
    pub fn conductivity(&self) -> f32 {
        self.kind.map_or(1.0, StructureKind::conductivity)
    }

    pub fn blocks_heat(&self) -> bool {
        self.kind.is_some_and(StructureKind::is_insulating)
    }
}

#[derive(Resource)]
pub struct PlantGrid {
    pub cells: Vec<Cell>,
    pub width: usize,
    pub height: usize,
}

impl Default for PlantGrid {
    fn default() -> Self {
        Self::new(GRID_SIZE, GRID_SIZE)
    }
}

impl PlantGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Returns up to 4 cardinal neighbors and the count of valid entries.
    /// Use `&result[..count]` to iterate over valid neighbors.
    pub fn neighbors4(&self, x: usize, y: usize) -> ([(usize, usize); 4], usize) {
        let mut result = [(0, 0); 4];
        let mut count = 0;
        if x > 0 {
            result[count] = (x - 1, y);
            count += 1;
        }
        if x + 1 < self.width {
            result[count] = (x + 1, y);
            count += 1;
        }
        if y > 0 {
            result[count] = (x, y - 1);
            count += 1;
        }
        if y + 1 < self.height {
            result[count] = (x, y + 1);
            count += 1;
        }
        (result, count)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Clear every cell. Despawning the referenced entities is the caller's
    /// responsibility.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
