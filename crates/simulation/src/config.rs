/// Plant floor is a fixed square grid.
pub const GRID_SIZE: usize = 16;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Fixed logical timestep: 10 Hz. One `FixedUpdate` pass == one tick.
pub const TICK_SECONDS: f64 = 0.1;

/// Funds a new plant starts with.
pub const STARTING_FUNDS: i64 = 100;

/// Fraction of the originally paid price returned on demolition.
/// Applied as integer floor: `paid * REFUND_NUM / REFUND_DEN`.
pub const REFUND_NUM: i64 = 3;
pub const REFUND_DEN: i64 = 4;
