use serde::Deserialize;

/// Smallest grid a run will use; smaller requests are raised to this.
pub const MIN_GRID_SIZE: usize = 9;
/// Largest grid a run will use; larger requests are lowered to this.
pub const MAX_GRID_SIZE: usize = 1000;
/// Shortest frame interval in milliseconds.
pub const MIN_INTERVAL_MS: u32 = 50;
/// Largest output pixels per cell edge. With `MAX_GRID_SIZE` this keeps a
/// frame within `render::MAX_FRAME_PIXELS`.
pub const MAX_CELL_PX: usize = 8;

/// Top-left offset of the demo glider.
pub const GLIDER_OFFSET: (usize, usize) = (1, 1);

/// How the first generation is built. Exactly one per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitMode {
    #[default]
    Random,
    Glider,
}

/// All run parameters, shared by the CLI and the server.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Params {
    pub grid_size: usize,
    pub interval_ms: u32,
    /// Generations emitted after the initial grid.
    pub frames: usize,
    pub mode: InitMode,
    /// Fixed seed for random mode; a fresh one is drawn when unset.
    pub seed: Option<u64>,
    /// Output pixels per cell edge.
    pub cell_px: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            grid_size: 100,
            interval_ms: 50,
            frames: 50,
            mode: InitMode::Random,
            seed: None,
            cell_px: 4,
        }
    }
}

impl Params {
    /// Apply the caller-side limits on grid size, interval and cell size.
    pub fn clamped(mut self) -> Self {
        self.grid_size = self.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.interval_ms = self.interval_ms.max(MIN_INTERVAL_MS);
        self.cell_px = self.cell_px.clamp(1, MAX_CELL_PX);
        self
    }
}
