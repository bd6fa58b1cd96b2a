mod coarse;
mod fine;
mod model;
mod ops;
pub mod params;

pub use coarse::coarse_flow;
pub use fine::fine_flow;
pub use model::{FlowFieldInit, FlowFieldInput, FlowFieldOutput};
pub use ops::{pad_bottom_reflect, warp};
