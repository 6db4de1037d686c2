pub mod bounds;
pub mod search;
pub mod trace;

pub use bounds::*;
pub use search::{calculate_bounds, AlphaBetaConfig, AlphaBetaContext, AlphaBetaSearch};
pub use trace::*;
