//! Core types: sides, per-side state, RNG, errors.

pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use error::{CatalogError, MatchError, PlayError};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{PlayerState, Resource, TOWER_WIN};
