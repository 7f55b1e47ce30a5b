//! Card data: definitions, instances, and catalogues.
//!
//! ## Structure
//!
//! - `definition` - immutable card records (id, color, cost, effect text)
//! - `instance` - a definition stamped with a unique in-play identity
//! - `catalog` - the ordered definition registry matches are built from
//! - `standard` - the built-in card set

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod standard;

pub use catalog::CardCatalog;
pub use definition::{CardColor, CardDefinition, CardId};
pub use instance::{CardInstance, InstanceId};
pub use standard::standard;
