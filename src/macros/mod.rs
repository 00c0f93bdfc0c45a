//! Macro storage
//!
//! - `model` - the persisted `Macro` record
//! - `persistence` - load-all/save-all backends (JSON file by default)
//! - `store` - the in-memory collection with flush-on-write mutations

mod model;
mod persistence;
mod store;

pub use model::Macro;
pub use persistence::{JsonFilePersistence, MacroPersistence};
pub use store::MacroStore;
