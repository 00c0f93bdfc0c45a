//! Script Kit Macros - text snippets driven by a single-line launcher query
//!
//! Store short text fragments under a key, find them by substring, and drop
//! the match back into the launcher query. The query grammar, matching and
//! ranking live here; the launcher UI is reached through [`host::HostApi`].

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod help;
pub mod host;
pub mod logging;
pub mod macros;
pub mod relative_time;
pub mod results;

pub use command::{Command, Query};
pub use dispatcher::Dispatcher;
pub use error::{MacroError, Result};
pub use macros::{Macro, MacroStore};
pub use results::{ActionOutcome, ResultAction, ResultItem};
