//! Port traits (interfaces)
//!
//! These traits define the boundaries between the pipeline and the user
//! interface. Adapters implement them for a console, tests, or a GUI shell.

pub mod plot;
pub mod prompt;

pub use plot::*;
pub use prompt::*;
