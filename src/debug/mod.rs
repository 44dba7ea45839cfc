//! Debugging aids for component trees.
//!
//! The combinators themselves never log. Wrap the layers you want to watch
//! with [`traced`] and install a subscriber with [`install_tracing`]:
//!
//! ```text
//! CASCADE_LOG=trace cargo run
//! ```

pub mod logging;
mod traced;

pub use logging::{LOG_ENV, install_tracing, install_tracing_with};
pub use traced::traced;
