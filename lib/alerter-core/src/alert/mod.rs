//! The alert node and the draft configuration it is built from.

pub use config::{AlertButton, AlertConfig, Listener};
pub use style::*;
pub use view::{Alert, AlertPhase, AlertRef};

mod config;
mod style;
mod view;
