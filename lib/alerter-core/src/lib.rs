//! Transient alert overlays for a host surface's render tree.
//!
//! An [`Alerter`] binds to a [`HostSurface`], collects configuration for a single
//! [`Alert`] and, on [`Alerter::show`], posts the attachment onto the host's UI turn.
//! At most one alert is live per host: creating a new one fades out and detaches
//! whatever alert is currently attached.

use thiserror::Error;

pub mod alert;
mod alerter;
mod animation;
pub mod config;
pub mod host;
pub mod logger;
pub mod paths;
pub mod tree;

pub use alert::{Alert, AlertConfig, AlertPhase, AlertRef};
pub use alerter::Alerter;
pub use config::{Config, ConfigError};
pub use host::{HostSurface, ResourceResolver, UiTask};
pub use tree::{Container, ContainerRef, Node, NodeMarker, NodeRef, OverlayNode, ALERT_MARKER};

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlerterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type AlerterResult<T> = Result<T, AlerterError>;
