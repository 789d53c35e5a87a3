//! What the alert controller needs from the surface it shows alerts on.

pub use resources::*;
pub use turn_queue::TurnQueue;

use crate::tree::ContainerRef;
use std::rc::Rc;

pub mod headless;
mod resources;
mod turn_queue;

/// A deferred action run on the host's UI-update turn.
pub type UiTask = Box<dyn FnOnce()>;

/// The place an alert can be shown, typically a window.
///
/// The controller only ever holds a host weakly; implementors decide how long
/// the surface lives.
pub trait HostSurface {
    /// The top-level container alerts are appended to.
    fn root_container(&self) -> ContainerRef;

    /// Resolves resource ids for alerts built against this host.
    fn resources(&self) -> Rc<dyn ResourceResolver>;

    /// Queues `task` to run on the thread and turn that own the render tree.
    /// Must not run the task synchronously.
    fn post(&self, task: UiTask);
}
