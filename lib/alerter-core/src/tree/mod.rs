//! The host's render tree, as far as the alert controller needs to see it.
//!
//! Parents own their children through [`NodeRef`]s; children point back at their
//! parent through a [`ParentRef`] so that dropping a subtree never leaks a cycle.

pub use container::*;
pub use view::*;

use crate::host::UiTask;
use std::rc::{Rc, Weak};
use std::sync::atomic::AtomicU64;
use std::time::Instant;

mod container;
mod view;

pub type NodeId = u64;
pub type NodeRef = Rc<dyn Node>;
pub type ContainerRef = Rc<Container>;
pub type ParentRef = Weak<Container>;

pub(crate) static NODE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable tag used to find nodes without holding on to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeMarker(&'static str);

impl NodeMarker {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Carried by every alert's background node.
pub const ALERT_MARKER: NodeMarker = NodeMarker::new("alert_background");

pub trait Node {
    fn id(&self) -> NodeId;

    fn marker(&self) -> Option<NodeMarker> {
        None
    }

    fn parent(&self) -> Option<ContainerRef>;

    fn set_parent(&self, parent: Option<ParentRef>);

    /// True when the node hangs off a root that is attached to a live window.
    fn is_attached_to_window(&self) -> bool {
        self.parent()
            .is_some_and(|parent| parent.is_attached_to_window())
    }

    fn on_attached_to_window(&self) {}

    fn on_detached_from_window(&self) {}

    /// Called once per UI turn while the node is in an attached tree.
    fn on_frame(&self, _now: Instant) {}

    fn as_container(self: Rc<Self>) -> Option<ContainerRef> {
        None
    }

    fn as_overlay(self: Rc<Self>) -> Option<Rc<dyn OverlayNode>> {
        None
    }
}

impl std::fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id())
            .field("marker", &self.marker())
            .finish()
    }
}

/// A node that can be faded out and unlinked by the alert controller.
pub trait OverlayNode: Node {
    /// Animates the node to fully transparent, then runs `on_end`.
    fn fade_out_then(&self, on_end: UiTask);

    /// Removes the node from its parent. Returns false if it had none.
    fn detach_from_parent(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.remove_child_by_id(self.id()),
            None => false,
        }
    }
}
