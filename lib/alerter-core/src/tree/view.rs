use crate::tree::{ContainerRef, Node, NodeId, NodeMarker, ParentRef, NODE_ID_COUNTER};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::Ordering;

/// A plain leaf node: host content that sits next to an alert in the tree.
#[derive(Debug)]
pub struct ViewNode {
    id: NodeId,
    marker: Option<NodeMarker>,
    parent: RefCell<Option<ParentRef>>,
}

impl ViewNode {
    pub fn new() -> Rc<Self> {
        Self::build(None)
    }

    pub fn with_marker(marker: NodeMarker) -> Rc<Self> {
        Self::build(Some(marker))
    }

    fn build(marker: Option<NodeMarker>) -> Rc<Self> {
        Rc::new(Self {
            id: NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            marker,
            parent: RefCell::new(None),
        })
    }
}

impl Node for ViewNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn marker(&self) -> Option<NodeMarker> {
        self.marker
    }

    fn parent(&self) -> Option<ContainerRef> {
        self.parent.borrow().as_ref().and_then(|parent| parent.upgrade())
    }

    fn set_parent(&self, parent: Option<ParentRef>) {
        self.parent.replace(parent);
    }
}
