use crate::tree::{
    ContainerRef, Node, NodeId, NodeMarker, NodeRef, ParentRef, NODE_ID_COUNTER,
};
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::Ordering;
use std::time::Instant;

/// A node with ordered children. A root container stands for a window's
/// top-level view and is the only node whose window attachment is set directly.
#[derive(Debug)]
pub struct Container {
    id: NodeId,
    marker: Option<NodeMarker>,
    parent: RefCell<Option<ParentRef>>,
    children: RefCell<Vec<NodeRef>>,
    self_ref: RefCell<ParentRef>,
    window_attached: Cell<bool>,
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self as *const Self == other as *const Self
    }
}

impl Container {
    /// Creates a root that is attached to a live window.
    pub fn new_root() -> ContainerRef {
        let root = Self::new(None);
        root.window_attached.set(true);
        root
    }

    pub fn new(marker: Option<NodeMarker>) -> ContainerRef {
        let id = NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let self_rc = Rc::new(Self {
            id,
            marker,
            parent: RefCell::new(None),
            children: RefCell::new(Vec::new()),
            self_ref: RefCell::new(Weak::new()),
            window_attached: Cell::new(false),
        });

        self_rc.self_ref.replace(Rc::downgrade(&self_rc));
        self_rc
    }

    pub fn self_ref(&self) -> ParentRef {
        self.self_ref.borrow().clone()
    }

    pub fn children(&self) -> Ref<'_, Vec<NodeRef>> {
        self.children.borrow()
    }

    pub fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn child_at(&self, index: usize) -> Option<NodeRef> {
        self.children.borrow().get(index).cloned()
    }

    pub fn index_of_child(&self, id: NodeId) -> Option<usize> {
        self.children.borrow().iter().position(|c| c.id() == id)
    }

    /// Appends `node`, moving it out of its previous parent first.
    pub fn add_child(&self, node: NodeRef) {
        if let Some(old_parent) = node.parent() {
            old_parent.remove_child_by_id(node.id());
        }

        node.set_parent(Some(self.self_ref()));
        self.children.borrow_mut().push(node.clone());

        // Borrow released: attach callbacks may walk the tree
        if self.is_attached_to_window() {
            node.on_attached_to_window();
        }
    }

    /// Unlinks the child with `id`. Removing a node that is not a child is a no-op.
    pub fn remove_child_by_id(&self, id: NodeId) -> bool {
        let removed = {
            let mut children = self.children.borrow_mut();
            match children.iter().position(|c| c.id() == id) {
                Some(index) => children.remove(index),
                None => return false,
            }
        };

        let was_attached = self.is_attached_to_window();
        removed.set_parent(None);
        if was_attached {
            removed.on_detached_from_window();
        }
        true
    }

    /// Depth-first lookup by marker among the descendants.
    pub fn find_by_marker(&self, marker: NodeMarker) -> Option<NodeRef> {
        let children: Vec<NodeRef> = self.children.borrow().clone();
        for child in children {
            if child.marker() == Some(marker) {
                return Some(child);
            }
            if let Some(container) = child.clone().as_container() {
                if let Some(found) = container.find_by_marker(marker) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Marks a root as attached or detached from its window, notifying the subtree.
    pub fn set_attached_to_window(&self, attached: bool) {
        if self.window_attached.replace(attached) == attached {
            return;
        }

        if attached {
            self.on_attached_to_window();
        } else {
            self.on_detached_from_window();
        }
    }

    fn snapshot(&self) -> Vec<NodeRef> {
        self.children.borrow().clone()
    }
}

impl Node for Container {
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

    fn is_attached_to_window(&self) -> bool {
        if self.window_attached.get() {
            return true;
        }
        self.parent()
            .is_some_and(|parent| parent.is_attached_to_window())
    }

    fn on_attached_to_window(&self) {
        for child in self.snapshot() {
            child.on_attached_to_window();
        }
    }

    fn on_detached_from_window(&self) {
        for child in self.snapshot() {
            child.on_detached_from_window();
        }
    }

    fn on_frame(&self, now: Instant) {
        for child in self.snapshot() {
            child.on_frame(now);
        }
    }

    fn as_container(self: Rc<Self>) -> Option<ContainerRef> {
        Some(self)
    }
}
