//! A host surface with no window system behind it.
//!
//! The root container, resources and UI turn are all in memory; the embedder
//! (or a test) drives the turn by calling [`HeadlessHost::run_turn`].

use crate::host::{HostSurface, ResourceResolver, ResourceTable, TurnQueue, UiTask};
use crate::tree::{Container, ContainerRef, Node};
use std::rc::Rc;
use std::time::Instant;

pub struct HeadlessHost {
    root: ContainerRef,
    resources: Rc<dyn ResourceResolver>,
    turns: TurnQueue,
}

impl HeadlessHost {
    pub fn new() -> Rc<Self> {
        Self::with_resources(ResourceTable::new())
    }

    pub fn with_resources(resources: impl ResourceResolver + 'static) -> Rc<Self> {
        Rc::new(Self {
            root: Container::new_root(),
            resources: Rc::new(resources),
            turns: TurnQueue::new(),
        })
    }

    /// Runs queued UI tasks without advancing animations.
    pub fn run_pending(&self) -> usize {
        self.turns.run_pending()
    }

    /// One UI turn: queued tasks first, then a frame for every attached node.
    pub fn run_turn(&self, now: Instant) -> usize {
        let ran = self.turns.run_pending();
        if self.root.is_attached_to_window() {
            self.root.on_frame(now);
        }
        ran
    }

    pub fn pending_tasks(&self) -> usize {
        self.turns.pending()
    }

    /// Detaches the root from its window, as when the window is torn down.
    pub fn close(&self) {
        self.root.set_attached_to_window(false);
    }
}

impl HostSurface for HeadlessHost {
    fn root_container(&self) -> ContainerRef {
        self.root.clone()
    }

    fn resources(&self) -> Rc<dyn ResourceResolver> {
        self.resources.clone()
    }

    fn post(&self, task: UiTask) {
        self.turns.post(task);
    }
}
