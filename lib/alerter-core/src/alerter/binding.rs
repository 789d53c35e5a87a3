//! The single remembered host binding.
//!
//! Alerts live on the UI thread, so the slot is thread-local: whichever thread
//! owns the render tree sees one binding, and the last `create()` wins.

use crate::host::HostSurface;
use log::{debug, trace};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifies one `create()` call, so late callbacks from a replaced alert can
/// tell that the binding has moved on.
pub(crate) type Generation = u64;

struct Binding {
    host: Weak<dyn HostSurface>,
    generation: Generation,
}

thread_local! {
    static CURRENT: RefCell<Option<Binding>> = const { RefCell::new(None) };
    static NEXT_GENERATION: Cell<Generation> = const { Cell::new(1) };
}

pub(crate) struct HostBinding;

impl HostBinding {
    /// Remembers `host` weakly, superseding any previous binding.
    pub fn bind(host: &Rc<dyn HostSurface>) -> Generation {
        let generation = NEXT_GENERATION.with(|next| next.replace(next.get() + 1));
        CURRENT.with(|current| {
            current.replace(Some(Binding {
                host: Rc::downgrade(host),
                generation,
            }))
        });
        debug!("Bound host (generation {})", generation);
        generation
    }

    /// The bound host, if it is still alive.
    pub fn try_resolve() -> Option<Rc<dyn HostSurface>> {
        CURRENT.with(|current| {
            current
                .borrow()
                .as_ref()
                .and_then(|binding| binding.host.upgrade())
        })
    }

    #[cfg(test)]
    pub fn current_generation() -> Option<Generation> {
        CURRENT.with(|current| current.borrow().as_ref().map(|binding| binding.generation))
    }

    /// True when a `create()` newer than `generation` has bound this same host.
    pub fn is_superseded_on(host: &Rc<dyn HostSurface>, generation: Generation) -> bool {
        CURRENT.with(|current| {
            current.borrow().as_ref().is_some_and(|binding| {
                binding.generation != generation
                    && binding
                        .host
                        .upgrade()
                        .is_some_and(|bound| same_host(&bound, host))
            })
        })
    }

    /// Forgets the binding if it still belongs to `generation`.
    pub fn release(generation: Generation) -> bool {
        CURRENT.with(|current| {
            let mut current = current.borrow_mut();
            match current.as_ref() {
                Some(binding) if binding.generation == generation => {
                    *current = None;
                    trace!("Released host binding (generation {})", generation);
                    true
                }
                _ => false,
            }
        })
    }
}

fn same_host(a: &Rc<dyn HostSurface>, b: &Rc<dyn HostSurface>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
