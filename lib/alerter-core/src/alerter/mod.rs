mod binding;
mod setters;

use crate::alert::{Alert, AlertConfig, AlertPhase, AlertRef};
use crate::host::{HostSurface, ResourceResolver, UiTask};
use crate::tree::{Node, OverlayNode, ALERT_MARKER};
use crate::{AlerterError, AlerterResult};
use binding::{Generation, HostBinding};
use log::{debug, trace};
use std::rc::{Rc, Weak};

/// Builds one alert for a host and shows it.
///
/// ```ignore
/// let alert = Alerter::create(Some(&host))?
///     .set_title("Saved")
///     .set_duration(Duration::from_secs(2))
///     .show();
/// ```
///
/// Every setter is a no-op on a handle with no draft (see [`Alerter::unbound`]).
#[must_use]
pub struct Alerter {
    host: Option<Weak<dyn HostSurface>>,
    pending: Option<PendingAlert>,
}

struct PendingAlert {
    config: AlertConfig,
    resources: Rc<dyn ResourceResolver>,
    generation: Generation,
}

impl Alerter {
    /// Binds to `host`, fading out any alert already on it, and starts a new draft.
    pub fn create<H>(host: Option<&Rc<H>>) -> AlerterResult<Self>
    where
        H: HostSurface + 'static,
    {
        let Some(host) = host else {
            return Err(AlerterError::InvalidArgument("host surface cannot be absent"));
        };
        let host: Rc<dyn HostSurface> = host.clone();

        Self::clear_current(host.as_ref());

        let generation = HostBinding::bind(&host);
        Ok(Self {
            host: Some(Rc::downgrade(&host)),
            pending: Some(PendingAlert {
                config: AlertConfig::from_current_config(),
                resources: host.resources(),
                generation,
            }),
        })
    }

    /// A handle with no host and no draft. Configuring it does nothing and
    /// [`show`](Self::show) returns `None`.
    pub fn unbound() -> Self {
        Self {
            host: None,
            pending: None,
        }
    }

    /// Fades out the alert on the bound host, if the host is still around.
    ///
    /// The binding belongs to the UI thread that called [`create`](Self::create).
    /// Called from any other thread this finds no binding and does nothing.
    pub fn hide() {
        match HostBinding::try_resolve() {
            Some(host) => {
                Self::clear_current(host.as_ref());
            }
            None => debug!("hide() with no live host binding on this thread"),
        }
    }

    /// True if the bound host is alive and any node in its tree carries the alert marker.
    ///
    /// Like [`hide`](Self::hide), this only sees the binding of the calling
    /// thread, so it is false off the UI thread.
    pub fn is_showing() -> bool {
        let Some(host) = HostBinding::try_resolve() else {
            debug!("is_showing() with no live host binding on this thread");
            return false;
        };
        host.root_container()
            .find_by_marker(ALERT_MARKER)
            .is_some()
    }

    /// Fades out and detaches every alert attached directly under `host`'s root.
    /// Returns how many fades were started.
    pub fn clear_current(host: &dyn HostSurface) -> usize {
        let root = host.root_container();
        let child_count = root.child_count();
        let mut cleared = 0;

        for index in 0..child_count {
            let Some(child) = root.child_at(index) else {
                break;
            };
            if child.marker() != Some(ALERT_MARKER) {
                continue;
            }
            let Some(overlay) = child.as_overlay() else {
                continue;
            };
            if !overlay.is_attached_to_window() {
                continue;
            }

            debug!("Fading out alert {}", overlay.id());
            overlay.fade_out_then(Self::removal_task(&overlay));
            cleared += 1;
        }

        cleared
    }

    /// Detaches `node` from whatever parent it has when the task runs.
    fn removal_task(node: &Rc<dyn OverlayNode>) -> UiTask {
        let node = Rc::downgrade(node);
        Box::new(move || {
            if let Some(node) = node.upgrade() {
                if node.detach_from_parent() {
                    debug!("Removed alert {}", node.id());
                }
            }
        })
    }

    /// Hands the draft to the host. Attachment happens on the host's next UI turn.
    ///
    /// Returns the alert node, or `None` for an unbound handle. The node is still
    /// returned when the host is already gone; it just never gets attached.
    pub fn show(self) -> Option<AlertRef> {
        let pending = self.pending?;
        let alert = Alert::new(pending.config);

        let Some(host) = self.host.as_ref().and_then(Weak::upgrade) else {
            debug!("Host is gone, alert {} will not be shown", alert.id());
            return Some(alert);
        };

        alert.set_phase(AlertPhase::Attaching);
        let generation = pending.generation;
        let weak_host = Rc::downgrade(&host);
        let attaching = alert.clone();
        host.post(Box::new(move || {
            Self::attach(weak_host, attaching, generation);
        }));
        trace!("Scheduled alert {} (generation {})", alert.id(), generation);

        Some(alert)
    }

    fn attach(host: Weak<dyn HostSurface>, alert: AlertRef, generation: Generation) {
        let Some(host) = host.upgrade() else {
            alert.set_phase(AlertPhase::Detached);
            return;
        };

        if HostBinding::is_superseded_on(&host, generation) {
            debug!("Alert {} superseded before attaching, dropping it", alert.id());
            alert.set_phase(AlertPhase::Detached);
            return;
        }

        // Earlier alerts can still be here when the binding moved to another host
        let replaced = Self::clear_current(host.as_ref());
        if replaced > 0 {
            debug!("Alert {} replaces {} alert(s) still on the host", alert.id(), replaced);
        }

        alert.set_release(Box::new(move || {
            HostBinding::release(generation);
        }));
        host.root_container().add_child(alert);
    }

    fn resources(&self) -> Option<&dyn ResourceResolver> {
        self.pending.as_ref().map(|pending| pending.resources.as_ref())
    }

    /// Applies `f` to the draft, if there is one.
    fn configure(mut self, f: impl FnOnce(&mut AlertConfig)) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            f(&mut pending.config);
        }
        self
    }
}

impl Default for Alerter {
    fn default() -> Self {
        Self::unbound()
    }
}

#[cfg(test)]
mod tests;
