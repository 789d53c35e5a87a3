use crate::alert::{AlertConfig, Listener};
use crate::animation::{ease_in_out_cubic, Animator};
use crate::host::UiTask;
use crate::tree::{
    ContainerRef, Node, NodeId, NodeMarker, OverlayNode, ParentRef, ALERT_MARKER,
    NODE_ID_COUNTER,
};
use crate::Config;
use log::{debug, trace};
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

pub type AlertRef = Rc<Alert>;

/// Where an alert is in its life on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    /// Built but `show()` has not scheduled it.
    Pending,
    /// Attachment is queued on the host's UI turn.
    Attaching,
    Visible,
    /// Fading to transparent; detached when the fade ends.
    Fading,
    Detached,
}

/// The overlay node inserted into a host's root container.
///
/// Timing is driven by [`Node::on_frame`]: the shown instant is taken from the
/// first frame after attachment and fades start on the frame after they are
/// requested.
pub struct Alert {
    id: NodeId,
    self_ref: Weak<Alert>,
    config: RefCell<AlertConfig>,
    parent: RefCell<Option<ParentRef>>,
    phase: Cell<AlertPhase>,
    shown_at: Cell<Option<Instant>>,
    fade: RefCell<Animator<f64, fn(f64) -> f64>>,
    fade_request: Cell<Option<Duration>>,
    fade_end: RefCell<Vec<UiTask>>,
    release: RefCell<Option<UiTask>>,
    hide_notified: Cell<bool>,
}

impl Alert {
    pub fn new(config: AlertConfig) -> AlertRef {
        Rc::new_cyclic(|self_ref| Self {
            id: NODE_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            self_ref: self_ref.clone(),
            config: RefCell::new(config),
            parent: RefCell::new(None),
            phase: Cell::new(AlertPhase::Pending),
            shown_at: Cell::new(None),
            fade: RefCell::new(Animator::new(1.0, ease_in_out_cubic as fn(f64) -> f64)),
            fade_request: Cell::new(None),
            fade_end: RefCell::new(Vec::new()),
            release: RefCell::new(None),
            hide_notified: Cell::new(false),
        })
    }

    pub fn config(&self) -> Ref<'_, AlertConfig> {
        self.config.borrow()
    }

    pub fn phase(&self) -> AlertPhase {
        self.phase.get()
    }

    pub(crate) fn set_phase(&self, phase: AlertPhase) {
        self.phase.set(phase);
    }

    /// Runs once when the alert leaves the tree.
    pub(crate) fn set_release(&self, task: UiTask) {
        self.release.replace(Some(task));
    }

    pub fn opacity(&self) -> f64 {
        *self.fade.borrow().current_value()
    }

    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at.get()
    }

    /// Fraction of the on-screen duration that has elapsed, when the progress bar is on.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let config = self.config.borrow();
        if !config.progress || config.infinite_duration {
            return None;
        }
        let shown_at = self.shown_at.get()?;
        if config.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(shown_at).as_secs_f64();
        Some((elapsed / config.duration.as_secs_f64()).clamp(0.0, 1.0) as f32)
    }

    /// Plays the exit fade, then removes the alert. Only a visible alert can hide.
    pub fn hide(&self) -> bool {
        if self.phase.get() != AlertPhase::Visible {
            return false;
        }

        let exit = self.config.borrow().exit_animation.duration;
        let weak = self.self_ref.clone();
        self.request_fade(
            exit,
            Box::new(move || {
                if let Some(alert) = weak.upgrade() {
                    alert.detach_from_parent();
                }
            }),
        );
        true
    }

    /// User dismissal. Ignored unless the alert is dismissible.
    pub fn dismiss(&self) -> bool {
        if !self.config.borrow().dismissible {
            return false;
        }
        self.hide()
    }

    pub fn click(&self) {
        let listener = self.config.borrow().on_click.clone();
        if let Some(listener) = listener {
            listener();
        }
        self.dismiss();
    }

    /// Called once the swipe gesture has carried the alert off screen.
    pub fn swipe_dismissed(&self) -> bool {
        if !self.config.borrow().swipe_to_dismiss {
            return false;
        }
        debug!("Alert {} swiped away", self.id);
        self.detach_from_parent()
    }

    pub fn press_button(&self, index: usize) -> bool {
        let listener = self
            .config
            .borrow()
            .buttons
            .get(index)
            .map(|button| button.on_click.clone());
        match listener {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }

    fn request_fade(&self, duration: Duration, on_end: UiTask) {
        self.fade_end.borrow_mut().push(on_end);
        if self.phase.get() == AlertPhase::Fading {
            return;
        }
        trace!("Alert {} fading out over {:?}", self.id, duration);
        self.phase.set(AlertPhase::Fading);
        self.fade_request.set(Some(duration));
    }

    fn hide_due(&self, now: Instant) -> bool {
        let config = self.config.borrow();
        if config.infinite_duration {
            return false;
        }
        self.shown_at
            .get()
            .is_some_and(|shown_at| now.saturating_duration_since(shown_at) >= config.duration)
    }

    fn advance_fade(&self, now: Instant) {
        if let Some(duration) = self.fade_request.take() {
            self.fade.borrow_mut().start_at(0.0, duration, now);
        }

        let finished = {
            let mut fade = self.fade.borrow_mut();
            fade.update_at(now).is_some() && !fade.is_animating()
        };
        if !finished {
            return;
        }

        let tasks = std::mem::take(&mut *self.fade_end.borrow_mut());
        for task in tasks {
            task();
        }
    }

    fn notify(listener: Option<Listener>) {
        if let Some(listener) = listener {
            listener();
        }
    }
}

impl Node for Alert {
    fn id(&self) -> NodeId {
        self.id
    }

    fn marker(&self) -> Option<NodeMarker> {
        Some(ALERT_MARKER)
    }

    fn parent(&self) -> Option<ContainerRef> {
        self.parent.borrow().as_ref().and_then(|parent| parent.upgrade())
    }

    fn set_parent(&self, parent: Option<ParentRef>) {
        self.parent.replace(parent);
    }

    fn on_attached_to_window(&self) {
        debug!("Alert {} attached", self.id);
        self.phase.set(AlertPhase::Visible);
        self.shown_at.set(None);
        self.hide_notified.set(false);
        *self.fade.borrow_mut() = Animator::new(1.0, ease_in_out_cubic as fn(f64) -> f64);

        let listener = self.config.borrow().on_show.clone();
        Self::notify(listener);
    }

    fn on_detached_from_window(&self) {
        debug!("Alert {} detached", self.id);
        self.phase.set(AlertPhase::Detached);
        self.fade_request.set(None);
        self.fade_end.borrow_mut().clear();

        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            release();
        }

        if !self.hide_notified.replace(true) {
            let listener = self.config.borrow().on_hide.clone();
            Self::notify(listener);
        }
    }

    fn on_frame(&self, now: Instant) {
        if self.shown_at.get().is_none() && self.phase.get() == AlertPhase::Visible {
            self.shown_at.set(Some(now));
        }

        if self.phase.get() == AlertPhase::Visible && self.hide_due(now) {
            self.hide();
        }

        if self.phase.get() == AlertPhase::Fading {
            self.advance_fade(now);
        }
    }

    fn as_overlay(self: Rc<Self>) -> Option<Rc<dyn OverlayNode>> {
        Some(self)
    }
}

impl OverlayNode for Alert {
    fn fade_out_then(&self, on_end: UiTask) {
        self.request_fade(Config::removal_fade(), on_end);
    }
}
