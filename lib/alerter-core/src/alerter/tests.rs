use super::*;
use crate::alert::{AnimationKind, AnimationSpec, Background, ButtonStyle, Color, ColorFilter};
use crate::host::headless::HeadlessHost;
use crate::host::{ResourceId, ResourceTable};
use crate::tree::{ContainerRef, ViewNode};
use crate::config::tests::lock_global_config;
use crate::Config;
use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

fn new_host() -> Rc<HeadlessHost> {
    HeadlessHost::new()
}

fn attached_alerts(root: &ContainerRef) -> usize {
    root.children()
        .iter()
        .filter(|child| child.marker() == Some(ALERT_MARKER))
        .count()
}

/// Runs turns until every queued task and fade has settled.
fn settle(host: &HeadlessHost, start: Instant) -> Instant {
    let mut now = start;
    for _ in 0..4 {
        host.run_turn(now);
        now += Config::removal_fade() + Duration::from_millis(1);
    }
    now
}

#[test]
fn test_create_without_host_fails() {
    let result = Alerter::create::<HeadlessHost>(None);
    assert!(matches!(result, Err(AlerterError::InvalidArgument(_))));
}

#[test]
fn test_create_with_host_succeeds() {
    let host = new_host();
    assert!(Alerter::create(Some(&host)).is_ok());
    assert_eq!(host.pending_tasks(), 0);
}

#[test]
fn test_show_is_deferred_to_ui_turn() {
    let host = new_host();
    let alert = Alerter::create(Some(&host)).unwrap().show().unwrap();

    assert_eq!(alert.phase(), AlertPhase::Attaching);
    assert_eq!(host.root_container().child_count(), 0);
    assert!(!Alerter::is_showing());

    host.run_pending();
    assert_eq!(alert.phase(), AlertPhase::Visible);
    assert_eq!(attached_alerts(&host.root_container()), 1);
    assert!(Alerter::is_showing());
}

#[test]
fn test_title_duration_scenario() {
    let host = new_host();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .set_title("Hi")
        .set_duration(Duration::from_millis(2000))
        .show()
        .unwrap();
    assert_eq!(alert.config().title.as_deref(), Some("Hi"));

    let start = Instant::now();
    host.run_turn(start);
    assert!(Alerter::is_showing());

    host.run_turn(start + Duration::from_millis(1000));
    assert!(Alerter::is_showing());

    let exit = alert.config().exit_animation.duration;
    host.run_turn(start + Duration::from_millis(2000));
    assert_eq!(alert.phase(), AlertPhase::Fading);
    assert!(Alerter::is_showing());

    host.run_turn(start + Duration::from_millis(2000) + exit);
    assert_eq!(alert.phase(), AlertPhase::Detached);
    assert!(!Alerter::is_showing());
    assert_eq!(host.root_container().child_count(), 0);
}

#[test]
fn test_create_replaces_visible_alert() {
    let host = new_host();
    let first = Alerter::create(Some(&host))
        .unwrap()
        .set_title("first")
        .show()
        .unwrap();
    let start = Instant::now();
    host.run_turn(start);
    assert_eq!(first.phase(), AlertPhase::Visible);

    let second = Alerter::create(Some(&host))
        .unwrap()
        .set_title("second")
        .show()
        .unwrap();
    assert_eq!(first.phase(), AlertPhase::Fading);

    settle(&host, start);

    let root = host.root_container();
    assert_eq!(attached_alerts(&root), 1);
    assert_eq!(first.phase(), AlertPhase::Detached);
    assert_eq!(second.phase(), AlertPhase::Visible);
    assert_eq!(root.child_at(0).unwrap().id(), second.id());
    assert!(Alerter::is_showing());
}

#[test]
fn test_create_while_first_is_still_attaching() {
    let host = new_host();
    let first = Alerter::create(Some(&host)).unwrap().show().unwrap();
    let second = Alerter::create(Some(&host)).unwrap().show().unwrap();

    settle(&host, Instant::now());

    assert_eq!(attached_alerts(&host.root_container()), 1);
    assert_eq!(first.phase(), AlertPhase::Detached);
    assert_eq!(second.phase(), AlertPhase::Visible);
}

#[test]
fn test_queued_alerts_replace_each_other_after_rebinding_elsewhere() {
    let host_a = new_host();
    let host_b = new_host();
    let first = Alerter::create(Some(&host_a)).unwrap().show().unwrap();
    let second = Alerter::create(Some(&host_a)).unwrap().show().unwrap();
    let _alerter = Alerter::create(Some(&host_b)).unwrap();

    settle(&host_a, Instant::now());

    let root = host_a.root_container();
    assert_eq!(attached_alerts(&root), 1);
    assert_eq!(first.phase(), AlertPhase::Detached);
    assert_eq!(second.phase(), AlertPhase::Visible);
    assert_eq!(root.child_at(0).unwrap().id(), second.id());
}

#[test]
fn test_repeated_creates_leave_one_alert() {
    let host = new_host();
    let mut now = Instant::now();
    let mut last = None;
    for i in 0..5 {
        last = Alerter::create(Some(&host))
            .unwrap()
            .set_title(format!("alert {i}"))
            .enable_infinite_duration(true)
            .show();
        host.run_turn(now);
        now += Duration::from_millis(50);
    }
    settle(&host, now);

    let root = host.root_container();
    assert_eq!(attached_alerts(&root), 1);
    let last = last.unwrap();
    assert_eq!(root.child_at(0).unwrap().id(), last.id());
    assert_eq!(last.config().title.as_deref(), Some("alert 4"));
}

#[test]
fn test_create_leaves_other_children_alone() {
    let host = new_host();
    let content = ViewNode::new();
    host.root_container().add_child(content.clone());

    Alerter::create(Some(&host)).unwrap().show();
    let start = Instant::now();
    host.run_turn(start);
    assert_eq!(host.root_container().child_count(), 2);

    Alerter::hide();
    settle(&host, start);

    let root = host.root_container();
    assert_eq!(root.child_count(), 1);
    assert_eq!(root.child_at(0).unwrap().id(), content.id());
}

#[test]
fn test_setters_on_unbound_handle_are_noops() {
    let handle = Alerter::unbound()
        .set_title("ignored")
        .set_text("ignored")
        .set_title_res(ResourceId(1))
        .set_background_color(Color::WHITE)
        .set_duration(Duration::from_millis(1))
        .enable_swipe_to_dismiss()
        .disable_outside_touch()
        .enable_progress(true)
        .set_progress_color_res(ResourceId(2))
        .set_enter_animation(ResourceId(3))
        .add_default_button("OK", || {})
        .hide_icon();

    assert!(handle.show().is_none());
    assert!(!Alerter::is_showing());
}

#[test]
fn test_default_handle_is_unbound() {
    assert!(Alerter::default().set_title("x").show().is_none());
}

#[test]
fn test_hide_without_binding_is_noop() {
    Alerter::hide();
    assert!(!Alerter::is_showing());
}

#[test]
fn test_hide_fades_and_releases_binding() {
    let host = new_host();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .enable_infinite_duration(true)
        .show()
        .unwrap();
    let start = Instant::now();
    host.run_turn(start);

    Alerter::hide();
    assert_eq!(alert.phase(), AlertPhase::Fading);

    settle(&host, start);
    assert_eq!(alert.phase(), AlertPhase::Detached);
    assert!(!Alerter::is_showing());
    assert!(HostBinding::try_resolve().is_none());

    // Nothing left to hide
    Alerter::hide();
    assert_eq!(host.root_container().child_count(), 0);
}

#[test]
fn test_stale_host_binding() {
    let host = new_host();
    let alerter = Alerter::create(Some(&host)).unwrap().set_title("late");
    host.run_pending();
    drop(host);

    assert!(!Alerter::is_showing());
    Alerter::hide();

    // The node is handed back but never attached
    let alert = alerter.show().unwrap();
    assert_eq!(alert.phase(), AlertPhase::Pending);
    assert!(!alert.is_attached_to_window());
}

#[test]
fn test_binding_dies_with_last_host_handle() {
    let host = new_host();
    let other_handle = host.clone();
    let alert = Alerter::create(Some(&host)).unwrap().show().unwrap();
    drop(host);

    other_handle.run_pending();
    assert_eq!(alert.phase(), AlertPhase::Visible);
    assert!(Alerter::is_showing());

    drop(other_handle);
    assert!(!Alerter::is_showing());
    assert!(alert.parent().is_none());
}

#[test]
fn test_buttons_keep_insertion_order() {
    let host = new_host();
    let pressed = Rc::new(RefCell::new(Vec::new()));
    let ok = pressed.clone();
    let cancel = pressed.clone();
    let style = ButtonStyle {
        text_color: Color::from_rgb(0, 0, 0),
        background: Some(Color::WHITE),
        text_size_sp: 16.0,
    };

    let alert = Alerter::create(Some(&host))
        .unwrap()
        .add_button("OK", style.clone(), move || ok.borrow_mut().push("OK"))
        .add_button("Cancel", ButtonStyle::default(), move || {
            cancel.borrow_mut().push("Cancel")
        })
        .show()
        .unwrap();

    assert_eq!(alert.config().button_labels(), vec!["OK", "Cancel"]);
    assert_eq!(alert.config().buttons[0].style, style);
    assert_ne!(alert.config().buttons[1].style, style);

    alert.press_button(1);
    alert.press_button(0);
    assert_eq!(*pressed.borrow(), vec!["Cancel", "OK"]);
}

#[test]
fn test_clear_current_twice_removes_once() {
    let host = new_host();
    let hides = Rc::new(Cell::new(0));
    let hides_clone = hides.clone();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .enable_infinite_duration(true)
        .set_on_hide_listener(move || hides_clone.set(hides_clone.get() + 1))
        .show()
        .unwrap();
    let start = Instant::now();
    host.run_turn(start);

    assert_eq!(Alerter::clear_current(host.as_ref()), 1);
    // Still attached while fading, so it is picked up again
    assert_eq!(Alerter::clear_current(host.as_ref()), 1);

    settle(&host, start);
    assert_eq!(host.root_container().child_count(), 0);
    assert_eq!(hides.get(), 1);

    // Already detached: nothing to fade
    assert_eq!(Alerter::clear_current(host.as_ref()), 0);
    assert!(!alert.detach_from_parent());
}

#[test]
fn test_clear_current_skips_unattached_root() {
    let host = new_host();
    Alerter::create(Some(&host)).unwrap().show();
    host.run_pending();
    host.close();

    assert_eq!(Alerter::clear_current(host.as_ref()), 0);
}

#[test]
fn test_is_showing_finds_marker_not_identity() {
    let host = new_host();
    let _alerter = Alerter::create(Some(&host)).unwrap();
    assert!(!Alerter::is_showing());

    // Any node with the alert marker counts, however it got there
    host.root_container()
        .add_child(ViewNode::with_marker(ALERT_MARKER));
    assert!(Alerter::is_showing());
}

#[test]
fn test_binding_follows_last_create() {
    let host_a = new_host();
    let host_b = new_host();

    Alerter::create(Some(&host_a)).unwrap().show();
    host_a.run_pending();
    assert!(Alerter::is_showing());

    let _alerter = Alerter::create(Some(&host_b)).unwrap();
    // Host A still shows its alert, but only host B is tracked
    assert_eq!(attached_alerts(&host_a.root_container()), 1);
    assert!(!Alerter::is_showing());

    Alerter::hide();
    settle(&host_a, Instant::now());
    assert_eq!(attached_alerts(&host_a.root_container()), 1);
}

#[test]
fn test_resource_setters_resolve_through_host() {
    let fade_in = AnimationSpec {
        kind: AnimationKind::FadeIn,
        duration: Duration::from_millis(120),
    };
    let host = HeadlessHost::with_resources(
        ResourceTable::new()
            .with_string(ResourceId(1), "Title from resources")
            .with_string(ResourceId(2), "Body from resources")
            .with_color(ResourceId(3), Color::from_rgb(0x20, 0x40, 0x60))
            .with_animation(ResourceId(4), fade_in),
    );

    let alert = Alerter::create(Some(&host))
        .unwrap()
        .set_title_res(ResourceId(1))
        .set_text_res(ResourceId(2))
        .set_background_color_res(ResourceId(3))
        .set_progress_color_res(ResourceId(3))
        .set_enter_animation(ResourceId(4))
        .set_exit_animation(ResourceId(99))
        .set_icon_res(ResourceId(98))
        .show()
        .unwrap();

    let config = alert.config();
    assert_eq!(config.title.as_deref(), Some("Title from resources"));
    assert_eq!(config.text.as_deref(), Some("Body from resources"));
    assert_eq!(
        config.background,
        Some(Background::Color(Color::from_rgb(0x20, 0x40, 0x60)))
    );
    assert_eq!(config.progress_color, Some(Color::from_rgb(0x20, 0x40, 0x60)));
    assert_eq!(config.enter_animation, fade_in);
    // Misses leave the defaults in place
    assert_eq!(config.exit_animation.kind, AnimationKind::SlideOutToTop);
    assert!(config.icon.is_none());
}

#[test]
fn test_fluent_flags_reach_alert() {
    let host = new_host();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .set_text("Body")
        .set_icon_color_filter(Color::WHITE)
        .hide_icon()
        .enable_icon_pulse(false)
        .enable_infinite_duration(true)
        .enable_swipe_to_dismiss()
        .enable_vibration(false)
        .disable_outside_touch()
        .enable_progress(true)
        .set_progress_color(Color::WHITE)
        .set_dismissible(false)
        .set_button_typeface(crate::alert::Typeface::new("Mono"))
        .show()
        .unwrap();

    let config = alert.config();
    assert_eq!(config.text.as_deref(), Some("Body"));
    assert!(matches!(
        &config.icon_filter,
        Some(ColorFilter::Tint { color, .. }) if *color == Color::WHITE
    ));
    assert!(!config.show_icon);
    assert!(!config.icon_pulse);
    assert!(config.infinite_duration);
    assert!(config.swipe_to_dismiss);
    assert!(!config.vibration);
    assert!(config.outside_touch_disabled);
    assert!(config.progress);
    assert!(!config.dismissible);
    assert_eq!(config.button_typeface.as_ref().map(|t| t.family.as_str()), Some("Mono"));
}

#[test]
fn test_show_and_hide_listeners_fire_once() {
    let host = new_host();
    let events = Rc::new(RefCell::new(Vec::new()));
    let on_show = events.clone();
    let on_hide = events.clone();

    Alerter::create(Some(&host))
        .unwrap()
        .set_on_show_listener(move || on_show.borrow_mut().push("show"))
        .set_on_hide_listener(move || on_hide.borrow_mut().push("hide"))
        .enable_infinite_duration(true)
        .show();
    let start = Instant::now();
    host.run_turn(start);

    Alerter::hide();
    Alerter::hide();
    settle(&host, start);

    assert_eq!(*events.borrow(), vec!["show", "hide"]);
}

#[test]
fn test_swipe_dismiss_releases_binding() {
    let host = new_host();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .enable_swipe_to_dismiss()
        .show()
        .unwrap();
    host.run_pending();
    assert!(Alerter::is_showing());

    assert!(alert.swipe_dismissed());
    assert!(!Alerter::is_showing());
    assert!(HostBinding::try_resolve().is_none());
}

#[test]
fn test_click_listener_and_dismiss() {
    let host = new_host();
    let clicks = Rc::new(Cell::new(0));
    let clicks_clone = clicks.clone();
    let alert = Alerter::create(Some(&host))
        .unwrap()
        .set_on_click_listener(move || clicks_clone.set(clicks_clone.get() + 1))
        .show()
        .unwrap();
    let start = Instant::now();
    host.run_turn(start);

    alert.click();
    assert_eq!(clicks.get(), 1);
    assert_eq!(alert.phase(), AlertPhase::Fading);

    let exit = alert.config().exit_animation.duration;
    host.run_turn(start);
    host.run_turn(start + exit);
    assert_eq!(alert.phase(), AlertPhase::Detached);
}

#[test]
fn test_new_draft_follows_global_config() {
    let _guard = lock_global_config();
    Config::update(|config| {
        config.default_duration_ms = 45_000;
        config.exit_animation_ms = 250;
        config.vibration = false;
        config.show_icon = false;
    });

    let host = new_host();
    let alert = Alerter::create(Some(&host)).unwrap().show().unwrap();
    {
        let config = alert.config();
        assert_eq!(config.duration, Duration::from_millis(45_000));
        assert_eq!(config.exit_animation.duration, Duration::from_millis(250));
        assert!(!config.vibration);
        assert!(!config.show_icon);
    }

    Config::reset();
    assert_eq!(Config::default_duration(), Duration::from_millis(3000));

    let alert = Alerter::create(Some(&host)).unwrap().show().unwrap();
    let config = alert.config();
    assert_eq!(config.duration, Duration::from_millis(3000));
    assert_eq!(config.exit_animation.duration, Duration::from_millis(400));
    assert!(config.vibration);
    assert!(config.show_icon);
}

#[test]
fn test_binding_is_per_thread() {
    let host = new_host();
    Alerter::create(Some(&host)).unwrap().show();
    host.run_pending();
    assert!(Alerter::is_showing());

    let seen_elsewhere = std::thread::spawn(|| {
        Alerter::hide();
        Alerter::is_showing()
    })
    .join()
    .unwrap();

    assert!(!seen_elsewhere);
    assert!(Alerter::is_showing());
    assert_eq!(attached_alerts(&host.root_container()), 1);
}
