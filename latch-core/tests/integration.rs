//! Integration Tests for the Toggle Engine
//!
//! These tests drive toggles the way an owner and a render collaborator do:
//! through prop getters, change handlers, and re-evaluation.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};

use latch_core::engine::{Advisory, Mode, RecordingSink, Toggle, ToggleConfig};
use latch_core::props::{Handler, PropSet, ACTIVATE, PRESSED_STATE};
use latch_core::{Action, ToggleState};

/// After N toggles from off, the toggle is on iff N is odd.
#[test]
fn toggle_count_parity() {
    for n in 0..10 {
        let toggle = Toggle::new(ToggleConfig::new());
        for _ in 0..n {
            toggle.toggle().unwrap();
        }
        assert_eq!(toggle.current_on(), n % 2 == 1, "after {} toggles", n);
    }
}

/// Five clicks then a reset lands back on the initial value.
#[test]
fn five_toggles_then_reset() {
    let toggle = Toggle::new(ToggleConfig::new().initial_on(false));
    let toggler = toggle.toggler_props(PropSet::new());
    let resetter = toggle.resetter_props(PropSet::new());

    for _ in 0..5 {
        toggler.call(ACTIVATE, &[]).unwrap();
    }
    assert!(toggle.current_on());

    resetter.call(ACTIVATE, &[]).unwrap();
    assert!(!toggle.current_on());

    resetter.call(ACTIVATE, &[]).unwrap();
    assert!(!toggle.current_on());
}

/// Caller handler runs before the toggle's own, extra attributes pass through.
#[test]
fn toggler_props_compose_with_caller_props() {
    let toggle = Toggle::new(ToggleConfig::new());
    let seen_on = Arc::new(Mutex::new(Vec::new()));

    let observer = toggle.clone();
    let seen_clone = seen_on.clone();
    let props = toggle.toggler_props(
        PropSet::new()
            .with_attr("aria-label", "custom-button")
            .with_attr("id", "custom-button-id")
            .with_handler(
                ACTIVATE,
                Handler::new(move |args| {
                    assert_eq!(args, &[json!("click")]);
                    seen_clone.lock().push(observer.current_on());
                }),
            ),
    );

    assert_eq!(
        props.keys().collect::<Vec<_>>(),
        vec![PRESSED_STATE, ACTIVATE, "aria-label", "id"]
    );
    assert_eq!(props.attr("aria-label"), Some(&json!("custom-button")));
    assert_eq!(props.attr("id"), Some(&json!("custom-button-id")));

    props.call(ACTIVATE, &[json!("click")]).unwrap();

    // The caller saw the value before the toggle flipped it.
    assert_eq!(*seen_on.lock(), vec![false]);
    assert!(toggle.current_on());
}

/// A caller may override the pressed state outright.
#[test]
fn caller_attribute_overrides_pressed_state() {
    let toggle = Toggle::new(ToggleConfig::new());
    let props = toggle.toggler_props(PropSet::new().with_attr(PRESSED_STATE, "mixed"));
    assert_eq!(props.attr(PRESSED_STATE), Some(&json!("mixed")));
}

/// A controlled toggle never moves by itself; the owner decides.
#[test]
fn controlled_toggle_waits_for_owner() {
    let owner_state: Arc<Mutex<Option<bool>>> = Arc::new(Mutex::new(Some(false)));
    let changes = Arc::new(Mutex::new(Vec::new()));

    let changes_clone = changes.clone();
    let owner_clone = owner_state.clone();
    let config = move |on: Option<bool>| {
        let changes = changes_clone.clone();
        let owner = owner_clone.clone();
        ToggleConfig::new().controlled(on).on_change(move |state, action| {
            changes.lock().push((*state, action.clone()));
            *owner.lock() = Some(state.on);
        })
    };

    let toggle = Toggle::new(config(Some(false)));

    toggle.toggle().unwrap();
    assert!(!toggle.current_on());
    assert_eq!(*changes.lock(), vec![(ToggleState::new(true), Action::Toggle)]);

    // Owner re-renders with its new value.
    let fed_back = *owner_state.lock();
    toggle.evaluate(config(fed_back));
    assert!(toggle.current_on());
    assert_eq!(toggle.mode(), Mode::Controlled);
}

/// Two toggles sharing one owner value, ignoring toggles after four clicks.
#[test]
fn shared_owner_value_with_click_limit() {
    struct Owner {
        both_on: Option<bool>,
        times_clicked: i32,
    }

    let owner = Arc::new(Mutex::new(Owner { both_on: None, times_clicked: 0 }));

    let make_config = {
        let owner = owner.clone();
        move || {
            let both_on = owner.lock().both_on;
            let owner = owner.clone();
            ToggleConfig::new().controlled(both_on).on_change(move |state, action| {
                let mut owner = owner.lock();
                if matches!(action, Action::Toggle) && owner.times_clicked > 4 {
                    return;
                }
                owner.both_on = Some(state.on);
                owner.times_clicked += 1;
            })
        }
    };

    let sink = RecordingSink::new();
    let left = Toggle::new(make_config().advisory_sink(sink.clone()));
    let right = Toggle::new(make_config().advisory_sink(sink.clone()));

    let rerender = |toggles: &[&Toggle]| {
        for toggle in toggles {
            toggle.evaluate(make_config().advisory_sink(sink.clone()));
        }
    };

    // Both start uncontrolled because the owner has no value yet.
    assert_eq!(left.initial_mode(), Mode::Uncontrolled);

    left.toggle().unwrap();
    rerender(&[&left, &right]);
    assert!(left.current_on());
    assert!(right.current_on());

    // Picking up the owner's value is a switch into controlled mode.
    assert_eq!(sink.count(Advisory::UncontrolledToControlledTransition), 2);

    for _ in 0..10 {
        right.toggle().unwrap();
        rerender(&[&left, &right]);
    }

    let owner_state = owner.lock();
    assert_eq!(owner_state.times_clicked, 5);
    assert_eq!(owner_state.both_on, Some(true));
    drop(owner_state);
    assert_eq!(left.current_on(), right.current_on());

    // No further transitions were reported while the mode stayed put.
    assert_eq!(sink.count(Advisory::UncontrolledToControlledTransition), 2);
}

#[test]
fn controlled_without_handler_advisory() {
    let sink = RecordingSink::new();
    let _warned = Toggle::new(ToggleConfig::new().on(true).advisory_sink(sink.clone()));
    assert_eq!(sink.advisories(), vec![Advisory::ControlledWithoutChangeHandler]);

    sink.clear();
    let _quiet = Toggle::new(
        ToggleConfig::new()
            .on(true)
            .read_only(true)
            .advisory_sink(sink.clone()),
    );
    let _handled = Toggle::new(
        ToggleConfig::new()
            .on(true)
            .on_change(|_, _| {})
            .advisory_sink(sink.clone()),
    );
    assert!(sink.advisories().is_empty());
}

/// Mode-switch advisories fire once per switch, not once per evaluation.
#[test]
fn mode_switch_cadence() {
    let sink = RecordingSink::new();
    let uncontrolled = || ToggleConfig::new().advisory_sink(sink.clone());
    let controlled = |on| {
        ToggleConfig::new()
            .on(on)
            .on_change(|_, _| {})
            .advisory_sink(sink.clone())
    };

    let toggle = Toggle::new(uncontrolled());
    assert!(sink.advisories().is_empty());

    toggle.evaluate(controlled(true));
    toggle.evaluate(controlled(false));
    toggle.evaluate(controlled(true));
    assert_eq!(sink.count(Advisory::UncontrolledToControlledTransition), 1);

    // Back to the initial mode is quiet, leaving it again reports again.
    toggle.evaluate(uncontrolled());
    assert_eq!(sink.advisories().len(), 1);
    toggle.evaluate(controlled(true));
    assert_eq!(sink.count(Advisory::UncontrolledToControlledTransition), 2);

    assert_eq!(sink.count(Advisory::ControlledToUncontrolledTransition), 0);
}

#[test]
fn controlled_to_uncontrolled_reports_and_uses_internal_store() {
    let sink = RecordingSink::new();
    let toggle = Toggle::new(
        ToggleConfig::new()
            .initial_on(false)
            .on(true)
            .on_change(|_, _| {})
            .advisory_sink(sink.clone()),
    );
    assert!(toggle.current_on());

    toggle.set_controlled(None);
    assert_eq!(sink.advisories(), vec![Advisory::ControlledToUncontrolledTransition]);

    // No state migration: the internal store still holds the initial value.
    assert!(!toggle.current_on());
    toggle.toggle().unwrap();
    assert!(toggle.current_on());
}

/// Advisories never change what the engine returns.
#[test]
fn advisories_do_not_interrupt_dispatch() {
    let sink = RecordingSink::new();
    let notified = Arc::new(AtomicI32::new(0));
    let notified_clone = notified.clone();

    let toggle = Toggle::new(ToggleConfig::new().advisory_sink(sink.clone()));
    toggle.evaluate(
        ToggleConfig::new()
            .on(false)
            .advisory_sink(sink.clone()),
    );
    assert_eq!(
        sink.advisories(),
        vec![
            Advisory::ControlledWithoutChangeHandler,
            Advisory::UncontrolledToControlledTransition,
        ]
    );

    assert!(toggle.toggle().is_ok());
    assert!(toggle.reset().is_ok());
    assert!(!toggle.current_on());

    toggle.evaluate(
        ToggleConfig::new()
            .on(false)
            .on_change(move |_, _| {
                notified_clone.fetch_add(1, Ordering::SeqCst);
            })
            .advisory_sink(sink.clone()),
    );
    toggle.toggle().unwrap();
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn options_drive_a_toggle() {
    let options = latch_core::engine::ToggleOptions::from_json(r#"{"initialOn": true}"#).unwrap();
    let toggle = Toggle::new(ToggleConfig::from_options(options));

    assert!(toggle.current_on());
    toggle.toggle().unwrap();
    toggle.reset().unwrap();
    assert_eq!(toggle.initial_state(), ToggleState::new(true));
    assert!(toggle.current_on());
}

#[test]
fn handler_errors_surface_through_props() {
    let toggle = Toggle::new(ToggleConfig::new().reducer(
        |_: &ToggleState, action: &Action| -> latch_core::Result<ToggleState> {
            Err(latch_core::UnsupportedActionError::new(action.kind()).into())
        },
    ));

    let err = toggle
        .toggler_props(PropSet::new())
        .call(ACTIVATE, &[Value::Null])
        .unwrap_err();
    assert_eq!(err.to_string(), "Unsupported type: toggle");
}
