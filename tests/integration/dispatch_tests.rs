//! Tests for the lifecycle event → hook dispatch mapping and the host
//! line protocol feeding it.

use air_bubbler::app::ports::LifecycleHooks;
use air_bubbler::command::{HostInput, parse_line};
use air_bubbler::events::{LifecycleEvent, dispatch};

/// Records which hooks fired, in order.
#[derive(Default)]
struct HookRecorder {
    calls: Vec<&'static str>,
}

impl LifecycleHooks for HookRecorder {
    fn on_sleep(&mut self) {
        self.calls.push("on_sleep");
    }
    fn on_wake(&mut self) {
        self.calls.push("on_wake");
    }
    fn before_od_reading(&mut self) {
        self.calls.push("before_od_reading");
    }
    fn after_od_reading(&mut self) {
        self.calls.push("after_od_reading");
    }
    fn on_teardown(&mut self) {
        self.calls.push("on_teardown");
    }
}

#[test]
fn events_map_one_to_one_onto_hooks() {
    let mut hooks = HookRecorder::default();

    dispatch(LifecycleEvent::Sleep, &mut hooks);
    dispatch(LifecycleEvent::Wake, &mut hooks);
    dispatch(LifecycleEvent::OdReadingStarting, &mut hooks);
    dispatch(LifecycleEvent::OdReadingFinished, &mut hooks);
    dispatch(LifecycleEvent::Disconnect, &mut hooks);

    assert_eq!(
        hooks.calls,
        vec![
            "on_sleep",
            "on_wake",
            "before_od_reading",
            "after_od_reading",
            "on_teardown",
        ]
    );
}

#[test]
fn host_lines_drive_hooks_end_to_end() {
    let mut hooks = HookRecorder::default();

    for line in ["sleep", "wake", "od-start", "od-end", "disconnect"] {
        match parse_line(line) {
            Some(Ok(HostInput::Lifecycle(event))) => dispatch(event, &mut hooks),
            other => panic!("`{line}` should parse to a lifecycle event, got {other:?}"),
        }
    }

    assert_eq!(hooks.calls.len(), 5);
    assert_eq!(hooks.calls.last(), Some(&"on_teardown"));
}
