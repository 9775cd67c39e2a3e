//! Gesture routing through `TriggerHandler::handle` against the mock robot.

use crate::mock_hw::{MockRobot, RecordingSink, RobotCall};

use pathrunner::app::commands::Gesture;
use pathrunner::app::events::AppEvent;
use pathrunner::app::stepper::PathStepper;
use pathrunner::app::trigger::{TriggerHandler, TriggerOutcome};
use pathrunner::config::SystemConfig;
use pathrunner::fsm::PathId;
use pathrunner::fsm::command::{Expression, Sound};
use pathrunner::fsm::selection::{Selection, SharedSelection};

#[test]
fn console_names_route_to_entry_points() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let (mut robot, mut sink) = (MockRobot::new(), RecordingSink::new());

    let outcomes: Vec<TriggerOutcome> = ["touch", "fling", "caress", "tap"]
        .iter()
        .filter_map(|name| Gesture::from_name(name))
        .map(|g| trigger.handle(g, &mut robot, &mut sink))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            TriggerOutcome::CueOnly,
            TriggerOutcome::CueOnly,
            TriggerOutcome::Started(PathId::PathB),
            TriggerOutcome::Ignored,
        ]
    );
    assert_eq!(shared.snapshot().path, Some(PathId::PathB));
}

#[test]
fn fling_shows_laughing_face_for_fifteen_seconds() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let (mut robot, mut sink) = (MockRobot::new(), RecordingSink::new());

    trigger.handle(Gesture::Fling, &mut robot, &mut sink);

    assert_eq!(
        robot.calls,
        vec![
            RobotCall::Sound(Sound::Purr),
            RobotCall::TemporaryFace {
                expression: Expression::Laughing,
                duration_ms: 15_000,
                revert_to: Expression::Normal
            },
        ]
    );
    assert!(sink.events.is_empty());
}

#[test]
fn cue_durations_come_from_config() {
    let shared = SharedSelection::new();
    let config = SystemConfig {
        tap_expression_ms: 700,
        fling_expression_ms: 3_000,
        ..SystemConfig::default()
    };
    let trigger = TriggerHandler::new(&shared, &config);
    let mut robot = MockRobot::new();
    let mut sink = RecordingSink::new();

    trigger.handle(Gesture::Tap, &mut robot, &mut sink);
    trigger.handle(Gesture::Fling, &mut robot, &mut sink);

    let durations: Vec<u32> = robot
        .calls
        .iter()
        .filter_map(|c| match c {
            RobotCall::TemporaryFace { duration_ms, .. } => Some(*duration_ms),
            _ => None,
        })
        .collect();
    assert_eq!(durations, vec![700, 3_000]);
}

#[test]
fn trigger_records_tick_period() {
    let shared = SharedSelection::new();
    let config = SystemConfig {
        tick_period_ms: 250,
        ..SystemConfig::default()
    };
    let trigger = TriggerHandler::new(&shared, &config);
    trigger.handle(Gesture::Caress, &mut MockRobot::new(), &mut RecordingSink::new());
    assert_eq!(shared.snapshot().tick_period_ms, 250);
}

#[test]
fn touch_does_nothing_at_all() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let (mut robot, mut sink) = (MockRobot::new(), RecordingSink::new());

    for _ in 0..10 {
        assert_eq!(
            trigger.handle(Gesture::Touch, &mut robot, &mut sink),
            TriggerOutcome::CueOnly
        );
    }
    assert!(robot.calls.is_empty());
    assert!(sink.events.is_empty());
    assert_eq!(shared.snapshot(), Selection::IDLE);
}

#[test]
fn ignored_triggers_still_cue_and_report() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let mut stepper = PathStepper::new(&shared);
    let (mut robot, mut sink) = (MockRobot::new(), RecordingSink::new());

    trigger.handle(Gesture::Tap, &mut robot, &mut sink);
    for _ in 0..30 {
        stepper.step(&mut robot, &mut sink);
    }
    robot.clear();
    sink.events.clear();
    let before = shared.snapshot();

    trigger.handle(Gesture::Caress, &mut robot, &mut sink);
    trigger.handle(Gesture::Tap, &mut robot, &mut sink);

    assert_eq!(shared.snapshot(), before);
    assert_eq!(robot.sounds(), vec![Sound::Purr, Sound::Ouch]);
    assert_eq!(
        sink.events,
        vec![
            AppEvent::TriggerIgnored {
                gesture: Gesture::Caress
            },
            AppEvent::TriggerIgnored { gesture: Gesture::Tap },
        ]
    );
}

#[test]
fn trigger_between_finish_and_next_tick_is_accepted() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let (mut robot, mut sink) = (MockRobot::new(), RecordingSink::new());

    // Parked on the terminal phase: still active until the stepper runs it.
    trigger.handle(Gesture::Tap, &mut robot, &mut sink);
    shared.update(|s| s.phase = 6);
    assert_eq!(
        trigger.handle(Gesture::Caress, &mut robot, &mut sink),
        TriggerOutcome::Ignored
    );

    let mut stepper = PathStepper::new(&shared);
    stepper.step(&mut robot, &mut sink);
    assert_eq!(
        trigger.handle(Gesture::Caress, &mut robot, &mut sink),
        TriggerOutcome::Started(PathId::PathB)
    );
}
