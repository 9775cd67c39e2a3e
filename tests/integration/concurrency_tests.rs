//! Trigger and stepper racing on one `SharedSelection` from two threads.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::mock_hw::{MockRobot, RecordingSink};

use pathrunner::app::commands::Gesture;
use pathrunner::app::events::AppEvent;
use pathrunner::app::stepper::{PathStepper, StepOutcome};
use pathrunner::app::trigger::{TriggerHandler, TriggerOutcome};
use pathrunner::config::SystemConfig;
use pathrunner::fsm::selection::SharedSelection;

#[test]
fn concurrent_triggers_never_tear_the_selection() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let stop = AtomicBool::new(false);
    let started = AtomicU32::new(0);

    let (finished, sink) = thread::scope(|scope| {
        let stepper = scope.spawn(|| {
            let mut stepper = PathStepper::new(&shared);
            let mut robot = MockRobot::new();
            let mut sink = RecordingSink::new();
            let mut finished = 0;
            let mut steps = 0u64;
            let deadline = Instant::now() + Duration::from_secs(10);
            while finished < 3 && Instant::now() < deadline {
                if let StepOutcome::Finished(_) = stepper.step(&mut robot, &mut sink) {
                    finished += 1;
                }
                steps += 1;
                assert!(shared.snapshot().is_consistent());
                if steps % 50 == 0 {
                    thread::yield_now();
                }
            }
            stop.store(true, Ordering::Release);
            (finished, sink)
        });

        scope.spawn(|| {
            let mut robot = MockRobot::new();
            let mut sink = RecordingSink::new();
            let mut i = 0u32;
            while !stop.load(Ordering::Acquire) {
                let gesture = if i % 2 == 0 { Gesture::Tap } else { Gesture::Caress };
                if let TriggerOutcome::Started(_) = trigger.handle(gesture, &mut robot, &mut sink) {
                    started.fetch_add(1, Ordering::Relaxed);
                }
                assert!(shared.snapshot().is_consistent());
                i = i.wrapping_add(1);
                thread::yield_now();
            }
        });

        stepper.join().expect("stepper thread panicked")
    });

    assert_eq!(finished, 3);
    // Every finished run was started by the tapper; at most one more is in flight.
    let started = started.load(Ordering::Relaxed);
    assert!(started == 3 || started == 4, "started {started}");

    let phase_events_ok = sink.events.iter().all(|e| match e {
        AppEvent::PhaseChanged { from, to, .. } => to > from,
        _ => true,
    });
    assert!(phase_events_ok);
}

#[test]
fn racing_triggers_start_exactly_one_run() {
    let shared = SharedSelection::new();
    let trigger = TriggerHandler::new(&shared, &SystemConfig::default());
    let started = AtomicU32::new(0);

    thread::scope(|scope| {
        for n in 0..8 {
            let trigger = &trigger;
            let started = &started;
            scope.spawn(move || {
                let gesture = if n % 2 == 0 { Gesture::Tap } else { Gesture::Caress };
                let outcome = trigger.handle(gesture, &mut MockRobot::new(), &mut RecordingSink::new());
                if matches!(outcome, TriggerOutcome::Started(_)) {
                    started.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    assert_eq!(started.load(Ordering::Relaxed), 1);
    let s = shared.snapshot();
    assert!(s.active);
    assert_eq!(s.run, 1);
}
