//! PathRunner: host simulation entry point.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  stdin gestures ──▶ TriggerHandler ─┐                         │
//! │  (main thread)                       │                        │
//! │                                      ▼                        │
//! │                              SharedSelection                  │
//! │                                      ▲                        │
//! │  PeriodicDriver ──▶ PathStepper ─────┘──▶ ConsoleRobot        │
//! │  (motion thread)                          (MotorPort+CuePort) │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Type `tap`, `caress`, `fling` or `touch` to deliver a gesture, `status`
//! to print the selection, `quit` to stop.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use pathrunner::adapters::config_file::JsonConfigFile;
use pathrunner::adapters::console::ConsoleRobot;
use pathrunner::adapters::log_sink::LogEventSink;
use pathrunner::app::commands::Gesture;
use pathrunner::app::ports::ConfigPort;
use pathrunner::app::stepper::PathStepper;
use pathrunner::app::trigger::TriggerHandler;
use pathrunner::config::SystemConfig;
use pathrunner::drivers::periodic::PeriodicDriver;
use pathrunner::fsm::selection::SharedSelection;

#[derive(Debug, Parser)]
#[command(name = "pathrunner", version, about = "Drive scripted robot paths from gestures")]
struct Args {
    /// JSON configuration file; defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the tick period in milliseconds
    #[arg(long)]
    period_ms: Option<u32>,

    /// Drop every Nth motor command to simulate a flaky link (0 = never)
    #[arg(long, default_value_t = 0)]
    link_loss_every: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!("PathRunner v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => JsonConfigFile::new(path)
            .load()
            .with_context(|| format!("loading {}", path.display()))?,
        None => SystemConfig::default(),
    };
    if let Some(ms) = args.period_ms {
        config.tick_period_ms = ms;
    }
    config.validate()?;

    let selection = SharedSelection::new();
    let stop = AtomicBool::new(false);
    let trigger = TriggerHandler::new(&selection, &config);

    thread::scope(|scope| {
        scope.spawn(|| {
            let mut stepper = PathStepper::new(&selection);
            let mut robot = ConsoleRobot::new("motion").with_link_loss_every(args.link_loss_every);
            let mut sink = LogEventSink::new();
            PeriodicDriver::new(config.tick_period_ms).run(&stop, || {
                stepper.step(&mut robot, &mut sink);
            });
            info!(
                "motion: {} ticks committed, {} lost to link faults",
                stepper.tick_count(),
                stepper.fault_count()
            );
        });

        let result = read_gestures(&trigger, &selection);
        stop.store(true, Ordering::Release);
        result
    })
}

fn read_gestures(trigger: &TriggerHandler<'_>, selection: &SharedSelection) -> Result<()> {
    let mut cues = ConsoleRobot::new("touch");
    let mut sink = LogEventSink::new();

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "status" => info!("{:?}", selection.snapshot()),
            name => match Gesture::from_name(name) {
                Some(gesture) => {
                    trigger.handle(gesture, &mut cues, &mut sink);
                }
                None => warn!("unknown gesture '{}'", name),
            },
        }
    }
    Ok(())
}
