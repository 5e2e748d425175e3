//! Air bubbler — CLI entry point.
//!
//! Thin host harness around the pump controller:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  stdin line protocol (host framework channel)    │
//! │        │                                         │
//! │        ▼                                         │
//! │  parse_line ──▶ event queue ──▶ LifecycleHooks   │
//! │                                      │           │
//! │                 PumpController ◀─────┘           │
//! │                       │                          │
//! │                  SoftPwm (GPIO)                  │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Reads the config, opens the PWM output, starts pumping, then blocks
//! consuming host input until the host signals disconnection (explicit
//! `disconnect` line or EOF).

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use air_bubbler::app::events::AppEvent;
use air_bubbler::app::ports::{EventSink, LifecycleHooks};
use air_bubbler::app::service::PumpController;
use air_bubbler::command::{HostInput, parse_line};
use air_bubbler::config::BubblerConfig;
use air_bubbler::drivers::pwm::SoftPwm;
use air_bubbler::events::{LifecycleEvent, dispatch, drain_events, push_event};

// ── Event sink adapter ────────────────────────────────────────
//
// On a full rig this would publish to the host's settings channel
// (duty_cycle is a read-only published setting); as a standalone CLI
// the structured log is the publication surface.

struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        info!("event: {event:?}");
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("{} v{}", air_bubbler::JOB_NAME, env!("CARGO_PKG_VERSION"));

    // Config is loaded once here and injected below — no ambient state.
    let config = match std::env::args().nth(1) {
        Some(path) => BubblerConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => BubblerConfig::default(),
    };
    info!(
        "duty_cycle={:.0}% frequency={} Hz",
        config.duty_cycle_percent, config.frequency_hz
    );

    // PWM acquisition failure is immediate and fatal.
    let pwm = SoftPwm::open_from_config(&config).context("opening PWM output")?;
    let mut controller = PumpController::new(config.duty_cycle_percent, pwm, LogEventSink);

    controller.start_pumping();

    // Block until the host signals disconnection.
    let stdin = std::io::stdin();
    let mut disconnected = false;
    for line in stdin.lock().lines() {
        let line = line.context("reading host input")?;
        match parse_line(&line) {
            None => {}
            Some(Err(token)) => warn!("ignoring unknown host input `{token}`"),
            Some(Ok(HostInput::Lifecycle(event))) => {
                if !push_event(event) {
                    warn!("event queue full, dropping {event:?}");
                }
            }
            Some(Ok(HostInput::Command(cmd))) => controller.handle_command(cmd),
            Some(Ok(HostInput::Status)) => {
                let settings = controller.settings();
                info!(
                    "duty_cycle={:.0}% pumping={}",
                    settings.duty_cycle, settings.pumping
                );
            }
        }

        drain_events(|event| {
            if event == LifecycleEvent::Disconnect {
                disconnected = true;
            }
            dispatch(event, &mut controller);
        });
        if disconnected {
            break;
        }
    }

    if !disconnected {
        // EOF without an explicit disconnect — the host went away.
        controller.on_teardown();
    }

    info!("{} exiting", air_bubbler::JOB_NAME);
    Ok(())
}
