//! seascope: headless PPI scope demo.
//!
//! Runs a seeded scope session with the movement simulation armed, logs
//! status events as they arrive, and prints the final rendered frame as
//! JSON so a frontend (or a curious operator) can inspect the display
//! list.
//!
//! Usage:
//!   seascope [--seed <N>] [--ticks <N>] [--interval <ms>]

use std::process;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use seascope_app::session::SessionConfig;
use seascope_app::sim_loop::{spawn_sim_loop, LoopCommand};
use seascope_core::commands::ScopeCommand;
use seascope_core::constants::DEFAULT_TICK_MS;
use seascope_core::events::StatusEvent;

struct DemoArgs {
    seed: u64,
    max_ticks: u64,
    tick_ms: u64,
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            process::exit(1);
        }
    };

    log::info!(
        "starting scope session: seed={} interval={}ms",
        args.seed,
        args.tick_ms
    );

    let latest_frame = Arc::new(Mutex::new(None));
    let (event_tx, event_rx) = mpsc::channel::<StatusEvent>();
    let cmd_tx = spawn_sim_loop(
        SessionConfig {
            seed: args.seed,
            tick_ms: args.tick_ms,
            ..Default::default()
        },
        Arc::clone(&latest_frame),
        event_tx,
    );

    for cmd in [
        ScopeCommand::RandomizeTarget,
        ScopeCommand::SetShowDataBlock { on: true },
        ScopeCommand::StartMovement,
    ] {
        if cmd_tx.send(LoopCommand::Scope(cmd)).is_err() {
            log::error!("sim loop terminated before startup completed");
            process::exit(1);
        }
    }

    // Watch events until the target leaves the scope or the tick budget
    // runs out.
    let budget = Duration::from_millis(args.tick_ms * args.max_ticks);
    let mut remaining = budget;
    loop {
        let wait = remaining.min(Duration::from_millis(args.tick_ms * 4));
        match event_rx.recv_timeout(wait) {
            Ok(StatusEvent::MovementStarted {
                course_deg,
                speed_kn,
            }) => {
                log::info!("movement started: course {course_deg:.0}\u{00b0} at {speed_kn:.1} kn");
            }
            Ok(StatusEvent::MovementStopped) => {
                log::info!("movement stopped");
                break;
            }
            Ok(StatusEvent::TargetLeftScope {
                bearing_deg,
                range_nm,
            }) => {
                log::info!(
                    "target left the scope at {bearing_deg:.1}\u{00b0} / {range_nm:.1} nm"
                );
                break;
            }
            Ok(StatusEvent::KinematicsFault { message }) => {
                log::error!("kinematics fault: {message}");
                break;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                remaining = remaining.saturating_sub(wait);
                if remaining.is_zero() {
                    log::info!("tick budget exhausted");
                    break;
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let _ = cmd_tx.send(LoopCommand::Shutdown);

    let frame = latest_frame.lock().ok().and_then(|lock| lock.clone());
    match frame {
        Some(frame) => {
            log::info!(
                "final frame: {} primitives, {}",
                frame.primitives.len(),
                frame.readout.summary().replace('\n', "  ")
            );
            match serde_json::to_string_pretty(&frame) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    log::error!("failed to serialize frame: {err}");
                    process::exit(1);
                }
            }
        }
        None => {
            log::error!("no frame was rendered");
            process::exit(1);
        }
    }
}

fn parse_args() -> Result<DemoArgs, String> {
    let mut args = DemoArgs {
        seed: 42,
        max_ticks: 240,
        tick_ms: DEFAULT_TICK_MS,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--seed" => args.seed = parse_value(&flag, iter.next())?,
            "--ticks" => args.max_ticks = parse_value(&flag, iter.next())?,
            "--interval" => args.tick_ms = parse_value(&flag, iter.next())?,
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    if args.tick_ms == 0 {
        return Err("--interval must be at least 1 ms".into());
    }
    Ok(args)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u64, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} needs an integer, got '{value}'"))
}

fn print_usage() {
    eprintln!(
        "seascope: headless PPI scope demo\n\
         \n\
         Options:\n\
           --seed <N>       RNG seed (default: 42)\n\
           --ticks <N>      Movement tick budget before exiting (default: 240)\n\
           --interval <ms>  Movement tick period (default: 500)\n"
    );
}
