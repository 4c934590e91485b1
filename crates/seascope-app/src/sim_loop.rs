//! Movement loop thread — drives the session timer and publishes frames.
//!
//! The session is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest frame is
//! stored in shared state for synchronous polling and status events are
//! forwarded on their own channel. The movement tick only fires while the
//! session is Moving, so stopping movement is all it takes to disarm the
//! timer.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use seascope_core::commands::ScopeCommand;
use seascope_core::events::StatusEvent;
use seascope_core::frame::Frame;

use crate::session::{ScopeSession, SessionConfig};

/// Commands sent from the control layer to the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A scope command to apply to the session.
    Scope(ScopeCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Spawn the simulation loop in a new thread.
///
/// Returns the command sender for the control layer to use.
pub fn spawn_sim_loop(
    config: SessionConfig,
    latest_frame: Arc<Mutex<Option<Frame>>>,
    event_tx: mpsc::Sender<StatusEvent>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("seascope-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, &latest_frame, event_tx);
        })
        .expect("Failed to spawn sim loop thread");

    cmd_tx
}

/// The loop body. Runs until Shutdown or channel disconnect.
fn run_sim_loop(
    config: SessionConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_frame: &Mutex<Option<Frame>>,
    event_tx: mpsc::Sender<StatusEvent>,
) {
    let mut session = ScopeSession::new(config);
    let tick_duration = Duration::from_millis(session.tick_ms());
    let mut next_tick_time = Instant::now() + tick_duration;

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Scope(cmd)) => session.handle_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance movement while armed. A session that stopped between
        //    iterations simply skips the tick.
        if session.is_moving() && Instant::now() >= next_tick_time {
            session.tick_movement();
            next_tick_time += tick_duration;
        }

        // 3. Publish the freshest frame for synchronous polling.
        let frame = session.render();
        if let Ok(mut lock) = latest_frame.lock() {
            *lock = Some(frame);
        }

        // 4. Forward status events.
        for event in session.take_events() {
            if event_tx.send(event).is_err() {
                return;
            }
        }

        // 5. Sleep to the next deadline; reset when far behind to avoid a
        //    catch-up spiral.
        let now = Instant::now();
        if !session.is_moving() {
            next_tick_time = now + tick_duration;
        }
        if next_tick_time > now {
            std::thread::sleep((next_tick_time - now).min(tick_duration));
        } else if now - next_tick_time > tick_duration * 2 {
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Scope(ScopeCommand::StartMovement))
            .unwrap();
        tx.send(LoopCommand::Scope(ScopeCommand::StopMovement))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Scope(ScopeCommand::StartMovement)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Scope(ScopeCommand::StopMovement)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_publishes_frames_and_exit_event() {
        let latest_frame = Arc::new(Mutex::new(None));
        let (event_tx, event_rx) = mpsc::channel();
        let cmd_tx = spawn_sim_loop(
            SessionConfig {
                seed: 42,
                tick_ms: 10,
                ..Default::default()
            },
            Arc::clone(&latest_frame),
            event_tx,
        );

        // Aim the target outward from near the edge and start moving.
        for cmd in [
            ScopeCommand::SetBearing { deg: 0.0 },
            ScopeCommand::SetRange { nm: 23.0 },
            ScopeCommand::SetCourse { deg: 0.0 },
            ScopeCommand::SetSpeed { kn: 3600.0 },
            ScopeCommand::StartMovement,
        ] {
            cmd_tx.send(LoopCommand::Scope(cmd)).unwrap();
        }

        let started = event_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("movement start event");
        assert!(matches!(started, StatusEvent::MovementStarted { .. }));

        // 10 ms ticks at 3600 kn cover 0.01 nm each; the 0.5 nm gap to
        // the exit threshold closes within a second.
        let exited = event_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("scope exit event");
        assert!(
            matches!(exited, StatusEvent::TargetLeftScope { .. }),
            "Expected exit, got {exited:?}"
        );

        let frame = latest_frame.lock().unwrap().clone();
        assert!(frame.is_some(), "Loop should publish frames");

        cmd_tx.send(LoopCommand::Shutdown).unwrap();
    }
}
