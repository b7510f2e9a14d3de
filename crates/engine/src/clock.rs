//! Background frame clock and the single-consumption frame gate.
//!
//! The clock thread wakes on a fixed short interval, measures the wall-clock
//! delta since its previous cycle, and arms the frame-ready flag. The
//! foreground loop polls [`FrameClock::try_consume_frame`] once per iteration
//! and steps the simulation only when a frame was armed, which caps the
//! simulation rate at the clock rate without ever blocking the renderer.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::debug;

/// Tick bookkeeping shared between the clock thread and the gate.
///
/// The flag and the elapsed time live behind one mutex: a consumer always
/// receives the delta written by the same cycle that armed the flag it just
/// cleared.
#[derive(Debug)]
struct TickState {
    last_tick: Instant,
    elapsed: f32,
    frame_ready: bool,
    running: bool,
}

impl TickState {
    fn new(now: Instant) -> Self {
        Self {
            last_tick: now,
            elapsed: 0.0,
            frame_ready: false,
            running: true,
        }
    }

    /// One clock cycle: record the delta since the previous cycle and arm
    /// the gate.
    fn arm(&mut self, now: Instant) {
        self.elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.frame_ready = true;
    }

    /// Clear the gate and hand out this cycle's delta, or `None` when no
    /// cycle has fired since the last consumption.
    fn consume(&mut self) -> Option<f32> {
        if !self.frame_ready {
            return None;
        }
        self.frame_ready = false;
        Some(self.elapsed)
    }
}

struct Shared {
    state: Mutex<TickState>,
    // Signalled only on shutdown, so the clock thread leaves its timed wait
    // immediately instead of sleeping out the final interval.
    shutdown: Condvar,
}

/// Owns the clock thread for the process lifetime.
///
/// Dropping (or explicitly stopping) the clock clears the running flag,
/// wakes the thread, and joins it; the background thread never outlives the
/// handle.
pub struct FrameClock {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl FrameClock {
    /// Spawn the clock thread with the given tick interval.
    ///
    /// Failing to spawn the thread is a fatal startup error.
    pub fn start(interval: Duration) -> Result<Self> {
        let shared = Arc::new(Shared {
            state: Mutex::new(TickState::new(Instant::now())),
            shutdown: Condvar::new(),
        });

        let thread_shared = Arc::clone(&shared);
        let thread = thread::Builder::new()
            .name("frame-clock".into())
            .spawn(move || tick_loop(&thread_shared, interval))
            .context("failed to spawn the frame clock thread")?;

        debug!("frame clock started, interval {interval:?}");
        Ok(Self {
            shared,
            thread: Some(thread),
        })
    }

    /// Non-blocking frame gate.
    ///
    /// Returns the elapsed seconds measured by the clock cycle being
    /// consumed, or `None` when that cycle has already been consumed. At most
    /// one `Some` is handed out per clock cycle; read and clear happen under
    /// the same lock.
    pub fn try_consume_frame(&self) -> Option<f32> {
        self.lock_state().consume()
    }

    /// Stop and join the clock thread.
    ///
    /// Idempotent; also invoked on drop. The join is what guarantees no
    /// background reader survives the owning scope.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        self.lock_state().running = false;
        self.shared.shutdown.notify_all();
        let _ = thread.join();
        debug!("frame clock stopped");
    }

    fn lock_state(&self) -> MutexGuard<'_, TickState> {
        // The clock thread holds the lock only for flag/delta writes and
        // cannot panic there, so poisoning is unreachable.
        self.shared
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick_loop(shared: &Shared, interval: Duration) {
    let mut state = shared
        .state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    while state.running {
        let (guard, _timed_out) = shared
            .shutdown
            .wait_timeout(state, interval)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state = guard;

        if !state.running {
            break;
        }
        state.arm(Instant::now());
    }
}
