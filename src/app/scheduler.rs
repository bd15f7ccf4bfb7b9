//! Drives `World::tick` once per frame until stopped.
//!
//! Physics never looks at the clock: a frame that arrives late still
//! advances the world by exactly one step. Input is drained between ticks,
//! so a tick always sees one consistent pointer and parameter set.

use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tokio::time::{self, MissedTickBehavior};

use crate::app::input::InputEvent;
use crate::app::renderer::Renderer;
use crate::app::shutdown::ShutdownManager;
use crate::app::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    TickLimit,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub reason: StopReason,
}

pub struct Scheduler {
    frame_interval: Duration,
    max_ticks: Option<u64>,
    shutdown: ShutdownManager,
}

impl Scheduler {
    /// A `target_fps` of zero runs frames back to back.
    pub fn new(target_fps: u64, max_ticks: Option<u64>, shutdown: ShutdownManager) -> Self {
        let frame_interval = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / target_fps as f64)
        };
        Self {
            frame_interval,
            max_ticks,
            shutdown,
        }
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Runs `ticks` frames synchronously with no pacing.
    pub fn run_ticks(app: &mut App, ticks: u64, renderer: &mut dyn Renderer) -> Result<()> {
        for _ in 0..ticks {
            app.step()?;
            renderer.render(&app.frame())?;
        }
        renderer.finish()
    }

    /// Paced loop: drain input, tick, render, repeat.
    ///
    /// Stops on shutdown or after `max_ticks` frames. A closed input channel
    /// only means no more input will arrive; the flock keeps swimming.
    pub async fn run(
        &self,
        app: &mut App,
        inputs: &mut UnboundedReceiver<InputEvent>,
        renderer: &mut dyn Renderer,
    ) -> Result<RunSummary> {
        let mut interval = (!self.frame_interval.is_zero()).then(|| {
            let mut interval = time::interval(self.frame_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval
        });
        let mut inputs_open = true;
        let mut ticks = 0u64;

        tracing::info!(
            frame_interval_ms = self.frame_interval.as_secs_f64() * 1000.0,
            max_ticks = ?self.max_ticks,
            "Scheduler started"
        );

        let reason = loop {
            if self.shutdown.is_shutdown_requested() {
                break StopReason::Shutdown;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::TickLimit;
            }

            match interval.as_mut() {
                Some(interval) => {
                    interval.tick().await;
                }
                None => tokio::task::yield_now().await,
            }

            while inputs_open {
                match inputs.try_recv() {
                    Ok(event) => app.handle_input(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        tracing::debug!("Input channel closed");
                        inputs_open = false;
                    }
                }
            }

            app.step()?;
            renderer.render(&app.frame())?;
            ticks += 1;
        };

        renderer.finish()?;
        tracing::info!(ticks, ?reason, "Scheduler stopped");
        Ok(RunSummary { ticks, reason })
    }
}
