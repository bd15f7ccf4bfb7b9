//! Consumers of the per-frame world state.
//!
//! Drawing fish is somebody else's job; these renderers either summarise a
//! frame through `tracing` or stream it as JSON lines for an external viewer.

use anyhow::{Context, Result};
use shoal_core::config::ParameterSet;
use shoal_core::snapshot::WorldSnapshot;
use shoal_core::world::World;
use shoal_core::FlockStats;
use shoal_data::{Agent, Domain, Position};
use std::io::Write;

/// Read-only view handed to a renderer after each tick.
pub struct Frame<'a> {
    pub world: &'a World,
    pub params: &'a ParameterSet,
}

impl Frame<'_> {
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.world.tick
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.world.agents
    }

    #[must_use]
    pub fn domain(&self) -> Domain {
        self.world.domain
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Position> {
        self.world.pointer
    }

    #[must_use]
    pub fn to_snapshot(&self) -> WorldSnapshot {
        self.world.snapshot(self.params)
    }
}

pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Logs a flock summary every `every` frames.
pub struct TraceRenderer {
    every: u64,
}

impl TraceRenderer {
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Renderer for TraceRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.tick().is_multiple_of(self.every) {
            let stats = FlockStats::measure(frame.world);
            let domain = frame.domain();
            tracing::debug!(
                tick = frame.tick(),
                agents = frame.agents().len(),
                width = domain.width,
                height = domain.height,
                pointer = ?frame.pointer(),
                mean_speed = stats.mean_speed,
                mean_orbit_distance = ?stats.mean_orbit_distance,
                "Frame"
            );
        }
        Ok(())
    }
}

/// Writes one [`WorldSnapshot`] per line, every `stride` frames.
pub struct JsonLinesRenderer<W: Write> {
    writer: W,
    stride: u64,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(writer: W, stride: u64) -> Self {
        Self {
            writer,
            stride: stride.max(1),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        if !frame.tick().is_multiple_of(self.stride) {
            return Ok(());
        }
        serde_json::to_writer(&mut self.writer, &frame.to_snapshot())
            .context("serializing frame")?;
        self.writer.write_all(b"\n").context("writing frame")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("flushing frames")
    }
}
