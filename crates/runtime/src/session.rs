//! Session ownership and tick scheduling.
//!
//! A [`Session`] owns the simulation state and the validated config for one
//! level. The tick itself is synchronous; the runners only decide when ticks
//! happen and where their input and presentation hints go.
use std::sync::Arc;

use tokio::time::{self, MissedTickBehavior};

use platformer_core::config::validate_viewport;
use platformer_core::{
    AnimationState, CameraFollow, CollisionMap, ConfigError, InputSnapshot, LevelError,
    PhysicsStep, PlatformerConfig, SimEnv, SimulationState, TickOutcome, Vec2,
};

use crate::api::{InputSource, PresentationSink, Result, RuntimeError};

/// Aggregate of one runner invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub jumps: u64,
    pub transitions: u64,
    pub position: Vec2,
    pub animation: AnimationState,
}

impl RunSummary {
    fn new(session: &Session) -> Self {
        let player = &session.state.player;
        Self {
            ticks: 0,
            jumps: 0,
            transitions: 0,
            position: player.position,
            animation: player.animation,
        }
    }

    fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        self.jumps += u64::from(outcome.jumped);
        self.transitions += u64::from(outcome.transition.is_some());
        self.position = outcome.position;
        self.animation = outcome.animation;
    }
}

/// One level, one player, one camera.
pub struct Session {
    map: Arc<dyn CollisionMap>,
    config: PlatformerConfig,
    state: SimulationState,
}

impl Session {
    /// Validates `config` and the level bounds, then places the player at `spawn`.
    pub fn new(map: Arc<dyn CollisionMap>, config: PlatformerConfig, spawn: Vec2) -> Result<Self> {
        config.validate()?;
        let bounds = map.bounds();
        if bounds.is_degenerate() {
            return Err(LevelError::DegenerateBounds.into());
        }
        ensure_finite(spawn)?;

        let state = SimulationState::new(spawn, &bounds, &config.camera);
        tracing::debug!(
            x = spawn.x,
            y = spawn.y,
            width = bounds.width,
            height = bounds.height,
            "session created"
        );
        Ok(Self { map, config, state })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &PlatformerConfig {
        &self.config
    }

    pub fn map(&self) -> &dyn CollisionMap {
        self.map.as_ref()
    }

    /// Runs exactly one fixed tick.
    pub fn tick(&mut self, input: InputSnapshot) -> TickOutcome {
        let env = SimEnv::new(self.map.as_ref(), &self.config);
        PhysicsStep::new(&mut self.state).tick(env, input)
    }

    /// Moves the player without collision checks and snaps the camera on the
    /// next tick.
    pub fn teleport(&mut self, point: Vec2) -> Result<()> {
        ensure_finite(point)?;
        self.state.player.teleport(point);
        CameraFollow::snap(&mut self.state.camera);
        tracing::debug!(x = point.x, y = point.y, "teleported");
        Ok(())
    }

    pub fn reset_to_spawn(&mut self) {
        let spawn = self.state.player.spawn;
        self.state.player.teleport(spawn);
        CameraFollow::snap(&mut self.state.camera);
        tracing::debug!(x = spawn.x, y = spawn.y, "reset to spawn");
    }

    /// Replaces the tuning in one step. On error the previous config stays.
    pub fn reconfigure(&mut self, config: PlatformerConfig) -> std::result::Result<(), ConfigError> {
        config.validate()?;

        let camera = &mut self.state.camera;
        if camera.zoom != config.camera.zoom {
            CameraFollow::set_zoom(camera, config.camera.zoom);
        }
        if camera.viewport != config.camera.viewport {
            CameraFollow::resize(camera, config.camera.viewport);
        }
        self.config = config;
        tracing::debug!("session reconfigured");
        Ok(())
    }

    /// Viewport changed size; the camera snaps to its new framing next tick.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> Result<()> {
        let viewport = Vec2::new(width, height);
        validate_viewport(viewport)
            .map_err(|_| RuntimeError::InvalidViewport { width, height })?;

        self.config.camera.viewport = viewport;
        CameraFollow::resize(&mut self.state.camera, viewport);
        tracing::debug!(width, height, "viewport resized");
        Ok(())
    }

    /// Runs `ticks` ticks back to back without sleeping.
    pub fn run_headless<I, P>(&mut self, input: &mut I, sink: &mut P, ticks: u64) -> RunSummary
    where
        I: InputSource + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let mut summary = RunSummary::new(self);
        for _ in 0..ticks {
            self.step(input, sink, &mut summary);
        }
        tracing::debug!(ticks = summary.ticks, jumps = summary.jumps, "headless run finished");
        summary
    }

    /// Runs `ticks` ticks paced at the configured tick rate.
    ///
    /// Ticks that fall behind the schedule are run back to back to catch up,
    /// so the simulated time always matches the wall clock.
    pub async fn run_realtime<I, P>(
        &mut self,
        input: &mut I,
        sink: &mut P,
        ticks: u64,
    ) -> RunSummary
    where
        I: InputSource + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let period = self.config.physics.tick_interval();
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

        let mut summary = RunSummary::new(self);
        tracing::debug!(period_us = period.as_micros() as u64, ticks, "realtime run started");
        for _ in 0..ticks {
            interval.tick().await;
            self.step(input, sink, &mut summary);
        }
        tracing::debug!(ticks = summary.ticks, jumps = summary.jumps, "realtime run finished");
        summary
    }

    fn step<I, P>(&mut self, input: &mut I, sink: &mut P, summary: &mut RunSummary)
    where
        I: InputSource + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let snapshot = input.sample(self.state.tick);
        let outcome = self.tick(snapshot);
        for event in outcome.events() {
            sink.present(event);
        }
        summary.record(&outcome);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("bounds", &self.map.bounds())
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

fn ensure_finite(point: Vec2) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(RuntimeError::InvalidPosition {
            x: point.x,
            y: point.y,
        })
    }
}
