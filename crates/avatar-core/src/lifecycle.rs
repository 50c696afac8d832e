//! Start/stop lifecycle and the self-rescheduling tick loop.
//!
//! The host owns the actual frame source (`requestAnimationFrame`, a winit
//! redraw, a test queue) behind [`FrameScheduler`]. Every scheduled frame
//! carries the [`LoopHandle`] of the loop that asked for it; frames that
//! arrive for a handle that is no longer live draw nothing and schedule
//! nothing, so two modes can never paint the same surface in one frame.

use crate::config::EngineConfig;
use crate::draw::Surface;
use crate::engine::ParticleField;
use crate::mode::Mode;

/// Identifies one activation. A new handle is minted on every start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopHandle {
    generation: u64,
}

impl LoopHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Host frame source.
pub trait FrameScheduler {
    type Token;

    /// Requests one frame for `handle`; the host later calls
    /// [`Visualizer::on_frame`] with the same handle.
    fn schedule(&mut self, handle: LoopHandle) -> Self::Token;

    /// Best-effort cancellation of a frame that has not fired yet.
    fn cancel(&mut self, token: Self::Token);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Active(Mode),
    TornDown,
}

struct ActiveLoop<T> {
    handle: LoopHandle,
    mode: Mode,
    size: f32,
    field: Option<ParticleField>,
    pending: Option<T>,
}

pub struct Visualizer<S: FrameScheduler> {
    scheduler: S,
    config: EngineConfig,
    state: LoopState,
    active: Option<ActiveLoop<S::Token>>,
    generation: u64,
}

impl<S: FrameScheduler> Visualizer<S> {
    pub fn new(scheduler: S, config: EngineConfig) -> Self {
        Self {
            scheduler,
            config,
            state: LoopState::Uninitialized,
            active: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn handle(&self) -> Option<LoopHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    pub fn mode(&self) -> Option<Mode> {
        self.active.as_ref().map(|a| a.mode)
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.active.as_ref().and_then(|a| a.field.as_ref())
    }

    pub fn is_live(&self, handle: LoopHandle) -> bool {
        self.active.as_ref().is_some_and(|a| a.handle == handle)
    }

    /// Mounts `mode` at `size`, reusing the running loop only when both are
    /// unchanged.
    pub fn render(&mut self, mode: Mode, size: f32) -> LoopHandle {
        if let Some(active) = &self.active {
            if active.mode == mode && active.size == size {
                return active.handle;
            }
        }
        self.start(mode, size)
    }

    /// Tears down whatever is running, then builds `mode` and schedules its
    /// first frame. The old frame is cancelled before the new one is
    /// requested.
    pub fn start(&mut self, mode: Mode, size: f32) -> LoopHandle {
        self.teardown();
        self.generation += 1;
        let handle = LoopHandle {
            generation: self.generation,
        };
        let field = ParticleField::new(mode, size, &self.config);
        let pending = field.as_ref().map(|_| self.scheduler.schedule(handle));
        log::info!(
            "[loop] start {} at {}px (generation {}, {})",
            mode,
            size,
            handle.generation,
            if pending.is_some() { "ticking" } else { "no tick loop" }
        );
        self.active = Some(ActiveLoop {
            handle,
            mode,
            size,
            field,
            pending,
        });
        self.state = LoopState::Active(mode);
        handle
    }

    /// Cancels the pending frame and releases the point set.
    pub fn stop(&mut self) {
        if self.teardown() {
            log::info!("[loop] stopped");
        }
        self.state = LoopState::TornDown;
    }

    fn teardown(&mut self) -> bool {
        let Some(mut active) = self.active.take() else {
            return false;
        };
        if let Some(token) = active.pending.take() {
            self.scheduler.cancel(token);
        }
        true
    }

    /// Runs one frame for `handle`. Returns false, without drawing, when the
    /// handle is stale. A live frame ticks, draws and schedules exactly one
    /// successor.
    pub fn on_frame(
        &mut self,
        handle: LoopHandle,
        timestamp_ms: f64,
        surface: &mut dyn Surface,
    ) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.handle != handle {
            return false;
        }
        active.pending = None;
        let Some(field) = active.field.as_mut() else {
            return false;
        };
        field.tick(timestamp_ms, surface);
        active.pending = Some(self.scheduler.schedule(handle));
        true
    }
}
