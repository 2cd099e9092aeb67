/// Host frame source (requestAnimationFrame in the browser).
pub trait FrameScheduler {
    type Handle: Copy;
    type Error: std::fmt::Debug;

    fn request_frame(&mut self) -> Result<Self::Handle, Self::Error>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unmounted,
    Building,
    Animating,
}

/// Cancellable, self-rescheduling per-frame task.
///
/// Exactly one frame is pending while animating. `stop` cancels it and is
/// safe to call any number of times; dropping the loop stops it.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    phase: Phase,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            phase: Phase::Unmounted,
            frames: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter `Building`. The pending frame, if any, is left in place.
    pub fn begin_build(&mut self) {
        self.phase = Phase::Building;
    }

    /// Leave `Building`, back to `Animating` when the loop is live.
    pub fn end_build(&mut self) {
        if self.phase == Phase::Building && self.pending.is_some() {
            self.phase = Phase::Animating;
        }
    }

    pub fn start(&mut self) -> Result<(), S::Error> {
        if self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(self.scheduler.request_frame()?);
        self.phase = Phase::Animating;
        Ok(())
    }

    /// Run one step for the frame that just fired and queue the next one.
    /// Returns whether a step ran.
    pub fn on_frame(&mut self, step: impl FnOnce(u64)) -> Result<bool, S::Error> {
        if self.pending.take().is_none() {
            return Ok(false);
        }
        self.frames += 1;
        step(self.frames);
        match self.scheduler.request_frame() {
            Ok(h) => {
                self.pending = Some(h);
                Ok(true)
            }
            Err(e) => {
                self.phase = Phase::Unmounted;
                Err(e)
            }
        }
    }

    /// Cancel the pending frame. Returns `false` when already stopped.
    pub fn stop(&mut self) -> bool {
        let was_live = self.phase != Phase::Unmounted || self.pending.is_some();
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
        self.phase = Phase::Unmounted;
        was_live
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Counts mount/unmount requests so a mount that finishes asynchronously can
/// tell whether a newer request overtook it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountGeneration(u64);

impl MountGeneration {
    /// Record a new request and return its ticket.
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}
