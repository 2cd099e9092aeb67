use crate::core::lifecycle::{FrameLoop, FrameScheduler};
use crate::core::listeners::{EventRegistry, Listeners, OverlayEvent};

#[derive(Debug)]
pub enum OverlayError<F, L> {
    Frame(F),
    Listener(L),
}

/// The resources a mounted overlay holds: its frame loop and its listeners.
/// `unmount` (or drop) releases both.
pub struct Overlay<S: FrameScheduler, R: EventRegistry> {
    pub frame_loop: FrameLoop<S>,
    pub listeners: Listeners<R>,
}

impl<S: FrameScheduler, R: EventRegistry> Overlay<S, R> {
    pub fn new(scheduler: S, registry: R) -> Self {
        Self {
            frame_loop: FrameLoop::new(scheduler),
            listeners: Listeners::new(registry),
        }
    }

    /// Attach every listener, then start the loop. On failure nothing stays
    /// attached or scheduled.
    pub fn mount(
        &mut self,
        handler_for: impl FnMut(OverlayEvent) -> R::Handler,
    ) -> Result<(), OverlayError<S::Error, R::Error>> {
        self.listeners
            .wire_all(handler_for)
            .map_err(OverlayError::Listener)?;
        if let Err(e) = self.frame_loop.start() {
            self.unmount();
            return Err(OverlayError::Frame(e));
        }
        Ok(())
    }

    /// Stop the loop and detach every listener. Returns `false` when nothing
    /// was live.
    pub fn unmount(&mut self) -> bool {
        let stopped = self.frame_loop.stop();
        let removed = self.listeners.clear();
        stopped || removed > 0
    }
}

impl<S: FrameScheduler, R: EventRegistry> Drop for Overlay<S, R> {
    fn drop(&mut self) {
        self.unmount();
    }
}
