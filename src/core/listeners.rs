/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    /// `<html>`; leave events fire on elements and do not bubble to `window`.
    DocumentElement,
}

/// The five events the overlay listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    Resize,
    PointerMove,
    PointerLeave,
    TouchMove,
    TouchEnd,
}

impl OverlayEvent {
    pub const ALL: [OverlayEvent; 5] = [
        OverlayEvent::Resize,
        OverlayEvent::PointerMove,
        OverlayEvent::PointerLeave,
        OverlayEvent::TouchMove,
        OverlayEvent::TouchEnd,
    ];

    pub fn kind(self) -> &'static str {
        match self {
            OverlayEvent::Resize => "resize",
            OverlayEvent::PointerMove => "pointermove",
            OverlayEvent::PointerLeave => "pointerleave",
            OverlayEvent::TouchMove => "touchmove",
            OverlayEvent::TouchEnd => "touchend",
        }
    }

    pub fn target(self) -> ListenerTarget {
        match self {
            OverlayEvent::PointerLeave => ListenerTarget::DocumentElement,
            _ => ListenerTarget::Window,
        }
    }

    /// Registered passive so touch scrolling is never blocked.
    pub fn passive(self) -> bool {
        self == OverlayEvent::TouchMove
    }
}

/// Host event-listener API (addEventListener in the browser).
pub trait EventRegistry {
    type Handler;
    type Registration;
    type Error: std::fmt::Debug;

    fn register(
        &mut self,
        event: OverlayEvent,
        handler: Self::Handler,
    ) -> Result<Self::Registration, Self::Error>;
    fn unregister(&mut self, registration: Self::Registration);
}

/// Registrations currently attached. Dropping the set removes them all.
pub struct Listeners<R: EventRegistry> {
    registry: R,
    active: Vec<R::Registration>,
}

impl<R: EventRegistry> Listeners<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            active: Vec::with_capacity(OverlayEvent::ALL.len()),
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn add(&mut self, event: OverlayEvent, handler: R::Handler) -> Result<(), R::Error> {
        let reg = self.registry.register(event, handler)?;
        self.active.push(reg);
        Ok(())
    }

    /// Attach one handler per overlay event. If any registration fails the
    /// ones already attached are removed again.
    pub fn wire_all(
        &mut self,
        mut handler_for: impl FnMut(OverlayEvent) -> R::Handler,
    ) -> Result<(), R::Error> {
        for event in OverlayEvent::ALL {
            if let Err(e) = self.add(event, handler_for(event)) {
                self.clear();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Remove every registration; returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.active.len();
        for reg in self.active.drain(..) {
            self.registry.unregister(reg);
        }
        n
    }
}

impl<R: EventRegistry> Drop for Listeners<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
