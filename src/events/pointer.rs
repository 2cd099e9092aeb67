use crate::core::{OverlayEvent, Pointer};
use crate::dom::DomHandler;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First active touch point, if any.
#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<Pointer> {
    ev.touches()
        .get(0)
        .map(|t| Pointer::at(t.client_x() as f32, t.client_y() as f32))
}

/// Handler that feeds `pointer` for one of the pointer/touch events.
/// Leave and end events (and anything else routed here) reset it off canvas.
pub fn pointer_handler(event: OverlayEvent, pointer: Rc<Cell<Pointer>>) -> DomHandler {
    match event {
        OverlayEvent::PointerMove => Box::new(move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                pointer.set(Pointer::at(ev.client_x() as f32, ev.client_y() as f32));
            }
        }),
        OverlayEvent::TouchMove => Box::new(move |ev: web::Event| {
            if let Some(touch) = ev.dyn_ref::<web::TouchEvent>().and_then(first_touch) {
                pointer.set(touch);
            }
        }),
        _ => Box::new(move |_: web::Event| pointer.set(Pointer::OFF_CANVAS)),
    }
}
