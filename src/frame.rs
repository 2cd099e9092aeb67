use crate::core::{
    FieldParams, FrameScheduler, Overlay, OverlayEvent, ParticleField, Pointer, TextLayout,
};
use crate::dom::{self, DomHandler, DomRegistry};
use crate::events;
use crate::render;
use anyhow::anyhow;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed frame source.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;
    type Error = JsValue;

    fn request_frame(&mut self) -> Result<i32, JsValue> {
        let cb = self.callback.borrow();
        let f = cb
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback released"))?;
        self.window.request_animation_frame(f.as_ref().unchecked_ref())
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

pub struct Scene {
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: ParticleField,
    overlay: Overlay<RafScheduler, DomRegistry>,
    pointer: Rc<Cell<Pointer>>,
    rng: StdRng,
}

impl Scene {
    /// Resize the overlay to the viewport and recreate every particle.
    pub fn rebuild(&mut self) -> anyhow::Result<usize> {
        let t0 = Instant::now();
        self.overlay.frame_loop.begin_build();
        let result = self.build_pass();
        self.overlay.frame_loop.end_build();
        match &result {
            Ok(n) => log::debug!("[build] {} particles in {:?}", n, t0.elapsed()),
            // the canvas may already be resized; old anchors no longer fit it
            Err(_) => self.field.clear(),
        }
        result
    }

    fn build_pass(&mut self) -> anyhow::Result<usize> {
        let viewport = dom::viewport(&self.window)?;
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
        let layout = TextLayout::for_viewport(viewport);
        // scratch surface lives only inside rasterize_text
        let mask = dom::rasterize_text(&self.document, viewport, &layout)?;
        Ok(self.field.rebuild(&mask, &layout, &mut self.rng))
    }

    pub fn frame(&mut self) {
        let Scene {
            canvas,
            ctx,
            field,
            overlay,
            pointer,
            rng,
            ..
        } = self;
        let stepped = overlay.frame_loop.on_frame(|_| {
            field.step(pointer.get(), rng);
            if let Err(e) = render::draw_field(ctx, canvas, field) {
                log::error!("render error: {:?}", e);
            }
        });
        if let Err(e) = stepped {
            log::error!("[frame] could not schedule next frame: {:?}", e);
        }
    }

    pub fn frames(&self) -> u64 {
        self.overlay.frame_loop.frames()
    }
}

/// A mounted overlay: the scene and its frame callback. The scene's
/// `Overlay` owns the frame loop and the five listeners; everything is
/// released on `unmount` or drop.
pub struct Mount {
    scene: Rc<RefCell<Scene>>,
    callback: FrameCallback,
}

impl Mount {
    pub fn new(canvas_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let canvas = dom::overlay_canvas(&document, canvas_id)?;
        let ctx = dom::context_2d(&canvas)?;
        let registry = DomRegistry::new(&window, &document)?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pointer = Rc::new(Cell::new(Pointer::OFF_CANVAS));
        let scene = Rc::new(RefCell::new(Scene {
            window: window.clone(),
            document,
            canvas,
            ctx,
            field: ParticleField::new(FieldParams::default()),
            overlay: Overlay::new(
                RafScheduler {
                    window,
                    callback: callback.clone(),
                },
                registry,
            ),
            pointer: pointer.clone(),
            rng: StdRng::from_entropy(),
        }));

        let scene_tick = scene.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scene_tick.borrow_mut().frame();
        }) as Box<dyn FnMut()>));

        // From here on an early return drops `mount`, which tears down.
        let mount = Mount { scene, callback };

        let built = mount.scene.borrow_mut().rebuild();
        built?;

        let scene_resize = mount.scene.clone();
        let mounted = mount.scene.borrow_mut().overlay.mount(|event| match event {
            OverlayEvent::Resize => {
                let scene = scene_resize.clone();
                Box::new(move |_: web::Event| {
                    if let Err(e) = scene.borrow_mut().rebuild() {
                        log::warn!("[resize] rebuild failed: {:?}", e);
                    }
                }) as DomHandler
            }
            _ => events::pointer_handler(event, pointer.clone()),
        });
        mounted.map_err(|e| anyhow!("{:?}", e))?;

        {
            let scene = mount.scene.borrow();
            log::info!(
                "[mount] #{} with {} particles, {} listeners",
                canvas_id,
                scene.field.len(),
                scene.overlay.listeners.len()
            );
        }
        Ok(mount)
    }

    /// Stop the frame loop, remove all listeners and release the frame
    /// callback. Returns `false` when already unmounted.
    pub fn unmount(&mut self) -> bool {
        let (live, frames) = {
            let mut scene = self.scene.borrow_mut();
            let frames = scene.frames();
            (scene.overlay.unmount(), frames)
        };
        // breaks the scene <-> callback cycle
        let released = self.callback.borrow_mut().take();
        drop(released);
        if live {
            log::info!("[unmount] stopped after {} frames", frames);
        }
        live
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.unmount();
    }
}
