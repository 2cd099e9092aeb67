use crate::constants::{OVERLAY_STYLE, SCRATCH_FILL};
use crate::core::constants::DISPLAY_TEXT;
use crate::core::{AlphaMask, EventRegistry, ListenerTarget, OverlayEvent, TextLayout, Viewport};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `innerWidth` x `innerHeight`.
pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let w = window.inner_width().map_err(js_err)?.as_f64().unwrap_or(0.0);
    let h = window.inner_height().map_err(js_err)?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(w.max(0.0) as u32, h.max(0.0) as u32))
}

/// Find the overlay canvas by id, creating and appending it to `<body>` when
/// the page does not provide one.
pub fn overlay_canvas(
    document: &web::Document,
    canvas_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = match document.get_element_by_id(canvas_id) {
        Some(el) => el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow!("#{} is not a canvas", canvas_id))?,
        None => {
            let el = document.create_element("canvas").map_err(js_err)?;
            el.set_id(canvas_id);
            let body = document.body().ok_or_else(|| anyhow!("no body"))?;
            body.append_child(&el).map_err(js_err)?;
            log::info!("[dom] created #{}", canvas_id);
            el.dyn_into::<web::HtmlCanvasElement>()
                .map_err(|_| anyhow!("created element is not a canvas"))?
        }
    };
    canvas
        .set_attribute("style", OVERLAY_STYLE)
        .map_err(js_err)?;
    Ok(canvas)
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("unexpected context type"))
}

/// Draw the display text onto a scratch canvas and read its pixels back.
/// The scratch canvas is dropped before returning.
pub fn rasterize_text(
    document: &web::Document,
    viewport: Viewport,
    layout: &TextLayout,
) -> anyhow::Result<AlphaMask> {
    if viewport.is_empty() {
        return Ok(AlphaMask::empty(viewport.width, viewport.height));
    }
    let scratch = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow!("scratch element is not a canvas"))?;
    scratch.set_width(viewport.width);
    scratch.set_height(viewport.height);
    let ctx = context_2d(&scratch)?;

    let (w, h) = (viewport.width as f64, viewport.height as f64);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(SCRATCH_FILL);
    ctx.set_font(&layout.font_css());
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(DISPLAY_TEXT, layout.origin.x as f64, layout.origin.y as f64)
        .map_err(js_err)?;

    let data = ctx.get_image_data(0.0, 0.0, w, h).map_err(js_err)?;
    let mask = AlphaMask::from_rgba(data.width(), data.height(), data.data().0)?;
    Ok(mask)
}

/// Wait for `document.fonts.ready` so the display font is in place before
/// the first raster.
pub async fn fonts_ready(document: &web::Document) -> anyhow::Result<()> {
    let promise: js_sys::Promise = document.fonts().ready().map_err(js_err)?;
    JsFuture::from(promise).await.map_err(js_err)?;
    Ok(())
}

pub type DomHandler = Box<dyn FnMut(web::Event)>;

pub struct DomRegistration {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// `addEventListener` on the window and the root element.
pub struct DomRegistry {
    window: web::EventTarget,
    document_element: web::EventTarget,
}

impl DomRegistry {
    pub fn new(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow!("no document element"))?;
        Ok(Self {
            window: window.clone().into(),
            document_element: root.into(),
        })
    }

    fn target(&self, target: ListenerTarget) -> &web::EventTarget {
        match target {
            ListenerTarget::Window => &self.window,
            ListenerTarget::DocumentElement => &self.document_element,
        }
    }
}

impl EventRegistry for DomRegistry {
    type Handler = DomHandler;
    type Registration = DomRegistration;
    type Error = JsValue;

    fn register(
        &mut self,
        event: OverlayEvent,
        handler: DomHandler,
    ) -> Result<DomRegistration, JsValue> {
        let closure = Closure::wrap(handler);
        let target = self.target(event.target()).clone();
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(event.passive());
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event.kind(),
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(DomRegistration {
            target,
            kind: event.kind(),
            closure,
        })
    }

    fn unregister(&mut self, registration: DomRegistration) {
        _ = registration.target.remove_event_listener_with_callback(
            registration.kind,
            registration.closure.as_ref().unchecked_ref(),
        );
    }
}
