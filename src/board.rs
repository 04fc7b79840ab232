//! JS-facing gesture board.
//!
//! The page owns the DOM, the camera driver, and the hand detector. It hands
//! this type the elements once, then forwards events:
//!
//! - camera metadata loaded → [`GestureBoard::resize_layers`]
//! - detector results → [`GestureBoard::on_results`] with the flat landmark buffer
//! - start / stop buttons → [`GestureBoard::start`] / [`GestureBoard::stop`]
//! - keydown → [`GestureBoard::on_key_down`]
//! - color / brush inputs → [`GestureBoard::set_color`] / [`GestureBoard::set_brush_width`]
//! - save button → [`GestureBoard::download`]
//!
//! The deferred clear runs from a `setTimeout` callback that re-enters the
//! engine through a weak reference, so a dropped board never fires.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement, HtmlElement, HtmlVideoElement};

use crate::config::SessionConfig;
use crate::engine::{Action, EngineCore};
use crate::error::BoardError;
use crate::input::Key;
use crate::landmark::parse_hands;
use crate::render::{CanvasSurface, OutputLayer};
use crate::timer::BrowserScheduler;

type BoardCore = EngineCore<CanvasSurface, BrowserScheduler>;

#[wasm_bindgen]
pub struct GestureBoard {
    core: Rc<RefCell<BoardCore>>,
    output: OutputLayer,
    video: HtmlVideoElement,
    status: HtmlElement,
}

#[wasm_bindgen]
impl GestureBoard {
    /// Bind the board to its elements. `config_json` is an optional
    /// [`SessionConfig`] object in JSON form.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or a canvas has no 2D context; nothing
    /// is set up in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(
        video: HtmlVideoElement,
        output_canvas: HtmlCanvasElement,
        draw_canvas: HtmlCanvasElement,
        status: HtmlElement,
        config_json: Option<String>,
    ) -> Result<GestureBoard, JsValue> {
        let config = match config_json {
            Some(raw) => SessionConfig::from_json(&raw)?,
            None => SessionConfig::default(),
        };
        let surface = CanvasSurface::new(draw_canvas)?;
        let output = OutputLayer::new(output_canvas)?;

        let core = Rc::new_cyclic(|weak: &Weak<RefCell<BoardCore>>| {
            let weak = weak.clone();
            let scheduler = BrowserScheduler::new(move || fire_clear(&weak));
            RefCell::new(EngineCore::new(surface, scheduler, config))
        });

        Ok(Self { core, output, video, status })
    }

    // --- Setup surface ---

    /// Detector options to pass to the hand detector's `setOptions`.
    ///
    /// # Errors
    ///
    /// Fails only if the options cannot be serialized.
    #[wasm_bindgen(js_name = detectorOptions)]
    pub fn detector_options(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.core.borrow().config().detector).map_err(BoardError::from)?;
        js_sys::JSON::parse(&json)
    }

    /// Requested capture width for the camera driver.
    #[wasm_bindgen(getter, js_name = captureWidth)]
    pub fn capture_width(&self) -> u32 {
        self.core.borrow().config().capture.width
    }

    /// Requested capture height for the camera driver.
    #[wasm_bindgen(getter, js_name = captureHeight)]
    pub fn capture_height(&self) -> u32 {
        self.core.borrow().config().capture.height
    }

    /// Size both layers to the video's native dimensions. Clears both.
    ///
    /// # Errors
    ///
    /// Fails if the draw layer cannot be resized.
    #[wasm_bindgen(js_name = resizeLayers)]
    pub fn resize_layers(&mut self) -> Result<(), JsValue> {
        let (width, height) = (self.video.video_width(), self.video.video_height());
        self.output.resize(width, height);
        self.core.borrow_mut().resize(width, height)?;
        Ok(())
    }

    // --- Session ---

    pub fn start(&mut self) {
        let actions = self.core.borrow_mut().start();
        self.show(&actions);
    }

    /// Stop tracking and clear both layers. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Fails if the draw layer cannot be cleared.
    pub fn stop(&mut self) -> Result<(), JsValue> {
        let result = self.core.borrow_mut().stop();
        self.output.clear();
        self.show(&result?);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isTracking)]
    pub fn is_tracking(&self) -> bool {
        self.core.borrow().is_tracking()
    }

    // --- Frames ---

    /// Handle one detector result: `landmarks` holds `num_hands` blocks of 21
    /// `(x, y, z)` triples in detection order.
    ///
    /// # Errors
    ///
    /// Fails on a short landmark buffer or a failed canvas call.
    #[wasm_bindgen(js_name = onResults)]
    pub fn on_results(&mut self, landmarks: &[f32], num_hands: usize) -> Result<(), JsValue> {
        if !self.core.borrow().is_tracking() {
            return Ok(());
        }
        let hands = parse_hands(landmarks, num_hands)?;
        self.output.draw_frame(&self.video, &hands)?;
        let actions = self.core.borrow_mut().on_frame(&hands)?;
        self.show(&actions);
        Ok(())
    }

    // --- Commands ---

    /// # Errors
    ///
    /// Fails if the snapshot cannot be written back.
    pub fn undo(&mut self) -> Result<(), JsValue> {
        let actions = self.core.borrow_mut().undo()?;
        self.show(&actions);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails if the bound command fails.
    #[wasm_bindgen(js_name = onKeyDown)]
    pub fn on_key_down(&mut self, key: String) -> Result<(), JsValue> {
        let actions = self.core.borrow_mut().on_key_down(&Key(key))?;
        self.show(&actions);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails unless `color` is `#rgb` or `#rrggbb`.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.core.borrow_mut().set_color(color)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails unless `width` is positive.
    #[wasm_bindgen(js_name = setBrushWidth)]
    pub fn set_brush_width(&mut self, width: f64) -> Result<(), JsValue> {
        self.core.borrow_mut().set_brush_width(width)?;
        Ok(())
    }

    // --- Export ---

    /// The draw layer as a PNG data URL.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot be serialized.
    #[wasm_bindgen(js_name = exportDataUrl)]
    pub fn export_data_url(&self) -> Result<String, JsValue> {
        Ok(self.core.borrow().surface().to_data_url()?)
    }

    /// Download the draw layer under the configured filename.
    ///
    /// # Errors
    ///
    /// Fails if there is no document or the canvas cannot be serialized.
    pub fn download(&self) -> Result<(), JsValue> {
        let url = self.export_data_url()?;
        let filename = self.core.borrow().config().export_filename.clone();
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BoardError::Unavailable("document"))?;
        let anchor = document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| BoardError::Unavailable("anchor element"))?;
        anchor.set_download(&filename);
        anchor.set_href(&url);
        anchor.click();
        log::info!("exported drawing as {filename}");
        Ok(())
    }

    fn show(&self, actions: &[Action]) {
        for action in actions {
            if let Action::StatusChanged(status) = action {
                self.status.set_inner_text(&status.to_string());
            }
        }
    }
}

fn fire_clear(core: &Weak<RefCell<BoardCore>>) {
    let Some(core) = core.upgrade() else {
        return;
    };
    let Ok(mut core) = core.try_borrow_mut() else {
        log::warn!("clear timer fired while the engine was busy");
        return;
    };
    if let Err(err) = core.fire_clear() {
        log::warn!("deferred clear failed: {err}");
    }
}
