//! Gesture-controlled drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. A hand
//! detector on the page reports 21 landmarks per hand per frame; this crate
//! classifies each hand's pose and turns the sequence of poses into strokes,
//! erasures, a held-palm clear, and undo on a persistent draw layer shown over
//! the mirrored camera feed. The host JavaScript layer only wires DOM events,
//! the camera, and the detector to [`board::GestureBoard`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Gesture interpreter and session state ([`engine::EngineCore`]) |
//! | [`gesture`] | Pure pose classifier |
//! | [`landmark`] | Landmark and hand types, detector buffer parsing |
//! | [`camera`] | Mirrored frame-to-layer coordinates |
//! | [`surface`] | Draw-layer primitives the engine relies on |
//! | `raster` | In-memory draw layer with PNG export (`headless` feature) |
//! | [`render`] | Browser draw layer and output composite |
//! | [`board`] | `wasm_bindgen` entry point for the page |
//! | [`timer`] | Cancellable deferred clear |
//! | [`history`] | Bounded undo history |
//! | [`input`] | Key bindings |
//! | [`config`] | Session configuration |
//! | [`consts`] | Landmark indices and defaults |

pub mod board;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod history;
pub mod input;
pub mod landmark;
#[cfg(any(test, feature = "headless"))]
pub mod raster;
pub mod render;
pub mod surface;
pub mod timer;

use wasm_bindgen::prelude::*;

/// Runs once when the module loads: panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
}
