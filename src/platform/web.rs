//! Browser platform glue
//!
//! Frame callbacks and document-level listeners are modeled as owned guards:
//! dropping a `FrameHandle` cancels the pending animation frame, dropping a
//! `KeydownListener` detaches the handler. This keeps teardown symmetric on
//! every exit path and prevents callbacks after disposal; never hold one of
//! these past the life of the state it mutates.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, KeyboardEvent};

/// A pending `requestAnimationFrame` callback; cancelled on drop
pub struct FrameHandle {
    id: i32,
    _closure: Closure<dyn FnMut(f64)>,
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        // Cancelling an already-fired id is a no-op
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// Schedule a one-shot frame callback
pub fn request_frame(callback: impl FnOnce(f64) + 'static) -> Result<FrameHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::once(move |time: f64| callback(time));
    let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    Ok(FrameHandle {
        id,
        _closure: closure,
    })
}

/// A document-level keydown handler; detached on drop.
///
/// Each dial instance registers its own listener so multiple dials never
/// share (or leak) ambient handler state.
pub struct KeydownListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    pub fn attach(mut callback: impl FnMut(KeyboardEvent) + 'static) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let closure =
            Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| callback(event));
        let target: EventTarget = document.into();
        target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        Ok(Self { target, closure })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}

/// Query the reduced-motion media preference
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
