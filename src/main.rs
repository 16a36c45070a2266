//! Meridian Dial entry point
//!
//! The web host wires keyboard input and the animation-frame loop to the dial
//! engine and writes the computed stick path into the page. The native build
//! runs a headless autoplay sweep as a smoke demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsValue;

    use meridian_dial::consts::BAND_SAMPLES;
    use meridian_dial::dial::{DialKey, meridian_curve, svg_path_data};
    use meridian_dial::platform::web::{
        FrameHandle, KeydownListener, prefers_reduced_motion, request_frame,
    };
    use meridian_dial::{Autoplay, DialConfig, DialController, FrameThrottle, SlicePartition};

    /// Fixed viewBox; the page scales it with the container
    const VIEWBOX: f32 = 1000.0;

    struct Host {
        controller: DialController,
        autoplay: Autoplay,
        throttle: FrameThrottle<f32>,
        partition: SlicePartition,
        frame: Option<FrameHandle>,
        _keys: Option<KeydownListener>,
    }

    impl Host {
        fn new() -> Self {
            let config = DialConfig {
                auto_play: true,
                reduced_motion: prefers_reduced_motion(),
                ..Default::default()
            };
            let step = config.autoplay_step();
            let auto_play = config.auto_play;
            let controller = DialController::new(config);

            let mut autoplay = Autoplay::new(step);
            if !auto_play {
                autoplay.disable();
            }

            let partition =
                SlicePartition::compute(controller.state().slices, Self::center(), Self::radius());

            Self {
                controller,
                autoplay,
                throttle: FrameThrottle::new(),
                partition,
                frame: None,
                _keys: None,
            }
        }

        fn center() -> Vec2 {
            Vec2::splat(VIEWBOX / 2.0)
        }

        fn radius() -> f32 {
            VIEWBOX / 2.0 * 0.9
        }

        fn frame_tick(&mut self, _time: f64) {
            // Last-write-wins per frame: coalesced manual input first, then
            // the autoplay sweep over whatever is authoritative now
            if let Some(signed) = self.throttle.fire() {
                self.controller.set_signed_angle(signed);
            }
            if self.autoplay.is_enabled() {
                let next = self.autoplay.tick(self.controller.state().angle);
                self.controller.set_internal_angle(next);
            }
            if self.partition.len() != self.controller.state().slices as usize {
                self.partition = SlicePartition::compute(
                    self.controller.state().slices,
                    Self::center(),
                    Self::radius(),
                );
            }
            self.render();
        }

        /// Push computed values into the page (the SVG skeleton lives in
        /// index.html; the engine only supplies path data and text)
        fn render(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            for slice in &self.partition.slices {
                let Some(el) = document.get_element_by_id(&format!("slice-{}", slice.index)) else {
                    continue;
                };
                let _ = el.set_attribute("d", &svg_path_data(&slice.boundary, true));
                let class = if self.controller.active_slices().contains(slice.index) {
                    "slice active"
                } else {
                    "slice"
                };
                let _ = el.set_attribute("class", class);
            }

            if let Some(el) = document.get_element_by_id("stick") {
                let points = meridian_curve(
                    Self::center(),
                    Self::radius(),
                    self.controller.signed_angle(),
                    BAND_SAMPLES,
                );
                let _ = el.set_attribute("d", &svg_path_data(&points, false));
            }

            if let Some(el) = document.get_element_by_id("active-slice") {
                if let Some(first) = self.controller.active_slices().primary() {
                    el.set_text_content(Some(&format!(
                        "Active slice: {} of {}",
                        first + 1,
                        self.controller.state().slices
                    )));
                }
            }
        }
    }

    fn schedule(host: &Rc<RefCell<Host>>) {
        let looped = Rc::clone(host);
        let handle = request_frame(move |time| {
            {
                let mut h = looped.borrow_mut();
                h.frame = None;
                h.frame_tick(time);
            }
            schedule(&looped);
        });
        match handle {
            Ok(handle) => host.borrow_mut().frame = Some(handle),
            Err(err) => log::error!("failed to schedule frame: {err:?}"),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Meridian Dial starting...");

        let host = Rc::new(RefCell::new(Host::new()));

        // Document-scope hotkeys, detached with the host
        let keys = {
            let host = Rc::clone(&host);
            KeydownListener::attach(move |event| {
                if let Some(key) = DialKey::from_key(&event.key()) {
                    event.prevent_default();
                    let mut h = host.borrow_mut();
                    let next = key.apply(h.controller.signed_angle());
                    // The render loop is permanently scheduled, so the
                    // "schedule a frame" signal can be dropped: the next
                    // frame_tick fires the throttle regardless
                    let _ = h.throttle.request(next);
                }
            })?
        };
        host.borrow_mut()._keys = Some(keys);

        schedule(&host);
        log::info!("Meridian Dial running");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_host::run() {
        log::error!("startup failed: {err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meridian Dial (native) - run with `trunk serve` for the web host");
    demo_sweep();
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_sweep() {
    use meridian_dial::consts::AUTOPLAY_STEP_DEGREES;
    use meridian_dial::{Autoplay, DialConfig, DialController};

    let mut controller = DialController::new(DialConfig::default());
    controller.on_slice_activate(|i| log::info!("slice {} lit", i + 1));
    controller.on_slice_deactivate(|i| log::info!("slice {} dimmed", i + 1));

    // One full oscillation: midpoint -> 180 -> 0 -> midpoint at 0.5 deg/frame
    let mut autoplay = Autoplay::new(AUTOPLAY_STEP_DEGREES);
    for _ in 0..720 {
        let next = autoplay.tick(controller.state().angle);
        controller.set_internal_angle(next);
    }

    let state = controller.state();
    match serde_json::to_string(&state) {
        Ok(json) => println!("final state: {json}"),
        Err(err) => log::error!("state serialization failed: {err}"),
    }
    println!("signed angle: {} deg", controller.signed_angle());
}
