//! Platform abstraction layer
//!
//! Browser glue (frame scheduling handles, scoped event listeners, media
//! queries) lives in `web`. Native hosts drive the dial engine directly from
//! their own loop, so there is nothing to abstract there.

#[cfg(target_arch = "wasm32")]
pub mod web;
