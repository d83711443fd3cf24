//! Fault-detection landing page compiled to WebAssembly: static marketing copy
//! rendered into the DOM over a canvas of slowly drifting translucent dots.

mod utils;

pub mod animator;
pub mod background;
pub mod canvas;
pub mod color;
pub mod config;
pub mod content;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod page;
pub mod particle;
pub mod surface;
#[cfg(feature = "frame-timing")]
pub mod timer;

use wasm_bindgen::prelude::*;

pub use animator::{Animator, FrameStatus};
pub use background::ParticleBackground;
pub use color::Color;
pub use config::FieldConfig;
pub use error::{PageError, PageResult};
pub use field::ParticleField;
pub use page::mount_page;
pub use particle::{Particle, Reflection};
pub use surface::Surface;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    utils::init_logging();
}
