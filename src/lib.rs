//! Yinsh board crate.
//!
//! Draws the hexagonal Yinsh board on an HTML canvas and hit-tests mouse
//! clicks against board intersections. The geometry core is pure Rust and
//! runs under native `cargo test`; the thin wasm glue in [`board`] owns the
//! canvas and event listeners. No game rules, no persistence — this crate is
//! the rendering/hit-testing surface only.

use wasm_bindgen::prelude::*;

pub mod board;

pub use board::geometry::{BoardGrid, GRID_SIZE, Point};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Unified entrypoint: mount the board canvas and start listening for clicks.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    board::mount_board()
}
