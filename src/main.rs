//! Visited Map
//!
//! Colour the regions of a map by how well you know them. Built for the
//! browser with `trunk serve`; the native binary only reports the version.

#[cfg(target_arch = "wasm32")]
fn main() {
    visited_map::web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("visited-map {}", visited_map::VERSION);
    println!("This is a browser app: build it for wasm32 with `trunk serve`.");
}
