use wasm_bindgen::prelude::*;

pub mod client;
pub mod routes;

#[wasm_bindgen(start)]
pub fn run() {
    client::launch();
}
