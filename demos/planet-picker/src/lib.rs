use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod game;
mod planets;
mod selection;
mod visual;
use game::PlanetPicker;

orrery_web::export_game!(PlanetPicker, "planet-picker");

/// Overlay heading for the selected planet, or an empty string.
#[wasm_bindgen]
pub fn get_overlay_label() -> String {
    with_runner(|r| r.game().overlay_label())
}

/// Display name of a planet, or an empty string for an unknown index.
#[wasm_bindgen]
pub fn get_planet_label(index: u32) -> String {
    planets::label(index as usize).unwrap_or_default().to_string()
}

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    planets::PLANET_COUNT as u32
}
