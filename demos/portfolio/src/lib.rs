use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod bodies;
mod game;
use game::PortfolioScene;

orrery_web::export_game!(PortfolioScene, "portfolio");
