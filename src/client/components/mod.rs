#![allow(non_snake_case)]
mod nav_card;

pub use nav_card::{Card, NavCard};
#[cfg(test)]
pub use nav_card::{open_card, RecordingNavigator};
