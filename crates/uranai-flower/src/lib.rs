//! Uranai Flower Fortune
//!
//! The 60-way flower personality reading: 12 flowers x 5 temperaments,
//! both selected by modular arithmetic over the birth date, plus three
//! luck scores in 1..=5.
//!
//! Like the numerology engine, this is a pure, total, deterministic
//! function of (year, month, day) with no I/O and no hidden state.

mod fortune;
mod personality;

pub use fortune::{FlowerFortune, Flower, Luck, Temperament};
pub use personality::FlowerPersonality;
