//! Uranai 369 Numerology
//!
//! Derivation of the 369 magic square from a birth date.
//!
//! # Mathematical Foundation
//!
//! Every value in the figure is produced by a single primitive: repeated
//! digit-summing ([`reduce`]) of a sum of already-derived values. Seventeen
//! cells are derived in a fixed dependency order from the digits of the
//! birth date:
//! - 5 center-cross cells (center, left, right, bottom, top)
//! - 4 corners
//! - 8 outer-ring cells
//!
//! Three positions (center, top bar, bottom bar) may retain a master number
//! (11, 22, 33, 44); every other cell is forced into 1..=9.
//!
//! The derivation is a pure, total function of (year, month, day). Calendar
//! validity is deliberately not checked: the model treats the date as a
//! digit sequence, not a calendar event, so April 31 is as good an input as
//! any.

mod reduce;
mod grid;
mod law;
mod interpret;

pub use reduce::{reduce, MASTER_NUMBERS};
pub use grid::{BirthDate, CellGrid, NumerologyGrid, OuterRing, SpecialNumbers};
pub use law::{check_law, CosmicRhythm, LawCheckResult};
pub use interpret::{interpret, NumberInterpretation};
