//! Derivation of the 369 magic square from a birth date.

use crate::reduce::{digit_sum, reduce};

/// A birth date as three plain integers.
///
/// Input only - calendar validity is not checked, because only the digit
/// values matter to the derivation (see crate docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BirthDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl BirthDate {
    /// Create a new birth date.
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Sum of all decimal digits across year, month, and day.
    ///
    /// The components are digit-summed as written, not reduced first:
    /// (1990, 1, 1) gives (1+9+9+0) + 1 + 1 = 21.
    pub fn digit_sum(&self) -> u32 {
        digit_sum(self.year as u32) + digit_sum(self.month as u32) + digit_sum(self.day as u32)
    }
}

/// The central 3x3 block of nine derived numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CellGrid {
    pub top_left: u32,
    pub top: u32,
    pub top_right: u32,
    pub left: u32,
    pub center: u32,
    pub right: u32,
    pub bottom_left: u32,
    pub bottom: u32,
    pub bottom_right: u32,
}

/// The eight numbers of the second derivation layer surrounding the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OuterRing {
    pub left_left_top: u32,
    pub left_left_middle: u32,
    pub left_left_bottom: u32,
    pub top_bar: u32,
    pub right_right_top: u32,
    pub right_right_middle: u32,
    pub right_right_bottom: u32,
    pub bottom_bar: u32,
}

/// Read-only alias view over the six cells carrying a named meaning.
///
/// Never stored independently - always recomputed from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpecialNumbers {
    pub main_number: u32,
    pub past_number: u32,
    pub future_number: u32,
    pub spirit_number: u32,
    pub higher_purpose_number: u32,
    pub higher_goal_number: u32,
}

/// The full 17-cell figure: 3x3 grid plus outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumerologyGrid {
    pub grid: CellGrid,
    pub outer: OuterRing,
}

impl NumerologyGrid {
    /// Derive the full figure from a birth date.
    ///
    /// Cells are computed strictly in dependency order; no cell references a
    /// cell computed later. Only center, top bar, and bottom bar may retain
    /// master numbers.
    pub fn from_birth_date(date: BirthDate) -> Self {
        let month = date.month as u32;
        let day = date.day as u32;

        // Center cross
        let center = reduce(date.digit_sum(), true);
        let left = reduce(day, false);
        let right = reduce(month + day, false);
        let bottom = reduce(left + center + right, false);
        let top = reduce(center + bottom, false);

        // Corners
        let top_left = reduce(top + left, false);
        let top_right = reduce(top + right, false);
        let bottom_left = reduce(left + bottom, false);
        let bottom_right = reduce(right + bottom, false);

        // Outer ring: middles and bars first
        let left_left_middle = reduce(top_left + bottom_left, false);
        let right_right_middle = reduce(top_right + bottom_right, false);
        let top_bar = reduce(top_left + top_right, true);
        let bottom_bar = reduce(bottom_left + bottom_right, true);

        // Then the outer corners
        let left_left_top = reduce(left_left_middle + top_bar, false);
        let left_left_bottom = reduce(left_left_middle + bottom_bar, false);
        let right_right_top = reduce(right_right_middle + top_bar, false);
        let right_right_bottom = reduce(right_right_middle + bottom_bar, false);

        Self {
            grid: CellGrid {
                top_left,
                top,
                top_right,
                left,
                center,
                right,
                bottom_left,
                bottom,
                bottom_right,
            },
            outer: OuterRing {
                left_left_top,
                left_left_middle,
                left_left_bottom,
                top_bar,
                right_right_top,
                right_right_middle,
                right_right_bottom,
                bottom_bar,
            },
        }
    }

    /// The six named cells.
    pub fn special_numbers(&self) -> SpecialNumbers {
        SpecialNumbers {
            main_number: self.grid.center,
            past_number: self.grid.left,
            future_number: self.grid.right,
            spirit_number: self.grid.bottom,
            higher_purpose_number: self.outer.top_bar,
            higher_goal_number: self.outer.bottom_bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::MASTER_NUMBERS;

    #[test]
    fn digit_sum_concatenates_components() {
        assert_eq!(BirthDate::new(1990, 1, 1).digit_sum(), 21);
        assert_eq!(BirthDate::new(1987, 12, 25).digit_sum(), 25 + 3 + 7);
        assert_eq!(BirthDate::new(2000, 10, 31).digit_sum(), 2 + 1 + 4);
    }

    #[test]
    fn golden_vector_1990_01_01() {
        let grid = NumerologyGrid::from_birth_date(BirthDate::new(1990, 1, 1));

        // digitSum 21 reduces to 3, no master hit
        assert_eq!(grid.grid.center, 3);
        assert_eq!(grid.grid.left, 1); // day 1
        assert_eq!(grid.grid.right, 2); // month + day = 2
        assert_eq!(grid.grid.bottom, 6); // 1 + 3 + 2
        assert_eq!(grid.grid.top, 9); // 3 + 6

        assert_eq!(grid.grid.top_left, 1); // 9 + 1 = 10 -> 1
        assert_eq!(grid.grid.top_right, 2); // 9 + 2 = 11 -> 2 (no master here)
        assert_eq!(grid.grid.bottom_left, 7); // 1 + 6
        assert_eq!(grid.grid.bottom_right, 8); // 2 + 6

        assert_eq!(grid.outer.left_left_middle, 8); // 1 + 7
        assert_eq!(grid.outer.right_right_middle, 1); // 2 + 8 = 10 -> 1
        assert_eq!(grid.outer.top_bar, 3); // 1 + 2
        assert_eq!(grid.outer.bottom_bar, 6); // 7 + 8 = 15 -> 6

        assert_eq!(grid.outer.left_left_top, 2); // 8 + 3 = 11 -> 2
        assert_eq!(grid.outer.left_left_bottom, 5); // 8 + 6 = 14 -> 5
        assert_eq!(grid.outer.right_right_top, 4); // 1 + 3
        assert_eq!(grid.outer.right_right_bottom, 7); // 1 + 6
    }

    #[test]
    fn golden_vector_1987_06_13() {
        // digitSum = (1+9+8+7) + 6 + (1+3) = 35 -> 8
        let grid = NumerologyGrid::from_birth_date(BirthDate::new(1987, 6, 13));
        assert_eq!(grid.grid.center, 8);
        assert_eq!(grid.grid.left, 4); // 13 -> 4
        assert_eq!(grid.grid.right, 1); // 19 -> 10 -> 1
        assert_eq!(grid.grid.bottom, 4); // 4 + 8 + 1 = 13 -> 4
        assert_eq!(grid.grid.top, 3); // 8 + 4 = 12 -> 3
    }

    #[test]
    fn derivation_is_deterministic() {
        let date = BirthDate::new(1975, 11, 29);
        assert_eq!(
            NumerologyGrid::from_birth_date(date),
            NumerologyGrid::from_birth_date(date)
        );
    }

    #[test]
    fn non_master_cells_stay_single_digit() {
        // Sweep a spread of dates; every cell outside the three master
        // positions must land in 1..=9.
        for year in [1900u16, 1955, 1988, 1999, 2012, 2044] {
            for month in 1..=12u8 {
                for day in [1u8, 9, 15, 22, 28, 31] {
                    let g = NumerologyGrid::from_birth_date(BirthDate::new(year, month, day));
                    let singles = [
                        g.grid.top_left,
                        g.grid.top,
                        g.grid.top_right,
                        g.grid.left,
                        g.grid.right,
                        g.grid.bottom_left,
                        g.grid.bottom,
                        g.grid.bottom_right,
                        g.outer.left_left_top,
                        g.outer.left_left_middle,
                        g.outer.left_left_bottom,
                        g.outer.right_right_top,
                        g.outer.right_right_middle,
                        g.outer.right_right_bottom,
                    ];
                    for cell in singles {
                        assert!((1..=9).contains(&cell), "cell {cell} out of range");
                    }
                    for cell in [g.grid.center, g.outer.top_bar, g.outer.bottom_bar] {
                        assert!(
                            (1..=9).contains(&cell) || MASTER_NUMBERS.contains(&cell),
                            "master-position cell {cell} out of range"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn accepts_calendar_impossible_dates() {
        // April 31 does not exist, but digits are digits.
        let grid = NumerologyGrid::from_birth_date(BirthDate::new(2020, 4, 31));
        assert!((1..=9).contains(&grid.grid.left));
    }

    #[test]
    fn special_numbers_alias_grid_cells() {
        let grid = NumerologyGrid::from_birth_date(BirthDate::new(1990, 1, 1));
        let special = grid.special_numbers();
        assert_eq!(special.main_number, grid.grid.center);
        assert_eq!(special.past_number, grid.grid.left);
        assert_eq!(special.future_number, grid.grid.right);
        assert_eq!(special.spirit_number, grid.grid.bottom);
        assert_eq!(special.higher_purpose_number, grid.outer.top_bar);
        assert_eq!(special.higher_goal_number, grid.outer.bottom_bar);
    }
}
