//! The 369 law: a checksum over the outer ring, plus the cosmic-rhythm
//! narrative keyed by the reduced sum of the two bars.

use crate::grid::NumerologyGrid;
use crate::reduce::reduce;

/// Narrative attached to a cosmic-rhythm number.
///
/// The table covers only 3, 6, and 9. The checksum that selects the entry is
/// computed without master numbers and so can land anywhere in 1..=9; the
/// other six values yield a blank narrative. That gap is observed behavior
/// from the source material and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CosmicRhythm {
    pub number: u32,
    pub focus: String,
    pub action: String,
    pub description: String,
    pub earth_mission: String,
    pub starting_point: String,
    pub caution: String,
}

impl CosmicRhythm {
    fn blank(number: u32) -> Self {
        Self {
            number,
            focus: String::new(),
            action: String::new(),
            description: String::new(),
            earth_mission: String::new(),
            starting_point: String::new(),
            caution: String::new(),
        }
    }
}

/// Result of checking a grid against the 369 law.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LawCheckResult {
    /// Reduced sum of all eight outer-ring cells.
    pub outer_sum: u32,
    /// Reduced sums of the four outer-ring diagonal pairs.
    pub diagonal_sums: [u32; 4],
    /// The law holds: outer sum is 9 and every diagonal lands on 3, 6, or 9.
    pub is_valid: bool,
    /// Reduced sum of higher purpose + higher goal.
    pub higher_dimension_sum: u32,
    pub cosmic_rhythm: CosmicRhythm,
}

/// Check the 369 law over a grid's outer ring.
pub fn check_law(grid: &NumerologyGrid) -> LawCheckResult {
    let outer = &grid.outer;

    let outer_sum = reduce(
        outer.left_left_top
            + outer.left_left_middle
            + outer.left_left_bottom
            + outer.top_bar
            + outer.bottom_bar
            + outer.right_right_top
            + outer.right_right_middle
            + outer.right_right_bottom,
        false,
    );

    let diagonal_sums = [
        reduce(outer.left_left_top + outer.right_right_bottom, false),
        reduce(outer.left_left_bottom + outer.right_right_top, false),
        reduce(outer.top_bar + outer.bottom_bar, false),
        reduce(outer.left_left_middle + outer.right_right_middle, false),
    ];

    let is_valid = outer_sum == 9 && diagonal_sums.iter().all(|s| [3, 6, 9].contains(s));

    let special = grid.special_numbers();
    let higher_dimension_sum = reduce(
        special.higher_purpose_number + special.higher_goal_number,
        false,
    );

    LawCheckResult {
        outer_sum,
        diagonal_sums,
        is_valid,
        higher_dimension_sum,
        cosmic_rhythm: cosmic_rhythm_for(higher_dimension_sum),
    }
}

/// Look up the cosmic-rhythm narrative for a reduced sum.
fn cosmic_rhythm_for(number: u32) -> CosmicRhythm {
    match number {
        3 => CosmicRhythm {
            number,
            focus: "Focus on your inner light".into(),
            action: "Express pure joy".into(),
            description: "Your 369 rhythm begins with finding what genuinely \
                delights you and expressing it without reservation. Enjoy life \
                with a child's openness and your brightness will naturally \
                light up the people around you. Releasing your creativity and \
                immersing yourself in what excites you brings you into \
                resonance with the rhythm of the cosmos."
                .into(),
            earth_mission: "369 cosmic rhythm: 3 (self) -> 6 (others) -> 9 (whole). \
                Your own joy is where everything starts. Keep asking whether you \
                are truly enjoying yourself right now; by treasuring that joy, \
                the energy spreads of its own accord from you to the people \
                around you and on to the whole."
                .into(),
            starting_point: "The energy of 3 is the key thread for understanding \
                how you are meant to live. Pursuing pure joy opens the door to a \
                life that is genuinely yours."
                .into(),
            caution: "If you notice yourself becoming self-absorbed or drifting \
                into a narrow world, step back and look at yourself objectively. \
                Check that your joy stays in harmony with the people around you."
                .into(),
        },
        6 => CosmicRhythm {
            number,
            focus: "Focus on being a bridge of love and harmony".into(),
            action: "Share the richness of your heart".into(),
            description: "Your 369 rhythm begins with the deep connections in \
                front of you, circulating love and care through them. Nurture \
                your relationships with family, friends, and everyone you meet, \
                supporting one another's growth. Your warmth brings ease to \
                people's hearts and widens the circle of harmony."
                .into(),
            earth_mission: "369 cosmic rhythm: 3 (self) -> 6 (others) -> 9 (whole). \
                Contribution to the people around you is the key. Deepen your \
                one-to-one relationships; through close support and dialogue you \
                bring out your natural strength, and in turn you yourself are \
                filled, extending outward to the whole."
                .into(),
            starting_point: "The energy of 6 is the key thread for understanding \
                how you are meant to live. Treasuring deep connection with the \
                person in front of you opens the door to a life that is \
                genuinely yours."
                .into(),
            caution: "Beware of sliding into feeling worthless when others do \
                not respond the way you hoped. The expressing itself is what \
                matters; there is no need to be discouraged by reactions or to \
                demand too much of the other person."
                .into(),
        },
        9 => CosmicRhythm {
            number,
            focus: "Focus on unity with cosmic consciousness".into(),
            action: "Embody unconditional love and wisdom".into(),
            description: "Your 369 rhythm begins with feeling a deep connection \
                to all life and practicing love on the scale of the planet. \
                Beyond borders and cultures, you serve people you have not yet \
                met and generations still to come. Your wisdom and compassion \
                contribute to the evolution of collective consciousness."
                .into(),
            earth_mission: "369 cosmic rhythm: 3 (self) -> 6 (others) -> 9 (whole). \
                Let your awareness widen naturally toward the whole. While \
                caring for the person in front of you, keep future generations \
                and the wider world in view; acting with the happiness of the \
                whole in mind brings you a deep sense of fulfillment."
                .into(),
            starting_point: "The energy of 9 is the key thread for understanding \
                how you are meant to live. Seeing the world from the standpoint \
                of wholeness opens the door to a life that is genuinely yours."
                .into(),
            caution: "Guard against self-sacrifice. Do not suffer so that \
                everyone else can be happy; your own happiness matters too while \
                you contribute to the whole."
                .into(),
        },
        other => CosmicRhythm::blank(other),
    }
}
