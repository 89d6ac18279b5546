//! Prompt templates for the generative-text provider.
//!
//! The persona is a closed enum chosen by configuration - it is never
//! inferred from the request. Each persona swaps the preamble and tone
//! block; the numeric data section is shared.

use crate::analysis::AnalysisData;
use std::fmt;
use std::str::FromStr;
use uranai_numerology::interpret;

/// Voice used for the generated reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    /// Measured, academic register
    Formal,
    /// Light, comedic register
    Playful,
    /// Warm, poetic register (default)
    #[default]
    Warm,
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "playful" => Ok(Self::Playful),
            "warm" => Ok(Self::Warm),
            other => Err(format!("unknown persona: {other}")),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formal => write!(f, "formal"),
            Self::Playful => write!(f, "playful"),
            Self::Warm => write!(f, "warm"),
        }
    }
}

impl Persona {
    fn preamble(&self) -> &'static str {
        match self {
            Self::Formal => {
                "You are a professional interpreter of 369 numerology. Analyze \
                 the following combination of numbers rigorously and \
                 systematically, in a measured, academic register."
            }
            Self::Playful => {
                "You are a witty, good-humored interpreter of 369 numerology. \
                 Analyze the following combination of numbers with warmth and a \
                 light comedic touch - charming, never mocking."
            }
            Self::Warm => {
                "You are a warm, empathetic interpreter of 369 numerology. \
                 Analyze the following combination of numbers in a poetic, \
                 encouraging voice that speaks directly to the reader."
            }
        }
    }

    fn tone_notes(&self) -> &'static str {
        match self {
            Self::Formal => {
                "- Keep the register precise and scholarly, yet readable\n\
                 - Support each claim by referring back to the numbers"
            }
            Self::Playful => {
                "- Keep the register light and personable, with gentle humor\n\
                 - Never let the humor undercut the reader"
            }
            Self::Warm => {
                "- Write in a warm, empathetic tone\n\
                 - Use academic yet approachable phrasing"
            }
        }
    }
}

/// Build the full provider prompt for an analysis request.
pub fn build_prompt(persona: Persona, data: &AnalysisData) -> String {
    let main = interpret(data.main_number);
    let past = interpret(data.past_number);
    let future = interpret(data.future_number);
    let spirit = interpret(data.spirit_number);
    let higher_purpose = interpret(data.higher_purpose_number);
    let higher_goal = interpret(data.higher_goal_number);

    let rhythm_line = match &data.cosmic_rhythm {
        Some(rhythm) => format!(
            "\n- Cosmic rhythm energy: {} ({})\n  -> {}",
            rhythm.number, rhythm.focus, rhythm.description
        ),
        None => String::new(),
    };

    format!(
        "{preamble}\n\n\
         [Number data]\n\
         - Guiding number: {hp} ({hp_title})\n\
         - Main number: {main} ({main_title})\n\
         - Roots number: {past} ({past_title})\n\
         - Growth number: {future} ({future_title})\n\
         - Natural number: {spirit} ({spirit_title})\n\
         - Final purpose number: {hg} ({hg_title}){rhythm_line}\n\n\
         Structure the analysis as follows. Each section must run 250-300 words.\n\n\
         ## Reading\n\n\
         ### Starting point in the subconscious\n\
         Analyze the guiding number {hp}, \"{hp_title}\": how it works on the \
         deeper layers of the mind and steers the direction of a life.\n\n\
         ### Practical balance in daily life\n\
         Analyze the interplay of the four central numbers - main {main}, \
         roots {past}, growth {future}, natural {spirit} - and how they can be \
         put to use day to day.\n\n\
         ### Final direction\n\
         Analyze the final purpose number {hg}, \"{hg_title}\": the road from \
         the present toward that eventual growth, stage by stage.\n\n\
         ### Integrated life blueprint\n\
         Integrate all the numbers into the life pattern they describe and its \
         relation to the 369 rhythm{rhythm_clause}.\n\n\
         Notes:\n\
         - Each section must run 250-300 words\n\
         {tone}\n\
         - Include concrete, practical advice\n\
         - Avoid negative phrasing; emphasize possibility\n\
         - Output in Markdown",
        preamble = persona.preamble(),
        tone = persona.tone_notes(),
        hp = data.higher_purpose_number,
        hp_title = higher_purpose.title,
        main = data.main_number,
        main_title = main.title,
        past = data.past_number,
        past_title = past.title,
        future = data.future_number,
        future_title = future.title,
        spirit = data.spirit_number,
        spirit_title = spirit.title,
        hg = data.higher_goal_number,
        hg_title = higher_goal.title,
        rhythm_line = rhythm_line,
        rhythm_clause = match &data.cosmic_rhythm {
            Some(rhythm) => format!(
                ", including the perspective of cosmic rhythm energy {} \"{}\"",
                rhythm.number, rhythm.focus
            ),
            None => String::new(),
        },
    )
}
