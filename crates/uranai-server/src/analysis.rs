//! Analysis orchestration: provider call with local fallback.
//!
//! The user-visible behavior never surfaces a raw provider error. When the
//! AI feature is disabled or the outbound call fails in any way, the reading
//! is assembled locally from the interpretation tables instead.

use crate::api::AppState;
use crate::prompt;
use crate::provider;
use uranai_numerology::{interpret, CosmicRhythm, NumberInterpretation};

/// The six special numbers plus the optional cosmic rhythm, as accepted by
/// the analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisData {
    pub main_number: u32,
    pub past_number: u32,
    pub future_number: u32,
    pub spirit_number: u32,
    pub higher_purpose_number: u32,
    pub higher_goal_number: u32,
    pub cosmic_rhythm: Option<CosmicRhythm>,
}

/// Produce the prose reading for an analysis request.
pub async fn analyze(state: &AppState, data: &AnalysisData) -> String {
    let Some(ai) = &state.config.ai else {
        tracing::debug!("AI feature disabled, using fallback analysis");
        return fallback_analysis(data);
    };

    let prompt = prompt::build_prompt(state.config.persona, data);
    match provider::generate(&state.http, ai, &prompt).await {
        Ok(text) => {
            tracing::debug!(length = text.len(), "received provider analysis");
            text
        }
        Err(e) => {
            tracing::warn!("provider analysis failed, substituting fallback: {e}");
            fallback_analysis(data)
        }
    }
}

struct Interpretations {
    main: NumberInterpretation,
    past: NumberInterpretation,
    future: NumberInterpretation,
    spirit: NumberInterpretation,
    higher_purpose: NumberInterpretation,
    higher_goal: NumberInterpretation,
}

impl Interpretations {
    fn of(data: &AnalysisData) -> Self {
        Self {
            main: interpret(data.main_number),
            past: interpret(data.past_number),
            future: interpret(data.future_number),
            spirit: interpret(data.spirit_number),
            higher_purpose: interpret(data.higher_purpose_number),
            higher_goal: interpret(data.higher_goal_number),
        }
    }
}

/// Build a reading locally from the interpretation tables.
///
/// Mirrors the structure the provider is asked for, so the caller cannot
/// tell the two paths apart by shape.
pub fn fallback_analysis(data: &AnalysisData) -> String {
    let i = Interpretations::of(data);

    let rhythm_clause = match &data.cosmic_rhythm {
        Some(rhythm) => format!(
            "Starting from cosmic rhythm energy {} \"{}\", ",
            rhythm.number, rhythm.focus
        ),
        None => String::new(),
    };

    format!(
        "## Reading\n\n\
         ### Starting point in the subconscious\n\
         Your guiding number {hp}, \"{hp_title}\", expresses {hp_essence}. As \
         the fundamental direction of a life, it works at the level of the \
         subconscious, quietly steering everyday choices and judgments toward \
         a deeper sense of purpose. Returning to this guide at life's turning \
         points clears away hesitation and shows the road you were meant to \
         walk.\n\n\
         ### Practical balance in daily life\n\
         With your main number {main}, \"{main_title}\", at the center, your \
         roots number {past}, \"{past_title}\", provides the stable ground \
         under your feet, and your growth number {future}, \"{future_title}\", \
         supplies the nourishment for what you are becoming. Your natural \
         number {spirit}, \"{spirit_title}\", is the quality that surfaces \
         without any effort at all. These four complement one another; calling \
         on them deliberately brings balance to ordinary days and makes them \
         fuller.\n\n\
         ### Final direction\n\
         Your final purpose number {hg}, \"{hg_title}\", points toward \
         {hg_essence}. The experiences you accumulate now are the stages of a \
         road that bends naturally in that direction. Each present challenge \
         is a step toward that arrival; walked steadily and without haste, the \
         road ends in the rich territory this number describes.\n\n\
         ### Integrated life blueprint\n\
         Taken together, these numbers trace a spiral process of growth: \
         becoming aware of a latent direction, practicing it in daily life, \
         and maturing toward a higher purpose. {rhythm_clause}your own 369 \
         rhythm supports the unfolding of a harmonious life, realizing both \
         inner growth and contribution to the world around you. This \
         combination of numbers is a road map for drawing out the potential \
         you already carry and living a life of meaning.",
        hp = data.higher_purpose_number,
        hp_title = i.higher_purpose.title,
        hp_essence = i.higher_purpose.essence,
        main = data.main_number,
        main_title = i.main.title,
        past = data.past_number,
        past_title = i.past.title,
        future = data.future_number,
        future_title = i.future.title,
        spirit = data.spirit_number,
        spirit_title = i.spirit.title,
        hg = data.higher_goal_number,
        hg_title = i.higher_goal.title,
        hg_essence = i.higher_goal.essence,
        rhythm_clause = rhythm_clause,
    )
}
