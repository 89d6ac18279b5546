//! Static interpretation table for the numbers 1-9 and the four masters.

/// The detailed meaning of a single number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NumberInterpretation {
    pub title: String,
    pub essence: String,
    pub characteristics: String,
    pub mission: String,
    pub shadow: String,
    pub growth_key: String,
    pub shadow_alchemy: String,
}

fn entry(
    title: &str,
    essence: &str,
    characteristics: &str,
    mission: &str,
    shadow: &str,
    growth_key: &str,
    shadow_alchemy: &str,
) -> NumberInterpretation {
    NumberInterpretation {
        title: title.into(),
        essence: essence.into(),
        characteristics: characteristics.into(),
        mission: mission.into(),
        shadow: shadow.into(),
        growth_key: growth_key.into(),
        shadow_alchemy: shadow_alchemy.into(),
    }
}

/// Look up the interpretation for a number.
///
/// Total: numbers absent from the table get a placeholder record with only
/// the title populated.
pub fn interpret(n: u32) -> NumberInterpretation {
    match n {
        1 => entry(
            "Primal Light",
            "The beginning of all things, pure will set in motion",
            "Leadership, originality, pioneering spirit, self-establishment",
            "Open new paths and give others courage and direction",
            "Loneliness, stubbornness, self-centeredness",
            "Let your own light shine while learning to cooperate with others",
            "Loneliness becomes independence and the ability to turn solitude \
             into creation; stubbornness becomes the strength of unshakable \
             conviction; self-centeredness becomes knowing your worth and \
             leading others from it",
        ),
        2 => entry(
            "Bridge of Harmony",
            "Integration of duality, the balance of yin and yang",
            "Cooperation, sensitivity, supportiveness, intuition, kindness",
            "Guide conflict toward harmony and connect person to person",
            "Dependence, indecision, oversensitivity",
            "Stay self-reliant while connecting deeply with others",
            "Dependence becomes deep empathy and care for bonds; indecision \
             becomes caution and a sharp sense of balance; oversensitivity \
             becomes an intuition for the subtlest currents",
        ),
        3 => entry(
            "Joy of Creation",
            "Expression of life force, unlimited possibility",
            "Creativity, expressiveness, optimism, sociability, childlike purity",
            "Breathe new life into the world through joy and creativity",
            "Scattered attention, superficiality, irresponsibility",
            "Cultivate deep focus and give your creations form",
            "Scattered attention becomes many-sided talent; superficiality \
             becomes lightness that brightens any room; irresponsibility \
             becomes free, unconstrained imagination",
        ),
        4 => entry(
            "Foundation of Earth",
            "Stability of the material world, the power to make things real",
            "Practicality, patience, sincerity, constructiveness, order",
            "Turn dreams into reality and build foundations that last",
            "Rigidity, inflexibility, materialism",
            "Keep building with certainty while staying flexible",
            "Rigidity becomes immovable steadiness others can rely on; \
             inflexibility becomes consistency that keeps its promises; \
             materialism becomes the practical power to realize dreams",
        ),
        5 => entry(
            "Wind of Freedom",
            "Change and evolution, the search for unlimited possibility",
            "Adventurousness, versatility, adaptability, curiosity, reform",
            "Break the old frames and let a new era's wind blow through",
            "Instability, irresponsibility, addiction to stimulation",
            "Find responsibility within freedom and turn change into growth",
            "Instability becomes ease in any new environment; irresponsibility \
             becomes an unbound, unconventional mind; addiction to stimulation \
             becomes the appetite to live life as an adventure",
        ),
        6 => entry(
            "Tuner of Love",
            "Unconditional love, the creation of beauty and harmony",
            "Deep affection, responsibility, aesthetic sense, healing, nurture",
            "Heal the world through love and bring forth new harmony",
            "Overprotectiveness, self-sacrifice, perfectionism",
            "Love yourself too, balancing giving with receiving",
            "Overprotectiveness becomes deep affection and responsibility; \
             self-sacrifice becomes knowing the joy of giving; perfectionism \
             becomes the fine sensibility that creates harmony",
        ),
        7 => entry(
            "Seeker of Truth",
            "Inner wisdom, the height of the spirit",
            "Analysis, intuition, mystery, independence, expertise",
            "Pursue truth, master the inner path, and guide others by it",
            "Isolation, skepticism, escapism",
            "Unite the inner and outer worlds and share your wisdom",
            "Isolation becomes the richness of the inner world; skepticism \
             becomes analysis that sees through to the truth; escapism becomes \
             an understanding of what cannot be seen",
        ),
        8 => entry(
            "Manifestor of Abundance",
            "Integration of matter and spirit, unlimited abundance",
            "Execution, organization, ambition, charisma, material success",
            "Realize spiritual value in the material world and circulate abundance",
            "Hunger for power, materialism, workaholism",
            "Use power in the service of love and understand true abundance",
            "Hunger for power becomes leadership that realizes great visions; \
             materialism becomes the talent to circulate wealth; workaholism \
             becomes focus, endurance, and passion for the goal",
        ),
        9 => entry(
            "Sage of the Cosmos",
            "Understanding of wholeness, universal love and wisdom",
            "Benevolence, tolerance, intuition, artistry, humanitarianism",
            "Embrace all beings and help the evolution of collective consciousness",
            "Idealism, detachment from reality, loss of self",
            "Keep a cosmic perspective with both feet on the ground",
            "Idealism becomes high aspiration and humanitarian will; detachment \
             becomes the wide view that holds things in love; loss of self \
             becomes empathy that crosses every boundary",
        ),
        11 => entry(
            "Messenger of Light",
            "A sacred antenna connecting heaven and earth",
            "Higher intuition, spiritual sensitivity, inspiration, revelation",
            "Receive messages from the unseen world and deliver them to humanity",
            "Oversensitivity, detachment from reality, nervousness",
            "Stay grounded while translating higher information into use",
            "Oversensitivity becomes receptivity to unseen energies; detachment \
             becomes the capacity to receive messages from above; nervousness \
             becomes a fine antenna for the subtlest changes",
        ),
        22 => entry(
            "Architect of the Earth",
            "The power to realize dreams at scale",
            "Vision, realization, internationality, integration",
            "Build structures that serve humanity's evolution on a planetary scale",
            "Excessive responsibility, perfectionism, burnout",
            "Hold the great vision while advancing one sure step at a time",
            "Excessive responsibility becomes the capacity to carry great \
             visions; perfectionism becomes an uncompromising pursuit of \
             quality; burnout becomes wholehearted, passionate engagement",
        ),
        33 => entry(
            "Embodiment of Unconditional Love",
            "Christ consciousness, the energy of Kannon",
            "Unconditional love, healing, awakening, compassion",
            "Raise collective consciousness through the vibration of love",
            "Self-sacrifice, savior complex",
            "Guide others from a foundation of love for yourself",
            "Self-sacrifice becomes compassion that feels another's pain as \
             one's own; the savior complex becomes the power to heal, guide, \
             and give hope",
        ),
        44 => entry(
            "Herald of the Consciousness Revolution",
            "The wisdom of Atlantis, the energy of great transformation",
            "Innovation, destruction and creation, quantum leaps of consciousness",
            "Break the old paradigm and create the age of new consciousness",
            "Destructive impulse, extreme change, chaos",
            "Carry love within the breaking and give birth to new order",
            "Destructive impulse becomes the courage to transform old systems; \
             extreme change becomes bold, convention-overturning action; chaos \
             becomes creative ferment beyond the existing frame",
        ),
        other => NumberInterpretation {
            title: format!("Number {other}"),
            essence: String::new(),
            characteristics: String::new(),
            mission: String::new(),
            shadow: String::new(),
            growth_key: String::new(),
            shadow_alchemy: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::MASTER_NUMBERS;

    #[test]
    fn table_covers_one_through_nine_and_masters() {
        for n in (1..=9).chain(MASTER_NUMBERS) {
            let i = interpret(n);
            assert!(!i.title.is_empty());
            assert!(!i.essence.is_empty());
            assert!(!i.mission.is_empty());
            assert!(!i.shadow_alchemy.is_empty());
        }
    }

    #[test]
    fn absent_numbers_get_placeholder() {
        let i = interpret(10);
        assert_eq!(i.title, "Number 10");
        assert!(i.essence.is_empty());
        assert!(i.characteristics.is_empty());
        assert!(i.mission.is_empty());
        assert!(i.shadow.is_empty());
        assert!(i.growth_key.is_empty());
        assert!(i.shadow_alchemy.is_empty());
    }

    #[test]
    fn lookup_is_total_for_odd_inputs() {
        assert_eq!(interpret(0).title, "Number 0");
        assert_eq!(interpret(12345).title, "Number 12345");
    }
}
