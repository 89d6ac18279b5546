//! Personality tables: twelve flower bases, five temperament modifiers,
//! and the merge that produces the final reading.

use crate::fortune::{Flower, Temperament};

/// The composed personality for one flower/temperament pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlowerPersonality {
    pub title: String,
    pub basic_character: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub love_style: String,
    pub work_style: String,
    pub communication: String,
    pub advice: String,
    pub compatible_flowers: Vec<String>,
    pub emoji: String,
}

struct Base {
    basic_character: &'static str,
    strengths: [&'static str; 3],
    weaknesses: [&'static str; 2],
    love_style: &'static str,
    work_style: &'static str,
    communication: &'static str,
    advice: &'static str,
    compatible: [Flower; 3],
}

struct Modifier {
    character: &'static str,
    strength: &'static str,
    weakness: &'static str,
    love: &'static str,
    work: &'static str,
    communication: &'static str,
    advice: &'static str,
}

impl FlowerPersonality {
    /// Merge a flower's base personality with a temperament modifier.
    ///
    /// The modifier appends one strength and one weakness and extends every
    /// prose field; the title is "{temperament} {flower}".
    pub fn compose(flower: Flower, temperament: Temperament) -> Self {
        let base = base_personality(flower);
        let m = modifier(temperament);

        let mut strengths: Vec<String> = base.strengths.iter().map(|s| s.to_string()).collect();
        strengths.push(m.strength.to_string());
        let mut weaknesses: Vec<String> = base.weaknesses.iter().map(|s| s.to_string()).collect();
        weaknesses.push(m.weakness.to_string());

        Self {
            title: format!("{} {}", temperament.adjective(), flower.name()),
            basic_character: format!("{} {}", base.basic_character, m.character),
            strengths,
            weaknesses,
            love_style: format!("{} {}", base.love_style, m.love),
            work_style: format!("{} {}", base.work_style, m.work),
            communication: format!("{} {}", base.communication, m.communication),
            advice: format!("{} {}", base.advice, m.advice),
            compatible_flowers: base.compatible.iter().map(|f| f.name().to_string()).collect(),
            emoji: flower.emoji().to_string(),
        }
    }
}

fn base_personality(flower: Flower) -> Base {
    match flower {
        Flower::Sakura => Base {
            basic_character: "A delicate, kind-hearted soul who treasures the \
                beauty of fleeting moments and leaves a deep impression even in \
                a short time.",
            strengths: ["Aesthetic sense", "Delicacy", "Presence in the moment"],
            weaknesses: ["Changeability", "Short bursts of focus"],
            love_style: "Drawn to ephemeral beauty; cherishes romantic moments.",
            work_style: "Produces beautiful results in short, intense efforts; \
                attuned to season and timing.",
            communication: "Prefers refined, poetic expression.",
            advice: "Valuing the long view as well will let you build deeper bonds.",
            compatible: [Flower::Cosmos, Flower::Lily, Flower::Camellia],
        },
        Flower::Sunflower => Base {
            basic_character: "Bright as the sun, with the power to energize \
                everyone nearby; always forward-looking and full of hope.",
            strengths: ["Brightness", "Positivity", "Vitality"],
            weaknesses: ["Simplicity", "A tendency not to look deeper"],
            love_style: "Straightforward, easy-to-read affection that lights up \
                the other person.",
            work_style: "The team's mood-maker; finds hope even in hard places.",
            communication: "Direct and easy to understand.",
            advice: "Sometimes quiet, deeper reflection matters too.",
            compatible: [Flower::Dahlia, Flower::Sunflower, Flower::Cosmos],
        },
        Flower::Rose => Base {
            basic_character: "Noble and beautiful, with a strong will and a deep \
                understanding of love and beauty.",
            strengths: ["Aesthetic sense", "Dignity", "Strong will"],
            weaknesses: ["Pride", "Thorniness"],
            love_style: "Deep, passionate love with high ideals for a partner.",
            work_style: "A perfectionist producing high-quality work, with \
                leadership to match.",
            communication: "Refined and dignified.",
            advice: "Sometimes relax and simply be natural.",
            compatible: [Flower::Peony, Flower::Camellia, Flower::Iris],
        },
        Flower::Lotus => Base {
            basic_character: "Pure and exalted, blooming beautifully out of the \
                mud; keeps its own nature in any environment.",
            strengths: ["Purity", "Spirituality", "Adaptability"],
            weaknesses: ["Idealism", "Detachment from reality"],
            love_style: "Values spiritual connection and seeks a pure, clear love.",
            work_style: "Produces beauty even in difficult circumstances; \
                guided by the spirit.",
            communication: "Speaks from deep insight.",
            advice: "Balance the ideal with the practical side of things.",
            compatible: [Flower::Jasmine, Flower::Iris, Flower::Lavender],
        },
        Flower::Lily => Base {
            basic_character: "Pure, graceful, and quietly beautiful; values the \
                beauty of the inner life.",
            strengths: ["Purity", "Grace", "Inner beauty"],
            weaknesses: ["Perfectionism", "Too hard on oneself"],
            love_style: "A pure and sincere love that treasures the partner's \
                inner world.",
            work_style: "Careful, high-quality work that earns deep trust.",
            communication: "Refined and reserved.",
            advice: "Do not demand perfection; your own nature is enough.",
            compatible: [Flower::Sakura, Flower::Camellia, Flower::Jasmine],
        },
        Flower::Lavender => Base {
            basic_character: "Calm and soothing, a gentle presence that puts \
                everyone around at ease.",
            strengths: ["Healing presence", "Calmness", "Empathy"],
            weaknesses: ["Passivity", "Weak self-assertion"],
            love_style: "Deepens relationships slowly; a restful presence.",
            work_style: "Values relationships and creates a harmonious workplace.",
            communication: "Calm and gentle.",
            advice: "Try expressing your own opinions a little more boldly.",
            compatible: [Flower::Lotus, Flower::Cosmos, Flower::Jasmine],
        },
        Flower::Camellia => Base {
            basic_character: "Dignified beauty and strength, with a core that \
                does not yield even to winter's cold.",
            strengths: ["Strength of will", "Beauty", "Endurance"],
            weaknesses: ["Stubbornness", "Inflexibility"],
            love_style: "Devoted and deep; keeps supporting a partner through \
                hardship.",
            work_style: "Persistent through difficulty, with a strong sense of \
                responsibility.",
            communication: "Clear, with a firm core.",
            advice: "Sometimes bend a little and meet the other person halfway.",
            compatible: [Flower::Rose, Flower::Peony, Flower::Lily],
        },
        Flower::Peony => Base {
            basic_character: "Gorgeous and magnetic, a natural presence who often \
                ends up leading.",
            strengths: ["Radiance", "Leadership", "Presence"],
            weaknesses: ["Craving the spotlight", "Taste for the showy"],
            love_style: "A dazzling, passionate love; good at delighting a partner.",
            work_style: "Thrives at the center of the team and carries big \
                projects to success.",
            communication: "Vivid and memorable.",
            advice: "Sometimes treasure the quieter kind of beauty too.",
            compatible: [Flower::Rose, Flower::Camellia, Flower::Dahlia],
        },
        Flower::Jasmine => Base {
            basic_character: "The mysterious beauty of a flower that perfumes \
                the night; deep spirit and effortless grace.",
            strengths: ["Mystery", "Grace", "Deep spirituality"],
            weaknesses: ["Too enigmatic", "Hard to approach"],
            love_style: "A deep, mysterious love that seeks to touch the \
                partner's soul.",
            work_style: "Works from intuition and insight, with artistic sense.",
            communication: "Suggestive and mysterious.",
            advice: "Show a little more approachability as well.",
            compatible: [Flower::Lotus, Flower::Lily, Flower::Iris],
        },
        Flower::Iris => Base {
            basic_character: "Intelligent and insightful, a deep thinker who \
                often plays the messenger between people.",
            strengths: ["Intelligence", "Insight", "Communication"],
            weaknesses: ["Overthinking", "Hesitant to act"],
            love_style: "Values intelligent conversation and the meeting of minds.",
            work_style: "Excels at analysis and problem-solving; a natural \
                go-between.",
            communication: "Intelligent and logical.",
            advice: "Sometimes act on intuition alone.",
            compatible: [Flower::Rose, Flower::Lotus, Flower::Jasmine],
        },
        Flower::Dahlia => Base {
            basic_character: "Treasures variety and individuality; as many-formed \
                as the flower itself, with rich expressive range.",
            strengths: ["Versatility", "Expressiveness", "Individuality"],
            weaknesses: ["Inconsistency", "Prone to wavering"],
            love_style: "Expresses love in many colors, showing a different face \
                for each moment.",
            work_style: "Shines in creative fields; sees from many angles.",
            communication: "Richly expressive, adapted to the listener.",
            advice: "Keep hold of your core while enjoying your range.",
            compatible: [Flower::Sunflower, Flower::Peony, Flower::Cosmos],
        },
        Flower::Cosmos => Base {
            basic_character: "Calm and embracing, wide as the cosmos; charming in \
                its simple beauty.",
            strengths: ["Embrace", "Simplicity", "Calmness"],
            weaknesses: ["Plainness", "Faint presence"],
            love_style: "Quietly enfolding; modest but deep affection.",
            work_style: "A strong supporting player who keeps the whole in harmony.",
            communication: "Simple words that reach the heart.",
            advice: "It is fine to show your own charm a little more.",
            compatible: [Flower::Sakura, Flower::Sunflower, Flower::Lavender],
        },
    }
}

fn modifier(temperament: Temperament) -> Modifier {
    match temperament {
        Temperament::Passionate => Modifier {
            character: "Filled with passionate, burning energy.",
            strength: "Passion",
            weakness: "Runs too hot",
            love: "Expresses love all the more ardently and actively.",
            work: "Brings fervor that sweeps others along.",
            communication: "Speaks with heat and persuasive force.",
            advice: "Keep the passion in hand and value calm as well.",
        },
        Temperament::Gentle => Modifier {
            character: "Gentle and calm, with a warmth that enfolds everyone nearby.",
            strength: "Kindness",
            weakness: "Indecision",
            love: "Takes time and cares for the partner deliberately.",
            work: "Values cooperation and teamwork.",
            communication: "Speaks with gentle consideration.",
            advice: "Try stating your own view a little more plainly.",
        },
        Temperament::Elegant => Modifier {
            character: "Carries a refined, polished beauty.",
            strength: "Refinement",
            weakness: "Hard to approach",
            love: "Expresses love with polish and grace.",
            work: "Earns respect through the quality of the work.",
            communication: "Speaks with refinement and polish.",
            advice: "Sometimes let approachability show too.",
        },
        Temperament::Wild => Modifier {
            character: "Free-spirited and unconfined, charming outside every mold.",
            strength: "Freedom",
            weakness: "Breaks too many molds",
            love: "Seeks a love that does not bind.",
            work: "Excels at fresh approaches unbound by convention.",
            communication: "Expresses freely, outside the usual forms.",
            advice: "Sometimes consider harmony with those around you.",
        },
        Temperament::Mystic => Modifier {
            character: "Holds a mysterious, uncanny charm.",
            strength: "Mystery",
            weakness: "Hard to be understood",
            love: "Seeks a deep, spiritual connection.",
            work: "Works originally from intuition and insight.",
            communication: "Expresses with mystery and suggestion.",
            advice: "Balance the mystical with the practical.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_appends_modifier_strength_and_weakness() {
        let p = FlowerPersonality::compose(Flower::Rose, Temperament::Passionate);
        assert_eq!(p.strengths.len(), 4);
        assert_eq!(p.strengths[3], "Passion");
        assert_eq!(p.weaknesses.len(), 3);
        assert_eq!(p.weaknesses[2], "Runs too hot");
    }

    #[test]
    fn compose_builds_title_and_compatibility() {
        let p = FlowerPersonality::compose(Flower::Lotus, Temperament::Mystic);
        assert_eq!(p.title, "Mystic Lotus");
        assert_eq!(p.compatible_flowers, vec!["Jasmine", "Iris", "Lavender"]);
    }

    #[test]
    fn every_pairing_is_complete() {
        for flower in Flower::ALL {
            for temperament in Temperament::ALL {
                let p = FlowerPersonality::compose(flower, temperament);
                assert!(!p.title.is_empty());
                assert!(!p.basic_character.is_empty());
                assert_eq!(p.strengths.len(), 4);
                assert_eq!(p.weaknesses.len(), 3);
                assert_eq!(p.compatible_flowers.len(), 3);
            }
        }
    }
}
