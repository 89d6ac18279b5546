//! Flower and temperament selection from the birth date.

use crate::personality::FlowerPersonality;
use uranai_numerology::BirthDate;

/// The twelve flowers, in selection-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Flower {
    Sakura,
    Sunflower,
    Rose,
    Lotus,
    Lily,
    Lavender,
    Camellia,
    Peony,
    Jasmine,
    Iris,
    Dahlia,
    Cosmos,
}

impl Flower {
    /// All flowers in selection-index order.
    pub const ALL: [Self; 12] = [
        Self::Sakura,
        Self::Sunflower,
        Self::Rose,
        Self::Lotus,
        Self::Lily,
        Self::Lavender,
        Self::Camellia,
        Self::Peony,
        Self::Jasmine,
        Self::Iris,
        Self::Dahlia,
        Self::Cosmos,
    ];

    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sakura => "Cherry Blossom",
            Self::Sunflower => "Sunflower",
            Self::Rose => "Rose",
            Self::Lotus => "Lotus",
            Self::Lily => "Lily",
            Self::Lavender => "Lavender",
            Self::Camellia => "Camellia",
            Self::Peony => "Peony",
            Self::Jasmine => "Jasmine",
            Self::Iris => "Iris",
            Self::Dahlia => "Dahlia",
            Self::Cosmos => "Cosmos",
        }
    }

    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Sakura => "\u{1F338}",
            Self::Sunflower => "\u{1F33B}",
            Self::Rose => "\u{1F339}",
            Self::Lotus => "\u{1FAB7}",
            Self::Lily => "\u{1F90D}",
            Self::Lavender => "\u{1F49C}",
            Self::Camellia => "\u{1F33A}",
            Self::Peony => "\u{1F337}",
            Self::Jasmine => "\u{1F90D}",
            Self::Iris => "\u{1F499}",
            Self::Dahlia => "\u{1F33C}",
            Self::Cosmos => "\u{1F338}",
        }
    }
}

/// The five temperaments that color a flower's base personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Temperament {
    Passionate,
    Gentle,
    Elegant,
    Wild,
    Mystic,
}

impl Temperament {
    /// All temperaments in selection-index order.
    pub const ALL: [Self; 5] = [
        Self::Passionate,
        Self::Gentle,
        Self::Elegant,
        Self::Wild,
        Self::Mystic,
    ];

    /// Adjective used when composing the reading title.
    pub const fn adjective(&self) -> &'static str {
        match self {
            Self::Passionate => "Passionate",
            Self::Gentle => "Gentle",
            Self::Elegant => "Elegant",
            Self::Wild => "Free-spirited",
            Self::Mystic => "Mystic",
        }
    }
}

/// Luck scores, each in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Luck {
    pub love: u32,
    pub money: u32,
    pub career: u32,
}

/// A complete flower fortune reading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FlowerFortune {
    pub flower: Flower,
    pub flower_name: String,
    pub emoji: String,
    pub temperament: Temperament,
    pub personality: FlowerPersonality,
    /// The reading's three headline traits (the first three strengths).
    pub traits: Vec<String>,
    pub description: String,
    pub luck: Luck,
}

impl FlowerFortune {
    /// Compute the reading for a birth date.
    pub fn from_birth_date(date: BirthDate) -> Self {
        let year = date.year as u32;
        let month = date.month as u32;
        let day = date.day as u32;

        let flower = Flower::ALL[((year + month + day) % 12) as usize];
        let temperament = Temperament::ALL[((year * month + day) % 5) as usize];

        let luck = Luck {
            love: (year + month * 2 + day * 3) % 5 + 1,
            money: (year * 2 + month + day * 2) % 5 + 1,
            career: (year + month * 3 + day) % 5 + 1,
        };

        let personality = FlowerPersonality::compose(flower, temperament);
        let traits = personality.strengths.iter().take(3).cloned().collect();
        let description = personality.basic_character.clone();

        Self {
            flower,
            flower_name: flower.name().to_string(),
            emoji: flower.emoji().to_string(),
            temperament,
            personality,
            traits,
            description,
            luck,
        }
    }
}
