//! The fixed set of browsable emoji categories.

use std::fmt;

/// One of the eight categories the picker lets users browse.
///
/// Variant order is display order. The corpus also has a `"Flags"`
/// category (and `"Component"` for modifiers); those are not
/// variants, so records carrying them are never surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    SmileysEmotion,
    PeopleBody,
    AnimalsNature,
    FoodDrink,
    Activities,
    TravelPlaces,
    Objects,
    Symbols,
}

impl Category {
    /// Number of browsable categories.
    pub const COUNT: usize = 8;

    /// Every browsable category in display order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::SmileysEmotion,
        Self::PeopleBody,
        Self::AnimalsNature,
        Self::FoodDrink,
        Self::Activities,
        Self::TravelPlaces,
        Self::Objects,
        Self::Symbols,
    ];

    /// The corpus key for this category, also its default display label.
    pub fn key(self) -> &'static str {
        match self {
            Self::SmileysEmotion => "Smileys & Emotion",
            Self::PeopleBody => "People & Body",
            Self::AnimalsNature => "Animals & Nature",
            Self::FoodDrink => "Food & Drink",
            Self::Activities => "Activities",
            Self::TravelPlaces => "Travel & Places",
            Self::Objects => "Objects",
            Self::Symbols => "Symbols",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up the category for a corpus key. `None` for anything not browsable.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
