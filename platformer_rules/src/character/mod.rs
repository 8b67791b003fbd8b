//! The finished character configuration handed over by character creation.
//!
//! Appearance is chosen from small fixed tables. Lookups always wrap, so an
//! index that has drifted out of range still resolves to a valid entry.

use serde::{Deserialize, Serialize};

/// An RGB color used only by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One selectable appearance entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppearanceOption {
    pub label: &'static str,
    pub color: Rgb,
}

const fn option(label: &'static str, color: Rgb) -> AppearanceOption {
    AppearanceOption { label, color }
}

pub const HAIR_STYLES: [AppearanceOption; 5] = [
    option("Short Fringe", Rgb(60, 60, 60)),
    option("Raven Waves", Rgb(20, 20, 20)),
    option("Moonlit Bob", Rgb(200, 200, 200)),
    option("Electric Shag", Rgb(90, 20, 120)),
    option("Sunset Plait", Rgb(220, 90, 40)),
];

pub const RACES: [AppearanceOption; 5] = [
    option("Werewolf", Rgb(140, 90, 70)),
    option("Vampire", Rgb(200, 200, 240)),
    option("Siren", Rgb(90, 140, 200)),
    option("Gorgon", Rgb(90, 180, 100)),
    option("Sorcerer", Rgb(170, 120, 200)),
];

pub const OUTFITS: [AppearanceOption; 4] = [
    option("Academy Uniform", Rgb(40, 40, 80)),
    option("Dueling Cloak", Rgb(60, 20, 100)),
    option("Raven Scout", Rgb(30, 70, 120)),
    option("Workshop Apron", Rgb(110, 70, 30)),
];

pub const DEFAULT_NAME: &str = "New Raven";
pub const MAX_NAME_LEN: usize = 18;

/// The appearance selectors, in the order character creation walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterField {
    Hair,
    Race,
    Outfit,
}

impl CharacterField {
    const ORDER: [CharacterField; 3] = [
        CharacterField::Hair,
        CharacterField::Race,
        CharacterField::Outfit,
    ];

    /// The table this field selects from.
    pub fn options(&self) -> &'static [AppearanceOption] {
        match self {
            CharacterField::Hair => &HAIR_STYLES,
            CharacterField::Race => &RACES,
            CharacterField::Outfit => &OUTFITS,
        }
    }

    /// The following field, wrapping from the last back to the first.
    pub fn next(&self) -> Self {
        self.step(1)
    }

    /// The preceding field, wrapping from the first back to the last.
    pub fn previous(&self) -> Self {
        self.step(-1)
    }

    fn step(&self, direction: i32) -> Self {
        let position = Self::ORDER
            .iter()
            .position(|field| field == self)
            .unwrap_or(0);
        Self::ORDER[wrap_index(position as i64 + direction as i64, Self::ORDER.len())]
    }
}

fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// A finished character: a name plus one index per appearance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub name: String,
    pub hair_index: usize,
    pub race_index: usize,
    pub outfit_index: usize,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            hair_index: 0,
            race_index: 0,
            outfit_index: 0,
        }
    }
}

impl CharacterConfig {
    /// Create a configuration with the given name and the first entry of every
    /// table.
    pub fn new(name: &str) -> Self {
        Self::default().with_name(name)
    }

    /// Set the name, trimmed to [`MAX_NAME_LEN`] characters. A blank name falls
    /// back to [`DEFAULT_NAME`].
    pub fn with_name(mut self, name: &str) -> Self {
        let trimmed: String = name.trim().chars().take(MAX_NAME_LEN).collect();
        self.name = if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed
        };
        self
    }

    pub fn with_indices(mut self, hair: usize, race: usize, outfit: usize) -> Self {
        self.hair_index = hair;
        self.race_index = race;
        self.outfit_index = outfit;
        self
    }

    pub fn hair(&self) -> AppearanceOption {
        self.resolve(CharacterField::Hair)
    }

    pub fn race(&self) -> AppearanceOption {
        self.resolve(CharacterField::Race)
    }

    pub fn outfit(&self) -> AppearanceOption {
        self.resolve(CharacterField::Outfit)
    }

    /// Resolve a field against its table, wrapping out-of-range indices.
    pub fn resolve(&self, field: CharacterField) -> AppearanceOption {
        let options = field.options();
        options[self.index(field) % options.len()]
    }

    /// Move a selector forward or backward, wrapping at both ends.
    pub fn cycle(&mut self, field: CharacterField, direction: i32) {
        let len = field.options().len();
        let current = self.index(field) as i64;
        let next = wrap_index(current + direction as i64, len);
        match field {
            CharacterField::Hair => self.hair_index = next,
            CharacterField::Race => self.race_index = next,
            CharacterField::Outfit => self.outfit_index = next,
        }
    }

    fn index(&self, field: CharacterField) -> usize {
        match field {
            CharacterField::Hair => self.hair_index,
            CharacterField::Race => self.race_index,
            CharacterField::Outfit => self.outfit_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_character() {
        let config = CharacterConfig::default();
        assert_eq!(config.name, "New Raven");
        assert_eq!(config.hair().label, "Short Fringe");
        assert_eq!(config.race().label, "Werewolf");
        assert_eq!(config.outfit().label, "Academy Uniform");
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(CharacterConfig::new("  Morticia ").name, "Morticia");
        assert_eq!(CharacterConfig::new("   ").name, DEFAULT_NAME);
        assert_eq!(
            CharacterConfig::new("Wednesday Friday Addams").name,
            "Wednesday Friday A"
        );
    }

    #[test]
    fn test_out_of_range_indices_wrap() {
        let config = CharacterConfig::default().with_indices(7, 5, 9);
        assert_eq!(config.hair().label, "Moonlit Bob");
        assert_eq!(config.race().label, "Werewolf");
        assert_eq!(config.outfit().label, "Dueling Cloak");
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let mut config = CharacterConfig::default();

        config.cycle(CharacterField::Outfit, -1);
        assert_eq!(config.outfit_index, 3);
        assert_eq!(config.outfit().label, "Workshop Apron");

        config.cycle(CharacterField::Outfit, 1);
        assert_eq!(config.outfit_index, 0);

        config.cycle(CharacterField::Race, 6);
        assert_eq!(config.race().label, "Vampire");
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(CharacterField::Hair.next(), CharacterField::Race);
        assert_eq!(CharacterField::Outfit.next(), CharacterField::Hair);
        assert_eq!(CharacterField::Hair.previous(), CharacterField::Outfit);
    }
}
