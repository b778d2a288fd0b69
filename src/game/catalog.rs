//! Static card and combo definitions.
//!
//! The catalog is immutable for the lifetime of the process. Cards are
//! addressed by [`CardId`], an index into [`CARDS`].

use serde::Serialize;

/// Ninja school of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum School {
    /// Chakra techniques.
    Ninjutsu,
    /// Physical combat.
    Taijutsu,
    /// Illusions.
    Genjutsu,
}

/// Card rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    /// Common.
    Common,
    /// Uncommon.
    Uncommon,
    /// Rare.
    Rare,
}

/// Ability attached to a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    /// Flavor only; the engine applies no effect.
    Stealth,
    /// On deploy, restore health to wounded allies in the lane.
    Heal,
    /// Extra health when deployed to the Mountain lane.
    StoneWall,
    /// On deploy, damage every living enemy in the lane.
    ChainLightning,
}

/// Index of a card in [`CARDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(u8);

impl CardId {
    /// Id of the card at `index` in [`CARDS`], or `None` past the end.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CARDS.len() {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    /// Position in [`CARDS`].
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The definition this id points at.
    ///
    /// Ids can only be minted in range, so the lookup always succeeds.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &CARDS[self.index()]
    }
}

/// Immutable definition of a ninja unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    /// Display name, unique within the catalog.
    pub name: &'static str,
    /// School.
    pub school: School,
    /// Chakra cost.
    pub cost: u32,
    /// Base attack.
    pub attack: u32,
    /// Base health.
    pub health: u32,
    /// Registered ability, if any.
    pub ability: Option<AbilityKind>,
    /// Rules text shown to players.
    pub text: &'static str,
    /// Rarity.
    pub rarity: Rarity,
}

/// A jutsu combo: a sequence of schools played in quick succession.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComboDefinition {
    /// Display name.
    pub name: &'static str,
    /// Schools that must be deployed in this order.
    pub sequence: &'static [School],
    /// Maximum time between the first and last play of the sequence.
    pub window_ms: u64,
    /// Nominal chakra cost of the technique.
    pub cost: u32,
    /// Rules text.
    pub effect: &'static str,
}

/// All cards, in catalog order.
pub const CARDS: [CardDefinition; 9] = [
    CardDefinition {
        name: "Shadow Genin",
        school: School::Ninjutsu,
        cost: 2,
        attack: 2,
        health: 2,
        ability: Some(AbilityKind::Stealth),
        text: "Stealth: Cannot be targeted for 1 turn",
        rarity: Rarity::Common,
    },
    CardDefinition {
        name: "Medical Kunoichi",
        school: School::Ninjutsu,
        cost: 4,
        attack: 1,
        health: 3,
        ability: Some(AbilityKind::Heal),
        text: "Heal: Restore 2 health to adjacent allies",
        rarity: Rarity::Uncommon,
    },
    CardDefinition {
        name: "Earth Style Chunin",
        school: School::Ninjutsu,
        cost: 5,
        attack: 3,
        health: 4,
        ability: Some(AbilityKind::StoneWall),
        text: "Stone Wall: +2 health when placed on Mountain Path",
        rarity: Rarity::Uncommon,
    },
    CardDefinition {
        name: "Lightning Jonin",
        school: School::Ninjutsu,
        cost: 8,
        attack: 6,
        health: 4,
        ability: Some(AbilityKind::ChainLightning),
        text: "Chain Lightning: Deal 2 damage to all enemies in lane",
        rarity: Rarity::Rare,
    },
    CardDefinition {
        name: "Academy Student",
        school: School::Taijutsu,
        cost: 1,
        attack: 1,
        health: 1,
        ability: None,
        text: "Eager to prove themselves.",
        rarity: Rarity::Common,
    },
    CardDefinition {
        name: "Kunai Thrower",
        school: School::Taijutsu,
        cost: 1,
        attack: 2,
        health: 1,
        ability: None,
        text: "Fragile but fast.",
        rarity: Rarity::Common,
    },
    CardDefinition {
        name: "Swift Striker",
        school: School::Taijutsu,
        cost: 2,
        attack: 3,
        health: 1,
        ability: None,
        text: "Strikes before the dust settles.",
        rarity: Rarity::Common,
    },
    CardDefinition {
        name: "Blood Frenzy Ninja",
        school: School::Genjutsu,
        cost: 2,
        attack: 1,
        health: 2,
        ability: None,
        text: "Feeds on the chaos of battle.",
        rarity: Rarity::Uncommon,
    },
    CardDefinition {
        name: "Void Barrier",
        school: School::Genjutsu,
        cost: 3,
        attack: 0,
        health: 5,
        ability: None,
        text: "An illusion solid enough to stop a blade.",
        rarity: Rarity::Uncommon,
    },
];

/// The first four cards form the classic pool dealt when no pool is configured.
pub const CLASSIC_POOL: [CardId; 4] = [CardId(0), CardId(1), CardId(2), CardId(3)];

/// All jutsu combos.
pub const COMBOS: [ComboDefinition; 3] = [
    ComboDefinition {
        name: "Shadow Clone Barrage",
        sequence: &[School::Ninjutsu, School::Taijutsu],
        window_ms: 6000,
        cost: 6,
        effect: "Summon 2 shadow clones with combined stats",
    },
    ComboDefinition {
        name: "Fire Dragon Tornado",
        sequence: &[School::Ninjutsu, School::Ninjutsu],
        window_ms: 5000,
        cost: 8,
        effect: "Deal 4 damage to all enemies, +2 if on Mountain Path",
    },
    ComboDefinition {
        name: "Genjutsu Trap",
        sequence: &[School::Genjutsu, School::Ninjutsu],
        window_ms: 7000,
        cost: 7,
        effect: "Mind control enemy unit for 2 turns",
    },
];

/// Look up a card by its exact name.
#[must_use]
pub fn find_card(name: &str) -> Option<CardId> {
    CARDS
        .iter()
        .position(|card| card.name == name)
        .and_then(CardId::from_index)
}

/// Iterate over every card id in catalog order.
pub fn all_cards() -> impl Iterator<Item = CardId> {
    (0..CARDS.len()).filter_map(CardId::from_index)
}
