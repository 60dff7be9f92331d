//! Static content tables backing quest composition
//!
//! Everything user-visible that the generator draws from lives here:
//! name pools, per-type title verbs and description templates, and the
//! difficulty-scaled count tables. The basic/advanced partition is also
//! data in this module, so adding a type to one of the arrays is enough
//! to route it through the matching composition path.

use crate::domain::value_objects::{Difficulty, QuestLength, QuestType, RewardType};

/// Types composed by the basic path. Each entry must have a dedicated
/// branch in the basic composer.
pub const BASIC_QUEST_TYPES: [QuestType; 5] = [
    QuestType::Kill,
    QuestType::Collection,
    QuestType::Delivery,
    QuestType::Escort,
    QuestType::Exploration,
];

/// Types composed by the advanced path. Entries without a dedicated
/// branch fall through to the generic advanced composition.
pub const ADVANCED_QUEST_TYPES: [QuestType; 8] = [
    QuestType::Mystery,
    QuestType::Survival,
    QuestType::Crafting,
    QuestType::Diplomacy,
    QuestType::Chain,
    QuestType::Rescue,
    QuestType::Defense,
    QuestType::Stealth,
];

/// Every generatable type, basic first. Wildcard resolution draws from
/// this table.
pub const ALL_QUEST_TYPES: [QuestType; 13] = [
    QuestType::Kill,
    QuestType::Collection,
    QuestType::Delivery,
    QuestType::Escort,
    QuestType::Exploration,
    QuestType::Mystery,
    QuestType::Survival,
    QuestType::Crafting,
    QuestType::Diplomacy,
    QuestType::Chain,
    QuestType::Rescue,
    QuestType::Defense,
    QuestType::Stealth,
];

/// Whether `quest_type` belongs to the advanced set.
pub fn is_advanced(quest_type: QuestType) -> bool {
    debug_assert!(
        BASIC_QUEST_TYPES.contains(&quest_type) || ADVANCED_QUEST_TYPES.contains(&quest_type),
        "quest type {quest_type} missing from both type lists"
    );
    ADVANCED_QUEST_TYPES.contains(&quest_type)
}

pub const DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Epic,
];

pub const QUEST_LENGTHS: [QuestLength; 4] = [
    QuestLength::Short,
    QuestLength::Medium,
    QuestLength::Long,
    QuestLength::Campaign,
];

pub const REWARDS: [RewardType; 6] = [
    RewardType::GoldCoins,
    RewardType::MagicalItems,
    RewardType::Experience,
    RewardType::Reputation,
    RewardType::LandGrants,
    RewardType::NobleTitles,
];

pub const CREATURES: &[&str] = &[
    "Ancient Red Dragon",
    "Frost Wyrm",
    "Shadow Dragon",
    "Zombie Horde",
    "Skeleton Warriors",
    "Vampire Lord",
    "Lich Master",
    "Goblin Raiders",
    "Orc Warband",
    "Bandit Leader",
    "Cultist Assassins",
    "Dire Wolves",
    "Giant Spiders",
    "Owlbear",
    "Mountain Trolls",
    "Fire Elementals",
    "Shadow Demons",
    "Fallen Angels",
    "Frost Giants",
    "Stone Golems",
    "Wyverns",
    "Basilisk",
    "Manticore",
    "Chimera",
    "Hydra",
    "Minotaur",
    "Cyclops",
    "Dark Elves",
    "Drow Assassins",
    "Mind Flayers",
    "Beholders",
    "Displacer Beasts",
];

pub const LOCATIONS: &[&str] = &[
    "Ancient Tomb of Kings",
    "Forgotten Crypt",
    "Crystal Caverns",
    "Village of Millbrook",
    "Port City of Saltmere",
    "Capital of Valorhall",
    "Darkwood Forest",
    "Crimson Desert",
    "Frostpeak Mountains",
    "Wizard's Tower",
    "Fairy Ring Grove",
    "Lost Temple of Light",
    "Abandoned Castle Ravenshollow",
    "Elven Sanctuary",
    "Dwarven Mines",
    "Haunted Battlefield",
    "Floating Sky Citadel",
    "Underground Labyrinth",
    "Cursed Swamplands",
    "Dragon's Lair",
    "Mystical Library",
    "Sunken Pirate Ship",
    "Volcanic Forge",
    "Ice Palace of the North",
];

pub const ITEMS: &[&str] = &[
    "Enchanted Blade of Heroes",
    "Dwarven Warhammer",
    "Elven Longbow",
    "Crown of Ancient Kings",
    "Orb of Elemental Power",
    "Tome of Forbidden Knowledge",
    "Dragon Scales",
    "Mithril Ore",
    "Rare Moonflower Herbs",
    "Magical Crystals",
    "Ancient Gold Coins",
    "Precious Ruby Gems",
    "Lost Family Heirloom",
    "Healing Potions",
    "Scroll of Fireball",
    "Blessed Holy Water",
    "Staff of Lightning",
    "Cloak of Invisibility",
    "Ring of Protection",
    "Amulet of Wisdom",
    "Phoenix Feathers",
    "Unicorn Horn",
    "Star Metal Ingots",
    "Sacred Relics",
];

pub const NPCS: &[&str] = &[
    "King Aldric the Just",
    "Princess Elara",
    "Duke Ravencrest",
    "Trader Magnus",
    "Blacksmith Thorin Ironforge",
    "Alchemist Sage Vera",
    "High Priest Benedictus",
    "Oracle of Light",
    "Archmage Verin",
    "Lorekeeper Nolan",
    "Farmer Willem",
    "Innkeeper Martha",
    "Guard Captain Boris",
    "Merchant Caravan Leader",
    "Elder Council Member",
    "Royal Ambassador",
    "Master Thief Shadowbane",
    "War General Stonefist",
    "Mysterious Stranger",
    "Village Elder",
    "Court Wizard",
    "Royal Messenger",
];

pub const COMPLICATIONS: &[&str] = &[
    "A rival adventuring party is also seeking the same objective",
    "The weather turns dangerous, creating additional hazards",
    "Key information provided was incorrect or misleading",
    "An important ally is captured or turns against you",
    "The quest location is under siege or heavily guarded",
    "A powerful curse affects the quest area",
    "Time is running out due to an unexpected deadline",
    "Local authorities forbid or complicate the quest",
    "A traitor within your group sabotages the mission",
    "The quest objective has been moved or is heavily protected",
];

pub const TITLE_SUFFIXES: &[&str] = &[
    "of Legend",
    "of Power",
    "of Destiny",
    "of Honor",
    "of Shadows",
    "of Light",
    "of the Ancient",
    "of the Forgotten",
    "of the Lost",
    "of Mystery",
    "of Valor",
    "of the Cursed",
    "of the Sacred",
];

/// Opening verb used when a type has no registered prefix pool.
pub const DEFAULT_TITLE_PREFIX: &str = "The";

/// Description used when a type has no registered templates.
pub const GENERIC_DESCRIPTION: &str = "A quest awaits those brave enough to accept it.";

/// Verbs that open a generated title for `quest_type`.
pub fn title_prefixes(quest_type: QuestType) -> &'static [&'static str] {
    match quest_type {
        QuestType::Kill => &["Eliminate", "Destroy", "Hunt", "Slay", "Vanquish"],
        QuestType::Collection => &["Gather", "Collect", "Retrieve", "Obtain", "Acquire"],
        QuestType::Delivery => &["Deliver", "Transport", "Escort", "Carry", "Bring"],
        QuestType::Escort => &["Protect", "Guide", "Escort", "Safeguard", "Accompany"],
        QuestType::Exploration => &["Discover", "Explore", "Investigate", "Survey", "Scout"],
        QuestType::Mystery => &["Uncover", "Solve", "Investigate", "Reveal", "Expose"],
        QuestType::Survival => &["Survive", "Endure", "Outlast", "Withstand", "Overcome"],
        QuestType::Crafting => &["Forge", "Create", "Craft", "Build", "Construct"],
        QuestType::Diplomacy => &["Negotiate", "Mediate", "Resolve", "Unite", "Reconcile"],
        QuestType::Chain => &["The", "Epic", "Grand", "Ultimate", "Legendary"],
        QuestType::Rescue => &["Rescue", "Save", "Liberate", "Free", "Recover"],
        QuestType::Defense => &["Defend", "Protect", "Hold", "Guard", "Fortify"],
        QuestType::Stealth => &["Infiltrate", "Sneak", "Penetrate", "Breach", "Slip Into"],
    }
}

/// Description templates registered for `quest_type`. `{placeholder}`
/// markers are substituted at composition time.
pub fn description_templates(quest_type: QuestType) -> &'static [&'static str] {
    match quest_type {
        QuestType::Kill => &[
            "A dangerous {creature} has been terrorizing the local area. The threat must be eliminated before more innocent lives are lost.",
            "Reports of {creature} attacks have reached the authorities. Heroes are needed to end this menace.",
            "The {creature} has claimed many victims. Someone must step forward to stop this evil.",
        ],
        QuestType::Collection => &[
            "Ancient artifacts have been scattered across dangerous territories. These precious items must be recovered before they fall into the wrong hands.",
            "Rare materials are needed for an important ritual. Brave souls must venture forth to gather them.",
            "Lost treasures lie hidden in perilous places. Only the bravest adventurers dare retrieve them.",
        ],
        QuestType::Delivery => &[
            "Important cargo needs to be transported safely across dangerous lands. Time is of the essence, and the cargo must arrive intact.",
            "A crucial message must reach its destination despite the perils of the journey.",
            "Precious goods require safe passage through hostile territory.",
        ],
        QuestType::Escort => &[
            "A valuable person needs safe passage through hostile territory. Your protection skills will be put to the test.",
            "An important figure must travel safely to their destination. Guardians are required.",
            "Someone of great importance needs protection on a dangerous journey.",
        ],
        QuestType::Exploration => &[
            "Uncharted territories hold secrets waiting to be uncovered. Brave the unknown and map out these mysterious lands.",
            "Ancient ruins have been discovered. Explorers are needed to investigate their secrets.",
            "New lands await discovery. Adventurers must chart these unknown regions.",
        ],
        QuestType::Mystery => &[
            "Strange occurrences have been reported, and someone needs to get to the bottom of it. Follow the clues and uncover the truth.",
            "A puzzling mystery requires skilled investigators. The truth must be revealed.",
            "Unusual events have the locals concerned. Detectives are needed to solve the case.",
        ],
        QuestType::Survival => &[
            "The harsh wilderness tests even the most experienced adventurers. Survive against all odds in this unforgiving environment.",
            "Dangerous lands challenge all who enter. Only the strongest will endure.",
            "A test of endurance awaits in the most hostile environments.",
        ],
        QuestType::Crafting => &[
            "Master craftsmen are needed to create something of great importance. Gather materials and demonstrate your skills.",
            "An important item must be forged with the finest materials and greatest skill.",
            "Ancient crafting techniques must be employed to create a legendary artifact.",
        ],
        QuestType::Diplomacy => &[
            "Tensions between factions threaten to erupt into war. Skilled negotiators must find a peaceful solution.",
            "Diplomatic relations have broken down. Peace-makers are needed to restore harmony.",
            "Conflicts between groups require careful mediation to prevent bloodshed.",
        ],
        QuestType::Chain => &[
            "A great destiny unfolds across multiple challenges. Each step brings you closer to an epic conclusion.",
            "This is but the beginning of a grand adventure that will span many trials.",
            "A complex series of tasks must be completed to achieve the ultimate goal.",
        ],
        QuestType::Rescue => &[
            "Someone important has been captured and needs to be rescued before it's too late.",
            "Prisoners are being held in a dangerous location. Heroes must free them.",
            "A rescue operation is needed to save those who cannot save themselves.",
        ],
        QuestType::Defense => &[
            "Enemy forces are approaching, and defenses must be prepared. The siege will test everyone's courage.",
            "A location of great importance is under threat. Defenders must hold the line.",
            "Hostile armies gather at the gates. The defense of this place falls to you.",
        ],
        QuestType::Stealth => &[
            "Success depends on moving unseen and unheard. Stealth and cunning are your greatest weapons.",
            "A covert operation requires agents who can move through shadows without detection.",
            "The mission demands absolute secrecy. Discovery means failure - or worse.",
        ],
    }
}

/// A quantity looked up by difficulty instead of drawn at random.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyScale {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    pub epic: u32,
}

impl DifficultyScale {
    pub const fn for_difficulty(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Epic => self.epic,
        }
    }
}

/// Enemies to defeat in a kill quest.
pub const KILL_COUNT: DifficultyScale = DifficultyScale {
    easy: 1,
    medium: 3,
    hard: 5,
    epic: 8,
};

/// Items to gather in a collection quest.
pub const COLLECTION_COUNT: DifficultyScale = DifficultyScale {
    easy: 3,
    medium: 5,
    hard: 8,
    epic: 12,
};

/// Days to hold out in a survival challenge.
pub const SURVIVAL_DAYS: DifficultyScale = DifficultyScale {
    easy: 3,
    medium: 7,
    hard: 14,
    epic: 30,
};

/// Reward draws granted per quest, before deduplication.
pub const REWARD_COUNT: DifficultyScale = DifficultyScale {
    easy: 1,
    medium: 2,
    hard: 2,
    epic: 3,
};
