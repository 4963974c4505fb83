use crate::notice::{Notice, NoticeColor};

/// One monster family within a zone. The named boss replaces the family
/// on every tenth kill.
#[derive(Debug, Clone, Copy)]
pub struct MonsterEntry {
    pub name: &'static str,
    pub emoji: &'static str,
    pub boss: &'static str,
}

/// A themed tier of the world. Zones past the end of the table reuse the
/// last entry with ever-scaling stats.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub name: &'static str,
    pub monsters: [MonsterEntry; 5],
}

macro_rules! entry {
    ($name:literal, $emoji:literal, $boss:literal) => {
        MonsterEntry {
            name: $name,
            emoji: $emoji,
            boss: $boss,
        }
    };
}

static ZONES: [Zone; 9] = [
    Zone {
        name: "Lumbridge",
        monsters: [
            entry!("Goblin", "👹", "Goblin Champion"),
            entry!("Cow", "🐄", "Cow King"),
            entry!("Chicken", "🐔", "Giant Chicken"),
            entry!("Giant Rat", "🐀", "Rat King"),
            entry!("Man", "👨", "Lumbridge Guard Captain"),
        ],
    },
    Zone {
        name: "Al Kharid",
        monsters: [
            entry!("Scorpion", "🦂", "Desert Scorpion King"),
            entry!("Jackal", "🐺", "Alpha Jackal"),
            entry!("Vulture", "🦅", "Giant Vulture"),
            entry!("Camel", "🐪", "Desert Camel Lord"),
            entry!("Desert Wolf", "🐺", "Desert Wolf Alpha"),
        ],
    },
    Zone {
        name: "Varrock",
        monsters: [
            entry!("Guard", "🛡️", "Guard Captain"),
            entry!("Dark Wizard", "🧙", "Archmage Sedridor"),
            entry!("Mugger", "🗡️", "Thief Leader"),
            entry!("Thief", "🥷", "Master Thief"),
            entry!("Barbarian", "⚔️", "Barbarian Chief"),
        ],
    },
    Zone {
        name: "Falador",
        monsters: [
            entry!("White Knight", "⚔️", "Sir Amik Varze"),
            entry!("Dwarf", "🧔", "Dwarf King"),
            entry!("Ice Warrior", "❄️", "Ice Lord"),
            entry!("Ice Giant", "🧊", "Frost Giant King"),
            entry!("Skeleton", "💀", "Skeleton Champion"),
        ],
    },
    Zone {
        name: "Draynor",
        monsters: [
            entry!("Vampire", "🧛", "Count Draynor"),
            entry!("Zombie", "🧟", "Zombie Champion"),
            entry!("Ghost", "👻", "Ancient Spirit"),
            entry!("Draynor Guard", "🛡️", "Captain Rovin"),
            entry!("Tree Spirit", "🌳", "Elder Tree Spirit"),
        ],
    },
    Zone {
        name: "Wilderness",
        monsters: [
            entry!("Bandit", "🏴‍☠️", "Bandit Leader"),
            entry!("Chaos Elemental", "⚡", "Greater Chaos Elemental"),
            entry!("Green Dragon", "🐲", "Ancient Green Dragon"),
            entry!("Lava Dragon", "🔥", "Lava Dragon King"),
            entry!("Revenant", "👻", "Revenant Dragon"),
        ],
    },
    Zone {
        name: "God Wars",
        monsters: [
            entry!("Goblin", "👹", "General Graardor"),
            entry!("Aviansie", "🦅", "Kree'arra"),
            entry!("Bloodveld", "🩸", "K'ril Tsutsaroth"),
            entry!("Ice Troll", "🧊", "Commander Zilyana"),
            entry!("Demon", "😈", "Nex"),
        ],
    },
    Zone {
        name: "Dragon Realm",
        monsters: [
            entry!("Baby Dragon", "🐉", "Ancient Dragon"),
            entry!("Wyvern", "🐲", "Skeletal Wyvern"),
            entry!("Drake", "🔥", "Fire Drake Lord"),
            entry!("Wyrm", "⚡", "Lightning Wyrm"),
            entry!("Elder Dragon", "🌟", "Dragon King"),
        ],
    },
    Zone {
        name: "Shadow Realm",
        monsters: [
            entry!("Shadow", "👤", "Shadow Lord"),
            entry!("Wraith", "👻", "Wraith King"),
            entry!("Specter", "🌫️", "Ancient Specter"),
            entry!("Phantom", "😱", "Phantom Emperor"),
            entry!("Void Being", "🕳️", "Void Overlord"),
        ],
    },
];

pub fn zone_table() -> &'static [Zone] {
    &ZONES
}

/// Returns the zone data for a 1-based zone number, clamping past the end
/// of the table.
pub fn zone_for(zone: u32) -> &'static Zone {
    let index = (zone.saturating_sub(1) as usize).min(ZONES.len() - 1);
    &ZONES[index]
}

/// Milestone message shown when a zone is first entered, if the zone has
/// one (skill unlocks and ascension hints).
pub fn zone_milestone_notice(zone: u32) -> Option<Notice> {
    let (text, color) = match zone {
        5 => ("Berserker Mode unlocked! 3x click damage on demand.", NoticeColor::Prestige),
        10 => ("Lucky Strike unlocked! Guaranteed critical hits.", NoticeColor::Treasure),
        15 => ("Hero Rally unlocked! Triple hero DPS.", NoticeColor::Combo),
        25 => ("Time Warp unlocked! Double game speed.", NoticeColor::Info),
        50 => ("Halfway to ascension! Keep pushing for Hero Souls.", NoticeColor::Success),
        100 => ("Ascension available! You can now gain Hero Souls.", NoticeColor::Info),
        _ => return None,
    };
    Some(Notice::new(text, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_for_clamps_past_table_end() {
        assert_eq!(zone_for(1).name, "Lumbridge");
        assert_eq!(zone_for(9).name, "Shadow Realm");
        assert_eq!(zone_for(250).name, "Shadow Realm");
    }

    #[test]
    fn test_zone_for_zero_is_first_zone() {
        // Zone numbers are 1-based; 0 must not underflow
        assert_eq!(zone_for(0).name, "Lumbridge");
    }

    #[test]
    fn test_every_zone_has_five_monsters_with_bosses() {
        for zone in zone_table() {
            for monster in &zone.monsters {
                assert!(!monster.name.is_empty());
                assert!(!monster.boss.is_empty());
            }
        }
    }

    #[test]
    fn test_milestone_zones() {
        for zone in [5, 10, 15, 25, 50, 100] {
            assert!(zone_milestone_notice(zone).is_some(), "zone {}", zone);
        }
        assert!(zone_milestone_notice(4).is_none());
        assert!(zone_milestone_notice(101).is_none());
    }
}
