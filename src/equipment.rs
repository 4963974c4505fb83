use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipSlot {
    pub fn label(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Armor => "Armor",
            EquipSlot::Accessory => "Accessory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl ItemRarity {
    pub fn base_sell_value(&self) -> f64 {
        match self {
            ItemRarity::Common => 100.0,
            ItemRarity::Uncommon => 250.0,
            ItemRarity::Rare => 750.0,
            ItemRarity::Legendary => 2500.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemRarity::Common => "Common",
            ItemRarity::Uncommon => "Uncommon",
            ItemRarity::Rare => "Rare",
            ItemRarity::Legendary => "Legendary",
        }
    }
}

/// Flat stat block carried by a dropped item. All fields additive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStats {
    pub click_damage: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub gold_bonus: f64,
    pub hero_dps_bonus: f64,
    pub treasure_chance: f64,
}

impl ItemStats {
    /// Scalar used to compare two items for the same slot during
    /// auto-equip. Percent stats are weighted up so a crit ring can beat
    /// a flat-damage sword.
    pub fn power(&self) -> f64 {
        self.click_damage.abs()
            + self.crit_chance.abs() * 100.0
            + self.crit_multiplier.abs() * 100.0
            + self.gold_bonus.abs() * 100.0
            + self.hero_dps_bonus.abs() * 100.0
            + self.treasure_chance.abs() * 100.0
    }

    pub fn add(&mut self, other: &ItemStats) {
        self.click_damage += other.click_damage;
        self.crit_chance += other.crit_chance;
        self.crit_multiplier += other.crit_multiplier;
        self.gold_bonus += other.gold_bonus;
        self.hero_dps_bonus += other.hero_dps_bonus;
        self.treasure_chance += other.treasure_chance;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub slot: EquipSlot,
    pub rarity: ItemRarity,
    pub stats: ItemStats,
}

macro_rules! stats {
    ($($field:ident: $value:expr),* $(,)?) => {
        ItemStats {
            $($field: $value,)*
            ..ItemStats {
                click_damage: 0.0,
                crit_chance: 0.0,
                crit_multiplier: 0.0,
                gold_bonus: 0.0,
                hero_dps_bonus: 0.0,
                treasure_chance: 0.0,
            }
        }
    };
}

static ITEMS: [ItemTemplate; 10] = [
    ItemTemplate {
        id: "iron_sword",
        name: "Iron Sword",
        icon: "🗡️",
        slot: EquipSlot::Weapon,
        rarity: ItemRarity::Common,
        stats: stats!(click_damage: 2.0),
    },
    ItemTemplate {
        id: "steel_blade",
        name: "Steel Blade",
        icon: "⚔️",
        slot: EquipSlot::Weapon,
        rarity: ItemRarity::Uncommon,
        stats: stats!(click_damage: 5.0, crit_chance: 0.02),
    },
    ItemTemplate {
        id: "enchanted_sword",
        name: "Enchanted Sword",
        icon: "✨",
        slot: EquipSlot::Weapon,
        rarity: ItemRarity::Rare,
        stats: stats!(click_damage: 12.0, crit_chance: 0.05, crit_multiplier: 0.5),
    },
    ItemTemplate {
        id: "legendary_blade",
        name: "Legendary Blade",
        icon: "🌟",
        slot: EquipSlot::Weapon,
        rarity: ItemRarity::Legendary,
        stats: stats!(click_damage: 30.0, crit_chance: 0.1, crit_multiplier: 1.0),
    },
    ItemTemplate {
        id: "leather_armor",
        name: "Leather Armor",
        icon: "🦺",
        slot: EquipSlot::Armor,
        rarity: ItemRarity::Common,
        stats: stats!(gold_bonus: 0.1),
    },
    ItemTemplate {
        id: "chain_mail",
        name: "Chain Mail",
        icon: "⛓️",
        slot: EquipSlot::Armor,
        rarity: ItemRarity::Uncommon,
        stats: stats!(gold_bonus: 0.25, hero_dps_bonus: 0.2),
    },
    ItemTemplate {
        id: "plate_armor",
        name: "Plate Armor",
        icon: "🛡️",
        slot: EquipSlot::Armor,
        rarity: ItemRarity::Rare,
        stats: stats!(gold_bonus: 0.5, hero_dps_bonus: 0.5),
    },
    ItemTemplate {
        id: "lucky_ring",
        name: "Lucky Ring",
        icon: "💍",
        slot: EquipSlot::Accessory,
        rarity: ItemRarity::Uncommon,
        stats: stats!(treasure_chance: 0.02),
    },
    ItemTemplate {
        id: "power_amulet",
        name: "Power Amulet",
        icon: "📿",
        slot: EquipSlot::Accessory,
        rarity: ItemRarity::Rare,
        stats: stats!(click_damage: 8.0, hero_dps_bonus: 0.3),
    },
    ItemTemplate {
        id: "soul_crystal",
        name: "Soul Crystal",
        icon: "💎",
        slot: EquipSlot::Accessory,
        rarity: ItemRarity::Legendary,
        stats: stats!(click_damage: 20.0, gold_bonus: 0.75, treasure_chance: 0.05),
    },
];

pub fn item_templates() -> &'static [ItemTemplate] {
    &ITEMS
}

pub fn item_template(id: &str) -> Option<&'static ItemTemplate> {
    ITEMS.iter().find(|t| t.id == id)
}

/// A concrete dropped item instance. Stats are copied from the template
/// at drop time so template rebalancing never mutates old saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub id: Uuid,
    pub template_id: String,
    pub name: String,
    pub icon: String,
    pub slot: EquipSlot,
    pub rarity: ItemRarity,
    pub stats: ItemStats,
    pub drop_zone: u32,
}

impl EquippedItem {
    pub fn from_template(template: &ItemTemplate, drop_zone: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            template_id: template.id.to_string(),
            name: template.name.to_string(),
            icon: template.icon.to_string(),
            slot: template.slot,
            rarity: template.rarity,
            stats: template.stats,
            drop_zone,
        }
    }

    pub fn power(&self) -> f64 {
        self.stats.power()
    }

    /// Gold received when selling. Drops from deeper zones are worth more.
    pub fn sell_value(&self) -> f64 {
        (self.rarity.base_sell_value() * (1.0 + self.drop_zone as f64 * 0.1)).floor()
    }
}

/// The three worn slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub weapon: Option<EquippedItem>,
    pub armor: Option<EquippedItem>,
    pub accessory: Option<EquippedItem>,
}

impl Equipment {
    pub fn get(&self, slot: EquipSlot) -> Option<&EquippedItem> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
            EquipSlot::Accessory => self.accessory.as_ref(),
        }
    }

    /// Puts `item` in its slot, returning whatever was there before.
    pub fn set(&mut self, item: EquippedItem) -> Option<EquippedItem> {
        let slot = match item.slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        };
        slot.replace(item)
    }

    pub fn take(&mut self, slot: EquipSlot) -> Option<EquippedItem> {
        match slot {
            EquipSlot::Weapon => self.weapon.take(),
            EquipSlot::Armor => self.armor.take(),
            EquipSlot::Accessory => self.accessory.take(),
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &EquippedItem> {
        [&self.weapon, &self.armor, &self.accessory]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }

    /// Sum of all worn stat blocks.
    pub fn total_stats(&self) -> ItemStats {
        let mut total = ItemStats::default();
        for item in self.iter_equipped() {
            total.add(&item.stats);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        for (i, a) in ITEMS.iter().enumerate() {
            for b in &ITEMS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_power_weights_percent_stats() {
        let sword = stats!(click_damage: 2.0);
        let ring = stats!(treasure_chance: 0.05);
        assert_eq!(sword.power(), 2.0);
        assert_eq!(ring.power(), 5.0);
        assert!(ring.power() > sword.power());
    }

    #[test]
    fn test_sell_value_scales_with_drop_zone() {
        let template = item_template("iron_sword").unwrap();
        let shallow = EquippedItem::from_template(template, 1);
        let deep = EquippedItem::from_template(template, 50);
        assert_eq!(shallow.sell_value(), 110.0);
        assert_eq!(deep.sell_value(), 600.0);
    }

    #[test]
    fn test_equipment_set_displaces_previous_item() {
        let mut equipment = Equipment::default();
        let iron = EquippedItem::from_template(item_template("iron_sword").unwrap(), 1);
        let steel = EquippedItem::from_template(item_template("steel_blade").unwrap(), 2);

        assert!(equipment.set(iron.clone()).is_none());
        let displaced = equipment.set(steel).expect("iron sword displaced");
        assert_eq!(displaced.id, iron.id);
        assert_eq!(equipment.get(EquipSlot::Weapon).unwrap().template_id, "steel_blade");
    }

    #[test]
    fn test_total_stats_sums_all_slots() {
        let mut equipment = Equipment::default();
        equipment.set(EquippedItem::from_template(item_template("steel_blade").unwrap(), 1));
        equipment.set(EquippedItem::from_template(item_template("chain_mail").unwrap(), 1));
        let total = equipment.total_stats();
        assert_eq!(total.click_damage, 5.0);
        assert_eq!(total.crit_chance, 0.02);
        assert_eq!(total.gold_bonus, 0.25);
        assert_eq!(total.hero_dps_bonus, 0.2);
    }
}
