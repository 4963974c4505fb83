//! Equipment drops and inventory management.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::challenges::{record_challenge_progress, ChallengeKind};
use crate::equipment::{item_templates, EquipSlot, EquippedItem, ItemRarity, ItemTemplate};
use crate::game_state::GameState;
use crate::monsters::Monster;
use crate::notice::{format_number, ActionError, Notice, NoticeColor};

fn drop_chance(monster: &Monster) -> f64 {
    if monster.is_legendary {
        0.8
    } else if monster.is_boss {
        0.3
    } else if monster.is_elite {
        0.15
    } else {
        0.02
    }
}

fn roll_rarity(monster: &Monster, rng: &mut impl Rng) -> ItemRarity {
    let roll = rng.gen::<f64>();
    if monster.is_legendary {
        if roll < 0.5 {
            ItemRarity::Legendary
        } else if roll < 0.8 {
            ItemRarity::Rare
        } else {
            ItemRarity::Uncommon
        }
    } else if monster.is_boss {
        if roll < 0.2 {
            ItemRarity::Rare
        } else if roll < 0.6 {
            ItemRarity::Uncommon
        } else {
            ItemRarity::Common
        }
    } else if monster.is_elite {
        if roll < 0.4 {
            ItemRarity::Uncommon
        } else {
            ItemRarity::Common
        }
    } else if roll < 0.05 {
        ItemRarity::Uncommon
    } else {
        ItemRarity::Common
    }
}

fn templates_of_rarity(rarity: ItemRarity) -> Vec<&'static ItemTemplate> {
    item_templates().iter().filter(|t| t.rarity == rarity).collect()
}

/// Maybe drops an item off a kill. A drop auto-equips when it beats what
/// is worn in its slot (the displaced piece goes to the inventory),
/// otherwise it lands in the inventory directly.
pub fn roll_equipment_drop(
    state: &mut GameState,
    monster: &Monster,
    rng: &mut impl Rng,
) -> Vec<Notice> {
    if rng.gen::<f64>() >= drop_chance(monster) {
        return Vec::new();
    }

    let rarity = roll_rarity(monster, rng);
    let candidates = templates_of_rarity(rarity);
    let Some(template) = candidates.choose(rng) else {
        return Vec::new();
    };
    let item = EquippedItem::from_template(template, state.zone);

    let mut notices = vec![Notice::new(
        format!("{} {} dropped! ({})", item.icon, item.name, item.rarity.label()),
        NoticeColor::Treasure,
    )];

    let worn_power = state.equipment.get(item.slot).map(EquippedItem::power);
    match worn_power {
        Some(power) if power >= item.power() => {
            state.inventory.push(item);
        }
        _ => {
            notices.push(Notice::new(
                format!("{} equipped!", item.name),
                NoticeColor::Info,
            ));
            if let Some(displaced) = state.equipment.set(item) {
                state.inventory.push(displaced);
            }
        }
    }
    notices
}

/// Wears an item out of the inventory, swapping with whatever occupied
/// its slot.
pub fn equip_item(state: &mut GameState, inv_index: usize) -> Result<Notice, ActionError> {
    if inv_index >= state.inventory.len() {
        return Err(ActionError::UnknownItem);
    }
    let item = state.inventory.remove(inv_index);
    let name = item.name.clone();
    if let Some(displaced) = state.equipment.set(item) {
        state.inventory.push(displaced);
    }
    Ok(Notice::new(format!("{} equipped!", name), NoticeColor::Info))
}

/// Sells an inventory item for gold.
pub fn sell_item(state: &mut GameState, inv_index: usize) -> Result<Vec<Notice>, ActionError> {
    if inv_index >= state.inventory.len() {
        return Err(ActionError::UnknownItem);
    }
    let item = state.inventory.remove(inv_index);
    Ok(settle_sale(state, item))
}

/// Sells whatever is worn in a slot.
pub fn sell_equipped(state: &mut GameState, slot: EquipSlot) -> Result<Vec<Notice>, ActionError> {
    let item = state.equipment.take(slot).ok_or(ActionError::EmptySlot)?;
    Ok(settle_sale(state, item))
}

fn settle_sale(state: &mut GameState, item: EquippedItem) -> Vec<Notice> {
    let value = item.sell_value();
    state.gold += value;
    state.statistics.total_gold_earned += value;
    let mut notices = vec![Notice::new(
        format!("Sold {} for {} gold", item.name, format_number(value)),
        NoticeColor::Gold,
    )];
    notices.extend(record_challenge_progress(state, ChallengeKind::Gold, value));
    notices
}
