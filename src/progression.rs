//! Spending actions: hiring and leveling heroes, buying gold and
//! prestige upgrades, and the auto-buy conveniences built on top.

use crate::achievements::check_achievements;
use crate::bonuses::treasure_chest_chance;
use crate::constants::MAX_BULK_HERO_LEVELS;
use crate::game_state::GameState;
use crate::heroes::{hero_templates, level_cost};
use crate::notice::{ActionError, Notice, NoticeColor};
use crate::upgrades::{
    prestige_level_cost, prestige_upgrade_template, upgrade_template, BonusKind,
};

/// Hires a hero at its base cost, starting it at level 1.
pub fn hire_hero(
    state: &mut GameState,
    index: usize,
    now_ms: i64,
) -> Result<Vec<Notice>, ActionError> {
    let template = hero_templates().get(index).ok_or(ActionError::UnknownHero)?;
    let hero = &state.heroes[index];
    if hero.owned {
        return Err(ActionError::AlreadyHired);
    }
    if state.gold < hero.current_cost {
        return Err(ActionError::NotEnoughGold);
    }

    state.gold -= state.heroes[index].current_cost;
    let hero = &mut state.heroes[index];
    hero.owned = true;
    hero.level = 1;
    hero.current_cost = level_cost(template, 1);

    let mut notices = vec![Notice::new(
        format!("{} {} hired!", template.emoji, template.name),
        NoticeColor::Success,
    )];
    notices.extend(check_achievements(state, now_ms));
    Ok(notices)
}

/// Buys one level for an already-hired hero.
pub fn upgrade_hero(state: &mut GameState, index: usize) -> Result<(), ActionError> {
    let template = hero_templates().get(index).ok_or(ActionError::UnknownHero)?;
    let hero = &state.heroes[index];
    if !hero.owned {
        return Err(ActionError::NotHired);
    }
    if state.gold < hero.current_cost {
        return Err(ActionError::NotEnoughGold);
    }

    state.gold -= state.heroes[index].current_cost;
    let hero = &mut state.heroes[index];
    hero.level += 1;
    hero.current_cost = level_cost(template, hero.level);
    Ok(())
}

/// Buys as many levels as the current gold affords, up to a cap per
/// call. Returns how many levels were bought.
pub fn upgrade_hero_max(state: &mut GameState, index: usize) -> Result<u32, ActionError> {
    let mut bought = 0;
    while bought < MAX_BULK_HERO_LEVELS {
        match upgrade_hero(state, index) {
            Ok(()) => bought += 1,
            Err(ActionError::NotEnoughGold) if bought > 0 => break,
            Err(err) => return Err(err),
        }
    }
    Ok(bought)
}

/// Buys a one-time gold upgrade. Click damage upgrades fold into the
/// permanent base; crit upgrades nudge the cached stats until the next
/// stats tick recomputes them.
pub fn purchase_upgrade(
    state: &mut GameState,
    id: &str,
    now_ms: i64,
) -> Result<Vec<Notice>, ActionError> {
    let template = upgrade_template(id).ok_or(ActionError::UnknownUpgrade)?;
    let entry = state
        .upgrades
        .iter()
        .find(|u| u.id == id)
        .ok_or(ActionError::UnknownUpgrade)?;
    if entry.purchased {
        return Err(ActionError::AlreadyPurchased);
    }
    if state.gold < template.cost {
        return Err(ActionError::NotEnoughGold);
    }

    state.gold -= template.cost;
    let entry = state
        .upgrades
        .iter_mut()
        .find(|u| u.id == id)
        .expect("found above");
    entry.purchased = true;

    match template.kind {
        BonusKind::ClickDamage => state.click_damage += template.value,
        BonusKind::CritChance => state.critical_hit_chance += template.value,
        BonusKind::CritMultiplier => state.critical_hit_multiplier += template.value,
        _ => {}
    }

    let mut notices = vec![Notice::new(
        format!("{} {} purchased!", template.emoji, template.name),
        NoticeColor::Gold,
    )];
    notices.extend(check_achievements(state, now_ms));
    Ok(notices)
}

/// Buys one level of a prestige upgrade with prestige points.
pub fn purchase_prestige_upgrade(state: &mut GameState, id: &str) -> Result<Notice, ActionError> {
    let template = prestige_upgrade_template(id).ok_or(ActionError::UnknownUpgrade)?;
    let level = state
        .prestige_upgrades
        .iter()
        .find(|p| p.id == id)
        .ok_or(ActionError::UnknownUpgrade)?
        .level;
    if level >= template.max_level {
        return Err(ActionError::MaxLevel);
    }
    let cost = prestige_level_cost(template, level);
    if state.prestige_points < cost {
        return Err(ActionError::NotEnoughPrestigePoints);
    }

    state.prestige_points -= cost;
    state
        .prestige_upgrades
        .iter_mut()
        .find(|p| p.id == id)
        .expect("found above")
        .level += 1;
    state.treasure_chest_chance = treasure_chest_chance(state);

    Ok(Notice::new(
        format!(
            "{} {} is now level {}",
            template.emoji,
            template.name,
            level + 1
        ),
        NoticeColor::Prestige,
    ))
}

/// Hires or levels whichever affordable hero action is cheapest.
/// Returns `Ok(None)` when nothing is affordable.
pub fn auto_hire_cheapest(
    state: &mut GameState,
    now_ms: i64,
) -> Result<Option<Vec<Notice>>, ActionError> {
    let cheapest = state
        .heroes
        .iter()
        .enumerate()
        .filter(|(_, hero)| hero.current_cost <= state.gold)
        .min_by(|(_, a), (_, b)| {
            a.current_cost
                .partial_cmp(&b.current_cost)
                .expect("costs are finite")
        })
        .map(|(index, hero)| (index, hero.owned));

    match cheapest {
        Some((index, false)) => hire_hero(state, index, now_ms).map(Some),
        Some((index, true)) => {
            upgrade_hero(state, index)?;
            let template = &hero_templates()[index];
            Ok(Some(vec![Notice::new(
                format!(
                    "{} {} is now level {}",
                    template.emoji, template.name, state.heroes[index].level
                ),
                NoticeColor::Success,
            )]))
        }
        None => Ok(None),
    }
}

/// Buys the cheapest affordable unpurchased gold upgrade, if any.
pub fn auto_buy_cheapest_upgrade(
    state: &mut GameState,
    now_ms: i64,
) -> Result<Option<Vec<Notice>>, ActionError> {
    let cheapest = crate::upgrades::upgrade_templates()
        .iter()
        .zip(&state.upgrades)
        .filter(|(template, owned)| !owned.purchased && template.cost <= state.gold)
        .min_by(|(a, _), (b, _)| a.cost.partial_cmp(&b.cost).expect("costs are finite"))
        .map(|(template, _)| template.id);

    match cheapest {
        Some(id) => purchase_upgrade(state, id, now_ms).map(Some),
        None => Ok(None),
    }
}
