//! Purchases at a settlement shop counter. Refusals (out of range, too
//! poor) are ordinary outcomes with their own cue, not errors.

use glam::Vec2;

use crate::events::{AudioCue, SimEvents};
use crate::player::{PlayerState, MAX_HEALTH};
use crate::streaming::ChunkStream;
use data_runtime::configs::ShopConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseItem {
    DamageUpgrade,
    Medkit,
}

/// Damage upgrades get linearly pricier with each one owned.
#[must_use]
pub fn upgrade_cost(cfg: &ShopConfig, upgrades_owned: u32) -> u32 {
    cfg.damage_upgrade_base_cost * (upgrades_owned + 1)
}

/// Attempt a purchase. Requires a shop counter within interact range and
/// enough currency; both failures emit the denied cue and change nothing.
pub fn try_purchase(
    player: &mut PlayerState,
    item: PurchaseItem,
    stream: &ChunkStream,
    cfg: &ShopConfig,
    events: &mut SimEvents,
) -> bool {
    let here = Vec2::new(player.pos.x, player.pos.z);
    if stream.shop_counter_near(here, cfg.interact_range_m).is_none() {
        events.push_cue(AudioCue::Denied);
        return false;
    }
    let cost = match item {
        PurchaseItem::DamageUpgrade => upgrade_cost(cfg, player.damage_upgrades),
        PurchaseItem::Medkit => cfg.medkit_cost,
    };
    if player.currency < cost {
        events.push_cue(AudioCue::Denied);
        return false;
    }
    player.currency -= cost;
    match item {
        PurchaseItem::DamageUpgrade => {
            player.damage_upgrades += 1;
            player.damage_multiplier += cfg.damage_upgrade_step;
            log::info!(
                "damage upgrade {} bought, multiplier now {:.2}",
                player.damage_upgrades,
                player.damage_multiplier
            );
        }
        PurchaseItem::Medkit => {
            player.health = MAX_HEALTH;
            log::info!("medkit bought, health restored");
        }
    }
    events.push_cue(AudioCue::Buy);
    true
}
