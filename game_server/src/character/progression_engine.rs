use std::{str::FromStr, sync::Arc};

use serde::Serialize;

use crate::definitions::{definitions_container::Definitions, items::Item};

use super::{character_entity::{Character, StatName}, character_equipment::Slot, progression_error::ProgressionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCompletion
{
    pub level_id : u32,
    pub xp_gained : u32,
    pub gold_gained : u32,
    pub kills : u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelOutcome
{
    pub character : Character,
    pub leveled_up : bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeathOutcome
{
    pub character : Character,
    pub gold_lost : u32,
}

/// Character progression rules: creation, experience, stat points, shop, equipment and death.
///
/// Every operation reads a character and returns a new one, the input is never touched.
/// Loading and saving characters is up to the caller.
#[derive(Debug, Clone)]
pub struct ProgressionEngine
{
    definitions : Arc<Definitions>,
}

impl ProgressionEngine
{
    pub fn new(definitions : Arc<Definitions>) -> Self
    {
        ProgressionEngine { definitions }
    }

    pub fn definitions(&self) -> &Definitions
    {
        &self.definitions
    }

    pub fn create_character(&self, name : &str, class_type : &str) -> Result<Character, ProgressionError>
    {
        let class = self.definitions
            .get_class(class_type)
            .ok_or_else(|| ProgressionError::InvalidClass(class_type.to_owned()))?;

        if name.trim().is_empty()
        {
            return Err(ProgressionError::EmptyName);
        }

        let id = uuid::Uuid::new_v4().to_string();
        let created_at = chrono::Utc::now().to_rfc3339();
        Ok(Character::from_class(id, name.to_owned(), class, created_at))
    }

    pub fn complete_level(&self, character : &Character, completion : &LevelCompletion) -> LevelOutcome
    {
        let mut updated = character.clone();

        updated.gold = updated.gold.saturating_add(completion.gold_gained);
        updated.kills = updated.kills.saturating_add(completion.kills);
        updated.completed_levels.insert(completion.level_id);
        let gained_levels = updated.gain_experience(completion.xp_gained);

        // resources come back on every completed level, with or without a level up.
        updated.restore_resources();

        LevelOutcome
        {
            leveled_up: gained_levels > 0,
            character: updated,
        }
    }

    pub fn allocate_stat(&self, character : &Character, stat : &str) -> Result<Character, ProgressionError>
    {
        if character.stat_points == 0
        {
            return Err(ProgressionError::NoStatPoints);
        }

        let stat = StatName::from_str(stat).map_err(|_| ProgressionError::InvalidStat(stat.to_owned()))?;

        let mut updated = character.clone();
        updated.raise_stat(stat);
        Ok(updated)
    }

    pub fn available_items(&self, level : u32) -> Vec<&Item>
    {
        self.definitions.available_items(level)
    }

    pub fn buy_item(&self, character : &Character, item_id : &str) -> Result<Character, ProgressionError>
    {
        let item = self.definitions
            .get_item(item_id)
            .ok_or_else(|| ProgressionError::ItemNotFound(item_id.to_owned()))?;

        if character.gold < item.price
        {
            return Err(ProgressionError::InsufficientGold { price: item.price, gold: character.gold });
        }

        if character.level < item.level_req
        {
            return Err(ProgressionError::LevelTooLow { required: item.level_req, level: character.level });
        }

        let mut updated = character.clone();
        updated.gold -= item.price;
        updated.add_inventory_item(item.clone());
        Ok(updated)
    }

    pub fn equip(&self, character : &Character, inventory_index : i64, slot : &str) -> Result<Character, ProgressionError>
    {
        let index = usize::try_from(inventory_index)
            .ok()
            .filter(|index| *index < character.inventory.len())
            .ok_or(ProgressionError::InvalidIndex(inventory_index))?;

        let slot = parse_slot(slot)?;

        // no check between item type and slot, any item fits any slot.
        let mut updated = character.clone();
        updated.equip_from_inventory(index, slot);
        Ok(updated)
    }

    pub fn unequip(&self, character : &Character, slot : &str) -> Result<Character, ProgressionError>
    {
        let slot = parse_slot(slot)?;

        let mut updated = character.clone();
        if !updated.unequip_to_inventory(slot)
        {
            return Err(ProgressionError::EmptySlot(slot));
        }
        Ok(updated)
    }

    pub fn apply_death(&self, character : &Character) -> DeathOutcome
    {
        let mut updated = character.clone();

        let gold_lost = updated.gold / 10;
        updated.gold -= gold_lost;
        updated.deaths = updated.deaths.saturating_add(1);
        updated.restore_resources();

        DeathOutcome
        {
            character: updated,
            gold_lost,
        }
    }
}

fn parse_slot(slot : &str) -> Result<Slot, ProgressionError>
{
    Slot::from_str(slot).map_err(|_| ProgressionError::InvalidSlot(slot.to_owned()))
}
