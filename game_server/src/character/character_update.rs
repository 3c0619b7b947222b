use std::collections::BTreeSet;

use serde::Deserialize;

use crate::definitions::items::Item;

use super::{character_entity::{Character, Stats}, character_equipment::Equipment};

/// Free-form adjustment of a stored character. Only the fields present (and not null) are written,
/// no progression rule runs on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterUpdate
{
    pub gold : Option<u32>,
    pub xp : Option<u32>,
    pub level : Option<u32>,
    pub health : Option<u32>,
    pub max_health : Option<u32>,
    pub mana : Option<u32>,
    pub max_mana : Option<u32>,
    pub stamina : Option<u32>,
    pub max_stamina : Option<u32>,
    pub stats : Option<Stats>,
    pub stat_points : Option<u32>,
    pub equipment : Option<Equipment>,
    pub inventory : Option<Vec<Item>>,
    pub skills : Option<Vec<String>>,
    pub completed_levels : Option<BTreeSet<u32>>,
    pub kills : Option<u32>,
    pub deaths : Option<u32>,
}

fn patch<T>(target : &mut T, value : Option<T>)
{
    if let Some(value) = value
    {
        *target = value;
    }
}

impl CharacterUpdate
{
    pub fn is_empty(&self) -> bool
    {
        *self == CharacterUpdate::default()
    }

    pub fn apply(self, character : &mut Character)
    {
        patch(&mut character.gold, self.gold);
        patch(&mut character.xp, self.xp);
        patch(&mut character.level, self.level);
        patch(&mut character.health, self.health);
        patch(&mut character.max_health, self.max_health);
        patch(&mut character.mana, self.mana);
        patch(&mut character.max_mana, self.max_mana);
        patch(&mut character.stamina, self.stamina);
        patch(&mut character.max_stamina, self.max_stamina);
        patch(&mut character.stats, self.stats);
        patch(&mut character.stat_points, self.stat_points);
        patch(&mut character.equipment, self.equipment);
        patch(&mut character.inventory, self.inventory);
        patch(&mut character.skills, self.skills);
        patch(&mut character.completed_levels, self.completed_levels);
        patch(&mut character.kills, self.kills);
        patch(&mut character.deaths, self.deaths);
    }
}
