use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::definitions::{character_classes::CharacterClass, items::Item};

use super::character_equipment::Equipment;

pub const STARTING_LEVEL : u32 = 1;
pub const STARTING_GOLD : u32 = 200;
pub const XP_PER_LEVEL : u32 = 100;
pub const STAT_POINTS_PER_LEVEL : u32 = 3;

pub const ENDURANCE_HEALTH_BONUS : u32 = 5;
pub const ENDURANCE_STAMINA_BONUS : u32 = 3;
pub const INTELLIGENCE_MANA_BONUS : u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum StatName
{
    #[strum(serialize = "str")]
    Strength,
    #[strum(serialize = "dex")]
    Dexterity,
    #[strum(serialize = "end")]
    Endurance,
    #[strum(serialize = "int")]
    Intelligence,
    #[strum(serialize = "lck")]
    Luck,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stats
{
    #[serde(rename = "str")]
    pub strength : u32,
    #[serde(rename = "dex")]
    pub dexterity : u32,
    #[serde(rename = "end")]
    pub endurance : u32,
    #[serde(rename = "int")]
    pub intelligence : u32,
    #[serde(rename = "lck")]
    pub luck : u32,
}

impl Stats
{
    pub fn get(&self, stat : StatName) -> u32
    {
        match stat
        {
            StatName::Strength => self.strength,
            StatName::Dexterity => self.dexterity,
            StatName::Endurance => self.endurance,
            StatName::Intelligence => self.intelligence,
            StatName::Luck => self.luck,
        }
    }

    pub fn get_mut(&mut self, stat : StatName) -> &mut u32
    {
        match stat
        {
            StatName::Strength => &mut self.strength,
            StatName::Dexterity => &mut self.dexterity,
            StatName::Endurance => &mut self.endurance,
            StatName::Intelligence => &mut self.intelligence,
            StatName::Luck => &mut self.luck,
        }
    }
}

/// A player character as it is sent to clients and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character
{
    pub id : String,
    pub name : String,
    pub class_type : String,

    pub level : u32,
    pub xp : u32,
    pub xp_to_next : u32,

    pub stats : Stats,
    pub stat_points : u32,

    pub health : u32,
    pub max_health : u32,
    pub mana : u32,
    pub max_mana : u32,
    pub stamina : u32,
    pub max_stamina : u32,

    pub gold : u32,

    pub equipment : Equipment,
    pub inventory : Vec<Item>,
    #[serde(default)]
    pub skills : Vec<String>,

    #[serde(default)]
    pub completed_levels : BTreeSet<u32>,
    pub kills : u32,
    pub deaths : u32,

    #[serde(default)]
    pub created_at : String,
}

impl Character
{
    pub fn from_class(id : String, name : String, class : &CharacterClass, created_at : String) -> Self
    {
        Character
        {
            id,
            name,
            class_type : class.class_key.clone(),
            level : STARTING_LEVEL,
            xp : 0,
            xp_to_next : STARTING_LEVEL * XP_PER_LEVEL,
            stats : class.base_stats(),
            stat_points : 0,
            health : class.health,
            max_health : class.health,
            mana : class.mana,
            max_mana : class.mana,
            stamina : class.stamina,
            max_stamina : class.stamina,
            gold : STARTING_GOLD,
            equipment : Equipment::default(),
            inventory : Vec::new(),
            skills : Vec::new(),
            completed_levels : BTreeSet::new(),
            kills : 0,
            deaths : 0,
            created_at,
        }
    }

    pub fn restore_resources(&mut self)
    {
        self.health = self.max_health;
        self.mana = self.max_mana;
        self.stamina = self.max_stamina;
    }

    /// Adds experience and runs the level-up loop, every crossed threshold uses the new level's threshold.
    /// Returns how many levels were gained.
    pub fn gain_experience(&mut self, xp : u32) -> u32
    {
        if self.xp_to_next == 0
        {
            self.xp_to_next = self.level.max(STARTING_LEVEL).saturating_mul(XP_PER_LEVEL);
        }

        self.xp = self.xp.saturating_add(xp);
        let mut gained = 0;

        while self.xp >= self.xp_to_next
        {
            self.xp -= self.xp_to_next;
            self.level = self.level.saturating_add(1);
            self.stat_points = self.stat_points.saturating_add(STAT_POINTS_PER_LEVEL);
            self.xp_to_next = self.level.saturating_mul(XP_PER_LEVEL);
            gained += 1;
        }

        gained
    }

    pub fn raise_stat(&mut self, stat : StatName)
    {
        let value = self.stats.get_mut(stat);
        *value = value.saturating_add(1);
        self.stat_points -= 1;

        match stat
        {
            StatName::Endurance =>
            {
                self.max_health = self.max_health.saturating_add(ENDURANCE_HEALTH_BONUS);
                self.health = self.health.saturating_add(ENDURANCE_HEALTH_BONUS).min(self.max_health);
                self.max_stamina = self.max_stamina.saturating_add(ENDURANCE_STAMINA_BONUS);
            },
            StatName::Intelligence =>
            {
                self.max_mana = self.max_mana.saturating_add(INTELLIGENCE_MANA_BONUS);
            },
            _ => {}
        }
    }
}

#[cfg(test)]
pub(crate) mod tests
{
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    pub(crate) fn test_character() -> Character
    {
        let class = CharacterClass
        {
            class_key: "knight".to_owned(),
            name: "Rycerz".to_owned(),
            strength: 12,
            dexterity: 8,
            endurance: 14,
            intelligence: 4,
            luck: 7,
            health: 120,
            mana: 30,
            stamina: 100,
            weapon_type: "sword".to_owned(),
            description: String::new(),
        };
        Character::from_class("c1".to_owned(), "Park".to_owned(), &class, String::new())
    }

    #[test]
    fn test_stat_names()
    {
        assert_eq!(StatName::from_str("str").unwrap(), StatName::Strength);
        assert_eq!(StatName::from_str("lck").unwrap(), StatName::Luck);
        assert!(StatName::from_str("strength").is_err());
        assert_eq!(StatName::Endurance.to_string(), "end");
        assert_eq!(StatName::iter().count(), 5);
    }

    #[test]
    fn test_stats_use_short_names()
    {
        let character = test_character();
        let json = serde_json::to_value(&character.stats).unwrap();
        assert_eq!(json, serde_json::json!({"str": 12, "dex": 8, "end": 14, "int": 4, "lck": 7}));
    }

    #[test]
    fn test_gain_experience_below_threshold()
    {
        let mut character = test_character();
        let gained = character.gain_experience(99);
        assert_eq!(gained, 0);
        assert_eq!(character.level, 1);
        assert_eq!(character.xp, 99);
        assert_eq!(character.xp_to_next, 100);
    }

    #[test]
    fn test_gain_experience_exact_threshold()
    {
        let mut character = test_character();
        let gained = character.gain_experience(100);
        assert_eq!(gained, 1);
        assert_eq!(character.level, 2);
        assert_eq!(character.xp, 0);
        assert_eq!(character.xp_to_next, 200);
        assert_eq!(character.stat_points, 3);
    }

    #[test]
    fn test_gain_experience_uses_each_new_threshold()
    {
        let mut character = test_character();
        // 100 + 200 + 300 = 600 to reach level 4
        let gained = character.gain_experience(650);
        assert_eq!(gained, 3);
        assert_eq!(character.level, 4);
        assert_eq!(character.xp, 50);
        assert_eq!(character.xp_to_next, 400);
        assert_eq!(character.stat_points, 9);
    }

    #[test]
    fn test_gain_experience_terminates_on_huge_amounts()
    {
        let mut character = test_character();
        character.xp = u32::MAX - 10;
        character.gain_experience(u32::MAX);
        assert!(character.xp < character.xp_to_next);
    }

    #[test]
    fn test_gain_experience_repairs_zero_threshold()
    {
        let mut character = test_character();
        character.level = 3;
        character.xp_to_next = 0;
        character.gain_experience(10);
        assert_eq!(character.xp_to_next, 300);
        assert_eq!(character.level, 3);
    }

    #[test]
    fn test_raise_endurance_caps_health()
    {
        let mut character = test_character();
        character.stat_points = 1;
        character.raise_stat(StatName::Endurance);
        assert_eq!(character.stats.endurance, 15);
        assert_eq!(character.max_health, 125);
        assert_eq!(character.health, 125);
        assert_eq!(character.max_stamina, 103);
        assert_eq!(character.stamina, 100);
        assert_eq!(character.stat_points, 0);
    }

    #[test]
    fn test_raise_intelligence_keeps_current_mana()
    {
        let mut character = test_character();
        character.stat_points = 1;
        character.mana = 10;
        character.raise_stat(StatName::Intelligence);
        assert_eq!(character.max_mana, 35);
        assert_eq!(character.mana, 10);
    }

    #[test]
    fn test_raise_luck_has_no_side_effect()
    {
        let mut character = test_character();
        character.stat_points = 2;
        let before = character.clone();
        character.raise_stat(StatName::Luck);
        assert_eq!(character.stats.luck, before.stats.luck + 1);
        assert_eq!(character.max_health, before.max_health);
        assert_eq!(character.max_mana, before.max_mana);
        assert_eq!(character.max_stamina, before.max_stamina);
    }
}
