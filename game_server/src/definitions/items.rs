use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::Definition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemType
{
    Weapon,
    Armor,
    Relic,
    Scroll,
}

// declaration order is the display order, common < rare < ... < mythic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity
{
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemStats
{
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
}

/// Shop item. Characters hold copies of these values, never references into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item
{
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<String>,
    pub rarity: Rarity,
    pub stats: ItemStats,
    pub level_req: u32,
    pub price: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumable: Option<bool>,
}

// id,name,type,weapon_type,rarity,attack,defense,magic,speed,health_bonus,mana_bonus,stamina_bonus,heal,damage,level_req,price,description,consumable
// csv rows are flat, the nested stats block is rebuilt when the catalog is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord
{
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub weapon_type: Option<String>,
    pub rarity: Rarity,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub magic: Option<i32>,
    pub speed: Option<i32>,
    pub health_bonus: Option<i32>,
    pub mana_bonus: Option<i32>,
    pub stamina_bonus: Option<i32>,
    pub heal: Option<i32>,
    pub damage: Option<i32>,
    pub level_req: u32,
    pub price: u32,
    pub description: String,
    pub consumable: Option<bool>,
}

impl Definition for ItemRecord
{
    fn definition_key(&self) -> &str
    {
        &self.id
    }
}

impl From<ItemRecord> for Item
{
    fn from(record: ItemRecord) -> Self
    {
        Item
        {
            id: record.id,
            name: record.name,
            item_type: record.item_type,
            weapon_type: record.weapon_type.filter(|w| !w.is_empty()),
            rarity: record.rarity,
            stats: ItemStats
            {
                attack: record.attack,
                defense: record.defense,
                magic: record.magic,
                speed: record.speed,
                health_bonus: record.health_bonus,
                mana_bonus: record.mana_bonus,
                stamina_bonus: record.stamina_bonus,
                heal: record.heal,
                damage: record.damage,
            },
            level_req: record.level_req,
            price: record.price,
            description: record.description,
            consumable: record.consumable,
        }
    }
}
