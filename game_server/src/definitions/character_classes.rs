use serde::{Deserialize, Serialize};

use crate::character::character_entity::Stats;

use super::Definition;

// class_key,name,str,dex,end,int,lck,health,mana,stamina,weapon_type,description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterClass 
{
    #[serde(skip_serializing)]
    pub class_key: String,
    pub name: String,
    #[serde(rename = "str")]
    pub strength: u32,
    #[serde(rename = "dex")]
    pub dexterity: u32,
    #[serde(rename = "end")]
    pub endurance: u32,
    #[serde(rename = "int")]
    pub intelligence: u32,
    #[serde(rename = "lck")]
    pub luck: u32,
    pub health: u32,
    pub mana: u32,
    pub stamina: u32,
    pub weapon_type: String,
    pub description: String,
}

impl CharacterClass
{
    pub fn base_stats(&self) -> Stats
    {
        Stats
        {
            strength: self.strength,
            dexterity: self.dexterity,
            endurance: self.endurance,
            intelligence: self.intelligence,
            luck: self.luck,
        }
    }
}

impl Definition for CharacterClass
{
    fn definition_key(&self) -> &str
    {
        &self.class_key
    }
}
