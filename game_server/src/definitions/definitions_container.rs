use std::collections::BTreeMap;

use super::{character_classes::CharacterClass, items::{Item, ItemRecord}, parse_definitions, DefinitionsError};

const CHARACTER_CLASSES_DATA : &str = include_str!("data/classes.csv");
const SHOP_ITEMS_DATA : &str = include_str!("data/items.csv");

// how many levels above the character the shop listing shows.
pub const SHOP_PREVIEW_LEVELS : u32 = 2;

/// Read-only catalogs, loaded once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Definitions
{
    pub character_classes : Vec<CharacterClass>,
    pub items : Vec<Item>,
}

impl Definitions
{
    pub fn load() -> Result<Self, DefinitionsError>
    {
        Self::from_tables(CHARACTER_CLASSES_DATA, SHOP_ITEMS_DATA)
    }

    pub fn from_tables(classes_data : &str, items_data : &str) -> Result<Self, DefinitionsError>
    {
        let character_classes = parse_definitions::<CharacterClass>(classes_data)?;
        let items = parse_definitions::<ItemRecord>(items_data)?
            .into_iter()
            .map(Item::from)
            .collect();

        Ok(Definitions { character_classes, items })
    }

    pub fn get_class(&self, class_key : &str) -> Option<&CharacterClass>
    {
        self.character_classes.iter().find(|c| c.class_key == class_key)
    }

    pub fn get_item(&self, item_id : &str) -> Option<&Item>
    {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn classes_by_key(&self) -> BTreeMap<&str, &CharacterClass>
    {
        self.character_classes.iter().map(|c| (c.class_key.as_str(), c)).collect()
    }

    /// Items a character of `level` gets to see in the shop. Buying still checks the exact requirement.
    pub fn available_items(&self, level : u32) -> Vec<&Item>
    {
        let window = level.saturating_add(SHOP_PREVIEW_LEVELS);
        self.items.iter().filter(|i| i.level_req <= window).collect()
    }
}
