use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::definitions::items::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Slot
{
    Weapon,
    Armor,
    Relic,
    Scroll,
}

// every slot is always present, empty ones travel as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Equipment
{
    #[serde(default)]
    pub weapon : Option<Item>,
    #[serde(default)]
    pub armor : Option<Item>,
    #[serde(default)]
    pub relic : Option<Item>,
    #[serde(default)]
    pub scroll : Option<Item>,
}

impl Equipment
{
    pub fn get(&self, slot : Slot) -> Option<&Item>
    {
        self.slot_ref(slot).as_ref()
    }

    /// Puts `item` in the slot and hands back whatever was there.
    pub fn replace(&mut self, slot : Slot, item : Item) -> Option<Item>
    {
        self.slot_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot : Slot) -> Option<Item>
    {
        self.slot_mut(slot).take()
    }

    fn slot_ref(&self, slot : Slot) -> &Option<Item>
    {
        match slot
        {
            Slot::Weapon => &self.weapon,
            Slot::Armor => &self.armor,
            Slot::Relic => &self.relic,
            Slot::Scroll => &self.scroll,
        }
    }

    fn slot_mut(&mut self, slot : Slot) -> &mut Option<Item>
    {
        match slot
        {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
            Slot::Relic => &mut self.relic,
            Slot::Scroll => &mut self.scroll,
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_slot_names()
    {
        assert_eq!(Slot::from_str("weapon").unwrap(), Slot::Weapon);
        assert_eq!(Slot::from_str("scroll").unwrap(), Slot::Scroll);
        assert!(Slot::from_str("boots").is_err());
        assert!(Slot::from_str("Weapon").is_err());
        assert_eq!(Slot::Relic.to_string(), "relic");
    }

    #[test]
    fn test_empty_equipment_serializes_every_slot()
    {
        let json = serde_json::to_value(Equipment::default()).unwrap();
        assert_eq!(json, serde_json::json!({"weapon": null, "armor": null, "relic": null, "scroll": null}));
    }

    #[test]
    fn test_default_has_no_items()
    {
        let equipment = Equipment::default();
        assert!(Slot::iter().all(|slot| equipment.get(slot).is_none()));
    }
}
