use crate::definitions::items::Item;

use super::{character_entity::Character, character_equipment::Slot};

impl Character
{
    // items are value copies, the same catalog item can be held many times.
    pub fn add_inventory_item(&mut self, item : Item)
    {
        self.inventory.push(item);
    }

    /// Moves the inventory item at `index` into `slot`. A displaced item goes to the end of the inventory.
    /// Panics when `index` is out of bounds, callers validate it first.
    pub fn equip_from_inventory(&mut self, index : usize, slot : Slot)
    {
        let item = self.inventory.remove(index);
        if let Some(displaced) = self.equipment.replace(slot, item)
        {
            self.inventory.push(displaced);
        }
    }

    /// Moves the item in `slot` to the end of the inventory. Returns false when the slot is empty.
    pub fn unequip_to_inventory(&mut self, slot : Slot) -> bool
    {
        match self.equipment.take(slot)
        {
            Some(item) =>
            {
                self.inventory.push(item);
                true
            },
            None => false
        }
    }
}
