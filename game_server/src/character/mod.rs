pub mod character_entity;
pub mod character_equipment;
pub mod character_inventory;
pub mod character_update;
pub mod leaderboard;
pub mod progression_engine;
pub mod progression_error;
