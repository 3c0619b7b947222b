use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::character_entity::Character;

pub const LEADERBOARD_SIZE : usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry
{
    pub id : String,
    pub name : String,
    pub class_type : String,
    pub level : u32,
    pub kills : u32,
    #[serde(default)]
    pub completed_levels : BTreeSet<u32>,
}

impl From<&Character> for LeaderboardEntry
{
    fn from(character: &Character) -> Self
    {
        LeaderboardEntry
        {
            id: character.id.clone(),
            name: character.name.clone(),
            class_type: character.class_type.clone(),
            level: character.level,
            kills: character.kills,
            completed_levels: character.completed_levels.clone(),
        }
    }
}

/// Highest level first, kills break ties. At most [`LEADERBOARD_SIZE`] entries are kept.
pub fn rank_leaderboard(mut entries : Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry>
{
    entries.sort_by(|a, b| b.level.cmp(&a.level).then(b.kills.cmp(&a.kills)));
    entries.truncate(LEADERBOARD_SIZE);
    entries
}
