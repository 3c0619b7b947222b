use tokio::sync::Mutex;

use crate::character::{character_entity::Character, leaderboard::{rank_leaderboard, LeaderboardEntry}};

/// Character table kept in process memory, for local runs without a database and for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage
{
    characters : Mutex<Vec<Character>>,
}

impl MemoryStorage
{
    pub fn new() -> Self
    {
        MemoryStorage::default()
    }

    pub async fn insert_character(&self, character : &Character)
    {
        let mut characters = self.characters.lock().await;
        characters.push(character.clone());
    }

    pub async fn get_characters(&self, limit : usize) -> Vec<Character>
    {
        let characters = self.characters.lock().await;
        characters.iter().take(limit).cloned().collect()
    }

    pub async fn get_character(&self, character_id : &str) -> Option<Character>
    {
        let characters = self.characters.lock().await;
        characters.iter().find(|c| c.id == character_id).cloned()
    }

    pub async fn save_character(&self, character : &Character) -> bool
    {
        let mut characters = self.characters.lock().await;
        match characters.iter_mut().find(|c| c.id == character.id)
        {
            Some(stored) =>
            {
                *stored = character.clone();
                true
            },
            None => false
        }
    }

    pub async fn delete_character(&self, character_id : &str) -> bool
    {
        let mut characters = self.characters.lock().await;
        let before = characters.len();
        characters.retain(|c| c.id != character_id);
        characters.len() != before
    }

    pub async fn get_leaderboard(&self) -> Vec<LeaderboardEntry>
    {
        let characters = self.characters.lock().await;
        let entries = characters.iter().map(LeaderboardEntry::from).collect();
        rank_leaderboard(entries)
    }
}
