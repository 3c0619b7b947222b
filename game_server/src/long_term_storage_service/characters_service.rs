use bson::doc;
use futures_util::stream::StreamExt;
use mongodb::{options::FindOptions, Collection};

use crate::character::{character_entity::Character, leaderboard::{LeaderboardEntry, LEADERBOARD_SIZE}};

use super::{db_character::StoredCharacter, StorageError};

pub const CHARACTERS_COLLECTION : &str = "characters";

pub async fn insert_character(collection : &Collection<StoredCharacter>, character : &Character) -> Result<(), StorageError>
{
    let stored = StoredCharacter::from(character.clone());
    collection.insert_one(stored, None).await?;
    Ok(())
}

pub async fn get_characters(collection : &Collection<StoredCharacter>, limit : i64) -> Result<Vec<Character>, StorageError>
{
    let options = FindOptions::builder().limit(limit).build();
    let mut cursor = collection.find(doc! {}, options).await?;

    let mut characters = Vec::new();
    while let Some(result) = cursor.next().await
    {
        match result
        {
            Ok(stored) => characters.push(stored.into()),
            Err(error_details) =>
            {
                // one broken document should not hide the others
                cli_log::warn!("error reading character from db with {:?}", error_details);
            },
        }
    }

    Ok(characters)
}

pub async fn get_character(collection : &Collection<StoredCharacter>, character_id : &str) -> Result<Option<Character>, StorageError>
{
    let stored = collection
        .find_one(doc! { "id": character_id }, None)
        .await?;

    Ok(stored.map(Character::from))
}

pub async fn save_character(collection : &Collection<StoredCharacter>, character : &Character) -> Result<bool, StorageError>
{
    let stored = StoredCharacter::from(character.clone());
    let result = collection
        .replace_one(doc! { "id": &character.id }, stored, None)
        .await?;

    Ok(result.matched_count > 0)
}

pub async fn delete_character(collection : &Collection<StoredCharacter>, character_id : &str) -> Result<bool, StorageError>
{
    let result = collection
        .delete_one(doc! { "id": character_id }, None)
        .await?;

    Ok(result.deleted_count > 0)
}

pub async fn get_leaderboard(collection : &Collection<StoredCharacter>) -> Result<Vec<LeaderboardEntry>, StorageError>
{
    let options = FindOptions::builder()
        .sort(doc! { "level": -1, "kills": -1 })
        .limit(LEADERBOARD_SIZE as i64)
        .projection(doc! {
            "_id": 0,
            "id": 1,
            "name": 1,
            "class_type": 1,
            "level": 1,
            "kills": 1,
            "completed_levels": 1,
        })
        .build();

    let entries_collection = collection.clone_with_type::<LeaderboardEntry>();
    let mut cursor = entries_collection.find(doc! {}, options).await?;

    let mut entries = Vec::new();
    while let Some(result) = cursor.next().await
    {
        entries.push(result?);
    }

    Ok(entries)
}
