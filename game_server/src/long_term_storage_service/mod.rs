use std::sync::Arc;

use mongodb::{options::ClientOptions, Client, Collection};

use crate::{character::{character_entity::Character, leaderboard::LeaderboardEntry}, config::{ServerConfig, StorageBackend}};

use self::{db_character::StoredCharacter, memory_storage::MemoryStorage};

pub mod characters_service;
pub mod db_character;
pub mod memory_storage;

pub const CHARACTERS_PAGE_SIZE : usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum StorageError
{
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Where characters live. Every call reads or writes one whole character document.
#[derive(Clone)]
pub enum CharacterStorage
{
    Mongo(Collection<StoredCharacter>),
    Memory(Arc<MemoryStorage>),
}

impl CharacterStorage
{
    pub async fn connect(config : &ServerConfig) -> Result<Self, StorageError>
    {
        match config.storage_backend
        {
            StorageBackend::Memory => Ok(CharacterStorage::in_memory()),
            StorageBackend::Mongo =>
            {
                let mut options = ClientOptions::parse(&config.mongo_url).await?;
                options.app_name = Some("dark_realms_server".to_owned());
                let db_client = Client::with_options(options)?;
                let collection = db_client
                    .database(&config.db_name)
                    .collection::<StoredCharacter>(characters_service::CHARACTERS_COLLECTION);
                Ok(CharacterStorage::Mongo(collection))
            }
        }
    }

    pub fn in_memory() -> Self
    {
        CharacterStorage::Memory(Arc::new(MemoryStorage::new()))
    }

    pub fn backend_name(&self) -> &'static str
    {
        match self
        {
            CharacterStorage::Mongo(_) => "mongo",
            CharacterStorage::Memory(_) => "memory",
        }
    }

    pub async fn insert_character(&self, character : &Character) -> Result<(), StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::insert_character(collection, character).await,
            CharacterStorage::Memory(storage) =>
            {
                storage.insert_character(character).await;
                Ok(())
            }
        }
    }

    pub async fn get_characters(&self) -> Result<Vec<Character>, StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::get_characters(collection, CHARACTERS_PAGE_SIZE as i64).await,
            CharacterStorage::Memory(storage) => Ok(storage.get_characters(CHARACTERS_PAGE_SIZE).await),
        }
    }

    pub async fn get_character(&self, character_id : &str) -> Result<Option<Character>, StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::get_character(collection, character_id).await,
            CharacterStorage::Memory(storage) => Ok(storage.get_character(character_id).await),
        }
    }

    /// Replaces the stored character, last write wins. Returns false when it no longer exists.
    pub async fn save_character(&self, character : &Character) -> Result<bool, StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::save_character(collection, character).await,
            CharacterStorage::Memory(storage) => Ok(storage.save_character(character).await),
        }
    }

    pub async fn delete_character(&self, character_id : &str) -> Result<bool, StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::delete_character(collection, character_id).await,
            CharacterStorage::Memory(storage) => Ok(storage.delete_character(character_id).await),
        }
    }

    pub async fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StorageError>
    {
        match self
        {
            CharacterStorage::Mongo(collection) => characters_service::get_leaderboard(collection).await,
            CharacterStorage::Memory(storage) => Ok(storage.get_leaderboard().await),
        }
    }
}
