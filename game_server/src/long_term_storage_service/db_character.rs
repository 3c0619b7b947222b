use serde::{Serialize, Deserialize};

use crate::character::character_entity::Character;

// the character id doubles as the document key, so lookups by `id` and `_id` agree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredCharacter {
    #[serde(rename = "_id")]
    pub document_id: String,
    #[serde(flatten)]
    pub character: Character,
}

impl From<Character> for StoredCharacter {
    fn from(character: Character) -> Self {
        StoredCharacter { document_id: character.id.clone(), character }
    }
}

impl From<StoredCharacter> for Character {
    fn from(stored: StoredCharacter) -> Self {
        stored.character
    }
}
