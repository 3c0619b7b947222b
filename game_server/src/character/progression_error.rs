use super::character_equipment::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind
{
    NotFound,
    InvalidInput,
    PreconditionFailed,
}

/// Why a progression operation refused to run. Nothing is applied when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError
{
    #[error("Character not found")]
    CharacterNotFound,

    #[error("Item not found")]
    ItemNotFound(String),

    #[error("Invalid class type")]
    InvalidClass(String),

    #[error("Character name can't be empty")]
    EmptyName,

    #[error("Invalid stat")]
    InvalidStat(String),

    #[error("Invalid equipment slot")]
    InvalidSlot(String),

    #[error("Invalid inventory index")]
    InvalidIndex(i64),

    #[error("Not enough gold")]
    InsufficientGold { price : u32, gold : u32 },

    #[error("Level requirement not met")]
    LevelTooLow { required : u32, level : u32 },

    #[error("No stat points available")]
    NoStatPoints,

    #[error("Slot is empty")]
    EmptySlot(Slot),
}

impl ProgressionError
{
    pub fn kind(&self) -> ErrorKind
    {
        match self
        {
            ProgressionError::CharacterNotFound
            | ProgressionError::ItemNotFound(_) => ErrorKind::NotFound,

            ProgressionError::InvalidClass(_)
            | ProgressionError::EmptyName
            | ProgressionError::InvalidStat(_)
            | ProgressionError::InvalidSlot(_)
            | ProgressionError::InvalidIndex(_) => ErrorKind::InvalidInput,

            ProgressionError::InsufficientGold { .. }
            | ProgressionError::LevelTooLow { .. }
            | ProgressionError::NoStatPoints
            | ProgressionError::EmptySlot(_) => ErrorKind::PreconditionFailed,
        }
    }
}
