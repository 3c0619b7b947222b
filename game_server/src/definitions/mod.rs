use std::collections::HashSet;

use serde::de::DeserializeOwned;

pub mod character_classes;
pub mod definitions_container;
pub mod items;

#[derive(Debug, thiserror::Error)]
pub enum DefinitionsError
{
    #[error("malformed definitions table: {0}")]
    Csv(#[from] csv::Error),

    #[error("definition {0} appears more than once")]
    Duplicated(String),
}

pub trait Definition
{
    fn definition_key(&self) -> &str;
}

// every catalog table is a csv file with a header row, the key column must be unique.
pub fn parse_definitions<T>(data : &str) -> Result<Vec<T>, DefinitionsError>
where
    T : DeserializeOwned + Definition
{
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut seen = HashSet::new();
    let mut definitions = Vec::new();

    for record in reader.deserialize::<T>()
    {
        let definition = record?;
        if !seen.insert(definition.definition_key().to_owned())
        {
            return Err(DefinitionsError::Duplicated(definition.definition_key().to_owned()));
        }
        definitions.push(definition);
    }

    Ok(definitions)
}
