use std::sync::Arc;

use dark_realms_server::character::progression_engine::ProgressionEngine;
use dark_realms_server::config::ServerConfig;
use dark_realms_server::definitions::definitions_container::Definitions;
use dark_realms_server::long_term_storage_service::CharacterStorage;
use dark_realms_server::web_service;
use dark_realms_server::web_service::AppContext;

#[derive(Debug, thiserror::Error)]
enum StartupError
{
    #[error("configuration: {0}")]
    Config(#[from] dark_realms_server::config::ConfigError),

    #[error("definitions: {0}")]
    Definitions(#[from] dark_realms_server::definitions::DefinitionsError),

    #[error("storage: {0}")]
    Storage(#[from] dark_realms_server::long_term_storage_service::StorageError),

    #[error("web service: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main()]
async fn main() -> Result<(), StartupError>
{
    cli_log::init_cli_log!();

    if let Err(error) = run().await
    {
        cli_log::error!("server stopped: {}", error);
        eprintln!("server stopped: {}", error);
        return Err(error);
    }
    Ok(())
}

async fn run() -> Result<(), StartupError>
{
    let config = ServerConfig::from_env()?;

    // catalogs are read once, every request shares the same copy
    let definitions = Arc::new(Definitions::load()?);
    cli_log::info!("loaded {} classes and {} items", definitions.character_classes.len(), definitions.items.len());

    let storage = CharacterStorage::connect(&config).await?;
    cli_log::info!("using {} storage, database {}", storage.backend_name(), config.db_name);

    let context = AppContext
    {
        engine: ProgressionEngine::new(definitions),
        storage,
    };

    println!("Game server started correctly on {}", config.bind_address);
    web_service::start_server(&config, context).await?;
    Ok(())
}
