use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::character::{leaderboard::LeaderboardEntry, progression_engine::{DeathOutcome, LevelCompletion, LevelOutcome}};

use super::{load_character, store_character, ApiJson, AppContext, ServiceResult};

#[derive(Deserialize, Serialize, Debug)]
pub struct CompleteLevelRequest
{
    pub character_id: String,
    pub level_id: u32,
    #[serde(default)]
    pub xp_gained: u32,
    #[serde(default)]
    pub gold_gained: u32,
    #[serde(default)]
    pub kills: u32,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PlayerDeathRequest
{
    pub character_id: String,
}

pub async fn handle_complete_level(
    State(context): State<AppContext>,
    ApiJson(data): ApiJson<CompleteLevelRequest>) -> ServiceResult<LevelOutcome>
{
    cli_log::info!("handling request {:?}", data);

    let character = load_character(&context, &data.character_id).await?;
    let completion = LevelCompletion
    {
        level_id: data.level_id,
        xp_gained: data.xp_gained,
        gold_gained: data.gold_gained,
        kills: data.kills,
    };

    let outcome = context.engine.complete_level(&character, &completion);
    store_character(&context, &outcome.character).await?;

    if outcome.leveled_up
    {
        cli_log::info!("{} reached level {}", outcome.character.id, outcome.character.level);
    }
    Ok(Json(outcome))
}

pub async fn handle_player_death(
    State(context): State<AppContext>,
    ApiJson(data): ApiJson<PlayerDeathRequest>) -> ServiceResult<DeathOutcome>
{
    cli_log::info!("handling request {:?}", data);

    let character = load_character(&context, &data.character_id).await?;
    let outcome = context.engine.apply_death(&character);
    store_character(&context, &outcome.character).await?;
    Ok(Json(outcome))
}

pub async fn handle_leaderboard_request(State(context): State<AppContext>) -> ServiceResult<Vec<LeaderboardEntry>>
{
    let entries = context.storage.get_leaderboard().await?;
    Ok(Json(entries))
}
