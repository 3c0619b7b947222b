use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::character::{character_entity::Character, character_update::CharacterUpdate, progression_error::ProgressionError};

use super::{load_character, store_character, ApiJson, ApiPath, AppContext, ServiceResult};

#[derive(Deserialize, Serialize, Debug)]
pub struct CharacterCreationRequest
{
    pub name: String,
    pub class_type: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct EquipItemRequest
{
    pub inventory_index: i64,
    pub slot: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnequipItemRequest
{
    pub slot: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LevelUpRequest
{
    pub stat: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct DeleteCharacterResponse
{
    pub deleted: bool,
}

pub async fn handle_create_character(
    State(context): State<AppContext>,
    ApiJson(data): ApiJson<CharacterCreationRequest>) -> ServiceResult<Character>
{
    cli_log::info!("handling request {:?}", data);

    let character = context.engine.create_character(&data.name, &data.class_type)?;
    context.storage.insert_character(&character).await?;

    cli_log::info!("created character {} as {}", character.id, character.class_type);
    Ok(Json(character))
}

pub async fn handle_characters_request(State(context): State<AppContext>) -> ServiceResult<Vec<Character>>
{
    let characters = context.storage.get_characters().await?;
    Ok(Json(characters))
}

pub async fn handle_character_request(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>) -> ServiceResult<Character>
{
    let character = load_character(&context, &character_id).await?;
    Ok(Json(character))
}

pub async fn handle_update_character(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>,
    ApiJson(data): ApiJson<CharacterUpdate>) -> ServiceResult<Character>
{
    cli_log::info!("handling update for {} {:?}", character_id, data);

    let mut character = load_character(&context, &character_id).await?;
    if data.is_empty()
    {
        return Ok(Json(character));
    }

    data.apply(&mut character);
    store_character(&context, &character).await?;
    Ok(Json(character))
}

pub async fn handle_delete_character(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>) -> ServiceResult<DeleteCharacterResponse>
{
    if !context.storage.delete_character(&character_id).await?
    {
        return Err(ProgressionError::CharacterNotFound.into());
    }

    cli_log::info!("deleted character {}", character_id);
    Ok(Json(DeleteCharacterResponse { deleted: true }))
}

pub async fn handle_equip_item(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>,
    ApiJson(data): ApiJson<EquipItemRequest>) -> ServiceResult<Character>
{
    cli_log::info!("handling equip for {} {:?}", character_id, data);

    let character = load_character(&context, &character_id).await?;
    let updated = context.engine.equip(&character, data.inventory_index, &data.slot)?;
    store_character(&context, &updated).await?;
    Ok(Json(updated))
}

pub async fn handle_unequip_item(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>,
    ApiJson(data): ApiJson<UnequipItemRequest>) -> ServiceResult<Character>
{
    cli_log::info!("handling unequip for {} {:?}", character_id, data);

    let character = load_character(&context, &character_id).await?;
    let updated = context.engine.unequip(&character, &data.slot)?;
    store_character(&context, &updated).await?;
    Ok(Json(updated))
}

pub async fn handle_level_up(
    State(context): State<AppContext>,
    ApiPath(character_id): ApiPath<String>,
    ApiJson(data): ApiJson<LevelUpRequest>) -> ServiceResult<Character>
{
    cli_log::info!("handling stat point for {} {:?}", character_id, data);

    let character = load_character(&context, &character_id).await?;
    let updated = context.engine.allocate_stat(&character, &data.stat)?;
    store_character(&context, &updated).await?;
    Ok(Json(updated))
}

#[cfg(test)]
mod tests
{
    use axum::http::StatusCode;

    use crate::web_service::{tests::test_context, ServiceError};

    use super::*;

    async fn create(context : &AppContext, class_type : &str) -> Character
    {
        let request = CharacterCreationRequest { name: "Park".to_owned(), class_type: class_type.to_owned() };
        let Json(character) = handle_create_character(State(context.clone()), ApiJson(request)).await.unwrap();
        character
    }

    fn status_of<T>(result : Result<T, ServiceError>) -> StatusCode
    {
        match result
        {
            Ok(_) => StatusCode::OK,
            Err(error) => error.status(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get()
    {
        let context = test_context();
        let created = create(&context, "assassin").await;
        assert_eq!(created.stats.dexterity, 16);

        let Json(loaded) = handle_character_request(State(context.clone()), ApiPath(created.id.clone())).await.unwrap();
        assert_eq!(loaded, created);

        let Json(all) = handle_characters_request(State(context.clone())).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_create_with_unknown_class()
    {
        let context = test_context();
        let request = CharacterCreationRequest { name: "Park".to_owned(), class_type: "bard".to_owned() };
        let result = handle_create_character(State(context.clone()), ApiJson(request)).await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        let Json(all) = handle_characters_request(State(context)).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_missing_character()
    {
        let context = test_context();
        let result = handle_character_request(State(context.clone()), ApiPath("nope".to_owned())).await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        let result = handle_delete_character(State(context.clone()), ApiPath("nope".to_owned())).await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);

        let request = LevelUpRequest { stat: "str".to_owned() };
        let result = handle_level_up(State(context), ApiPath("nope".to_owned()), ApiJson(request)).await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_and_delete()
    {
        let context = test_context();
        let created = create(&context, "knight").await;

        let update : CharacterUpdate = serde_json::from_str(r#"{"stat_points": 2, "gold": 50}"#).unwrap();
        let Json(updated) = handle_update_character(State(context.clone()), ApiPath(created.id.clone()), ApiJson(update)).await.unwrap();
        assert_eq!(updated.stat_points, 2);
        assert_eq!(updated.gold, 50);

        let request = LevelUpRequest { stat: "end".to_owned() };
        let Json(leveled) = handle_level_up(State(context.clone()), ApiPath(created.id.clone()), ApiJson(request)).await.unwrap();
        assert_eq!(leveled.max_health, 125);
        assert_eq!(leveled.stat_points, 1);

        let Json(deleted) = handle_delete_character(State(context.clone()), ApiPath(created.id.clone())).await.unwrap();
        assert_eq!(deleted, DeleteCharacterResponse { deleted: true });

        let result = handle_character_request(State(context), ApiPath(created.id)).await;
        assert_eq!(status_of(result), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_failed_level_up_leaves_store_untouched()
    {
        let context = test_context();
        let created = create(&context, "mage").await;

        let request = LevelUpRequest { stat: "int".to_owned() };
        let result = handle_level_up(State(context.clone()), ApiPath(created.id.clone()), ApiJson(request)).await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        let Json(loaded) = handle_character_request(State(context), ApiPath(created.id.clone())).await.unwrap();
        assert_eq!(loaded, created);
    }

    #[tokio::test]
    async fn test_equip_and_unequip()
    {
        let context = test_context();
        let created = create(&context, "knight").await;

        let mut with_item = context.engine.buy_item(&created, "w1").unwrap();
        with_item = context.engine.buy_item(&with_item, "a1").unwrap();
        context.storage.save_character(&with_item).await.unwrap();

        let request = EquipItemRequest { inventory_index: 0, slot: "weapon".to_owned() };
        let Json(equipped) = handle_equip_item(State(context.clone()), ApiPath(created.id.clone()), ApiJson(request)).await.unwrap();
        assert_eq!(equipped.equipment.weapon.as_ref().map(|i| i.id.as_str()), Some("w1"));
        assert_eq!(equipped.inventory.len(), 1);

        let request = EquipItemRequest { inventory_index: 3, slot: "armor".to_owned() };
        let result = handle_equip_item(State(context.clone()), ApiPath(created.id.clone()), ApiJson(request)).await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

        let request = UnequipItemRequest { slot: "weapon".to_owned() };
        let Json(unequipped) = handle_unequip_item(State(context.clone()), ApiPath(created.id.clone()), ApiJson(request)).await.unwrap();
        assert!(unequipped.equipment.weapon.is_none());
        assert_eq!(unequipped.inventory.last().map(|i| i.id.as_str()), Some("w1"));

        let request = UnequipItemRequest { slot: "weapon".to_owned() };
        let result = handle_unequip_item(State(context), ApiPath(created.id), ApiJson(request)).await;
        assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
    }
}
