use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{character::character_entity::Character, definitions::{character_classes::CharacterClass, items::Item}};

use super::{load_character, store_character, ApiJson, ApiQuery, AppContext, ServiceResult};

#[derive(Deserialize, Serialize, Debug)]
pub struct ShopRequest
{
    #[serde(default = "default_shop_level")]
    pub level: u32,
}

fn default_shop_level() -> u32
{
    1
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ShopBuyRequest
{
    pub character_id: String,
    pub item_id: String,
}

pub async fn handle_classes_request(State(context): State<AppContext>) -> Json<BTreeMap<String, CharacterClass>>
{
    let classes = context.engine.definitions()
        .classes_by_key()
        .into_iter()
        .map(|(key, class)| (key.to_owned(), class.clone()))
        .collect();
    Json(classes)
}

pub async fn handle_items_request(State(context): State<AppContext>) -> Json<Vec<Item>>
{
    Json(context.engine.definitions().items.clone())
}

pub async fn handle_shop_request(
    State(context): State<AppContext>,
    ApiQuery(data): ApiQuery<ShopRequest>) -> Json<Vec<Item>>
{
    let available = context.engine
        .available_items(data.level)
        .into_iter()
        .cloned()
        .collect();
    Json(available)
}

pub async fn handle_buy_item(
    State(context): State<AppContext>,
    ApiJson(data): ApiJson<ShopBuyRequest>) -> ServiceResult<Character>
{
    cli_log::info!("handling request {:?}", data);

    let character = load_character(&context, &data.character_id).await?;
    let updated = context.engine.buy_item(&character, &data.item_id)?;
    store_character(&context, &updated).await?;

    cli_log::info!("{} bought {} gold left {}", updated.id, data.item_id, updated.gold);
    Ok(Json(updated))
}

#[cfg(test)]
mod tests
{
    use axum::http::StatusCode;

    use crate::web_service::tests::test_context;

    use super::*;

    #[tokio::test]
    async fn test_catalog_requests()
    {
        let context = test_context();

        let Json(classes) = handle_classes_request(State(context.clone())).await;
        assert_eq!(classes.len(), 7);
        let json = serde_json::to_value(&classes["knight"]).unwrap();
        assert_eq!(json["str"], 12);
        assert_eq!(json["name"], "Rycerz");
        assert!(json.get("class_key").is_none());

        let Json(items) = handle_items_request(State(context.clone())).await;
        assert_eq!(items.len(), 26);

        let Json(shop) = handle_shop_request(State(context.clone()), ApiQuery(ShopRequest { level: 3 })).await;
        assert!(shop.iter().all(|i| i.level_req <= 5));
        assert!(shop.iter().any(|i| i.id == "w7"));
        assert!(!shop.iter().any(|i| i.id == "w9"));
    }

    #[test]
    fn test_shop_level_defaults_to_one()
    {
        let request : ShopRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.level, 1);
    }

    #[tokio::test]
    async fn test_buy_item()
    {
        let context = test_context();
        let character = context.engine.create_character("Park", "soldier").unwrap();
        context.storage.insert_character(&character).await.unwrap();

        let request = ShopBuyRequest { character_id: character.id.clone(), item_id: "a2".to_owned() };
        let Json(updated) = handle_buy_item(State(context.clone()), ApiJson(request)).await.unwrap();
        assert_eq!(updated.gold, 50);
        assert_eq!(updated.inventory[0].id, "a2");

        let request = ShopBuyRequest { character_id: character.id.clone(), item_id: "a2".to_owned() };
        let error = handle_buy_item(State(context.clone()), ApiJson(request)).await.unwrap_err();
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Not enough gold");

        let request = ShopBuyRequest { character_id: character.id.clone(), item_id: "zz".to_owned() };
        let error = handle_buy_item(State(context.clone()), ApiJson(request)).await.unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND);

        let request = ShopBuyRequest { character_id: "ghost".to_owned(), item_id: "a2".to_owned() };
        let error = handle_buy_item(State(context.clone()), ApiJson(request)).await.unwrap_err();
        assert_eq!(error.to_string(), "Character not found");

        let stored = context.storage.get_character(&character.id).await.unwrap().unwrap();
        assert_eq!(stored.gold, 50);
        assert_eq!(stored.inventory.len(), 1);
    }
}
