use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, FromRequest, FromRequestParts},
    http::{header::HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{
    character::{character_entity::Character, progression_engine::ProgressionEngine, progression_error::{ErrorKind, ProgressionError}},
    config::{CorsOrigins, ServerConfig},
    long_term_storage_service::{CharacterStorage, StorageError},
};

pub mod characters;
pub mod game;
pub mod shop;

#[derive(Clone)]
pub struct AppContext
{
    pub engine : ProgressionEngine,
    pub storage : CharacterStorage,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError
{
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    InvalidQuery(#[from] QueryRejection),

    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

#[derive(Serialize)]
struct ErrorResponse
{
    detail : String,
}

impl ServiceError
{
    pub fn status(&self) -> StatusCode
    {
        match self
        {
            ServiceError::Progression(error) => match error.kind()
            {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::InvalidInput | ErrorKind::PreconditionFailed => StatusCode::BAD_REQUEST,
            },
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidBody(rejection) => rejection.status(),
            ServiceError::InvalidQuery(rejection) => rejection.status(),
            ServiceError::InvalidPath(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ServiceError
{
    fn into_response(self) -> Response
    {
        let status = self.status();
        let detail = match &self
        {
            ServiceError::Storage(error) =>
            {
                cli_log::error!("storage failure {}", error);
                "Storage unavailable".to_owned()
            },
            ServiceError::InvalidBody(rejection) => rejection.body_text(),
            ServiceError::InvalidQuery(rejection) => rejection.body_text(),
            ServiceError::InvalidPath(rejection) => rejection.body_text(),
            ServiceError::Progression(error) =>
            {
                cli_log::info!("request refused: {:?}", error);
                error.to_string()
            },
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// `Json` that answers malformed bodies with the same `{"detail": ...}` shape as every other error.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ServiceError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ServiceError))]
pub struct ApiPath<T>(pub T);

pub type ServiceResult<T> = Result<Json<T>, ServiceError>;

pub(crate) async fn load_character(context : &AppContext, character_id : &str) -> Result<Character, ServiceError>
{
    context.storage
        .get_character(character_id)
        .await?
        .ok_or(ServiceError::Progression(ProgressionError::CharacterNotFound))
}

// the character may have been deleted between load and save.
pub(crate) async fn store_character(context : &AppContext, character : &Character) -> Result<(), ServiceError>
{
    if context.storage.save_character(character).await?
    {
        Ok(())
    }
    else
    {
        Err(ProgressionError::CharacterNotFound.into())
    }
}

#[derive(Serialize)]
pub struct RootResponse
{
    pub message : &'static str,
}

async fn handle_root() -> Json<RootResponse>
{
    Json(RootResponse { message: "Dark Realms API" })
}

pub fn api_routes() -> Router<AppContext>
{
    Router::new()
        .route("/", get(handle_root))
        .route("/classes", get(shop::handle_classes_request))
        .route("/characters", get(characters::handle_characters_request).post(characters::handle_create_character))
        .route(
            "/characters/:character_id",
            get(characters::handle_character_request)
                .put(characters::handle_update_character)
                .delete(characters::handle_delete_character),
        )
        .route("/characters/:character_id/equip", post(characters::handle_equip_item))
        .route("/characters/:character_id/unequip", post(characters::handle_unequip_item))
        .route("/characters/:character_id/levelup", post(characters::handle_level_up))
        .route("/items", get(shop::handle_items_request))
        .route("/shop", get(shop::handle_shop_request))
        .route("/shop/buy", post(shop::handle_buy_item))
        .route("/game/complete-level", post(game::handle_complete_level))
        .route("/game/player-death", post(game::handle_player_death))
        .route("/leaderboard", get(game::handle_leaderboard_request))
}

pub fn cors_layer(origins : &CorsOrigins) -> CorsLayer
{
    let allow_origin = match origins
    {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(list) =>
        {
            let values : Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin)
                {
                    Ok(value) => Some(value),
                    Err(_) =>
                    {
                        cli_log::warn!("ignoring invalid cors origin {}", origin);
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn build_router(context : AppContext, origins : &CorsOrigins) -> Router
{
    Router::new()
        .nest("/api", api_routes())
        .layer(cors_layer(origins))
        .with_state(context)
}

pub async fn start_server(config : &ServerConfig, context : AppContext) -> std::io::Result<()>
{
    let app = build_router(context, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    cli_log::info!("Server running at http://{}", config.bind_address);
    axum::serve(listener, app.into_make_service()).await
}
