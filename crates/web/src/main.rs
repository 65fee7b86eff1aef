use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::group_dinner::handlers::post_suggestions,
        features::group_dinner::handlers::get_friends,
        features::group_dinner::handlers::get_companions,
        features::group_dinner::handlers::get_availability,
        features::users::handlers::get_match,
        features::users::handlers::post_batch_match,
        features::users::handlers::get_taste_profile,
        features::menus::handlers::get_restaurant_menu,
        features::menus::handlers::post_suggest,
    ),
    components(
        schemas(
            storage::dto::group_dinner::GroupDinnerRequest,
            storage::dto::group_dinner::GroupDinnerMatch,
            storage::dto::group_dinner::RestaurantSummary,
            storage::dto::group_dinner::AvailabilityInfo,
            storage::dto::matching::MatchResponse,
            storage::dto::matching::BatchMatchRequest,
            storage::dto::matching::BatchMatchResponse,
            storage::dto::menu::OrderSuggestionRequest,
            storage::dto::menu::OrderSuggestion,
            storage::dto::menu::SuggestedItem,
            storage::dto::menu::MenuItemResponse,
            storage::dto::menu::HungerLevel,
            storage::dto::menu::MealTime,
            storage::dto::taste::TasteProfile,
            storage::dto::taste::CuisineCount,
            storage::dto::user::UserSummary,
        )
    ),
    tags(
        (name = "group-dinner", description = "Group dinner matching endpoints"),
        (name = "users", description = "User matching and taste profile endpoints"),
        (name = "menus", description = "Menu and order suggestion endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Plateful API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::router())
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
