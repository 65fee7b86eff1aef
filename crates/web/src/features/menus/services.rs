use sqlx::PgPool;
use storage::{
    dto::menu::{MenuItemResponse, OrderSuggestion, OrderSuggestionRequest},
    error::Result,
    repository::menu::MenuRepository,
    services::order_suggestion,
};
use uuid::Uuid;

/// Full menu of a restaurant, ordered by category then name.
pub async fn get_restaurant_menu(pool: &PgPool, restaurant_id: Uuid) -> Result<Vec<MenuItemResponse>> {
    let repo = MenuRepository::new(pool);
    let items = repo.list_by_restaurant(restaurant_id).await?;
    Ok(items.into_iter().map(MenuItemResponse::from).collect())
}

/// Suggested basket for the party.
pub async fn generate_suggestion(
    pool: &PgPool,
    req: &OrderSuggestionRequest,
) -> Result<OrderSuggestion> {
    order_suggestion::generate_suggestion(pool, req).await
}
