use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::decimal_to_f64;
use crate::dto::menu::{HungerLevel, OrderSuggestion, OrderSuggestionRequest, SuggestedItem};
use crate::error::Result;
use crate::models::MenuItem;
use crate::repository::menu::MenuRepository;

pub async fn generate_suggestion(
    pool: &PgPool,
    req: &OrderSuggestionRequest,
) -> Result<OrderSuggestion> {
    let menu_items = MenuRepository::new(pool)
        .list_by_restaurant(req.restaurant_id)
        .await?;

    Ok(build_suggestion(Uuid::new_v4(), menu_items, req))
}

/// Pick a basket of menu items for the party. Dietary filters degrade
/// gracefully: when they would eliminate the whole menu, the unfiltered menu
/// is used instead of returning an empty basket.
pub fn build_suggestion(
    id: Uuid,
    menu_items: Vec<MenuItem>,
    req: &OrderSuggestionRequest,
) -> OrderSuggestion {
    if menu_items.is_empty() {
        return OrderSuggestion {
            id,
            restaurant_id: req.restaurant_id,
            party_size: req.party_size,
            hunger_level: req.hunger_level,
            meal_time: req.meal_time,
            items: Vec::new(),
            total_price: 0.0,
            reasoning: vec!["No menu available for this restaurant".to_string()],
            estimated_sharability: "Unknown".to_string(),
        };
    }

    let mut filtered: Vec<&MenuItem> = menu_items.iter().collect();
    for restriction in &req.dietary_restrictions {
        filtered.retain(|item| item.dietary_info.iter().any(|tag| tag == restriction));
    }
    if filtered.is_empty() {
        filtered = menu_items.iter().collect();
    }

    let appetizers = category_items(&filtered, "appetizer");
    let entrees = category_items(&filtered, "entree");
    let sides = category_items(&filtered, "side");
    let desserts = category_items(&filtered, "dessert");

    let party_size = req.party_size as usize;
    let mut selected: Vec<&MenuItem> = Vec::new();
    let mut reasoning = Vec::new();

    if party_size == 1 {
        match req.hunger_level {
            HungerLevel::Light => {
                selected.extend(appetizers.first().copied());
                reasoning.push("Perfect light bite for one".to_string());
            }
            HungerLevel::Moderate => {
                selected.extend(entrees.first().copied());
                selected.extend(appetizers.first().copied());
                reasoning.push("Great portions for one person".to_string());
            }
            HungerLevel::VeryHungry => {
                selected.extend(appetizers.first().copied());
                selected.extend(entrees.first().copied());
                selected.extend(desserts.first().copied());
                reasoning.push("Satisfying meal for a big appetite".to_string());
            }
        }
    } else {
        let num_appetizers = appetizers.len().min(party_size / 2 + 1);
        let num_entrees = entrees.len().min(party_size);
        selected.extend_from_slice(&appetizers[..num_appetizers]);
        selected.extend_from_slice(&entrees[..num_entrees]);

        if req.hunger_level == HungerLevel::VeryHungry {
            let num_sides = sides.len().min(party_size / 2);
            selected.extend_from_slice(&sides[..num_sides]);
            selected.extend(desserts.first().copied());
        }

        reasoning.push(format!("Family-style sharing for {party_size} people"));
    }

    let total_price: Decimal = selected
        .iter()
        .map(|item| item.price.unwrap_or(Decimal::ZERO))
        .sum();

    let estimated_sharability = if party_size == 1 {
        "Individual portions".to_string()
    } else {
        format!("Ideal for your group of {party_size}")
    };

    OrderSuggestion {
        id,
        restaurant_id: req.restaurant_id,
        party_size: req.party_size,
        hunger_level: req.hunger_level,
        meal_time: req.meal_time,
        items: selected.into_iter().map(suggested_item).collect(),
        total_price: decimal_to_f64(total_price.round_dp(2)),
        reasoning,
        estimated_sharability,
    }
}

/// Items of one category, most popular first (stable within each group).
fn category_items<'a>(menu: &[&'a MenuItem], category: &str) -> Vec<&'a MenuItem> {
    let mut items: Vec<&MenuItem> = menu
        .iter()
        .copied()
        .filter(|item| item.category.as_deref() == Some(category))
        .collect();
    items.sort_by_key(|item| !item.is_popular);
    items
}

fn suggested_item(item: &MenuItem) -> SuggestedItem {
    SuggestedItem {
        id: item.id,
        name: item.name.clone(),
        description: item.description.clone(),
        price: item.price.map(decimal_to_f64).unwrap_or(0.0),
        category: item.category.clone(),
        quantity: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn item(name: &str, category: &str, price: Option<&str>, popular: bool) -> MenuItem {
        MenuItem {
            id: Uuid::new_v4(),
            restaurant_id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price: price.map(|p| p.parse::<Decimal>().unwrap()),
            category: Some(category.to_string()),
            is_popular: popular,
            dietary_info: Vec::new(),
            image_url: None,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn request(party_size: i32, hunger_level: HungerLevel) -> OrderSuggestionRequest {
        OrderSuggestionRequest {
            restaurant_id: Uuid::new_v4(),
            party_size,
            hunger_level,
            meal_time: Default::default(),
            dietary_restrictions: Vec::new(),
        }
    }

    #[test]
    fn test_empty_menu_yields_empty_suggestion() {
        let req = request(2, HungerLevel::Moderate);
        let suggestion = build_suggestion(Uuid::new_v4(), Vec::new(), &req);

        assert!(suggestion.items.is_empty());
        assert_eq!(suggestion.total_price, 0.0);
        assert_eq!(
            suggestion.reasoning,
            vec!["No menu available for this restaurant"]
        );
        assert_eq!(suggestion.estimated_sharability, "Unknown");
    }

    #[test]
    fn test_solo_light_with_only_entrees_is_empty() {
        let menu = vec![
            item("Steak", "entree", Some("32.00"), true),
            item("Pasta", "entree", Some("19.00"), false),
        ];
        let req = request(1, HungerLevel::Light);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        assert!(suggestion.items.is_empty());
        assert_eq!(suggestion.total_price, 0.0);
        assert_eq!(suggestion.reasoning, vec!["Perfect light bite for one"]);
    }

    #[test]
    fn test_solo_moderate_takes_entree_and_appetizer() {
        let menu = vec![
            item("Bruschetta", "appetizer", Some("8.50"), false),
            item("Carbonara", "entree", Some("18.00"), false),
            item("Tiramisu", "dessert", Some("9.00"), true),
        ];
        let req = request(1, HungerLevel::Moderate);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        let names: Vec<&str> = suggestion.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Carbonara", "Bruschetta"]);
        assert_eq!(suggestion.total_price, 26.5);
        assert_eq!(suggestion.estimated_sharability, "Individual portions");
    }

    #[test]
    fn test_solo_very_hungry_adds_dessert() {
        let menu = vec![
            item("Bruschetta", "appetizer", Some("8.00"), false),
            item("Carbonara", "entree", Some("18.00"), false),
            item("Tiramisu", "dessert", Some("9.00"), false),
        ];
        let req = request(1, HungerLevel::VeryHungry);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        assert_eq!(suggestion.items.len(), 3);
        assert_eq!(
            suggestion.reasoning,
            vec!["Satisfying meal for a big appetite"]
        );
    }

    #[test]
    fn test_popular_items_are_picked_first() {
        let menu = vec![
            item("House Salad", "appetizer", Some("7.00"), false),
            item("Crispy Calamari", "appetizer", Some("12.00"), true),
        ];
        let req = request(1, HungerLevel::Light);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        assert_eq!(suggestion.items[0].name, "Crispy Calamari");
    }

    #[test]
    fn test_group_counts_scale_with_party_size() {
        let menu = vec![
            item("App 1", "appetizer", Some("5.00"), false),
            item("App 2", "appetizer", Some("5.00"), false),
            item("App 3", "appetizer", Some("5.00"), false),
            item("App 4", "appetizer", Some("5.00"), false),
            item("Entree 1", "entree", Some("15.00"), false),
            item("Entree 2", "entree", Some("15.00"), false),
        ];
        let req = request(4, HungerLevel::Moderate);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        // floor(4/2)+1 = 3 appetizers, min(2, 4) = 2 entrees.
        let appetizers = suggestion
            .items
            .iter()
            .filter(|i| i.category.as_deref() == Some("appetizer"))
            .count();
        let entrees = suggestion
            .items
            .iter()
            .filter(|i| i.category.as_deref() == Some("entree"))
            .count();
        assert_eq!(appetizers, 3);
        assert_eq!(entrees, 2);
        assert_eq!(suggestion.estimated_sharability, "Ideal for your group of 4");
        assert_eq!(suggestion.reasoning, vec!["Family-style sharing for 4 people"]);
    }

    #[test]
    fn test_group_very_hungry_adds_sides_and_one_dessert() {
        let menu = vec![
            item("App", "appetizer", Some("5.00"), false),
            item("Entree", "entree", Some("15.00"), false),
            item("Fries", "side", Some("4.00"), false),
            item("Slaw", "side", Some("3.00"), false),
            item("Greens", "side", Some("3.50"), false),
            item("Cake", "dessert", Some("8.00"), false),
            item("Pie", "dessert", Some("7.00"), false),
        ];
        let req = request(4, HungerLevel::VeryHungry);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        let sides = suggestion
            .items
            .iter()
            .filter(|i| i.category.as_deref() == Some("side"))
            .count();
        let desserts = suggestion
            .items
            .iter()
            .filter(|i| i.category.as_deref() == Some("dessert"))
            .count();
        assert_eq!(sides, 2); // floor(4/2)
        assert_eq!(desserts, 1);
    }

    #[test]
    fn test_dietary_filter_selects_tagged_items() {
        let mut veggie = item("Veggie Burger", "entree", Some("14.00"), false);
        veggie.dietary_info = vec!["vegetarian".to_string()];
        let menu = vec![item("Beef Burger", "entree", Some("16.00"), true), veggie];

        let mut req = request(1, HungerLevel::Moderate);
        req.dietary_restrictions = vec!["vegetarian".to_string()];
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        assert_eq!(suggestion.items.len(), 1);
        assert_eq!(suggestion.items[0].name, "Veggie Burger");
    }

    #[test]
    fn test_over_filtering_falls_back_to_full_menu() {
        let menu = vec![
            item("Beef Burger", "entree", Some("16.00"), true),
            item("Wings", "appetizer", Some("11.00"), false),
        ];
        let mut req = request(1, HungerLevel::Moderate);
        req.dietary_restrictions = vec!["vegetarian".to_string()];
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        // No vegetarian items exist, so the filter is discarded entirely.
        assert_eq!(suggestion.items.len(), 2);
    }

    #[test]
    fn test_null_prices_count_as_zero() {
        let menu = vec![
            item("Market Fish", "entree", None, true),
            item("Soup", "appetizer", Some("6.25"), false),
        ];
        let req = request(1, HungerLevel::Moderate);
        let suggestion = build_suggestion(Uuid::new_v4(), menu, &req);

        assert_eq!(suggestion.total_price, 6.25);
    }
}
