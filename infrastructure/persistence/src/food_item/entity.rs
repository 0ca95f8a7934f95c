use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::food_item::model::{FoodItem, clamp_shelf_life};
use business::domain::shared::value_objects::UserId;

/// Acquisition dates are stored as calendar text.
pub const ACQUIRED_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, FromRow)]
pub struct FoodItemEntity {
    pub id: Uuid,
    pub owner: Option<String>,
    pub name: String,
    pub category: String,
    pub nutrition: Option<String>,
    pub acquired_date: String,
    pub shelf_life_days: i64,
    pub created_at: DateTime<Utc>,
}

impl FoodItemEntity {
    /// `None` when the stored acquisition date does not parse.
    pub fn into_domain(self) -> Option<FoodItem> {
        let acquired_date =
            NaiveDate::parse_from_str(self.acquired_date.trim(), ACQUIRED_DATE_FORMAT).ok()?;

        Some(FoodItem::from_repository(
            self.id,
            self.owner.map(UserId::new),
            self.name,
            self.category,
            self.nutrition,
            acquired_date,
            clamp_shelf_life(self.shelf_life_days),
            self.created_at,
        ))
    }
}

/// Decodes rows in order, dropping the ones that cannot be read.
pub fn into_domain_items(entities: Vec<FoodItemEntity>) -> Vec<FoodItem> {
    entities
        .into_iter()
        .filter_map(|entity| {
            let id = entity.id;
            let raw_date = entity.acquired_date.clone();
            let item = entity.into_domain();
            if item.is_none() {
                tracing::warn!(
                    %id,
                    acquired_date = %raw_date,
                    "Skipping food item with malformed acquisition date"
                );
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(acquired_date: &str, shelf_life_days: i64) -> FoodItemEntity {
        FoodItemEntity {
            id: Uuid::new_v4(),
            owner: Some("kitchen-42".to_string()),
            name: "Milk".to_string(),
            category: "Dairy".to_string(),
            nutrition: None,
            acquired_date: acquired_date.to_string(),
            shelf_life_days,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_decode_valid_row() {
        let item = entity("2025-01-01", 7).into_domain().unwrap();

        assert_eq!(item.acquired_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(item.shelf_life_days, 7);
        assert_eq!(item.owner.unwrap().as_str(), "kitchen-42");
    }

    #[test]
    fn should_clamp_negative_stored_shelf_life() {
        let item = entity("2025-01-01", -3).into_domain().unwrap();
        assert_eq!(item.shelf_life_days, 0);
    }

    #[test]
    fn should_skip_rows_with_malformed_dates_and_keep_the_rest() {
        let items = into_domain_items(vec![
            entity("2025-01-01", 7),
            entity("01/32/2025", 7),
            entity("", 7),
            entity("2025-02-01", 3),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].shelf_life_days, 3);
    }
}
