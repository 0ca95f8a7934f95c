use chrono::{DateTime, Days, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::FoodItemError;
use crate::domain::shared::value_objects::UserId;

pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One acquisition of a food item.
///
/// Records are never merged: buying a second carton of milk adds a second
/// `FoodItem` with its own acquisition date.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: Uuid,
    pub owner: Option<UserId>,
    pub name: String,
    pub category: String,
    pub nutrition: Option<String>,
    pub acquired_date: NaiveDate,
    pub shelf_life_days: u32,
    pub created_at: DateTime<Utc>,
}

pub struct NewFoodItemProps {
    pub owner: Option<UserId>,
    pub name: String,
    pub category: Option<String>,
    pub nutrition: Option<String>,
    pub acquired_date: NaiveDate,
    /// Negative values are clamped to zero.
    pub shelf_life_days: i64,
}

impl FoodItem {
    pub fn new(props: NewFoodItemProps) -> Result<Self, FoodItemError> {
        let name = props.name.trim();
        if name.is_empty() {
            return Err(FoodItemError::NameEmpty);
        }

        let category = props
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        let nutrition = props
            .nutrition
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id: Uuid::new_v4(),
            owner: props.owner,
            name: name.to_string(),
            category,
            nutrition,
            acquired_date: props.acquired_date,
            shelf_life_days: clamp_shelf_life(props.shelf_life_days),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        owner: Option<UserId>,
        name: String,
        category: String,
        nutrition: Option<String>,
        acquired_date: NaiveDate,
        shelf_life_days: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            name,
            category,
            nutrition,
            acquired_date,
            shelf_life_days,
            created_at,
        }
    }

    /// Last day the item is still good. Saturates at the calendar maximum.
    pub fn expiration_date(&self) -> NaiveDate {
        self.acquired_date
            .checked_add_days(Days::new(u64::from(self.shelf_life_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Negative once the item has expired.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.expiration_date() - today).num_days()
    }
}

pub fn clamp_shelf_life(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
