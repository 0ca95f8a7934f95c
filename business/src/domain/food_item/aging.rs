use chrono::NaiveDate;

use super::model::FoodItem;

/// Freshness of a stored item on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessStatus {
    Fresh { days_remaining: i64 },
    Expired,
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessStatus::Fresh { days_remaining } => {
                write!(f, "good, {} days left", days_remaining)
            }
            FreshnessStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A stored item together with its age as of `today`.
///
/// `days_remaining` is never persisted; it is recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct AgedFoodItem {
    pub item: FoodItem,
    pub days_remaining: i64,
}

impl AgedFoodItem {
    pub fn at(item: FoodItem, today: NaiveDate) -> Self {
        let days_remaining = item.days_remaining(today);
        Self {
            item,
            days_remaining,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }

    pub fn status(&self) -> FreshnessStatus {
        if self.is_expired() {
            FreshnessStatus::Expired
        } else {
            FreshnessStatus::Fresh {
                days_remaining: self.days_remaining,
            }
        }
    }
}

/// Ages every item, keeping storage order.
pub fn age_items(items: Vec<FoodItem>, today: NaiveDate) -> Vec<AgedFoodItem> {
    items
        .into_iter()
        .map(|item| AgedFoodItem::at(item, today))
        .collect()
}

/// Drops expired items. They stay in storage, only the view hides them.
pub fn active_only(items: Vec<AgedFoodItem>) -> Vec<AgedFoodItem> {
    items.into_iter().filter(|i| !i.is_expired()).collect()
}
