//! Selection and ordering of inventory items for recipes.

use crate::domain::food_item::aging::AgedFoodItem;

pub const DEFAULT_RECIPE_INGREDIENT_LIMIT: usize = 8;
pub const DEFAULT_EXPIRING_THRESHOLD_DAYS: i64 = 3;

/// Soonest-to-expire first. Ties keep their input order.
pub fn rank_for_recipe(mut items: Vec<AgedFoodItem>, limit: usize) -> Vec<AgedFoodItem> {
    items.sort_by_key(|i| i.days_remaining);
    items.truncate(limit);
    items
}

/// Input order kept, only the cap applies.
pub fn take_in_storage_order(mut items: Vec<AgedFoodItem>, limit: usize) -> Vec<AgedFoodItem> {
    items.truncate(limit);
    items
}

/// Items with `0 <= days_remaining <= threshold_days`, soonest first.
pub fn expiring_soon(items: Vec<AgedFoodItem>, threshold_days: i64) -> Vec<AgedFoodItem> {
    let mut soon: Vec<_> = items
        .into_iter()
        .filter(|i| (0..=threshold_days).contains(&i.days_remaining))
        .collect();
    soon.sort_by_key(|i| i.days_remaining);
    soon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_item::model::{FoodItem, NewFoodItemProps};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn aged(name: &str, days_remaining: i64) -> AgedFoodItem {
        let item = FoodItem::new(NewFoodItemProps {
            owner: None,
            name: name.to_string(),
            category: None,
            nutrition: None,
            acquired_date: today() - chrono::Days::new(30),
            shelf_life_days: 30 + days_remaining,
        })
        .unwrap();
        AgedFoodItem::at(item, today())
    }

    fn names(items: &[AgedFoodItem]) -> Vec<&str> {
        items.iter().map(|i| i.item.name.as_str()).collect()
    }

    #[test]
    fn should_rank_soonest_expiring_first() {
        let ranked = rank_for_recipe(vec![aged("A", 5), aged("B", 1), aged("C", 3)], 8);
        assert_eq!(names(&ranked), vec!["B", "C", "A"]);
    }

    #[test]
    fn should_keep_input_order_for_ties() {
        let ranked = rank_for_recipe(vec![aged("X", 2), aged("Y", 2), aged("Z", 1)], 8);
        assert_eq!(names(&ranked), vec!["Z", "X", "Y"]);
    }

    #[test]
    fn should_truncate_ranking_to_limit() {
        let items = (0..12).map(|d| aged(&format!("item{}", d), 12 - d)).collect();
        let ranked = rank_for_recipe(items, DEFAULT_RECIPE_INGREDIENT_LIMIT);
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].days_remaining, 1);
    }

    #[test]
    fn should_keep_storage_order_when_not_prioritizing() {
        let taken = take_in_storage_order(vec![aged("A", 5), aged("B", 1), aged("C", 3)], 2);
        assert_eq!(names(&taken), vec!["A", "B"]);
    }

    #[test]
    fn should_select_only_items_within_threshold() {
        let items = vec![
            aged("gone", -1),
            aged("today", 0),
            aged("three", 3),
            aged("four", 4),
            aged("two", 2),
        ];

        let soon = expiring_soon(items, DEFAULT_EXPIRING_THRESHOLD_DAYS);

        assert_eq!(names(&soon), vec!["today", "two", "three"]);
    }

    proptest! {
        #[test]
        fn expiring_soon_is_exact_window_and_sorted(
            days in proptest::collection::vec(-10i64..20, 0..30),
            threshold in 0i64..10,
        ) {
            let items: Vec<_> = days.iter().map(|d| aged("x", *d)).collect();
            let expected = days.iter().filter(|d| (0..=threshold).contains(*d)).count();

            let soon = expiring_soon(items, threshold);

            prop_assert_eq!(soon.len(), expected);
            prop_assert!(soon.iter().all(|i| i.days_remaining >= 0 && i.days_remaining <= threshold));
            prop_assert!(soon.windows(2).all(|w| w[0].days_remaining <= w[1].days_remaining));
        }

        #[test]
        fn ranking_is_sorted_and_capped(
            days in proptest::collection::vec(-10i64..50, 0..30),
            limit in 0usize..12,
        ) {
            let items: Vec<_> = days.iter().map(|d| aged("x", *d)).collect();

            let ranked = rank_for_recipe(items, limit);

            prop_assert_eq!(ranked.len(), days.len().min(limit));
            prop_assert!(ranked.windows(2).all(|w| w[0].days_remaining <= w[1].days_remaining));
        }
    }
}
