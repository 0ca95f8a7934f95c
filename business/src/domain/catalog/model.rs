/// Reference shelf life for a food name. Names are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub default_shelf_life_days: u32,
}

impl CatalogEntry {
    pub fn new(name: &str, default_shelf_life_days: u32) -> Self {
        Self {
            name: normalize_name(name),
            default_shelf_life_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodCategory {
    pub name: String,
}

impl FoodCategory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

/// Catalog lookups are exact matches on the trimmed, lowercased name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
