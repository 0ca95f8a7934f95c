use chrono::{DateTime, Utc};

use super::errors::RecipeError;

/// Portion size asked of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl std::fmt::Display for RecipeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeSize::Small => write!(f, "small"),
            RecipeSize::Medium => write!(f, "medium"),
            RecipeSize::Large => write!(f, "large"),
        }
    }
}

impl std::str::FromStr for RecipeSize {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(RecipeSize::Small),
            "medium" => Ok(RecipeSize::Medium),
            "large" => Ok(RecipeSize::Large),
            _ => Err(RecipeError::InvalidSize),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeConstraints {
    pub size: RecipeSize,
    pub dietary_restrictions: Option<String>,
    pub cuisine_preference: Option<String>,
}

/// Inventory item handed to the generator, with its freshness at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub name: String,
    pub days_remaining: i64,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub text: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub constraints: RecipeConstraints,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_recipe_size_ignoring_case() {
        assert_eq!("Large".parse::<RecipeSize>().unwrap(), RecipeSize::Large);
        assert_eq!(" small ".parse::<RecipeSize>().unwrap(), RecipeSize::Small);
    }

    #[test]
    fn should_reject_unknown_recipe_size() {
        assert!(matches!(
            "huge".parse::<RecipeSize>(),
            Err(RecipeError::InvalidSize)
        ));
    }

    #[test]
    fn should_default_to_medium_size() {
        assert_eq!(RecipeConstraints::default().size, RecipeSize::Medium);
        assert_eq!(RecipeSize::default().to_string(), "medium");
    }
}
