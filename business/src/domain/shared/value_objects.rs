use serde::{Deserialize, Serialize};

/// Owner of inventory records. Records without one belong to the shared
/// household inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Blank or missing identifiers mean "no owner".
    pub fn from_optional(id: Option<String>) -> Option<Self> {
        id.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_owner_as_shared_inventory() {
        assert_eq!(UserId::from_optional(None), None);
        assert_eq!(UserId::from_optional(Some("   ".to_string())), None);
    }

    #[test]
    fn should_trim_owner_identifier() {
        let owner = UserId::from_optional(Some(" kitchen-42 ".to_string())).unwrap();
        assert_eq!(owner.as_str(), "kitchen-42");
        assert_eq!(owner.to_string(), "kitchen-42");
    }

    #[test]
    fn should_compare_owners_by_value() {
        assert_eq!(UserId::from("household-7"), UserId::new("household-7"));
        assert_ne!(UserId::from("household-7"), UserId::new("household-8"));
    }
}
