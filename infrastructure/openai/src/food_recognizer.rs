use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use business::domain::food_item::errors::FoodItemError;
use business::domain::food_item::services::{FoodRecognizerService, RecognizedFood};

use crate::client::{OpenAIClient, responses_output_text};

const SYSTEM_PROMPT: &str = r#"You are a food recognizer for a kitchen inventory app.
List every food item visible in the photo.

Return ONLY a JSON array of objects with these fields:
- "name": short generic food name ("Milk", "Green apple"), no brand, no weight
- "expiration": the expiration text printed on the package exactly as written, or null when none is visible
- "category": one of Fruit, Vegetable, Meat, Seafood, Dairy, Grain, Nut, Snack, Beverage, Condiment, Frozen Food, Canned Food, Spice, Pastry, Legume, Oil, or null

Example output:
[{"name":"Milk","expiration":"2025-10-05","category":"Dairy"},{"name":"Banana","expiration":null,"category":"Fruit"}]"#;

static DATA_URL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:image/[a-z]+;base64,").ok());

static JSON_ARRAY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[[\s\S]*\]").ok());

// Item: Milk
// Expiration: 2025-10-05
static ITEM_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*item\s*:\s*(.+?)\s*$").ok());

static EXPIRATION_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*expiration\s*:\s*(.*?)\s*$").ok());

#[derive(Debug, Deserialize)]
struct RecognizedFoodPayload {
    name: Option<String>,
    #[serde(default)]
    expiration: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

pub struct FoodRecognizerOpenAI {
    client: OpenAIClient,
}

impl FoodRecognizerOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn to_clean_data_url(raw: &str) -> String {
        let stripped = DATA_URL_PREFIX
            .as_ref()
            .map(|re| re.replace(raw, "").to_string())
            .unwrap_or_else(|| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
        format!("data:image/jpeg;base64,{}", clean)
    }

    fn non_blank(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("null"))
    }

    fn parse_json(content: &str) -> Option<Vec<RecognizedFood>> {
        let json_str = JSON_ARRAY.as_ref()?.find(content)?.as_str();
        let payload: Vec<RecognizedFoodPayload> = serde_json::from_str(json_str).ok()?;

        Some(
            payload
                .into_iter()
                .filter_map(|p| {
                    Some(RecognizedFood {
                        name: Self::non_blank(p.name)?,
                        raw_expiration: Self::non_blank(p.expiration),
                        category: Self::non_blank(p.category),
                    })
                })
                .collect(),
        )
    }

    /// Plain-text replies: `Item:` lines, each optionally followed by an
    /// `Expiration:` line.
    fn parse_lines(content: &str) -> Vec<RecognizedFood> {
        let (Some(item_re), Some(expiration_re)) = (ITEM_LINE.as_ref(), EXPIRATION_LINE.as_ref())
        else {
            return vec![];
        };

        let mut foods: Vec<RecognizedFood> = Vec::new();
        for line in content.lines() {
            if let Some(caps) = item_re.captures(line) {
                foods.push(RecognizedFood {
                    name: caps[1].to_string(),
                    raw_expiration: None,
                    category: None,
                });
            } else if let Some(caps) = expiration_re.captures(line)
                && let Some(last) = foods.last_mut()
                && last.raw_expiration.is_none()
            {
                last.raw_expiration = Self::non_blank(Some(caps[1].to_string()));
            }
        }
        foods
    }

    fn parse_response(content: &str) -> Result<Vec<RecognizedFood>, FoodItemError> {
        if let Some(foods) = Self::parse_json(content) {
            return Ok(foods);
        }

        let foods = Self::parse_lines(content);
        if foods.is_empty() {
            return Err(FoodItemError::RecognitionFailed);
        }
        Ok(foods)
    }
}

#[async_trait]
impl FoodRecognizerService for FoodRecognizerOpenAI {
    async fn recognize(&self, image_base64: &str) -> Result<Vec<RecognizedFood>, FoodItemError> {
        let image_url = Self::to_clean_data_url(image_base64);

        let body = json!({
            "model": "gpt-4o",
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "input_image",
                            "image_url": image_url,
                            "detail": "high",
                        },
                        {
                            "type": "input_text",
                            "text": "List the food items in this photo.",
                        },
                    ],
                },
            ],
            "temperature": 0.1,
        });

        let data = self
            .client
            .post_json(self.client.responses_url(), &body)
            .await
            .ok_or(FoodItemError::RecognitionFailed)?;

        let text = responses_output_text(&data).ok_or(FoodItemError::RecognitionFailed)?;

        Self::parse_response(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_json_array_inside_markdown() {
        let content = "```json\n[{\"name\":\"Milk\",\"expiration\":\"2025-10-05\",\"category\":\"Dairy\"},{\"name\":\"Banana\",\"expiration\":null}]\n```";

        let foods = FoodRecognizerOpenAI::parse_response(content).unwrap();

        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].raw_expiration.as_deref(), Some("2025-10-05"));
        assert_eq!(foods[0].category.as_deref(), Some("Dairy"));
        assert_eq!(foods[1].raw_expiration, None);
        assert_eq!(foods[1].category, None);
    }

    #[test]
    fn should_drop_entries_without_a_name() {
        let foods =
            FoodRecognizerOpenAI::parse_response(r#"[{"name":" "},{"name":"Egg"}]"#).unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Egg");
    }

    #[test]
    fn should_fall_back_to_item_and_expiration_lines() {
        let content = "Item: Milk\nExpiration: 2025-10-05\n\nItem: Bread\nItem: Cheese\nExpiration: 3 weeks";

        let foods = FoodRecognizerOpenAI::parse_response(content).unwrap();

        assert_eq!(foods.len(), 3);
        assert_eq!(foods[0].name, "Milk");
        assert_eq!(foods[0].raw_expiration.as_deref(), Some("2025-10-05"));
        assert_eq!(foods[1].raw_expiration, None);
        assert_eq!(foods[2].raw_expiration.as_deref(), Some("3 weeks"));
    }

    #[test]
    fn should_fail_when_nothing_is_recognizable() {
        assert!(matches!(
            FoodRecognizerOpenAI::parse_response("I cannot see any food here."),
            Err(FoodItemError::RecognitionFailed)
        ));
    }

    #[test]
    fn should_normalize_image_to_jpeg_data_url() {
        let url = FoodRecognizerOpenAI::to_clean_data_url("data:image/png;base64,AAA\nBBB");
        assert_eq!(url, "data:image/jpeg;base64,AAABBB");
    }
}
