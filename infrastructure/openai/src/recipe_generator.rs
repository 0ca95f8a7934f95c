use async_trait::async_trait;
use serde_json::json;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{RecipeConstraints, RecipeSize};
use business::domain::recipe::services::RecipeGeneratorService;

use crate::client::{OpenAIClient, chat_message_content};

const SYSTEM_PROMPT: &str = r#"You are a practical home cooking assistant.
Your goal: help people use up the food they already have before it spoils.

Core principles:
- Use the listed ingredients, the first ones are closest to expiring
- Assume basic pantry staples (salt, pepper, oil, water) are available
- Keep steps short and numbered
- Respect every dietary restriction strictly

Answer in plain text: a title line, an ingredient list, then the steps."#;

pub struct RecipeGeneratorOpenAI {
    client: OpenAIClient,
}

impl RecipeGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn servings(size: RecipeSize) -> &'static str {
        match size {
            RecipeSize::Small => "1-2 servings",
            RecipeSize::Medium => "3-4 servings",
            RecipeSize::Large => "6 or more servings",
        }
    }

    fn build_prompt(ingredient_names: &[String], constraints: &RecipeConstraints) -> String {
        let ingredients = ingredient_names
            .iter()
            .map(|name| format!("- {}", name))
            .collect::<Vec<_>>()
            .join("\n");

        let mut lines = vec![
            "Write one recipe using these ingredients:".to_string(),
            ingredients,
            String::new(),
            format!(
                "Recipe size: {} ({})",
                constraints.size,
                Self::servings(constraints.size)
            ),
        ];
        if let Some(restrictions) = &constraints.dietary_restrictions {
            lines.push(format!("Dietary restrictions: {}", restrictions));
        }
        if let Some(cuisine) = &constraints.cuisine_preference {
            lines.push(format!("Cuisine preference: {}", cuisine));
        }
        lines.join("\n")
    }

    fn parse_response(content: &str) -> Result<String, RecipeError> {
        let text = content.trim();
        let text = text
            .strip_prefix("```markdown")
            .or_else(|| text.strip_prefix("```"))
            .and_then(|t| t.strip_suffix("```"))
            .unwrap_or(text)
            .trim();

        if text.is_empty() {
            return Err(RecipeError::GenerationFailed);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl RecipeGeneratorService for RecipeGeneratorOpenAI {
    async fn generate(
        &self,
        ingredient_names: &[String],
        constraints: &RecipeConstraints,
    ) -> Result<String, RecipeError> {
        if ingredient_names.is_empty() {
            return Err(RecipeError::NoIngredients);
        }

        let body = json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_prompt(ingredient_names, constraints)},
            ],
            "temperature": 0.7,
            "max_tokens": 1200,
        });

        let data = self
            .client
            .post_json(self.client.chat_completions_url(), &body)
            .await
            .ok_or(RecipeError::GenerationFailed)?;

        let content = chat_message_content(&data).ok_or(RecipeError::GenerationFailed)?;

        Self::parse_response(content)
    }
}
