use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use business::domain::food_item::services::ShelfLifeLookupService;

use crate::client::{OpenAIClient, responses_output_text};

const SYSTEM_PROMPT: &str = r#"You are a food storage reference.
Given a food name, answer with its typical shelf life once bought, stored the usual way for that food.

Rules:
1. Answer with a single short duration and nothing else, for example: "5-7 days", "2 weeks", "6 months".
2. Use days, weeks or months.
3. If the input is not a food or you cannot tell, answer exactly: unknown"#;

/// Longest answer accepted as a duration; anything longer is prose.
const MAX_ANSWER_LEN: usize = 64;
/// Distinct food names kept before the cache is reset.
const MAX_CACHE_ENTRIES: usize = 1024;

pub struct ShelfLifeLookupOpenAI {
    client: OpenAIClient,
    cache: Mutex<HashMap<String, String>>,
}

impl ShelfLifeLookupOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(food_name: &str) -> String {
        food_name.trim().to_lowercase()
    }

    fn parse_response(content: &str) -> Option<String> {
        let answer = content.trim().trim_matches(|c| c == '"' || c == '\'').trim();
        if answer.is_empty()
            || answer.len() > MAX_ANSWER_LEN
            || answer.eq_ignore_ascii_case("unknown")
        {
            return None;
        }
        Some(answer.to_string())
    }
}

#[async_trait]
impl ShelfLifeLookupService for ShelfLifeLookupOpenAI {
    async fn lookup(&self, food_name: &str) -> Option<String> {
        let cache_key = Self::cache_key(food_name);

        if let Ok(cache) = self.cache.lock()
            && let Some(cached) = cache.get(&cache_key)
        {
            return Some(cached.clone());
        }

        let body = json!({
            "model": "gpt-4o-mini",
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!("Food: {}", food_name.trim())},
            ],
            "temperature": 0.1,
        });

        let data = self.client.post_json(self.client.responses_url(), &body).await?;
        let answer = responses_output_text(&data).and_then(Self::parse_response)?;

        // Only answers are cached; failures are retried on the next call.
        if let Ok(mut cache) = self.cache.lock() {
            insert_bounded(&mut cache, cache_key, answer.clone(), MAX_CACHE_ENTRIES);
        }

        Some(answer)
    }
}

/// Inserts into `cache`, clearing it first when a new key would exceed `capacity`.
fn insert_bounded(
    cache: &mut HashMap<String, String>,
    key: String,
    value: String,
    capacity: usize,
) {
    if cache.len() >= capacity && !cache.contains_key(&key) {
        tracing::debug!(entries = cache.len(), "shelf-life lookup cache full, clearing");
        cache.clear();
    }
    cache.insert(key, value);
}
