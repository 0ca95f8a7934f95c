pub mod client;
pub mod food_recognizer;
pub mod recipe_generator;
pub mod shelf_life_lookup;
