use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    FoodItems,
    ShelfLife,
    Catalog,
    Recipes,
}
