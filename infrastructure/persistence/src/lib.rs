pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod food_item {
    pub mod entity;
    pub mod repository;
}
