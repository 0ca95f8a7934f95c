pub mod application {
    pub mod catalog {
        pub mod get_all;
        pub mod seed;
    }
    pub mod food_item {
        pub mod add;
        pub mod delete_by_name;
        pub mod estimate_shelf_life;
        pub mod expiring_soon;
        pub mod find_by_name;
        pub mod list;
        pub mod scan_photos;
        pub mod search;
        pub mod shelf_life_estimator;
    }
    pub mod recipe {
        pub mod generate;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod defaults;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod seed;
        }
    }
    pub mod food_item {
        pub mod aging;
        pub mod duration_parser;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod shelf_life;
        pub mod use_cases {
            pub mod add;
            pub mod delete_by_name;
            pub mod estimate_shelf_life;
            pub mod expiring_soon;
            pub mod find_by_name;
            pub mod list;
            pub mod scan_photos;
            pub mod search;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod ranker;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}

#[cfg(test)]
mod test_support;
