//! Built-in reference data seeded at startup.

pub const DEFAULT_CATALOG: &[(&str, u32)] = &[
    ("apple", 5),
    ("banana", 3),
    ("pear", 4),
    ("orange", 5),
    ("grape", 7),
    ("mango", 6),
    ("kiwi", 5),
    ("strawberry", 3),
    ("blueberry", 5),
    ("watermelon", 7),
    ("carrot", 7),
    ("lettuce", 4),
    ("spinach", 3),
    ("tomato", 5),
    ("potato", 10),
    ("onion", 15),
    ("garlic", 30),
    ("cabbage", 5),
    ("broccoli", 4),
    ("cucumber", 5),
    ("bell pepper", 5),
    ("mushroom", 4),
    ("zucchini", 4),
    ("chicken", 3),
    ("beef", 5),
    ("pork", 5),
    ("lamb", 4),
    ("duck", 3),
    ("fish", 2),
    ("shrimp", 2),
    ("crab", 2),
    ("salmon", 2),
    ("tuna", 2),
    ("milk", 7),
    ("cheese", 15),
    ("yogurt", 10),
    ("butter", 30),
    ("cream", 7),
    ("egg", 10),
    ("tofu", 5),
    ("soybean", 180),
    ("lentil", 180),
    ("chickpea", 180),
    ("rice", 180),
    ("pasta", 180),
    ("bread", 7),
    ("oats", 180),
    ("quinoa", 180),
    ("olive oil", 180),
    ("vegetable oil", 180),
    ("vinegar", 365),
    ("salt", 365),
    ("sugar", 365),
    ("chocolate", 180),
    ("biscuits", 90),
    ("nuts", 180),
    ("popcorn", 180),
];

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Fruit",
    "Vegetable",
    "Meat",
    "Seafood",
    "Dairy",
    "Grain",
    "Nut",
    "Snack",
    "Beverage",
    "Condiment",
    "Frozen Food",
    "Canned Food",
    "Spice",
    "Pastry",
    "Legume",
    "Oil",
];
