// Default hyperparameters
pub const DEFAULT_LAYER_SIZES: [usize; 3] = [64, 32, 16];
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_EPOCHS: usize = 30;
pub const DEFAULT_BATCH_SIZE: usize = 32;
pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 1;

/// Sentinel category stored at index 0 of every vocabulary
pub const UNKNOWN_CATEGORY: &str = "?";

/// Lower bound on the squared norm used by L2 normalization
pub const L2_EPSILON: f32 = 1e-12;

// Source file names inside the data directory
pub mod files {
    pub const USERS: &str = "userprofile.csv";
    pub const RESTAURANTS: &str = "geoplaces2.csv";
    pub const RATINGS: &str = "rating_final.csv";
    pub const CUISINES: &str = "chefmozcuisine.csv";
}

// Interaction table columns
pub const RATING_USER_COLUMN: &str = "userID";
pub const RATING_ITEM_COLUMN: &str = "placeID";
pub const RATING_COLUMN: &str = "rating";

// Presentation lookup columns
pub const RESTAURANT_NAME_COLUMN: &str = "name";
pub const CUISINE_COLUMN: &str = "Rcuisine";

/// User table columns consumed by the model, id column first
pub const USER_FEATURES: &[&str] = &[
    "userID",
    "smoker",
    "drink_level",
    "dress_preference",
    "ambience",
    "transport",
    "marital_status",
    "hijos",
    "interest",
    "personality",
    "activity",
    "budget",
];

/// Restaurant table columns consumed by the model, id column first
pub const RESTAURANT_FEATURES: &[&str] = &[
    "placeID",
    "alcohol",
    "smoking_area",
    "dress_code",
    "accessibility",
    "price",
    "Rambience",
    "area",
    "other_services",
];

pub const USER_FEATURE_OPTIONS: &[(&str, &[&str])] = &[
    ("smoker", &["?", "false", "true"]),
    ("drink_level", &["?", "abstemious", "social drinker", "casual drinker"]),
    ("dress_preference", &["?", "informal", "formal", "no preference", "elegant"]),
    ("ambience", &["?", "family", "friends", "solitary"]),
    ("transport", &["?", "on foot", "public", "car owner"]),
    ("marital_status", &["?", "single", "married", "widow"]),
    ("hijos", &["?", "independent", "kids", "dependent"]),
    ("interest", &["?", "variety", "technology", "none", "retro", "eco-friendly"]),
    (
        "personality",
        &["?", "thrifty-protector", "hunter-ostentatious", "hard-worker", "conformist"],
    ),
    ("religion", &["?", "none", "Catholic", "Christian", "Mormon", "Jewish"]),
    ("activity", &["?", "student", "professional", "unemployed", "working-class"]),
    ("budget", &["?", "medium", "low", "high"]),
];

pub const RESTAURANT_FEATURE_OPTIONS: &[(&str, &[&str])] = &[
    ("alcohol", &["?", "No_Alcohol_Served", "Wine-Beer", "Full_Bar"]),
    (
        "smoking_area",
        &["?", "none", "only at bar", "permitted", "section", "not permitted"],
    ),
    ("dress_code", &["?", "informal", "casual", "formal"]),
    ("accessibility", &["?", "no_accessibility", "completely", "partially"]),
    ("price", &["?", "medium", "low", "high"]),
    ("Rambience", &["?", "familiar", "quiet"]),
    ("franchise", &["?", "t", "f"]),
    ("area", &["?", "open", "closed"]),
    ("other_services", &["?", "none", "Internet", "variety"]),
];
