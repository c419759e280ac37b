//! Fixed values shared by every front-end

/// Recommendation endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str =
    "https://crop-recommendation-system-backend-wt4v.onrender.com/recommend_crop";

/// Storage key holding the JSON-encoded history log
pub const HISTORY_STORAGE_KEY: &str = "cropHistory";

/// Soil pH sent with every request; the form has no input for it
pub const FIXED_PH: u8 = 7;

/// Trigger label while idle
pub const IDLE_LABEL: &str = "Recommend Crop";

/// Trigger label while a request is in flight
pub const BUSY_LABEL: &str = "Analyzing...";

/// Classes added to the trigger while a request is in flight
pub const BUSY_CLASSES: [&str; 2] = ["opacity-50", "cursor-not-allowed"];

/// Prefix shown before the top-ranked crop
pub const LEAF_PREFIX: &str = "🌱 ";
