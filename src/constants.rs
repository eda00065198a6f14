/// Public catalog of every character, served as a single JSON array
pub const DEFAULT_CATALOG_URL: &str = "https://akabab.github.io/superhero-api/api/all.json";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("hero_scout/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

// Environment overrides
pub const ENV_CATALOG_URL: &str = "HERO_SCOUT_CATALOG_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "HERO_SCOUT_TIMEOUT_SECONDS";
pub const ENV_USER_AGENT: &str = "HERO_SCOUT_USER_AGENT";
pub const ENV_METRICS_PORT: &str = "HERO_SCOUT_METRICS_PORT";

// Record layout
pub const APPEARANCE_FIELD: &str = "appearance";
pub const GENDER_FIELD: &str = "gender";
pub const HEIGHT_FIELD: &str = "height";
pub const WORK_FIELD: &str = "work";
pub const OCCUPATION_FIELD: &str = "occupation";

/// Index of the metric entry in the `[imperial, metric]` height pair
pub const METRIC_HEIGHT_INDEX: usize = 1;
pub const CENTIMETRE_SUFFIX: &str = " cm";

/// Occupation value the catalog uses for "unemployed"
pub const NO_OCCUPATION: &str = "-";
