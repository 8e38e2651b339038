// src/config/consts.rs

// Source tables (names as they exist in the procurement database)
pub const PROCUREMENT_TABLE: &str = "newtable";
pub const AWARDS_TABLE: &str = "nycproawards4";

// Procurement columns. "Descrption" is the column's real (misspelled) name.
pub const SERVICES_COLUMN: &str = "Services Descrption";
pub const AGENCY_COLUMN: &str = "Agency";
pub const METHOD_COLUMN: &str = "Procurement Method";
pub const QUARTER_COLUMN: &str = "Fiscal Quarter";
pub const JOB_TITLES_COLUMN: &str = "Job Titles";
pub const HEADCOUNT_COLUMN: &str = "Head-count";

// Awards columns
pub const AWARD_TITLE_COLUMN: &str = "Title";

// Local data
pub const CONFIG_FILE: &str = "procurement.toml";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_PROCUREMENT_FILE: &str = "newtable.csv";
pub const DEFAULT_AWARDS_FILE: &str = "nycproawards4.csv";
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_PREFIX: &str = "nyc_procurement";
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d_%H-%M-%S";

// Record linkage
pub const LINK_THRESHOLD: f64 = 0.45;
