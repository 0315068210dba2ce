// src/config/consts.rs

// Net config
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue/page-{}.html";
pub const PAGE_PLACEHOLDER: &str = "{}";
pub const FIRST_PAGE: u32 = 1;
pub const LAST_PAGE: u32 = 50;

// Persisted table
pub const DEFAULT_FILE: &str = "livros.csv";
pub const TITLE_COLUMN: &str = "Livros";
pub const PRICE_COLUMN: &str = "Preços";
pub const TABLE_HEADERS: [&str; 2] = [TITLE_COLUMN, PRICE_COLUMN];

// Local logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Report
pub const HISTOGRAM_BINS: usize = 20;
pub const TOP_N: usize = 10;
