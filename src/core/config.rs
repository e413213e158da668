/// Region the `jobs` table lives in.
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Table scanned on every invocation.
pub const JOBS_TABLE: &str = "jobs";

/// Process-wide configuration, built once in `main` and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub region: String,
    pub table_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            table_name: JOBS_TABLE.to_string(),
        }
    }
}
