//! Build-time store configuration
//!
//! A static single-page app has no process environment, so values are
//! baked in when the bundle is compiled.

use tab_marks_lib::config::StoreConfig;

pub fn store_config() -> StoreConfig {
    let config = StoreConfig::from_values(
        option_env!("TAB_MARKS_DATABASE_URL"),
        option_env!("TAB_MARKS_AUTH_TOKEN"),
        option_env!("TAB_MARKS_NAMESPACE"),
    );
    match config.validate() {
        Ok(()) => {
            rolling_logger::info(&format!("Using store at {}", config.database_url));
            config
        }
        Err(e) => {
            rolling_logger::error(&format!("Ignoring store configuration: {}", e));
            StoreConfig::default()
        }
    }
}
