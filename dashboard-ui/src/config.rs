//! Page Configuration
//!
//! Pages may override the markup contract with an inline JSON block:
//!
//! ```html
//! <script id="dashboard-config" type="application/json">
//!   {"behavior": {"alert_dismiss_delay_ms": 8000}}
//! </script>
//! ```

use assembly_dashboard::config::Config;
use web_sys::Document;

/// Id of the inline config block
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Config from the page, or the defaults when the page has none or it is invalid
pub fn page_config(document: &Document) -> Config {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Config::default();
    };

    match Config::from_json_str(&text) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("Ignoring page config: {}", e).into());
            Config::default()
        }
    }
}
