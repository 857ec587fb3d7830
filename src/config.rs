//! Startup Configuration
//!
//! Seed items and log level, read from an optional JSON block in the page:
//! `<script type="application/json" id="shopping-list-config">`.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "shopping-list-config";

/// An item present when the list is created
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl SeedItem {
    fn new(name: &str, checked: bool) -> Self {
        Self { name: name.to_string(), checked }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub items: Vec<SeedItem>,
    pub hide_checked: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items: vec![
                SeedItem::new("apples", false),
                SeedItem::new("oranges", false),
                SeedItem::new("milk", true),
                SeedItem::new("bread", false),
            ],
            hide_checked: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Read config from the page. A missing block means defaults; an
    /// invalid one is reported so the caller can log it and fall back.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_page_block(read_config_element().as_deref())
    }

    fn from_page_block(block: Option<&str>) -> Result<Self, ConfigError> {
        match block {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLevel(self.log_level.clone()))
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
