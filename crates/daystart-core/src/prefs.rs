//! Typed accessors over the preference store.
//!
//! One key per logical setting. Key names are the persisted wire names;
//! every setter is durable before it returns (see [`PreferenceStore::set`]).

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::PreferenceStore;

pub const KEY_HAS_FILTER: &str = "hasFilter";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_SHOW_DATE: &str = "showDate";
pub const KEY_SHOW_QUOTE: &str = "showQuote";
pub const KEY_QUICK_LINKS: &str = "quickLinks";
pub const KEY_QUICK_LINKS_OPEN: &str = "quickLinksOpen";

const DEFAULT_USER_NAME: &str = "user";

/// One entry in the quick-links panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl QuickLink {
    fn new(id: &str, name: &str, url: &str, favicon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            favicon: Some(favicon.to_string()),
        }
    }
}

/// The links a fresh profile starts with.
pub fn default_quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink::new("1", "GitHub", "https://github.com", "https://github.com/favicon.ico"),
        QuickLink::new("2", "Gmail", "https://gmail.com", "https://gmail.com/favicon.ico"),
        QuickLink::new("3", "YouTube", "https://youtube.com", "https://youtube.com/favicon.ico"),
        QuickLink::new("4", "Twitter", "https://twitter.com", "https://twitter.com/favicon.ico"),
    ]
}

impl PreferenceStore {
    /// Whether the dark overlay filter is applied over the background.
    pub fn has_filter(&self) -> bool {
        self.get(KEY_HAS_FILTER, true)
    }

    pub fn set_has_filter(&self, value: bool) -> Result<(), StoreError> {
        self.set(KEY_HAS_FILTER, &value)
    }

    /// Display name used in the greeting.
    pub fn user_name(&self) -> String {
        self.get(KEY_USER_NAME, DEFAULT_USER_NAME.to_string())
    }

    pub fn set_user_name(&self, name: &str) -> Result<(), StoreError> {
        self.set(KEY_USER_NAME, &name)
    }

    pub fn show_date(&self) -> bool {
        self.get(KEY_SHOW_DATE, true)
    }

    pub fn set_show_date(&self, value: bool) -> Result<(), StoreError> {
        self.set(KEY_SHOW_DATE, &value)
    }

    pub fn show_quote(&self) -> bool {
        self.get(KEY_SHOW_QUOTE, true)
    }

    pub fn set_show_quote(&self, value: bool) -> Result<(), StoreError> {
        self.set(KEY_SHOW_QUOTE, &value)
    }

    /// The ordered quick-link list.
    pub fn quick_links(&self) -> Vec<QuickLink> {
        self.get(KEY_QUICK_LINKS, default_quick_links())
    }

    pub fn set_quick_links(&self, links: &[QuickLink]) -> Result<(), StoreError> {
        self.set(KEY_QUICK_LINKS, &links)
    }

    pub fn quick_links_open(&self) -> bool {
        self.get(KEY_QUICK_LINKS_OPEN, false)
    }

    pub fn set_quick_links_open(&self, value: bool) -> Result<(), StoreError> {
        self.set(KEY_QUICK_LINKS_OPEN, &value)
    }
}
