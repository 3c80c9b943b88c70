use serde::{Deserialize, Serialize};

/// The song of the day
///
/// Every field except `image_url` is required; a payload or stored file that
/// lacks one fails to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub entry_number: i64,
    // calendar date as text, eg: 2024-01-01
    pub date: String,
    pub title: String,
    pub artist: String,
    pub track_url: String,
    pub playlist_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Default for Record {
    /// Placeholder used by the `seeded` startup policy
    fn default() -> Self {
        Self {
            entry_number: 0,
            date: "1970-01-01".to_string(),
            title: "No SOTD yet".to_string(),
            artist: String::new(),
            track_url: "https://open.spotify.com".to_string(),
            playlist_url: "https://open.spotify.com".to_string(),
            image_url: None,
        }
    }
}
