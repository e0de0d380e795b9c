//! Profile data shown on the card.
//!
//! A [`ProfileData`] is fixed configuration: either the built-in profile or
//! a JSON file picked at start-up. It is validated once when loaded and never
//! changes afterwards.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "username": "beeman",
//!   "avatar": "https://avatars.githubusercontent.com/u/36491?v=4",
//!   "description": "Developer and Open Source Evangelist",
//!   "project_name": "PubKey Protocol",
//!   "project_logo": "https://example.com/logo.png",
//!   "socials": [
//!     { "platform": "GitHub", "url": "https://github.com/beeman", "handle": "@beeman", "icon": "github" }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Problems with a profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The file could not be read.
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid profile JSON.
    #[error("Invalid profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is empty.
    #[error("Profile field '{field}' must not be empty")]
    EmptyField { field: String },

    /// Two social entries share a platform name.
    #[error("Duplicate platform '{0}'")]
    DuplicatePlatform(String),

    /// A social link is not an absolute http(s) URL.
    #[error("Invalid URL for {platform}: {url}")]
    InvalidUrl { platform: String, url: String },
}

// ============================================================================
// Data Types
// ============================================================================

/// One social-media link on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialEntry {
    /// Display name, unique within a profile.
    pub platform: String,
    /// Link target.
    pub url: String,
    /// Display text, also the text that gets copied.
    pub handle: String,
    /// Icon identifier resolved by [`crate::ui::icons`].
    pub icon: String,
}

impl SocialEntry {
    #[must_use]
    pub fn new(
        platform: impl Into<String>,
        url: impl Into<String>,
        handle: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
            handle: handle.into(),
            icon: icon.into(),
        }
    }

    /// Identity key used for copy feedback.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.platform
    }
}

/// The whole card: identity, bio and ordered social links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub username: String,
    /// Avatar image reference.
    pub avatar: String,
    pub description: String,
    /// Alt text for the project logo, shown in the footer.
    pub project_name: String,
    /// Project logo image reference.
    pub project_logo: String,
    /// Social links in display order.
    pub socials: Vec<SocialEntry>,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            username: "beeman".to_string(),
            avatar: "https://avatars.githubusercontent.com/u/36491?v=4".to_string(),
            description: "Developer and Open Source Evangelist".to_string(),
            project_name: "PubKey Protocol".to_string(),
            project_logo: "https://raw.githubusercontent.com/pubkeyapp/pubkey-brand/refs/heads/main/logo/logo-white-txt.png".to_string(),
            socials: vec![
                SocialEntry::new("GitHub", "https://github.com/beeman", "@beeman", "github"),
                SocialEntry::new("X", "https://x.com/beeman_nl", "@beeman_nl", "x"),
                SocialEntry::new(
                    "LinkedIn",
                    "https://www.linkedin.com/in/bram-borggreve/",
                    "/in/beeman",
                    "linkedin",
                ),
                SocialEntry::new("Telegram", "https://t.me/beemandev", "@beemandev", "telegram"),
                SocialEntry::new(
                    "Discord",
                    "https://discord.com/users/386584531353862154",
                    "beeman.dev",
                    "discord",
                ),
            ],
        }
    }
}

impl ProfileData {
    /// Reads and validates a profile JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses and validates profile JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the profile is invalid.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks required fields, platform uniqueness and link URLs.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ProfileError> {
        require("username", &self.username)?;
        require("avatar", &self.avatar)?;
        require("description", &self.description)?;
        require("project_name", &self.project_name)?;
        require("project_logo", &self.project_logo)?;

        let mut seen = HashSet::new();
        for (index, entry) in self.socials.iter().enumerate() {
            require(&format!("socials[{index}].platform"), &entry.platform)?;
            require(&format!("socials[{index}].url"), &entry.url)?;
            require(&format!("socials[{index}].handle"), &entry.handle)?;
            require(&format!("socials[{index}].icon"), &entry.icon)?;

            if !seen.insert(entry.platform.as_str()) {
                return Err(ProfileError::DuplicatePlatform(entry.platform.clone()));
            }

            if crate::links::parse_web_url(&entry.url).is_err() {
                return Err(ProfileError::InvalidUrl {
                    platform: entry.platform.clone(),
                    url: entry.url.clone(),
                });
            }
        }

        Ok(())
    }

    /// Looks up an entry by platform name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, platform: &str) -> Option<&SocialEntry> {
        self.socials
            .iter()
            .find(|entry| entry.platform.eq_ignore_ascii_case(platform))
    }

    /// Uppercase initials of the username, for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.username
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-' || c == '.')
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Plain-text rendering used by the `print` subcommand.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n{}\n\n", self.username, self.description);
        let width = self
            .socials
            .iter()
            .map(|entry| entry.platform.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.socials {
            out.push_str(&format!(
                "{:<width$}  {}  {}\n",
                entry.platform, entry.handle, entry.url
            ));
        }
        out.push_str(&format!("\nPowered by {}\n", self.project_name));
        out
    }
}

fn require(field: &str, value: &str) -> Result<(), ProfileError> {
    if value.trim().is_empty() {
        Err(ProfileError::EmptyField {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
