use crate::wizard::fields::{has_text, is_valid_url};
use crate::wizard::form::SocialNetwork;
use crate::wizard::validation::is_allowed_social_url;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

/// The submitting user's public profile, owned by the profile service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub biography: String,
    pub avatar_url: String,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub social_links: BTreeMap<SocialNetwork, String>,
}

impl UserProfile {
    /// Whether a GitHub account is linked; required before publishing.
    pub fn has_github_link(&self) -> bool {
        self.social_links
            .get(&SocialNetwork::Github)
            .is_some_and(|url| is_allowed_social_url(SocialNetwork::Github, url))
    }

    pub fn completeness(&self) -> ProfileCompletenessReport {
        let mut missing_fields = Vec::new();
        if !has_text(&self.biography) {
            missing_fields.push("A short biography".to_string());
        }
        if !has_text(&self.avatar_url) {
            missing_fields.push("A profile picture".to_string());
        }
        if !self.roles.iter().any(|r| has_text(r)) {
            missing_fields.push("At least one role".to_string());
        }
        if !self.skills.iter().any(|s| has_text(s)) {
            missing_fields.push("At least one skill".to_string());
        }
        if !self
            .social_links
            .values()
            .any(|url| is_valid_url(url))
        {
            missing_fields.push("At least one social link".to_string());
        }

        ProfileCompletenessReport {
            is_complete: missing_fields.is_empty(),
            missing_fields,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletenessReport {
    pub is_complete: bool,
    /// Human-readable descriptions, in display order.
    pub missing_fields: Vec<String>,
}

pub type ProfileFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Access to the current user's profile.
pub trait ProfileService: Send + Sync {
    fn current_profile(&self) -> ProfileFuture<'_, UserProfile>;

    /// Store a GitHub URL on the profile and return the updated record.
    fn link_github<'a>(&'a self, url: &'a str) -> ProfileFuture<'a, UserProfile>;
}
