use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

// ── Keys ─────────────────────────────────────────────────────────

/// Social network slots shown on the networks step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SocialNetwork {
    Linkedin,
    Github,
    Twitter,
    Facebook,
    Instagram,
}

impl SocialNetwork {
    pub const ALL: [Self; 5] = [
        Self::Linkedin,
        Self::Github,
        Self::Twitter,
        Self::Facebook,
        Self::Instagram,
    ];

    /// Hosts accepted by field-level validation (subdomains included).
    pub fn allowed_hosts(self) -> &'static [&'static str] {
        match self {
            Self::Linkedin => &["linkedin.com"],
            Self::Github => &["github.com"],
            Self::Twitter => &["twitter.com", "x.com"],
            Self::Facebook => &["facebook.com"],
            Self::Instagram => &["instagram.com"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Twitter => "X (Twitter)",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
        }
    }
}

/// External collaboration tools linked from the networks step.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExternalTool {
    Website,
    Discord,
    Notion,
    Figma,
}

impl ExternalTool {
    pub const ALL: [Self; 4] = [Self::Website, Self::Discord, Self::Notion, Self::Figma];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProfileRole {
    Collaborator,
    Mentor,
    Advisor,
    Investor,
}

// ── Records ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Objective {
    pub description: String,
}

/// A team need: which roles are sought and with which skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeekingProfile {
    pub roles: Vec<ProfileRole>,
    pub skills: Vec<String>,
    pub technical_skills: Vec<String>,
}

impl SeekingProfile {
    pub fn has_role(&self, role: ProfileRole) -> bool {
        self.roles.contains(&role)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeUpdate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub title: String,
    pub description: String,
}

// ── Snapshot ─────────────────────────────────────────────────────

/// Every value the six steps collect.
///
/// Lists default to empty and optional text to `""` so completion checks
/// never have to special-case a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSnapshot {
    // ── Step 1: General ──
    pub title: String,
    pub motto: String,
    pub main_visual: String,
    pub tags: Vec<String>,

    // ── Step 2: Vision ──
    pub description: String,
    pub problem: String,
    pub solution: String,
    pub objectives: Vec<Objective>,

    // ── Step 3: Team ──
    pub seeking_profiles: Vec<SeekingProfile>,
    pub co_founder_emails: Vec<String>,

    // ── Step 4: Networks ──
    pub social_networks: BTreeMap<SocialNetwork, String>,
    pub external_links: BTreeMap<ExternalTool, String>,

    // ── Step 5: Progress ──
    pub updates: Vec<InitiativeUpdate>,
    pub roadmap_phases: Vec<RoadmapPhase>,
}

impl FormSnapshot {
    pub fn long_text(&self, field: LongTextField) -> &str {
        match field {
            LongTextField::Description => &self.description,
            LongTextField::Problem => &self.problem,
            LongTextField::Solution => &self.solution,
        }
    }
}

/// Free-text fields whose edits are debounced before reaching the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LongTextField {
    Description,
    Problem,
    Solution,
}

impl LongTextField {
    pub const ALL: [Self; 3] = [Self::Description, Self::Problem, Self::Solution];
}

// ── Partial updates ──────────────────────────────────────────────

/// A partial update merged into a [`FormSnapshot`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormPatch {
    pub title: Option<String>,
    pub motto: Option<String>,
    pub main_visual: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub objectives: Option<Vec<Objective>>,
    pub seeking_profiles: Option<Vec<SeekingProfile>>,
    pub co_founder_emails: Option<Vec<String>>,
    pub social_networks: Option<BTreeMap<SocialNetwork, String>>,
    pub external_links: Option<BTreeMap<ExternalTool, String>>,
    pub updates: Option<Vec<InitiativeUpdate>>,
    pub roadmap_phases: Option<Vec<RoadmapPhase>>,
}

impl FormPatch {
    pub fn long_text(field: LongTextField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            LongTextField::Description => Self {
                description: value,
                ..Self::default()
            },
            LongTextField::Problem => Self {
                problem: value,
                ..Self::default()
            },
            LongTextField::Solution => Self {
                solution: value,
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, form: &mut FormSnapshot) {
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = self.$field {
                        form.$field = value;
                    }
                )*
            };
        }

        merge!(
            title,
            motto,
            main_visual,
            tags,
            description,
            problem,
            solution,
            objectives,
            seeking_profiles,
            co_founder_emails,
            social_networks,
            external_links,
            updates,
            roadmap_phases,
        );
    }
}
