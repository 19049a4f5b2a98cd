//! Field completion rules.
//!
//! Completion answers "has the user filled this in?" and is deliberately
//! domain-agnostic for URLs. Host allow-lists live in [`super::validation`].

use super::form::{
    ExternalTool, FormSnapshot, InitiativeUpdate, Objective, ProfileRole, RoadmapPhase,
    SeekingProfile, SocialNetwork,
};
use serde::Serialize;
use strum::{Display, EnumString};

/// Every field the wizard collects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldId {
    Title,
    Motto,
    MainVisual,
    Tags,
    Description,
    Problem,
    Solution,
    Objectives,
    SeekingProfiles,
    CoFounderEmails,
    SocialNetworks,
    ExternalLinks,
    Updates,
    RoadmapPhases,
}

impl FieldId {
    pub const ALL: [Self; 14] = [
        Self::Title,
        Self::Motto,
        Self::MainVisual,
        Self::Tags,
        Self::Description,
        Self::Problem,
        Self::Solution,
        Self::Objectives,
        Self::SeekingProfiles,
        Self::CoFounderEmails,
        Self::SocialNetworks,
        Self::ExternalLinks,
        Self::Updates,
        Self::RoadmapPhases,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Motto => "Motto",
            Self::MainVisual => "Main visual",
            Self::Tags => "Tags",
            Self::Description => "Description",
            Self::Problem => "Problem",
            Self::Solution => "Solution",
            Self::Objectives => "Objectives",
            Self::SeekingProfiles => "Profiles sought",
            Self::CoFounderEmails => "Co-founders",
            Self::SocialNetworks => "Social networks",
            Self::ExternalLinks => "External tools",
            Self::Updates => "Updates",
            Self::RoadmapPhases => "Roadmap",
        }
    }
}

/// Decide whether `field` counts as filled in `form`.
pub fn is_field_complete(field: FieldId, form: &FormSnapshot) -> bool {
    match field {
        FieldId::Title => has_text(&form.title),
        FieldId::Motto => has_text(&form.motto),
        FieldId::MainVisual => has_text(&form.main_visual),
        FieldId::Description => has_text(&form.description),
        FieldId::Problem => has_text(&form.problem),
        FieldId::Solution => has_text(&form.solution),
        FieldId::Tags => all_non_empty(&form.tags, |tag| has_text(tag)),
        FieldId::Objectives => all_non_empty(&form.objectives, objective_complete),
        FieldId::SeekingProfiles => seeking_profiles_complete(&form.seeking_profiles),
        FieldId::CoFounderEmails => all_non_empty(&form.co_founder_emails, |email| {
            email.contains('@')
        }),
        FieldId::SocialNetworks => social_networks_complete(form),
        FieldId::ExternalLinks => external_links_complete(form),
        FieldId::Updates => all_non_empty(&form.updates, update_complete),
        FieldId::RoadmapPhases => all_non_empty(&form.roadmap_phases, phase_complete),
    }
}

/// Strict policy: every known network must hold a parseable URL.
pub fn social_networks_complete(form: &FormSnapshot) -> bool {
    SocialNetwork::ALL.iter().all(|network| {
        form.social_networks
            .get(network)
            .is_some_and(|url| is_valid_url(url))
    })
}

/// Loose policy: one parseable tool link is enough.
pub fn external_links_complete(form: &FormSnapshot) -> bool {
    ExternalTool::ALL.iter().any(|tool| {
        form.external_links
            .get(tool)
            .is_some_and(|url| is_valid_url(url))
    })
}

/// Syntactic URL check: the value must parse as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && url::Url::parse(trimmed).is_ok()
}

pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

fn all_non_empty<T>(items: &[T], complete: impl Fn(&T) -> bool) -> bool {
    !items.is_empty() && items.iter().all(complete)
}

fn objective_complete(objective: &Objective) -> bool {
    has_text(&objective.description)
}

pub(crate) fn seeking_profile_complete(profile: &SeekingProfile) -> bool {
    !profile.roles.is_empty()
        && profile.skills.iter().any(|s| has_text(s))
        && profile.technical_skills.iter().any(|s| has_text(s))
}

fn seeking_profiles_complete(profiles: &[SeekingProfile]) -> bool {
    all_non_empty(profiles, seeking_profile_complete)
        && profiles
            .iter()
            .any(|profile| profile.has_role(ProfileRole::Collaborator))
}

fn update_complete(update: &InitiativeUpdate) -> bool {
    has_text(&update.title) && has_text(&update.content)
}

fn phase_complete(phase: &RoadmapPhase) -> bool {
    has_text(&phase.title) && has_text(&phase.description)
}
