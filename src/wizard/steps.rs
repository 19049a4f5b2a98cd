use super::fields::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six ordered wizard steps.
///
/// Construction always clamps into `1..=6`, so a `StepNumber` can never
/// point outside the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct StepNumber(u8);

impl StepNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(6);
    pub const COUNT: usize = 6;

    pub const GENERAL: Self = Self(1);
    pub const VISION: Self = Self(2);
    pub const TEAM: Self = Self(3);
    pub const NETWORKS: Self = Self(4);
    pub const PROGRESS: Self = Self(5);
    pub const REVIEW: Self = Self(6);

    pub const ALL: [Self; 6] = [
        Self::GENERAL,
        Self::VISION,
        Self::TEAM,
        Self::NETWORKS,
        Self::PROGRESS,
        Self::REVIEW,
    ];

    /// Steps whose completion makes the proposal submittable.
    pub const CORE: [Self; 3] = [Self::GENERAL, Self::VISION, Self::TEAM];
    /// Mandatory steps when editing; the team step becomes optional.
    pub const CORE_EDIT: [Self; 2] = [Self::GENERAL, Self::VISION];

    // `clamp` keeps the value within 1..=6, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, 6) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        Self::clamped(i64::from(self.0) + 1)
    }

    pub fn previous(self) -> Self {
        Self::clamped(i64::from(self.0) - 1)
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "General",
            2 => "Vision",
            3 => "Team",
            4 => "Networks",
            5 => "Progress",
            _ => "Review",
        }
    }
}

impl Default for StepNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<i64> for StepNumber {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<StepNumber> for u8 {
    fn from(step: StepNumber) -> Self {
        step.0
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the session creates a new initiative or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Create,
    Edit { initiative_id: i64 },
}

impl SessionMode {
    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    pub fn initiative_id(self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit { initiative_id } => Some(initiative_id),
        }
    }
}

/// Required and optional fields for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub step: StepNumber,
    pub required: &'static [FieldId],
    pub optional: &'static [FieldId],
}

const GENERAL_REQUIRED: &[FieldId] = &[FieldId::Title, FieldId::Motto, FieldId::MainVisual];
const GENERAL_OPTIONAL: &[FieldId] = &[FieldId::Tags];

const VISION_REQUIRED: &[FieldId] = &[
    FieldId::Description,
    FieldId::Problem,
    FieldId::Solution,
    FieldId::Objectives,
];

const TEAM_REQUIRED_CREATE: &[FieldId] = &[FieldId::SeekingProfiles];
const TEAM_OPTIONAL_CREATE: &[FieldId] = &[FieldId::CoFounderEmails];
const TEAM_OPTIONAL_EDIT: &[FieldId] = &[FieldId::SeekingProfiles, FieldId::CoFounderEmails];

const NETWORKS_OPTIONAL: &[FieldId] = &[FieldId::SocialNetworks, FieldId::ExternalLinks];
const PROGRESS_OPTIONAL: &[FieldId] = &[FieldId::Updates, FieldId::RoadmapPhases];

impl StepDefinition {
    pub fn for_step(step: StepNumber, mode: SessionMode) -> Self {
        let (required, optional): (&'static [FieldId], &'static [FieldId]) = match step.get() {
            1 => (GENERAL_REQUIRED, GENERAL_OPTIONAL),
            2 => (VISION_REQUIRED, &[]),
            3 if mode.is_edit() => (&[], TEAM_OPTIONAL_EDIT),
            3 => (TEAM_REQUIRED_CREATE, TEAM_OPTIONAL_CREATE),
            4 => (&[], NETWORKS_OPTIONAL),
            5 => (&[], PROGRESS_OPTIONAL),
            _ => (&[], &[]),
        };
        Self {
            step,
            required,
            optional,
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.required.is_empty()
    }

    pub fn field_count(&self) -> usize {
        self.required.len() + self.optional.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.required.iter().chain(self.optional).copied()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.fields().any(|f| f == field)
    }
}

/// The step a field belongs to. Team fields live on step 3 in both modes.
pub fn step_of(field: FieldId) -> StepNumber {
    match field {
        FieldId::Title | FieldId::Motto | FieldId::MainVisual | FieldId::Tags => {
            StepNumber::GENERAL
        }
        FieldId::Description | FieldId::Problem | FieldId::Solution | FieldId::Objectives => {
            StepNumber::VISION
        }
        FieldId::SeekingProfiles | FieldId::CoFounderEmails => StepNumber::TEAM,
        FieldId::SocialNetworks | FieldId::ExternalLinks => StepNumber::NETWORKS,
        FieldId::Updates | FieldId::RoadmapPhases => StepNumber::PROGRESS,
    }
}
