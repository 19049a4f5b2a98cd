pub mod debounce;
pub mod fields;
pub mod form;
pub mod navigator;
pub mod status;
pub mod steps;
pub mod validation;

pub use debounce::{SyncAction, TextSync, TextSyncSet};
pub use fields::{FieldId, is_field_complete, is_valid_url};
pub use form::{
    ExternalTool, FormPatch, FormSnapshot, InitiativeUpdate, LongTextField, Objective,
    ProfileRole, RoadmapPhase, SeekingProfile, SocialNetwork,
};
pub use navigator::Navigator;
pub use status::{StatusCalculator, StepCount, StepStatus};
pub use steps::{SessionMode, StepDefinition, StepNumber};
pub use validation::{FieldError, ValidationReport, validate_form};
