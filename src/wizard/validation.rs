//! Field-level validators run before submission.
//!
//! Unlike completion, validation also checks formats: lengths, URL hosts for
//! social profiles and email shape.

use super::fields::{FieldId, has_text, is_field_complete, is_valid_url, seeking_profile_complete};
use super::form::{FormSnapshot, SocialNetwork};
use super::steps::{SessionMode, StepDefinition, StepNumber, step_of};
use serde::Serialize;

pub const TITLE_MAX_CHARS: usize = 80;
pub const MOTTO_MAX_CHARS: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

const OPTIONAL_CONTENT_STEPS: [StepNumber; 3] =
    [StepNumber::TEAM, StepNumber::NETWORKS, StepNumber::PROGRESS];

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for(&self, field: FieldId) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn errors_for_step(&self, step: StepNumber) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| step_of(e.field) == step)
    }

    /// The step the user should be sent to, if any.
    ///
    /// Steps failing on a required field win, in order. Next come the
    /// optional-content steps 3, 4 and 5 carrying any error. An error left
    /// only on an optional field of steps 1, 2 or 6 still blocks, and
    /// points at the first such step.
    pub fn first_failing_step(&self, mode: SessionMode) -> Option<StepNumber> {
        let required_failure = StepNumber::CORE.into_iter().find(|step| {
            let definition = StepDefinition::for_step(*step, mode);
            self.errors
                .iter()
                .any(|e| definition.required.contains(&e.field))
        });

        required_failure
            .or_else(|| self.first_step_with_errors(OPTIONAL_CONTENT_STEPS))
            .or_else(|| self.first_step_with_errors(StepNumber::ALL))
    }

    fn first_step_with_errors<const N: usize>(&self, steps: [StepNumber; N]) -> Option<StepNumber> {
        steps
            .into_iter()
            .find(|step| self.errors_for_step(*step).next().is_some())
    }

    /// User-facing explanation for a redirect to `step`.
    pub fn describe_step(&self, step: StepNumber) -> String {
        match self.errors_for_step(step).next() {
            Some(error) => format!(
                "Step {step} ({}) needs attention: {}",
                step.label(),
                error.message
            ),
            None => format!("Step {step} ({}) needs attention", step.label()),
        }
    }
}

/// Run every field validator against `form`.
pub fn validate_form(form: &FormSnapshot, mode: SessionMode) -> ValidationReport {
    let mut errors = Vec::new();

    for step in StepNumber::ALL {
        for field in StepDefinition::for_step(step, mode).required {
            if !is_field_complete(*field, form) {
                errors.push(FieldError::new(
                    *field,
                    format!("{} is required", field.label()),
                ));
            }
        }
    }

    check_lengths(form, &mut errors);
    check_urls(form, &mut errors);
    check_lists(form, &mut errors);

    // Keep the report in step order so the first error matches the first step.
    errors.sort_by_key(|e| step_of(e.field));
    ValidationReport { errors }
}

fn check_lengths(form: &FormSnapshot, errors: &mut Vec<FieldError>) {
    if form.title.trim().chars().count() > TITLE_MAX_CHARS {
        errors.push(FieldError::new(
            FieldId::Title,
            format!("Title must be at most {TITLE_MAX_CHARS} characters"),
        ));
    }
    if form.motto.trim().chars().count() > MOTTO_MAX_CHARS {
        errors.push(FieldError::new(
            FieldId::Motto,
            format!("Motto must be at most {MOTTO_MAX_CHARS} characters"),
        ));
    }
}

fn check_urls(form: &FormSnapshot, errors: &mut Vec<FieldError>) {
    if has_text(&form.main_visual) && !is_valid_url(&form.main_visual) {
        errors.push(FieldError::new(
            FieldId::MainVisual,
            "Main visual must be a valid URL",
        ));
    }

    for (network, value) in &form.social_networks {
        if !has_text(value) {
            continue;
        }
        if !is_allowed_social_url(*network, value) {
            errors.push(FieldError::new(
                FieldId::SocialNetworks,
                format!("{} link must point to {}", network.label(), network.allowed_hosts()[0]),
            ));
        }
    }

    for (tool, value) in &form.external_links {
        if has_text(value) && !is_valid_url(value) {
            errors.push(FieldError::new(
                FieldId::ExternalLinks,
                format!("{tool} link must be a valid URL"),
            ));
        }
    }
}

fn check_lists(form: &FormSnapshot, errors: &mut Vec<FieldError>) {
    if form.tags.iter().any(|t| !has_text(t)) {
        errors.push(FieldError::new(FieldId::Tags, "Tags cannot be blank"));
    }
    if form.objectives.iter().any(|o| !has_text(&o.description)) {
        errors.push(FieldError::new(
            FieldId::Objectives,
            "Every objective needs a description",
        ));
    }
    if form
        .seeking_profiles
        .iter()
        .any(|p| !seeking_profile_complete(p))
    {
        errors.push(FieldError::new(
            FieldId::SeekingProfiles,
            "Every profile needs a role, a skill and a technical skill",
        ));
    }
    if let Some(bad) = form.co_founder_emails.iter().find(|e| !is_email(e)) {
        errors.push(FieldError::new(
            FieldId::CoFounderEmails,
            format!("\"{bad}\" is not a valid email address"),
        ));
    }
    if form
        .updates
        .iter()
        .any(|u| !has_text(&u.title) || !has_text(&u.content))
    {
        errors.push(FieldError::new(
            FieldId::Updates,
            "Every update needs a title and content",
        ));
    }
    if form
        .roadmap_phases
        .iter()
        .any(|p| !has_text(&p.title) || !has_text(&p.description))
    {
        errors.push(FieldError::new(
            FieldId::RoadmapPhases,
            "Every roadmap phase needs a title and description",
        ));
    }
}

/// URL parses and its host is the network's domain or a subdomain of it.
pub fn is_allowed_social_url(network: SocialNetwork, value: &str) -> bool {
    let Ok(parsed) = url::Url::parse(value.trim()) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    network
        .allowed_hosts()
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.trim().split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
