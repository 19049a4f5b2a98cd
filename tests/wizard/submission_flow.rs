use std::time::Duration;

use initiative_wizard::error::SubmitError;
use initiative_wizard::submission::{
    DismissGesture, NoticeLevel, Preflight, Redirect, RemoteError, RemoteErrorKind,
    SubmissionState, SubmissionTiming, save_partial_draft,
};
use initiative_wizard::wizard::{FormPatch, Navigator, StepNumber};

use super::wizard_harness::{
    DUPLICATE_MARKER, complete_profile, general_patch, harness, instant_timing, memory_store,
    record, team_patch, vision_patch,
};

fn ready_store() -> initiative_wizard::draft::DraftStore {
    let mut store = memory_store();
    store.update_form_data(general_patch());
    store.update_form_data(vision_patch());
    store.update_form_data(team_patch());
    Navigator::new(&mut store).go_to_step(6);
    store
}

#[tokio::test]
async fn remote_outcomes_from_confirm() {
    let cases = [
        (
            Err(RemoteError::from_message(DUPLICATE_MARKER, DUPLICATE_MARKER)),
            SubmissionState::TitleRequired,
        ),
        (
            Err(RemoteError::from_message(
                format!("{DUPLICATE_MARKER}!"),
                DUPLICATE_MARKER,
            )),
            SubmissionState::Error,
        ),
        (
            Err(RemoteError::new(RemoteErrorKind::Unauthorized, "expired")),
            SubmissionState::Error,
        ),
        (Ok(record(9, false)), SubmissionState::Success),
    ];

    for (response, expected) in cases {
        let mut h = harness(complete_profile(), instant_timing());
        let mut store = ready_store();
        h.api.push(response);

        assert_eq!(
            h.orchestrator.open(&mut store).await.unwrap(),
            Preflight::Opened(SubmissionState::Confirm)
        );
        assert_eq!(h.orchestrator.confirm(&mut store).await.unwrap(), expected);
        assert!(!store.is_submitting());
    }
}

#[tokio::test]
async fn success_resets_the_creation_draft_and_refreshes_listings() {
    let mut h = harness(complete_profile(), instant_timing());
    let mut store = ready_store();

    h.orchestrator.open(&mut store).await.unwrap();
    h.orchestrator.confirm(&mut store).await.unwrap();

    assert_eq!(h.api.calls(), vec!["create:Neighbourhood tool library"]);
    assert_eq!(h.api.invalidations(), 1);
    assert_eq!(store.current_step(), StepNumber::GENERAL);
    assert!(store.form().title.is_empty());
    assert!(store.take_reset_flag());
    assert_eq!(h.notices.levels(), vec![NoticeLevel::Success]);
}

#[tokio::test]
async fn duplicate_title_recovery_resubmits_with_the_new_title() {
    let mut h = harness(complete_profile(), instant_timing());
    let mut store = ready_store();
    h.api
        .push(Err(RemoteError::from_message(DUPLICATE_MARKER, DUPLICATE_MARKER)));

    h.orchestrator.open(&mut store).await.unwrap();
    h.orchestrator.confirm(&mut store).await.unwrap();
    assert!(h.orchestrator.last_error().unwrap().is_duplicate_title());
    assert!(h.orchestrator.dismiss(DismissGesture::Incidental).is_ok());

    // Reopening lands on confirm again; the second attempt is scripted to fail the same way.
    h.api
        .push(Err(RemoteError::from_message(DUPLICATE_MARKER, DUPLICATE_MARKER)));
    h.orchestrator.open(&mut store).await.unwrap();
    assert_eq!(
        h.orchestrator.confirm(&mut store).await.unwrap(),
        SubmissionState::TitleRequired
    );

    let state = h
        .orchestrator
        .provide_title(&mut store, "Tool library (east side)")
        .await
        .unwrap();
    assert_eq!(state, SubmissionState::Success);
    assert_eq!(
        h.api.calls().last().map(String::as_str),
        Some("create:Tool library (east side)")
    );
}

#[tokio::test]
async fn partial_save_is_promoted_on_submit() {
    let mut h = harness(complete_profile(), instant_timing());
    let mut store = ready_store();
    h.api.push(Ok(record(300, true)));
    h.api.push(Ok(record(300, true)));

    assert_eq!(
        save_partial_draft(h.api.as_ref(), &mut store).await.unwrap(),
        Some(300)
    );
    assert_eq!(
        save_partial_draft(h.api.as_ref(), &mut store).await.unwrap(),
        Some(300)
    );

    h.orchestrator.open(&mut store).await.unwrap();
    h.orchestrator.confirm(&mut store).await.unwrap();
    assert_eq!(
        h.api.calls(),
        vec![
            "save_draft:None",
            "save_draft:Some(300)",
            "promote:300:Neighbourhood tool library",
        ]
    );
}

#[tokio::test]
async fn invalid_title_length_redirects_to_general() {
    let mut h = harness(complete_profile(), instant_timing());
    let mut store = ready_store();
    store.update_form_data(FormPatch {
        title: Some("x".repeat(81)),
        ..FormPatch::default()
    });

    let outcome = h.orchestrator.open(&mut store).await.unwrap();
    let Preflight::Redirected { step, message } = outcome else {
        panic!("expected a redirect, got {outcome:?}");
    };
    assert_eq!(step, StepNumber::GENERAL);
    assert!(message.starts_with("Step 1 (General)"));
    assert_eq!(store.current_step(), StepNumber::GENERAL);
    assert_eq!(h.orchestrator.state(), None);
    assert_eq!(h.notices.messages(), vec![message]);
}

#[tokio::test(start_paused = true)]
async fn redirect_waits_for_the_configured_delays() {
    let timing = SubmissionTiming {
        navigation_delay: Duration::from_millis(1500),
        success_redirect: Duration::from_millis(3000),
    };

    let mut h = harness(complete_profile(), timing);
    let mut store = ready_store();
    store.update_form_data(FormPatch {
        objectives: Some(Vec::new()),
        ..FormPatch::default()
    });
    let started = tokio::time::Instant::now();
    h.orchestrator.open(&mut store).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
    assert_eq!(store.current_step(), StepNumber::VISION);

    store.update_form_data(vision_patch());
    h.api.push(Ok(record(55, false)));
    h.orchestrator.open(&mut store).await.unwrap();
    h.orchestrator.confirm(&mut store).await.unwrap();

    let started = tokio::time::Instant::now();
    let redirect = h.orchestrator.wait_for_redirect().await;
    assert!(started.elapsed() >= Duration::from_millis(3000));
    assert_eq!(redirect, Some(Redirect { initiative_id: 55 }));
}

#[tokio::test]
async fn github_then_profile_then_confirm() {
    let mut profile = complete_profile();
    profile.social_links.clear();
    let mut h = harness(profile, instant_timing());
    let mut store = ready_store();

    assert_eq!(
        h.orchestrator.open(&mut store).await.unwrap(),
        Preflight::Opened(SubmissionState::GithubRequired)
    );
    // Linking GitHub also gives the profile its first social link.
    assert_eq!(
        h.orchestrator
            .supply_github_link("https://www.github.com/organiser")
            .await
            .unwrap(),
        SubmissionState::Confirm
    );
    assert_eq!(
        h.orchestrator.confirm(&mut store).await.unwrap(),
        SubmissionState::Success
    );
}

#[tokio::test]
async fn profile_suggestion_can_send_the_user_away() {
    let mut profile = complete_profile();
    profile.skills.clear();
    let mut h = harness(profile, instant_timing());
    let mut store = ready_store();

    h.orchestrator.open(&mut store).await.unwrap();
    assert_eq!(
        h.orchestrator.state(),
        Some(SubmissionState::ProfileSuggestion)
    );
    h.orchestrator.go_fix_profile().unwrap();
    assert_eq!(h.orchestrator.state(), None);
    assert!(matches!(
        h.orchestrator.confirm(&mut store).await,
        Err(SubmitError::NotOpen)
    ));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn edit_session_updates_in_place() {
    let mut h = harness(complete_profile(), instant_timing());
    let mut initial = record(8, false);
    initial.form = super::wizard_harness::core_form();
    initial.form.seeking_profiles.clear();

    let storage = std::sync::Arc::new(initiative_wizard::draft::MemoryStorage::new());
    let mut store = initiative_wizard::draft::DraftStore::open_edit(
        storage,
        initiative_wizard::draft::DEFAULT_DRAFT_KEY,
        &initial,
    );

    assert_eq!(save_partial_draft(h.api.as_ref(), &mut store).await.unwrap(), None);
    h.api.push(Ok(record(8, false)));
    h.orchestrator.open(&mut store).await.unwrap();
    h.orchestrator.confirm(&mut store).await.unwrap();
    assert_eq!(h.api.calls(), vec!["update:8:Neighbourhood tool library"]);
    assert_eq!(
        h.orchestrator.dismiss(DismissGesture::Explicit).unwrap(),
        Some(Redirect { initiative_id: 8 })
    );
}
