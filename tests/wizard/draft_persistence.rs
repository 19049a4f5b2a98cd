use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use initiative_wizard::draft::{DEFAULT_DRAFT_KEY, DraftStore, FileStorage, KeyValueStorage};
use initiative_wizard::wizard::{FormPatch, Navigator, StepNumber};

use super::wizard_harness::{dated_update, general_patch};

fn file_store(dir: &TempDir) -> DraftStore {
    DraftStore::open_create(Arc::new(FileStorage::new(dir.path())), DEFAULT_DRAFT_KEY)
}

#[test]
fn draft_survives_a_restart_on_disk() {
    let tmp = TempDir::new().unwrap();
    {
        let mut store = file_store(&tmp);
        store.update_form_data(general_patch());
        Navigator::new(&mut store).go_to_next_step();
        store.set_initiative_draft_id(Some(41));
    }

    let store = file_store(&tmp);
    assert_eq!(store.current_step(), StepNumber::VISION);
    assert_eq!(store.form().title, "Neighbourhood tool library");
    assert!(store.is_step_marked_completed(StepNumber::GENERAL));
    assert!(store.session().has_started_navigation);
    assert_eq!(store.initiative_draft_id(), Some(41));
    assert!(!store.is_submitting());
}

#[test]
fn update_dates_keep_second_precision_on_disk() {
    let tmp = TempDir::new().unwrap();
    let update = dated_update();
    {
        let mut store = file_store(&tmp);
        store.update_form_data(FormPatch {
            updates: Some(vec![update.clone()]),
            ..FormPatch::default()
        });
    }

    let raw = fs::read_to_string(tmp.path().join("initiative-draft.json")).unwrap();
    assert!(raw.contains("2024-03-09T14:30:05"));

    let store = file_store(&tmp);
    assert_eq!(store.form().updates[0].created_at, update.created_at);
}

#[test]
fn unreadable_file_is_replaced_by_a_fresh_session() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("initiative-draft.json");
    fs::write(&path, "{\"currentStep\": \"three\"").unwrap();

    let store = file_store(&tmp);
    assert_eq!(store.current_step(), StepNumber::GENERAL);
    assert!(store.form().title.is_empty());
    assert!(!path.exists());
}

#[test]
fn out_of_range_step_is_clamped_on_load() {
    let tmp = TempDir::new().unwrap();
    let storage = FileStorage::new(tmp.path());
    storage
        .set(DEFAULT_DRAFT_KEY, r#"{"currentStep": 42, "hasStartedNavigation": true}"#)
        .unwrap();

    let store = file_store(&tmp);
    assert_eq!(store.current_step(), StepNumber::REVIEW);
}

#[test]
fn discarding_removes_the_file() {
    let tmp = TempDir::new().unwrap();
    let mut store = file_store(&tmp);
    store.update_form_data(general_patch());
    assert!(tmp.path().join("initiative-draft.json").exists());

    store.force_reset();
    assert!(!tmp.path().join("initiative-draft.json").exists());
    assert!(store.take_reset_flag());
    assert!(!store.take_reset_flag());
}
