use initiative_wizard::wizard::{FormPatch, Navigator, StepNumber, StepStatus};

use super::wizard_harness::{general_patch, memory_store, team_patch, vision_patch};

#[test]
fn general_step_gate_follows_live_values() {
    let mut store = memory_store();
    assert!(!Navigator::new(&mut store).can_go_to_next_step());

    store.update_form_data(general_patch());
    assert!(Navigator::new(&mut store).can_go_to_next_step());

    store.update_form_data(FormPatch {
        main_visual: Some(String::new()),
        ..FormPatch::default()
    });
    assert!(!Navigator::new(&mut store).can_go_to_next_step());
}

#[test]
fn next_step_never_leaves_the_wizard() {
    let mut store = memory_store();
    store.update_form_data(general_patch());
    store.update_form_data(vision_patch());
    store.update_form_data(team_patch());

    let mut navigator = Navigator::new(&mut store);
    for _ in 0..10 {
        navigator.go_to_next_step();
        let step = navigator.current_step().get();
        assert!((1..=6).contains(&step));
    }
    assert_eq!(navigator.current_step(), StepNumber::REVIEW);
    assert!(!navigator.go_to_next_step());
    assert_eq!(navigator.current_step(), StepNumber::REVIEW);
    assert!(store.is_step_marked_completed(StepNumber::REVIEW));
}

#[test]
fn blocked_step_is_not_marked_completed() {
    let mut store = memory_store();
    store.update_form_data(general_patch());
    Navigator::new(&mut store).go_to_next_step();

    let mut navigator = Navigator::new(&mut store);
    assert!(!navigator.go_to_next_step());
    assert_eq!(navigator.current_step(), StepNumber::VISION);
    assert!(!store.is_step_marked_completed(StepNumber::VISION));
    assert!(store.is_step_marked_completed(StepNumber::GENERAL));
}

#[test]
fn optional_steps_never_block() {
    let mut store = memory_store();
    let mut navigator = Navigator::new(&mut store);
    assert_eq!(navigator.go_to_step(4), StepNumber::NETWORKS);
    assert!(navigator.can_go_to_next_step());
    assert!(navigator.go_to_next_step());
    assert_eq!(navigator.current_step(), StepNumber::PROGRESS);
}

#[test]
fn leaving_step_one_ends_the_neutral_phase() {
    let mut store = memory_store();
    assert_eq!(
        store.calculator().step_status(StepNumber::GENERAL),
        StepStatus::Neutral
    );

    Navigator::new(&mut store).go_to_step(3);
    Navigator::new(&mut store).go_to_step(1);
    assert_eq!(
        store.calculator().step_status(StepNumber::GENERAL),
        StepStatus::Pending
    );

    let mut navigator = Navigator::new(&mut store);
    assert!(!navigator.can_go_to_previous_step());
    assert!(!navigator.go_to_previous_step());
}

#[test]
fn jumps_are_clamped() {
    let mut store = memory_store();
    let mut navigator = Navigator::new(&mut store);
    assert_eq!(navigator.go_to_step(-7), StepNumber::GENERAL);
    assert_eq!(navigator.go_to_step(99), StepNumber::REVIEW);
    assert!(navigator.go_to_previous_step());
    assert_eq!(navigator.current_step(), StepNumber::PROGRESS);
}
