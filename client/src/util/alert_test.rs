use super::*;

#[test]
fn failure_message_prefixes_action() {
    assert_eq!(failure_message(FailedAction::Diagnosis, "boom"), "Diagnosis failed: boom");
    assert_eq!(failure_message(FailedAction::Save, "dup"), "Save failed: dup");
    assert_eq!(failure_message(FailedAction::Load, "down"), "Load failed: down");
}
