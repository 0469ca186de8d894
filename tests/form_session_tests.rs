use activity_planner::db::Database;
use activity_planner::{ActivityForm, ErrorKind, Field, FormState, PlannerError, QuantityType};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

fn pool() -> Database {
    let mut db = Database::default();
    let research = db.add_task("Research", &[]).unwrap();
    db.set_completed(research, true).unwrap();
    db.add_task("Outline", &[research]).unwrap();
    let draft = db.add_task("First draft", &[2]).unwrap();
    db.add_task("Edit", &[draft]).unwrap();
    db
}

#[test]
fn test_session_walks_editing_ready_submitted() {
    let db = pool();
    let mut form = ActivityForm::with_clock(today);
    assert_eq!(form.state(), FormState::Editing);

    for c in "Paper".chars() {
        form.handle_char(Field::Name, c).unwrap();
    }
    assert_eq!(form.issue(Field::Name), None);

    assert_eq!(form.set_text(Field::Quantity, "abc").unwrap(), Some(ErrorKind::NotNumeric));
    assert_eq!(form.set_text(Field::Quantity, "5").unwrap(), None);
    assert_eq!(form.set_text(Field::Duration, "120").unwrap(), None);
    assert_eq!(
        form.set_date(today().pred_opt().unwrap()).unwrap(),
        Some(ErrorKind::DateInPast)
    );
    assert_eq!(form.set_date(today()).unwrap(), None);
    form.select_quantity_type(Some(QuantityType::Pages)).unwrap();
    assert_eq!(form.state(), FormState::Editing);

    let offered: Vec<u64> = form.selectable_tasks(&db.tasks).iter().map(|t| t.id).collect();
    assert_eq!(offered, vec![1, 2]);

    form.add_tasks(&db.tasks, &[2]).unwrap();
    assert_eq!(form.state(), FormState::Ready);

    form.select_quantity_type(None).unwrap();
    assert_eq!(form.state(), FormState::Editing);
    form.select_quantity_type_name("pages").unwrap();
    assert!(form.can_submit());

    let activity = form.submit().unwrap();
    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(activity.name(), "Paper");
    assert_eq!(activity.quantity(), 5);
    assert_eq!(activity.duration(), 120);
    assert_eq!(activity.date(), today());
}

#[test]
fn test_backspace_revalidates() {
    let mut form = ActivityForm::with_clock(today);
    form.set_text(Field::Duration, "1.").unwrap();
    assert_eq!(form.issue(Field::Duration), Some(ErrorKind::NotInteger));
    assert_eq!(form.handle_backspace(Field::Duration).unwrap(), None);
    assert_eq!(form.text(Field::Duration), Some("1"));
}

#[test]
fn test_non_text_fields_reject_text_edits() {
    let mut form = ActivityForm::with_clock(today);
    assert!(matches!(
        form.set_text(Field::Date, "2026-09-02"),
        Err(PlannerError::NotTextField(Field::Date))
    ));
}

#[test]
fn test_cancelled_session_produces_nothing() {
    let db = pool();
    let mut form = ActivityForm::with_clock(today);
    form.add_tasks(&db.tasks, &[1]).unwrap();
    form.cancel().unwrap();
    assert_eq!(form.state(), FormState::Cancelled);
    assert!(matches!(form.submit(), Err(PlannerError::FormClosed("cancelled"))));
}

#[test]
fn test_view_excludes_tasks_already_on_activity() {
    let mut db = pool();
    let mut form = ActivityForm::with_clock(today);
    form.set_text(Field::Name, "Paper").unwrap();
    form.set_text(Field::Quantity, "1").unwrap();
    form.set_text(Field::Duration, "1").unwrap();
    form.select_quantity_type(Some(QuantityType::Hours)).unwrap();
    form.add_tasks(&db.tasks, &[1]).unwrap();
    let activity = form.submit().unwrap();

    db.set_completed(2, true).unwrap();
    let view = ActivityForm::view_with_clock(activity, today);
    let offered: Vec<u64> = view.selectable_tasks(&db.tasks).iter().map(|t| t.id).collect();
    assert_eq!(offered, vec![2, 3]);
}

#[test]
fn test_removing_last_task_blocks_view_submit() {
    let db = pool();
    let mut form = ActivityForm::with_clock(today);
    form.set_text(Field::Name, "Paper").unwrap();
    form.set_text(Field::Quantity, "1").unwrap();
    form.set_text(Field::Duration, "1").unwrap();
    form.select_quantity_type(Some(QuantityType::Hours)).unwrap();
    form.add_tasks(&db.tasks, &[1]).unwrap();
    let activity = form.submit().unwrap();

    let mut view = ActivityForm::view_with_clock(activity, today);
    assert!(view.remove_task(1, &mut |_: &str| true).unwrap());
    assert_eq!(view.issue(Field::Tasks), Some(ErrorKind::NoTaskSelected));
    assert!(matches!(view.submit(), Err(PlannerError::InvalidDraftState(_))));
}
