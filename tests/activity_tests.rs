use activity_planner::{
    compute_readiness, dependencies_complete, materialize, selectable, validate_date,
    validate_duration, validate_quantity, ActivityDraft, ErrorKind, Task,
};
use chrono::{Duration, Local};

fn task_a() -> Task {
    Task::new(1, "TaskA")
}

fn ready_draft() -> ActivityDraft {
    let today = Local::now().date_naive();
    ActivityDraft {
        name: "Read chapter 3".into(),
        details: String::new(),
        quantity: "1".into(),
        duration: "30".into(),
        date: today + Duration::days(1),
        quantity_type: Some("Pages".into()),
        tasks: vec![task_a()],
    }
}

#[test]
fn test_number_fields_share_rules() {
    let cases = [
        ("pages", Err(ErrorKind::NotNumeric)),
        ("", Err(ErrorKind::NotNumeric)),
        ("3.5", Err(ErrorKind::NotInteger)),
        ("-1", Err(ErrorKind::Negative)),
        ("0", Ok(0)),
        ("42", Ok(42)),
    ];
    for (text, expected) in cases {
        assert_eq!(validate_quantity(text), expected, "quantity {text:?}");
        assert_eq!(validate_duration(text), expected, "duration {text:?}");
    }
}

#[test]
fn test_date_relative_to_local_today() {
    let today = Local::now().date_naive();
    assert_eq!(
        validate_date(today - Duration::days(1)),
        Err(ErrorKind::DateInPast)
    );
    assert_eq!(validate_date(today), Ok(today));
    assert!(validate_date(today + Duration::days(365 * 50)).is_ok());
}

#[test]
fn test_readiness_concrete_scenario() {
    let today = Local::now().date_naive();
    assert!(compute_readiness(&ready_draft(), today));
}

#[test]
fn test_readiness_requires_a_task() {
    let today = Local::now().date_naive();
    let mut draft = ready_draft();
    draft.tasks.clear();
    assert!(!compute_readiness(&draft, today));
}

#[test]
fn test_readiness_requires_quantity_type_and_name() {
    let today = Local::now().date_naive();
    let mut draft = ready_draft();
    draft.quantity_type = None;
    assert!(!compute_readiness(&draft, today));

    let mut draft = ready_draft();
    draft.name = " \t ".into();
    assert!(!compute_readiness(&draft, today));
}

#[test]
fn test_selectable_scenario() {
    let a = Task::new(1, "A");
    let b = Task::new(2, "B");
    let blocker = Task::new(4, "Blocker");
    let c = Task::new(3, "C").depends_on(4);
    let all = vec![a, b.clone(), c, blocker];

    let ids: Vec<u64> = selectable(&all[..3], &[b], &[])
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![1]);

    assert!(!dependencies_complete(&all[2], &all));
}

#[test]
fn test_dependencies_complete_needs_every_dependency() {
    let mut d1 = Task::new(10, "d1");
    d1.completed = true;
    let mut d2 = Task::new(11, "d2");
    d2.completed = true;
    let d3 = Task::new(12, "d3");
    let pool = vec![d1, d2, d3];

    assert!(dependencies_complete(&Task::new(1, "free"), &pool));
    let t = Task::new(2, "t").depends_on(10).depends_on(11);
    assert!(dependencies_complete(&t, &pool));
    assert!(!dependencies_complete(&t.depends_on(12), &pool));
}

#[test]
fn test_materialize_twice_gives_independent_activities() {
    let today = Local::now().date_naive();
    let draft = ready_draft();
    let mut first = materialize(&draft, today).unwrap();
    let second = materialize(&draft, today).unwrap();

    assert!(first.add_task(Task::new(99, "extra")));
    assert_eq!(first.tasks().len(), 2);
    assert_eq!(second.tasks().len(), 1);

    first.remove_task(1);
    assert_eq!(second.tasks()[0].id, 1);
}
