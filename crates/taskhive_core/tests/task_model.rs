use taskhive_core::{Priority, Task, TaskChange, TaskDraft};

fn draft(title: &str, assigned_to: &str, is_shared: bool) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        category: "general".to_string(),
        assigned_to: assigned_to.to_string(),
        priority: Priority::Medium,
        is_shared,
    }
}

#[test]
fn new_task_sets_defaults() {
    let task = Task::new(1, draft("write report", "alice", false));

    assert_eq!(task.id, 1);
    assert_eq!(task.title, "write report");
    assert_eq!(task.category, "general");
    assert_eq!(task.assigned_to, "alice");
    assert!(!task.completed);
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.is_shared);
    assert!(task.created_at > 0);
}

#[test]
fn priority_values_are_fixed_and_reversible() {
    assert_eq!(Priority::Low.as_value(), 1);
    assert_eq!(Priority::Medium.as_value(), 2);
    assert_eq!(Priority::High.as_value(), 3);

    for priority in [Priority::Low, Priority::Medium, Priority::High] {
        assert_eq!(Priority::from_value(priority.as_value()), Some(priority));
    }
    assert_eq!(Priority::from_value(0), None);
    assert_eq!(Priority::from_value(4), None);
}

#[test]
fn priority_labels_are_presentation_text() {
    assert_eq!(Priority::Low.label(), "Low");
    assert_eq!(Priority::Medium.label(), "Medium");
    assert_eq!(Priority::High.label(), "High");
}

#[test]
fn access_rule_covers_owner_and_shared() {
    let personal = Task::new(1, draft("mine", "alice", false));
    assert!(personal.accessible_to("alice"));
    assert!(!personal.accessible_to("bob"));

    let shared = Task::new(2, draft("ours", "alice", true));
    assert!(shared.accessible_to("alice"));
    assert!(shared.accessible_to("bob"));
}

#[test]
fn apply_overwrites_mutable_fields_only() {
    let mut task = Task::new(5, draft("draft", "alice", false));
    let created_at = task.created_at;

    task.apply(TaskChange {
        title: "final".to_string(),
        category: "work".to_string(),
        assigned_to: "bob".to_string(),
        completed: true,
        priority: Priority::High,
        is_shared: true,
    });

    assert_eq!(task.id, 5);
    assert_eq!(task.created_at, created_at);
    assert_eq!(task.title, "final");
    assert_eq!(task.category, "work");
    assert_eq!(task.assigned_to, "bob");
    assert!(task.completed);
    assert_eq!(task.priority, Priority::High);
    assert!(task.is_shared);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(9, draft("ship release", "alice", true));
    task.priority = Priority::High;
    task.created_at = 1_756_000_000;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 9);
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["category"], "general");
    assert_eq!(json["assigned_to"], "alice");
    assert_eq!(json["completed"], false);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["is_shared"], true);
    assert_eq!(json["created_at"], 1_756_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
