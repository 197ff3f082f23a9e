use contentdesk_core::{
    seed_demo_data, FixedClock, ForeignKey, MemoryStore, RecordId, ServiceContext, ServiceError,
    SessionStore, TaskDraft, TaskFilter, TaskPriority, TaskService, TaskStats, TaskStatus,
};

// 2024-02-15T12:00:00Z
const NOW_MS: i64 = 1_707_998_400_000;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    seed_demo_data(&store).unwrap();
    store
}

fn login(store: &MemoryStore, email: &str, password: &str) {
    SessionStore::new(store).login(email, password).unwrap();
}

fn task_draft(kind: &str, assigned_to: &str, due_date: &str) -> TaskDraft {
    TaskDraft {
        title: "Proofread whitepaper".to_string(),
        description: String::new(),
        priority: TaskPriority::Low,
        status: TaskStatus::Pending,
        assigned_to: assigned_to.to_string(),
        project_id: ForeignKey::Number(2),
        due_date: due_date.to_string(),
        kind: kind.to_string(),
    }
}

fn ids(tasks: &[contentdesk_core::Task]) -> Vec<i64> {
    tasks.iter().map(|task| task.id.0).collect()
}

#[test]
fn editor_sees_review_tasks_assigned_to_someone_else() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = TaskService::new(ServiceContext::new(&store, &clock));

    login(&store, "admin@example.com", "admin123");
    let review = service
        .create(task_draft("review", "Someone Else", ""))
        .unwrap();

    login(&store, "editor@example.com", "editor123");
    let visible = service.list_visible(TaskFilter::All).unwrap();
    assert_eq!(ids(&visible), vec![1, review.id.0]);

    let permissions = service.permissions(&review).unwrap();
    assert!(permissions.visible);
    assert!(!permissions.editable);
    assert!(matches!(
        service.change_status(review.id, TaskStatus::Completed),
        Err(ServiceError::PermissionDenied { .. })
    ));
}

#[test]
fn writer_sees_only_assigned_tasks() {
    let store = seeded_store();
    let service = TaskService::new(ServiceContext::system(&store));
    login(&store, "writer@example.com", "writer123");

    let visible = service.list_visible(TaskFilter::All).unwrap();
    assert_eq!(ids(&visible), vec![2]);

    let moved = service
        .change_status(RecordId(2), TaskStatus::Completed)
        .unwrap();
    assert_eq!(moved.status, TaskStatus::Completed);
}

#[test]
fn stats_cover_all_tasks_for_admin_and_visible_tasks_otherwise() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = TaskService::new(ServiceContext::new(&store, &clock));

    login(&store, "admin@example.com", "admin123");
    assert_eq!(
        service.stats().unwrap(),
        TaskStats {
            total: 3,
            pending: 1,
            in_progress: 1,
            completed: 1,
            overdue: 2,
        }
    );

    login(&store, "writer@example.com", "writer123");
    assert_eq!(
        service.stats().unwrap(),
        TaskStats {
            total: 1,
            pending: 0,
            in_progress: 1,
            completed: 0,
            overdue: 1,
        }
    );
}

#[test]
fn overdue_tab_excludes_completed_and_future_tasks() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = TaskService::new(ServiceContext::new(&store, &clock));
    login(&store, "admin@example.com", "admin123");

    service
        .create(task_draft("content", "Writer", "2024-03-01"))
        .unwrap();

    let overdue = service.list_visible(TaskFilter::Overdue).unwrap();
    assert_eq!(ids(&overdue), vec![1, 2]);
    assert_eq!(
        ids(&service.list_visible(TaskFilter::Completed).unwrap()),
        vec![3]
    );
}

#[test]
fn only_admin_deletes_tasks() {
    let store = seeded_store();
    let service = TaskService::new(ServiceContext::system(&store));

    login(&store, "editor@example.com", "editor123");
    assert!(matches!(
        service.delete(RecordId(1)),
        Err(ServiceError::PermissionDenied { .. })
    ));

    login(&store, "admin@example.com", "admin123");
    service.delete(RecordId(1)).unwrap();
    assert_eq!(ids(&service.list_visible(TaskFilter::All).unwrap()), vec![2, 3]);
}

#[test]
fn assignee_edits_task_fields() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = TaskService::new(ServiceContext::new(&store, &clock));
    login(&store, "strategist@example.com", "strategist123");

    let mut draft = task_draft("meeting", "Content Strategist", "2024-04-01");
    draft.title = "Quarterly review prep".to_string();
    let updated = service.update(RecordId(3), draft).unwrap();
    assert_eq!(updated.title, "Quarterly review prep");
    assert_eq!(updated.updated_at.as_deref(), Some("2024-02-15"));

    assert!(matches!(
        service.update(RecordId(2), task_draft("content", "Writer", "")),
        Err(ServiceError::PermissionDenied { .. })
    ));
}

#[test]
fn create_requires_session_and_valid_due_date() {
    let store = seeded_store();
    let service = TaskService::new(ServiceContext::system(&store));

    assert!(matches!(
        service.create(task_draft("content", "Writer", "")),
        Err(ServiceError::PermissionDenied { .. })
    ));
    assert!(service.list_visible(TaskFilter::All).unwrap().is_empty());

    login(&store, "writer@example.com", "writer123");
    assert!(matches!(
        service.create(task_draft("content", "Writer", "tomorrow")),
        Err(ServiceError::Validation(_))
    ));
}

#[test]
fn task_project_lookup_only_matches_numeric_references() {
    let store = seeded_store();
    let service = TaskService::new(ServiceContext::system(&store));
    login(&store, "admin@example.com", "admin123");

    let mut textual = task_draft("content", "Writer", "");
    textual.project_id = ForeignKey::Text("1".to_string());
    let textual = service.create(textual).unwrap();
    assert_eq!(service.project_title(&textual).unwrap(), "No Project");

    let seeded = service
        .list_visible(TaskFilter::All)
        .unwrap()
        .into_iter()
        .find(|task| task.id == RecordId(1))
        .unwrap();
    assert_eq!(
        service.project_title(&seeded).unwrap(),
        "Q1 Content Strategy"
    );
}
