use contentdesk_core::{
    seed_demo_data, ContentService, ContentStatus, DashboardService, DashboardSummary,
    LabeledCount, MemoryStore, RecordId, ServiceContext, ServiceError, SessionStore,
};

fn counts(entries: &[LabeledCount]) -> Vec<(&'static str, usize)> {
    entries.iter().map(|entry| (entry.label, entry.count)).collect()
}

#[test]
fn summary_counts_seeded_agency_data() {
    let store = MemoryStore::new();
    seed_demo_data(&store).unwrap();
    SessionStore::new(&store)
        .login("writer@example.com", "writer123")
        .unwrap();

    let summary = DashboardService::new(ServiceContext::system(&store))
        .summary()
        .unwrap();

    assert_eq!(summary.total_clients, 3);
    assert_eq!(summary.active_projects, 1);
    assert_eq!(summary.completed_content, 1);
    assert_eq!(summary.pending_content, 2);
    assert_eq!(
        counts(&summary.project_status),
        vec![
            ("Pending", 1),
            ("In Progress", 1),
            ("Completed", 1),
            ("Published", 0),
        ]
    );
    assert_eq!(
        counts(&summary.content_types),
        vec![("Blog", 1), ("Article", 1), ("Social", 1)]
    );
}

#[test]
fn approved_content_is_neither_pending_nor_completed() {
    let store = MemoryStore::new();
    seed_demo_data(&store).unwrap();
    SessionStore::new(&store)
        .login("editor@example.com", "editor123")
        .unwrap();
    let ctx = ServiceContext::system(&store);

    ContentService::new(ctx)
        .change_status(RecordId(2), ContentStatus::Approved)
        .unwrap();

    let summary = DashboardService::new(ctx).summary().unwrap();
    assert_eq!(summary.completed_content, 1);
    assert_eq!(summary.pending_content, 1);
}

#[test]
fn summary_requires_a_session() {
    let store = MemoryStore::new();
    seed_demo_data(&store).unwrap();

    assert!(matches!(
        DashboardService::new(ServiceContext::system(&store)).summary(),
        Err(ServiceError::NotAuthenticated)
    ));
}

#[test]
fn empty_stores_produce_zeroed_summary() {
    let summary = DashboardSummary::compute(&[], &[], &[]);

    assert_eq!(summary.total_clients, 0);
    assert!(summary.project_status.iter().all(|entry| entry.count == 0));
    assert_eq!(summary.content_types.len(), 3);
}
