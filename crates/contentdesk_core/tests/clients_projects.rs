use contentdesk_core::{
    seed_demo_data, ClientDraft, ClientService, FixedClock, ForeignKey, MemoryStore,
    ProjectDraft, ProjectService, ProjectStatus, RecordId, ServiceContext, ServiceError,
    SessionStore,
};

const NOW_MS: i64 = 1_707_998_400_000;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    seed_demo_data(&store).unwrap();
    store
}

fn login(store: &MemoryStore, email: &str, password: &str) {
    SessionStore::new(store).login(email, password).unwrap();
}

fn client_draft(name: &str) -> ClientDraft {
    ClientDraft {
        name: name.to_string(),
        industry: "Retail".to_string(),
        goals: "Grow newsletter".to_string(),
        strategist: "Content Strategist".to_string(),
    }
}

fn project_draft(title: &str, client_id: ForeignKey) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        client_id,
        status: ProjectStatus::Pending,
        due_date: "2024-06-30".to_string(),
        assigned_to: "Writer".to_string(),
        description: String::new(),
    }
}

#[test]
fn strategist_manages_clients() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = ClientService::new(ServiceContext::new(&store, &clock));
    login(&store, "strategist@example.com", "strategist123");

    let created = service.create(client_draft("ShopLocal")).unwrap();
    assert_eq!(created.id, RecordId(NOW_MS));
    assert_eq!(created.status, None);

    let updated = service
        .update(RecordId(1), client_draft("TechCorp Global"))
        .unwrap();
    assert_eq!(updated.name, "TechCorp Global");
    assert_eq!(updated.status.as_deref(), Some("active"));

    service.delete(RecordId(2)).unwrap();
    assert_eq!(service.list().unwrap().len(), 3);
}

#[test]
fn editor_and_writer_are_kept_out_of_clients() {
    let store = seeded_store();
    let service = ClientService::new(ServiceContext::system(&store));

    for (email, password) in [
        ("editor@example.com", "editor123"),
        ("writer@example.com", "writer123"),
    ] {
        login(&store, email, password);
        assert!(matches!(
            service.create(client_draft("Nope")),
            Err(ServiceError::PermissionDenied { .. })
        ));
        assert!(matches!(
            service.list(),
            Err(ServiceError::PermissionDenied { .. })
        ));
    }
}

#[test]
fn editor_adds_projects_but_writer_cannot() {
    let store = seeded_store();
    let clock = FixedClock::from_millis(NOW_MS);
    let service = ProjectService::new(ServiceContext::new(&store, &clock));

    login(&store, "editor@example.com", "editor123");
    let created = service
        .create(project_draft("Spring Newsletter", ForeignKey::Number(3)))
        .unwrap();
    assert_eq!(created.created_at.as_deref(), Some("2024-02-15"));
    assert_eq!(service.list().unwrap().len(), 4);

    login(&store, "writer@example.com", "writer123");
    assert!(matches!(
        service.create(project_draft("Nope", ForeignKey::Number(1))),
        Err(ServiceError::PermissionDenied { .. })
    ));
}

#[test]
fn project_validation_rejects_bad_due_date() {
    let store = seeded_store();
    let service = ProjectService::new(ServiceContext::system(&store));
    login(&store, "admin@example.com", "admin123");

    let mut draft = project_draft("Launch", ForeignKey::Number(1));
    draft.due_date = "30/06/2024".to_string();
    assert!(matches!(
        service.create(draft),
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        service.delete(RecordId(404)),
        Err(ServiceError::NotFound {
            entity: "project",
            ..
        })
    ));
}

#[test]
fn client_names_resolve_textual_references_and_dangle_after_delete() {
    let store = seeded_store();
    let ctx = ServiceContext::system(&store);
    let projects = ProjectService::new(ctx);
    let clients = ClientService::new(ctx);
    login(&store, "admin@example.com", "admin123");

    let textual = projects
        .create(project_draft("Form Project", ForeignKey::Text("2".to_string())))
        .unwrap();
    assert_eq!(projects.client_name(&textual).unwrap(), "HealthPlus");

    clients.delete(RecordId(2)).unwrap();
    assert_eq!(projects.client_name(&textual).unwrap(), "Unknown Client");
}
