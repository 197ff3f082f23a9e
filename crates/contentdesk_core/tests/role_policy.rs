use contentdesk_core::policy::content::{
    can_change_content_status, can_delete_content, can_edit_content, can_view_content,
    content_permissions,
};
use contentdesk_core::policy::section::{accessible_sections, can_access};
use contentdesk_core::policy::task::{can_view_task, task_permissions};
use contentdesk_core::{
    Actor, Content, ContentStatus, ForeignKey, RecordId, RecordPermissions, Role, Section, Task,
    TaskPriority, TaskStatus,
};

const NAMES: [&str; 3] = ["Writer", "Editor", "Someone Else"];

fn content(author: &str, status: ContentStatus) -> Content {
    Content {
        id: RecordId(1),
        title: "Piece".to_string(),
        kind: "blog".to_string(),
        status,
        project_id: ForeignKey::Number(1),
        body: String::new(),
        author: author.to_string(),
        created_at: "2024-01-01".to_string(),
        updated_at: None,
    }
}

fn task(kind: &str, assigned_to: &str, status: TaskStatus) -> Task {
    Task {
        id: RecordId(1),
        title: "Task".to_string(),
        description: String::new(),
        priority: TaskPriority::Medium,
        status,
        assigned_to: assigned_to.to_string(),
        project_id: ForeignKey::Number(1),
        due_date: String::new(),
        kind: kind.to_string(),
        created_at: "2024-01-01".to_string(),
        updated_at: None,
    }
}

fn all_content() -> Vec<Content> {
    NAMES
        .iter()
        .flat_map(|author| {
            ContentStatus::ALL
                .into_iter()
                .map(move |status| content(author, status))
        })
        .collect()
}

fn all_tasks() -> Vec<Task> {
    let mut tasks = Vec::new();
    for kind in ["review", "content", "meeting"] {
        for assigned_to in NAMES {
            for status in TaskStatus::ALL {
                tasks.push(task(kind, assigned_to, status));
            }
        }
    }
    tasks
}

fn actors() -> Vec<Actor> {
    Role::ALL
        .into_iter()
        .flat_map(|role| NAMES.iter().map(move |name| Actor::new(role, *name)))
        .collect()
}

#[test]
fn writer_never_sees_another_authors_content() {
    for item in all_content() {
        let writer = Actor::new(Role::Writer, "Writer");
        assert_eq!(can_view_content(Some(&writer), &item), item.author == "Writer");
    }
}

#[test]
fn editor_never_edits_published_content() {
    for actor in actors().iter().filter(|actor| actor.role == Role::Editor) {
        for item in all_content() {
            assert!(can_change_content_status(Some(actor), &item));
            assert_eq!(
                can_edit_content(Some(actor), &item),
                item.status != ContentStatus::Published
            );
        }
    }
}

#[test]
fn only_admin_deletes_content_it_did_not_write() {
    for actor in actors() {
        for item in all_content() {
            let expected = actor.role == Role::Admin || item.author == actor.name;
            assert_eq!(can_delete_content(Some(&actor), &item), expected);
        }
    }
}

#[test]
fn predicates_are_deterministic_for_every_combination() {
    for actor in actors() {
        for item in all_content() {
            assert_eq!(
                content_permissions(Some(&actor), &item),
                content_permissions(Some(&actor), &item.clone())
            );
        }
        for item in all_tasks() {
            assert_eq!(
                task_permissions(Some(&actor), &item),
                task_permissions(Some(&actor), &item.clone())
            );
        }
    }
}

#[test]
fn task_visibility_follows_role_scope() {
    for actor in actors() {
        for item in all_tasks() {
            let assigned = item.assigned_to == actor.name;
            let expected = match actor.role {
                Role::Admin | Role::Strategist => true,
                Role::Editor => item.kind == "review" || assigned,
                Role::Writer => assigned,
            };
            assert_eq!(can_view_task(Some(&actor), &item), expected);

            let permissions = task_permissions(Some(&actor), &item);
            assert_eq!(permissions.editable, actor.role == Role::Admin || assigned);
            assert_eq!(permissions.status_changeable, permissions.editable);
            assert_eq!(permissions.deletable, actor.role == Role::Admin);
        }
    }
}

#[test]
fn missing_session_denies_every_record_and_section() {
    for item in all_content() {
        assert_eq!(content_permissions(None, &item), RecordPermissions::DENIED);
    }
    for item in all_tasks() {
        assert_eq!(task_permissions(None, &item), RecordPermissions::DENIED);
    }
    for section in Section::ALL {
        assert!(!can_access(None, section));
    }
    assert!(accessible_sections(None).is_empty());
}

#[test]
fn section_access_matches_role_navigation() {
    let sections = |role: Role| accessible_sections(Some(&Actor::new(role, "Anyone")));

    assert_eq!(sections(Role::Admin), Section::ALL.to_vec());
    assert_eq!(
        sections(Role::Strategist),
        vec![
            Section::Dashboard,
            Section::Clients,
            Section::Projects,
            Section::Content,
            Section::Tasks,
        ]
    );
    assert_eq!(
        sections(Role::Editor),
        vec![
            Section::Dashboard,
            Section::Projects,
            Section::Content,
            Section::Tasks,
        ]
    );
    assert_eq!(
        sections(Role::Writer),
        vec![Section::Dashboard, Section::Content, Section::Tasks]
    );
}
