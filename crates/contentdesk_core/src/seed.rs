//! Demo accounts and sample agency data.
//!
//! Seeding only fills keys that do not exist yet; an existing list, even an
//! empty one, is left alone.

use crate::model::client::Client;
use crate::model::content::{Content, ContentStatus};
use crate::model::ids::{ForeignKey, RecordId};
use crate::model::project::{Project, ProjectStatus};
use crate::model::role::Role;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use crate::model::user::User;
use crate::repo::{EntityRepository, JsonListRepository, RepoResult, StoredEntity};
use crate::store::KeyValueStore;
use log::info;

/// Keys written by one `seed_demo_data` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<&'static str>,
}

pub fn seed_demo_data(store: &dyn KeyValueStore) -> RepoResult<SeedReport> {
    let mut report = SeedReport::default();
    seed_missing(store, demo_users(), &mut report)?;
    seed_missing(store, demo_clients(), &mut report)?;
    seed_missing(store, demo_projects(), &mut report)?;
    seed_missing(store, demo_content(), &mut report)?;
    seed_missing(store, demo_tasks(), &mut report)?;
    info!(
        "event=seed module=seed status=ok keys={}",
        report.seeded.join(",")
    );
    Ok(report)
}

fn seed_missing<T: StoredEntity>(
    store: &dyn KeyValueStore,
    records: Vec<T>,
    report: &mut SeedReport,
) -> RepoResult<()> {
    let repo = JsonListRepository::<T>::new(store);
    if repo.is_initialized()? {
        return Ok(());
    }
    repo.save_all(&records)?;
    report.seeded.push(T::STORAGE_KEY);
    Ok(())
}

fn user(id: i64, email: &str, password: &str, role: Role, name: &str) -> User {
    User {
        id: RecordId(id),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role,
    }
}

/// One account per role; also accepted by login before any list exists.
pub fn demo_users() -> Vec<User> {
    vec![
        user(1, "admin@example.com", "admin123", Role::Admin, "Admin User"),
        user(
            2,
            "strategist@example.com",
            "strategist123",
            Role::Strategist,
            "Content Strategist",
        ),
        user(3, "editor@example.com", "editor123", Role::Editor, "Editor"),
        user(4, "writer@example.com", "writer123", Role::Writer, "Writer"),
    ]
}

pub fn demo_clients() -> Vec<Client> {
    [
        (1, "TechCorp Inc", "Technology", "Increase brand awareness"),
        (2, "HealthPlus", "Healthcare", "Lead generation"),
        (3, "EcoGreen", "Environmental", "Thought leadership"),
    ]
    .into_iter()
    .map(|(id, name, industry, goals)| Client {
        id: RecordId(id),
        name: name.to_string(),
        industry: industry.to_string(),
        goals: goals.to_string(),
        strategist: "Content Strategist".to_string(),
        status: Some("active".to_string()),
    })
    .collect()
}

pub fn demo_projects() -> Vec<Project> {
    [
        (1, "Q1 Content Strategy", 1, ProjectStatus::InProgress, "2024-03-31", "Content Strategist"),
        (2, "Blog Series Launch", 2, ProjectStatus::Pending, "2024-02-15", "Writer"),
        (3, "Social Media Campaign", 3, ProjectStatus::Completed, "2024-01-30", "Editor"),
    ]
    .into_iter()
    .map(|(id, title, client_id, status, due_date, assigned_to)| Project {
        id: RecordId(id),
        title: title.to_string(),
        client_id: ForeignKey::Number(client_id),
        status,
        due_date: due_date.to_string(),
        assigned_to: assigned_to.to_string(),
        description: String::new(),
        created_at: None,
    })
    .collect()
}

pub fn demo_content() -> Vec<Content> {
    [
        (1, "AI in Healthcare", "blog", ContentStatus::Published, 1, "2024-01-15"),
        (2, "Sustainable Tech Trends", "article", ContentStatus::Review, 2, "2024-01-20"),
        (3, "Social Media Post #1", "social", ContentStatus::Draft, 3, "2024-01-25"),
    ]
    .into_iter()
    .map(|(id, title, kind, status, project_id, created_at)| Content {
        id: RecordId(id),
        title: title.to_string(),
        kind: kind.to_string(),
        status,
        project_id: ForeignKey::Number(project_id),
        body: String::new(),
        author: "Writer".to_string(),
        created_at: created_at.to_string(),
        updated_at: None,
    })
    .collect()
}

pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task {
            id: RecordId(1),
            title: "Review blog post draft".to_string(),
            description: "Review and provide feedback on AI healthcare blog post".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Pending,
            assigned_to: "Editor".to_string(),
            project_id: ForeignKey::Number(1),
            due_date: "2024-02-15".to_string(),
            kind: "review".to_string(),
            created_at: "2024-01-20".to_string(),
            updated_at: None,
        },
        Task {
            id: RecordId(2),
            title: "Write social media content".to_string(),
            description: "Create 5 social media posts for EcoGreen campaign".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::InProgress,
            assigned_to: "Writer".to_string(),
            project_id: ForeignKey::Number(3),
            due_date: "2024-02-10".to_string(),
            kind: "content".to_string(),
            created_at: "2024-01-18".to_string(),
            updated_at: None,
        },
        Task {
            id: RecordId(3),
            title: "Client strategy meeting".to_string(),
            description: "Prepare presentation for TechCorp quarterly review".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Completed,
            assigned_to: "Content Strategist".to_string(),
            project_id: ForeignKey::Number(1),
            due_date: "2024-01-25".to_string(),
            kind: "meeting".to_string(),
            created_at: "2024-01-15".to_string(),
            updated_at: None,
        },
    ]
}
