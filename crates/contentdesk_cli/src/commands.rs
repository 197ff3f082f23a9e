//! Command handlers. Each one resolves a service from the context, runs one
//! operation and prints a plain-text result.

use crate::Commands;
use clap::builder::PossibleValuesParser;
use clap::Subcommand;
use contentdesk_core::model::content::CONTENT_TYPES;
use contentdesk_core::policy::section::accessible_sections;
use contentdesk_core::{
    seed_demo_data, ClientDraft, ClientService, ContentDraft, ContentService, ContentStatus,
    DashboardService, ForeignKey, LabeledCount, ProjectDraft, ProjectService, ProjectStatus,
    RecordId, Role, ServiceContext, TaskDraft, TaskFilter, TaskPriority, TaskService, TaskStatus,
    UserDraft, UserService,
};
use log::info;
use std::error::Error;

type CommandResult = Result<(), Box<dyn Error>>;

#[derive(Subcommand)]
pub enum ContentCommands {
    /// List visible content, optionally one status tab
    List {
        #[arg(long)]
        status: Option<ContentStatus>,
    },
    /// Create a draft authored by the signed-in user
    Create {
        title: String,
        #[arg(
            long,
            default_value = "blog",
            value_parser = PossibleValuesParser::new(CONTENT_TYPES.iter().copied())
        )]
        kind: String,
        #[arg(long, default_value = "")]
        project: String,
        #[arg(long)]
        body: String,
    },
    /// Move content to another workflow status
    Status { id: i64, status: ContentStatus },
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List visible tasks for one tab
    List {
        #[arg(long, default_value = "all")]
        filter: TaskFilter,
    },
    Create {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "medium")]
        priority: TaskPriority,
        #[arg(long, default_value = "")]
        assigned_to: String,
        #[arg(long, default_value = "")]
        project: String,
        #[arg(long, default_value = "")]
        due: String,
        #[arg(long, default_value = "content")]
        kind: String,
    },
    Status { id: i64, status: TaskStatus },
    Delete { id: i64 },
    /// Counters shown above the task board
    Stats,
}

#[derive(Subcommand)]
pub enum ClientCommands {
    List,
    Add {
        name: String,
        #[arg(long, default_value = "")]
        industry: String,
        #[arg(long, default_value = "")]
        goals: String,
        #[arg(long, default_value = "")]
        strategist: String,
    },
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    List,
    Add {
        title: String,
        #[arg(long, default_value = "")]
        client: String,
        #[arg(long, default_value = "pending")]
        status: ProjectStatus,
        #[arg(long, default_value = "")]
        due: String,
        #[arg(long, default_value = "")]
        assigned_to: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum UserCommands {
    List,
    Add {
        name: String,
        email: String,
        password: String,
        #[arg(long, default_value = "writer")]
        role: Role,
    },
    Delete { id: i64 },
}

pub fn execute(command: Commands, ctx: ServiceContext<'_>) -> CommandResult {
    match command {
        Commands::Seed => {
            let report = seed_demo_data(ctx.store())?;
            if report.seeded.is_empty() {
                println!("nothing to seed; every store already exists");
            } else {
                println!("seeded: {}", report.seeded.join(", "));
            }
        }
        Commands::Login { email, password } => {
            let user = ctx.session().login(&email, &password)?;
            info!("event=cli_login module=cli status=ok id={}", user.id);
            println!("signed in as {} ({})", user.name, user.role);
        }
        Commands::Logout => {
            ctx.session().logout()?;
            println!("signed out");
        }
        Commands::Whoami => match ctx.actor()? {
            Some(actor) => {
                let sections: Vec<String> = accessible_sections(Some(&actor))
                    .into_iter()
                    .map(|section| section.to_string())
                    .collect();
                println!("{} ({})", actor.name, actor.role);
                println!("sections: {}", sections.join(", "));
            }
            None => println!("not signed in"),
        },
        Commands::Dashboard => {
            let summary = DashboardService::new(ctx).summary()?;
            println!("clients           {}", summary.total_clients);
            println!("active projects   {}", summary.active_projects);
            println!("published content {}", summary.completed_content);
            println!("pending content   {}", summary.pending_content);
            print_breakdown("project status", &summary.project_status);
            print_breakdown("content types", &summary.content_types);
        }
        Commands::Content(command) => content(command, ctx)?,
        Commands::Tasks(command) => tasks(command, ctx)?,
        Commands::Clients(command) => clients(command, ctx)?,
        Commands::Projects(command) => projects(command, ctx)?,
        Commands::Users(command) => users(command, ctx)?,
    }
    Ok(())
}

fn content(command: ContentCommands, ctx: ServiceContext<'_>) -> CommandResult {
    let service = ContentService::new(ctx);
    match command {
        ContentCommands::List { status } => {
            for item in service.list_visible(status)? {
                println!(
                    "{:>14}  {:<9}  {:<8}  {}  by {}  [{}]",
                    item.id,
                    item.status,
                    item.kind,
                    item.title,
                    item.author,
                    service.project_title(&item)?
                );
            }
        }
        ContentCommands::Create {
            title,
            kind,
            project,
            body,
        } => {
            let item = service.create(ContentDraft {
                title,
                kind,
                project_id: foreign_key(project),
                body,
            })?;
            println!("created content {}", item.id);
        }
        ContentCommands::Status { id, status } => {
            let item = service.change_status(RecordId(id), status)?;
            println!("content {} is now {}", item.id, item.status);
        }
        ContentCommands::Delete { id } => {
            let item = service.delete(RecordId(id))?;
            println!("deleted content {} ({})", item.id, item.title);
        }
    }
    Ok(())
}

fn tasks(command: TaskCommands, ctx: ServiceContext<'_>) -> CommandResult {
    let service = TaskService::new(ctx);
    match command {
        TaskCommands::List { filter } => {
            let today = ctx.clock().today();
            for task in service.list_visible(filter)? {
                println!(
                    "{:>14}  {:<11}  {:<6}  {}  -> {}  [{}]{}",
                    task.id,
                    task.status,
                    task.priority,
                    task.title,
                    task.assigned_to,
                    service.project_title(&task)?,
                    if task.is_overdue(today) { "  OVERDUE" } else { "" }
                );
            }
        }
        TaskCommands::Create {
            title,
            description,
            priority,
            assigned_to,
            project,
            due,
            kind,
        } => {
            let task = service.create(TaskDraft {
                title,
                description,
                priority,
                status: TaskStatus::Pending,
                assigned_to,
                project_id: foreign_key(project),
                due_date: due,
                kind,
            })?;
            println!("created task {}", task.id);
        }
        TaskCommands::Status { id, status } => {
            let task = service.change_status(RecordId(id), status)?;
            println!("task {} is now {}", task.id, task.status);
        }
        TaskCommands::Delete { id } => {
            let task = service.delete(RecordId(id))?;
            println!("deleted task {} ({})", task.id, task.title);
        }
        TaskCommands::Stats => {
            let stats = service.stats()?;
            println!(
                "total {}  pending {}  in progress {}  completed {}  overdue {}",
                stats.total, stats.pending, stats.in_progress, stats.completed, stats.overdue
            );
        }
    }
    Ok(())
}

fn clients(command: ClientCommands, ctx: ServiceContext<'_>) -> CommandResult {
    let service = ClientService::new(ctx);
    match command {
        ClientCommands::List => {
            for client in service.list()? {
                println!(
                    "{:>14}  {}  ({})  {}",
                    client.id, client.name, client.industry, client.strategist
                );
            }
        }
        ClientCommands::Add {
            name,
            industry,
            goals,
            strategist,
        } => {
            let client = service.create(ClientDraft {
                name,
                industry,
                goals,
                strategist,
            })?;
            println!("created client {}", client.id);
        }
        ClientCommands::Delete { id } => {
            let client = service.delete(RecordId(id))?;
            println!("deleted client {} ({})", client.id, client.name);
        }
    }
    Ok(())
}

fn projects(command: ProjectCommands, ctx: ServiceContext<'_>) -> CommandResult {
    let service = ProjectService::new(ctx);
    match command {
        ProjectCommands::List => {
            for project in service.list()? {
                println!(
                    "{:>14}  {:<11}  {}  [{}]  due {}",
                    project.id,
                    project.status,
                    project.title,
                    service.client_name(&project)?,
                    project.due_date
                );
            }
        }
        ProjectCommands::Add {
            title,
            client,
            status,
            due,
            assigned_to,
            description,
        } => {
            let project = service.create(ProjectDraft {
                title,
                client_id: foreign_key(client),
                status,
                due_date: due,
                assigned_to,
                description,
            })?;
            println!("created project {}", project.id);
        }
        ProjectCommands::Delete { id } => {
            let project = service.delete(RecordId(id))?;
            println!("deleted project {} ({})", project.id, project.title);
        }
    }
    Ok(())
}

fn users(command: UserCommands, ctx: ServiceContext<'_>) -> CommandResult {
    let service = UserService::new(ctx);
    match command {
        UserCommands::List => {
            for user in service.list()? {
                println!(
                    "{:>14}  {:<10}  {}  <{}>",
                    user.id, user.role, user.name, user.email
                );
            }
        }
        UserCommands::Add {
            name,
            email,
            password,
            role,
        } => {
            let user = service.create(UserDraft {
                name,
                email,
                password,
                role,
            })?;
            println!("created user {}", user.id);
        }
        UserCommands::Delete { id } => {
            let user = service.delete(RecordId(id))?;
            println!("deleted user {} ({})", user.id, user.name);
        }
    }
    Ok(())
}

/// Numeric input is stored as a number, anything else as typed.
fn foreign_key(raw: String) -> ForeignKey {
    match raw.trim().parse::<i64>() {
        Ok(value) => ForeignKey::Number(value),
        Err(_) => ForeignKey::Text(raw),
    }
}

fn print_breakdown(title: &str, entries: &[LabeledCount]) {
    println!("{title}:");
    for entry in entries {
        println!("  {:<12} {}", entry.label, entry.count);
    }
}
