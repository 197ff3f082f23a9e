//! Task use-cases: tabbed lists, assignment-scoped edits, stats.

use super::context::denied;
use super::{ServiceContext, ServiceResult, NO_PROJECT};
use crate::model::ids::RecordId;
use crate::model::project::Project;
use crate::model::role::Role;
use crate::model::task::{Task, TaskDraft, TaskStatus};
use crate::model::validate::{optional_date, require_text, ValidationError};
use crate::policy::task::{
    can_change_task_status, can_delete_task, can_edit_task, can_view_task, task_permissions,
};
use crate::policy::RecordPermissions;
use crate::repo::EntityRepository;
use chrono::NaiveDate;
use log::info;
use std::str::FromStr;

/// Tabs of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskFilter {
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.status == TaskStatus::Pending,
            Self::InProgress => task.status == TaskStatus::InProgress,
            Self::Completed => task.status == TaskStatus::Completed,
            Self::Overdue => task.is_overdue(today),
        }
    }
}

impl FromStr for TaskFilter {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            other => Err(ValidationError::UnknownValue {
                field: "task filter",
                value: other.to_string(),
            }),
        }
    }
}

/// Counters shown above the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            if task.is_overdue(today) {
                stats.overdue += 1;
            }
            stats
        })
    }
}

pub struct TaskService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> TaskService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    pub fn list_visible(&self, filter: TaskFilter) -> ServiceResult<Vec<Task>> {
        let actor = self.ctx.actor()?;
        let today = self.ctx.clock().today();
        Ok(self
            .ctx
            .repo::<Task>()
            .list()?
            .into_iter()
            .filter(|task| can_view_task(actor.as_ref(), task))
            .filter(|task| filter.matches(task, today))
            .collect())
    }

    /// Any signed-in user may create and assign a task.
    pub fn create(&self, draft: TaskDraft) -> ServiceResult<Task> {
        if self.ctx.actor()?.is_none() {
            return Err(denied("create task"));
        }
        validate(&draft)?;

        let repo = self.ctx.repo::<Task>();
        let existing = repo.list()?;
        let today = self.ctx.clock().today_iso();
        let task = Task {
            id: self.ctx.next_id(&existing),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            assigned_to: draft.assigned_to,
            project_id: draft.project_id,
            due_date: draft.due_date,
            kind: draft.kind,
            created_at: today.clone(),
            updated_at: Some(today),
        };
        repo.insert(&task)?;
        info!(
            "event=task_create module=service status=ok id={} type={}",
            task.id, task.kind
        );
        Ok(task)
    }

    pub fn update(&self, id: RecordId, draft: TaskDraft) -> ServiceResult<Task> {
        let mut task: Task = self.ctx.load(id)?;
        if !can_edit_task(self.ctx.actor()?.as_ref(), &task) {
            return Err(denied("edit task"));
        }
        validate(&draft)?;

        task.apply(draft);
        task.updated_at = Some(self.ctx.clock().today_iso());
        self.ctx.repo::<Task>().update(&task)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(task)
    }

    pub fn change_status(&self, id: RecordId, status: TaskStatus) -> ServiceResult<Task> {
        let mut task: Task = self.ctx.load(id)?;
        if !can_change_task_status(self.ctx.actor()?.as_ref(), &task) {
            return Err(denied("change task status"));
        }

        task.status = status;
        task.updated_at = Some(self.ctx.clock().today_iso());
        self.ctx.repo::<Task>().update(&task)?;
        info!(
            "event=task_status module=service status=ok id={} to={}",
            id,
            status.as_str()
        );
        Ok(task)
    }

    pub fn delete(&self, id: RecordId) -> ServiceResult<Task> {
        let task: Task = self.ctx.load(id)?;
        if !can_delete_task(self.ctx.actor()?.as_ref(), &task) {
            return Err(denied("delete task"));
        }
        let removed = self.ctx.repo::<Task>().remove(id)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(removed)
    }

    /// Admins count every task; everyone else counts what they can see.
    pub fn stats(&self) -> ServiceResult<TaskStats> {
        let actor = self.ctx.actor()?;
        let today = self.ctx.clock().today();
        let tasks = self.ctx.repo::<Task>().list()?;
        let counted = tasks.iter().filter(|task| match &actor {
            Some(actor) if actor.role == Role::Admin => true,
            _ => can_view_task(actor.as_ref(), task),
        });
        Ok(TaskStats::from_tasks(counted, today))
    }

    pub fn permissions(&self, task: &Task) -> ServiceResult<RecordPermissions> {
        Ok(task_permissions(self.ctx.actor()?.as_ref(), task))
    }

    /// Title of the referenced project. Only numeric references resolve;
    /// a reference saved as text shows as "No Project".
    pub fn project_title(&self, task: &Task) -> ServiceResult<String> {
        let projects = self.ctx.repo::<Project>().list()?;
        Ok(projects
            .into_iter()
            .find(|project| task.project_id.strict_eq(project.id))
            .map_or_else(|| NO_PROJECT.to_string(), |project| project.title))
    }
}

fn validate(draft: &TaskDraft) -> Result<(), ValidationError> {
    require_text("title", &draft.title)?;
    optional_date("dueDate", &draft.due_date)
}
