//! Dashboard figures derived from the entity stores.

use super::{ServiceContext, ServiceError, ServiceResult};
use crate::model::client::Client;
use crate::model::content::{Content, ContentStatus};
use crate::model::project::{Project, ProjectStatus};
use crate::repo::EntityRepository;

/// Content types charted on the dashboard, with their labels.
const CHARTED_CONTENT_TYPES: [(&str, &str); 3] =
    [("blog", "Blog"), ("article", "Article"), ("social", "Social")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCount {
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_clients: usize,
    /// Projects in progress.
    pub active_projects: usize,
    /// Published content.
    pub completed_content: usize,
    /// Content still in draft or review.
    pub pending_content: usize,
    /// One entry per project status, in workflow order.
    pub project_status: Vec<LabeledCount>,
    pub content_types: Vec<LabeledCount>,
}

impl DashboardSummary {
    pub fn compute(clients: &[Client], projects: &[Project], content: &[Content]) -> Self {
        let projects_in =
            |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        let content_in =
            |status: ContentStatus| content.iter().filter(|c| c.status == status).count();

        Self {
            total_clients: clients.len(),
            active_projects: projects_in(ProjectStatus::InProgress),
            completed_content: content_in(ContentStatus::Published),
            pending_content: content_in(ContentStatus::Draft) + content_in(ContentStatus::Review),
            project_status: ProjectStatus::ALL
                .into_iter()
                .map(|status| LabeledCount {
                    label: status.label(),
                    count: projects_in(status),
                })
                .collect(),
            content_types: CHARTED_CONTENT_TYPES
                .into_iter()
                .map(|(kind, label)| LabeledCount {
                    label,
                    count: content.iter().filter(|c| c.kind == kind).count(),
                })
                .collect(),
        }
    }
}

pub struct DashboardService<'s> {
    ctx: ServiceContext<'s>,
}

impl<'s> DashboardService<'s> {
    pub fn new(ctx: ServiceContext<'s>) -> Self {
        Self { ctx }
    }

    /// Agency-wide figures; not narrowed by role, but requires a session.
    pub fn summary(&self) -> ServiceResult<DashboardSummary> {
        if self.ctx.actor()?.is_none() {
            return Err(ServiceError::NotAuthenticated);
        }
        Ok(DashboardSummary::compute(
            &self.ctx.repo::<Client>().list()?,
            &self.ctx.repo::<Project>().list()?,
            &self.ctx.repo::<Content>().list()?,
        ))
    }
}
