//! ListTodosHandler - Query handler for filtered todo listings.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{Priority, Timestamp};
use crate::domain::todo::{Todo, TodoError};
use crate::ports::TodoRepository;

/// Which todos a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    ByPriority(Priority),
    Completed,
    Pending,
    /// Active todos whose due date has passed.
    Overdue,
}

/// Query to list todos.
#[derive(Debug, Clone, Default)]
pub struct ListTodosQuery {
    pub filter: TodoFilter,
}

impl ListTodosQuery {
    pub fn new(filter: TodoFilter) -> Self {
        Self { filter }
    }
}

/// Handler for listing todos.
pub struct ListTodosHandler {
    repository: Arc<dyn TodoRepository>,
}

impl ListTodosHandler {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListTodosQuery) -> Result<Vec<Todo>, TodoError> {
        let todos = match query.filter {
            TodoFilter::All => self.repository.find_all().await?,
            TodoFilter::ByPriority(priority) => self.repository.find_by_priority(priority).await?,
            TodoFilter::Completed => self.repository.find_completed().await?,
            TodoFilter::Pending => self.repository.find_pending().await?,
            TodoFilter::Overdue => {
                let now = Timestamp::now();
                self.repository
                    .find_pending()
                    .await?
                    .into_iter()
                    .filter(|todo| todo.is_overdue_at(&now))
                    .collect()
            }
        };

        debug!(filter = ?query.filter, count = todos.len(), "Listed todos");
        Ok(todos)
    }
}
