use async_trait::async_trait;

use crate::error::StoreError;
use crate::task::{Task, TaskDraft, TaskId, TaskPatch};

/// The CRUD surface of a task store.
///
/// Implemented by the remote [`Client`](crate::client::Client) and by the
/// in-memory [`MemoryStore`](crate::memory::MemoryStore), so that the
/// [`Planner`](crate::planner::Planner) and the tests can drive either one.
///
/// Every operation is a single-shot request: no retry, no backoff, no
/// streaming. Failures come back as a [`StoreError`] instead of being
/// swallowed.
#[async_trait]
pub trait TaskStore {
    /// Every stored task, ordered by weekday then time slot
    async fn get_tasks(&self) -> Result<Vec<Task>, StoreError>;

    /// Persist a new task. The store assigns the id and both timestamps
    async fn create_task(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Merge the set fields of `patch` into an existing task
    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, StoreError>;

    /// Delete a task. Returns nothing on success
    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError>;
}
