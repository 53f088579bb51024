//! This module provides a task store held entirely in memory

use std::collections::HashMap;
use std::sync::Mutex;
#[cfg(feature = "memory_store_mocks_remote_store")]
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::error::StoreError;
#[cfg(feature = "memory_store_mocks_remote_store")]
use crate::mock_behaviour::MockBehaviour;
use crate::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::traits::TaskStore;

/// A [`TaskStore`] backed by nothing but memory.
///
/// It mirrors the observable behaviour of the remote backend: sequential ids
/// starting at 1, server-stamped timestamps, merge-on-patch, 404-shaped errors
/// for unknown ids, and listing ordered by weekday then time slot. That lets it
/// stand in for the remote store in tests and demos.
pub struct MemoryStore {
    data: Mutex<StoreData>,

    /// In some tests, we may want to simulate errors
    #[cfg(feature = "memory_store_mocks_remote_store")]
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

struct StoreData {
    tasks: HashMap<TaskId, Task>,
    next_id: TaskId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(StoreData {
                tasks: HashMap::new(),
                next_id: 1,
            }),
            #[cfg(feature = "memory_store_mocks_remote_store")]
            mock_behaviour: None,
        }
    }

    #[cfg(feature = "memory_store_mocks_remote_store")]
    pub fn set_mock_behaviour(&mut self, mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = mock_behaviour;
    }

    /// The timestamp format the backend stamps records with
    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn not_found(id: TaskId) -> StoreError {
        StoreError::Server {
            status: 404,
            message: format!("Task with id {} not found", id),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn get_tasks(&self) -> Result<Vec<Task>, StoreError> {
        #[cfg(feature = "memory_store_mocks_remote_store")]
        {
            if let Some(behaviour) = &self.mock_behaviour {
                behaviour.lock().unwrap().can_get_tasks()?;
            }
        }

        let data = self.data.lock().unwrap();
        let mut tasks: Vec<Task> = data.tasks.values().cloned().collect();
        // The backend lists by weekday, then time slot
        tasks.sort_by(|left, right| {
            (left.day_of_week() as u8, left.time_slot())
                .cmp(&(right.day_of_week() as u8, right.time_slot()))
        });
        Ok(tasks)
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        #[cfg(feature = "memory_store_mocks_remote_store")]
        {
            if let Some(behaviour) = &self.mock_behaviour {
                behaviour.lock().unwrap().can_create_task()?;
            }
        }

        let mut data = self.data.lock().unwrap();
        let id = data.next_id;
        data.next_id = data.next_id + 1;

        let now = Self::now();
        let task = Task::new_with_parameters(id, draft, now.clone(), now);
        data.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<Task, StoreError> {
        #[cfg(feature = "memory_store_mocks_remote_store")]
        {
            if let Some(behaviour) = &self.mock_behaviour {
                behaviour.lock().unwrap().can_update_task()?;
            }
        }

        let mut data = self.data.lock().unwrap();
        match data.tasks.get_mut(&id) {
            None => Err(Self::not_found(id)),
            Some(task) => {
                task.merge(&patch, Self::now());
                Ok(task.clone())
            }
        }
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        #[cfg(feature = "memory_store_mocks_remote_store")]
        {
            if let Some(behaviour) = &self.mock_behaviour {
                behaviour.lock().unwrap().can_delete_task()?;
            }
        }

        let mut data = self.data.lock().unwrap();
        match data.tasks.remove(&id) {
            None => Err(Self::not_found(id)),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{DayOfWeek, TaskType};

    fn draft(title: &str, day: DayOfWeek, time_slot: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: None,
            day_of_week: day,
            time_slot: time_slot.to_string(),
            task_type: TaskType::Other,
            completed: false,
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_timestamps_are_stamped() {
        let store = MemoryStore::new();
        let first = store.create_task(draft("a", DayOfWeek::Monday, "09:00 AM")).await.unwrap();
        let second = store.create_task(draft("b", DayOfWeek::Monday, "10:00 AM")).await.unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert!(first.created_at().is_empty() == false);
        assert_eq!(first.created_at(), first.updated_at());
    }

    #[tokio::test]
    async fn listing_is_ordered_by_weekday_then_time_slot() {
        let store = MemoryStore::new();
        store.create_task(draft("afternoon", DayOfWeek::Friday, "02:00 PM")).await.unwrap();
        store.create_task(draft("late", DayOfWeek::Monday, "10:00 AM")).await.unwrap();
        store.create_task(draft("early", DayOfWeek::Monday, "09:00 AM")).await.unwrap();

        let titles: Vec<String> = store.get_tasks().await.unwrap()
            .iter()
            .map(|t| t.title().to_string())
            .collect();
        assert_eq!(titles, vec!["early", "late", "afternoon"]);
    }

    #[tokio::test]
    async fn unknown_ids_give_a_404_shaped_error() {
        let store = MemoryStore::new();

        let err = store.update_task(8, TaskPatch::completion(true)).await.unwrap_err();
        assert_eq!(err.to_string(), "Server Error: 404 - Task with id 8 not found");

        let err = store.delete_task(8).await.unwrap_err();
        match err {
            StoreError::Server { status, .. } => assert_eq!(status, 404),
            other => panic!("expected a server error, got {:?}", other),
        }
    }
}
