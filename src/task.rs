//! Tasks, as stored by the remote backend

use std::fmt::{Display, Formatter};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Task ids are assigned by the backend, never by the client
pub type TaskId = i64;

/// The weekday a task is assigned to.
///
/// Serialized with the full English day name, which is also what the backend
/// stores ("Monday", "Tuesday", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Every weekday, in week order. Day buckets rely on this order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday    => "Monday",
            DayOfWeek::Tuesday   => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday  => "Thursday",
            DayOfWeek::Friday    => "Friday",
            DayOfWeek::Saturday  => "Saturday",
            DayOfWeek::Sunday    => "Sunday",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// A closed classification attached to each task, used for display grouping
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Personal,
    Work,
    Other,
}

impl Display for TaskType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let s = match self {
            TaskType::Personal => "personal",
            TaskType::Work => "work",
            TaskType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// A task record, as returned by the backend.
///
/// `created_at` and `updated_at` are opaque server-assigned strings; this crate
/// never parses or compares them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    day_of_week: DayOfWeek,
    time_slot: String,
    task_type: TaskType,
    completed: bool,
    created_at: String,
    updated_at: String,
}

impl Task {
    /// Assemble a full task record the way the server does when it persists a draft
    pub fn new_with_parameters(id: TaskId, draft: TaskDraft, created_at: String, updated_at: String) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            day_of_week: draft.day_of_week,
            time_slot: draft.time_slot,
            task_type: draft.task_type,
            completed: draft.completed,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> TaskId                { self.id }
    pub fn title(&self) -> &str               { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn day_of_week(&self) -> DayOfWeek    { self.day_of_week }
    pub fn time_slot(&self) -> &str           { &self.time_slot }
    pub fn task_type(&self) -> TaskType       { self.task_type }
    pub fn completed(&self) -> bool           { self.completed }
    pub fn created_at(&self) -> &str          { &self.created_at }
    pub fn updated_at(&self) -> &str          { &self.updated_at }

    /// Merge the `Some` fields of a patch into this record and stamp a new
    /// update time. This is what the backend does on PATCH: absent fields are
    /// left untouched (an absent description is *not* cleared).
    pub fn merge(&mut self, patch: &TaskPatch, updated_at: String) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(day_of_week) = patch.day_of_week {
            self.day_of_week = day_of_week;
        }
        if let Some(time_slot) = &patch.time_slot {
            self.time_slot = time_slot.clone();
        }
        if let Some(task_type) = patch.task_type {
            self.task_type = task_type;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = updated_at;
    }
}

/// The body of a create request: a [`Task`] minus its server-assigned fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub day_of_week: DayOfWeek,
    pub time_slot: String,
    pub task_type: TaskType,
    pub completed: bool,
}

/// The body of an update request. `None` fields are omitted from the wire
/// entirely, and the server leaves them unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// A patch that only toggles the completion flag
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}
