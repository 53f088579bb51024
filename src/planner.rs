//! Glue between a task store and the week layout

use chrono::{Datelike, NaiveDate};

use crate::error::{PlannerError, StoreError, ValidationError};
use crate::task::{DayOfWeek, Task, TaskDraft, TaskId, TaskPatch, TaskType};
use crate::traits::TaskStore;
use crate::week::WeekModel;

/// The longest title the backend accepts
pub const TITLE_MAX_LENGTH: usize = 200;

/// What the task-editing form holds before it is submitted
#[derive(Clone, Debug, Default)]
pub struct TaskForm {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time_slot: String,
    pub task_type: Option<TaskType>,
    pub description: Option<String>,
    pub completed: bool,
}

impl TaskForm {
    /// Pre-fill a form from an existing task, resolving its weekday to the
    /// concrete date it falls on within the displayed week
    pub fn from_task(task: &Task, week: &WeekModel) -> Self {
        Self {
            title: task.title().to_string(),
            date: Some(week.date_of(task.day_of_week())),
            time_slot: task.time_slot().to_string(),
            task_type: Some(task.task_type()),
            description: task.description().map(|d| d.to_string()),
            completed: task.completed(),
        }
    }

    /// Check the form, collecting every violation instead of stopping at the first
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            violations.push(ValidationError::MissingTitle);
        } else if title.chars().count() > TITLE_MAX_LENGTH {
            violations.push(ValidationError::TitleTooLong(TITLE_MAX_LENGTH));
        }
        if self.date.is_none() {
            violations.push(ValidationError::MissingDate);
        }
        if self.task_type.is_none() {
            violations.push(ValidationError::MissingTaskType);
        }
        violations
    }

    /// Turn the form into a create payload, or reject it with every violation found
    pub fn to_draft(&self) -> Result<TaskDraft, PlannerError> {
        let violations = self.validate();
        if violations.is_empty() == false {
            return Err(PlannerError::Invalid(violations));
        }

        let date = self.date.unwrap(/* validate() just checked this is set */);
        let task_type = self.task_type.unwrap(/* same */);
        Ok(TaskDraft {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            day_of_week: DayOfWeek::from(date.weekday()),
            time_slot: self.time_slot.clone(),
            task_type,
            completed: self.completed,
        })
    }

    /// Turn the form into an update payload covering every field, or reject it.
    /// A form without a description leaves the stored description untouched.
    pub fn to_patch(&self) -> Result<TaskPatch, PlannerError> {
        let draft = self.to_draft()?;
        Ok(TaskPatch {
            title: Some(draft.title),
            description: draft.description,
            day_of_week: Some(draft.day_of_week),
            time_slot: Some(draft.time_slot),
            task_type: Some(draft.task_type),
            completed: Some(draft.completed),
        })
    }
}

/// Drives a task store and keeps a week view in sync with it.
///
/// Every mutation round-trips to the store, then the whole week is fetched
/// again and rebuilt from scratch; nothing is patched in place. Two overlapping
/// mutations are last-write-wins, which is acceptable at this scale.
pub struct Planner<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> Planner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch every task and lay out the week around `today`
    pub async fn refresh(&self, today: NaiveDate) -> Result<WeekModel, StoreError> {
        let tasks = self.store.get_tasks().await?;
        Ok(WeekModel::build(today, tasks))
    }

    /// Validate and create a new task, then rebuild the week.
    ///
    /// A rejected form never reaches the store.
    pub async fn submit_new(&self, form: &TaskForm, today: NaiveDate) -> Result<WeekModel, PlannerError> {
        let draft = form.to_draft()?;
        self.store.create_task(draft).await?;
        Ok(self.refresh(today).await?)
    }

    /// Validate and apply an edit to an existing task, then rebuild the week
    pub async fn submit_edit(&self, id: TaskId, form: &TaskForm, today: NaiveDate) -> Result<WeekModel, PlannerError> {
        let patch = form.to_patch()?;
        self.store.update_task(id, patch).await?;
        Ok(self.refresh(today).await?)
    }

    /// Flip the completion flag of a task, then rebuild the week
    pub async fn set_completed(&self, id: TaskId, completed: bool, today: NaiveDate) -> Result<WeekModel, PlannerError> {
        self.store.update_task(id, TaskPatch::completion(completed)).await?;
        Ok(self.refresh(today).await?)
    }

    /// Delete a task, best effort: a failed delete is logged and dropped, and
    /// the week is rebuilt either way, so a confirmation dialog can always
    /// close. A failed re-fetch still propagates.
    pub async fn delete(&self, id: TaskId, today: NaiveDate) -> Result<WeekModel, StoreError> {
        if let Err(err) = self.store.delete_task(id).await {
            log::warn!("Could not delete task {}: {}", id, err);
        }
        self.refresh(today).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_form() -> TaskForm {
        TaskForm {
            title: "Dentist".to_string(),
            date: Some(date(2025, 6, 11)),
            time_slot: "12:00 PM".to_string(),
            task_type: Some(TaskType::Personal),
            description: None,
            completed: false,
        }
    }

    #[test]
    fn an_empty_form_reports_every_violation_at_once() {
        let violations = TaskForm::default().validate();
        assert_eq!(violations, vec![
            ValidationError::MissingTitle,
            ValidationError::MissingDate,
            ValidationError::MissingTaskType,
        ]);
    }

    #[test]
    fn a_whitespace_only_title_is_still_missing() {
        let form = TaskForm { title: "   ".to_string(), ..filled_form() };
        let violations = form.validate();
        assert_eq!(violations, vec![ValidationError::MissingTitle]);
        assert!(violations[0].to_string().contains("Title is required"));
    }

    #[test]
    fn an_overlong_title_is_rejected() {
        let form = TaskForm { title: "x".repeat(TITLE_MAX_LENGTH + 1), ..filled_form() };
        assert_eq!(form.validate(), vec![ValidationError::TitleTooLong(TITLE_MAX_LENGTH)]);
    }

    #[test]
    fn a_filled_form_passes_and_maps_its_date_to_a_weekday() {
        let form = filled_form();
        assert!(form.validate().is_empty());

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.day_of_week, DayOfWeek::Wednesday); // 2025-06-11
        assert_eq!(draft.title, "Dentist");
    }

    #[test]
    fn titles_are_trimmed_on_the_way_out() {
        let form = TaskForm { title: "  Dentist  ".to_string(), ..filled_form() };
        assert_eq!(form.to_draft().unwrap().title, "Dentist");
    }

    #[test]
    fn from_task_prefills_the_date_of_the_displayed_week() {
        let draft = TaskDraft {
            title: "Stand-up".to_string(),
            description: Some("daily".to_string()),
            day_of_week: DayOfWeek::Friday,
            time_slot: "09:30 AM".to_string(),
            task_type: TaskType::Work,
            completed: true,
        };
        let task = Task::new_with_parameters(4, draft, "t0".to_string(), "t0".to_string());
        let week = WeekModel::new(date(2025, 6, 11));

        let form = TaskForm::from_task(&task, &week);
        assert_eq!(form.date, Some(date(2025, 6, 13))); // the Friday of that week
        assert_eq!(form.title, "Stand-up");
        assert_eq!(form.task_type, Some(TaskType::Work));
        assert!(form.completed);
        assert!(form.validate().is_empty());
    }
}
