///! Some utility functions

use crate::task::Task;
use crate::week::WeekModel;

/// A debug utility that pretty-prints a week and the tasks in its day buckets
pub fn print_week(week: &WeekModel) {
    println!("{}", week.title());
    for day in week.days() {
        println!("  {} ({})", day.day_name(), day.date_string());
        for task in day.tasks() {
            print_task(task);
        }
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} [{}] {}\t{}", completion, task.task_type(), task.time_slot(), task.title());
}
