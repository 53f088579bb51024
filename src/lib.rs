//! This crate provides the building blocks of a weekly task planner.
//!
//! The [`week`] module lays out a calendar week around "today": the ISO week number, the Monday-to-Sunday boundary dates, and seven day buckets ready to receive tasks.
//!
//! Tasks live in a remote store behind a REST API, reachable through the [`Client`](client::Client) in the [`client`] module. \
//! An in-memory stand-in, [`MemoryStore`](memory::MemoryStore), mirrors the backend's observable behaviour so tests and demos do not need a server. \
//! Both implement the [`TaskStore`](traits::TaskStore) trait.
//!
//! A [`Planner`](planner::Planner) drives either store: it fetches tasks, distributes them into the day buckets, validates task forms, and round-trips every user action before rebuilding the week from scratch.

pub mod traits;

mod task;
pub use task::{DayOfWeek, Task, TaskDraft, TaskId, TaskPatch, TaskType};
pub mod week;
pub use week::{DayInfo, WeekModel};
pub mod error;
pub use error::{PlannerError, StoreError, ValidationError};
pub mod planner;
pub use planner::{Planner, TaskForm};

pub mod client;
pub mod memory;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
