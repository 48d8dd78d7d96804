//! Task enrichment and status partitioning.
//!
//! # Responsibility
//! - Attach the resolved definition, category and XP reward to raw tasks.
//! - Split enriched tasks into the dashboard's open/completed-today buckets.
//!
//! # Invariants
//! - Enrichment is O(1) per task given prebuilt indices.
//! - Partition outputs preserve input order.
//! - Canceled tasks and tasks done on another day land in neither bucket.

use crate::derive::lookup::{resolve, RecordIndex};
use crate::derive::reward::xp_reward;
use crate::model::calendar::CalendarDay;
use crate::model::record::{Category, CategoryFields, Task, TaskDefinition, TaskDefinitionFields, TaskStatus};
use serde::Serialize;

/// A task with its resolved references and computed XP reward.
///
/// Owns clones of the resolved records so the view-model has no lifetime
/// ties back into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTask {
    pub task: Task,
    pub definition: Option<TaskDefinition>,
    pub category: Option<Category>,
    /// Always concrete, even when no definition or category resolves.
    pub xp_reward: f64,
}

/// Result of [`partition_by_status`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskPartition {
    /// Tasks with status `open`, in input order.
    pub open: Vec<EnrichedTask>,
    /// Tasks done on the evaluation day, in input order.
    pub completed_today: Vec<EnrichedTask>,
}

/// Enriches one raw task against prebuilt definition/category indices.
///
/// The definition resolves through the task's `task_definition_id`
/// reference; the category resolves through the definition's
/// `category_id`. Either lookup may come up empty without error.
pub fn enrich_task(
    task: &Task,
    definitions: &RecordIndex<'_, TaskDefinitionFields>,
    categories: &RecordIndex<'_, CategoryFields>,
) -> EnrichedTask {
    let definition = resolve(task.fields.task_definition_id.as_deref(), definitions);
    let category = definition
        .and_then(|def| resolve(def.fields.category_id.as_deref(), categories));
    let xp_reward = xp_reward(definition, category);

    EnrichedTask {
        task: task.clone(),
        definition: definition.cloned(),
        category: category.cloned(),
        xp_reward,
    }
}

/// Partitions enriched tasks into open and completed-today buckets.
///
/// `completed_today` matches `status == done` with a `completed_at` whose
/// calendar-day prefix equals the evaluation day. Any other status, or a
/// completion on a different day, appears in neither bucket.
pub fn partition_by_status(tasks: Vec<EnrichedTask>, today: CalendarDay) -> TaskPartition {
    let today_prefix = today.to_string();
    let mut partition = TaskPartition::default();

    for task in tasks {
        match task.task.fields.status {
            Some(TaskStatus::Open) => partition.open.push(task),
            Some(TaskStatus::Done) => {
                let done_today = task
                    .task
                    .fields
                    .completed_at
                    .as_deref()
                    .is_some_and(|at| at.starts_with(&today_prefix));
                if done_today {
                    partition.completed_today.push(task);
                }
            }
            _ => {}
        }
    }

    partition
}
