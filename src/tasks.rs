use crate::calendar::{holiday_on, holidays_in_month, Holiday};
use crate::errors::ValidationError;
use crate::models::{new_id, Priority, Task, TaskType};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_TYPE_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Overdue,
    Pending,
    Completed,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub task_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewTaskType {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DayTasks {
    pub date: NaiveDate,
    pub overdue: Vec<Task>,
    pub pending: Vec<Task>,
    pub completed: Vec<Task>,
    pub completed_count: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStats {
    pub completed_today: usize,
    pub pending: usize,
    pub high_priority: usize,
    pub overdue: usize,
}

#[derive(Debug, Serialize)]
pub struct CalendarTask {
    pub task: Task,
    pub task_type: Option<TaskType>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub holiday: Option<Holiday>,
    pub tasks: Vec<CalendarTask>,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub holidays: Vec<Holiday>,
    pub task_dates: Vec<NaiveDate>,
}

/// Overdue only when still open and due strictly before today.
pub fn classify(task: &Task, today: NaiveDate) -> TaskStatus {
    if task.completed {
        TaskStatus::Completed
    } else if task.due_date < today {
        TaskStatus::Overdue
    } else {
        TaskStatus::Pending
    }
}

pub fn create_task(
    tasks: &mut Vec<Task>,
    input: NewTask,
    now: DateTime<Local>,
) -> Result<Task, ValidationError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(ValidationError::Empty("title"));
    }

    let task = Task {
        id: new_id(),
        title: title.to_string(),
        completed: false,
        priority: input.priority.unwrap_or_default(),
        created_at: now,
        due_date: input.due_date.unwrap_or_else(|| now.date_naive()),
        task_type: input.task_type.filter(|id| !id.trim().is_empty()),
    };
    tasks.insert(0, task.clone());
    Ok(task)
}

pub fn toggle_task(tasks: &mut [Task], id: &str) -> Option<Task> {
    let task = tasks.iter_mut().find(|task| task.id == id)?;
    task.completed = !task.completed;
    Some(task.clone())
}

pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

pub fn add_task_type(
    types: &mut Vec<TaskType>,
    input: NewTaskType,
) -> Result<TaskType, ValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty("name"));
    }
    let color = input
        .color
        .map(|color| color.trim().to_string())
        .filter(|color| !color.is_empty())
        .unwrap_or_else(|| DEFAULT_TYPE_COLOR.to_string());

    let task_type = TaskType {
        id: new_id(),
        name: name.to_string(),
        color,
    };
    types.push(task_type.clone());
    Ok(task_type)
}

/// Tasks keep pointing at the removed type; lookups treat that as untyped.
pub fn delete_task_type(types: &mut Vec<TaskType>, id: &str) -> bool {
    let before = types.len();
    types.retain(|task_type| task_type.id != id);
    types.len() != before
}

pub fn resolve_type<'a>(types: &'a [TaskType], task: &Task) -> Option<&'a TaskType> {
    let id = task.task_type.as_deref()?;
    types.iter().find(|task_type| task_type.id == id)
}

pub fn day_view(tasks: &[Task], date: NaiveDate, today: NaiveDate) -> DayTasks {
    let mut view = DayTasks {
        date,
        overdue: Vec::new(),
        pending: Vec::new(),
        completed: Vec::new(),
        completed_count: 0,
        total: 0,
    };

    for task in tasks.iter().filter(|task| task.due_date == date) {
        view.total += 1;
        match classify(task, today) {
            TaskStatus::Overdue => view.overdue.push(task.clone()),
            TaskStatus::Pending => view.pending.push(task.clone()),
            TaskStatus::Completed => view.completed.push(task.clone()),
        }
    }
    view.completed_count = view.completed.len();
    view
}

pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let mut stats = TaskStats {
        completed_today: 0,
        pending: 0,
        high_priority: 0,
        overdue: 0,
    };

    for task in tasks {
        match classify(task, today) {
            TaskStatus::Completed if task.due_date == today => stats.completed_today += 1,
            TaskStatus::Completed => {}
            TaskStatus::Overdue => stats.overdue += 1,
            TaskStatus::Pending => stats.pending += 1,
        }
        if task.priority == Priority::High && !task.completed {
            stats.high_priority += 1;
        }
    }
    stats
}

pub fn overdue_count(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| classify(task, today) == TaskStatus::Overdue)
        .count()
}

pub fn calendar_day(tasks: &[Task], types: &[TaskType], date: NaiveDate) -> CalendarDay {
    let tasks = tasks
        .iter()
        .filter(|task| task.due_date == date)
        .map(|task| CalendarTask {
            task: task.clone(),
            task_type: resolve_type(types, task).cloned(),
        })
        .collect();

    CalendarDay {
        date,
        holiday: holiday_on(date),
        tasks,
    }
}

pub fn calendar_month(tasks: &[Task], year: i32, month: u32) -> CalendarMonth {
    let task_dates: BTreeSet<NaiveDate> = tasks
        .iter()
        .map(|task| task.due_date)
        .filter(|date| date.year() == year && date.month() == month)
        .collect();

    CalendarMonth {
        year,
        month,
        holidays: holidays_in_month(year, month),
        task_dates: task_dates.into_iter().collect(),
    }
}
