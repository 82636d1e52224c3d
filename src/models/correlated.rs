use super::{Task, User};

// Per-user view of the task list. Rebuilt from scratch on every run and
// never persisted; the only persisted form is the rendered report text.
#[derive(Debug, Clone)]
pub struct CorrelatedUser {
    pub user: User,
    pub completed: Vec<Task>,
    pub uncompleted: Vec<Task>,
}

impl CorrelatedUser {
    pub fn total_tasks(&self) -> usize {
        self.completed.len() + self.uncompleted.len()
    }
}
