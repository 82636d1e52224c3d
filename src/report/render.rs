use chrono::{DateTime, Local};

use crate::models::{CorrelatedUser, Task};

// Titles longer than this are cut and suffixed with an ellipsis.
const MAX_TITLE_LEN: usize = 46;

const NO_UNCOMPLETED_TASKS: &str = "Актуальные задачи отсутствуют";
// Historical reports spell this placeholder with "е", unlike the section
// header above it. Changing either would make every existing report on disk
// compare as changed, so both stay byte-exact.
const NO_COMPLETED_TASKS: &str = "Завершенные задачи отсутствуют";

/// Renders the canonical report text for one user.
///
/// Two renders of the same correlated data differ only in the embedded
/// timestamp substring; the reconciler relies on that to detect real content
/// changes.
pub fn render(user: &CorrelatedUser, now: DateTime<Local>) -> String {
    format!(
        "# Отчёт для {company}.\n\
         {name} <{email}> {timestamp}\n\
         Всего задач: {total}\n\
         \n\
         ## Актуальные задачи ({uncompleted_count}):\n\
         {uncompleted}\n\
         \n\
         ## Завершённые задачи ({completed_count}):\n\
         {completed}",
        company = user.user.company.name,
        name = user.user.name,
        email = user.user.email,
        timestamp = now.format("%d.%m.%Y %H:%M"),
        total = user.total_tasks(),
        uncompleted_count = user.uncompleted.len(),
        uncompleted = section_body(&user.uncompleted, NO_UNCOMPLETED_TASKS),
        completed_count = user.completed.len(),
        completed = section_body(&user.completed, NO_COMPLETED_TASKS),
    )
}

fn section_body(tasks: &[Task], placeholder: &str) -> String {
    if tasks.is_empty() {
        return placeholder.to_string();
    }

    tasks
        .iter()
        .map(|task| format!("- {}", truncated_title(&task.title)))
        .collect::<Vec<_>>()
        .join("\n")
}

// Counted in characters, not bytes: titles are frequently Cyrillic and a
// byte cut could land inside a code point.
fn truncated_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LEN {
        let cut: String = title.chars().take(MAX_TITLE_LEN).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}
