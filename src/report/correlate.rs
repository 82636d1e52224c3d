use crate::models::{CorrelatedUser, Task, User};

/// Joins every task to its owning user by `user_id` and splits each user's
/// tasks into completed and uncompleted partitions, preserving the order the
/// tasks arrived in.
///
/// Full scan per user; report-scale data never needs an index here.
pub fn correlate(users: Vec<User>, tasks: &[Task]) -> Vec<CorrelatedUser> {
    users
        .into_iter()
        .map(|user| {
            let mut completed = Vec::new();
            let mut uncompleted = Vec::new();

            for task in tasks {
                if task.user_id != user.id {
                    continue;
                }
                if task.completed {
                    completed.push(task.clone());
                } else {
                    uncompleted.push(task.clone());
                }
            }

            CorrelatedUser {
                user,
                completed,
                uncompleted,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("{}@example.com", username),
            username: username.to_string(),
            company: Company {
                name: "Acme".to_string(),
            },
        }
    }

    fn task(id: i64, user_id: i64, completed: bool) -> Task {
        Task {
            id,
            user_id,
            title: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_every_matching_task_lands_in_exactly_one_partition() {
        let users = vec![user(1, "alice")];
        let tasks = vec![
            task(10, 1, false),
            task(11, 1, true),
            task(12, 2, true),
            task(13, 1, false),
        ];

        let correlated = correlate(users, &tasks);

        assert_eq!(correlated.len(), 1);
        let alice = &correlated[0];
        assert_eq!(alice.completed.len(), 1);
        assert_eq!(alice.uncompleted.len(), 2);
        assert_eq!(alice.total_tasks(), 3);

        // Task 12 belongs to user 2 and must not appear anywhere
        assert!(alice.completed.iter().all(|t| t.user_id == 1));
        assert!(alice.uncompleted.iter().all(|t| t.user_id == 1));
    }

    #[test]
    fn test_partition_preserves_input_order() {
        let users = vec![user(1, "alice")];
        let tasks = vec![
            task(30, 1, false),
            task(10, 1, false),
            task(20, 1, false),
        ];

        let correlated = correlate(users, &tasks);

        let ids: Vec<i64> = correlated[0].uncompleted.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_user_with_no_tasks_gets_empty_partitions() {
        let users = vec![user(1, "alice"), user(2, "bob")];
        let tasks = vec![task(10, 1, true)];

        let correlated = correlate(users, &tasks);

        assert_eq!(correlated[1].user.username, "bob");
        assert!(correlated[1].completed.is_empty());
        assert!(correlated[1].uncompleted.is_empty());
    }

    #[test]
    fn test_input_tasks_are_not_mutated() {
        let users = vec![user(1, "alice")];
        let tasks = vec![task(10, 1, true)];

        let _ = correlate(users, &tasks);

        assert_eq!(tasks[0].title, "Task 10");
    }
}
