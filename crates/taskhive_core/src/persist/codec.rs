//! Line codec for the legacy pipe-delimited record format.
//!
//! # Responsibility
//! - Produce and parse the exact byte layout the legacy files use.
//!
//! # Invariants
//! - User records: `username|password`; the split is on the first `|`, so a
//!   password may itself contain `|` but a username may not.
//! - Task records: `id|title|category|assigned_to|completed(0|1)|`
//!   `priority(1|2|3)|is_shared(0|1)|created_at(unix secs)`; at least 8
//!   fields are required and the first 8 are consumed, matching the legacy
//!   parser.

use crate::model::task::{Priority, Task};
use crate::model::user::User;

use super::{RecordError, RecordResult};

const TASK_FIELDS: usize = 8;

pub fn encode_user(user: &User) -> String {
    format!("{}|{}", user.username, user.password)
}

pub fn decode_user(line: &str) -> RecordResult<User> {
    let (username, password) = line.split_once('|').ok_or(RecordError::MissingFields {
        expected: 2,
        found: 1,
    })?;
    Ok(User::new(username, password))
}

pub fn encode_task(task: &Task) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}|{}|{}",
        task.id,
        task.title,
        task.category,
        task.assigned_to,
        flag(task.completed),
        task.priority.as_value(),
        flag(task.is_shared),
        task.created_at,
    )
}

pub fn decode_task(line: &str) -> RecordResult<Task> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < TASK_FIELDS {
        return Err(RecordError::MissingFields {
            expected: TASK_FIELDS,
            found: parts.len(),
        });
    }

    let priority_value = parse_int("priority", parts[5])?;
    Ok(Task {
        id: parse_int("id", parts[0])?,
        title: parts[1].to_owned(),
        category: parts[2].to_owned(),
        assigned_to: parts[3].to_owned(),
        completed: parse_flag("completed", parts[4])?,
        priority: Priority::from_value(priority_value).ok_or(RecordError::InvalidPriority {
            value: priority_value,
        })?,
        is_shared: parse_flag("is_shared", parts[6])?,
        created_at: parse_int("created_at", parts[7])?,
    })
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn parse_int(field: &'static str, value: &str) -> RecordResult<i64> {
    value.parse().map_err(|_| RecordError::InvalidInt {
        field,
        value: value.to_owned(),
    })
}

fn parse_flag(field: &'static str, value: &str) -> RecordResult<bool> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(RecordError::InvalidFlag {
            field,
            value: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_task, decode_user, encode_task, encode_user};
    use crate::model::task::{Priority, Task};
    use crate::model::user::User;
    use crate::persist::RecordError;

    fn sample_task() -> Task {
        Task {
            id: 7,
            title: "Buy milk".to_string(),
            category: "errand".to_string(),
            assigned_to: "alice".to_string(),
            completed: true,
            priority: Priority::High,
            is_shared: false,
            created_at: 1_756_000_000,
        }
    }

    #[test]
    fn task_encoding_matches_legacy_layout() {
        assert_eq!(
            encode_task(&sample_task()),
            "7|Buy milk|errand|alice|1|3|0|1756000000"
        );
    }

    #[test]
    fn task_roundtrip_preserves_every_field() {
        let task = sample_task();
        assert_eq!(decode_task(&encode_task(&task)).unwrap(), task);
    }

    #[test]
    fn task_decode_rejects_short_and_malformed_lines() {
        assert_eq!(
            decode_task("1|only|five|fields|here"),
            Err(RecordError::MissingFields {
                expected: 8,
                found: 5
            })
        );
        assert_eq!(
            decode_task("x|t|c|a|0|1|0|100"),
            Err(RecordError::InvalidInt {
                field: "id",
                value: "x".to_string()
            })
        );
        assert_eq!(
            decode_task("1|t|c|a|2|1|0|100"),
            Err(RecordError::InvalidFlag {
                field: "completed",
                value: "2".to_string()
            })
        );
        assert_eq!(
            decode_task("1|t|c|a|0|9|0|100"),
            Err(RecordError::InvalidPriority { value: 9 })
        );
    }

    #[test]
    fn user_roundtrip_and_first_delimiter_split() {
        let user = User::new("alice", "pw1");
        assert_eq!(encode_user(&user), "alice|pw1");
        assert_eq!(decode_user("alice|pw1").unwrap(), user);

        // Password keeps any later delimiters; username cannot contain one.
        let decoded = decode_user("bob|p|w").unwrap();
        assert_eq!(decoded.username, "bob");
        assert_eq!(decoded.password, "p|w");

        assert_eq!(
            decode_user("nodelimiter"),
            Err(RecordError::MissingFields {
                expected: 2,
                found: 1
            })
        );
    }
}
