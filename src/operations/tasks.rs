//! Core task-list operations shared between the menu loop and tests
//!
//! Each operation takes the list plus the raw user input and returns a
//! typed outcome. Printing the matching message is the caller's
//! responsibility, so every state transition here can be asserted on
//! directly without touching stdin/stdout.

/// Outcome of an add attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Task appended to the end of the list; carries the trimmed text
    Added(String),
    /// Input was empty after trimming; list unchanged
    EmptyInput,
}

/// Outcome of a remove attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Task removed; carries the removed text
    Removed { text: String },
    /// Input parsed as an integer but fell outside [1, len]; list unchanged
    OutOfRange,
    /// Input was not an integer at all; list unchanged
    NotANumber,
}

/// Append a task from raw user input.
///
/// Surrounding whitespace is trimmed; a blank line is rejected without
/// mutating the list.
pub fn add_task(tasks: &mut Vec<String>, input: &str) -> AddOutcome {
    let text = input.trim();
    if text.is_empty() {
        return AddOutcome::EmptyInput;
    }

    tasks.push(text.to_string());
    AddOutcome::Added(text.to_string())
}

/// Remove a task by its 1-based display number, given as raw user input.
///
/// Non-integer input and out-of-range numbers are distinct outcomes (they
/// carry different user-facing messages); neither touches the list.
pub fn remove_task(tasks: &mut Vec<String>, input: &str) -> RemoveOutcome {
    let number: i64 = match input.trim().parse() {
        Ok(n) => n,
        Err(_) => return RemoveOutcome::NotANumber,
    };

    if number < 1 || number as usize > tasks.len() {
        return RemoveOutcome::OutOfRange;
    }

    let text = tasks.remove(number as usize - 1);
    RemoveOutcome::Removed { text }
}

/// Format the numbered task listing (1-based, insertion order).
pub fn render_task_list(tasks: &[String]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| format!("{}. {}", idx + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_add_task() {
        let mut tasks = Vec::new();
        let outcome = add_task(&mut tasks, "Buy milk");

        assert_eq!(outcome, AddOutcome::Added("Buy milk".to_string()));
        assert_eq!(tasks, vec!["Buy milk".to_string()]);
    }

    #[test]
    fn test_add_task_trims_whitespace() {
        let mut tasks = Vec::new();
        let outcome = add_task(&mut tasks, "  Call mom  \n");

        assert_eq!(outcome, AddOutcome::Added("Call mom".to_string()));
        assert_eq!(tasks, vec!["Call mom".to_string()]);
    }

    #[test]
    fn test_add_empty_input_rejected() {
        let mut tasks = sample_tasks();

        assert_eq!(add_task(&mut tasks, ""), AddOutcome::EmptyInput);
        assert_eq!(add_task(&mut tasks, "   \t  "), AddOutcome::EmptyInput);
        assert_eq!(tasks, sample_tasks());
    }

    #[test]
    fn test_remove_middle_task() {
        let mut tasks = sample_tasks();
        let outcome = remove_task(&mut tasks, "2");

        assert_eq!(
            outcome,
            RemoveOutcome::Removed {
                text: "B".to_string()
            }
        );
        assert_eq!(tasks, vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut tasks = sample_tasks();

        assert_eq!(remove_task(&mut tasks, "0"), RemoveOutcome::OutOfRange);
        assert_eq!(remove_task(&mut tasks, "5"), RemoveOutcome::OutOfRange);
        // negative numbers parse as integers but land out of range
        assert_eq!(remove_task(&mut tasks, "-1"), RemoveOutcome::OutOfRange);
        assert_eq!(tasks, sample_tasks());
    }

    #[test]
    fn test_remove_not_a_number() {
        let mut tasks = sample_tasks();

        assert_eq!(remove_task(&mut tasks, "two"), RemoveOutcome::NotANumber);
        assert_eq!(remove_task(&mut tasks, ""), RemoveOutcome::NotANumber);
        assert_eq!(remove_task(&mut tasks, "1.5"), RemoveOutcome::NotANumber);
        assert_eq!(tasks, sample_tasks());
    }

    #[test]
    fn test_render_task_list() {
        let tasks = sample_tasks();
        assert_eq!(render_task_list(&tasks), "1. A\n2. B\n3. C");
        assert_eq!(render_task_list(&[]), "");
    }
}
