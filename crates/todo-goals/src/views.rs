//! Renderer
//!
//! Full repaint of both lists from a state snapshot. No diffing: every call
//! writes everything.

use std::io::{self, Write};

use todo_goals::AppState;
use todo_goals_config::AppConfig;

pub fn render<W: Write>(out: &mut W, state: &AppState, config: &AppConfig) -> io::Result<()> {
    writeln!(out, "Todos:")?;
    if state.todos.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (index, todo) in state.todos.iter().enumerate() {
        let marker = if todo.completed {
            &config.done_marker
        } else {
            &config.open_marker
        };
        writeln!(out, "  {}. {} {}", index + 1, marker, todo.name)?;
    }

    writeln!(out, "Goals:")?;
    if state.goals.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (index, goal) in state.goals.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, goal.name)?;
    }

    if config.show_summary && !state.todos.is_empty() {
        writeln!(
            out,
            "{} of {} todos done",
            state.completed_todos(),
            state.todos.len()
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;
    use todo_goals::{Goal, Todo};

    fn rendered(state: &AppState, config: &AppConfig) -> String {
        let mut out = Vec::new();
        render(&mut out, state, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_empty_state() {
        assert_eq!(
            rendered(&AppState::default(), &AppConfig::default()),
            "Todos:\n  (none)\nGoals:\n  (none)\n"
        );
    }

    #[test]
    fn test_render_lists_with_markers_and_summary() {
        let mut done = Todo::new("2", "Walk dog");
        done.completed = true;
        let state = AppState {
            todos: Rc::new(vec![Rc::new(Todo::new("1", "Buy milk")), Rc::new(done)]),
            goals: Rc::new(vec![Rc::new(Goal::new("g1", "Learn Rust"))]),
        };

        assert_eq!(
            rendered(&state, &AppConfig::default()),
            "Todos:\n  1. [ ] Buy milk\n  2. [x] Walk dog\nGoals:\n  1. Learn Rust\n1 of 2 todos done\n"
        );
    }

    #[test]
    fn test_render_respects_config() {
        let state = AppState {
            todos: Rc::new(vec![Rc::new(Todo::new("1", "Buy milk"))]),
            goals: Rc::default(),
        };
        let config = AppConfig {
            open_marker: "-".to_string(),
            show_summary: false,
            ..AppConfig::default()
        };

        assert_eq!(
            rendered(&state, &config),
            "Todos:\n  1. - Buy milk\nGoals:\n  (none)\n"
        );
    }
}
