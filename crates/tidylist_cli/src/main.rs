//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tidylist_core` wiring end to
//!   end: seed, create, toggle, list.
//! - Keep output deterministic for quick local sanity checks.

use tidylist_core::{MemoryTodoRepository, TodoRequest, TodoService};

fn main() {
    println!("tidylist_core ping={}", tidylist_core::ping());
    println!("tidylist_core version={}", tidylist_core::core_version());

    let service = TodoService::new(MemoryTodoRepository::new());

    let created = match service.create_todo(&TodoRequest {
        text: "try tidylist".to_string(),
        user_id: 1,
        completed: false,
    }) {
        Ok(todo) => todo,
        Err(err) => {
            eprintln!("create failed: {err}");
            std::process::exit(1);
        }
    };
    println!("created id={} text={} by={}", created.id, created.text, created.created_by);

    match service.toggle_todo(created.id) {
        Ok(toggled) => println!("toggled id={} completed={}", toggled.id, toggled.completed),
        Err(err) => {
            eprintln!("toggle failed: {err}");
            std::process::exit(1);
        }
    }

    for todo in service.get_all_todos() {
        println!("todo id={} completed={} text={}", todo.id, todo.completed, todo.text);
    }
}
