//! Demonstration of the store registry with a todo-list state.
//!
//! Run with `RUST_LOG=debug` to see the registry's diagnostic traces.

use canister::StoreRegistry;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct Todo {
    id: usize,
    title: String,
    complete: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Registry Example: Todos ===\n");

    let registry = StoreRegistry::new();

    println!("1. Creating the 'todos' store");
    let todos = registry
        .create_store(
            "todos",
            vec![Todo {
                id: 0,
                title: "Buy milk".to_string(),
                complete: false,
            }],
        )
        .expect("fresh registry has no 'todos' store");

    println!("\n2. Reading state through the handle");
    for todo in todos.get_state().unwrap_or_default() {
        let status = if todo.complete { "✓" } else { " " };
        println!("   [{}] #{} {}", status, todo.id, todo.title);
    }

    println!("\n3. A second create under the same name is rejected");
    match registry.create_store("todos", Vec::new()) {
        Ok(_) => unreachable!(),
        Err(err) => println!("   error: {err}"),
    }

    println!("\n4. Looking the store up again elsewhere in the program");
    let again = registry.get_store("todos").expect("store exists");
    println!("   '{}' has {} item(s)", again.name(), again.get_state().map_or(0, |s| s.len()));

    println!("\n5. Destroying the store returns its final state");
    let last = registry.destroy_store("todos").expect("store exists");
    println!("   recovered {} item(s)", last.len());
    println!("   store_exists(\"todos\") = {}", registry.store_exists("todos"));

    println!("\n✓ Example complete!");
}
