//! Walkthrough of the todo domain: create, edit, complete, query and
//! delete todos through the application handlers, and show the business
//! rules rejecting invalid changes.

use std::error::Error;
use std::sync::Arc;

use todo_ddd::adapters::InMemoryTodoRepository;
use todo_ddd::application::{
    ChangePriorityCommand, ChangePriorityHandler, CompleteTodoCommand, CompleteTodoHandler,
    CreateTodoCommand, CreateTodoHandler, DeleteTodoCommand, DeleteTodoHandler,
    ListTodosHandler, ListTodosQuery, TodoFilter, UpdateTitleCommand, UpdateTitleHandler,
};
use todo_ddd::config::AppConfig;
use todo_ddd::domain::foundation::Priority;
use todo_ddd::domain::todo::Todo;
use todo_ddd::ports::TodoRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    tracing::debug!(
        level = %config.logging.level,
        format = ?config.logging.format,
        "Configuration loaded"
    );

    println!("====== LEARNING DDD WITH TODOS ======\n");

    let repository = Arc::new(InMemoryTodoRepository::new());
    let repo: Arc<dyn TodoRepository> = repository.clone();

    let create = CreateTodoHandler::new(repo.clone());
    let update_title = UpdateTitleHandler::new(repo.clone());
    let change_priority = ChangePriorityHandler::new(repo.clone());
    let complete = CompleteTodoHandler::new(repo.clone());
    let delete = DeleteTodoHandler::new(repo.clone());
    let list = ListTodosHandler::new(repo);

    println!("1. Creating todos:");
    let todo1 = create
        .handle(create_command("Learn DDD", "Learn Domain Driven Design"))
        .await?;
    let todo2 = create
        .handle(create_command(
            "Practice Value Objects",
            "Create at least 3 Value Objects",
        ))
        .await?;
    let todo3 = create
        .handle(create_command(
            "Understand Aggregates",
            "Revise about Aggregates",
        ))
        .await?;
    println!("✅ Created {} todos\n", repository.len().await);

    println!("2. Updating a todo:");
    update_title
        .handle(UpdateTitleCommand {
            todo_id: todo1.id().clone(),
            title: "Learn DDD (Updated)".to_string(),
        })
        .await?;
    println!("✅ Updated todo {}\n", todo1.id());

    println!("3. Changing priority:");
    for (todo, priority) in [(&todo1, "HIGH"), (&todo2, "LOW"), (&todo3, "MEDIUM")] {
        change_priority
            .handle(ChangePriorityCommand {
                todo_id: todo.id().clone(),
                priority: priority.to_string(),
            })
            .await?;
    }
    println!("✅ Changed priority of todo {}\n", todo1.id());

    println!("4. Completing a todo:");
    let complete_first = CompleteTodoCommand {
        todo_id: todo1.id().clone(),
    };
    complete.handle(complete_first.clone()).await?;
    println!("✅ Completed todo {}\n", todo1.id());

    println!("5. Getting todos by priority:");
    let high_priority = list
        .handle(ListTodosQuery::new(TodoFilter::ByPriority(Priority::High)))
        .await?;
    println!("✅ Found {} high priority todos\n", high_priority.len());

    println!("6. Testing business rules:");
    if let Err(err) = update_title
        .handle(UpdateTitleCommand {
            todo_id: todo1.id().clone(),
            title: "Updated Title".to_string(),
        })
        .await
    {
        println!("✅ Correctly blocked: {}", err);
    }
    if let Err(err) = complete.handle(complete_first).await {
        println!("✅ Correctly blocked: {}", err);
    }
    println!();

    println!("7. Deleting a todo:");
    delete
        .handle(DeleteTodoCommand {
            todo_id: todo1.id().clone(),
        })
        .await?;
    println!("✅ Deleted todo {}\n", todo1.id());

    println!("====== FINAL TODOS ======");
    let remaining = list.handle(ListTodosQuery::new(TodoFilter::All)).await?;
    for (index, todo) in remaining.iter().enumerate() {
        print_todo(index + 1, todo);
    }

    Ok(())
}

fn create_command(title: &str, description: &str) -> CreateTodoCommand {
    CreateTodoCommand {
        title: title.to_string(),
        description: Some(description.to_string()),
    }
}

fn print_todo(position: usize, todo: &Todo) {
    println!("{}. {}", position, todo.title());
    println!("   ID: {}", todo.id());
    println!("   Priority: {}", todo.priority());
    println!("   Completed: {}", todo.is_completed());
    println!("   Created: {}", todo.created_at().time_of_day());
    println!("   Updated: {}", todo.updated_at().time_of_day());
}
