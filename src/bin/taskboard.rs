//! Command-line shell for the Taskboard application.
//!
//! Usage:
//!
//! ```text
//! taskboard <command> [args]
//!
//! Commands:
//!   list                          Show all tasks, newest first
//!   add <title> <detail> [image]  Create a task, optionally attaching an
//!                                 image file; pass --done to mark it
//!                                 completed
//!   delete <task-id>              Delete a task after a yes/no prompt
//! ```
//!
//! The gateway endpoint and API key come from the `TASKBOARD_SERVICE_URL`
//! and `TASKBOARD_API_KEY` environment variables; either missing is fatal
//! before any command runs.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::config::{ConfigError, GatewayConfig};
use taskboard::task::adapters::supabase::{
    SupabaseClient, SupabaseObjectStore, SupabaseTaskRepository,
};
use taskboard::task::domain::{ImageUpload, ParseTaskIdError, Task, TaskDomainError, TaskId};
use taskboard::task::services::{
    CreateTaskRequest, DeleteConfirmation, DeleteOutcome, TaskCreationError, TaskCreationService,
    TaskListError, TaskListView, image_marker,
};
use thiserror::Error;
use tokio::runtime::Builder;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read image file '{path}': {source}")]
    ImageRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    #[error(transparent)]
    InvalidTaskId(#[from] ParseTaskIdError),
    #[error(transparent)]
    Creation(#[from] TaskCreationError),
    #[error(transparent)]
    List(#[from] TaskListError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to read confirmation: {0}")]
    ConfirmationRead(#[source] io::Error),
}

/// A parsed command-line invocation.
#[derive(Debug, PartialEq, Eq)]
enum Operation {
    List,
    Add {
        title: String,
        detail: String,
        image_path: Option<String>,
        completed: bool,
    },
    Delete {
        id: TaskId,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(operation) = parse_operation(args)? else {
        print_usage();
        return Ok(());
    };

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    runtime.block_on(execute(operation))
}

async fn execute(operation: Operation) -> Result<(), CliError> {
    let config = GatewayConfig::from_env()?;
    let client = Arc::new(SupabaseClient::new(&config));
    let repository = Arc::new(SupabaseTaskRepository::new(Arc::clone(&client)));

    match operation {
        Operation::List => list_tasks(repository).await,
        Operation::Add {
            title,
            detail,
            image_path,
            completed,
        } => {
            let store = Arc::new(SupabaseObjectStore::new(client));
            add_task(repository, store, title, detail, image_path, completed).await
        }
        Operation::Delete { id } => delete_task(repository, id).await,
    }
}

/// Parses command-line words into an operation.
///
/// Returns `None` when no command was given, which shows the usage banner.
fn parse_operation(args: Vec<String>) -> Result<Option<Operation>, CliError> {
    let mut words = args.into_iter();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    match command.as_str() {
        "list" => {
            if words.next().is_some() {
                return Err(CliError::InvalidArgs("list takes no arguments".to_owned()));
            }
            Ok(Some(Operation::List))
        }
        "add" => parse_add(words.collect()).map(Some),
        "delete" => {
            let raw = words
                .next()
                .ok_or_else(|| CliError::InvalidArgs("delete needs a <task-id>".to_owned()))?;
            if words.next().is_some() {
                return Err(CliError::InvalidArgs(
                    "delete takes exactly one <task-id>".to_owned(),
                ));
            }
            Ok(Some(Operation::Delete { id: raw.parse()? }))
        }
        other => Err(CliError::InvalidArgs(format!("unknown command '{other}'"))),
    }
}

fn parse_add(args: Vec<String>) -> Result<Operation, CliError> {
    let mut completed = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--done" {
            completed = true;
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let title = positional
        .next()
        .ok_or_else(|| CliError::InvalidArgs("add needs <title> <detail>".to_owned()))?;
    let detail = positional
        .next()
        .ok_or_else(|| CliError::InvalidArgs("add needs <title> <detail>".to_owned()))?;
    let image_path = positional.next();
    if positional.next().is_some() {
        return Err(CliError::InvalidArgs(
            "add takes at most one image path".to_owned(),
        ));
    }

    Ok(Operation::Add {
        title,
        detail,
        image_path,
        completed,
    })
}

async fn list_tasks(repository: Arc<SupabaseTaskRepository>) -> Result<(), CliError> {
    let mut view = TaskListView::new(repository);
    view.load().await?;
    render_task_list(view.tasks());
    Ok(())
}

async fn add_task(
    repository: Arc<SupabaseTaskRepository>,
    store: Arc<SupabaseObjectStore>,
    title: String,
    detail: String,
    image_path: Option<String>,
    completed: bool,
) -> Result<(), CliError> {
    let mut request = CreateTaskRequest::new(title, detail).completed(completed);
    if let Some(path) = image_path {
        request = request.with_image(load_image(&path)?);
    }

    let service = TaskCreationService::new(repository, store, Arc::new(DefaultClock));
    let created = service.submit(request).await?;
    report_created(&created);
    Ok(())
}

async fn delete_task(repository: Arc<SupabaseTaskRepository>, id: TaskId) -> Result<(), CliError> {
    let confirmation = confirm_delete(id)?;
    let mut view = TaskListView::new(repository);
    let outcome = view.delete(id, confirmation).await?;
    report_delete_outcome(outcome);
    Ok(())
}

/// Reads the image file and wraps it for upload under its original name.
fn load_image(path: &str) -> Result<ImageUpload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ImageRead {
        path: path.to_owned(),
        source,
    })?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = guess_content_type(&file_name);
    Ok(ImageUpload::new(file_name, content_type, bytes)?)
}

/// Maps a file extension to an image content type, defaulting to a byte
/// stream for anything unrecognised.
fn guess_content_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Prompts for a yes/no answer before a delete; anything but an explicit
/// yes declines.
fn confirm_delete(id: TaskId) -> Result<DeleteConfirmation, CliError> {
    {
        let mut stdout = io::stdout().lock();
        write!(stdout, "Delete task {id}? [y/N] ").map_err(CliError::ConfirmationRead)?;
        stdout.flush().map_err(CliError::ConfirmationRead)?;
    }

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(CliError::ConfirmationRead)?;
    let normalized = answer.trim().to_ascii_lowercase();
    if normalized == "y" || normalized == "yes" {
        Ok(DeleteConfirmation::Confirmed)
    } else {
        Ok(DeleteConfirmation::Declined)
    }
}

#[expect(clippy::print_stdout, reason = "user-facing command output")]
fn print_usage() {
    println!("Taskboard — manage the tasks you work on");
    println!();
    println!("Usage: taskboard <command> [args]");
    println!();
    println!("Commands:");
    println!("  list                          Show all tasks, newest first");
    println!("  add <title> <detail> [image]  Create a task; --done marks it completed");
    println!("  delete <task-id>              Delete a task after a yes/no prompt");
}

#[expect(clippy::print_stdout, reason = "user-facing command output")]
fn render_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks yet.");
        return;
    }
    for task in tasks {
        let status = if task.is_completed() { "done" } else { "open" };
        let updated = task
            .updated_at()
            .map_or_else(|| "-".to_owned(), |at| at.to_rfc3339());
        println!("{}  [{}]  {}", task.id(), status, task.title());
        println!("    {}", task.detail());
        println!(
            "    created: {}  updated: {}  image: {}",
            task.created_at().to_rfc3339(),
            updated,
            image_marker(task)
        );
    }
}

#[expect(clippy::print_stdout, reason = "user-facing command output")]
fn report_created(task: &Task) {
    println!("Saved task {}.", task.id());
    println!("See it with: taskboard list");
}

#[expect(clippy::print_stdout, reason = "user-facing command output")]
fn report_delete_outcome(outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted => println!("Task deleted."),
        DeleteOutcome::Declined => println!("Cancelled; nothing was deleted."),
    }
}

#[expect(clippy::print_stderr, reason = "fatal errors go to stderr")]
fn report_error(err: &CliError) {
    eprintln!("error: {err}");
}
