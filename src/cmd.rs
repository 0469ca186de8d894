//! Command implementations for the CLI interface.
//!
//! Each handler drives the library the way an interactive front end would:
//! it fills an `ActivityForm` field by field, reads the structured results and
//! decides how to present them. Created activities are printed as JSON and
//! never stored.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::activity::Activity;
use crate::db::{parse_date_input, Database};
use crate::error::{ErrorKind, FieldIssue, PlannerError, Result};
use crate::fields::{Field, QuantityType};
use crate::form::{ActivityForm, Confirm};
use crate::task::Task;
use crate::validate::local_today;

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the pool of tasks activities are built from.
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Validate, create and edit activities.
    Activity {
        #[command(subcommand)]
        action: ActivityAction,
    },

    /// List the available quantity types.
    Types,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the pool.
    Add {
        /// Task name.
        name: String,
        /// ID of a task that must be complete first. May be repeated.
        #[arg(long = "depends")]
        depends: Vec<u64>,
    },
    /// Mark a task complete.
    Done {
        id: u64,
        /// Clear the completion flag instead.
        #[arg(long)]
        undo: bool,
    },
    /// List every task in the pool.
    List,
}

#[derive(Subcommand)]
pub enum ActivityAction {
    /// Report the validity of every field and whether the draft could be submitted.
    Check(DraftArgs),
    /// Create an activity and print it as JSON.
    New(DraftArgs),
    /// List tasks that could be attached to a draft.
    Options {
        /// IDs already staged in the draft. May be repeated.
        #[arg(long = "staged")]
        staged: Vec<u64>,
    },
    /// Add or remove tasks on an existing activity read from a JSON file.
    Edit {
        /// Activity JSON, as printed by `activity new`.
        file: PathBuf,
        /// Task ID to attach. May be repeated.
        #[arg(long = "add")]
        add: Vec<u64>,
        /// Task ID to detach. May be repeated.
        #[arg(long = "remove")]
        remove: Vec<u64>,
        /// Skip removal confirmation prompts.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Field values for an activity draft.
#[derive(Args, Debug, Default)]
pub struct DraftArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub details: String,
    #[arg(long, default_value = "")]
    pub quantity: String,
    #[arg(long, default_value = "")]
    pub duration: String,
    /// Due date: YYYY-MM-DD, "today", "tomorrow", "friday", "in Nd". Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    /// Quantity type display name (see `planner types`).
    #[arg(long = "quantity-type")]
    pub quantity_type: Option<String>,
    /// Task ID to attach. May be repeated.
    #[arg(long = "task")]
    pub tasks: Vec<u64>,
}

/// Asks on stderr and reads the answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Dispatch a parsed command against the task pool at `db_path`.
pub fn run(command: Commands, db_path: &Path) -> Result<()> {
    match command {
        Commands::Task { action } => cmd_task(db_path, action),
        Commands::Activity { action } => {
            let db = Database::load(db_path)?;
            match action {
                ActivityAction::Check(args) => cmd_activity_check(&db, &args),
                ActivityAction::New(args) => cmd_activity_new(&db, &args),
                ActivityAction::Options { staged } => cmd_activity_options(&db, &staged),
                ActivityAction::Edit { file, add, remove, yes } => {
                    if yes {
                        cmd_activity_edit(&db, &file, &add, &remove, &mut |_: &str| true)
                    } else {
                        cmd_activity_edit(&db, &file, &add, &remove, &mut StdinConfirm)
                    }
                }
            }
        }
        Commands::Types => {
            for name in QuantityType::list_of_names() {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

/// Handle task pool commands.
pub fn cmd_task(db_path: &Path, action: TaskAction) -> Result<()> {
    let mut db = Database::load(db_path)?;
    match action {
        TaskAction::Add { name, depends } => {
            let id = db.add_task(&name, &depends)?;
            db.save(db_path)?;
            println!("Added task {}.", id);
        }
        TaskAction::Done { id, undo } => {
            db.set_completed(id, !undo)?;
            db.save(db_path)?;
            println!("Task {} marked {}.", id, if undo { "open" } else { "done" });
        }
        TaskAction::List => {
            if db.tasks.is_empty() {
                println!("No tasks.");
            }
            for task in &db.tasks {
                print_task(task);
            }
        }
    }
    Ok(())
}

fn print_task(task: &Task) {
    if task.dependencies.is_empty() {
        println!("{}", task);
    } else {
        let deps: Vec<String> = task.dependencies.iter().map(|d| format!("#{}", d)).collect();
        println!("{}  (after {})", task, deps.join(", "));
    }
}

fn set_field(form: &mut ActivityForm, field: Field, value: &str) -> Result<()> {
    // Only an over-long edit reports TooLong, and it was not applied.
    if let Some(kind @ ErrorKind::TooLong { .. }) = form.set_text(field, value)? {
        eprintln!("{} (input ignored)", FieldIssue::new(field, kind));
    }
    Ok(())
}

/// Fill a fresh form from command-line values, in form order.
pub fn fill_form(form: &mut ActivityForm, db: &Database, args: &DraftArgs) -> Result<()> {
    set_field(form, Field::Name, &args.name)?;
    set_field(form, Field::Details, &args.details)?;
    if let Some(name) = args.quantity_type.as_deref() {
        form.select_quantity_type_name(name)?;
    }
    set_field(form, Field::Quantity, &args.quantity)?;
    set_field(form, Field::Duration, &args.duration)?;
    if let Some(date) = args.date.as_deref() {
        form.set_date(parse_date_input(date, local_today())?)?;
    }
    if !args.tasks.is_empty() {
        form.add_tasks(&db.tasks, &args.tasks)?;
    }
    Ok(())
}

fn print_report(form: &ActivityForm) {
    for field in Field::ALL {
        match form.issue(field) {
            Some(kind) => println!("  x {}", FieldIssue::new(field, kind)),
            None => println!("  ok {}", field.label()),
        }
    }
    println!("Ready: {}", if form.can_submit() { "yes" } else { "no" });
}

/// Print every field's validation result.
pub fn cmd_activity_check(db: &Database, args: &DraftArgs) -> Result<()> {
    let mut form = ActivityForm::new();
    fill_form(&mut form, db, args)?;
    print_report(&form);
    Ok(())
}

/// Create an activity and print it as JSON.
pub fn cmd_activity_new(db: &Database, args: &DraftArgs) -> Result<()> {
    let mut form = ActivityForm::new();
    fill_form(&mut form, db, args)?;
    if !form.can_submit() {
        for issue in form.report().issues() {
            eprintln!("{}", issue);
            eprintln!("  hint: {}", issue.field.help());
        }
    }
    let activity = form.submit()?;
    println!("{}", serde_json::to_string_pretty(&activity)?);
    Ok(())
}

/// List tasks selectable for a draft with the given staged tasks.
pub fn cmd_activity_options(db: &Database, staged: &[u64]) -> Result<()> {
    let mut form = ActivityForm::new();
    if !staged.is_empty() {
        form.add_tasks(&db.tasks, staged)?;
    }
    let options = form.selectable_tasks(&db.tasks);
    if options.is_empty() {
        println!("No selectable tasks.");
    }
    for task in options {
        print_task(task);
    }
    Ok(())
}

/// Change the task list of an existing activity and print the result.
pub fn cmd_activity_edit(
    db: &Database,
    file: &Path,
    add: &[u64],
    remove: &[u64],
    confirm: &mut impl Confirm,
) -> Result<()> {
    let activity: Activity = serde_json::from_str(&fs::read_to_string(file)?)?;
    let mut form = ActivityForm::view(activity);

    for &id in remove {
        if !form.can_remove(id) {
            return Err(PlannerError::UnknownTask(id));
        }
        if form.remove_task(id, confirm)? {
            info!(task = id, "task removed from activity");
        } else {
            eprintln!("Kept task {}.", id);
        }
    }
    if !add.is_empty() {
        form.add_tasks(&db.tasks, add)?;
    }

    let activity = form.submit()?;
    println!("{}", serde_json::to_string_pretty(&activity)?);
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
