//! Checklist commands: list, add, toggle, rm, reset, progress, status,
//! and the TUI entry point.

use std::io::BufRead;

use serde::Serialize;

use crate::checklist::ChecklistStore;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::gate;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::Storage;
use crate::task::{self, Task, TaskGroup};

use super::CmdOptions;

pub(crate) struct Context {
    pub storage: Storage,
    pub config: Config,
    pub store: ChecklistStore,
}

/// Resolve storage, enforce the gate when asked, and open the checklist.
pub(crate) fn load_context(options: &CmdOptions, require_signin: bool) -> Result<Context> {
    let storage = Storage::resolve(options.data_dir.clone())?;
    storage.init()?;
    if require_signin {
        gate::ensure_signed_in(&storage)?;
    }
    let config = Config::load_from_dir(storage.data_dir());
    let store = ChecklistStore::open(storage.clone());
    Ok(Context {
        storage,
        config,
        store,
    })
}

fn output_options(options: &CmdOptions) -> OutputOptions {
    OutputOptions {
        json: options.json,
        quiet: options.quiet,
    }
}

// =============================================================================
// list
// =============================================================================

#[derive(Serialize)]
struct GroupView {
    group: TaskGroup,
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct ListOutput {
    total: usize,
    completed: usize,
    percent: u8,
    groups: Vec<GroupView>,
}

pub(crate) fn run_list(options: CmdOptions, group: Option<&str>) -> Result<()> {
    let ctx = load_context(&options, true)?;

    let filter = group.map(|value| value.parse::<TaskGroup>()).transpose()?;
    let tasks = ctx.store.tasks();

    let groups: Vec<GroupView> = task::group_tasks(tasks)
        .into_iter()
        .filter(|(group, _)| filter.map_or(true, |wanted| *group == wanted))
        .map(|(group, members)| GroupView {
            group,
            tasks: members.into_iter().cloned().collect(),
        })
        .collect();

    let output = ListOutput {
        total: tasks.len(),
        completed: task::completed_count(tasks),
        percent: task::progress_percent(tasks),
        groups,
    };

    if options.json {
        return emit_success(output_options(&options), "list", &output, None);
    }

    if options.quiet {
        return Ok(());
    }

    println!(
        "Mental Clutter Reduction: {} of {} tasks completed ({}%)",
        output.completed, output.total, output.percent
    );
    for view in &output.groups {
        println!();
        if view.group.is_custom_bucket() {
            println!("Custom");
        } else {
            println!("{}", view.group);
        }
        for task in &view.tasks {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{mark}] {:<26}  {}", task.id, task.text);
        }
    }

    Ok(())
}

// =============================================================================
// add / toggle / rm
// =============================================================================

#[derive(Serialize)]
struct AddOutput {
    id: String,
    text: String,
    group: TaskGroup,
    category: crate::task::Category,
}

pub(crate) fn run_add(options: CmdOptions, text: &str, group: &str) -> Result<()> {
    let mut ctx = load_context(&options, true)?;
    let group: TaskGroup = group.parse()?;
    let created = ctx.store.add(text, group)?;

    let output = AddOutput {
        id: created.id.clone(),
        text: created.text.clone(),
        group: created.group,
        category: created.category,
    };

    let mut human = HumanOutput::new(format!("Added task {}", created.id));
    human.push_summary("Text", created.text.clone());
    human.push_summary("Group", created.group.to_string());

    emit_success(output_options(&options), "add", &output, Some(&human))
}

#[derive(Serialize)]
struct ToggleOutput {
    id: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

pub(crate) fn run_toggle(options: CmdOptions, id: &str) -> Result<()> {
    let mut ctx = load_context(&options, true)?;
    let found = ctx.store.toggle(id);
    let completed = ctx.store.find(id).map(|task| task.completed);

    let output = ToggleOutput {
        id: id.to_string(),
        found,
        completed,
    };

    let mut human = if found {
        let state = if completed == Some(true) {
            "completed"
        } else {
            "not completed"
        };
        HumanOutput::new(format!("Task {id} is now {state}"))
    } else {
        let mut human = HumanOutput::new("No change");
        human.push_warning(format!("no task with id '{id}'"));
        human
    };
    human.push_summary(
        "Progress",
        format!(
            "{} of {} ({}%)",
            ctx.store.completed_count(),
            ctx.store.tasks().len(),
            ctx.store.progress_percent()
        ),
    );

    emit_success(output_options(&options), "toggle", &output, Some(&human))
}

#[derive(Serialize)]
struct RmOutput {
    id: String,
    removed: bool,
}

pub(crate) fn run_rm(options: CmdOptions, id: &str) -> Result<()> {
    let mut ctx = load_context(&options, true)?;
    let removed = ctx.store.delete(id);

    let output = RmOutput {
        id: id.to_string(),
        removed,
    };

    let human = if removed {
        HumanOutput::new(format!("Removed task {id}"))
    } else {
        let mut human = HumanOutput::new("No change");
        human.push_warning(format!("no task with id '{id}'"));
        human
    };

    emit_success(output_options(&options), "rm", &output, Some(&human))
}

// =============================================================================
// reset
// =============================================================================

const RESET_PROMPT: &str = "Are you sure you want to reset to default tasks? \
This will remove all custom tasks and restore original tasks.";

#[derive(Serialize)]
struct ResetOutput {
    reset: bool,
    total: usize,
}

pub(crate) fn run_reset(options: CmdOptions, yes: bool) -> Result<()> {
    let mut ctx = load_context(&options, true)?;

    if !yes && !confirm_reset()? {
        let output = ResetOutput {
            reset: false,
            total: ctx.store.tasks().len(),
        };
        let human = HumanOutput::new("Reset cancelled");
        return emit_success(output_options(&options), "reset", &output, Some(&human));
    }

    ctx.store.reset();

    let output = ResetOutput {
        reset: true,
        total: ctx.store.tasks().len(),
    };
    let mut human = HumanOutput::new("Checklist reset to defaults");
    human.push_summary("Tasks", output.total.to_string());

    emit_success(output_options(&options), "reset", &output, Some(&human))
}

fn confirm_reset() -> Result<bool> {
    eprintln!("{RESET_PROMPT}");
    eprint!("Reset? [y/N] ");

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

// =============================================================================
// progress / status
// =============================================================================

#[derive(Serialize)]
struct ProgressOutput {
    completed: usize,
    total: usize,
    percent: u8,
}

pub(crate) fn run_progress(options: CmdOptions) -> Result<()> {
    let ctx = load_context(&options, true)?;

    let output = ProgressOutput {
        completed: ctx.store.completed_count(),
        total: ctx.store.tasks().len(),
        percent: ctx.store.progress_percent(),
    };

    let human = HumanOutput::new(format!(
        "{} of {} tasks completed, {}%",
        output.completed, output.total, output.percent
    ));

    emit_success(output_options(&options), "progress", &output, Some(&human))
}

#[derive(Serialize)]
struct StatusOutput {
    signed_in: bool,
    completed: usize,
    total: usize,
    percent: u8,
    data_dir: String,
}

pub(crate) fn run_status(options: CmdOptions) -> Result<()> {
    // Status reports the gate instead of enforcing it.
    let ctx = load_context(&options, false)?;

    let output = StatusOutput {
        signed_in: gate::is_signed_in(&ctx.storage),
        completed: ctx.store.completed_count(),
        total: ctx.store.tasks().len(),
        percent: ctx.store.progress_percent(),
        data_dir: ctx.storage.data_dir().display().to_string(),
    };

    let mut human = HumanOutput::new("declutter status");
    human.push_summary("Signed in", output.signed_in.to_string());
    human.push_summary(
        "Progress",
        format!(
            "{} of {} ({}%)",
            output.completed, output.total, output.percent
        ),
    );
    human.push_summary("Data dir", output.data_dir.clone());
    if !output.signed_in {
        human.push_next_step("declutter signin --name \"...\" --email \"...\"");
    }

    emit_success(output_options(&options), "status", &output, Some(&human))
}

// =============================================================================
// view (TUI)
// =============================================================================

pub(crate) fn run_view(options: CmdOptions) -> Result<()> {
    if options.json {
        return Err(Error::InvalidArgument(
            "view does not support --json".to_string(),
        ));
    }
    if options.quiet {
        return Err(Error::InvalidArgument(
            "view does not support --quiet".to_string(),
        ));
    }
    let ctx = load_context(&options, false)?;
    crate::ui::checklist::run(ctx.store, ctx.storage, ctx.config)
}
