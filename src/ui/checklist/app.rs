use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::checklist::ChecklistStore;
use crate::config::Config;
use crate::error::Result;
use crate::gate;
use crate::share;
use crate::storage::Storage;
use crate::task::{Task, TaskGroup};

use super::actions::{self, ActionOutcome};
use super::model::{self, Row};
use super::view;

const EVENT_POLL_MS: u64 = 120;

enum UiMsg {
    GateResult(std::result::Result<(), String>),
}

#[derive(Clone, Copy)]
pub(crate) enum StatusKind {
    Error,
    Info,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum GateField {
    Name,
    Email,
}

/// The sign-in form shown until the gate has been passed.
/// States: idle, submitting, error. Not dismissable.
pub(crate) struct GateForm {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) field: GateField,
    pub(crate) submitting: bool,
    pub(crate) error: Option<String>,
}

impl GateForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            field: GateField::Name,
            submitting: false,
            error: None,
        }
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            GateField::Name => &mut self.name,
            GateField::Email => &mut self.email,
        }
    }

    fn switch_field(&mut self) {
        self.field = match self.field {
            GateField::Name => GateField::Email,
            GateField::Email => GateField::Name,
        };
    }
}

pub(crate) struct AddEditor {
    pub(crate) text: String,
    pub(crate) group_idx: usize,
    pub(crate) error: Option<String>,
}

impl AddEditor {
    fn new() -> Self {
        // Default to the custom bucket, like the empty add form
        Self {
            text: String::new(),
            group_idx: TaskGroup::ALL.len() - 1,
            error: None,
        }
    }

    pub(crate) fn group(&self) -> TaskGroup {
        TaskGroup::ALL[self.group_idx]
    }
}

pub(crate) enum ConfirmKind {
    Delete { id: String, text: String },
    Reset,
}

pub struct AppState {
    pub(crate) store: ChecklistStore,
    storage: Storage,
    config: Config,
    pub(crate) rows: Vec<Row>,
    order: Vec<usize>,
    selected: Option<usize>,
    pub(crate) gate: Option<GateForm>,
    pub(crate) add_editor: Option<AddEditor>,
    pub(crate) confirm: Option<ConfirmKind>,
    status_message: Option<String>,
    info_message: Option<String>,
}

impl AppState {
    fn new(store: ChecklistStore, storage: Storage, config: Config) -> Self {
        let signed_in = gate::is_signed_in(&storage);
        let mut app = Self {
            store,
            storage,
            config,
            rows: Vec::new(),
            order: Vec::new(),
            selected: None,
            gate: (!signed_in).then(GateForm::new),
            add_editor: None,
            confirm: None,
            status_message: None,
            info_message: None,
        };
        app.refresh(None);
        app
    }

    /// Index (into the task slice) of the selected task
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|pos| self.order.get(pos))
            .copied()
    }

    pub(crate) fn selected_task(&self) -> Option<&Task> {
        self.selected_index()
            .and_then(|idx| self.store.tasks().get(idx))
    }

    fn refresh(&mut self, previous_id: Option<String>) {
        self.rows = model::build_rows(self.store.tasks());
        self.order = model::task_order(&self.rows);
        self.selected =
            model::select_by_id(self.store.tasks(), &self.order, previous_id.as_deref());
    }

    fn move_selection(&mut self, delta: isize) {
        if self.order.is_empty() {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or(0);
        let max = self.order.len().saturating_sub(1);
        let next = (current as isize + delta).clamp(0, max as isize) as usize;
        self.selected = Some(next);
    }

    fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.info_message = None;
    }

    fn set_info(&mut self, message: String) {
        self.info_message = Some(message);
        self.status_message = None;
    }

    fn apply_outcome(&mut self, outcome: ActionOutcome, previous_id: Option<String>) {
        if outcome.changed {
            self.refresh(previous_id);
        }
        self.set_info(outcome.message);
    }

    pub(crate) fn status_line(&self) -> Option<(String, StatusKind)> {
        if let Some(message) = self.status_message.as_ref() {
            return Some((message.clone(), StatusKind::Error));
        }
        if let Some(info) = self.info_message.as_ref() {
            return Some((info.clone(), StatusKind::Info));
        }
        None
    }

    pub(crate) fn footer_hint(&self) -> String {
        if self.gate.is_some() {
            return "type to fill  tab switch field  enter sign in  ctrl-c quit".to_string();
        }
        if self.confirm.is_some() {
            return "y confirm  esc cancel".to_string();
        }
        if self.add_editor.is_some() {
            return "type text  tab group  enter add  esc cancel".to_string();
        }
        "j/k move  space toggle  a add  d delete  r reset  s share  q quit".to_string()
    }

    pub(crate) fn progress_summary(&self) -> String {
        format!(
            "{} of {} tasks completed",
            self.store.completed_count(),
            self.store.tasks().len()
        )
    }

    pub(crate) fn progress_ratio(&self) -> f64 {
        f64::from(self.store.progress_percent()) / 100.0
    }

    pub(crate) fn progress_percent(&self) -> u8 {
        self.store.progress_percent()
    }

    fn handle_msg(&mut self, msg: UiMsg) {
        match msg {
            UiMsg::GateResult(Ok(())) => {
                if let Err(err) = gate::complete(&self.storage) {
                    tracing::warn!(error = %err, "sign-in flag write failed");
                }
                self.gate = None;
                self.set_info("signed in".to_string());
            }
            UiMsg::GateResult(Err(message)) => {
                if let Some(form) = self.gate.as_mut() {
                    form.submitting = false;
                    form.error = Some(message);
                }
            }
        }
    }

    fn share_progress(&mut self) {
        let summary = share::summary_text(self.store.completed_count());
        match share::share(&self.config.share, &summary) {
            share::ShareOutcome::Shared => self.set_info(format!("shared: {summary}")),
            share::ShareOutcome::CopyFallback => {
                self.set_info(format!("copy your summary: {summary}"))
            }
        }
    }
}

pub fn run(store: ChecklistStore, storage: Storage, config: Config) -> Result<()> {
    let mut app = AppState::new(store, storage, config);
    run_terminal(&mut app)
}

fn run_terminal(app: &mut AppState) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let (ui_tx, ui_rx): (Sender<UiMsg>, Receiver<UiMsg>) = mpsc::channel();
    let mut dirty = true;
    loop {
        while let Ok(msg) = ui_rx.try_recv() {
            app.handle_msg(msg);
            dirty = true;
        }

        if dirty {
            terminal.draw(|frame| {
                view::render(frame, app);
            })?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(app, key, &ui_tx) {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => {
                    dirty = true;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, key: KeyEvent, ui_tx: &Sender<UiMsg>) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.gate.is_some() {
        handle_gate_key(app, key, ui_tx);
        return false;
    }

    if let Some(confirm) = app.confirm.take() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let outcome = match confirm {
                    ConfirmKind::Delete { id, .. } => actions::delete_task(&mut app.store, &id),
                    ConfirmKind::Reset => actions::reset_tasks(&mut app.store),
                };
                app.apply_outcome(outcome, None);
            }
            KeyCode::Char('n') | KeyCode::Char('q') | KeyCode::Esc => {
                app.set_info("cancelled".to_string());
            }
            _ => {
                app.confirm = Some(confirm);
            }
        }
        return false;
    }

    if app.add_editor.is_some() {
        handle_add_editor_key(app, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_selection(1);
            false
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_selection(-1);
            false
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let Some(id) = app.selected_task().map(|task| task.id.clone()) else {
                app.set_error("no task selected".to_string());
                return false;
            };
            let outcome = actions::toggle_task(&mut app.store, &id);
            app.apply_outcome(outcome, Some(id));
            false
        }
        KeyCode::Char('a') => {
            app.add_editor = Some(AddEditor::new());
            false
        }
        KeyCode::Char('d') => {
            let Some(task) = app.selected_task() else {
                app.set_error("no task selected".to_string());
                return false;
            };
            app.confirm = Some(ConfirmKind::Delete {
                id: task.id.clone(),
                text: task.text.clone(),
            });
            false
        }
        KeyCode::Char('r') => {
            app.confirm = Some(ConfirmKind::Reset);
            false
        }
        KeyCode::Char('s') => {
            app.share_progress();
            false
        }
        _ => false,
    }
}

fn handle_gate_key(app: &mut AppState, key: KeyEvent, ui_tx: &Sender<UiMsg>) {
    let gate_config = app.config.gate.clone();
    let Some(form) = app.gate.as_mut() else {
        return;
    };

    // The one in-flight operation: no cancellation, submit disabled
    if form.submitting {
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => form.switch_field(),
        KeyCode::Backspace => {
            form.active_field_mut().pop();
        }
        KeyCode::Enter => {
            if form.name.trim().is_empty() || form.email.trim().is_empty() {
                form.error = Some("name and email are required".to_string());
                return;
            }
            form.submitting = true;
            form.error = None;

            let name = form.name.clone();
            let email = form.email.clone();
            let tx = ui_tx.clone();
            thread::spawn(move || {
                let result =
                    gate::submit(&gate_config, &name, &email).map_err(|err| err.to_string());
                let _ = tx.send(UiMsg::GateResult(result));
            });
        }
        KeyCode::Char(ch) => {
            if !ch.is_control() {
                form.active_field_mut().push(ch);
            }
        }
        _ => {}
    }
}

fn handle_add_editor_key(app: &mut AppState, key: KeyEvent) {
    let Some(mut editor) = app.add_editor.take() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.set_info("cancelled".to_string());
            return;
        }
        KeyCode::Tab => {
            editor.group_idx = (editor.group_idx + 1) % TaskGroup::ALL.len();
        }
        KeyCode::BackTab => {
            editor.group_idx = editor
                .group_idx
                .checked_sub(1)
                .unwrap_or(TaskGroup::ALL.len() - 1);
        }
        KeyCode::Backspace => {
            editor.text.pop();
        }
        KeyCode::Enter => {
            if editor.text.trim().is_empty() {
                editor.error = Some("task text cannot be empty".to_string());
                app.add_editor = Some(editor);
                return;
            }
            let previous = app.selected_task().map(|task| task.id.clone());
            match actions::add_task(&mut app.store, &editor.text, editor.group()) {
                Ok(outcome) => {
                    app.apply_outcome(outcome, previous);
                    return;
                }
                Err(err) => {
                    editor.error = Some(err.to_string());
                }
            }
        }
        KeyCode::Char(ch) => {
            if !ch.is_control() {
                editor.text.push(ch);
            }
        }
        _ => {}
    }

    app.add_editor = Some(editor);
}
