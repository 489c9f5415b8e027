use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lb_core::config::BoardConfig;
use lb_core::pipeline::{group_by_stage, PipelineView};
use lb_core::store::LeadStore;
use lb_core::types::STAGES;

use crate::command;

/// Quick-action entries: (command id, title, subtitle).
pub const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("follow_ups", "Schedule Follow-ups", "Set reminders for leads"),
    ("email_campaign", "Send Email Campaign", "Bulk email to leads"),
    ("analytics", "View Analytics", "Conversion metrics"),
];

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    /// Add Lead overlay. Opened by `a`, closed by its close action.
    pub show_add_modal: bool,

    /// Board column cursor, indexes `STAGES`.
    pub column: usize,
    /// Card cursor within the current column.
    pub selected_card: usize,

    /// `Some` while the `:` command line is being edited.
    pub command_input: Option<String>,
    /// Last command result or error, shown in the status bar.
    pub status_message: Option<String>,

    pub store: LeadStore,
    pub board: BoardConfig,
}

impl App {
    pub fn new(store: LeadStore, board: BoardConfig) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            show_add_modal: false,
            column: 0,
            selected_card: 0,
            command_input: None,
            status_message: None,
            store,
            board,
        }
    }

    /// App over the built-in sample leads with default board settings.
    #[cfg(test)]
    pub fn demo() -> Self {
        Self::new(LeadStore::seeded(), BoardConfig::default())
    }

    /// Derive the board from the current store.
    pub fn view(&self) -> PipelineView<'_> {
        PipelineView::derive(&self.store)
    }

    pub fn column_len(&self, column: usize) -> usize {
        group_by_stage(self.store.leads())
            .get(column)
            .map_or(0, |c| c.len())
    }

    pub fn column_label(&self) -> &'static str {
        STAGES.get(self.column).map_or("unknown", |d| d.label)
    }

    // -- Transitions --------------------------------------------------------

    pub fn open_add_lead(&mut self) {
        self.show_add_modal = true;
    }

    pub fn close_add_lead(&mut self) {
        self.show_add_modal = false;
    }

    pub fn select_column(&mut self, column: usize) {
        if column < STAGES.len() {
            self.column = column;
            self.selected_card = 0;
        }
    }

    pub fn move_left(&mut self) {
        if self.column > 0 {
            self.select_column(self.column - 1);
        }
    }

    pub fn move_right(&mut self) {
        self.select_column(self.column + 1);
    }

    pub fn move_up(&mut self) {
        if self.selected_card > 0 {
            self.selected_card -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let max = self.column_len(self.column);
        if max > 0 && self.selected_card < max - 1 {
            self.selected_card += 1;
        }
    }

    // -- Key handling -------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.command_input.is_some() {
            self.on_command_key(key);
            return;
        }

        // The Add Lead modal swallows everything but its close keys.
        if self.show_add_modal {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('c')) {
                self.close_add_lead();
            }
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('a') => self.open_add_lead(),

            KeyCode::Char('h') | KeyCode::Left => self.move_left(),
            KeyCode::Char('l') | KeyCode::Right => self.move_right(),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char(c @ '1'..='5') => self.select_column((c as usize) - ('1' as usize)),

            KeyCode::Char('c') => {
                command::execute_command(self, command::AppCommand::Contact);
            }
            KeyCode::Char('v') => {
                command::execute_command(self, command::AppCommand::View);
            }

            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(':') => {
                self.command_input = Some(String::new());
                self.status_message = None;
            }
            KeyCode::Esc => self.status_message = None,

            _ => {}
        }
    }

    fn on_command_key(&mut self, key: KeyEvent) {
        let Some(buf) = self.command_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.command_input = None,
            KeyCode::Backspace => {
                if buf.pop().is_none() {
                    self.command_input = None;
                }
            }
            KeyCode::Char(c) => buf.push(c),
            KeyCode::Enter => {
                let line = format!(":{buf}");
                self.command_input = None;
                match command::parse_command(&line) {
                    Some(cmd) => {
                        self.status_message = command::execute_command(self, cmd);
                    }
                    None => {
                        tracing::debug!(input = %line, "unknown command");
                        self.status_message = Some(format!("unknown command: {line}"));
                    }
                }
            }
            _ => {}
        }
    }
}
