use compound_core::{
    CalculatorService, Field, HistoryEntry, InMemoryHistoryStore, InvestmentParameters, Outcome, ProjectionResult,
    Settings,
};
use ratatui::widgets::TableState;

pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Ledger,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

pub struct App {
    pub service: CalculatorService<InMemoryHistoryStore>,
    pub form: InvestmentParameters,
    pub selected_field: usize,
    pub focus: Focus,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    /// Last successful projection and the parameters behind it. Kept when a
    /// later calculation fails.
    pub last: Option<(InvestmentParameters, ProjectionResult)>,
    pub ledger_state: TableState,
    pub history: Vec<HistoryEntry>,
    pub history_limit: usize,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(settings: &Settings) -> App {
        App {
            service: CalculatorService::new(InMemoryHistoryStore::new(settings.history_capacity)),
            form: settings.default_parameters(),
            selected_field: 0,
            focus: Focus::Form,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            last: None,
            ledger_state: TableState::default(),
            history: Vec::new(),
            history_limit: settings.history_display_limit,
            status: None,
        }
    }

    pub fn current_field(&self) -> Field {
        Field::ALL[self.selected_field]
    }

    pub fn field_text(&self, field: Field) -> String {
        field.display(field.value_of(&self.form))
    }

    pub fn toggle_focus(&mut self) {
        // The ledger only takes focus once there is something to scroll
        self.focus = match self.focus {
            Focus::Form if self.last.is_some() => Focus::Ledger,
            _ => Focus::Form,
        };
    }

    pub fn next(&mut self) {
        match self.focus {
            Focus::Form => {
                self.selected_field = (self.selected_field + 1) % Field::ALL.len();
            }
            Focus::Ledger => self.scroll_ledger(1),
        }
    }

    pub fn previous(&mut self) {
        match self.focus {
            Focus::Form => {
                self.selected_field = if self.selected_field == 0 {
                    Field::ALL.len() - 1
                } else {
                    self.selected_field - 1
                };
            }
            Focus::Ledger => self.scroll_ledger(-1),
        }
    }

    pub fn page_down(&mut self) {
        self.scroll_ledger(12);
    }

    pub fn page_up(&mut self) {
        self.scroll_ledger(-12);
    }

    fn scroll_ledger(&mut self, delta: i64) {
        let len = match &self.last {
            Some((_, result)) if !result.ledger.is_empty() => result.ledger.len(),
            _ => return,
        };
        let current = self.ledger_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1);
        self.ledger_state.select(Some(next as usize));
    }

    /// Step the selected field by its increment, clamped at its minimum.
    pub fn step_field(&mut self, up: bool) {
        let field = self.current_field();
        let next = field.stepped(field.value_of(&self.form), up);
        if let Err(e) = field.apply(&mut self.form, &field.display(next)) {
            self.status = Some(StatusMessage::Error(e.to_string()));
        }
    }

    pub fn enter_edit_mode(&mut self) {
        self.focus = Focus::Form;
        self.input_mode = InputMode::Editing;
        self.input = self.field_text(self.current_field());
        self.cursor_position = self.input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Commit the edit buffer into the selected field. An invalid value keeps
    /// the editor open so it can be corrected.
    pub fn submit_input(&mut self) {
        let field = self.current_field();
        match field.apply(&mut self.form, &self.input) {
            Ok(()) => {
                self.status = None;
                self.exit_input_mode();
            }
            Err(e) => {
                self.status = Some(StatusMessage::Error(e.to_string()));
            }
        }
    }

    pub fn calculate(&mut self) {
        let params = self.form;
        match self.service.handle(params) {
            Outcome::Success(result) => {
                self.status = Some(StatusMessage::Info(format!(
                    "Calculated {} months",
                    result.ledger.len()
                )));
                self.ledger_state.select(if result.ledger.is_empty() { None } else { Some(0) });
                self.last = Some((params, result));
                self.history = self.service.recent_history(self.history_limit);
            }
            Outcome::Failure { message, .. } => {
                self.status = Some(StatusMessage::Error(format!("Error calculating: {}", message)));
            }
        }
    }
}
