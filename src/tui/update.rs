use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use gpagrip_core::app::Command;
use gpagrip_core::domain::{parse_decimal, CourseField, CourseId, CreditOption, CREDIT_OPTIONS};
use super::model::{Column, InputMode, TuiModel};

/// Messages produced by the TUI in response to input
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Apply a command to the roster
    Command(Command),

    /// Leave the application
    Quit,

    /// No action needed
    None,
}

/// The Update function - handles user input and updates the model
pub struct TuiUpdate;

impl TuiUpdate {
    /// Handle a key press and update the model accordingly.
    ///
    /// UI-only state (cursor, input buffer, help) is changed in place; roster
    /// changes come back as a [`TuiMessage::Command`] for the caller to apply.
    pub fn handle_key(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(TuiMessage::Quit);
        }

        if model.is_editing() {
            return Self::handle_input_keys(model, key);
        }

        if model.show_help {
            // Any key closes help
            model.show_help = false;
            return Ok(TuiMessage::None);
        }

        Self::handle_table_keys(model, key, modifiers)
    }

    /// Feed a whole message through the model, applying roster commands
    pub fn dispatch(model: &mut TuiModel, message: TuiMessage) {
        match message {
            TuiMessage::Command(command) => {
                model.apply_command(&command);
            }
            TuiMessage::Quit => model.should_quit = true,
            TuiMessage::None => {}
        }
    }

    /// Handle keys while typing into a cell
    ///
    /// Every keystroke is forwarded as an update so the totals stay live.
    fn handle_input_keys(model: &mut TuiModel, key: KeyCode) -> Result<TuiMessage> {
        let (id, field) = match model.input.mode {
            InputMode::None => return Ok(TuiMessage::None),
            InputMode::CourseName { id } => (id, CourseField::CourseName),
            InputMode::Credit { id } => (id, CourseField::Credit),
        };

        match key {
            KeyCode::Char(c) => {
                model.input.text.push(c);
                Ok(Self::update(id, field, model.input.text.clone()))
            }

            KeyCode::Backspace => {
                model.input.text.pop();
                Ok(Self::update(id, field, model.input.text.clone()))
            }

            KeyCode::Enter => {
                if field == CourseField::Credit && parse_decimal(&model.input.text) <= 0.0 && !model.input.text.is_empty() {
                    model.add_message(format!("'{}' is not a positive number; the course will not count", model.input.text));
                }
                Self::finish_input(model);
                Ok(TuiMessage::None)
            }

            KeyCode::Esc => {
                let original = std::mem::take(&mut model.input.original);
                Self::finish_input(model);
                Ok(Self::update(id, field, original))
            }

            _ => Ok(TuiMessage::None),
        }
    }

    /// Handle keys on the course table
    fn handle_table_keys(model: &mut TuiModel, key: KeyCode, modifiers: KeyModifiers) -> Result<TuiMessage> {
        let Some(course) = model.selected_course().cloned() else {
            model.clamp_cursor();
            return Ok(TuiMessage::None);
        };

        match key {
            KeyCode::Char('q') | KeyCode::Esc => Ok(TuiMessage::Quit),

            KeyCode::Char('?') => {
                model.show_help = true;
                Ok(TuiMessage::None)
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                model.cursor.row = model.cursor.row.saturating_sub(1);
                Ok(TuiMessage::None)
            }

            KeyCode::Down | KeyCode::Char('j') => {
                if !model.on_last_row() {
                    model.cursor.row += 1;
                }
                Ok(TuiMessage::None)
            }

            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                model.cursor.column = model.cursor.column.prev();
                Ok(TuiMessage::None)
            }

            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                model.cursor.column = model.cursor.column.next();
                Ok(TuiMessage::None)
            }

            // Rows
            KeyCode::Char('a') if modifiers.is_empty() => {
                if model.on_last_row() {
                    Ok(TuiMessage::Command(Command::AddCourse))
                } else {
                    model.add_message("Move to the last row to add a course".to_string());
                    Ok(TuiMessage::None)
                }
            }

            KeyCode::Char('d') | KeyCode::Char('x') => Ok(TuiMessage::Command(Command::RemoveCourse { id: course.id })),

            // Cells
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') => Self::activate_cell(model, key, course.id),

            KeyCode::Backspace | KeyCode::Delete => {
                let field = Self::field_for(model.cursor.column);
                if field == CourseField::GradePoint {
                    model.grade_letters.remove(&course.id);
                }
                Ok(Self::update(course.id, field, String::new()))
            }

            _ => Ok(TuiMessage::None),
        }
    }

    /// Enter/Space/e on the current cell
    fn activate_cell(model: &mut TuiModel, key: KeyCode, id: CourseId) -> Result<TuiMessage> {
        let Some(course) = model.roster.get(id).cloned() else {
            return Ok(TuiMessage::None);
        };

        match model.cursor.column {
            Column::CourseName if key != KeyCode::Char(' ') => {
                Self::start_input(model, InputMode::CourseName { id }, "Course name:", &course.course_name);
                Ok(TuiMessage::None)
            }

            Column::Credit if key == KeyCode::Char('e') => {
                if model.settings.allow_custom_credits {
                    Self::start_input(model, InputMode::Credit { id }, "Credit hours:", &course.credit);
                } else {
                    model.add_message("Custom credit hours are disabled; use Space to pick".to_string());
                }
                Ok(TuiMessage::None)
            }

            Column::Credit => Ok(Self::update(id, CourseField::Credit, next_credit(&course.credit))),

            Column::Grade if key != KeyCode::Char('e') => match model.next_grade(&course) {
                Some(grade) => {
                    model.grade_letters.insert(id, grade.letter);
                    Ok(Self::update(id, CourseField::GradePoint, grade.value()))
                }
                None => {
                    model.grade_letters.remove(&id);
                    Ok(Self::update(id, CourseField::GradePoint, String::new()))
                }
            },

            _ => Ok(TuiMessage::None),
        }
    }

    fn start_input(model: &mut TuiModel, mode: InputMode, prompt: &str, current: &str) {
        model.input.mode = mode;
        model.input.prompt = prompt.to_string();
        model.input.text = current.to_string();
        model.input.original = current.to_string();
    }

    fn finish_input(model: &mut TuiModel) {
        model.input.mode = InputMode::None;
        model.input.text.clear();
        model.input.original.clear();
    }

    fn field_for(column: Column) -> CourseField {
        match column {
            Column::CourseName => CourseField::CourseName,
            Column::Credit => CourseField::Credit,
            Column::Grade => CourseField::GradePoint,
        }
    }

    fn update(id: CourseId, field: CourseField, value: String) -> TuiMessage {
        TuiMessage::Command(Command::UpdateCourse {
            id,
            update: field.with_value(value),
        })
    }
}

/// The credit choice after `current`, wrapping to unset after the last one.
///
/// Unset or custom values move to the first choice.
pub fn next_credit(current: &str) -> String {
    let hours = parse_decimal(current);
    let position = (!current.trim().is_empty())
        .then(|| CREDIT_OPTIONS.iter().position(|&option| option == hours))
        .flatten();

    match position {
        None => CreditOption(CREDIT_OPTIONS[0]).value(),
        Some(index) => CREDIT_OPTIONS
            .get(index + 1)
            .map(|&hours| CreditOption(hours).value())
            .unwrap_or_default(),
    }
}
