use gpagrip_core::app::{Command, RosterSnapshot};
use gpagrip_core::domain::{
    parse_decimal_opt, Aggregates, CourseId, CourseRecord, CourseRoster, Event, GradeOption,
    UngradedPolicy, GRADE_OPTIONS,
};
use std::collections::HashMap;
use tracing::debug;

use crate::config::Config;

/// The TUI Model - this represents the complete UI state
///
/// The roster itself is owned here and only changed through
/// [`TuiModel::apply_command`]; everything else is presentation state.
#[derive(Debug, Default)]
pub struct TuiModel {
    /// The course rows under edit
    pub roster: CourseRoster,

    /// Settings resolved from config and CLI
    pub settings: TuiSettings,

    /// Which cell the cursor is on
    pub cursor: Cursor,

    /// Current input state
    pub input: InputState,

    /// Letter picked per row. `F` and `I` share a point value, so the stored
    /// grade point alone cannot tell them apart.
    pub grade_letters: HashMap<CourseId, &'static str>,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Error messages to display
    pub errors: Vec<String>,

    /// Status messages to display
    pub messages: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TuiSettings {
    pub allow_custom_credits: bool,
    pub ungraded: UngradedPolicy,
    pub show_key_hints: bool,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            allow_custom_credits: false,
            ungraded: UngradedPolicy::default(),
            show_key_hints: true,
        }
    }
}

impl From<&Config> for TuiSettings {
    fn from(config: &Config) -> Self {
        Self {
            allow_custom_credits: config.credits.allow_custom,
            ungraded: config.aggregation.ungraded,
            show_key_hints: config.ui.show_key_hints,
        }
    }
}

/// Cursor position in the course table
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: Column,
}

/// Editable columns, left to right
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    #[default]
    CourseName,
    Credit,
    Grade,
}

impl Column {
    pub fn next(self) -> Self {
        match self {
            Column::CourseName => Column::Credit,
            Column::Credit => Column::Grade,
            Column::Grade => Column::CourseName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Column::CourseName => Column::Grade,
            Column::Credit => Column::CourseName,
            Column::Grade => Column::Credit,
        }
    }
}

/// Input state for text input modes
#[derive(Debug, Default)]
pub struct InputState {
    /// Current input mode
    pub mode: InputMode,

    /// Current input text
    pub text: String,

    /// Value of the field before editing started, restored on cancel
    pub original: String,

    /// Input prompt text
    pub prompt: String,
}

/// Input modes for different text entry scenarios
#[derive(Debug, Default, Clone, PartialEq)]
pub enum InputMode {
    #[default]
    None,

    /// Typing a course name
    CourseName { id: CourseId },

    /// Typing a custom credit value
    Credit { id: CourseId },
}

impl TuiModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: TuiSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Apply a command to the roster and update UI state from the outcome
    pub fn apply_command(&mut self, command: &Command) -> Option<Event> {
        let event = self.roster.execute(command);

        match &event {
            Some(event) => {
                debug!(?command, ?event, "Applied command");
                self.apply_event(event);
            }
            None => {
                debug!(?command, "Command left the roster unchanged");
                if let Command::RemoveCourse { .. } = command {
                    if !self.roster.can_remove() {
                        self.add_message("At least one course is required".to_string());
                    }
                }
            }
        }

        event
    }

    fn apply_event(&mut self, event: &Event) {
        match event {
            Event::CourseAdded { id } => {
                if let Some(row) = self.roster.position(*id) {
                    self.cursor.row = row;
                }
                self.add_message(format!("Added course #{}", self.roster.len()));
            }

            Event::CourseRemoved { id } => {
                self.grade_letters.remove(id);
                self.clamp_cursor();
                self.add_message("Removed course".to_string());
            }

            Event::CourseUpdated { .. } => {}
        }
    }

    /// Keep the cursor on an existing row
    pub fn clamp_cursor(&mut self) {
        let last = self.roster.len().saturating_sub(1);
        self.cursor.row = self.cursor.row.min(last);
    }

    /// The row under the cursor
    pub fn selected_course(&self) -> Option<&CourseRecord> {
        self.roster.courses().get(self.cursor.row)
    }

    pub fn selected_id(&self) -> Option<CourseId> {
        self.selected_course().map(|c| c.id)
    }

    pub fn on_last_row(&self) -> bool {
        self.cursor.row + 1 == self.roster.len()
    }

    pub fn aggregates(&self) -> Aggregates {
        self.roster.compute_aggregates_with(self.settings.ungraded)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.roster.snapshot(self.settings.ungraded)
    }

    /// The grade option a row currently shows, if any
    pub fn grade_for(&self, course: &CourseRecord) -> Option<&'static GradeOption> {
        let point = parse_decimal_opt(&course.grade_point)?;
        self.grade_letters
            .get(&course.id)
            .and_then(|letter| GradeOption::by_letter(letter))
            .filter(|grade| grade.point == point)
            .or_else(|| GradeOption::by_point(point))
    }

    /// The grade that follows the row's current one, wrapping to unset after the last
    pub fn next_grade(&self, course: &CourseRecord) -> Option<&'static GradeOption> {
        match self.grade_for(course) {
            None => GRADE_OPTIONS.first(),
            Some(current) => GRADE_OPTIONS
                .iter()
                .position(|g| g.letter == current.letter)
                .and_then(|index| GRADE_OPTIONS.get(index + 1)),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.input.mode != InputMode::None
    }

    /// Clear all error messages
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Add a status message
    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Add an error message
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}
