use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use gpagrip_core::domain::CourseRecord;
use super::model::{Column, InputMode, TuiModel};

const NAME_WIDTH: usize = 28;
const CREDIT_WIDTH: usize = 14;
const GRADE_WIDTH: usize = 16;

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(3),    // Course table
                Constraint::Length(3), // Results
                Constraint::Length(2), // Status/input bar
            ])
            .split(size);

        Self::render_title_bar(frame, chunks[0]);
        Self::render_course_table(model, frame, chunks[1]);
        Self::render_results(model, frame, chunks[2]);
        Self::render_status_bar(model, frame, chunks[3]);

        if model.show_help {
            Self::render_help_overlay(frame, size);
        } else if !model.errors.is_empty() {
            Self::render_error_overlay(model, frame, size);
        }
    }

    fn render_title_bar(frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("GPA Calculator - Calculate your Grade Point Average (out of 4.0)")
            .style(Style::default().fg(Color::White).bg(Color::Blue))
            .alignment(Alignment::Center);

        frame.render_widget(title, area);
    }

    /// Render one line per course, plus a header
    fn render_course_table(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::raw("  "),
            Span::raw(pad("Course Name (Optional)", NAME_WIDTH)),
            Span::raw(" "),
            Span::raw(pad("Credit *", CREDIT_WIDTH)),
            Span::raw(" "),
            Span::raw(pad("Letter Grade *", GRADE_WIDTH)),
            Span::raw(" Action"),
        ]);

        let mut items = vec![ListItem::new(header).style(Style::default().add_modifier(Modifier::BOLD))];

        let count = model.roster.len();
        for (index, course) in model.roster.courses().iter().enumerate() {
            let selected = index == model.cursor.row;
            let cell_style = |column: Column| {
                if selected && model.cursor.column == column {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                }
            };

            let mut actions = Vec::new();
            if model.roster.can_remove() {
                actions.push(Span::styled("[×]", Style::default().fg(Color::Red)));
            }
            if index + 1 == count {
                actions.push(Span::styled("[+]", Style::default().fg(Color::Green)));
            }

            let mut spans = vec![
                Span::raw(if selected { "▸ " } else { "  " }),
                Span::styled(pad(&Self::name_cell(model, course), NAME_WIDTH), cell_style(Column::CourseName)),
                Span::raw(" "),
                Span::styled(pad(&Self::credit_cell(model, course), CREDIT_WIDTH), cell_style(Column::Credit)),
                Span::raw(" "),
                Span::styled(pad(&Self::grade_cell(model, course), GRADE_WIDTH), cell_style(Column::Grade)),
                Span::raw(" "),
            ];
            spans.extend(actions);

            let row_style = if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(spans)).style(row_style));
        }

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!("Courses ({})", count)));

        frame.render_widget(list, area);
    }

    fn name_cell(model: &TuiModel, course: &CourseRecord) -> String {
        match &model.input.mode {
            InputMode::CourseName { id } if *id == course.id => format!("{}_", model.input.text),
            _ if course.course_name.is_empty() => "Enter course name".to_string(),
            _ => course.course_name.clone(),
        }
    }

    fn credit_cell(model: &TuiModel, course: &CourseRecord) -> String {
        match &model.input.mode {
            InputMode::Credit { id } if *id == course.id => format!("{}_", model.input.text),
            _ if course.credit.is_empty() => "Select Credit".to_string(),
            _ => course.credit.clone(),
        }
    }

    fn grade_cell(model: &TuiModel, course: &CourseRecord) -> String {
        match model.grade_for(course) {
            Some(grade) => grade.label(),
            None if course.grade_point.is_empty() => "Select Grade".to_string(),
            None => course.grade_point.clone(),
        }
    }

    /// Total credits and GPA, two decimals each
    fn render_results(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let aggregates = model.aggregates();
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let credits = Paragraph::new(Line::from(vec![
            Span::raw("Total Credits: "),
            Span::styled(aggregates.total_credits_display(), Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(credits, chunks[0]);

        let gpa = Paragraph::new(Line::from(vec![
            Span::raw("GPA: "),
            Span::styled(
                aggregates.gpa_display(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(gpa, chunks[1]);
    }

    /// Render the status/input bar at the bottom
    fn render_status_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let status = if model.is_editing() {
            Paragraph::new(format!("{} {}", model.input.prompt, model.input.text))
                .style(Style::default().fg(Color::Yellow))
        } else {
            Paragraph::new(model.last_message().unwrap_or_default().to_string())
                .style(Style::default().fg(Color::White).bg(Color::DarkGray))
        };
        frame.render_widget(status, chunks[0]);

        if model.settings.show_key_hints {
            let hints = Paragraph::new(Self::get_key_hints(model))
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(hints, chunks[1]);
        }
    }

    /// Get key hints for the current cell
    fn get_key_hints(model: &TuiModel) -> String {
        if model.is_editing() {
            return "Enter Done | Esc Cancel".to_string();
        }
        let hints = match model.cursor.column {
            Column::CourseName => "Enter Edit name | a Add | d Remove | ←→ Column | ? Help | q Quit",
            Column::Credit if model.settings.allow_custom_credits => {
                "Space Next credit | e Type credit | ⌫ Clear | a Add | d Remove | ? Help | q Quit"
            }
            Column::Credit => "Space Next credit | ⌫ Clear | a Add | d Remove | ? Help | q Quit",
            Column::Grade => "Space Next grade | ⌫ Clear | a Add | d Remove | ? Help | q Quit",
        };
        hints.to_string()
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| Line::from(Span::styled(title, Style::default().add_modifier(Modifier::UNDERLINED)));
        let help_text = vec![
            Line::from(Span::styled("GpaGrip Help", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(""),
            section("Navigation:"),
            Line::from("  ↑/k ↓/j - Move between courses"),
            Line::from("  ←/h →/l Tab - Move between columns"),
            Line::from(""),
            section("Editing:"),
            Line::from("  Enter - Edit name / next choice"),
            Line::from("  Space - Next credit or grade"),
            Line::from("  e - Type a custom credit (if enabled)"),
            Line::from("  Backspace - Clear the cell"),
            Line::from("  a - Add a course (last row)"),
            Line::from("  d - Remove the course"),
            Line::from(""),
            section("Global:"),
            Line::from("  ? - Show this help"),
            Line::from("  Ctrl+C / Esc / q - Quit"),
            Line::from(""),
            Line::from("Press any key to close help..."),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });

        frame.render_widget(help, popup_area);
    }

    fn render_error_overlay(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 20, area);

        frame.render_widget(Clear, popup_area);

        let error_text: Vec<Line> = model.errors.iter()
            .map(|error| Line::from(error.as_str()))
            .collect();

        let error_popup = Paragraph::new(error_text)
            .block(Block::default().borders(Borders::ALL).title("Errors"))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });

        frame.render_widget(error_popup, popup_area);
    }

    /// Helper to create centered rectangle
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// Truncate or right-pad `text` to exactly `width` characters
fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}
