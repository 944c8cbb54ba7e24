use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, DetailState, EditField, Tab};
use crate::models::FetchStatus;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.tab {
        Tab::Summarize => render_summarize(frame, app, chunks[1]),
        Tab::Notes => render_notes(frame, app, chunks[1]),
    }

    render_status(frame, app, chunks[2]);

    if app.title_prompt_active {
        render_title_prompt(frame, app);
    }

    if app.show_help {
        render_help(frame);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let selected = match app.tab {
        Tab::Summarize => 0,
        Tab::Notes => 1,
    };

    let tabs = Tabs::new(vec![" Summarize ", " Notes "])
        .select(selected)
        .block(
            Block::default()
                .title(" tubenotes ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent_color())),
        )
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_color())
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_summarize(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL input
            Constraint::Min(0),    // Summary content
            Constraint::Length(1), // Hints
        ])
        .split(area);

    let input = Paragraph::new(app.url_input.as_str()).block(
        Block::default()
            .title(" Video URL ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent_color())),
    );
    frame.render_widget(input, chunks[0]);

    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let content = match app.fetch_status {
        FetchStatus::Idle => {
            Paragraph::new("Your summary will appear here...").style(placeholder_style)
        }
        FetchStatus::Requesting => Paragraph::new("Generating...").style(placeholder_style),
        FetchStatus::Ready => {
            let body = app
                .pending_summary
                .as_ref()
                .map(|p| p.body.as_str())
                .unwrap_or_default();
            Paragraph::new(body).wrap(Wrap { trim: false })
        }
        FetchStatus::Failed => Paragraph::new(
            app.fetch_error
                .as_deref()
                .unwrap_or("Summarization failed"),
        )
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false }),
    };
    frame.render_widget(
        content.block(Block::default().title(" Summary ").borders(Borders::ALL)),
        chunks[1],
    );

    let hint = match app.fetch_status {
        FetchStatus::Ready => " Ctrl+S: save | Enter: summarize again | Tab: notes ",
        _ => " Enter: summarize | Tab: notes ",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_notes(frame: &mut Frame, app: &App, area: Rect) {
    // 1/3 list, 2/3 detail
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    render_note_list(frame, app, chunks[0]);
    render_detail(frame, app, chunks[1]);
}

fn render_note_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .notes
        .iter()
        .map(|note| {
            let armed = app.armed_delete == Some(note.id);

            let title_style = if armed {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let title = Line::from(Span::styled(note.display_title().to_string(), title_style));

            let meta = if armed {
                Line::from(Span::styled(
                    "   delete? y to confirm, Esc to cancel",
                    Style::default().fg(Color::Red),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}", note.created_at.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ))
            };

            ListItem::new(vec![title, meta])
        })
        .collect();

    let mut state = ListState::default();
    if !app.notes.is_empty() {
        state.select(Some(app.selected_index));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Notes ({}) ", app.notes.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent_color())),
        )
        .highlight_style(
            Style::default()
                .fg(app.theme.highlight_color())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    match &app.detail {
        DetailState::Idle => {
            let text = if app.notes.is_empty() {
                "No saved summaries yet.\n\nSummarize a video and save it to see it here."
            } else {
                "Enter: open | d: delete | o: open in browser"
            };
            let paragraph = Paragraph::new(text)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: false })
                .block(Block::default().title(" Detail ").borders(Borders::ALL));
            frame.render_widget(paragraph, area);
        }

        DetailState::Viewing { title, body, .. } => {
            let chunks = detail_chunks(area);

            let title_widget = Paragraph::new(title.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .block(
                    Block::default()
                        .title(" Title ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(app.theme.accent_color())),
                );
            frame.render_widget(title_widget, chunks[0]);

            let body_widget = Paragraph::new(body.as_str())
                .wrap(Wrap { trim: false })
                .block(Block::default().title(" Summary ").borders(Borders::ALL));
            frame.render_widget(body_widget, chunks[1]);

            frame.render_widget(
                Paragraph::new(" e: edit | o: open in browser | Esc: back ")
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[2],
            );
        }

        DetailState::Editing {
            draft_title,
            draft_body,
            field,
            ..
        } => {
            let chunks = detail_chunks(area);

            let focus = Style::default().fg(app.theme.highlight_color());
            let blur = Style::default().fg(Color::DarkGray);

            let title_widget = Paragraph::new(draft_title.as_str()).block(
                Block::default()
                    .title(" Title (editing) ")
                    .borders(Borders::ALL)
                    .border_style(if *field == EditField::Title { focus } else { blur }),
            );
            frame.render_widget(title_widget, chunks[0]);

            let body_widget = Paragraph::new(draft_body.as_str())
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(" Summary (editing) ")
                        .borders(Borders::ALL)
                        .border_style(if *field == EditField::Body { focus } else { blur }),
                );
            frame.render_widget(body_widget, chunks[1]);

            frame.render_widget(
                Paragraph::new(" Ctrl+S: save | Tab: switch field | Esc: cancel ")
                    .style(Style::default().fg(Color::DarkGray)),
                chunks[2],
            );
        }
    }
}

fn detail_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Hints
        ])
        .split(area)
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let Some(error) = &app.validation_error {
        (error.as_str(), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status {
        (status.as_str(), Style::default().fg(app.theme.highlight_color()))
    } else {
        (" ?: help | q: quit", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_title_prompt(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(app.title_input.as_str())];
    if let Some(error) = &app.validation_error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let prompt = Paragraph::new(lines).block(
        Block::default()
            .title(" Title for this summary (Enter: save, Esc: cancel) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent_color())),
    );
    frame.render_widget(prompt, area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from("Tab        switch between Summarize and Notes"),
        Line::from("Enter      summarize / open note"),
        Line::from("Ctrl+S     save summary / save edit"),
        Line::from("e          edit the open note"),
        Line::from("d          arm a note for deletion"),
        Line::from("y / Esc    confirm / cancel deletion"),
        Line::from("j/k        move selection"),
        Line::from("o          open source URL in browser"),
        Line::from("r          reload the list"),
        Line::from("q          quit"),
        Line::from(""),
        Line::from("Press any key to close"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(help, area);
}

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
