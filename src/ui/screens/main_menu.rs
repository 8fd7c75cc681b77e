use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::Result;
use crate::ui::{
    components::utils::split_vertical,
    styles::{header_text, secondary_line, selection_style},
    MenuAction, TerminalGuard, UiRoute,
};

const ITEMS: [(&str, &str, MenuAction); 6] = [
    (
        "Estimate Project",
        "Pick a category, complexity and technologies",
        MenuAction::Estimate,
    ),
    ("Services", "What the company offers", MenuAction::Services),
    (
        "Technologies",
        "Languages, frameworks and tooling we work with",
        MenuAction::Technologies,
    ),
    (
        "Case Studies",
        "Projects delivered for clients",
        MenuAction::CaseStudies,
    ),
    ("Clients", "Partners and clients", MenuAction::Clients),
    ("Quit", "Exit estimate-cli", MenuAction::Exit),
];

/// Show the main menu until the user picks an entry. `rates_label` names the
/// active rate card in the header.
pub fn run_main_menu(rates_label: &str) -> Result<MenuAction> {
    // Ensure raw mode and the alternate screen are always restored regardless of how we exit.
    let mut guard = TerminalGuard::new()?;
    let mut selected = 0usize;

    loop {
        guard.draw(|f| {
            let size = f.size();
            let chunks = split_vertical(
                size,
                &[
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ],
            );

            let mut header = header_text(format!("Estimate CLI — {}", UiRoute::MainMenu.title()));
            header.extend([secondary_line(format!("Rates: {rates_label}"))]);
            f.render_widget(Paragraph::new(header), chunks[0]);

            let list_items: Vec<ListItem> = ITEMS
                .iter()
                .enumerate()
                .map(|(i, (label, description, _))| {
                    let line = Line::from(vec![
                        Span::styled(
                            format!("{:<18}", label),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(*description, Style::default().fg(Color::Gray)),
                    ]);
                    let mut item = ListItem::new(line);
                    if i == selected {
                        item = item.style(selection_style());
                    }
                    item
                })
                .collect();
            let list = List::new(list_items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Menu (↑/↓ or j/k)"),
            );
            f.render_widget(list, chunks[1]);

            let help = Paragraph::new(secondary_line(
                "↑/↓ or j/k navigate • Enter select • Esc quit • Ctrl+C exit",
            ));
            f.render_widget(help, chunks[2]);
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        // Wrap-around navigation keeps the UI snappy for keyboard users.
                        if selected == 0 {
                            selected = ITEMS.len() - 1;
                        } else {
                            selected -= 1;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % ITEMS.len();
                    }
                    KeyCode::Enter => {
                        guard.restore()?;
                        return Ok(ITEMS[selected].2);
                    }
                    KeyCode::Esc | KeyCode::Char('q') => {
                        guard.restore()?;
                        return Ok(MenuAction::Exit);
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Ok(MenuAction::Exit);
                    }
                    _ => {}
                }
            }
        }
    }
}
