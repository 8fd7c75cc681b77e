use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::catalog::{Section, CASE_STUDIES, CLIENTS, SERVICES, TECHNOLOGY_GROUPS};
use crate::error::Result;
use crate::ui::{
    components::utils::split_vertical,
    styles::{header_text, secondary_line, ACCENT},
    TerminalGuard, UiRoute,
};

/// Styled lines for one catalog section.
pub fn section_lines(section: Section) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match section {
        Section::Services => {
            for service in SERVICES {
                lines.push(Line::from(vec![
                    service.title.bold().fg(ACCENT),
                    Span::raw("  "),
                    format!("[{}]", service.tag).dim(),
                ]));
                lines.push(Line::from(service.description));
                lines.push(Line::from(""));
            }
        }
        Section::Technologies => {
            for group in TECHNOLOGY_GROUPS {
                lines.push(Line::from(group.name.bold().fg(ACCENT)));
                lines.push(Line::from(format!("  {}", group.items.join(" · "))));
                lines.push(Line::from(""));
            }
        }
        Section::CaseStudies => {
            for study in CASE_STUDIES {
                lines.push(Line::from(study.title.bold().fg(ACCENT)));
                lines.push(secondary_line(study.client));
                for (label, body) in [
                    ("Challenge", study.challenge),
                    ("Solution", study.solution),
                    ("Result", study.result),
                ] {
                    lines.push(Line::from(vec![
                        format!("{label:<10}").bold(),
                        Span::raw(body),
                    ]));
                }
                lines.push(Line::from(""));
            }
        }
        Section::Clients => {
            for client in CLIENTS {
                lines.push(Line::from(format!("• {client}")));
            }
        }
    }
    lines
}

/// Scrollable read-only view of a catalog section.
pub fn run_catalog(section: Section) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let lines = section_lines(section);
    let max_scroll = lines.len().saturating_sub(1) as u16;
    let mut scroll = 0u16;

    loop {
        guard.draw(|f| {
            let size = f.size();
            let chunks = split_vertical(
                size,
                &[
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ],
            );

            f.render_widget(
                Paragraph::new(header_text(format!(
                    "Estimate CLI — {}",
                    UiRoute::Catalog.title()
                ))),
                chunks[0],
            );

            let body = Paragraph::new(lines.clone())
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(section.title()),
                );
            f.render_widget(body, chunks[1]);

            f.render_widget(
                Paragraph::new(secondary_line("↑/↓ or j/k scroll • Esc back")),
                chunks[2],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match k.code {
                    KeyCode::Up | KeyCode::Char('k') => scroll = scroll.saturating_sub(1),
                    KeyCode::Down | KeyCode::Char('j') => scroll = (scroll + 1).min(max_scroll),
                    KeyCode::Home => scroll = 0,
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                        guard.restore()?;
                        return Ok(());
                    }
                    KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                        guard.restore()?;
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn services_list_every_title() {
        let text = plain(&section_lines(Section::Services));
        for service in SERVICES {
            assert!(text.iter().any(|line| line.starts_with(service.title)));
        }
    }

    #[test]
    fn technologies_are_grouped() {
        let text = plain(&section_lines(Section::Technologies));
        assert_eq!(text[0], "Languages");
        assert!(text[1].contains("TypeScript"));
        assert!(text.iter().any(|line| line.contains("Kubernetes")));
    }

    #[test]
    fn case_studies_show_outcomes() {
        let text = plain(&section_lines(Section::CaseStudies));
        assert!(text.iter().any(|line| line.starts_with("Result")));
        assert!(text.iter().any(|line| line.contains("ISO 27001")));
    }

    #[test]
    fn clients_are_bulleted() {
        let text = plain(&section_lines(Section::Clients));
        assert_eq!(text.len(), CLIENTS.len());
        assert_eq!(text[0], "• LoremCorp");
    }
}
