use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::app::state::CalculatorState;
use crate::catalog::{self, TECHNOLOGY_GROUPS};
use crate::error::Result;
use crate::estimator::{ComplexityTier, ProjectCategory};
use crate::ui::{
    components::utils::{centered_rect, split_horizontal, split_vertical},
    styles::{
        checkbox, focus_border, header_text, radio, secondary_line, secondary_span,
        selection_style, ACCENT,
    },
    TerminalGuard, UiRoute,
};
use crate::utils::format_amount;

/// Input pane that currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Category,
    Complexity,
    Technologies,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Category => Pane::Complexity,
            Pane::Complexity => Pane::Technologies,
            Pane::Technologies => Pane::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            Pane::Category => Pane::Technologies,
            Pane::Complexity => Pane::Category,
            Pane::Technologies => Pane::Complexity,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Pane::Category => "Project type",
            Pane::Complexity => "Complexity",
            Pane::Technologies => "Technologies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Exit,
}

/// Calculator screen model: the estimate state plus focus and cursor.
///
/// Category and complexity behave like radio groups whose selection follows
/// the arrow keys; technologies are check-boxes toggled with Space/Enter.
pub struct CalculatorView {
    state: CalculatorState,
    focus: Pane,
    tech_cursor: usize,
    technologies: Vec<&'static str>,
    show_help: bool,
}

impl CalculatorView {
    pub fn new(state: CalculatorState) -> Self {
        Self {
            state,
            focus: Pane::Category,
            tech_cursor: 0,
            technologies: catalog::technologies().collect(),
            show_help: false,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Exit;
        }
        if self.show_help {
            self.show_help = false;
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return KeyOutcome::Exit,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.focus = self.focus.prev()
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.focus == Pane::Technologies {
                    if let Some(tag) = self.technologies.get(self.tech_cursor) {
                        self.state.toggle_technology(tag);
                    }
                }
            }
            KeyCode::Char('c') => self.state.clear_technologies(),
            KeyCode::Char('?') => self.show_help = true,
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn move_cursor(&mut self, forward: bool) {
        match self.focus {
            Pane::Category => self.state.cycle_category(forward),
            Pane::Complexity => self.state.cycle_complexity(forward),
            Pane::Technologies => {
                let len = self.technologies.len();
                if len == 0 {
                    return;
                }
                self.tech_cursor = if forward {
                    (self.tech_cursor + 1) % len
                } else if self.tech_cursor == 0 {
                    len - 1
                } else {
                    self.tech_cursor - 1
                };
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let size = f.size();
        let chunks = split_vertical(
            size,
            &[
                Constraint::Length(2),
                Constraint::Min(8),
                Constraint::Length(5),
                Constraint::Length(1),
            ],
        );

        f.render_widget(
            Paragraph::new(header_text(format!(
                "Estimate CLI — {}",
                UiRoute::Calculator.title()
            ))),
            chunks[0],
        );

        let columns = split_horizontal(
            chunks[1],
            &[
                Constraint::Percentage(32),
                Constraint::Percentage(28),
                Constraint::Percentage(40),
            ],
        );
        self.draw_categories(f, columns[0]);
        self.draw_complexities(f, columns[1]);
        self.draw_technologies(f, columns[2]);
        self.draw_result(f, chunks[2]);

        f.render_widget(
            Paragraph::new(secondary_line(
                "Tab/←/→ switch pane • ↑/↓ or j/k move • Space toggle • c clear • ? help • Esc back",
            )),
            chunks[3],
        );

        if self.show_help {
            self.draw_help(f, size);
        }
    }

    fn pane_block(&self, pane: Pane) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(self.focus == pane))
            .title(pane.title())
    }

    fn draw_categories(&self, f: &mut Frame, area: Rect) {
        let card = self.state.rate_card();
        let current = self.state.category();

        let options = std::iter::once(None).chain(ProjectCategory::ALL.into_iter().map(Some));
        let items: Vec<ListItem> = options
            .map(|option| {
                let chosen = option == current;
                let label = option.map(ProjectCategory::label).unwrap_or("Not specified");
                let factor = card.category_multiplier(option);
                let mut item = ListItem::new(Line::from(vec![
                    Span::raw(format!("{} {:<20}", radio(chosen), label)),
                    secondary_span(format!("×{factor}")),
                ]));
                if chosen {
                    item = item.style(selection_style());
                }
                item
            })
            .collect();

        f.render_widget(List::new(items).block(self.pane_block(Pane::Category)), area);
    }

    fn draw_complexities(&self, f: &mut Frame, area: Rect) {
        let card = self.state.rate_card();
        let current = self.state.complexity();

        let items: Vec<ListItem> = ComplexityTier::ALL
            .into_iter()
            .map(|tier| {
                let chosen = tier == current;
                let mut item = ListItem::new(Line::from(vec![
                    Span::raw(format!("{} {:<17}", radio(chosen), tier.label())),
                    secondary_span(format!("×{}", card.complexity_multiplier(tier))),
                ]));
                if chosen {
                    item = item.style(selection_style());
                }
                item
            })
            .collect();

        f.render_widget(
            List::new(items).block(self.pane_block(Pane::Complexity)),
            area,
        );
    }

    fn draw_technologies(&self, f: &mut Frame, area: Rect) {
        let selection = self.state.technologies();
        let mut items = Vec::new();
        let mut cursor_row = 0usize;
        let mut index = 0usize;

        for group in TECHNOLOGY_GROUPS {
            items.push(ListItem::new(Line::from(
                group.name.bold().fg(Color::Gray),
            )));
            for tag in group.items {
                if index == self.tech_cursor {
                    cursor_row = items.len();
                }
                items.push(ListItem::new(format!(
                    "  {} {}",
                    checkbox(selection.contains(tag)),
                    tag
                )));
                index += 1;
            }
        }

        let mut list = List::new(items).block(self.pane_block(Pane::Technologies));
        if self.focus == Pane::Technologies {
            list = list.highlight_style(selection_style());
        }
        let mut list_state = ListState::default().with_selected(Some(cursor_row));
        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_result(&self, f: &mut Frame, area: Rect) {
        let card = self.state.rate_card();
        let result = self.state.result();
        let selected = self.state.technologies().len();

        let lines = vec![
            Line::from(vec![
                Span::raw("Estimated budget    "),
                format!("{} {}", format_amount(result.budget), card.currency)
                    .bold()
                    .fg(ACCENT),
            ]),
            Line::from(vec![
                Span::raw("Estimated duration  "),
                weeks_label(result.duration_weeks).bold().fg(ACCENT),
            ]),
            secondary_line(format!(
                "{selected} technolog{} selected • +{} {} each, budget only",
                if selected == 1 { "y" } else { "ies" },
                format_amount(card.technology_bonus.round() as u64),
                card.currency
            )),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Estimate")),
            area,
        );
    }

    fn draw_help(&self, f: &mut Frame, size: Rect) {
        let card = self.state.rate_card();
        let area = centered_rect(70, 50, size);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from("How the estimate is computed".bold().fg(ACCENT)),
            Line::from(""),
            Line::from(format!(
                "budget   = {} × type × complexity + {} × technologies",
                format_amount(card.base_price.round() as u64),
                format_amount(card.technology_bonus.round() as u64),
            )),
            Line::from(format!(
                "duration = {} weeks × type × complexity",
                card.base_duration_weeks
            )),
            Line::from(""),
            secondary_line("Both figures are rounded to the nearest whole unit."),
            secondary_line("Press any key to close."),
        ];
        f.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Help")),
            area,
        );
    }
}

pub fn weeks_label(weeks: u64) -> String {
    if weeks == 1 {
        "1 week".to_string()
    } else {
        format!("{weeks} weeks")
    }
}

/// Run the interactive calculator and hand the state back when the user leaves.
pub fn run_calculator(state: CalculatorState) -> Result<CalculatorState> {
    let mut guard = TerminalGuard::new()?;
    let mut view = CalculatorView::new(state);

    loop {
        guard.draw(|f| view.draw(f))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if view.handle_key(key) == KeyOutcome::Exit {
                    guard.restore()?;
                    return Ok(view.into_state());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(view: &mut CalculatorView, code: KeyCode) -> KeyOutcome {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn render(view: &CalculatorView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).expect("test terminal");
        terminal.draw(|f| view.draw(f)).expect("draw calculator");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn keyboard_drives_estimate() {
        let mut view = CalculatorView::new(CalculatorState::default());
        assert_eq!(view.focus(), Pane::Category);

        for _ in 0..3 {
            press(&mut view, KeyCode::Down);
        }
        assert_eq!(view.state().category(), Some(ProjectCategory::Ecommerce));

        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Char('j'));
        assert_eq!(view.state().complexity(), ComplexityTier::Complex);
        assert_eq!(view.state().result().budget, 14400);
        assert_eq!(view.state().result().duration_weeks, 12);

        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus(), Pane::Technologies);
        press(&mut view, KeyCode::Char(' '));
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Enter);
        assert!(view.state().technologies().contains("JavaScript"));
        assert!(view.state().technologies().contains("TypeScript"));
        assert_eq!(view.state().result().budget, 16400);
        assert_eq!(view.state().result().duration_weeks, 12);

        press(&mut view, KeyCode::Char('c'));
        assert!(view.state().technologies().is_empty());
        assert_eq!(view.state().result().budget, 14400);

        assert_eq!(press(&mut view, KeyCode::Esc), KeyOutcome::Exit);
    }

    #[test]
    fn space_outside_technologies_does_nothing() {
        let mut view = CalculatorView::new(CalculatorState::default());
        press(&mut view, KeyCode::Char(' '));
        assert!(view.state().technologies().is_empty());
        assert_eq!(view.state().result().budget, 5000);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut view = CalculatorView::new(CalculatorState::default());
        press(&mut view, KeyCode::BackTab);
        assert_eq!(view.focus(), Pane::Technologies);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus(), Pane::Category);
    }

    #[test]
    fn help_overlay_swallows_next_key() {
        let mut view = CalculatorView::new(CalculatorState::default());
        press(&mut view, KeyCode::Char('?'));
        assert!(render(&view).contains("How the estimate is computed"));
        assert_eq!(press(&mut view, KeyCode::Esc), KeyOutcome::Continue);
        assert!(!render(&view).contains("How the estimate is computed"));
        assert_eq!(press(&mut view, KeyCode::Esc), KeyOutcome::Exit);
    }

    #[test]
    fn ctrl_c_exits() {
        let mut view = CalculatorView::new(CalculatorState::default());
        let outcome = view.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(outcome, KeyOutcome::Exit);
    }

    #[test]
    fn renders_current_estimate() {
        let mut state = CalculatorState::default();
        state.set_category(Some(ProjectCategory::Startup));
        state.set_complexity(ComplexityTier::Simple);
        state.toggle_technology("Docker");
        state.toggle_technology("AWS");
        let view = CalculatorView::new(state);

        let screen = render(&view);
        assert!(screen.contains("4,800 EUR"), "budget missing from screen");
        assert!(screen.contains("2 weeks"), "duration missing from screen");
        assert!(screen.contains("[x] Docker"));
        assert!(screen.contains("[ ] Git"));
        assert!(screen.contains("Startup MVP"));
    }

    #[test]
    fn week_label_pluralises() {
        assert_eq!(weeks_label(1), "1 week");
        assert_eq!(weeks_label(0), "0 weeks");
        assert_eq!(weeks_label(12), "12 weeks");
    }
}
