use std::cell::Cell;
use std::cmp::min;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::explorer::{Explorer, FilteredView};
use crate::models::{Facet, LyricRecord};

use super::helpers::{
    byline, centered_rect, gradient_swatch, kicker_line, surface_error, tag_line, tag_rows,
    truncate_to_width, wrap_text, ACCENT,
};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the title bar holding the intro and the search box.
const HEADER_HEIGHT: u16 = 4;
/// Height allocation per lyric card in the result list.
const CARD_HEIGHT: u16 = 7;
const INTRO: &str = "Drift through a handpicked anthology of romantic lyrics in five languages. \
     Sift by mood, era, and cadence, or follow the curated signals from our stargazing editors \
     to discover the perfect confession.";
const SPOTLIGHT_BLURB: &str = "Dive deep into a highlighted lyric while you explore. \
     Switch selections to reveal full verses, context, and cadence cues.";
/// Shown in place of the cards when nothing matches.
const EMPTY_VIEW_MESSAGE: &str =
    "No lyrics match that constellation. Try softening your filters or searching another phrase.";
/// Shown in the spotlight when nothing is selected.
const EMPTY_SPOTLIGHT_MESSAGE: &str = "Select a lyric to unfold its verses and hidden whispers.";

/// Which region of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Cards,
    Filters,
    Trending,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Cards => Pane::Filters,
            Pane::Filters => Pane::Trending,
            Pane::Trending => Pane::Cards,
        }
    }

    fn previous(self) -> Self {
        match self {
            Pane::Cards => Pane::Trending,
            Pane::Filters => Pane::Cards,
            Pane::Trending => Pane::Filters,
        }
    }
}

/// Input modes layered over the panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Searching,
    Help,
}

/// Position of the chip cursor inside the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChipCursor {
    facet: usize,
    value: usize,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    catalog: Catalog,
    explorer: Explorer,
    card_cursor: usize,
    chip: ChipCursor,
    trending_cursor: usize,
    pane: Pane,
    mode: Mode,
    status: Option<StatusMessage>,
    spotlight_scroll: u16,
    /// Largest useful scroll offset for the spotlight, as of the last draw.
    spotlight_max: Cell<u16>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let explorer = Explorer::new(&catalog);
        let mut app = Self {
            catalog,
            explorer,
            card_cursor: 0,
            chip: ChipCursor::default(),
            trending_cursor: 0,
            pane: Pane::Cards,
            mode: Mode::Normal,
            status: None,
            spotlight_scroll: 0,
            spotlight_max: Cell::new(0),
        };
        app.focus_selected_card();
        app
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The filtered view for the current explorer state.
    pub fn view(&self) -> FilteredView<'_> {
        self.explorer.view(&self.catalog)
    }

    /// Dispatch one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        match self.mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching => self.handle_search_key(code),
            Mode::Help => {
                self.mode = Mode::Normal;
            }
        }
        Ok(exit)
    }

    /// Wipe the search box in one go.
    pub(crate) fn handle_ctrl_u(&mut self) {
        if !self.explorer.search_term().is_empty() {
            self.explorer.set_search_term(String::new());
            self.after_view_change();
            self.set_status("Search cleared.", StatusKind::Info);
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.pane = self.pane.next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.pane = self.pane.previous();
                return Ok(());
            }
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                self.mode = Mode::Searching;
                return Ok(());
            }
            KeyCode::Char('?') => {
                self.mode = Mode::Help;
                return Ok(());
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.explorer.clear_filters();
                self.after_view_change();
                self.set_status("Filters cleared.", StatusKind::Info);
                return Ok(());
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.open_selected_link();
                return Ok(());
            }
            KeyCode::Char('j') | KeyCode::Char('J') => {
                self.scroll_spotlight(1);
                return Ok(());
            }
            KeyCode::Char('k') | KeyCode::Char('K') => {
                self.scroll_spotlight(-1);
                return Ok(());
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let position = digit as usize - '1' as usize;
                if position < self.catalog.trending_len() {
                    self.trending_cursor = position;
                    self.activate_trending(position);
                }
                return Ok(());
            }
            _ => {}
        }

        match self.pane {
            Pane::Cards => self.handle_cards_key(code),
            Pane::Filters => self.handle_filters_key(code),
            Pane::Trending => self.handle_trending_key(code),
        }
        Ok(())
    }

    fn handle_cards_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_card_cursor(-1),
            KeyCode::Down => self.move_card_cursor(1),
            KeyCode::PageUp => self.move_card_cursor(-5),
            KeyCode::PageDown => self.move_card_cursor(5),
            KeyCode::Home => self.card_cursor = 0,
            KeyCode::End => {
                let last = self.view().len().saturating_sub(1);
                self.card_cursor = last;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select_card_under_cursor(),
            _ => {}
        }
    }

    fn handle_filters_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.move_chip(-1),
            KeyCode::Right => self.move_chip(1),
            KeyCode::Up => self.move_chip_group(-1),
            KeyCode::Down => self.move_chip_group(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_chip_under_cursor(),
            _ => {}
        }
    }

    fn handle_trending_key(&mut self, code: KeyCode) {
        let len = self.catalog.trending_len();
        match code {
            KeyCode::Up => self.trending_cursor = self.trending_cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.trending_cursor + 1 < len {
                    self.trending_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_trending(self.trending_cursor),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = Mode::Normal;
                return;
            }
            KeyCode::Up => {
                self.move_card_cursor(-1);
                return;
            }
            KeyCode::Down => {
                self.move_card_cursor(1);
                return;
            }
            KeyCode::Backspace => {
                let mut term = self.explorer.search_term().to_string();
                if term.pop().is_none() {
                    return;
                }
                self.explorer.set_search_term(term);
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                let mut term = self.explorer.search_term().to_string();
                term.push(ch);
                self.explorer.set_search_term(term);
            }
            _ => return,
        }
        self.after_view_change();
    }

    /// Trending shortcut: spotlight the entry and start the browse over.
    fn activate_trending(&mut self, position: usize) {
        let Some(record) = self.catalog.trending_at(position) else {
            return;
        };
        let title = record.display_title();
        self.explorer.select_trending(record);
        self.spotlight_scroll = 0;
        self.after_view_change();
        self.focus_selected_card();
        info!(title = %title, "trending lyric opened");
        self.set_status(format!("Spotlighting {title}."), StatusKind::Info);
    }

    fn select_card_under_cursor(&mut self) {
        let Some(record) = self.view().get(self.card_cursor) else {
            return;
        };
        let title = record.display_title();
        let record = record.clone();
        self.explorer.select(&record);
        self.spotlight_scroll = 0;
        self.set_status(format!("Spotlighting {title}."), StatusKind::Info);
    }

    fn toggle_chip_under_cursor(&mut self) {
        let facet = Facet::ALL[self.chip.facet];
        let Some(value) = self
            .catalog
            .vocabulary()
            .values(facet)
            .get(self.chip.value)
            .cloned()
        else {
            return;
        };
        self.explorer.toggle_filter(facet, &value);
        self.after_view_change();

        let count = self.view().len();
        let message = match self.explorer.filters().get(facet) {
            Some(active) => format!("{facet}: {active} ({count} shown)."),
            None => format!("{facet} filter removed ({count} shown)."),
        };
        self.set_status(message, StatusKind::Info);
    }

    fn open_selected_link(&mut self) {
        let Some(record) = self.explorer.selected(&self.catalog) else {
            self.set_status("No lyric selected.", StatusKind::Error);
            return;
        };
        let Some(link) = record.link().map(str::to_string) else {
            self.set_status("This lyric does not have a link.", StatusKind::Error);
            return;
        };
        let title = record.display_title();

        match open_link(&link) {
            Ok(()) => {
                info!(%link, "opened outbound link");
                self.set_status(format!("Opened {title}."), StatusKind::Info);
            }
            Err(err) => {
                let err = anyhow::Error::new(err).context("failed to open link");
                warn!(%link, error = %err, "could not open outbound link");
                self.set_status(
                    format!("Failed to open link: {}", surface_error(&err)),
                    StatusKind::Error,
                );
            }
        }
    }

    fn scroll_spotlight(&mut self, offset: i32) {
        let max = i32::from(self.spotlight_max.get());
        let next = (i32::from(self.spotlight_scroll) + offset).clamp(0, max);
        self.spotlight_scroll = next as u16;
    }

    /// Keep cursors valid after the view or the vocabulary changed.
    fn after_view_change(&mut self) {
        let len = self.view().len();
        if len == 0 {
            self.card_cursor = 0;
        } else if self.card_cursor >= len {
            self.card_cursor = len - 1;
        }
        debug!(shown = len, "view recomputed");
    }

    /// Park the card cursor on the spotlighted record when it is visible.
    fn focus_selected_card(&mut self) {
        let position = self
            .explorer
            .selected_id()
            .and_then(|id| self.view().position(id));
        if let Some(position) = position {
            self.card_cursor = position;
        }
    }

    fn move_card_cursor(&mut self, offset: isize) {
        let len = self.view().len();
        if len == 0 {
            return;
        }
        let new = (self.card_cursor as isize + offset).clamp(0, len as isize - 1);
        self.card_cursor = new as usize;
    }

    fn move_chip(&mut self, offset: isize) {
        let len = self
            .catalog
            .vocabulary()
            .values(Facet::ALL[self.chip.facet])
            .len();
        if len == 0 {
            return;
        }
        let new = (self.chip.value as isize + offset).rem_euclid(len as isize);
        self.chip.value = new as usize;
    }

    fn move_chip_group(&mut self, offset: isize) {
        let groups = Facet::ALL.len() as isize;
        self.chip.facet = (self.chip.facet as isize + offset).rem_euclid(groups) as usize;
        let len = self
            .catalog
            .vocabulary()
            .values(Facet::ALL[self.chip.facet])
            .len();
        self.chip.value = min(self.chip.value, len.saturating_sub(1));
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let filter_height = Facet::ALL.len() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(filter_height),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        self.draw_filters(frame, chunks[1]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[2]);
        self.draw_cards(frame, columns[0]);

        let trending_height = self.catalog.trending_len() as u16 + 2;
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(trending_height)])
            .split(columns[1]);
        self.draw_spotlight(frame, sidebar[0]);
        self.draw_trending(frame, sidebar[1]);

        self.draw_footer(frame, chunks[3]);

        if self.mode == Mode::Help {
            self.draw_help(frame, area);
        }
    }

    fn pane_block(&self, title: &str, pane: Pane) -> Block<'static> {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string());
        if self.pane == pane && self.mode != Mode::Searching {
            block.border_style(Style::default().fg(Color::Yellow))
        } else {
            block
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let searching = self.mode == Mode::Searching;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Love Lyrics Atlas ",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        if searching {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let inner = block.inner(area);
        let intro = Line::from(Span::styled(
            truncate_to_width(INTRO, inner.width as usize),
            Style::default().fg(Color::Gray).italic(),
        ));

        let term = self.explorer.search_term();
        let search = if term.is_empty() && !searching {
            Line::from(Span::styled(
                "Search for lyrics, artists, emotions, or words... (press /)",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("Search: ", Style::default().fg(Color::Gray)),
                Span::raw(term.to_string()),
            ])
        };

        let paragraph = Paragraph::new(vec![intro, search]).block(block);
        frame.render_widget(paragraph, area);

        if searching {
            let typed = u16::try_from(term.chars().count()).unwrap_or(u16::MAX);
            let cursor_x = inner
                .x
                .saturating_add("Search: ".len() as u16)
                .saturating_add(typed);
            frame.set_cursor_position((
                cursor_x.min(inner.right().saturating_sub(1)),
                inner.y.saturating_add(1),
            ));
        }
    }

    fn draw_filters(&self, frame: &mut Frame, area: Rect) {
        let block = self.pane_block(" Filters · [c] Clear ", Pane::Filters);
        let focused = self.pane == Pane::Filters && self.mode == Mode::Normal;
        let label_width = Facet::ALL
            .iter()
            .map(|facet| facet.label().len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = Facet::ALL
            .iter()
            .enumerate()
            .map(|(group, facet)| {
                let active = self.explorer.filters().get(*facet);
                let mut spans = vec![Span::styled(
                    format!("{:<width$}  ", facet.label().to_uppercase(), width = label_width),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )];
                for (index, value) in self.catalog.vocabulary().values(*facet).iter().enumerate() {
                    let mut style = if active == Some(value.as_str()) {
                        Style::default()
                            .fg(Color::White)
                            .bg(ACCENT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(ACCENT)
                    };
                    if focused && self.chip == (ChipCursor { facet: group, value: index }) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(Span::styled(format!(" {value} "), style));
                    spans.push(Span::raw(" "));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_cards(&self, frame: &mut Frame, area: Rect) {
        let view = self.view();
        let title = format!(" Lyrics · {} of {} ", view.len(), self.catalog.len());
        let block = self.pane_block(&title, Pane::Cards);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if view.is_empty() {
            let message = Paragraph::new(EMPTY_VIEW_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            frame.render_widget(message, inner);
            return;
        }

        self.render_lyric_cards(frame, inner, view.records());
    }

    fn render_lyric_cards(&self, frame: &mut Frame, area: Rect, records: &[&LyricRecord]) {
        if area.height == 0 {
            return;
        }

        let card_height = CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = records.len();
        let cursor = min(self.card_cursor, len.saturating_sub(1));
        let mut start = if cursor >= capacity {
            cursor + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);

        let constraints: Vec<Constraint> = (start..end)
            .map(|_| Constraint::Length(CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let selected_id = self.explorer.selected_id();
        let cards_focused = self.pane == Pane::Cards;

        for (offset, chunk) in rows.iter().enumerate() {
            let index = start + offset;
            let Some(record) = records.get(index) else {
                break;
            };
            if chunk.height == 0 {
                continue;
            }

            let is_selected = selected_id == Some(record.id.as_str());
            let under_cursor = cards_focused && index == cursor;

            let mut block = Block::default().borders(Borders::ALL);
            if under_cursor {
                block = block.border_style(Style::default().fg(Color::Yellow));
            } else if is_selected {
                block = block.border_style(Style::default().fg(ACCENT));
            }

            let title = if under_cursor {
                format!("▶ {}", record.title)
            } else {
                record.title.clone()
            };
            let mut title_style = Style::default().add_modifier(Modifier::BOLD);
            if is_selected {
                title_style = title_style.fg(ACCENT);
            }

            // One row per line so the tags always keep the last row.
            let width = chunk.width.saturating_sub(2) as usize;
            let lines = vec![
                kicker_line(record, width),
                Line::from(Span::styled(truncate_to_width(&title, width), title_style)),
                byline(record, width),
                Line::from(Span::raw(truncate_to_width(&record.excerpt, width))),
                tag_line(record),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Left);
            frame.render_widget(paragraph, *chunk);
        }
    }

    fn draw_spotlight(&self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Spotlight · Curated Echo ");
        let inner = block.inner(area);

        let lines = self.spotlight_lines(inner.width);
        let rows = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let max_scroll = rows.saturating_sub(inner.height);
        self.spotlight_max.set(max_scroll);
        let scroll = min(self.spotlight_scroll, max_scroll);

        if max_scroll > 0 {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" [j/k] {scroll}/{max_scroll} "),
                    Style::default().fg(Color::Cyan),
                ))
                .alignment(Alignment::Right),
            );
        }
        frame.render_widget(block, area);

        // Rows are pre-wrapped to the panel width so the scroll range is exact.
        let paragraph = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    fn spotlight_lines(&self, width: u16) -> Vec<Line<'static>> {
        let columns = width as usize;
        let rows = |text: &str, style: Style| -> Vec<Line<'static>> {
            wrap_text(text, columns)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, style)))
                .collect()
        };

        let mut lines = rows(SPOTLIGHT_BLURB, Style::default().fg(Color::DarkGray));
        lines.push(Line::from(""));

        let Some(record) = self.explorer.selected(&self.catalog) else {
            lines.extend(rows(EMPTY_SPOTLIGHT_MESSAGE, Style::default().fg(Color::Gray)));
            return lines;
        };

        lines.push(gradient_swatch(&record.gradient, width));
        lines.push(kicker_line(record, columns));
        lines.extend(rows(
            &record.title,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.extend(rows(
            &format!("{} · {}", record.artist, record.year).to_uppercase(),
            Style::default().fg(Color::Gray),
        ));
        lines.push(gradient_swatch(&record.gradient, width));
        lines.push(Line::from(""));
        for verse in &record.lyrics {
            lines.extend(rows(verse, Style::default().italic()));
        }
        lines.push(Line::from(""));
        lines.extend(tag_rows(record, columns));

        if record.link().is_some() {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(
                    "[o]",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Listen on Spotify", Style::default().fg(Color::Green)),
            ]));
        }
        lines
    }

    fn draw_trending(&self, frame: &mut Frame, area: Rect) {
        let block = self.pane_block(" Trending ", Pane::Trending);
        let items: Vec<ListItem> = self
            .catalog
            .trending()
            .enumerate()
            .map(|(index, record)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", index + 1), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        record.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", record.artist.to_uppercase()),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(format!("  {}", record.year), Style::default().fg(ACCENT)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        if self.pane == Pane::Trending {
            state.select(Some(self.trending_cursor));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hint = |key: &'static str, label: &'static str| {
            [Span::styled(key, key_style), Span::raw(label)]
        };

        let spans: Vec<Span<'static>> = match (self.mode, self.pane) {
            (Mode::Searching, _) => [
                hint("[type]", " Search   "),
                hint("[Backspace]", " Delete   "),
                hint("[↑↓]", " Move   "),
                hint("[Enter/Esc]", " Done"),
            ]
            .concat(),
            (Mode::Help, _) => hint("[any key]", " Close").to_vec(),
            (Mode::Normal, Pane::Cards) => [
                hint("[↑↓]", " Move   "),
                hint("[Enter]", " Spotlight   "),
                hint("[j/k]", " Verses   "),
                hint("[/]", " Search   "),
                hint("[Tab]", " Pane   "),
                hint("[o]", " Listen   "),
                hint("[?]", " Help   "),
                hint("[q]", " Quit"),
            ]
            .concat(),
            (Mode::Normal, Pane::Filters) => [
                hint("[←→]", " Chip   "),
                hint("[↑↓]", " Group   "),
                hint("[Enter]", " Toggle   "),
                hint("[c]", " Clear   "),
                hint("[Tab]", " Pane   "),
                hint("[q]", " Quit"),
            ]
            .concat(),
            (Mode::Normal, Pane::Trending) => [
                hint("[↑↓]", " Move   "),
                hint("[Enter]", " Open & Reset   "),
                hint("[1-3]", " Jump   "),
                hint("[Tab]", " Pane   "),
                hint("[q]", " Quit"),
            ]
            .concat(),
        };
        Line::from(spans)
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let rows = [
            ("Tab / Shift+Tab", "Cycle cards, filters and trending"),
            ("/ or f", "Edit the search box"),
            ("Ctrl+U", "Clear the search box"),
            ("Enter", "Spotlight card, toggle chip, open trending"),
            ("c", "Clear every filter"),
            ("1-3", "Open a trending lyric (resets search and filters)"),
            ("j / k", "Scroll the spotlight verses"),
            ("o", "Listen to the spotlighted lyric"),
            ("q / Esc", "Quit"),
        ];
        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, text)| {
                Line::from(vec![
                    Span::styled(format!("{key:<16}"), key_style),
                    Span::raw(*text),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title(" Keys ").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
