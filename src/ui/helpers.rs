use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{Gradient, LyricRecord};

/// Accent used for tags and highlighted chips.
pub(crate) const ACCENT: Color = Color::Magenta;

/// Linear blend between two channels, `step` of `steps` along the way.
fn blend(from: u8, to: u8, step: usize, steps: usize) -> u8 {
    if steps == 0 {
        return from;
    }
    let from = i32::from(from);
    let to = i32::from(to);
    let value = from + (to - from) * step as i32 / steps as i32;
    value.clamp(0, 255) as u8
}

/// Paint a row of `width` cells fading from the first gradient stop to the
/// second. Unparseable colours fall back to a plain dim rule.
pub(crate) fn gradient_swatch(gradient: &Gradient, width: u16) -> Line<'static> {
    let width = width as usize;
    if width == 0 {
        return Line::from("");
    }
    let Some([start, end]) = gradient.rgb() else {
        return Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        ));
    };

    let steps = width.saturating_sub(1);
    let spans: Vec<Span<'static>> = (0..width)
        .map(|step| {
            let colour = Color::Rgb(
                blend(start.0, end.0, step, steps),
                blend(start.1, end.1, step, steps),
                blend(start.2, end.2, step, steps),
            );
            Span::styled(" ", Style::default().bg(colour))
        })
        .collect();
    Line::from(spans)
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Break `text` into rows of at most `width` characters, on word boundaries
/// where possible. Blank text still yields one empty row.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        if row_len > 0 && row_len + 1 + word.len() > width {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row.extend(word.iter());
        row_len += word.len();
    }

    if row_len > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// `LANGUAGE • ERA`, the kicker line above a title.
pub(crate) fn kicker_line(record: &LyricRecord, width: usize) -> Line<'static> {
    let kicker = format!("{} • {}", record.language, record.era).to_uppercase();
    Line::from(Span::styled(
        truncate_to_width(&kicker, width),
        Style::default().fg(Color::Gray),
    ))
}

/// `Artist · Year`.
pub(crate) fn byline(record: &LyricRecord, width: usize) -> Line<'static> {
    let byline = format!("{} · {}", record.artist, record.year);
    Line::from(Span::styled(
        truncate_to_width(&byline, width),
        Style::default().fg(Color::Gray),
    ))
}

fn tag_pills(record: &LyricRecord) -> Vec<String> {
    record
        .mood
        .iter()
        .chain(std::iter::once(&record.length))
        .map(|tag| format!("‹{}›", tag.to_uppercase()))
        .collect()
}

/// Mood tags followed by the length tag, each rendered as a small pill.
pub(crate) fn tag_line(record: &LyricRecord) -> Line<'static> {
    let tag_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (index, pill) in tag_pills(record).into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(pill, tag_style));
    }
    Line::from(spans)
}

/// The same pills as [`tag_line`], packed into rows no wider than `width`.
pub(crate) fn tag_rows(record: &LyricRecord, width: usize) -> Vec<Line<'static>> {
    let tag_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for pill in tag_pills(record) {
        let pill = truncate_to_width(&pill, width);
        let len = pill.chars().count();
        if used > 0 && used + 1 + len > width {
            rows.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(pill, tag_style));
        used += len;
    }
    if !spans.is_empty() {
        rows.push(Line::from(spans));
    }
    rows
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the help overlay.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn swatch_runs_from_first_to_last_stop() {
        let gradient = Gradient("#000000".into(), "#ff8040".into());
        let line = gradient_swatch(&gradient, 5);
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[0].style.bg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(line.spans[4].style.bg, Some(Color::Rgb(255, 128, 64)));
    }

    #[test]
    fn swatch_of_single_cell_uses_first_stop() {
        let gradient = Gradient("#102030".into(), "#ffffff".into());
        let line = gradient_swatch(&gradient, 1);
        assert_eq!(line.spans[0].style.bg, Some(Color::Rgb(16, 32, 48)));
    }

    #[test]
    fn swatch_falls_back_to_a_rule_for_other_colour_text() {
        for stop in ["#fff", "pink", "rgb(255, 0, 0)"] {
            let gradient = Gradient("#ffe4e6".into(), stop.into());
            let line = gradient_swatch(&gradient, 4);
            assert_eq!(line.spans.len(), 1);
            assert_eq!(line.spans[0].content, "────");
            assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        }
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        assert_eq!(truncate_to_width("Paper Planes", 20), "Paper Planes");
        assert_eq!(truncate_to_width("Paper Planes", 6), "Paper…");
        assert_eq!(truncate_to_width("Paper", 0), "");
    }

    #[test]
    fn wrapping_keeps_rows_within_width() {
        let rows = wrap_text("il ne reste que nous et la braise.", 12);
        assert_eq!(rows, ["il ne reste", "que nous et", "la braise."]);
        assert_eq!(wrap_text("", 12), [""]);
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert!(wrap_text("a b", 0).is_empty());
    }

    #[test]
    fn tag_rows_wrap_between_pills() {
        let mut record = crate::seed::anthology().remove(0);
        record.mood = vec!["Tender".into(), "Dreamy".into()];
        record.length = "Long".into();

        let wide = tag_rows(&record, 40);
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].to_string(), "‹TENDER› ‹DREAMY› ‹LONG›");

        let narrow = tag_rows(&record, 10);
        let rows: Vec<String> = narrow.iter().map(|line| line.to_string()).collect();
        assert_eq!(rows, ["‹TENDER›", "‹DREAMY›", "‹LONG›"]);
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(anyhow::anyhow!("no browser found"))
            .context("failed to open link")
            .unwrap_err();
        assert_eq!(surface_error(&err), "no browser found");
    }
}
