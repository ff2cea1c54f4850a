//! Unified diff rendering with aligned line numbers

use crossterm::style::Stylize;

use crate::diff::{self, DiffTag};
use crate::ui::theme;

pub fn render_unified_diff_with_line_numbers(
    path: &str,
    old: &str,
    new: &str,
    supports_color: bool,
) -> String {
    let result = diff::diff(old, new);
    let old_lines = old.lines().count().max(1);
    let new_lines = new.lines().count().max(1);
    let width = old_lines.max(new_lines).to_string().len();

    let mut out = String::new();

    let header_a = format!("--- a/{}", path);
    let header_b = format!("+++ b/{}", path);
    out.push_str(&color_line(&header_a, DiffTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');
    out.push_str(&color_line(&header_b, DiffTag::Equal, supports_color, LineStyle::Header));
    out.push('\n');

    for line in &result.lines {
        let sign = match line.tag {
            DiffTag::Delete => "-",
            DiffTag::Insert => "+",
            DiffTag::Equal => " ",
        };

        let old_col = line
            .old_line
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));
        let new_col = line
            .new_line
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));

        let value = line.content.trim_end_matches('\n');
        let rendered = format!("{old_col} {new_col} {sign} {value}");
        out.push_str(&color_line(&rendered, line.tag, supports_color, LineStyle::Body));
        out.push('\n');
    }

    out
}

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Header,
    Body,
}

fn color_line(s: &str, tag: DiffTag, supports_color: bool, style: LineStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    match style {
        LineStyle::Header => format!("{}", s.with(theme::colors::INFO)),
        LineStyle::Body => match tag {
            DiffTag::Delete => format!("{}", s.with(theme::colors::ERROR)),
            DiffTag::Insert => format!("{}", s.with(theme::colors::SUCCESS)),
            DiffTag::Equal => format!("{}", s.with(theme::colors::DIM)),
        },
    }
}
