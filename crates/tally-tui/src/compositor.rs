// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Escape-aware line compositing. Frames are lines of styled text; an ANSI
//! escape sequence starts at `\x1b` and ends at `m`, occupies zero visual
//! columns, and is never split by any operation here.

/// Number of visual columns in a line, ignoring escape sequences.
pub fn visual_width(line: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in line.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            continue;
        }
        width += 1;
    }
    width
}

/// Keeps the first `columns` visual columns. Escape sequences seen before
/// the cut are copied verbatim; the cut never lands inside one.
pub fn truncate_columns(line: &str, columns: usize) -> String {
    let mut out = String::new();
    let mut taken = 0;
    let mut in_escape = false;
    for ch in line.chars() {
        if in_escape {
            out.push(ch);
            if ch == 'm' {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            out.push(ch);
            continue;
        }
        if taken >= columns {
            break;
        }
        out.push(ch);
        taken += 1;
    }
    out
}

/// Drops the first `columns` visual columns. Escape sequences inside the
/// skipped region are still copied, so the remainder keeps its styling.
pub fn skip_columns(line: &str, columns: usize) -> String {
    let mut out = String::new();
    let mut skipped = 0;
    let mut in_escape = false;
    for ch in line.chars() {
        if in_escape {
            out.push(ch);
            if ch == 'm' {
                in_escape = false;
            }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            out.push(ch);
            continue;
        }
        if skipped < columns {
            skipped += 1;
            continue;
        }
        out.push(ch);
    }
    out
}

/// Centers `modal` over `base` within a `term_width` x `term_height` frame.
///
/// The modal's width is the max visual width over its lines, computed once;
/// every row shares the resulting left edge even when the lines are ragged.
/// The base is padded with empty lines to the frame height; rows the modal
/// does not touch come back byte-identical. A base row under the modal is
/// split into the columns left of the box (space-padded out to the modal's
/// left edge when shorter) and the columns right of that row's content.
pub fn overlay(
    base: &[String],
    modal: &[String],
    term_width: usize,
    term_height: usize,
) -> Vec<String> {
    let modal_height = modal.len();
    let modal_width = modal.iter().map(|line| visual_width(line)).max().unwrap_or(0);
    let modal_top = term_height.saturating_sub(modal_height) / 2;
    let start_col = term_width.saturating_sub(modal_width) / 2;

    let mut frame: Vec<String> = base.to_vec();
    while frame.len() < term_height {
        frame.push(String::new());
    }

    for (offset, modal_line) in modal.iter().enumerate() {
        let row = modal_top + offset;
        let Some(base_line) = frame.get(row) else {
            break;
        };

        let mut left = truncate_columns(base_line, start_col);
        let left_width = visual_width(&left);
        if left_width < start_col {
            left.push_str(&" ".repeat(start_col - left_width));
        }
        let right = skip_columns(base_line, start_col + visual_width(modal_line));

        frame[row] = format!("{left}{modal_line}{right}");
    }
    frame
}
