//! Text measurement without a font: every grapheme is assumed to advance
//! `0.6 em`. Good enough to size boxes; the platform shapes the real glyphs.

use unicode_segmentation::UnicodeSegmentation;

const ADVANCE_EM: f32 = 0.6;
const ELLIPSIS: &str = "…";
// Advances are not exact in f32; a line this much over still fits
const FIT_EPSILON_PX: f32 = 0.01;

pub fn text_width(s: &str, size_px: f32) -> f32 {
    s.graphemes(true).count() as f32 * size_px * ADVANCE_EM
}

fn fits(s: &str, size_px: f32, max_w_px: f32) -> bool {
    text_width(s, size_px) <= max_w_px + FIT_EPSILON_PX
}

/// Width of the widest word, the narrowest a wrapped paragraph can get.
pub fn min_content_width(text: &str, size_px: f32) -> f32 {
    text.split_whitespace()
        .map(|w| text_width(w, size_px))
        .fold(0.0, f32::max)
}

/// Greedy word wrap into lines no wider than `max_w_px`. Words wider than a
/// whole line are broken between graphemes. Explicit newlines are kept.
pub fn wrap_lines(text: &str, size_px: f32, max_w_px: f32, max_lines: Option<usize>) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, size_px, max_w_px, &mut lines);
    }

    if let Some(n) = max_lines.filter(|n| *n > 0)
        && lines.len() > n
    {
        lines.truncate(n);
        if let Some(last) = lines.last_mut() {
            *last = ellipsize_line(&format!("{last}{ELLIPSIS}"), size_px, max_w_px);
        }
    }
    lines
}

fn wrap_paragraph(paragraph: &str, size_px: f32, max_w_px: f32, out: &mut Vec<String>) {
    let mut line = String::new();
    for token in paragraph.split_word_bounds() {
        let is_space = token.chars().all(char::is_whitespace);
        if line.is_empty() && is_space {
            continue;
        }
        if fits(&format!("{line}{token}"), size_px, max_w_px) {
            line.push_str(token);
            continue;
        }
        if is_space {
            out.push(std::mem::take(&mut line).trim_end().to_string());
            continue;
        }
        if !line.is_empty() {
            out.push(std::mem::take(&mut line).trim_end().to_string());
        }
        // Overlong word: hard-break it
        for g in token.graphemes(true) {
            if !line.is_empty() && !fits(&format!("{line}{g}"), size_px, max_w_px) {
                out.push(std::mem::take(&mut line));
            }
            line.push_str(g);
        }
    }
    out.push(line.trim_end().to_string());
}

/// Cuts `line` so that it fits `max_w_px` including a trailing ellipsis.
pub fn ellipsize_line(line: &str, size_px: f32, max_w_px: f32) -> String {
    if fits(line, size_px, max_w_px) {
        return line.to_string();
    }
    let budget = max_w_px - text_width(ELLIPSIS, size_px);
    let mut out = String::new();
    for g in line.graphemes(true) {
        if !fits(&format!("{out}{g}"), size_px, budget) {
            break;
        }
        out.push_str(g);
    }
    format!("{}{ELLIPSIS}", out.trim_end())
}
