//! Line wrapping for the structured document.
//!
//! Widths are estimated from display columns: Helvetica averages roughly half
//! an em per glyph, which keeps wrapped lines inside the text column without
//! shipping font metrics.

use unicode_width::UnicodeWidthStr;

const AVG_GLYPH_EM: f64 = 0.5;
const PT_TO_MM: f64 = 25.4 / 72.0;

/// Estimated rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.width() as f64 * font_size_pt * AVG_GLYPH_EM * PT_TO_MM
}

/// Split `text` into lines no wider than `max_width_mm`.
///
/// Explicit newlines are kept, words are wrapped greedily, and a word longer
/// than a whole line is broken between characters. Empty text yields a
/// single empty line.
pub fn wrap_text(text: &str, font_size_pt: f64, max_width_mm: f64) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end(), font_size_pt, max_width_mm, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, size: f64, max_width: f64, lines: &mut Vec<String>) {
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width_mm(&candidate, size) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width_mm(word, size) <= max_width {
            current = word.to_string();
        } else {
            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && text_width_mm(&next, size) > max_width {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                } else {
                    current = next;
                }
            }
        }
    }

    lines.push(current);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Type: Monolith", 11.0, 180.0), vec!["Type: Monolith"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 11.0, 180.0), vec![String::new()]);
    }

    #[test]
    fn long_text_wraps_within_width() {
        let text = "word ".repeat(200);
        let lines = wrap_text(&text, 11.0, 180.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width_mm(line, 11.0) <= 180.0, "line too wide: {line}");
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined.split_whitespace().count(), 200);
    }

    #[test]
    fn overlong_word_is_broken() {
        let word = "x".repeat(400);
        let lines = wrap_text(&word, 11.0, 180.0);

        assert!(lines.len() >= 2);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn newlines_start_new_lines() {
        assert_eq!(wrap_text("a\nb", 11.0, 180.0), vec!["a", "b"]);
    }
}
