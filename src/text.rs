//! Text drawing helpers
//!
//! Font loading is the one recoverable failure in this crate: if the
//! bundled display font is missing the built-in macroquad font is used
//! instead and the program carries on. Word wrapping takes the measuring
//! function as a parameter so the layout logic works without a window.

use macroquad::prelude::*;

/// Try to load the display font, falling back to the built-in font
pub async fn load_display_font(path: &str) -> Option<Font> {
    match load_ttf_font(path).await {
        Ok(font) => {
            println!("Loaded display font from {}", path);
            Some(font)
        }
        Err(e) => {
            println!("Failed to load display font: {}, using built-in font", e);
            None
        }
    }
}

/// Greedy word wrap: each line takes as many whole words as fit within
/// `max_width` according to `measure`. A single word wider than the
/// limit gets its own (overflowing) line.
pub fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if current.is_empty() || measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw a single line with its top edge at `y`
pub fn draw_label(text: &str, x: f32, y: f32, size: u16, color: Color, font: Option<&Font>) {
    draw_text_ex(
        text,
        x,
        y + size as f32,
        TextParams {
            font,
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

/// Draw wrapped text with its top edge at `y`; returns the y below the
/// last line drawn
pub fn draw_wrapped(
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    size: u16,
    color: Color,
    font: Option<&Font>,
) -> f32 {
    let lines = wrap_words(text, max_width, |s| {
        measure_text(s, font, size, 1.0).width
    });
    let line_height = size as f32 * 1.25;
    let mut top = y;
    for line in &lines {
        draw_label(line, x, top, size, color, font);
        top += line_height;
    }
    top
}
