#![allow(dead_code)]

use std::sync::Arc;

use wordgrid::{BBox, Dictionary, Symbol, WordScanner};

pub const PITCH: f32 = 30.0;
pub const GLYPH_W: f32 = 20.0;
pub const GLYPH_H: f32 = 24.0;

/// Symbols for a board drawn as text rows; `.` and ` ` are empty tiles.
///
/// Glyphs are emitted row by row, left to right, each with a small
/// deterministic offset so lanes are not perfectly aligned.
pub fn board(rows: &[&str]) -> Vec<Symbol> {
    board_at(rows, 0.0, 0.0)
}

pub fn board_at(rows: &[&str], origin_x: f32, origin_y: f32) -> Vec<Symbol> {
    let mut out = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '.' || ch == ' ' {
                continue;
            }
            let (jx, jy) = jitter(c, r);
            let x = origin_x + c as f32 * PITCH + jx;
            let y = origin_y + r as f32 * PITCH + jy;
            out.push(Symbol::new(
                ch.to_string(),
                BBox::new(x, y, x + GLYPH_W, y + GLYPH_H),
                90.0,
            ));
        }
    }
    out
}

/// A single-row word starting at tile `(0, 0)`.
pub fn word_row(word: &str) -> Vec<Symbol> {
    board(&[word])
}

fn jitter(c: usize, r: usize) -> (f32, f32) {
    let jx = ((c * 7 + r * 3) % 5) as f32 - 2.0;
    let jy = ((c * 3 + r * 5) % 5) as f32 - 2.0;
    (jx, jy)
}

pub fn scanner(words: &[&str]) -> WordScanner {
    WordScanner::with_defaults(Arc::new(Dictionary::from_words(words.iter().copied())))
}

pub fn word_texts(sheet: &wordgrid::ScoreSheet) -> Vec<&str> {
    sheet.words.iter().map(|w| w.text.as_str()).collect()
}
