//! Text measurement and truncation for axis labels.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Shorten `text` so it fits `max_px`, ending in a single ellipsis when cut.
/// Returns at least one character plus the ellipsis for non-empty input.
pub fn fit_label(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut kept: Vec<char> = text.chars().collect();
    while kept.len() > 1 {
        kept.pop();
        let candidate: String = kept.iter().collect::<String>() + "…";
        if estimate_text_width_px(&candidate, font_px) <= max_px {
            return candidate;
        }
    }
    kept.into_iter().collect::<String>() + "…"
}
