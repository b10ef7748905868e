//! Low-level SVG assembly: element emission, escaping, and the estimated
//! text metrics used for line wrapping.
//!
//! SVG text does not wrap on its own, so the renderer breaks lines itself
//! using a per-character advance estimate. The estimate is deliberately a
//! little wide; over-estimating wraps a word early, under-estimating would
//! clip it at the content edge.

use std::fmt::Write as _;

/// Estimated advance of one character, as a fraction of the font size.
fn char_advance(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.30,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | ' ' => 0.38,
        'm' | 'w' | 'M' | 'W' | '@' => 0.90,
        c if c.is_uppercase() => 0.70,
        c if c.is_ascii_digit() => 0.56,
        _ => 0.52,
    }
}

/// Estimated pixel width of `text` at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_advance).sum::<f32>() * font_size
}

/// Greedy word wrap against `max_width`. Paragraph breaks in the input are
/// preserved; a single word wider than the limit gets its own line rather
/// than being split mid-word.
pub fn wrap(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, font_size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates SVG elements and wraps them into a document of the final
/// measured height.
pub struct SvgBuilder {
    width: f32,
    defs: String,
    body: String,
}

impl SvgBuilder {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub fn push_defs(&mut self, raw: &str) {
        self.defs.push_str(raw);
    }

    pub fn push_rect(&mut self, x: f32, y: f32, w: f32, h: f32, rx: f32, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="{rx:.1}" fill="{fill}"/>"#
        );
    }

    /// Emits one line of text; `y` is the baseline.
    pub fn push_text(&mut self, x: f32, y: f32, size: f32, weight: u16, fill: &str, text: &str) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.1}" y="{y:.1}" font-family="sans-serif" font-size="{size:.1}" font-weight="{weight}" fill="{fill}">{}</text>"#,
            escape(text)
        );
    }

    /// Embeds an image clipped to a circle (the avatar treatment). The
    /// `href` is expected to be a data URL; the clip id must be unique
    /// within the document.
    pub fn push_circular_image(&mut self, x: f32, y: f32, diameter: f32, clip_id: &str, href: &str) {
        let r = diameter / 2.0;
        let _ = write!(
            self.defs,
            r#"<clipPath id="{clip_id}"><circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}"/></clipPath>"#,
            cx = x + r,
            cy = y + r,
        );
        let _ = writeln!(
            self.body,
            r#"<image x="{x:.1}" y="{y:.1}" width="{d:.1}" height="{d:.1}" preserveAspectRatio="xMidYMid slice" clip-path="url(#{clip_id})" href="{}"/>"#,
            escape(href),
            d = diameter,
        );
    }

    /// Closes the document at `height`, painting the full canvas white
    /// underneath the accumulated elements.
    pub fn finish(self, height: f32) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" "#,
                r#"viewBox="0 0 {w:.0} {h:.0}">"#,
                "<defs>{defs}</defs>",
                r##"<rect x="0" y="0" width="{w:.0}" height="{h:.0}" fill="#ffffff"/>"##,
                "{body}</svg>"
            ),
            w = self.width,
            h = height,
            defs = self.defs,
            body = self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_words_intact() {
        let lines = wrap("alpha beta gamma delta", 16.0, 90.0);
        assert!(lines.len() > 1);
        for line in &lines {
            for word in line.split_whitespace() {
                assert!(["alpha", "beta", "gamma", "delta"].contains(&word));
            }
        }
        let joined = lines.join(" ");
        assert_eq!(joined, "alpha beta gamma delta");
    }

    #[test]
    fn wrap_gives_an_oversized_word_its_own_line() {
        let lines = wrap("tiny incomprehensibilities tiny", 20.0, 50.0);
        assert!(lines.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn finish_produces_a_white_canvas_of_the_given_size() {
        let svg = SvgBuilder::new(900.0).finish(400.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="900""#));
        assert!(svg.contains(r#"height="400""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }
}
