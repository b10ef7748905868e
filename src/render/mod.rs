//! Renders a [`CvSnapshot`] into an SVG document.
//!
//! The output is a fixed-width page (900 px content width, the
//! print-friendly constant shared with the rasterizer) whose height is the
//! natural height of the laid-out content. Sections render only when their
//! visibility flag is set and, for list sections, the list is non-empty.
//!
//! Rendering always works on detached data: the snapshot is owned by value
//! and the theme passed in is the caller's disposable copy, so export-time
//! preprocessing such as gradient flattening can never leak into live
//! state.

mod svg;

pub use svg::{text_width, wrap};

use crate::document::{
    CvSnapshot, EducationItem, ExperienceItem, PersonalInfo, Project, SkillCategory,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use itertools::Itertools;
use svg::SvgBuilder;

pub const CONTENT_WIDTH: f32 = 900.0;
const PADDING: f32 = 32.0;
const INNER_WIDTH: f32 = CONTENT_WIDTH - 2.0 * PADDING;
const AVATAR_SIZE: f32 = 120.0;
const SECTION_GAP: f32 = 24.0;
const ITEM_GAP: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A paint for decorative surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Color),
    Gradient { from: Color, to: Color },
}

/// The palette. The defaults mirror the interactive view: blue accent,
/// blue-to-purple gradient header band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub header_fill: Fill,
    pub header_text: Color,
    pub text: Color,
    pub muted: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x25, 0x63, 0xeb),
            header_fill: Fill::Gradient {
                from: Color::rgb(0x25, 0x63, 0xeb),
                to: Color::rgb(0x93, 0x33, 0xea),
            },
            header_text: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x22, 0x22, 0x22),
            muted: Color::rgb(0x55, 0x55, 0x55),
            chip_bg: Color::rgb(0xf1, 0xf5, 0xf9),
            chip_text: Color::rgb(0x37, 0x30, 0xa3),
        }
    }
}

impl Theme {
    /// A copy with every gradient replaced by its flat starting color.
    /// The rasterizer cannot reproduce the decorative gradient syntax, so
    /// exports run on this disposable substitute, never on the live theme.
    pub fn flattened(&self) -> Theme {
        let mut copy = self.clone();
        if let Fill::Gradient { from, .. } = copy.header_fill {
            copy.header_fill = Fill::Solid(from);
        }
        copy
    }
}

/// A rendered page: SVG markup plus its pixel dimensions.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

/// Lays out and renders the snapshot at the fixed content width.
pub fn render(snapshot: &CvSnapshot, theme: &Theme) -> RenderedDocument {
    let mut r = Renderer {
        theme: theme.clone(),
        svg: SvgBuilder::new(CONTENT_WIDTH),
        y: 0.0,
    };
    r.header(&snapshot.personal);

    let vis = snapshot.visibility;
    if vis.about {
        r.about(&snapshot.summary);
    }
    if vis.experience && !snapshot.experiences.is_empty() {
        r.experience(&snapshot.experiences);
    }
    if vis.education && !snapshot.education.is_empty() {
        r.education(&snapshot.education);
    }
    if vis.skills && !snapshot.skill_categories.is_empty() {
        r.skills(&snapshot.skill_categories);
    }
    if vis.projects && !snapshot.projects.is_empty() {
        r.projects(&snapshot.projects);
    }

    let height = (r.y + PADDING).ceil();
    RenderedDocument {
        svg: r.svg.finish(height),
        width: CONTENT_WIDTH as u32,
        height: height as u32,
    }
}

struct Renderer {
    theme: Theme,
    svg: SvgBuilder,
    y: f32,
}

impl Renderer {
    /// Emits one line of text at the cursor and advances it. `line_height`
    /// is a multiple of the font size.
    fn line(&mut self, x: f32, size: f32, line_height: f32, weight: u16, color: Color, text: &str) {
        self.svg
            .push_text(x, self.y + size * 0.8, size, weight, &color.hex(), text);
        self.y += size * line_height;
    }

    /// Wraps `text` to the inner width and emits every line.
    fn text_block(&mut self, size: f32, line_height: f32, weight: u16, color: Color, text: &str) {
        for line in wrap(text, size, INNER_WIDTH) {
            self.line(PADDING, size, line_height, weight, color, &line);
        }
    }

    fn section_title(&mut self, title: &str) {
        self.y += SECTION_GAP;
        let accent = self.theme.accent;
        self.line(PADDING, 22.0, 1.35, 600, accent, title);
        self.y += 4.0;
    }

    fn header(&mut self, personal: &PersonalInfo) {
        let avatar = personal
            .profile_image
            .as_deref()
            .filter(|url| validate_data_url(url));
        let links = links_line(personal);

        let mut text_height: f32 = 46.0 + 28.0 + 24.0;
        if links.is_some() {
            text_height += 20.0;
        }
        let body_height = if avatar.is_some() {
            text_height.max(AVATAR_SIZE)
        } else {
            text_height
        };
        let band_height = body_height + 2.0 * PADDING;

        let fill = match self.theme.header_fill {
            Fill::Solid(color) => color.hex(),
            Fill::Gradient { from, to } => {
                self.svg.push_defs(&format!(
                    concat!(
                        r#"<linearGradient id="header-fill" x1="0" y1="0" x2="1" y2="0">"#,
                        r#"<stop offset="0" stop-color="{}"/>"#,
                        r#"<stop offset="1" stop-color="{}"/>"#,
                        "</linearGradient>"
                    ),
                    from.hex(),
                    to.hex()
                ));
                "url(#header-fill)".to_string()
            }
        };
        self.svg
            .push_rect(0.0, 0.0, CONTENT_WIDTH, band_height, 0.0, &fill);

        let text_x = if let Some(href) = avatar {
            self.svg
                .push_circular_image(PADDING, PADDING, AVATAR_SIZE, "avatar-clip", href);
            PADDING + AVATAR_SIZE + 24.0
        } else {
            PADDING
        };

        self.y = PADDING;
        let white = self.theme.header_text;
        self.line(text_x, 36.0, 1.28, 700, white, &personal.name);
        self.line(text_x, 20.0, 1.4, 500, white, &personal.title);
        self.line(
            text_x,
            15.0,
            1.6,
            400,
            white,
            &format!(
                "{} | {} | {}",
                personal.email, personal.phone, personal.location
            ),
        );
        if let Some(links) = links {
            self.line(text_x, 14.0, 1.4, 400, white, &links);
        }
        self.y = band_height;
    }

    fn about(&mut self, summary: &str) {
        self.section_title("About Me");
        let text = self.theme.text;
        self.text_block(16.0, 1.6, 400, text, summary);
    }

    fn experience(&mut self, items: &[ExperienceItem]) {
        self.section_title("Work Experience");
        let (text, muted, accent) = (self.theme.text, self.theme.muted, self.theme.accent);
        for item in items {
            let end = if item.current {
                "Present"
            } else {
                item.end_date.as_str()
            };
            self.line(
                PADDING,
                17.0,
                1.35,
                600,
                text,
                &format!("{} - {}", item.position, item.company),
            );
            self.line(
                PADDING,
                15.0,
                1.35,
                400,
                muted,
                &format!("{} - {}", item.start_date, end),
            );
            self.text_block(15.0, 1.4, 400, text, &item.description);
            if !item.technologies.is_empty() {
                let joined = item.technologies.iter().join(", ");
                self.text_block(14.0, 1.4, 400, accent, &format!("Technologies: {joined}"));
            }
            self.y += ITEM_GAP;
        }
    }

    fn education(&mut self, items: &[EducationItem]) {
        self.section_title("Education");
        let (text, muted) = (self.theme.text, self.theme.muted);
        for item in items {
            self.line(
                PADDING,
                17.0,
                1.35,
                600,
                text,
                &format!("{} - {}", item.degree, item.institution),
            );
            self.line(
                PADDING,
                15.0,
                1.35,
                400,
                muted,
                &format!("{} - {}", item.start_date, item.end_date),
            );
            self.line(PADDING, 15.0, 1.4, 400, text, &item.field);
            if let Some(description) = &item.description {
                self.text_block(14.0, 1.4, 400, text, description);
            }
            self.y += ITEM_GAP;
        }
    }

    fn skills(&mut self, categories: &[SkillCategory]) {
        self.section_title("Skills");
        for category in categories {
            let name_label = format!("{}:", category.name);
            let joined = category.skills.iter().join(", ");
            let full = format!("{name_label} {joined}");
            let lines = wrap(&full, 15.0, INNER_WIDTH - 24.0);
            let chip_height = lines.len() as f32 * 21.0 + 10.0;
            let chip_width = if lines.len() == 1 {
                text_width(&lines[0], 15.0) + 24.0
            } else {
                INNER_WIDTH
            };
            self.svg.push_rect(
                PADDING,
                self.y,
                chip_width,
                chip_height,
                6.0,
                &self.theme.chip_bg.hex(),
            );
            let mut baseline = self.y + 5.0 + 15.0 * 0.8;
            let color = self.theme.chip_text.hex();
            for (i, line) in lines.iter().enumerate() {
                if i == 0 && line.starts_with(&name_label) {
                    // Bold category name, regular skill list.
                    let rest = line[name_label.len()..].trim_start();
                    self.svg
                        .push_text(PADDING + 12.0, baseline, 15.0, 700, &color, &name_label);
                    self.svg.push_text(
                        PADDING + 12.0 + text_width(&name_label, 15.0) + 6.0,
                        baseline,
                        15.0,
                        400,
                        &color,
                        rest,
                    );
                } else {
                    self.svg
                        .push_text(PADDING + 12.0, baseline, 15.0, 400, &color, line);
                }
                baseline += 21.0;
            }
            self.y += chip_height + 8.0;
        }
    }

    fn projects(&mut self, projects: &[Project]) {
        self.section_title("Projects");
        let (text, accent) = (self.theme.text, self.theme.accent);
        for project in projects {
            self.line(PADDING, 17.0, 1.35, 600, text, &project.name);
            self.text_block(15.0, 1.4, 400, text, &project.description);
            if !project.technologies.is_empty() {
                let joined = project.technologies.iter().join(", ");
                self.text_block(14.0, 1.4, 400, accent, &format!("Technologies: {joined}"));
            }
            if let Some(url) = &project.github_url {
                self.line(PADDING, 14.0, 1.4, 400, text, &format!("GitHub: {url}"));
            }
            if let Some(url) = &project.live_url {
                self.line(PADDING, 14.0, 1.4, 400, text, &format!("Web: {url}"));
            }
            self.y += ITEM_GAP;
        }
    }
}

fn links_line(personal: &PersonalInfo) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(url) = &personal.linkedin {
        parts.push(format!("LinkedIn: {url}"));
    }
    if let Some(url) = &personal.github {
        parts.push(format!("GitHub: {url}"));
    }
    if let Some(url) = &personal.website {
        parts.push(format!("Web: {url}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.iter().join(" | "))
    }
}

/// Accepts only a base64 data URL whose payload decodes to a readable
/// image. Anything else is skipped with a warning rather than failing the
/// render; a broken avatar must never take the export down with it.
fn validate_data_url(url: &str) -> bool {
    let ok = decode_data_url(url)
        .map(|bytes| image::load_from_memory(&bytes).is_ok())
        .unwrap_or(false);
    if !ok {
        log::warn!("skipping profile image that does not decode as an image data URL");
    }
    ok
}

fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload.trim()).ok()
}
