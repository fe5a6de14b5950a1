//! Page chrome as overlay quads.
//!
//! Everything is laid out in logical px and converted to physical px at the
//! end. Text is drawn as placeholder blocks sized like the rendered copy.

use glam::Vec2;
use shud_engine::coords::{Rect, SurfaceSize};
use shud_engine::paint::{Color, Paint};
use shud_engine::render::OverlayQuad;

use super::{EntranceFrame, Pose};

const HEADER_HEIGHT: f32 = 64.0;
const FOOTER_HEIGHT: f32 = 120.0;
/// Below this logical width the hero block is centered and nav is hidden.
const WIDE_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone)]
pub struct Palette {
    pub divider: Color,
    pub logo: Color,
    pub nav: Color,
    pub title: (Color, Color),
    pub tagline: Color,
    pub cta: (Color, Color),
    pub footer_heading: Color,
    pub footer_text: Color,
    pub link: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            divider: Color::from_hex_srgb(0x1f2937),
            logo: Color::from_hex_srgb(0x374151),
            nav: Color::from_hex_srgb(0xe5e7eb),
            title: (Color::from_hex_srgb(0x60a5fa), Color::from_hex_srgb(0xa855f7)),
            tagline: Color::from_hex_srgb(0xd1d5db),
            cta: (Color::from_hex_srgb(0x3b82f6), Color::from_hex_srgb(0x9333ea)),
            footer_heading: Color::from_hex_srgb(0xf9fafb),
            footer_text: Color::from_hex_srgb(0x9ca3af),
            link: Color::from_hex_srgb(0x60a5fa),
        }
    }
}

/// Logical-px rects of the animated hero block, before entrance poses.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeroRects {
    pub title: Rect,
    pub tagline: [Rect; 2],
    pub cta: Rect,
}

struct Metrics {
    pad: f32,
    gap: f32,
    title: Vec2,
    tagline_line: f32,
    tagline_gap: f32,
    cta: Vec2,
}

impl Metrics {
    fn for_width(wide: bool) -> Self {
        if wide {
            Self {
                pad: 48.0,
                gap: 24.0,
                title: Vec2::new(240.0, 60.0),
                tagline_line: 20.0,
                tagline_gap: 8.0,
                cta: Vec2::new(188.0, 52.0),
            }
        } else {
            Self {
                pad: 24.0,
                gap: 16.0,
                title: Vec2::new(144.0, 36.0),
                tagline_line: 18.0,
                tagline_gap: 8.0,
                cta: Vec2::new(188.0, 52.0),
            }
        }
    }
}

fn is_wide(logical: Vec2) -> bool {
    logical.x >= WIDE_BREAKPOINT
}

/// Places the hero block: left-aligned on wide viewports, centered otherwise,
/// vertically centered between header and footer.
pub fn hero_rects(logical: Vec2) -> HeroRects {
    let wide = is_wide(logical);
    let m = Metrics::for_width(wide);

    let tagline_width = (logical.x - 2.0 * m.pad).clamp(0.0, 672.0);
    let line_widths = [tagline_width * 0.75, tagline_width * 0.55];
    let tagline_height = 2.0 * m.tagline_line + m.tagline_gap;

    let block_height = m.title.y + m.gap + tagline_height + m.gap + m.cta.y;
    let main_height = logical.y - HEADER_HEIGHT - FOOTER_HEIGHT;
    let top = HEADER_HEIGHT + ((main_height - block_height) * 0.5).max(0.0);

    let x_for = |width: f32| {
        if wide {
            m.pad
        } else {
            (logical.x - width) * 0.5
        }
    };

    let title = Rect::new(x_for(m.title.x), top, m.title.x, m.title.y);

    let line0_y = top + m.title.y + m.gap;
    let line1_y = line0_y + m.tagline_line + m.tagline_gap;
    let tagline = [
        Rect::new(x_for(line_widths[0]), line0_y, line_widths[0], m.tagline_line),
        Rect::new(x_for(line_widths[1]), line1_y, line_widths[1], m.tagline_line),
    ];

    let cta_y = top + m.title.y + m.gap + tagline_height + m.gap;
    let cta = Rect::new(x_for(m.cta.x), cta_y, m.cta.x, m.cta.y);

    HeroRects {
        title,
        tagline,
        cta,
    }
}

/// Builds every overlay quad for a surface of `size` at `scale` (physical px per logical px).
pub fn compose(
    size: SurfaceSize,
    scale: f32,
    frame: &EntranceFrame,
    palette: &Palette,
) -> Vec<OverlayQuad> {
    if size.is_empty() || scale <= 0.0 {
        return Vec::new();
    }

    let logical = Vec2::new(size.width as f32, size.height as f32) / scale;
    let wide = is_wide(logical);
    let pad = Metrics::for_width(wide).pad;

    let mut out = Vec::new();
    let mut push = |rect: Rect, paint: Paint| {
        out.push(OverlayQuad::new(to_physical(rect, scale), paint));
    };

    // header
    push(
        Rect::new(0.0, HEADER_HEIGHT - 1.0, logical.x, 1.0),
        Paint::solid(palette.divider),
    );
    push(Rect::new(pad, 16.0, 32.0, 32.0), Paint::solid(palette.logo));
    push(Rect::new(pad + 48.0, 24.0, 96.0, 16.0), Paint::solid(palette.nav));
    if wide {
        let (item_w, item_gap) = (64.0, 24.0);
        let mut x = logical.x - pad - 4.0 * item_w - 3.0 * item_gap;
        for _ in 0..4 {
            push(Rect::new(x, 26.0, item_w, 12.0), Paint::solid(palette.nav));
            x += item_w + item_gap;
        }
    }

    // hero
    let hero = hero_rects(logical);
    let title = Paint::horizontal(palette.title.0, palette.title.1);
    let cta = Paint::horizontal(palette.cta.0, palette.cta.1);
    let mut posed = |rect: Rect, paint: Paint, pose: Pose| {
        if pose.opacity <= 0.0 {
            return;
        }
        let rect = rect
            .translated(Vec2::new(0.0, pose.offset_y))
            .scaled_about_center(pose.scale);
        push(rect, paint.with_opacity(pose.opacity));
    };
    posed(hero.title, title, frame.title);
    for line in hero.tagline {
        posed(line, Paint::solid(palette.tagline), frame.tagline);
    }
    posed(hero.cta, cta, frame.cta);

    // footer
    let footer_top = logical.y - FOOTER_HEIGHT;
    push(
        Rect::new(0.0, footer_top, logical.x, 1.0),
        Paint::solid(palette.divider),
    );
    if wide {
        push(Rect::new(pad, footer_top + 24.0, 110.0, 20.0), Paint::solid(palette.footer_heading));
        push(Rect::new(pad, footer_top + 56.0, 220.0, 14.0), Paint::solid(palette.footer_text));
        push(Rect::new(pad, footer_top + 78.0, 150.0, 14.0), Paint::solid(palette.footer_text));

        let right = logical.x - pad;
        push(Rect::new(right - 90.0, footer_top + 24.0, 90.0, 20.0), Paint::solid(palette.footer_heading));
        push(Rect::new(right - 180.0, footer_top + 56.0, 180.0, 14.0), Paint::solid(palette.footer_text));
        push(Rect::new(right - 64.0, footer_top + 82.0, 64.0, 14.0), Paint::solid(palette.link));
    } else {
        push(
            Rect::new((logical.x - 64.0) * 0.5, footer_top + 53.0, 64.0, 14.0),
            Paint::solid(palette.link),
        );
    }

    out
}

fn to_physical(rect: Rect, scale: f32) -> Rect {
    Rect {
        origin: rect.origin * scale,
        size: rect.size * scale,
    }
}
