use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::surface::SurfaceRef;

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Screen anchors for the stick markers: left stick at a quarter of the
/// width, right stick at three quarters, both vertically centered.
pub const LEFT_ANCHOR: (i32, i32) = ((SCREEN_WIDTH / 4) as i32, (SCREEN_HEIGHT / 2) as i32);
pub const RIGHT_ANCHOR: (i32, i32) = ((3 * SCREEN_WIDTH / 4) as i32, (SCREEN_HEIGHT / 2) as i32);

const ANCHOR_SIZE: u32 = 20;
const MARKER_SIZE: u32 = 10;

/// Full stick deflection moves the marker by 20% of the window dimension.
const DEFLECTION_SCALE: f32 = 0.2;

const CLEAR_COLOR: Color = Color::RGB(0x00, 0x00, 0x00);
const ANCHOR_COLOR: Color = Color::RGB(0x99, 0x99, 0x99);
const MARKER_COLOR: Color = Color::RGB(0xFF, 0xFF, 0xAA);

/// The two bars of a crosshair centered on (x, y): a 1-pixel-wide vertical
/// bar and a 1-pixel-tall horizontal bar, each `len` pixels long.
pub fn cross_rects(x: i32, y: i32, len: u32) -> [Rect; 2] {
    let half = (len / 2) as i32;
    [
        Rect::new(x, y - half, 1, len),
        Rect::new(x - half, y, len, 1),
    ]
}

/// Marker position for a normalized stick deflection relative to an anchor.
pub fn displaced(anchor: (i32, i32), deflection: (f32, f32)) -> (i32, i32) {
    (
        anchor.0 + (deflection.0 * SCREEN_WIDTH as f32 * DEFLECTION_SCALE) as i32,
        anchor.1 + (deflection.1 * SCREEN_HEIGHT as f32 * DEFLECTION_SCALE) as i32,
    )
}

/// Clear the whole frame before drawing, so stale markers never persist.
pub fn clear(surface: &mut SurfaceRef) -> Result<(), String> {
    surface.fill_rect(None, CLEAR_COLOR)
}

fn draw_cross(
    surface: &mut SurfaceRef,
    x: i32,
    y: i32,
    len: u32,
    color: Color,
) -> Result<(), String> {
    for rect in cross_rects(x, y, len) {
        surface.fill_rect(rect, color)?;
    }
    Ok(())
}

/// Draw the fixed anchor crosshair plus the displaced stick marker.
pub fn render_stick(
    surface: &mut SurfaceRef,
    anchor: (i32, i32),
    deflection: (f32, f32),
) -> Result<(), String> {
    draw_cross(surface, anchor.0, anchor.1, ANCHOR_SIZE, ANCHOR_COLOR)?;
    let (mx, my) = displaced(anchor, deflection);
    draw_cross(surface, mx, my, MARKER_SIZE, MARKER_COLOR)
}
