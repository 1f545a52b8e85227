use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const SCENE_POINT: Color = Color([255, 80, 80, 255]);
    pub const MAP_POINT: Color = Color([255, 120, 120, 255]);
    pub const MAP_RING: Color = Color([60, 60, 80, 160]);
    pub const MAP_WEDGE: Color = Color([100, 180, 255, 120]);
    pub const MAP_MARKER: Color = Color([255, 255, 255, 255]);
    pub const HUD_TEXT: Color = Color([255, 255, 255, 255]);
    pub const PAUSE_OVERLAY: Color = Color([0, 0, 0, 120]);
}

/// One drawing primitive for the presentation surface to execute.
///
/// This is the whole vocabulary the core needs; anything fancier (rounded
/// panels, fonts, antialiasing) is the surface's own business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Filled circle at `pos` with pixel `radius`.
    Point {
        pos: Vec2,
        radius: f32,
        color: Color,
    },
    /// Line segment.
    Line { from: Vec2, to: Vec2, color: Color },
    /// Filled polygon.
    Polygon { vertices: Vec<Vec2>, color: Color },
    /// Unfilled circle outline (minimap range rings).
    Ring {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Text string with its anchor at `pos`.
    Text {
        pos: Vec2,
        text: String,
        color: Color,
    },
}

/// An ordered list of draw commands for one tick, plus per-frame stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCmd>,
    pub stats: FrameStats,
}

/// Per-frame instrumentation, surfaced in the HUD and the CLI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameStats {
    /// Points that survived near-plane culling this frame.
    pub visible_points: usize,
    /// Points returned by the radius query this frame.
    pub loaded_points: usize,
    /// Chunks resident in the world cache.
    pub resident_chunks: usize,
    /// Smoothed frames-per-second estimate.
    pub fps: f32,
}

impl Frame {
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn count_points(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Point { .. }))
            .count()
    }

    pub fn count_text(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { .. }))
            .count()
    }
}

/// The presentation surface boundary: whatever owns the window and painter
/// implements this and executes each frame's commands before frame end.
pub trait Surface {
    fn execute(&mut self, frame: &Frame);
}

/// Headless surface rendering frames to a text summary.
///
/// Stands in for a real windowed surface in the CLI and in tests; the draw
/// command stream is the contract, so exercising it without a window keeps
/// the core honest.
#[derive(Debug, Default)]
pub struct TextSurface {
    last: String,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered summary of the most recent frame.
    pub fn last_frame(&self) -> &str {
        &self.last
    }
}

impl Surface for TextSurface {
    fn execute(&mut self, frame: &Frame) {
        let mut out = String::new();
        let (mut points, mut lines, mut polys, mut rings) = (0usize, 0usize, 0usize, 0usize);
        let mut texts = Vec::new();
        for cmd in &frame.commands {
            match cmd {
                DrawCmd::Point { .. } => points += 1,
                DrawCmd::Line { .. } => lines += 1,
                DrawCmd::Polygon { .. } => polys += 1,
                DrawCmd::Ring { .. } => rings += 1,
                DrawCmd::Text { text, .. } => texts.push(text.as_str()),
            }
        }
        out.push_str(&format!(
            "frame: {} cmds ({points} points, {lines} lines, {polys} polygons, {rings} rings)\n",
            frame.commands.len()
        ));
        out.push_str(&format!(
            "stats: visible={} loaded={} chunks={} fps={:.1}\n",
            frame.stats.visible_points,
            frame.stats.loaded_points,
            frame.stats.resident_chunks,
            frame.stats.fps
        ));
        for t in texts {
            out.push_str("  text: ");
            out.push_str(t);
            out.push('\n');
        }
        self.last = out;
    }
}
