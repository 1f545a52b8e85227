use glam::Vec2;
use pointfield_camera::{Camera, CameraMode};
use pointfield_common::DemoConfig;
use pointfield_input::InputSnapshot;
use pointfield_render::{Color, DrawCmd, Frame, Minimap, Projector};
use pointfield_world::ChunkWorld;

use crate::fps::FpsCounter;

/// Screen margin of the minimap panel.
const MINIMAP_MARGIN_PX: f32 = 16.0;
/// HUD text anchors.
const HUD_LINE_1: Vec2 = Vec2::new(20.0, 30.0);
const HUD_LINE_2: Vec2 = Vec2::new(20.0, 55.0);
const PAUSE_LABEL: Vec2 = Vec2::new(20.0, 95.0);

/// The demo's complete mutable state and its tick routine.
///
/// Constructed once at startup and driven by the presentation layer: one
/// `tick` per frame, one [`InputSnapshot`] in, one [`Frame`] of draw
/// commands out. Everything inside runs synchronously.
pub struct Engine {
    config: DemoConfig,
    world: ChunkWorld,
    camera: Camera,
    minimap: Minimap,
    fps: FpsCounter,
    /// Set on resume; discards the next dt so paused time never integrates.
    resume_pending: bool,
}

impl Engine {
    pub fn new(config: DemoConfig) -> Self {
        let world = ChunkWorld::new(config.world.clone());
        let camera = Camera::new(config.camera.clone());
        let minimap = Minimap::new(config.minimap.clone());
        Self {
            config,
            world,
            camera,
            minimap,
            fps: FpsCounter::new(),
            resume_pending: false,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &ChunkWorld {
        &self.world
    }

    pub fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    pub fn is_paused(&self) -> bool {
        self.camera.is_paused()
    }

    /// Run one logical frame and produce its draw commands.
    pub fn tick(&mut self, snap: &InputSnapshot) -> Frame {
        let _span = tracing::info_span!("engine_tick").entered();

        // Edge-triggered actions first; they apply even while paused so the
        // user can always unpause, reset, or flip the map mode.
        if snap.toggle_map {
            let rotating = self.minimap.toggle_rotation();
            tracing::debug!(rotating, "minimap mode toggled");
        }
        if snap.reset {
            self.camera.reset();
        }
        if snap.pause && self.camera.toggle_pause() == CameraMode::Active {
            self.resume_pending = true;
        }

        let mut dt = snap.dt.clamp(0.0, self.config.camera.max_frame_dt);
        if self.resume_pending && !self.camera.is_paused() {
            dt = 0.0;
            self.resume_pending = false;
        }

        if !self.camera.is_paused() {
            self.camera.look(snap.look_delta);
            self.camera.integrate(&snap.held, dt);
        }

        let near_points = self.world.points_near(
            self.camera.position.x,
            self.camera.position.z,
            self.config.world.load_radius,
        );

        self.fps.record(snap.dt);

        // Assemble the frame: scene, pause overlay, HUD, minimap.
        let mut frame = Frame::default();
        let projector = Projector::new(
            &self.config.view,
            snap.viewport.width,
            snap.viewport.height,
        );

        let mut visible = 0usize;
        for p in &near_points {
            if let Some(sprite) = projector.project(&self.camera, *p) {
                visible += 1;
                frame.push(DrawCmd::Point {
                    pos: sprite.pos,
                    radius: sprite.radius,
                    color: Color::SCENE_POINT,
                });
            }
        }

        if self.camera.is_paused() {
            frame.push(DrawCmd::Polygon {
                vertices: vec![
                    Vec2::ZERO,
                    Vec2::new(snap.viewport.width, 0.0),
                    Vec2::new(snap.viewport.width, snap.viewport.height),
                    Vec2::new(0.0, snap.viewport.height),
                ],
                color: Color::PAUSE_OVERLAY,
            });
            frame.push(DrawCmd::Text {
                pos: PAUSE_LABEL,
                text: "PAUSED  (P to resume)".into(),
                color: Color::HUD_TEXT,
            });
        }

        for (pos, text) in self.hud_lines() {
            frame.push(DrawCmd::Text {
                pos,
                text,
                color: Color::HUD_TEXT,
            });
        }

        let map_half = self.config.minimap.size_px * 0.5;
        let map_center = Vec2::new(
            snap.viewport.width - map_half - MINIMAP_MARGIN_PX,
            MINIMAP_MARGIN_PX + map_half,
        );
        self.minimap
            .commands(&self.camera, &near_points, map_center, &mut frame.commands);

        frame.stats.visible_points = visible;
        frame.stats.loaded_points = near_points.len();
        frame.stats.resident_chunks = self.world.chunk_count();
        frame.stats.fps = self.fps.fps();

        tracing::trace!(
            visible,
            loaded = near_points.len(),
            chunks = frame.stats.resident_chunks,
            "tick complete"
        );

        frame
    }

    fn hud_lines(&self) -> [(Vec2, String); 2] {
        let yaw_deg = self.camera.yaw.to_degrees().rem_euclid(360.0);
        let pitch_deg = self.camera.pitch.to_degrees();
        let p = self.camera.position;
        [
            (
                HUD_LINE_1,
                format!(
                    "Yaw: {yaw_deg:6.1}   Pitch: {pitch_deg:6.1}   FPS: {:5.1}",
                    self.fps.fps()
                ),
            ),
            (
                HUD_LINE_2,
                format!(
                    "Cam: x={:.2}  y={:.2}  z={:.2}   [M] Map rotate: {}",
                    p.x,
                    p.y,
                    p.z,
                    if self.minimap.rotate_with_camera() {
                        "ON"
                    } else {
                        "OFF"
                    }
                ),
            ),
        ]
    }
}
