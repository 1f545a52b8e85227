/// Windowed FPS average: accumulates frame times and refreshes the estimate
/// every quarter second, matching the HUD's update cadence.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: f32,
    accum: f32,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            window: 0.25,
            accum: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    pub fn record(&mut self, dt: f32) {
        self.accum += dt;
        self.frames += 1;
        if self.accum >= self.window {
            self.fps = self.frames as f32 / self.accum;
            self.accum = 0.0;
            self.frames = 0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
