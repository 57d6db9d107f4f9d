use glam::Vec2;

/// Zoom level the viewport opens at.
pub const DEFAULT_ZOOM: f32 = 5.0;

/// Tuning for the viewpoint controller.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    /// World units per second at full pan deflection.
    pub pan_speed: f32,
    /// Zoom units per scroll step.
    pub zoom_speed: f32,
    /// Closest the view can get.
    pub min_zoom: f32,
    /// Furthest the view can get.
    pub max_zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pan_speed: 5.0,
            zoom_speed: 2.0,
            min_zoom: 3.0,
            max_zoom: 10.0,
        }
    }
}

/// Pannable, zoomable viewpoint over the yard. Pure state; the host input
/// layer feeds pan axes and scroll once per tick.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec2,
    /// Orthographic half-height. Smaller means closer in.
    pub zoom: f32,
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
            config,
        }
    }

    /// Apply one tick of input. `axes` are the host's two pan axes (each in
    /// [-1, 1]), `scroll_delta` the wheel movement since last tick
    /// (positive zooms in).
    pub fn update(&mut self, dt: f32, axes: Vec2, scroll_delta: f32) {
        self.position += axes * self.config.pan_speed * dt;

        self.zoom -= scroll_delta * self.config.zoom_speed;
        self.zoom = self.zoom.clamp(self.config.min_zoom, self.config.max_zoom);
    }
}
