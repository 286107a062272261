use glam::Vec3;

// Scene and page tuning constants used by the web frontend.

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting
pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const AMBIENT_LIGHT: f32 = 0.45;
pub const DIFFUSE_LIGHT: f32 = 0.75;
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];

// Face textures
pub const FACE_TEXTURE_SIZE: u32 = 256; // every face is resampled to this square size

// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const START_BUTTON_ID: &str = "start-button";
pub const BALANCE_ID: &str = "balance";
pub const RESULT_ID: &str = "result";
pub const NOTICE_ID: &str = "desktop-notice";
pub const CONTAINER_ID: &str = "game-container";

pub const DESKTOP_NOTICE: &str = "This game is only available on mobile devices.";
