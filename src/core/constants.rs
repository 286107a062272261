// Game rule constants shared by the shake detector, roll machine and mesh.

// Shake detection
pub const SHAKE_THRESHOLD: f64 = 28.0; // magnitude must strictly exceed this

// Roll timing
pub const ROLL_DURATION_MS: u32 = 1000; // real-time sojourn in Rolling, not frame-counted

// Spin applied per animation tick while rolling (radians on each axis)
pub const SPIN_RATE_PER_TICK: f32 = 0.2;

// Die
pub const FACE_COUNT: usize = 6;
pub const DIE_EDGE: f32 = 2.0;

// Scoreboard
pub const INITIAL_BALANCE: f64 = 0.0;

// Runtime configuration defaults
pub const DEFAULT_REPORT_URL: &str = "http://localhost:3000/reward";
pub const DEFAULT_TEXTURE_BASE: &str = "/textures";
