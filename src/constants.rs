use std::time::Duration;

// ===== Clock =====
pub const PHASE_CYCLE: u16 = 360;
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
pub const GIF_FRAME_DELAY_CS: u16 = 5; // one tick, in GIF centiseconds

// ===== Cells =====
pub const LEFT_ANCHOR_X: f64 = 25.0;
pub const RIGHT_ANCHOR_X: f64 = 75.0;

// ===== Flow indicators =====
pub const FLOW_ARROWS_PER_CELL: usize = 12;
pub const FLOW_RADIUS: f64 = 20.0;
pub const FLOW_CENTER_Y: f64 = 50.0;
pub const FLOW_ALPHA: f64 = 0.6;

// ===== Particle bands (count, density multiplier, center y, path radius) =====
pub const BOTTOM_BAND: (usize, f64, f64, f64) = (20, 2.0, 65.0, 15.0);
pub const MIDDLE_BAND: (usize, f64, f64, f64) = (25, 1.5, 50.0, 20.0);
pub const TOP_BAND: (usize, f64, f64, f64) = (20, 1.0, 35.0, 15.0);
pub const PARTICLE_ALPHA: f64 = 0.8;

// Size classes keyed on y (percent): above LARGE_ABOVE_Y is large, above MEDIUM_ABOVE_Y is medium
pub const LARGE_ABOVE_Y: f64 = 60.0;
pub const MEDIUM_ABOVE_Y: f64 = 45.0;
pub const SIZE_LARGE: u32 = 8;
pub const SIZE_MEDIUM: u32 = 6;
pub const SIZE_SMALL: u32 = 4;

// ===== Temperature window =====
// t = (y - TEMP_WINDOW_TOP) / TEMP_WINDOW_SPAN, temp = 1 - t
pub const TEMP_WINDOW_TOP: f64 = 30.0;
pub const TEMP_WINDOW_SPAN: f64 = 40.0;

// ===== Plates =====
pub const PLATE_SWING_PX: f64 = 8.0;

// ===== Canvas =====
pub const CANVAS_WIDTH: u32 = 896;
pub const CANVAS_HEIGHT: u32 = 384;
pub const ARROW_LENGTH_PX: f64 = 24.0;
pub const ARROW_WIDTH_PX: f64 = 8.0;
pub const SPREADING_CENTER_WIDTH_PX: u32 = 32;
pub const RIDGE_LINE_PX: u32 = 4;
pub const SUBDUCTION_WIDTH_PX: u32 = 16;
pub const SCALE_BAR_WIDTH_PX: u32 = 16;
pub const SCALE_BAR_INSET_PX: u32 = 16;

// ===== Palette (sRGB) =====
pub const GRAY_900: [u8; 3] = [0x11, 0x18, 0x27];
pub const STONE_500: [u8; 3] = [0x78, 0x71, 0x6c];
pub const STONE_600: [u8; 3] = [0x57, 0x53, 0x4e];
pub const STONE_700: [u8; 3] = [0x44, 0x40, 0x3c];
pub const ORANGE_500: [u8; 3] = [0xf9, 0x73, 0x16];
pub const ORANGE_600: [u8; 3] = [0xea, 0x58, 0x0c];
pub const ORANGE_700: [u8; 3] = [0xc2, 0x41, 0x0c];
pub const ORANGE_800: [u8; 3] = [0x9a, 0x34, 0x12];
pub const RED_500: [u8; 3] = [0xef, 0x44, 0x44];
pub const RED_700: [u8; 3] = [0xb9, 0x1c, 0x1c];
pub const RED_800: [u8; 3] = [0x99, 0x1b, 0x1b];
pub const RED_900: [u8; 3] = [0x7f, 0x1d, 0x1d];
