// Constants for the sorting engine and playback

use super::Element;

/// Smallest accepted array value
pub const MIN_VALUE: Element = 1;

/// Largest accepted array value
pub const MAX_VALUE: Element = 1000;

/// Longest accepted array; keeps the O(n²) sorts and their traces small
pub const MAX_LEN: usize = 100;

/// Generated arrays are clamped to this many elements
pub const MIN_GENERATED_LEN: usize = 5;

/// Size used when no array or size is given
pub const DEFAULT_GENERATED_LEN: usize = 20;

/// Default value range for generated arrays
pub const DEFAULT_GENERATED_MIN: Element = 1;
pub const DEFAULT_GENERATED_MAX: Element = 100;

/// Playback speed range (1 = slowest)
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

/// Inter-step delay is `DELAY_BASE_MS - speed * DELAY_PER_SPEED_MS`,
/// never below `DELAY_FLOOR_MS`
pub const DELAY_BASE_MS: u64 = 1100;
pub const DELAY_PER_SPEED_MS: u64 = 100;
pub const DELAY_FLOOR_MS: u64 = 50;
