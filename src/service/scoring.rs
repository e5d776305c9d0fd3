//! Position-to-points mapping used when a result is recorded.

/// Positions at or beyond this value earn nothing.
pub const POINTS_CEILING: i32 = 16;

/// Points written onto matching totos for one finishing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsAward {
    pub regular: i32,
    pub joker: i32,
}

impl PointsAward {
    pub fn for_position(position: i32) -> Self {
        let regular = points_for_position(position);
        PointsAward {
            regular,
            joker: regular * 2,
        }
    }
}

/// `max(0, 16 - position)`: 1st place earns 15, 15th earns 1.
pub fn points_for_position(position: i32) -> i32 {
    POINTS_CEILING.saturating_sub(position).max(0)
}
