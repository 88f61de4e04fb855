//! Pointer normalisation

use bevy::prelude::*;

/// Pointer position in normalised device coordinates, both axes in `[-1, 1]`,
/// y up. `screen` keeps the logical pixel position for placing the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub screen: Vec2,
}

impl PointerState {
    pub fn from_screen(screen: Vec2, viewport: Vec2) -> Self {
        Self {
            ndc: normalize_pointer(screen, viewport),
            screen,
        }
    }

    /// Back to logical viewport pixels (origin top-left, y down).
    pub fn to_viewport(&self, viewport: Vec2) -> Vec2 {
        Vec2::new(
            (self.ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - self.ndc.y) * 0.5 * viewport.y,
        )
    }
}

/// `2·(px/width) − 1` horizontally, the same with the sign flipped vertically.
pub fn normalize_pointer(screen: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        -(screen.y / viewport.y) * 2.0 + 1.0,
    )
}
