use super::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};
use glam::Vec2;

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltAngles {
    pub x_deg: f32,
    pub y_deg: f32,
}

/// Rotation for a pointer at `pointer` (relative to the card's top-left corner)
/// over a card of `size`. Pointer above the centre tips the card towards the
/// viewer (+X), pointer to the left turns it away (-Y).
#[inline]
pub fn tilt_angles(pointer: Vec2, size: Vec2) -> TiltAngles {
    let center = size * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return TiltAngles::default();
    }
    let offset = (pointer - center) / center;
    TiltAngles {
        x_deg: -TILT_MAX_DEG * offset.y,
        y_deg: TILT_MAX_DEG * offset.x,
    }
}

pub fn hover_transform(angles: TiltAngles) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
        TILT_PERSPECTIVE_PX,
        angles.x_deg,
        angles.y_deg,
        s = TILT_HOVER_SCALE
    )
}

pub fn rest_transform() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale3d(1, 1, 1)",
        TILT_PERSPECTIVE_PX
    )
}
