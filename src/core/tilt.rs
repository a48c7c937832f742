use crate::constants::{TILT_PERSPECTIVE_PX, TILT_RANGE_DEG};

/// Rotation applied to the avatar, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Client-space bounding box of the tilted element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Map a pointer position over `rect` to a tilt. The pointer offset is
    /// scaled into [-15, 15] per axis and halved; vertical is inverted so the
    /// image leans toward the cursor.
    pub fn from_pointer(client_x: f32, client_y: f32, rect: Rect) -> Self {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Self::NEUTRAL;
        }
        let half = TILT_RANGE_DEG / 2.0;
        let x = (client_x - rect.left) / rect.width * TILT_RANGE_DEG - half;
        let y = (client_y - rect.top) / rect.height * TILT_RANGE_DEG - half;
        Tilt {
            rotate_x: -y / 2.0,
            rotate_y: x / 2.0,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateY({}deg) rotateX({}deg)",
            TILT_PERSPECTIVE_PX,
            fmt_deg(self.rotate_y),
            fmt_deg(self.rotate_x)
        )
    }
}

// Avoid "-0" in the emitted CSS.
#[inline]
fn fmt_deg(v: f32) -> f32 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
