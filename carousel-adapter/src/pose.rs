use carousel::{CarouselSnapshot, Phase};

use crate::{Easing, Tween};

/// Visual state of the rotating card.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPose {
    /// Rotation around the vertical axis, in degrees. Negative turns the card's face left.
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl CardPose {
    pub const REST: Self = Self {
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    pub fn is_at_rest(&self) -> bool {
        *self == Self::REST
    }
}

impl Default for CardPose {
    fn default() -> Self {
        Self::REST
    }
}

/// Geometry and easing of the flip animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoseOptions {
    /// Edge-on angle reached at the end of the exit phase.
    pub flip_angle_deg: f32,
    /// Scale at the edge-on midpoint.
    pub flip_scale: f32,
    /// Live skew applied while dragging, per pixel of drag offset.
    pub drag_rotation_per_px: f32,
    pub exit_easing: Easing,
    pub enter_easing: Easing,
    pub snap_back_easing: Easing,
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            flip_angle_deg: 90.0,
            flip_scale: 0.95,
            drag_rotation_per_px: 0.45,
            exit_easing: Easing::Power2In,
            enter_easing: Easing::Power2Out,
            snap_back_easing: Easing::Power2Out,
        }
    }
}

/// Maps carousel snapshots to card poses.
///
/// - Exiting turns the card edge-on: `Forward` ends at `-flip_angle_deg`, `Backward` at
///   `+flip_angle_deg`.
/// - Entering starts from the mirrored angle and turns back to rest, so the two halves read
///   as one continuous rotation.
/// - Dragging skews the card proportionally to the offset; a cancelled drag eases back.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseAnimator {
    options: PoseOptions,
    exit_from_deg: f32,
}

impl PoseAnimator {
    pub fn new(options: PoseOptions) -> Self {
        Self {
            options,
            exit_from_deg: 0.0,
        }
    }

    pub fn options(&self) -> &PoseOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PoseOptions) {
        self.options = options;
    }

    /// Angle for a drag offset.
    pub fn drag_rotation(&self, offset: f32) -> f32 {
        offset * self.options.drag_rotation_per_px
    }

    /// Starts the next exit from the pose the card was released at (`0` for non-drag
    /// transitions).
    pub fn begin_exit(&mut self, release_offset: f32) {
        self.exit_from_deg = self.drag_rotation(release_offset);
    }

    /// Starts the next exit from an explicit angle, e.g. a card caught mid snap-back.
    pub fn begin_exit_from_deg(&mut self, rotate_y_deg: f32) {
        self.exit_from_deg = rotate_y_deg;
    }

    pub fn exit_from_deg(&self) -> f32 {
        self.exit_from_deg
    }

    pub fn pose(&self, snapshot: &CarouselSnapshot) -> CardPose {
        let o = &self.options;
        let edge = o.flip_angle_deg * snapshot.direction.sign();
        let t = snapshot.progress;
        match snapshot.phase {
            Phase::Exiting => CardPose {
                rotate_y_deg: Tween::new(self.exit_from_deg, -edge, o.exit_easing).sample(t),
                scale: Tween::new(1.0, o.flip_scale, o.exit_easing).sample(t),
            },
            Phase::Entering => CardPose {
                rotate_y_deg: Tween::new(edge, 0.0, o.enter_easing).sample(t),
                scale: Tween::new(o.flip_scale, 1.0, o.enter_easing).sample(t),
            },
            Phase::Idle if snapshot.is_dragging => CardPose {
                rotate_y_deg: self.drag_rotation(snapshot.drag_offset),
                scale: 1.0,
            },
            Phase::Idle if snapshot.is_snapping_back => {
                let from = self.drag_rotation(snapshot.drag_offset);
                CardPose {
                    rotate_y_deg: Tween::new(from, 0.0, o.snap_back_easing).sample(t),
                    scale: 1.0,
                }
            }
            Phase::Idle => CardPose::REST,
        }
    }
}
