/// An eased interpolation between two values, sampled by normalized progress.
///
/// Progress comes from the carousel snapshot (`CarouselSnapshot::progress`), so the tween
/// itself carries no clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, easing: Easing) -> Self {
        Self { from, to, easing }
    }

    /// Samples at progress `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> f32 {
        let eased = self.easing.sample(t.clamp(0.0, 1.0));
        self.from + (self.to - self.from) * eased
    }

    /// Restarts from the value at `t` towards `new_to`.
    pub fn retarget(&mut self, t: f32, new_to: f32) {
        let cur = self.sample(t);
        *self = Self::new(cur, new_to, self.easing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    /// Quadratic ease-in (GSAP `power2.in`).
    Power2In,
    /// Quadratic ease-out (GSAP `power2.out`).
    Power2Out,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::Power2In => t * t,
            Self::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u
            }
        }
    }
}
