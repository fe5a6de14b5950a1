//! One-shot entrance transitions for the hero text and call to action.

/// Visual state of one element at a point in time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in logical px (negative is up).
    pub offset_y: f32,
    /// Uniform scale about the element's center.
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

/// `from` held until `delay`, then eased into `to` over `duration` seconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    pub delay: f32,
    pub duration: f32,
}

impl Transition {
    /// Fades in while sliding down 20 px into place.
    pub fn fade_down(delay: f32, duration: f32) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                offset_y: -20.0,
                scale: 1.0,
            },
            to: Pose::REST,
            delay,
            duration,
        }
    }

    /// Fades in while growing from 80% to full size.
    pub fn fade_grow(delay: f32, duration: f32) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                offset_y: 0.0,
                scale: 0.8,
            },
            to: Pose::REST,
            delay,
            duration,
        }
    }

    pub fn end(&self) -> f32 {
        self.delay + self.duration
    }

    /// Pose at `t` seconds after the page was first shown.
    pub fn sample(&self, t: f32) -> Pose {
        if t <= self.delay {
            return self.from;
        }
        if self.duration <= 0.0 || t >= self.end() {
            return self.to;
        }
        let x = (t - self.delay) / self.duration;
        self.from.lerp(self.to, ease_out_cubic(x))
    }
}

fn ease_out_cubic(x: f32) -> f32 {
    let inv = 1.0 - x.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Poses of every animated element for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EntranceFrame {
    pub title: Pose,
    pub tagline: Pose,
    pub cta: Pose,
}

impl EntranceFrame {
    pub const SETTLED: EntranceFrame = EntranceFrame {
        title: Pose::REST,
        tagline: Pose::REST,
        cta: Pose::REST,
    };
}

/// Staggered entrance of the hero block.
#[derive(Debug, Clone)]
pub struct Entrance {
    pub title: Transition,
    pub tagline: Transition,
    pub cta: Transition,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            title: Transition::fade_down(0.2, 0.8),
            tagline: Transition::fade_down(0.4, 0.8),
            cta: Transition::fade_grow(0.6, 0.8),
        }
    }
}

impl Entrance {
    pub fn at(&self, t: f32) -> EntranceFrame {
        EntranceFrame {
            title: self.title.sample(t),
            tagline: self.tagline.sample(t),
            cta: self.cta.sample(t),
        }
    }

    pub fn is_finished(&self, t: f32) -> bool {
        t >= self.title.end().max(self.tagline.end()).max(self.cta.end())
    }
}
