use crate::mask::max_radius;

/// Outcome of fitting a requested corner radius to a tile size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RadiusClamp {
    pub requested: u32,
    pub effective: u32,
}

impl RadiusClamp {
    #[inline]
    pub fn was_clamped(self) -> bool {
        self.effective < self.requested
    }
}

/// Clamps `requested` to `min(width, height) / 2`.
pub fn clamp_radius(width: u32, height: u32, requested: u32) -> RadiusClamp {
    RadiusClamp {
        requested,
        effective: requested.min(max_radius(width, height)),
    }
}
