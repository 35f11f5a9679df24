//! Device form-factor seam for `~tablet` key variants.

/// Suffix probed before the plain key on tablet form factors.
pub const TABLET_KEY_SUFFIX: &str = "~tablet";

/// Answers whether the running device is a tablet.
pub trait DeviceInfo: Send + Sync {
    fn is_tablet(&self) -> bool;
}

/// A fixed form factor, for hosts that know theirs at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFactor {
    #[default]
    Phone,
    Tablet,
}

impl DeviceInfo for FormFactor {
    fn is_tablet(&self) -> bool {
        matches!(self, Self::Tablet)
    }
}
