//! Tri-state lifecycle guarding the mutating calls of a pallet.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Lifecycle of a kiosk component.
///
/// Transitions are explicit owner requests. Any state may move to any other
/// state; only a request for the current state is refused.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Decode,
    DecodeWithMemTracking,
    Encode,
    Eq,
    PartialEq,
    TypeInfo,
    MaxEncodedLen,
)]
pub enum Lifecycle {
    #[default]
    #[codec(index = 0)]
    Active,
    #[codec(index = 1)]
    Paused,
    #[codec(index = 2)]
    Cancelled,
}

/// Reasons a lifecycle check or transition is refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleError {
    /// Requested state index is not 0, 1 or 2.
    InvalidOption,
    AlreadyActive,
    AlreadyPaused,
    AlreadyCancelled,
    /// A mutating call was attempted outside `Active`.
    NotActive,
    /// A guarded read was attempted while `Cancelled`.
    Cancelled,
}

impl Lifecycle {
    /// Numeric index used by the `change_state` calls.
    pub const fn index(self) -> u8 {
        match self {
            Lifecycle::Active => 0,
            Lifecycle::Paused => 1,
            Lifecycle::Cancelled => 2,
        }
    }

    /// Resolve a `change_state` request against the current state.
    ///
    /// Returns the new state, or the reason the request is refused.
    pub fn transition(self, requested: u8) -> Result<Lifecycle, LifecycleError> {
        let next = Lifecycle::try_from(requested)?;
        if next == self {
            return Err(match self {
                Lifecycle::Active => LifecycleError::AlreadyActive,
                Lifecycle::Paused => LifecycleError::AlreadyPaused,
                Lifecycle::Cancelled => LifecycleError::AlreadyCancelled,
            });
        }
        Ok(next)
    }

    pub fn ensure_active(self) -> Result<(), LifecycleError> {
        match self {
            Lifecycle::Active => Ok(()),
            _ => Err(LifecycleError::NotActive),
        }
    }

    pub fn ensure_not_cancelled(self) -> Result<(), LifecycleError> {
        match self {
            Lifecycle::Cancelled => Err(LifecycleError::Cancelled),
            _ => Ok(()),
        }
    }

    pub fn is_cancelled(self) -> bool {
        self == Lifecycle::Cancelled
    }
}

impl TryFrom<u8> for Lifecycle {
    type Error = LifecycleError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Lifecycle::Active),
            1 => Ok(Lifecycle::Paused),
            2 => Ok(Lifecycle::Cancelled),
            _ => Err(LifecycleError::InvalidOption),
        }
    }
}
