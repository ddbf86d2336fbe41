//! Precondition helpers shared by the kiosk dispatchables.

/// The caller is not the configured owner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotOwner;

/// Succeeds when `caller` equals the stored owner.
///
/// A component without an owner (genesis left it unset) has no administrator,
/// so every administrative call is refused.
pub fn ensure_owner<AccountId: PartialEq>(
    caller: &AccountId,
    owner: Option<&AccountId>,
) -> Result<(), NotOwner> {
    match owner {
        Some(owner) if owner == caller => Ok(()),
        _ => Err(NotOwner),
    }
}
