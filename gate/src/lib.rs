//! The access gate.
//!
//! A pure, synchronous decision function with no side effects, so the same
//! call can back both UI enablement (button greyed out) and the pre-submit
//! guard. The gate never sees store failures — callers that cannot read
//! role or verification state must deny on their own instead of guessing
//! inputs (see `rentright-session`'s `AccessGuard`).

pub mod decision;

pub use decision::{Decision, DenyReason};

use rentright_types::{Action, Role, VerificationRecord};

/// Decide whether `action` is allowed for an identity with the given role
/// assignment and verification record.
///
/// Role is checked before verification, so a verified tenant attempting to
/// list a property is denied for the role, not the verification.
pub fn can_perform(
    action: Action,
    role: Option<Role>,
    verification: &VerificationRecord,
) -> Decision {
    if action.requires_role() {
        let Some(role) = role else {
            return Decision::Denied(DenyReason::NoRole);
        };
        if let Some(required) = action.required_role() {
            if role != required {
                return Decision::Denied(DenyReason::WrongRole);
            }
        }
    }

    if action.requires_verification() && !verification.verified {
        return Decision::Denied(DenyReason::Unverified);
    }

    Decision::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentright_types::{IdentityKey, ProofCommitment, Timestamp};

    fn unverified() -> VerificationRecord {
        VerificationRecord::unverified(IdentityKey::new("0xABC"))
    }

    fn verified() -> VerificationRecord {
        VerificationRecord::verified(
            IdentityKey::new("0xABC"),
            ProofCommitment::new("a".repeat(64)),
            Timestamp::new(1000),
        )
    }

    #[test]
    fn browsing_is_always_allowed() {
        for role in [None, Some(Role::Tenant), Some(Role::Landlord)] {
            for record in [unverified(), verified()] {
                assert_eq!(
                    can_perform(Action::BrowseProperties, role, &record),
                    Decision::Allowed
                );
            }
        }
    }

    #[test]
    fn verified_tenant_cannot_list_property() {
        assert_eq!(
            can_perform(Action::ListProperty, Some(Role::Tenant), &verified()),
            Decision::Denied(DenyReason::WrongRole)
        );
    }

    #[test]
    fn unverified_tenant_cannot_apply() {
        assert_eq!(
            can_perform(Action::SubmitApplication, Some(Role::Tenant), &unverified()),
            Decision::Denied(DenyReason::Unverified)
        );
    }

    #[test]
    fn verified_tenant_can_apply() {
        assert_eq!(
            can_perform(Action::SubmitApplication, Some(Role::Tenant), &verified()),
            Decision::Allowed
        );
    }

    #[test]
    fn verified_landlord_can_list() {
        assert_eq!(
            can_perform(Action::ListProperty, Some(Role::Landlord), &verified()),
            Decision::Allowed
        );
    }

    #[test]
    fn unverified_landlord_cannot_list() {
        assert_eq!(
            can_perform(Action::ListProperty, Some(Role::Landlord), &unverified()),
            Decision::Denied(DenyReason::Unverified)
        );
    }

    #[test]
    fn rating_follows_application_rules() {
        assert_eq!(
            can_perform(Action::RateProperty, Some(Role::Landlord), &verified()),
            Decision::Denied(DenyReason::WrongRole)
        );
        assert_eq!(
            can_perform(Action::RateProperty, Some(Role::Tenant), &verified()),
            Decision::Allowed
        );
    }

    #[test]
    fn own_applications_need_only_a_role() {
        assert_eq!(
            can_perform(Action::ViewOwnApplications, None, &verified()),
            Decision::Denied(DenyReason::NoRole)
        );
        for role in [Role::Tenant, Role::Landlord] {
            assert_eq!(
                can_perform(Action::ViewOwnApplications, Some(role), &unverified()),
                Decision::Allowed
            );
        }
    }

    #[test]
    fn role_specific_action_without_role_is_no_role() {
        assert_eq!(
            can_perform(Action::SubmitApplication, None, &verified()),
            Decision::Denied(DenyReason::NoRole)
        );
    }

    #[test]
    fn gate_is_stateless_and_repeatable() {
        let record = unverified();
        let first = can_perform(Action::SubmitApplication, Some(Role::Tenant), &record);
        let second = can_perform(Action::SubmitApplication, Some(Role::Tenant), &record);
        assert_eq!(first, second);
    }
}
