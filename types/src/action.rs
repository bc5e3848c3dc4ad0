//! Gated platform actions.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An action a user can attempt, as seen by the access gate.
///
/// The gate only needs to know which role an action belongs to and whether
/// it requires a completed identity verification; the actual property /
/// application plumbing lives in the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Browse the public property listings.
    BrowseProperties,
    /// Submit a rental application for a property.
    SubmitApplication,
    /// List a new property for rent.
    ListProperty,
    /// Rate a property after renting it.
    RateProperty,
    /// View the applications the identity itself has submitted.
    ViewOwnApplications,
}

impl Action {
    /// The role this action is reserved for, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Action::SubmitApplication | Action::RateProperty => Some(Role::Tenant),
            Action::ListProperty => Some(Role::Landlord),
            Action::BrowseProperties | Action::ViewOwnApplications => None,
        }
    }

    /// Whether the action requires *some* role to be assigned at all.
    pub fn requires_role(&self) -> bool {
        match self {
            Action::BrowseProperties => false,
            _ => true,
        }
    }

    /// Whether the action requires a completed identity verification.
    pub fn requires_verification(&self) -> bool {
        match self {
            Action::SubmitApplication | Action::ListProperty | Action::RateProperty => true,
            Action::BrowseProperties | Action::ViewOwnApplications => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::BrowseProperties => "browse_properties",
            Action::SubmitApplication => "submit_application",
            Action::ListProperty => "list_property",
            Action::RateProperty => "rate_property",
            Action::ViewOwnApplications => "view_own_applications",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_is_open_to_everyone() {
        assert!(!Action::BrowseProperties.requires_role());
        assert!(!Action::BrowseProperties.requires_verification());
        assert_eq!(Action::BrowseProperties.required_role(), None);
    }

    #[test]
    fn tenant_actions() {
        assert_eq!(Action::SubmitApplication.required_role(), Some(Role::Tenant));
        assert_eq!(Action::RateProperty.required_role(), Some(Role::Tenant));
    }

    #[test]
    fn listing_is_landlord_only() {
        assert_eq!(Action::ListProperty.required_role(), Some(Role::Landlord));
        assert!(Action::ListProperty.requires_verification());
    }

    #[test]
    fn own_applications_need_a_role_but_not_verification() {
        assert!(Action::ViewOwnApplications.requires_role());
        assert!(!Action::ViewOwnApplications.requires_verification());
        assert_eq!(Action::ViewOwnApplications.required_role(), None);
    }
}
