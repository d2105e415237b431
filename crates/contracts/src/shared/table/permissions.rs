//! Role-gated row actions.
//!
//! One declarative table of `(action, roles, statuses)` rules replaces the
//! role checks that used to be repeated in every list.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::enums::{RecordStatus, Role, RowAction};

/// Statuses a rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusScope {
    Any,
    Only(Vec<RecordStatus>),
}

impl StatusScope {
    pub fn contains(&self, status: &RecordStatus) -> bool {
        match self {
            StatusScope::Any => true,
            StatusScope::Only(statuses) => statuses.contains(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRule {
    pub action: RowAction,
    pub roles: Vec<Role>,
    pub statuses: StatusScope,
}

impl PermissionRule {
    pub fn new(action: RowAction, roles: &[Role], statuses: StatusScope) -> Self {
        Self {
            action,
            roles: roles.to_vec(),
            statuses,
        }
    }

    fn grants(&self, action: RowAction, role: Role, status: &RecordStatus) -> bool {
        self.action == action && self.roles.contains(&role) && self.statuses.contains(status)
    }
}

/// An action is visible when at least one rule grants it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionTable {
    pub rules: Vec<PermissionRule>,
}

impl PermissionTable {
    pub fn new(rules: Vec<PermissionRule>) -> Self {
        Self { rules }
    }

    pub fn is_visible(&self, action: RowAction, role: Role, status: &RecordStatus) -> bool {
        self.rules.iter().any(|rule| rule.grants(action, role, status))
    }

    /// Visible actions in display order
    pub fn visible_actions(&self, role: Role, status: &RecordStatus) -> Vec<RowAction> {
        RowAction::all()
            .into_iter()
            .filter(|action| self.is_visible(*action, role, status))
            .collect()
    }

    /// Default rules of the dashboard
    pub fn standard() -> &'static PermissionTable {
        &STANDARD_PERMISSIONS
    }
}

static STANDARD_PERMISSIONS: Lazy<PermissionTable> = Lazy::new(|| {
    use RecordStatus::*;
    use Role::*;

    let editable = vec![Pending, InProgress, Active, Inactive, Unset];

    PermissionTable::new(vec![
        PermissionRule::new(
            RowAction::View,
            &[Admin, Manager, Seller, Finance, Viewer],
            StatusScope::Any,
        ),
        PermissionRule::new(RowAction::Edit, &[Admin], StatusScope::Any),
        PermissionRule::new(RowAction::Edit, &[Manager, Seller], StatusScope::Only(editable)),
        PermissionRule::new(RowAction::Delete, &[Admin], StatusScope::Any),
        PermissionRule::new(
            RowAction::ChangeStatus,
            &[Admin, Manager],
            StatusScope::Only(vec![Pending, InProgress]),
        ),
        PermissionRule::new(
            RowAction::Return,
            &[Admin, Manager],
            StatusScope::Only(vec![Completed, Paid]),
        ),
        PermissionRule::new(
            RowAction::Correct,
            &[Admin, Manager],
            StatusScope::Only(vec![Returned]),
        ),
        PermissionRule::new(
            RowAction::Cancel,
            &[Admin, Manager],
            StatusScope::Only(vec![Pending, InProgress]),
        ),
        PermissionRule::new(
            RowAction::RegisterPayment,
            &[Admin, Finance],
            StatusScope::Only(vec![Completed, Corrected]),
        ),
    ])
});

/// Visibility of one action for one row under the standard rules
pub fn is_action_visible(action: RowAction, role: Role, status: &RecordStatus) -> bool {
    PermissionTable::standard().is_visible(action, role, status)
}
