//! Roles, identities, and the dashboard each role lands on.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Roles recognised by the Class Management System.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Institution administrator.
    Admin,
    /// Admissions counselor.
    Counselor,
    /// Teaching staff.
    Teacher,
    /// Fees and finance staff.
    Accountant,
    /// Enrolled learner.
    Student,
}

impl Role {
    /// Every role, in the order they are listed on the site.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Counselor,
        Self::Teacher,
        Self::Accountant,
        Self::Student,
    ];

    /// Lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Counselor => "counselor",
            Self::Teacher => "teacher",
            Self::Accountant => "accountant",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known user as reported by an authenticator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Role deciding the dashboard.
    pub role: Role,
    /// Name used in the welcome toast.
    pub display_name: String,
}

impl Identity {
    /// Build an identity.
    pub fn new(role: Role, display_name: impl Into<String>) -> Self {
        Self {
            role,
            display_name: display_name.into(),
        }
    }
}

/// Result of a successful authentication call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// The email belongs to a known user.
    Identified(Identity),
    /// Credentials were accepted without a matching directory entry.
    Anonymous,
}

/// Client-side route of a role dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardPath(String);

impl DashboardPath {
    /// Wrap a path such as `/app/admin/dashboard`.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Borrow the path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DashboardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role to dashboard mapping used for post-login redirects.
///
/// # Examples
/// ```
/// use landing::domain::{DashboardRoutes, Role};
///
/// let routes = DashboardRoutes::default();
/// assert_eq!(routes.path_for(Role::Admin).as_str(), "/app/admin/dashboard");
/// assert_eq!(routes.path_for(Role::Accountant).as_str(), "/app/finance/dashboard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardRoutes {
    routes: BTreeMap<Role, DashboardPath>,
}

impl DashboardRoutes {
    /// Replace the route for one role.
    #[must_use]
    pub fn with_route(mut self, role: Role, path: DashboardPath) -> Self {
        self.routes.insert(role, path);
        self
    }

    /// Dashboard for `role`.
    pub fn path_for(&self, role: Role) -> DashboardPath {
        self.routes
            .get(&role)
            .cloned()
            .unwrap_or_else(|| DashboardPath::new(format!("/app/{role}/dashboard")))
    }

    /// Configured routes in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &DashboardPath)> {
        self.routes.iter().map(|(role, path)| (*role, path))
    }
}

impl Default for DashboardRoutes {
    fn default() -> Self {
        let routes = Role::ALL
            .into_iter()
            .map(|role| {
                // Finance staff share one dashboard.
                let segment = match role {
                    Role::Accountant => "finance",
                    other => other.as_str(),
                };
                (role, DashboardPath::new(format!("/app/{segment}/dashboard")))
            })
            .collect();
        Self { routes }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Admin, "/app/admin/dashboard")]
    #[case(Role::Counselor, "/app/counselor/dashboard")]
    #[case(Role::Teacher, "/app/teacher/dashboard")]
    #[case(Role::Accountant, "/app/finance/dashboard")]
    #[case(Role::Student, "/app/student/dashboard")]
    fn default_routes_match_site_configuration(#[case] role: Role, #[case] expected: &str) {
        assert_eq!(DashboardRoutes::default().path_for(role).as_str(), expected);
    }

    #[test]
    fn overrides_replace_a_single_route() {
        let routes = DashboardRoutes::default()
            .with_route(Role::Teacher, DashboardPath::new("/staff/home"));
        assert_eq!(routes.path_for(Role::Teacher).as_str(), "/staff/home");
        assert_eq!(routes.path_for(Role::Student).as_str(), "/app/student/dashboard");
    }

    #[test]
    fn roles_serialise_lowercase() {
        let json = serde_json::to_string(&Role::Counselor).expect("serialise role");
        assert_eq!(json, "\"counselor\"");
        let role: Role = serde_json::from_str("\"accountant\"").expect("parse role");
        assert_eq!(role, Role::Accountant);
    }
}
