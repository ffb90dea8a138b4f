//! Static site details shared with the form flows.

use crate::domain::DashboardRoutes;

/// How prospects can reach the sales team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    /// Sales inbox.
    pub email: &'static str,
    /// Primary phone line.
    pub phone: &'static str,
    /// Secondary phone line.
    pub phone_alt: &'static str,
    /// Company website.
    pub website: &'static str,
}

/// Product identity and the routes the login flow redirects to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Product name.
    pub name: &'static str,
    /// Vendor.
    pub company: &'static str,
    /// Vendor tagline.
    pub tagline: &'static str,
    /// Sales contact details.
    pub contact: ContactDetails,
    /// Dashboard route per role.
    pub dashboards: DashboardRoutes,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Class Management System",
            company: "SHRIS TECH",
            tagline: "Empowering Digital Growth",
            contact: ContactDetails {
                email: "anisha@shristech.com",
                phone: "+91-9579968397",
                phone_alt: "+91-7588473653",
                website: "www.shristech.com",
            },
            dashboards: DashboardRoutes::default(),
        }
    }
}
