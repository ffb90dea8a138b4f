//! Client-side navigation port used for post-login redirects.

use crate::domain::DashboardPath;

/// Issues client-side redirects.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Navigate to `path`.
    fn redirect(&self, path: &DashboardPath);
}
