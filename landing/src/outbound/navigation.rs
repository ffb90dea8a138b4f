//! Navigator adapter that records redirects instead of driving a browser.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::domain::DashboardPath;
use crate::domain::ports::Navigator;

/// Logs each redirect and keeps the history for inspection.
#[derive(Debug, Default)]
pub struct NavigationHistory {
    visited: Mutex<Vec<DashboardPath>>,
}

impl NavigationHistory {
    /// Paths visited so far, oldest first.
    pub fn visited(&self) -> Vec<DashboardPath> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent redirect.
    pub fn current(&self) -> Option<DashboardPath> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for NavigationHistory {
    fn redirect(&self, path: &DashboardPath) {
        info!(%path, "redirect");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.clone());
    }
}
