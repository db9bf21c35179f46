//! Shared types for the queue API layer.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::db::SqliteStore;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<SqliteStore>,
    fixed_today: Option<NaiveDate>,
}

impl ApiContext {
    pub fn new(store: Arc<SqliteStore>) -> Self {
        Self {
            store,
            fixed_today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_fixed_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
