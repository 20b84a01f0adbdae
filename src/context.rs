//! Application Context
//!
//! Shared handle to the dashboard controller, provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboard::Dashboard;

/// The dashboard is `Rc`-based, so it lives in local arena storage
#[derive(Clone, Copy)]
pub struct AppContext {
    dashboard: StoredValue<Dashboard, LocalStorage>,
}

impl AppContext {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: StoredValue::new_local(dashboard),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        self.dashboard.get_value()
    }

    /// Run an async dashboard operation on the browser event loop
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Dashboard) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.dashboard()));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
