//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    AccountCommand, AlertCommand, CashFlowQuery, RandomSource, ReportCommand,
};
use crate::domain::{AccountService, DashboardService, ReportExportService};
use crate::outbound::memory::InMemoryRecordStore;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub cash_flow: Arc<dyn CashFlowQuery>,
    pub alerts: Arc<dyn AlertCommand>,
    pub reports: Arc<dyn ReportCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub cash_flow: Arc<dyn CashFlowQuery>,
    pub alerts: Arc<dyn AlertCommand>,
    pub reports: Arc<dyn ReportCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            accounts,
            cash_flow,
            alerts,
            reports,
        } = ports;
        Self {
            accounts,
            cash_flow,
            alerts,
            reports,
        }
    }

    /// Wire every port to the domain services over one fresh in-memory store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cashflow_backend::inbound::http::state::HttpState;
    /// use cashflow_backend::outbound::random::SeededRandomSource;
    ///
    /// let state = HttpState::in_memory(
    ///     Arc::new(SeededRandomSource::new(1)),
    ///     Arc::new(mockable::DefaultClock),
    /// );
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn in_memory(random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryRecordStore::new());
        let dashboard = Arc::new(DashboardService::new(
            store.clone(),
            random.clone(),
            clock.clone(),
        ));
        Self::new(HttpStatePorts {
            accounts: Arc::new(AccountService::new(
                store.clone(),
                random.clone(),
                clock.clone(),
            )),
            cash_flow: dashboard.clone(),
            alerts: dashboard,
            reports: Arc::new(ReportExportService::new(store, random, clock)),
        })
    }
}
