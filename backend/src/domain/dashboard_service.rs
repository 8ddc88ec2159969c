//! Dashboard domain service.
//!
//! Read models are derived from the records seeded at registration. Every
//! operation resolves the user before touching any other collection.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::aggregation::{BASE_CONFIDENCE, health_score, project, summarize};
use crate::domain::ports::{
    AlertCommand, CashFlowQuery, DashboardView, ForecastReport, ForecastRequest, HealthReport,
    InsightReport, RECENT_MONTHS, RECENT_TRANSACTIONS, RandomSource, RecordStore, TeamMember,
};
use crate::domain::service_support::{map_store_error, require_user};
use crate::domain::{Alert, AlertId, Error, Transaction, UserId};

/// Members returned for every account.
const DEMO_TEAM: [TeamMember; 3] = [
    TeamMember {
        id: 1,
        name: "Sarah Chen",
        email: "sarah.chen@cashflowpro.io",
        role: "Chief Financial Officer",
    },
    TeamMember {
        id: 2,
        name: "Marcus Webb",
        email: "marcus.webb@cashflowpro.io",
        role: "Financial Analyst",
    },
    TeamMember {
        id: 3,
        name: "Priya Natarajan",
        email: "priya.natarajan@cashflowpro.io",
        role: "Accounts Manager",
    },
];

/// Service implementing [`CashFlowQuery`] and [`AlertCommand`].
#[derive(Clone)]
pub struct DashboardService<S> {
    store: Arc<S>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl<S> DashboardService<S> {
    /// Create a service over the given store, randomness and clock.
    pub fn new(store: Arc<S>, random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            random,
            clock,
        }
    }
}

#[async_trait]
impl<S> CashFlowQuery for DashboardService<S>
where
    S: RecordStore,
{
    async fn dashboard(&self, user_id: UserId) -> Result<DashboardView, Error> {
        let user = require_user(self.store.as_ref(), user_id).await?;
        let series = self
            .store
            .series_for_user(user_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("No data found for user"))?;
        let transactions = self
            .store
            .transactions_for_user(user_id)
            .await
            .map_err(map_store_error)?;
        let alerts = self.unresolved_alerts(user_id).await?;
        let insights = self
            .store
            .insights_for_user(user_id)
            .await
            .map_err(map_store_error)?;

        Ok(DashboardView {
            user: user.profile(),
            summary: summarize(&series.records),
            recent_data: series.recent(RECENT_MONTHS).to_vec(),
            recent_transactions: transactions.into_iter().take(RECENT_TRANSACTIONS).collect(),
            alerts,
            insights,
            last_updated: series.last_updated,
            cash_flow_data: series.records,
        })
    }

    async fn forecast(&self, request: ForecastRequest) -> Result<ForecastReport, Error> {
        require_user(self.store.as_ref(), request.user_id).await?;
        let months_ahead = request.horizon()?;
        let now = self.clock.utc();
        Ok(ForecastReport {
            forecast: project(months_ahead, now.date_naive(), self.random.as_ref()),
            generated_at: now,
            confidence: BASE_CONFIDENCE,
        })
    }

    async fn transactions(&self, user_id: UserId) -> Result<Vec<Transaction>, Error> {
        require_user(self.store.as_ref(), user_id).await?;
        self.store
            .transactions_for_user(user_id)
            .await
            .map_err(map_store_error)
    }

    async fn insights(&self, user_id: UserId) -> Result<InsightReport, Error> {
        require_user(self.store.as_ref(), user_id).await?;
        let insights = self
            .store
            .insights_for_user(user_id)
            .await
            .map_err(map_store_error)?;
        Ok(InsightReport {
            insights,
            generated_at: self.clock.utc(),
        })
    }

    async fn unresolved_alerts(&self, user_id: UserId) -> Result<Vec<Alert>, Error> {
        require_user(self.store.as_ref(), user_id).await?;
        let alerts = self
            .store
            .alerts_for_user(user_id)
            .await
            .map_err(map_store_error)?;
        Ok(alerts.into_iter().filter(|alert| !alert.resolved).collect())
    }

    async fn health(&self, user_id: UserId) -> Result<HealthReport, Error> {
        require_user(self.store.as_ref(), user_id).await?;
        let health = health_score(self.random.as_ref());
        Ok(HealthReport {
            user_id,
            score: health.score,
            rating: health.rating,
            calculated_at: self.clock.utc(),
        })
    }

    async fn team(&self, user_id: UserId) -> Result<Vec<TeamMember>, Error> {
        require_user(self.store.as_ref(), user_id).await?;
        Ok(DEMO_TEAM.to_vec())
    }
}

#[async_trait]
impl<S> AlertCommand for DashboardService<S>
where
    S: RecordStore,
{
    async fn resolve(&self, alert_id: AlertId) -> Result<Alert, Error> {
        let alert = self
            .store
            .resolve_alert(alert_id, self.clock.utc())
            .await
            .map_err(map_store_error)?;
        info!(alert_id = %alert.id, "alert resolved");
        Ok(alert)
    }
}

#[cfg(test)]
#[path = "dashboard_service_tests.rs"]
mod tests;
