//! In-memory [`RecordStore`] adapter.
//!
//! All collections sit behind one `RwLock`, so every port call observes a
//! consistent snapshot and id allocation is serialised.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::{
    Alert, AlertId, CashFlowSeries, Insight, InsightId, NewAlert, NewInsight, NewMonthlyRecord,
    NewTransaction, NewUser, Transaction, TransactionId, User, UserId,
};

#[derive(Debug, Default)]
struct Collections {
    users: BTreeMap<UserId, User>,
    user_ids_by_email: HashMap<String, UserId>,
    series: HashMap<UserId, CashFlowSeries>,
    transactions: Vec<Transaction>,
    alerts: BTreeMap<AlertId, Alert>,
    insights: Vec<Insight>,
    last_transaction_id: u64,
    last_alert_id: u64,
    last_insight_id: u64,
}

impl Collections {
    fn require_user(&self, user_id: UserId) -> Result<(), RecordStoreError> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(RecordStoreError::user_not_found(user_id.get()))
        }
    }

    fn next_transaction_id(&mut self) -> TransactionId {
        self.last_transaction_id += 1;
        TransactionId::new(self.last_transaction_id)
    }

    fn next_alert_id(&mut self) -> AlertId {
        self.last_alert_id += 1;
        AlertId::new(self.last_alert_id)
    }

    fn next_insight_id(&mut self) -> InsightId {
        self.last_insight_id += 1;
        InsightId::new(self.last_insight_id)
    }
}

/// Record store held entirely in process memory.
///
/// Each instance is independent, so tests get isolation by creating a fresh
/// store.
///
/// # Examples
/// ```
/// use cashflow_backend::outbound::memory::InMemoryRecordStore;
///
/// let store = InMemoryRecordStore::new();
/// # let _ = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Collections>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, RecordStoreError> {
        self.inner.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, RecordStoreError> {
        self.inner.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RecordStoreError {
    RecordStoreError::unavailable("record store lock poisoned")
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create_user(&self, user: NewUser) -> Result<User, RecordStoreError> {
        let mut guard = self.write()?;
        if guard.user_ids_by_email.contains_key(&user.email) {
            return Err(RecordStoreError::duplicate_email(user.email));
        }
        let next = u64::try_from(guard.users.len())
            .map_err(|err| RecordStoreError::unavailable(err.to_string()))?
            + 1;
        let id = UserId::new(next);
        let stored = user.into_user(id);
        guard.user_ids_by_email.insert(stored.email.clone(), id);
        guard.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, RecordStoreError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RecordStoreError> {
        let guard = self.read()?;
        Ok(guard
            .user_ids_by_email
            .get(email)
            .and_then(|id| guard.users.get(id))
            .cloned())
    }

    async fn user_count(&self) -> Result<usize, RecordStoreError> {
        Ok(self.read()?.users.len())
    }

    async fn attach_payment_customer(
        &self,
        id: UserId,
        customer_id: &str,
    ) -> Result<User, RecordStoreError> {
        let mut guard = self.write()?;
        let user = guard
            .users
            .get_mut(&id)
            .ok_or_else(|| RecordStoreError::user_not_found(id.get()))?;
        user.payment_customer_id = Some(customer_id.to_owned());
        Ok(user.clone())
    }

    async fn append_series(
        &self,
        user_id: UserId,
        records: Vec<NewMonthlyRecord>,
        last_updated: DateTime<Utc>,
    ) -> Result<CashFlowSeries, RecordStoreError> {
        let mut guard = self.write()?;
        guard.require_user(user_id)?;
        let series = CashFlowSeries::new(user_id, records, last_updated);
        guard.series.insert(user_id, series.clone());
        Ok(series)
    }

    async fn append_transactions(
        &self,
        user_id: UserId,
        drafts: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, RecordStoreError> {
        let mut guard = self.write()?;
        guard.require_user(user_id)?;
        let stored: Vec<Transaction> = drafts
            .into_iter()
            .map(|draft| Transaction::from_new(guard.next_transaction_id(), user_id, draft))
            .collect();
        guard.transactions.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn append_alerts(
        &self,
        user_id: UserId,
        templates: Vec<NewAlert>,
    ) -> Result<Vec<Alert>, RecordStoreError> {
        let mut guard = self.write()?;
        guard.require_user(user_id)?;
        let mut stored = Vec::with_capacity(templates.len());
        for template in templates {
            let alert = Alert::from_new(guard.next_alert_id(), user_id, template);
            guard.alerts.insert(alert.id, alert.clone());
            stored.push(alert);
        }
        Ok(stored)
    }

    async fn append_insights(
        &self,
        user_id: UserId,
        templates: Vec<NewInsight>,
        created_at: DateTime<Utc>,
    ) -> Result<Vec<Insight>, RecordStoreError> {
        let mut guard = self.write()?;
        guard.require_user(user_id)?;
        let stored: Vec<Insight> = templates
            .into_iter()
            .map(|template| {
                Insight::from_new(guard.next_insight_id(), user_id, template, created_at)
            })
            .collect();
        guard.insights.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn series_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<CashFlowSeries>, RecordStoreError> {
        Ok(self.read()?.series.get(&user_id).cloned())
    }

    async fn transactions_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Transaction>, RecordStoreError> {
        Ok(self
            .read()?
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn alerts_for_user(&self, user_id: UserId) -> Result<Vec<Alert>, RecordStoreError> {
        Ok(self
            .read()?
            .alerts
            .values()
            .filter(|alert| alert.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insights_for_user(&self, user_id: UserId) -> Result<Vec<Insight>, RecordStoreError> {
        Ok(self
            .read()?
            .insights
            .iter()
            .filter(|insight| insight.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn resolve_alert(
        &self,
        id: AlertId,
        now: DateTime<Utc>,
    ) -> Result<Alert, RecordStoreError> {
        let mut guard = self.write()?;
        let alert = guard
            .alerts
            .get_mut(&id)
            .ok_or_else(|| RecordStoreError::alert_not_found(id.get()))?;
        alert.resolve(now);
        Ok(alert.clone())
    }
}
