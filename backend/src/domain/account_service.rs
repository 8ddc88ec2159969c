//! Account domain service.
//!
//! Registration creates the user and seeds its synthetic series,
//! transactions, alerts and insights in one pass. Login and payment setup
//! only read or annotate the stored account.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::generators::{
    alert_templates, insight_templates, monthly_series, opaque_id, transaction_batch,
};
use crate::domain::ports::{
    AccountCommand, LoginOutcome, PaymentSetup, PaymentSetupRequest, RandomSource, RecordStore,
};
use crate::domain::service_support::map_store_error;
use crate::domain::{
    Error, LoginCredentials, NewUser, PASSWORD_PLACEHOLDER, Plan, Registration, SessionToken,
    User, UserProfile,
};

/// Prefix of generated payment-customer references.
const CUSTOMER_PREFIX: &str = "cus";

/// Account service implementing [`AccountCommand`].
#[derive(Clone)]
pub struct AccountService<S> {
    store: Arc<S>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl<S> AccountService<S> {
    /// Create a service over the given store, randomness and clock.
    pub fn new(store: Arc<S>, random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            random,
            clock,
        }
    }
}

impl<S> AccountService<S>
where
    S: RecordStore,
{
    async fn seed_records(&self, user: &User) -> Result<(), Error> {
        let now = self.clock.utc();
        let random = self.random.as_ref();
        self.store
            .append_series(user.id, monthly_series(random), now)
            .await
            .map_err(map_store_error)?;
        self.store
            .append_transactions(user.id, transaction_batch(random, now.date_naive()))
            .await
            .map_err(map_store_error)?;
        self.store
            .append_alerts(user.id, alert_templates())
            .await
            .map_err(map_store_error)?;
        self.store
            .append_insights(user.id, insight_templates(), now)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }
}

#[async_trait]
impl<S> AccountCommand for AccountService<S>
where
    S: RecordStore,
{
    async fn register(&self, registration: Registration) -> Result<UserProfile, Error> {
        let draft = NewUser {
            name: registration.name().to_owned(),
            email: registration.email().to_owned(),
            company: registration.company().to_owned(),
            plan: Plan::default(),
            password_hash: PASSWORD_PLACEHOLDER.to_owned(),
            created_at: self.clock.utc(),
        };
        let user = self.store.create_user(draft).await.map_err(map_store_error)?;
        self.seed_records(&user).await?;
        info!(user_id = %user.id, "account registered");
        Ok(user.profile())
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, Error> {
        let user = self
            .store
            .find_user_by_email(credentials.email())
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::unauthorized("Invalid credentials"))?;
        info!(user_id = %user.id, "login accepted");
        Ok(LoginOutcome {
            token: SessionToken::for_user(user.id),
            user: user.profile(),
        })
    }

    async fn setup_payment(&self, request: PaymentSetupRequest) -> Result<PaymentSetup, Error> {
        let customer_id = opaque_id(self.random.as_ref(), CUSTOMER_PREFIX);
        let user = self
            .store
            .attach_payment_customer(request.user_id, &customer_id)
            .await
            .map_err(map_store_error)?;
        info!(user_id = %user.id, "payment customer attached");
        Ok(PaymentSetup {
            customer_id,
            payment_method: request.payment_method,
        })
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
