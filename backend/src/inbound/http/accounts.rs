//! Account API handlers.
//!
//! ```text
//! POST /api/register       {"name":"A","email":"a@x.com","company":"Co","password":"p"}
//! POST /api/login          {"email":"a@x.com","password":"p"}
//! POST /api/payment/setup  {"userId":1,"paymentMethod":"card"}
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{PaymentSetup, PaymentSetupRequest};
use crate::domain::{LoginCredentials, MissingFields, Registration, SessionToken, UserProfile};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{RawUserId, missing_fields_error, non_blank};

/// Registration body. Every field is required; blanks count as missing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub password: Option<String>,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = MissingFields;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(
            value.name.as_deref(),
            value.email.as_deref(),
            value.company.as_deref(),
            value.password.as_deref(),
        )
    }
}

/// Registration response; never carries the password.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserProfile,
}

/// Create an account and seed its synthetic records.
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let registration = Registration::try_from(payload.into_inner()).map_err(missing_fields_error)?;
    let user = state.accounts.register(registration).await?;
    Ok(web::Json(RegisterResponse {
        message: "Account created successfully",
        user,
    }))
}

/// Login body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login response with the opaque session token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: UserProfile,
    pub token: SessionToken,
}

/// Log in by e-mail. The password is required but not checked.
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(email.as_deref(), password.as_deref())
        .map_err(missing_fields_error)?;
    let outcome = state.accounts.login(credentials).await?;
    Ok(web::Json(LoginResponse {
        message: "Login successful",
        user: outcome.user,
        token: outcome.token,
    }))
}

/// Payment setup body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSetupBody {
    pub user_id: Option<RawUserId>,
    pub payment_method: Option<String>,
}

/// Payment setup response.
#[derive(Debug, Serialize)]
pub struct PaymentSetupResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub setup: PaymentSetup,
}

/// Attach a generated payment-customer reference to an account.
pub async fn setup_payment(
    state: web::Data<HttpState>,
    payload: web::Json<PaymentSetupBody>,
) -> ApiResult<web::Json<PaymentSetupResponse>> {
    let PaymentSetupBody {
        user_id,
        payment_method,
    } = payload.into_inner();
    let (raw_user_id, payment_method) =
        match (user_id.filter(RawUserId::is_present), non_blank(payment_method)) {
            (Some(user_id), Some(method)) => (user_id, method),
            (user_id, method) => {
                return Err(missing_fields_error(MissingFields::among([
                    ("userId", user_id.is_some()),
                    ("paymentMethod", method.is_some()),
                ])));
            }
        };
    let setup = state
        .accounts
        .setup_payment(PaymentSetupRequest {
            user_id: raw_user_id.resolve()?,
            payment_method,
        })
        .await?;
    Ok(web::Json(PaymentSetupResponse {
        message: "Payment method configured successfully",
        setup,
    }))
}
