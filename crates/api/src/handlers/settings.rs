//! Handlers for payment settings stored in `site_settings`.
//!
//! Reads merge each stored JSON blob over compiled-in defaults, so
//! missing keys fall back silently. Writes replace the value for one
//! key at a time, independently of the others.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use kreatif_core::settings::{
    self, BankSettings, PayPalSettings, PaymentPreferences, StripeSettings,
};
use kreatif_db::models::site_setting::SiteSetting;
use kreatif_db::repositories::SiteSettingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// All payment settings, merged over defaults.
#[derive(Debug, Serialize)]
pub struct PaymentSettingsView {
    pub stripe: StripeSettings,
    pub paypal: PayPalSettings,
    pub bank: BankSettings,
    pub preferences: PaymentPreferences,
}

/// GET /api/v1/settings/payments
pub async fn get_payment_settings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PaymentSettingsView>>> {
    let stored = SiteSettingRepo::list(&state.pool).await?;

    let mut view = PaymentSettingsView {
        stripe: StripeSettings::default(),
        paypal: PayPalSettings::default(),
        bank: BankSettings::default(),
        preferences: PaymentPreferences::default(),
    };

    for setting in &stored {
        match setting.key.as_str() {
            settings::KEY_STRIPE => view.stripe = settings::merge_over_defaults(&setting.value),
            settings::KEY_PAYPAL => view.paypal = settings::merge_over_defaults(&setting.value),
            settings::KEY_BANK => view.bank = settings::merge_over_defaults(&setting.value),
            settings::KEY_PREFERENCES => {
                view.preferences = settings::merge_over_defaults(&setting.value)
            }
            _ => {}
        }
    }

    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/settings/payments/{key}
///
/// Replaces the JSON value for one payment key. Unknown keys are
/// rejected before any write.
pub async fn update_payment_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(value): Json<serde_json::Value>,
) -> AppResult<Json<SiteSetting>> {
    if !settings::PAYMENT_KEYS.contains(&key.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unknown payment setting key: {key}"
        )));
    }

    let setting = SiteSettingRepo::upsert(&state.pool, &key, &value).await?;
    Ok(Json(setting))
}
