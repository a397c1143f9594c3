//! Payment settings stored as JSON blobs in the `site_settings` table.
//!
//! Each key holds one independently-written JSON object. Reads merge the
//! stored value over compiled-in defaults, so settings saved by an older
//! build (missing newer keys) still deserialize cleanly.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Setting key for Stripe credentials.
pub const KEY_STRIPE: &str = "payment_stripe";
/// Setting key for PayPal credentials.
pub const KEY_PAYPAL: &str = "payment_paypal";
/// Setting key for bank-transfer details.
pub const KEY_BANK: &str = "payment_bank";
/// Setting key for payment preferences.
pub const KEY_PREFERENCES: &str = "payment_preferences";

/// All payment setting keys, in display order.
pub const PAYMENT_KEYS: &[&str] = &[KEY_STRIPE, KEY_PAYPAL, KEY_BANK, KEY_PREFERENCES];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StripeSettings {
    pub publishable_key: String,
    pub secret_key: String,
    pub webhook_secret: String,
    pub enabled: bool,
}

impl Default for StripeSettings {
    fn default() -> Self {
        Self {
            publishable_key: String::new(),
            secret_key: String::new(),
            webhook_secret: String::new(),
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayPalSettings {
    pub client_id: String,
    pub secret: String,
    pub sandbox: bool,
    pub enabled: bool,
}

impl Default for PayPalSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            secret: String::new(),
            sandbox: true,
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BankSettings {
    pub iban: String,
    pub bic_swift: String,
    pub bank_name: String,
    pub account_holder: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentPreferences {
    pub default_method: String,
    pub currency: String,
    pub tax_rate: f64,
}

impl Default for PaymentPreferences {
    fn default() -> Self {
        Self {
            default_method: "bank".to_string(),
            currency: "EUR".to_string(),
            tax_rate: 21.0,
        }
    }
}

/// Merge a stored JSON object over the type's defaults.
///
/// Keys present in `stored` win; missing keys fall back silently. A
/// stored value that is not an object (or fails to deserialize after the
/// merge) yields the defaults unchanged.
pub fn merge_over_defaults<T>(stored: &serde_json::Value) -> T
where
    T: Default + Serialize + DeserializeOwned,
{
    let mut base = match serde_json::to_value(T::default()) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => return T::default(),
    };

    if let serde_json::Value::Object(overrides) = stored {
        for (key, value) in overrides {
            base.insert(key.clone(), value.clone());
        }
    }

    serde_json::from_value(serde_json::Value::Object(base)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_keys_override_defaults() {
        let stored = json!({ "iban": "NL00KRTF0123456789", "enabled": true });
        let bank: BankSettings = merge_over_defaults(&stored);
        assert_eq!(bank.iban, "NL00KRTF0123456789");
        assert!(bank.enabled);
        // Untouched keys keep their defaults.
        assert_eq!(bank.bank_name, "");
    }

    #[test]
    fn missing_keys_fall_back_silently() {
        let prefs: PaymentPreferences = merge_over_defaults(&json!({}));
        assert_eq!(prefs, PaymentPreferences::default());
        assert_eq!(prefs.currency, "EUR");
        assert_eq!(prefs.tax_rate, 21.0);
    }

    #[test]
    fn non_object_value_yields_defaults() {
        let stripe: StripeSettings = merge_over_defaults(&json!("not an object"));
        assert_eq!(stripe, StripeSettings::default());
    }

    #[test]
    fn unknown_stored_keys_do_not_break_deserialization() {
        let stored = json!({ "client_id": "abc", "legacy_field": 42 });
        let paypal: PayPalSettings = merge_over_defaults(&stored);
        assert_eq!(paypal.client_id, "abc");
        assert!(paypal.sandbox);
    }
}
