//! Status and enumeration types mapping to PostgreSQL enums.
//!
//! Each variant's database label must match the corresponding `CREATE
//! TYPE` in the initial migration.

macro_rules! define_pg_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($pg_name:literal, $rename:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[sqlx(type_name = $pg_name, rename_all = $rename)]
        #[serde(rename_all = $rename)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// The database label for this value.
            pub fn as_str(self) -> &'static str {
                match self { $( Self::$variant => $label ),+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_pg_enum! {
    /// Account role.
    UserRole ("user_role", "SCREAMING_SNAKE_CASE") {
        Client => "CLIENT",
        Admin => "ADMIN",
    }
}

define_pg_enum! {
    /// Project lifecycle status. Any status may be set to any other; the
    /// happy path runs PENDING -> IN_PROGRESS -> REVIEW -> COMPLETED with
    /// ARCHIVED reachable from anywhere.
    ProjectStatus ("project_status", "SCREAMING_SNAKE_CASE") {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Review => "REVIEW",
        Completed => "COMPLETED",
        Archived => "ARCHIVED",
    }
}

define_pg_enum! {
    /// Invoice lifecycle status.
    InvoiceStatus ("invoice_status", "SCREAMING_SNAKE_CASE") {
        Draft => "DRAFT",
        Sent => "SENT",
        Paid => "PAID",
        Overdue => "OVERDUE",
        Cancelled => "CANCELLED",
    }
}

define_pg_enum! {
    /// Contact submission triage status. Independent of any reply action.
    ContactStatus ("contact_status", "SCREAMING_SNAKE_CASE") {
        New => "NEW",
        Read => "READ",
        Replied => "REPLIED",
        Archived => "ARCHIVED",
    }
}

define_pg_enum! {
    /// Template order fulfillment status.
    TemplateOrderStatus ("template_order_status", "SCREAMING_SNAKE_CASE") {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Review => "REVIEW",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

define_pg_enum! {
    /// Purchasable template tier.
    TemplateTier ("template_tier", "snake_case") {
        BusinessCard => "business_card",
        Starter => "starter",
        Professional => "professional",
    }
}

define_pg_enum! {
    /// Campaign discount kind.
    DiscountType ("discount_type", "lowercase") {
        Percentage => "percentage",
        Fixed => "fixed",
    }
}

define_pg_enum! {
    /// Where a campaign renders on the site.
    CampaignPlacement ("campaign_placement", "lowercase") {
        Banner => "banner",
        Hero => "hero",
        Popup => "popup",
        Pricing => "pricing",
    }
}

impl ProjectStatus {
    /// Whether the project counts as active on dashboards
    /// (COMPLETED and ARCHIVED are excluded).
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress | Self::Review)
    }
}

impl InvoiceStatus {
    /// Whether the invoice counts toward collected revenue.
    pub fn is_paid(self) -> bool {
        self == Self::Paid
    }

    /// Whether the invoice is still awaiting payment.
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Overdue)
    }
}

impl TemplateOrderStatus {
    /// Whether the order still needs admin attention.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_labels_match_schema() {
        assert_eq!(ProjectStatus::Pending.as_str(), "PENDING");
        assert_eq!(ProjectStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(ProjectStatus::Review.as_str(), "REVIEW");
        assert_eq!(ProjectStatus::Completed.as_str(), "COMPLETED");
        assert_eq!(ProjectStatus::Archived.as_str(), "ARCHIVED");
    }

    #[test]
    fn tier_labels_match_schema() {
        assert_eq!(TemplateTier::BusinessCard.as_str(), "business_card");
        assert_eq!(TemplateTier::Starter.as_str(), "starter");
        assert_eq!(TemplateTier::Professional.as_str(), "professional");
    }

    #[test]
    fn open_project_statuses_exclude_completed_and_archived() {
        assert!(ProjectStatus::Pending.is_open());
        assert!(ProjectStatus::InProgress.is_open());
        assert!(ProjectStatus::Review.is_open());
        assert!(!ProjectStatus::Completed.is_open());
        assert!(!ProjectStatus::Archived.is_open());
    }

    #[test]
    fn outstanding_invoice_statuses() {
        assert!(InvoiceStatus::Sent.is_outstanding());
        assert!(InvoiceStatus::Overdue.is_outstanding());
        assert!(!InvoiceStatus::Draft.is_outstanding());
        assert!(!InvoiceStatus::Paid.is_outstanding());
        assert!(!InvoiceStatus::Cancelled.is_outstanding());
    }

    #[test]
    fn serde_uses_database_labels() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let tier: TemplateTier = serde_json::from_str("\"business_card\"").unwrap();
        assert_eq!(tier, TemplateTier::BusinessCard);
    }
}
