//! Route modules and the `/api/v1` route tree.

pub mod admin;
pub mod campaigns;
pub mod catalog;
pub mod clients;
pub mod contacts;
pub mod health;
pub mod invoices;
pub mod messages;
pub mod orders;
pub mod packages;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/categories                  active categories (GET)
/// /catalog/templates                   active templates (?category=&q=)
/// /catalog/templates/{slug}            template detail
///
/// /clients                             list, create
/// /clients/{id}                        get, update
/// /clients/{id}/dashboard              client dashboard aggregation
///
/// /projects                            list, create
/// /projects/{id}                       get, update, delete (hard)
/// /projects/{id}/status                set status (PUT)
///
/// /invoices                            list (+revenue totals), create
/// /invoices/{id}/status                set status (PUT, PAID stamps paid_date once)
///
/// /contacts                            list (+status counts), create (public form)
/// /contacts/{id}/status                set status (PUT)
/// /contacts/{id}/notes                 set notes (PUT)
///
/// /messages/threads                    per-user threads, last activity desc
/// /messages/threads/{user_id}/read     mark inbound unread as read (POST)
/// /messages/threads/{user_id}/reply    append admin reply (POST)
///
/// /campaigns                           list
/// /campaigns/{id}                      get, save draft (PUT)
/// /campaigns/{id}/active               toggle active (PUT)
///
/// /orders                              list (?status=), place order
/// /orders/{id}                         get
/// /orders/{id}/status                  set status (PUT)
/// /orders/{id}/notes                   set admin notes (PUT)
/// /orders/{id}/delivered-url           set delivered URL (PUT)
///
/// /packages                            list (?include_inactive), create
/// /packages/{id}                       update (PUT)
/// /packages/{id}/active                toggle active (PUT)
///
/// /settings/payments                   merged payment settings (GET)
/// /settings/payments/{key}             replace one key (PUT)
///
/// /admin/overview                      admin headline counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/clients", clients::router())
        .nest("/projects", projects::router())
        .nest("/invoices", invoices::router())
        .nest("/contacts", contacts::router())
        .nest("/messages", messages::router())
        .nest("/campaigns", campaigns::router())
        .nest("/orders", orders::router())
        .nest("/packages", packages::router())
        .nest("/settings", settings::router())
        .nest("/admin", admin::router())
}
