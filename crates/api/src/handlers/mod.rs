//! HTTP handler modules, one per resource.

pub mod campaigns;
pub mod catalog;
pub mod clients;
pub mod contacts;
pub mod dashboard;
pub mod invoices;
pub mod messages;
pub mod orders;
pub mod packages;
pub mod projects;
pub mod settings;
