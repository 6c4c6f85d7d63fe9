// handlers/mod.rs - one module per dashboard resource
//
// alerts:  threshold rules, readable by any authenticated user,
//          mutable by admins and analysts
// users:   account administration, admin only
// reports: read-only proxies to the warehouse API and Metabase

pub mod alerts;
pub mod reports;
pub mod users;
