mod create;
mod delete;
mod list;
mod update;

pub use create::alert_create;
pub use delete::alert_delete;
pub use list::alert_list;
pub use update::alert_update;

/// Columns selected for every alert response; product_name comes from the
/// products join
pub(crate) const ALERT_COLUMNS: &str =
    "a.id, a.product_id, p.name AS product_name, a.threshold, a.is_active, a.created_by";
