mod bulk_orders;
mod daily_shipping;
mod inventory;

pub use bulk_orders::b2b_bulk_orders;
pub use daily_shipping::daily_shipping;
pub use inventory::inventory;

use crate::clients::{MetabaseClient, WmsClient};
use crate::config::ReportsConfig;

/// Shared state for the report proxy routes. Clients are built once at
/// startup from the loaded configuration rather than reading the process
/// environment per request.
#[derive(Clone)]
pub struct ReportsState {
    pub wms: WmsClient,
    pub metabase: MetabaseClient,
}

impl ReportsState {
    pub fn from_config(config: &ReportsConfig) -> Self {
        Self {
            wms: WmsClient::from_config(config),
            metabase: MetabaseClient::from_config(config),
        }
    }
}
