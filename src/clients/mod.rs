pub mod metabase;
pub mod wms;

pub use metabase::MetabaseClient;
pub use wms::WmsClient;

/// Join a base URL and an endpoint path without doubling slashes
pub(crate) fn join_endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
