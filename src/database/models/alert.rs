use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A per-product threshold rule. `product_name` is derived by joining
/// against products; the alerts table itself only stores the product id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub threshold: f64,
    pub is_active: bool,
    pub created_by: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let alert = Alert {
            id: Uuid::nil(),
            product_id: Uuid::nil(),
            product_name: "Pallet wrap".into(),
            threshold: 12.5,
            is_active: true,
            created_by: Uuid::nil(),
        };
        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["productName"], "Pallet wrap");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["createdBy"], Uuid::nil().to_string());
        assert!(value.get("product_name").is_none());
    }
}
