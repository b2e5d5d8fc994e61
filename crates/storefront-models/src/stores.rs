//! Store locations.

use serde::{Deserialize, Serialize};

use crate::ids::StoreId;
use crate::table::{FieldValue, TableRow, TableSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: StoreId,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Five-digit US zip code, kept as text to preserve its formatting.
    pub zip: String,
    /// Formatted `AAA-PPP-LLLL`.
    pub phone: String,
}

impl TableRow for Store {
    const TABLE: TableSpec = TableSpec {
        name: "stores",
        fields: &["store_id", "address", "city", "state", "zip", "phone"],
        primary_key: Some("store_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.store_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.store_id.get().into(),
            self.address.clone().into(),
            self.city.clone().into(),
            self.state.clone().into(),
            self.zip.clone().into(),
            self.phone.clone().into(),
        ]
    }
}
