//! Products and the tables that reference them: per-store inventory, sales
//! transactions, suppliers and supplier orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{OrderId, ProductId, StoreId, SupplierId, TransactionId};
use crate::table::{FieldValue, TableRow, TableSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    pub color: String,
}

impl TableRow for Product {
    const TABLE: TableSpec = TableSpec {
        name: "products",
        fields: &["product_id", "name", "color"],
        primary_key: Some("product_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.product_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.product_id.get().into(),
            self.name.clone().into(),
            self.color.clone().into(),
        ]
    }
}

/// A stocking record for one product at one store.
///
/// The same (store, product) pair may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub price: Decimal,
    pub stock_qty: i64,
    pub on_special: bool,
}

impl TableRow for Inventory {
    const TABLE: TableSpec = TableSpec {
        name: "inventory",
        fields: &["store_id", "product_id", "price", "stock_qty", "on_special"],
        primary_key: None,
    };

    fn key(&self) -> Option<i64> {
        None
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.store_id.get().into(),
            self.product_id.get().into(),
            self.price.into(),
            self.stock_qty.into(),
            self.on_special.into(),
        ]
    }
}

/// A sale of `amount` units of a product at a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub price: Decimal,
    pub amount: i64,
}

impl TableRow for Transaction {
    const TABLE: TableSpec = TableSpec {
        name: "transactions",
        fields: &["transaction_id", "store_id", "product_id", "price", "amount"],
        primary_key: Some("transaction_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.transaction_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.transaction_id.get().into(),
            self.store_id.get().into(),
            self.product_id.get().into(),
            self.price.into(),
            self.amount.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub name: String,
}

impl TableRow for Supplier {
    const TABLE: TableSpec = TableSpec {
        name: "suppliers",
        fields: &["supplier_id", "name"],
        primary_key: Some("supplier_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.supplier_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![self.supplier_id.get().into(), self.name.clone().into()]
    }
}

/// A restocking order placed by a store with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity: i64,
    pub cost: Decimal,
}

impl TableRow for Order {
    const TABLE: TableSpec = TableSpec {
        name: "orders",
        fields: &[
            "order_id",
            "store_id",
            "product_id",
            "supplier_id",
            "quantity",
            "cost",
        ],
        primary_key: Some("order_id"),
    };

    fn key(&self) -> Option<i64> {
        Some(self.order_id.get())
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.order_id.get().into(),
            self.store_id.get().into(),
            self.product_id.get().into(),
            self.supplier_id.get().into(),
            self.quantity.into(),
            self.cost.into(),
        ]
    }
}
