//! Products, inventory, sales transactions, suppliers and supplier orders.

use rand::Rng;
use storefront_core::DatagenError;
use storefront_models::{
    Inventory, Order, OrderId, Product, ProductId, Store, Supplier, SupplierId, TableRow,
    Transaction, TransactionId,
};

use super::scalars::{DecimalRange, SUPPLIER_NAMES, booleans, colors, fork, pick, product_names};

pub const INVENTORY_PRICE: DecimalRange = DecimalRange::new(10, 100, 2);
pub const SALE_PRICE: DecimalRange = DecimalRange::new(10, 100, 2);
pub const ORDER_COST: DecimalRange = DecimalRange::new(1_000, 100_000, 2);

const STOCK_QTY: std::ops::RangeInclusive<i64> = 1..=1_000;
const SALE_AMOUNT: std::ops::RangeInclusive<i64> = 1..=10;
const ORDER_QUANTITY: std::ops::RangeInclusive<i64> = 100..=1_000;

/// Generates `count` products with ids 1..=count.
pub fn build_products<R: Rng>(count: usize, rng: &mut R) -> Vec<Product> {
    product_names(fork(rng))
        .zip(colors(fork(rng)))
        .take(count)
        .enumerate()
        .map(|(i, (name, color))| Product {
            product_id: ProductId::from_index(i),
            name: name.to_string(),
            color: color.to_string(),
        })
        .collect()
}

fn require_stores_and_products(
    table: &'static str,
    stores: &[Store],
    products: &[Product],
) -> Result<(), DatagenError> {
    if stores.is_empty() {
        return Err(DatagenError::precondition(table, Store::TABLE.name));
    }
    if products.is_empty() {
        return Err(DatagenError::precondition(table, Product::TABLE.name));
    }
    Ok(())
}

/// Generates `count` stocking records for random (store, product) pairs.
/// Pairs may repeat.
pub fn build_inventory<R: Rng>(
    count: usize,
    stores: &[Store],
    products: &[Product],
    rng: &mut R,
) -> Result<Vec<Inventory>, DatagenError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    require_stores_and_products(Inventory::TABLE.name, stores, products)?;

    let specials = booleans(fork(rng));

    let rows = specials
        .take(count)
        .map(|on_special| Inventory {
            store_id: pick(stores, rng).store_id,
            product_id: pick(products, rng).product_id,
            price: INVENTORY_PRICE.sample(rng),
            stock_qty: rng.gen_range(STOCK_QTY),
            on_special,
        })
        .collect();

    Ok(rows)
}

/// Generates `count` sales of random products at random stores.
pub fn build_transactions<R: Rng>(
    count: usize,
    stores: &[Store],
    products: &[Product],
    rng: &mut R,
) -> Result<Vec<Transaction>, DatagenError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    require_stores_and_products(Transaction::TABLE.name, stores, products)?;

    let rows = (0..count)
        .map(|i| Transaction {
            transaction_id: TransactionId::from_index(i),
            store_id: pick(stores, rng).store_id,
            product_id: pick(products, rng).product_id,
            price: SALE_PRICE.sample(rng),
            amount: rng.gen_range(SALE_AMOUNT),
        })
        .collect();

    Ok(rows)
}

/// Generates `count` suppliers, cycling through the supplier name list.
pub fn build_suppliers(count: usize) -> Vec<Supplier> {
    SUPPLIER_NAMES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, name)| Supplier {
            supplier_id: SupplierId::from_index(i),
            name: name.to_string(),
        })
        .collect()
}

/// Generates `count` restocking orders placed by stores with suppliers.
pub fn build_orders<R: Rng>(
    count: usize,
    stores: &[Store],
    products: &[Product],
    suppliers: &[Supplier],
    rng: &mut R,
) -> Result<Vec<Order>, DatagenError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    require_stores_and_products(Order::TABLE.name, stores, products)?;
    if suppliers.is_empty() {
        return Err(DatagenError::precondition(
            Order::TABLE.name,
            Supplier::TABLE.name,
        ));
    }

    let rows = (0..count)
        .map(|i| Order {
            order_id: OrderId::from_index(i),
            store_id: pick(stores, rng).store_id,
            product_id: pick(products, rng).product_id,
            supplier_id: pick(suppliers, rng).supplier_id,
            quantity: rng.gen_range(ORDER_QUANTITY),
            cost: ORDER_COST.sample(rng),
        })
        .collect();

    Ok(rows)
}
