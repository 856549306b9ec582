//! Stock level derivation and inventory valuation.
//!
//! The upstream API stores the stock a product was registered with;
//! effective stock is derived here by subtracting every unit sold across
//! the full sales history.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Product, Sale, WholesalePurchase};

/// Derived stock position for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: i64,
    pub name: String,
    pub initial_stock: i64,
    pub units_sold: i64,
    pub effective_stock: i64,
    pub low_stock: bool,
    /// Most recent restock from the purchase history, if any
    pub last_purchase: Option<NaiveDate>,
}

/// Sum units sold per product id across all sale line items
pub fn sold_units_by_product(sales: &[Sale]) -> HashMap<i64, i64> {
    let mut sold: HashMap<i64, i64> = HashMap::new();
    for sale in sales {
        for item in &sale.items {
            *sold.entry(item.product.id()).or_default() += item.quantity;
        }
    }
    sold
}

/// Units sold for a single product
pub fn units_sold(sales: &[Sale], product_id: i64) -> i64 {
    sales
        .iter()
        .flat_map(|sale| &sale.items)
        .filter(|item| item.product.id() == product_id)
        .map(|item| item.quantity)
        .sum()
}

/// Most recent purchase date per product id
pub fn last_purchase_by_product(purchases: &[WholesalePurchase]) -> HashMap<i64, NaiveDate> {
    let mut latest: HashMap<i64, NaiveDate> = HashMap::new();
    for purchase in purchases {
        let Some(date) = purchase.purchase_date else {
            continue;
        };
        latest
            .entry(purchase.product.id())
            .and_modify(|d| *d = (*d).max(date))
            .or_insert(date);
    }
    latest
}

/// Derive the stock level of every product.
///
/// Effective stock may go negative when more units were sold than
/// registered; it is reported as-is rather than clamped, since a negative
/// value signals a data problem worth surfacing.
pub fn stock_levels(
    products: &[Product],
    sales: &[Sale],
    purchases: &[WholesalePurchase],
    threshold: i64,
) -> Vec<StockLevel> {
    let sold = sold_units_by_product(sales);
    let restocked = last_purchase_by_product(purchases);

    products
        .iter()
        .map(|product| {
            let units_sold = sold.get(&product.id).copied().unwrap_or(0);
            let effective_stock = product.stock_quantity - units_sold;
            StockLevel {
                product_id: product.id,
                name: product.name.clone(),
                initial_stock: product.stock_quantity,
                units_sold,
                effective_stock,
                low_stock: effective_stock <= threshold,
                last_purchase: restocked.get(&product.id).copied(),
            }
        })
        .collect()
}

/// Products whose effective stock has reached the low-stock threshold
pub fn low_stock(
    products: &[Product],
    sales: &[Sale],
    purchases: &[WholesalePurchase],
    threshold: i64,
) -> Vec<StockLevel> {
    stock_levels(products, sales, purchases, threshold)
        .into_iter()
        .filter(|level| level.low_stock)
        .collect()
}

/// Total wholesale value of registered stock
pub fn total_stock_value(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.wholesale_cost * Decimal::from(p.stock_quantity))
        .sum()
}

/// Revenue if every registered unit sold at retail price
pub fn potential_revenue(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.retail_price * Decimal::from(p.stock_quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SaleItem, SaleStatus};
    use crate::types::RecordRef;

    fn product(id: i64, name: &str, stock: i64, wholesale: &str, retail: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            retail_price: retail.parse().unwrap(),
            wholesale_cost: wholesale.parse().unwrap(),
            stock_quantity: stock,
            min_stock: None,
            max_stock: None,
            vendor: None,
        }
    }

    fn sale_of(items: Vec<(i64, i64)>) -> Sale {
        Sale {
            id: 1,
            sale_date: None,
            created_at: None,
            due_date: None,
            customer: RecordRef::Id(1),
            status: SaleStatus::Completed,
            total_amount: Decimal::ZERO,
            items: items
                .into_iter()
                .map(|(product, quantity)| SaleItem {
                    product: RecordRef::Id(product),
                    quantity,
                    unit_price: Decimal::ZERO,
                    line_total: Decimal::ZERO,
                })
                .collect(),
        }
    }

    fn purchase_of(id: i64, product: i64, day: &str) -> WholesalePurchase {
        WholesalePurchase {
            id,
            product: RecordRef::Id(product),
            vendor: RecordRef::Id(1),
            quantity: 5,
            cost_per_unit: Decimal::ZERO,
            purchase_date: Some(day.parse().unwrap()),
        }
    }

    #[test]
    fn test_effective_stock_subtracts_sales() {
        // 100 registered, 30 + 25 sold => 45 left, not low at threshold 20
        let products = vec![product(1, "Green Tea", 100, "5", "8")];
        let sales = vec![sale_of(vec![(1, 30)]), sale_of(vec![(1, 25)])];

        let levels = stock_levels(&products, &sales, &[], 20);
        assert_eq!(levels[0].units_sold, 55);
        assert_eq!(levels[0].effective_stock, 45);
        assert!(!levels[0].low_stock);
    }

    #[test]
    fn test_zero_sales_keeps_registered_stock() {
        let products = vec![product(1, "Green Tea", 15, "5", "8")];
        let levels = stock_levels(&products, &[], &[], 20);
        assert_eq!(levels[0].effective_stock, 15);
        assert!(levels[0].low_stock);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let products = vec![product(1, "A", 20, "1", "2"), product(2, "B", 21, "1", "2")];
        let low = low_stock(&products, &[], &[], 20);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].product_id, 1);
    }

    #[test]
    fn test_oversold_stock_goes_negative() {
        let products = vec![product(1, "A", 10, "1", "2")];
        let sales = vec![sale_of(vec![(1, 12)])];
        let levels = stock_levels(&products, &sales, &[], 20);
        assert_eq!(levels[0].effective_stock, -2);
        assert!(levels[0].low_stock);
    }

    #[test]
    fn test_valuation_sums() {
        let products = vec![
            product(1, "A", 10, "5.50", "9.00"),
            product(2, "B", 4, "2.00", "3.25"),
        ];
        assert_eq!(total_stock_value(&products), "63.00".parse().unwrap());
        assert_eq!(potential_revenue(&products), "103.00".parse().unwrap());
    }

    #[test]
    fn test_last_purchase_takes_most_recent() {
        let products = vec![product(1, "A", 10, "1", "2"), product(2, "B", 10, "1", "2")];
        let purchases = vec![
            purchase_of(1, 1, "2026-03-01"),
            purchase_of(2, 1, "2026-05-01"),
        ];

        let levels = stock_levels(&products, &[], &purchases, 20);
        assert_eq!(levels[0].last_purchase, Some("2026-05-01".parse().unwrap()));
        assert_eq!(levels[1].last_purchase, None);
    }

    #[test]
    fn test_undated_purchases_do_not_restock() {
        let purchases = vec![WholesalePurchase {
            purchase_date: None,
            ..purchase_of(1, 1, "2026-01-01")
        }];
        assert!(last_purchase_by_product(&purchases).is_empty());
    }
}
