//! Inventory derivation tests
//!
//! Covers effective stock arithmetic, low-stock flagging and the
//! wholesale/retail valuation sums.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::models::{Product, Sale, SaleItem, SaleStatus, WholesalePurchase};
use shared::stock::{
    last_purchase_by_product, low_stock, potential_revenue, sold_units_by_product, stock_levels,
    total_stock_value,
};
use shared::types::RecordRef;

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn product(id: i64, stock: i64, wholesale: &str, retail: &str) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: None,
        retail_price: dec(retail),
        wholesale_cost: dec(wholesale),
        stock_quantity: stock,
        min_stock: None,
        max_stock: None,
        vendor: None,
    }
}

fn sale_of(id: i64, items: Vec<(i64, i64)>) -> Sale {
    Sale {
        id,
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
        quantity: 10,
        cost_per_unit: Decimal::ZERO,
        purchase_date: Some(day.parse().unwrap()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_effective_stock_subtracts_all_sales() {
        let products = vec![product(1, 100, "5", "8")];
        let sales = vec![sale_of(1, vec![(1, 30)]), sale_of(2, vec![(1, 25)])];

        let levels = stock_levels(&products, &sales, &[], 20);
        assert_eq!(levels[0].initial_stock, 100);
        assert_eq!(levels[0].units_sold, 55);
        assert_eq!(levels[0].effective_stock, 45);
        assert!(!levels[0].low_stock);
    }

    #[test]
    fn test_no_sales_leaves_stock_untouched() {
        let products = vec![product(1, 40, "5", "8")];
        let levels = stock_levels(&products, &[], &[], 20);
        assert_eq!(levels[0].effective_stock, 40);
        assert_eq!(levels[0].units_sold, 0);
    }

    #[test]
    fn test_low_stock_threshold_inclusive() {
        let products = vec![
            product(1, 20, "1", "2"),
            product(2, 21, "1", "2"),
            product(3, 0, "1", "2"),
        ];
        let low = low_stock(&products, &[], &[], 20);
        let ids: Vec<i64> = low.iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_configurable_threshold() {
        let products = vec![product(1, 21, "1", "2")];
        assert!(low_stock(&products, &[], &[], 20).is_empty());
        assert_eq!(low_stock(&products, &[], &[], 25).len(), 1);
    }

    #[test]
    fn test_oversold_product_reports_negative_stock() {
        let products = vec![product(1, 5, "1", "2")];
        let sales = vec![sale_of(1, vec![(1, 9)])];
        let levels = stock_levels(&products, &sales, &[], 20);
        assert_eq!(levels[0].effective_stock, -4);
        assert!(levels[0].low_stock);
    }

    #[test]
    fn test_sales_of_unknown_products_ignored() {
        let products = vec![product(1, 50, "1", "2")];
        let sales = vec![sale_of(1, vec![(99, 10)])];
        let levels = stock_levels(&products, &sales, &[], 20);
        assert_eq!(levels[0].effective_stock, 50);
    }

    #[test]
    fn test_valuation_sums() {
        let products = vec![product(1, 10, "5.50", "9.00"), product(2, 4, "2.00", "3.25")];
        assert_eq!(total_stock_value(&products), dec("63.00"));
        assert_eq!(potential_revenue(&products), dec("103.00"));
    }

    #[test]
    fn test_stock_levels_carry_last_purchase_date() {
        let products = vec![product(1, 50, "1", "2"), product(2, 50, "1", "2")];
        let purchases = vec![
            purchase_of(1, 1, "2026-02-01"),
            purchase_of(2, 1, "2026-06-01"),
            purchase_of(3, 1, "2026-04-01"),
        ];

        let levels = stock_levels(&products, &[], &purchases, 20);
        assert_eq!(levels[0].last_purchase, Some("2026-06-01".parse().unwrap()));
        assert_eq!(levels[1].last_purchase, None);
    }

    #[test]
    fn test_valuation_of_empty_catalog() {
        assert_eq!(total_stock_value(&[]), Decimal::ZERO);
        assert_eq!(potential_revenue(&[]), Decimal::ZERO);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec((1i64..20, 0i64..500, 0u32..100), 1..10).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (_, stock, cost))| {
                    product(
                        i as i64 + 1,
                        stock,
                        &cost.to_string(),
                        &(cost * 2).to_string(),
                    )
                })
                .collect()
        })
    }

    fn arb_sales() -> impl Strategy<Value = Vec<Sale>> {
        prop::collection::vec(
            prop::collection::vec((1i64..20, 1i64..30), 0..5),
            0..10,
        )
        .prop_map(|sales| {
            sales
                .into_iter()
                .enumerate()
                .map(|(i, items)| sale_of(i as i64 + 1, items))
                .collect()
        })
    }

    proptest! {
        /// Effective stock always equals registered stock minus units sold
        #[test]
        fn prop_effective_stock_identity(
            products in arb_products(),
            sales in arb_sales(),
        ) {
            let sold = sold_units_by_product(&sales);
            for level in stock_levels(&products, &sales, &[], 20) {
                let expected_sold = sold.get(&level.product_id).copied().unwrap_or(0);
                prop_assert_eq!(level.units_sold, expected_sold);
                prop_assert_eq!(level.effective_stock, level.initial_stock - expected_sold);
            }
        }

        /// Low-stock results are exactly the levels at or below the threshold
        #[test]
        fn prop_low_stock_matches_threshold(
            products in arb_products(),
            sales in arb_sales(),
            threshold in 0i64..100,
        ) {
            let all = stock_levels(&products, &sales, &[], threshold);
            let low = low_stock(&products, &sales, &[], threshold);

            let expected: Vec<i64> = all
                .iter()
                .filter(|l| l.effective_stock <= threshold)
                .map(|l| l.product_id)
                .collect();
            let actual: Vec<i64> = low.iter().map(|l| l.product_id).collect();
            prop_assert_eq!(actual, expected);
            for level in &low {
                prop_assert!(level.low_stock);
            }
        }

        /// The reported last-purchase date is the maximum over the history
        #[test]
        fn prop_last_purchase_is_max_date(
            days in prop::collection::vec((1i64..5, 1u32..=12, 1u32..=28), 0..20),
        ) {
            let purchases: Vec<WholesalePurchase> = days
                .iter()
                .enumerate()
                .map(|(i, (product, month, day))| {
                    purchase_of(i as i64 + 1, *product, &format!("2026-{month:02}-{day:02}"))
                })
                .collect();

            let latest = last_purchase_by_product(&purchases);
            for (product_id, date) in &latest {
                let max = purchases
                    .iter()
                    .filter(|p| p.product.id() == *product_id)
                    .filter_map(|p| p.purchase_date)
                    .max();
                prop_assert_eq!(Some(*date), max);
            }
        }

        /// Valuations scale linearly with stock quantity
        #[test]
        fn prop_valuation_matches_manual_sum(products in arb_products()) {
            let expected_value: Decimal = products
                .iter()
                .map(|p| p.wholesale_cost * Decimal::from(p.stock_quantity))
                .sum();
            let expected_revenue: Decimal = products
                .iter()
                .map(|p| p.retail_price * Decimal::from(p.stock_quantity))
                .sum();
            prop_assert_eq!(total_stock_value(&products), expected_value);
            prop_assert_eq!(potential_revenue(&products), expected_revenue);
        }
    }
}
