//! Concrete field orderings, one type per field, each in both directions.

mod date;
mod name;
mod price;
mod sales_per_view;

pub use date::DateSorter;
pub use name::NameSorter;
pub use price::PriceSorter;
pub use sales_per_view::SalesPerViewSorter;

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeMap;

    use proptest::prelude::*;
    use shelfsort_products::Product;

    use super::*;
    use crate::sorter::{SortDirection, Sorter};
    use crate::test_support::product;

    fn all_sorters() -> Vec<Box<dyn Sorter>> {
        let mut sorters: Vec<Box<dyn Sorter>> = Vec::new();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            sorters.push(Box::new(PriceSorter::new(direction)));
            sorters.push(Box::new(DateSorter::new(direction)));
            sorters.push(Box::new(NameSorter::new(direction)));
            sorters.push(Box::new(SalesPerViewSorter::new(direction)));
        }
        sorters
    }

    fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(
            (
                "[A-Za-z][A-Za-z ]{0,12}",
                0u32..100_000,
                0i64..5_000,
                0u64..10_000,
                0u64..10_000,
            ),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, cents, day, sales, views))| {
                    let created = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
                        + chrono::Duration::days(day);
                    product(i as i64, &name, cents as f64 / 100.0, &created.to_string(), sales, views)
                })
                .collect()
        })
    }

    fn id_multiset(products: &[Product]) -> BTreeMap<i64, usize> {
        let mut counts = BTreeMap::new();
        for p in products {
            *counts.entry(p.id().get()).or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: sorting leaves the input untouched and is repeatable.
        #[test]
        fn sort_is_pure(products in arb_products()) {
            for sorter in all_sorters() {
                let before = products.clone();
                let first = sorter.sort(&products);
                let second = sorter.sort(&products);
                prop_assert_eq!(&products, &before);
                prop_assert_eq!(first, second);
            }
        }

        /// Property: output is a permutation of the input.
        #[test]
        fn sort_is_a_permutation(products in arb_products()) {
            for sorter in all_sorters() {
                let sorted = sorter.sort(&products);
                prop_assert_eq!(sorted.len(), products.len());
                prop_assert_eq!(id_multiset(&sorted), id_multiset(&products));
            }
        }

        /// Property: adjacent pairs respect each strategy's key and direction.
        #[test]
        fn adjacent_pairs_are_ordered(products in arb_products()) {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let ordered = |a: std::cmp::Ordering| match direction {
                    SortDirection::Ascending => a != std::cmp::Ordering::Greater,
                    SortDirection::Descending => a != std::cmp::Ordering::Less,
                };

                for pair in PriceSorter::new(direction).sort(&products).windows(2) {
                    prop_assert!(ordered(pair[0].price().total_cmp(&pair[1].price())));
                }
                for pair in DateSorter::new(direction).sort(&products).windows(2) {
                    prop_assert!(ordered(pair[0].created().cmp(&pair[1].created())));
                }
                for pair in NameSorter::new(direction).sort(&products).windows(2) {
                    prop_assert!(ordered(
                        pair[0].name().to_lowercase().cmp(&pair[1].name().to_lowercase())
                    ));
                }
                for pair in SalesPerViewSorter::new(direction).sort(&products).windows(2) {
                    prop_assert!(ordered(
                        pair[0].sales_per_view().total_cmp(&pair[1].sales_per_view())
                    ));
                }
            }
        }
    }
}
