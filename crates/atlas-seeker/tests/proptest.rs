//! Property-based tests for seeker using proptest.

use atlas_seeker::{filter, fold, Search, Searchable, Value};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: usize,
    name: String,
    code: String,
    currency: Option<String>,
}

impl Searchable for Record {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "code", "currency"];

    fn search_field(&self, field: &str) -> Value<'_> {
        match field {
            "name" => Value::from(&self.name),
            "code" => Value::from(&self.code),
            "currency" => Value::from(self.currency.as_deref()),
            _ => Value::None,
        }
    }
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,12}",
            "[A-Z]{2}",
            prop::option::of("[A-Z]{3}"),
        ),
        0..60,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, code, currency))| Record {
                id,
                name,
                code,
                currency,
            })
            .collect()
    })
}

proptest! {
    /// The result is always an order-preserving subsequence of the input.
    #[test]
    fn filter_is_ordered_subsequence(
        records in records_strategy(),
        term in "[a-zA-Z]{0,3}",
    ) {
        let results = filter(&records, &term);
        prop_assert!(results.len() <= records.len());

        let ids: Vec<usize> = results.iter().map(|r| r.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// A blank term is the identity.
    #[test]
    fn blank_term_is_identity(
        records in records_strategy(),
        blank in "[ \t]{0,4}",
    ) {
        let results: Vec<Record> = filter(&records, &blank).into_iter().cloned().collect();
        prop_assert_eq!(results, records);
    }

    /// Every kept record really contains the term in some field, and every
    /// dropped record contains it in none.
    #[test]
    fn kept_iff_some_field_contains_term(
        records in records_strategy(),
        term in "[a-zA-Z]{1,3}",
    ) {
        let needle = fold(&term);
        let search = Search::new(&term);
        for record in &records {
            let expected = fold(&record.name).contains(&needle)
                || fold(&record.code).contains(&needle)
                || record
                    .currency
                    .as_deref()
                    .is_some_and(|c| fold(c).contains(&needle));
            prop_assert_eq!(search.matches(record), expected);
        }
    }

    /// Case of the term never changes the result.
    #[test]
    fn term_case_is_irrelevant(
        records in records_strategy(),
        term in "[a-zA-Z]{1,3}",
    ) {
        let upper = filter(&records, &term.to_uppercase()).len();
        let lower = filter(&records, &term.to_lowercase()).len();
        prop_assert_eq!(upper, lower);
    }
}
