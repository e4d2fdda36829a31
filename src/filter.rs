//! Search filtering for the transactions table.
//!
//! A transaction matches a search query when the query appears in its title,
//! description or price. Text fields are compared case-insensitively and the
//! price is compared against its plain decimal digits.

use crate::transaction::Transaction;

/// Whether `query` should be treated as "no filter".
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Returns `true` if `transaction` matches the non-blank search `query`.
///
/// The query is used as given (not trimmed), so surrounding spaces are part
/// of the text being searched for.
pub fn matches_search(transaction: &Transaction, query: &str) -> bool {
    let query = query.to_lowercase();

    transaction.title.to_lowercase().contains(&query)
        || transaction.description.to_lowercase().contains(&query)
        || transaction.price.to_string().contains(&query)
}

/// Get the transactions in `transactions` that match `query`, keeping their order.
///
/// A blank query (empty or whitespace only) returns every transaction.
pub fn filter_transactions(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    if is_blank(query) {
        return transactions.to_vec();
    }

    transactions
        .iter()
        .filter(|transaction| matches_search(transaction, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::{mock_data::generate_transactions, transaction::Transaction};

    use super::{filter_transactions, matches_search};

    fn get_test_transactions() -> Vec<Transaction> {
        vec![
            Transaction::mock(1, 50),
            Transaction::mock(2, 120),
            Transaction::mock(3, 275),
            Transaction::mock(4, 549),
        ]
    }

    const QUERIES: [&str; 10] = [
        "transaction",
        "TRANSACTION 3",
        "description",
        "27",
        "5",
        "1",
        " 1",
        "zzz-no-match",
        "Description for transaction 4",
        "$",
    ];

    #[test]
    fn blank_query_returns_all_in_order() {
        let transactions = get_test_transactions();

        for query in ["", " ", "\t", "  \n "] {
            let got = filter_transactions(&transactions, query);

            assert_eq!(got, transactions, "query {query:?} should not filter");
        }
    }

    #[test]
    fn matches_price_digits() {
        let transactions = get_test_transactions();

        let got = filter_transactions(&transactions, "275");

        assert_eq!(got, vec![Transaction::mock(3, 275)]);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let transactions = get_test_transactions();

        let got = filter_transactions(&transactions, "tRaNsAcTiOn 2");

        assert_eq!(got, vec![Transaction::mock(2, 120)]);
    }

    #[test]
    fn matches_description_only_text() {
        let transactions = get_test_transactions();

        let got = filter_transactions(&transactions, "description for");

        assert_eq!(got, transactions);
    }

    #[test]
    fn no_match_returns_empty() {
        let transactions = get_test_transactions();

        let got = filter_transactions(&transactions, "zzz-no-match");

        assert!(got.is_empty(), "want no transactions, got {got:?}");
    }

    #[test]
    fn currency_sign_does_not_match_price() {
        let transaction = Transaction::mock(1, 100);

        assert!(!matches_search(&transaction, "$100"));
    }

    #[test]
    fn query_is_not_trimmed() {
        // " 27" is not a substring of "Transaction 9", its description or "275".
        let transaction = Transaction::mock(9, 275);

        assert!(!matches_search(&transaction, " 27"));
        assert!(matches_search(&transaction, " 9"));
    }

    #[test]
    fn preserves_original_order() {
        let transactions = get_test_transactions();

        let got = filter_transactions(&transactions, "5");
        let ids: Vec<_> = got.iter().map(|transaction| transaction.id).collect();

        // "5" appears in the prices 50, 275 and 549.
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn filtering_is_idempotent() {
        for seed in 0..50 {
            let transactions = generate_transactions(&mut StdRng::seed_from_u64(seed));

            for query in QUERIES {
                let once = filter_transactions(&transactions, query);
                let twice = filter_transactions(&once, query);

                assert_eq!(once, twice, "seed {seed}, query {query:?}");
            }
        }
    }

    #[test]
    fn result_partitions_by_predicate() {
        for seed in 0..50 {
            let transactions = generate_transactions(&mut StdRng::seed_from_u64(seed));

            for query in QUERIES {
                let got = filter_transactions(&transactions, query);

                for transaction in &transactions {
                    let included = got.contains(transaction);
                    assert_eq!(
                        included,
                        matches_search(transaction, query),
                        "seed {seed}, query {query:?}, transaction {transaction:?}"
                    );
                }
            }
        }
    }
}
