use huffman_tree_builder::analyze;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_codes_are_prefix_free(input in prop::collection::vec(any::<u8>(), 1..2000)) {
        let analysis = analyze(input.as_slice()).unwrap();
        let code_book = analysis.code_book();
        for entry in code_book.iter() {
            for other in code_book.iter().filter(|o| o.symbol() != entry.symbol()) {
                prop_assert!(
                    !entry.code().is_prefix_of(other.code()),
                    "code {} of {} is a prefix of code {} of {}",
                    entry.code(),
                    entry.symbol(),
                    other.code(),
                    other.symbol()
                );
            }
        }
    }

    #[test]
    fn test_encoding_never_exceeds_fixed_width(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let analysis = analyze(input.as_slice()).unwrap();
        let code_book = analysis.code_book();
        prop_assert_eq!(code_book.fixed_width_bit_count(), input.len() * 8);
        prop_assert!(code_book.encoded_bit_count() <= code_book.fixed_width_bit_count());
    }

    #[test]
    fn test_more_frequent_symbols_have_shorter_or_equal_codes(
        input in prop::collection::vec(0..16u8, 1..500),
    ) {
        let analysis = analyze(input.as_slice()).unwrap();
        let code_book = analysis.code_book();
        for entry in code_book.iter() {
            for other in code_book.iter().filter(|o| o.frequency() < entry.frequency()) {
                prop_assert!(entry.code().len() <= other.code().len());
            }
        }
    }

    #[test]
    fn test_single_symbol_has_one_bit_code(symbol in any::<u8>(), count in 1..1000usize) {
        let input = vec![symbol; count];
        let analysis = analyze(input.as_slice()).unwrap();
        let code_book = analysis.code_book();
        prop_assert_eq!(code_book.len(), 1);
        let entry = code_book.get(symbol).unwrap();
        prop_assert_eq!(entry.code().to_string(), "0");
        prop_assert_eq!(entry.frequency(), count);
    }

    #[test]
    fn test_repeated_runs_give_identical_output(input in prop::collection::vec(any::<u8>(), 0..1000)) {
        let first = analyze(input.as_slice()).unwrap();
        let second = analyze(input.as_slice()).unwrap();
        prop_assert_eq!(first.code_book(), second.code_book());
        prop_assert_eq!(
            first.tree().map(|t| t.preorder_symbols()),
            second.tree().map(|t| t.preorder_symbols())
        );
    }

    #[test]
    fn test_tree_covers_every_distinct_symbol(input in prop::collection::vec(any::<u8>(), 1..1000)) {
        let analysis = analyze(input.as_slice()).unwrap();
        let tree = analysis.tree().unwrap();
        let distinct = analysis.frequencies().distinct_symbol_count();
        prop_assert_eq!(tree.leaf_count(), distinct);
        prop_assert_eq!(tree.node_count(), 2 * distinct - 1);
        prop_assert_eq!(tree.frequency(), input.len());
        if distinct > 1 {
            prop_assert_eq!(analysis.code_book().max_code_length(), tree.height());
        }
    }
}
