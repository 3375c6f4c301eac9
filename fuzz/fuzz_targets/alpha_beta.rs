#![no_main]

use libfuzzer_sys::fuzz_target;

use graph_search::adversarial::GameTree;

fuzz_target!(|leaves: Vec<i16>| {
    if let Ok(tree) = GameTree::new(leaves) {
        let evaluation = tree.alpha_beta();
        assert_eq!(evaluation.value, tree.minimax());
        assert!(evaluation.leaves_evaluated <= tree.leaves().len());
    }
});
