#![no_main]

use libfuzzer_sys::fuzz_target;

use graph_search::input::EdgeSpec;
use graph_search::input::HeuristicSpec;

fuzz_target!(|s: &str| {
    if let Ok(e) = s.parse::<EdgeSpec>() {
        assert!(e.weight() > 0);
    }
    let _ = s.parse::<HeuristicSpec>();
});
