use shadow_rs::shadow;

shadow!(build);

// Internals
// ---------
pub mod cost;
pub mod error;
pub mod frontier;
pub mod search;

// Graphs
// ------
pub mod graph;
pub mod input;
pub mod path;
pub mod weights;

// Algorithms
// ----------
pub mod adversarial;
pub mod algorithms;

// Test and benchmark inputs
// -------------------------
pub mod generators;

pub use algorithms::Algorithm;
pub use algorithms::Outcome;
pub use algorithms::SearchInputs;
pub use algorithms::run;
pub use cost::Cost;
pub use error::Result;
pub use error::SearchError;
pub use graph::Graph;
pub use graph::NodeId;
pub use path::Path;
pub use weights::EdgeWeights;
pub use weights::Heuristics;
