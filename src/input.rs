//! Parsers for graph descriptions given on the command line.

use std::str::FromStr;

use crate::error::SearchError;
use crate::graph::NodeId;

/// An undirected edge written as `SRC-DEST` or `SRC-DEST:WEIGHT`.
///
/// ```
/// use graph_search::input::EdgeSpec;
///
/// let e: EdgeSpec = "3-7:12".parse().unwrap();
/// assert_eq!((e.src, e.dest, e.weight()), (3, 7, 12));
/// assert_eq!("0-1".parse::<EdgeSpec>().unwrap().weight(), 1);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    pub src: NodeId,
    pub dest: NodeId,
    pub weight: Option<u32>,
}

impl EdgeSpec {
    /// The given weight, unit when omitted.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight.unwrap_or(1)
    }
}

impl FromStr for EdgeSpec {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SearchError::InvalidEdgeSpec(s.to_string());

        let (nodes, weight) = match s.trim().split_once(':') {
            Some((nodes, w)) => (nodes, Some(w.trim().parse().map_err(|_| invalid())?)),
            None => (s.trim(), None),
        };
        let (src, dest) = nodes.split_once('-').ok_or_else(invalid)?;
        let src = src.trim().parse().map_err(|_| invalid())?;
        let dest = dest.trim().parse().map_err(|_| invalid())?;
        if weight == Some(0) {
            return Err(SearchError::NonPositiveWeight { src, dest });
        }

        Ok(Self { src, dest, weight })
    }
}

/// A heuristic estimate written as `NODE=VALUE`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeuristicSpec {
    pub node: NodeId,
    pub value: u32,
}

impl FromStr for HeuristicSpec {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SearchError::InvalidHeuristicSpec(s.to_string());

        let (node, value) = s.trim().split_once('=').ok_or_else(invalid)?;
        Ok(Self {
            node: node.trim().parse().map_err(|_| invalid())?,
            value: value.trim().parse().map_err(|_| invalid())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        assert_eq!(
            "0-1".parse(),
            Ok(EdgeSpec {
                src: 0,
                dest: 1,
                weight: None
            })
        );
        assert_eq!(
            " 4 - 2 : 9 ".parse(),
            Ok(EdgeSpec {
                src: 4,
                dest: 2,
                weight: Some(9)
            })
        );
    }

    #[test]
    fn malformed_edges() {
        for s in ["", "0", "0-", "-1", "a-b", "0-1:", "0-1:x", "0-1-2", "0:1"] {
            assert_eq!(
                s.parse::<EdgeSpec>(),
                Err(SearchError::InvalidEdgeSpec(s.to_string())),
                "{s:?}"
            );
        }
        assert_eq!(
            "0-1:0".parse::<EdgeSpec>(),
            Err(SearchError::NonPositiveWeight { src: 0, dest: 1 })
        );
    }

    #[test]
    fn heuristics() {
        assert_eq!("5=3".parse(), Ok(HeuristicSpec { node: 5, value: 3 }));
        assert_eq!("0 = 0".parse(), Ok(HeuristicSpec { node: 0, value: 0 }));
        for s in ["5", "=3", "5=", "5=-1", "x=1"] {
            assert_eq!(
                s.parse::<HeuristicSpec>(),
                Err(SearchError::InvalidHeuristicSpec(s.to_string())),
                "{s:?}"
            );
        }
    }
}
