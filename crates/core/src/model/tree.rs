//! Regression trees of the boosted ensemble.
//!
//! Node 0 is the root. A split node sends a row to `left` when the feature is
//! strictly below the threshold and to `right` otherwise.

use serde::{Deserialize, Serialize};

/// A tree node: either a split on one feature or a leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        /// Index into the model's feature names
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: f64,
    },
}

/// A single regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Check the tree can be walked for rows of `num_features` values.
    ///
    /// Children must point forward in the node list, which also guarantees that
    /// every walk terminates.
    pub fn validate(&self, num_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= num_features {
                        return Err(format!(
                            "node {} splits on feature {} but the model declares {}",
                            idx, feature, num_features
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", idx));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!(
                                "node {} has invalid child index {}",
                                idx, child
                            ));
                        }
                    }
                }
                Node::Leaf { leaf } => {
                    if !leaf.is_finite() {
                        return Err(format!("node {} has a non-finite leaf value", idx));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk the tree for `row` and return the reached leaf value.
    ///
    /// Returns `None` if the walk leaves the node list or indexes past the row,
    /// which cannot happen for a validated tree and a row of the declared width.
    pub fn evaluate(&self, row: &[f64]) -> Option<f64> {
        let mut idx = 0usize;

        loop {
            match self.nodes.get(idx)? {
                Node::Leaf { leaf } => return Some(*leaf),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = *row.get(*feature)?;
                    idx = if value < *threshold { *left } else { *right };
                }
            }
        }
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> Tree {
        Tree::new(vec![
            Node::Split {
                feature: 0,
                threshold: 65.0,
                left: 1,
                right: 2,
            },
            Node::Leaf { leaf: -1.0 },
            Node::Leaf { leaf: 1.0 },
        ])
    }

    #[test]
    fn test_split_goes_left_only_when_strictly_below() {
        let tree = stump();
        assert_eq!(tree.evaluate(&[64.9]), Some(-1.0));
        assert_eq!(tree.evaluate(&[65.0]), Some(1.0));
        assert_eq!(tree.evaluate(&[80.0]), Some(1.0));
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = Tree::new(vec![Node::Leaf { leaf: 0.25 }]);
        assert!(tree.validate(0).is_ok());
        assert_eq!(tree.evaluate(&[]), Some(0.25));
    }

    #[test]
    fn test_evaluate_short_row_returns_none() {
        assert_eq!(stump().evaluate(&[]), None);
    }

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        assert!(stump().validate(1).is_ok());
        assert_eq!(stump().num_leaves(), 2);
    }

    #[test]
    fn test_validate_rejects_empty_tree() {
        let err = Tree::new(vec![]).validate(1).expect_err("should reject empty");
        assert!(err.contains("no nodes"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_feature() {
        let err = stump().validate(0).expect_err("should reject feature index");
        assert!(err.contains("splits on feature 0"));
    }

    #[test]
    fn test_validate_rejects_backward_child() {
        let tree = Tree::new(vec![
            Node::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 1,
            },
            Node::Leaf { leaf: 0.0 },
        ]);
        let err = tree.validate(1).expect_err("should reject cycle");
        assert!(err.contains("invalid child index 0"));
    }

    #[test]
    fn test_validate_rejects_dangling_child() {
        let tree = Tree::new(vec![
            Node::Split {
                feature: 0,
                threshold: 1.0,
                left: 1,
                right: 7,
            },
            Node::Leaf { leaf: 0.0 },
        ]);
        let err = tree.validate(1).expect_err("should reject dangling child");
        assert!(err.contains("invalid child index 7"));
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        let tree = Tree::new(vec![Node::Leaf { leaf: f64::NAN }]);
        assert!(tree.validate(0).is_err());

        let tree = Tree::new(vec![
            Node::Split {
                feature: 0,
                threshold: f64::INFINITY,
                left: 1,
                right: 2,
            },
            Node::Leaf { leaf: 0.0 },
            Node::Leaf { leaf: 0.0 },
        ]);
        assert!(tree.validate(1).is_err());
    }

    #[test]
    fn test_nodes_deserialize_from_json() {
        let tree: Tree = serde_json::from_str(
            r#"{"nodes": [
                {"feature": 0, "threshold": 65.0, "left": 1, "right": 2},
                {"leaf": -1.0},
                {"leaf": 1.0}
            ]}"#,
        )
        .expect("tree should parse");
        assert_eq!(tree, stump());
    }
}
