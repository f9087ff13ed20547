//! A small term rewriter built on patterns, as a downstream user would.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use symtree::{read_sexpr, to_sexpr, Pattern, Tree};

struct Rule {
    lhs: Pattern,
    rhs: Pattern,
}

impl Rule {
    fn new(holes: &[&str], lhs: &str, rhs: &str) -> Self {
        Rule {
            lhs: Pattern::from_example(holes, &read_sexpr(lhs).unwrap()),
            rhs: Pattern::from_example(holes, &read_sexpr(rhs).unwrap()),
        }
    }

    fn apply(&self, tree: &Tree) -> Option<Tree> {
        let bindings = self.lhs.match_fresh(tree).ok()?;
        self.rhs.substitute(&bindings).ok()
    }
}

/// Rewrite bottom-up until no rule applies anywhere.
fn normalize(rules: &[Rule], tree: &Tree) -> Tree {
    let tree = match tree {
        Tree::List(list) => Tree::list(list.iter().map(|child| normalize(rules, child))),
        other => other.clone(),
    };
    match rules.iter().find_map(|rule| rule.apply(&tree)) {
        Some(rewritten) => normalize(rules, &rewritten),
        None => tree,
    }
}

fn algebra_rules() -> Vec<Rule> {
    vec![
        Rule::new(&["x"], "(+ x 0)", "x"),
        Rule::new(&["x"], "(* x 1)", "x"),
        Rule::new(&["x"], "(* x 0)", "0"),
        Rule::new(&["x"], "(+ x x)", "(* 2 x)"),
    ]
}

#[test]
fn simplifies_nested_identities() {
    let rules = algebra_rules();
    let input = read_sexpr("(+ (* y 1) (+ (* y 1) 0))").unwrap();
    assert_eq!(to_sexpr(&normalize(&rules, &input)), "(* 2 y)");
}

#[test]
fn leaves_unmatched_terms_alone() {
    let rules = algebra_rules();
    let input = read_sexpr("(+ x y)").unwrap();
    assert_eq!(normalize(&rules, &input), input);
}

#[test]
fn absorbing_zero_discards_subterm() {
    let rules = algebra_rules();
    let input = read_sexpr("(sin (* (+ a b) 0))").unwrap();
    assert_eq!(to_sexpr(&normalize(&rules, &input)), "(sin 0)");
}
