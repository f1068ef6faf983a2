use ordered_tree::{Node, Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

const ORDERS: [Order; 4] = [
    Order::PreOrder,
    Order::InOrder,
    Order::PostOrder,
    Order::BreadthFirst,
];

fn tree_of(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

/// Height-balance computed straight from the definition, one subtree at a time.
fn naive_balanced(node: Option<&Node<i8>>) -> bool {
    fn height(node: Option<&Node<i8>>) -> usize {
        node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
    }

    match node {
        None => true,
        Some(n) => {
            height(n.left()).abs_diff(height(n.right())) <= 1
                && naive_balanced(n.left())
                && naive_balanced(n.right())
        }
    }
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.dfs_in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter()
        .all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = tree_of(&xs);
    tree.insert(x);
    let once = tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>();
    let len = tree.len();
    tree.insert(x);

    tree.dfs_in_order().into_iter().copied().eq(once) && tree.len() == len
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let expected: Vec<_> = xs.iter().collect::<BTreeSet<_>>().into_iter().collect();

    ORDERS.iter().all(|&order| {
        let mut visited = tree.traverse(order);
        visited.sort();
        visited.len() == tree.len() && visited == expected
    })
}

#[quickcheck]
fn pre_order_rebuilds_same_tree(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let rebuilt: Tree<_> = tree.dfs_pre_order().into_iter().copied().collect();

    ORDERS
        .iter()
        .all(|&order| rebuilt.traverse(order) == tree.traverse(order))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && tree.dfs_in_order().windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn remove_shrinks_by_one_when_present(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = tree_of(&xs);
    let len = tree.len();
    let present = tree.contains(&x);

    let removed = tree.remove(&x);
    let expected_len = if present { len - 1 } else { len };

    removed == present.then_some(x) && tree.len() == expected_len && !tree.contains(&x)
}

#[quickcheck]
fn matches_btree_set(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x);
                set.insert(x);
            }
            Op::InsertRecursive(x) => {
                tree.insert_recursive(x);
                set.insert(x);
            }
            Op::Remove(x) => {
                if tree.remove(&x) != set.take(&x) {
                    return false;
                }
            }
        }
    }

    tree.len() == set.len()
        && tree.dfs_in_order().into_iter().eq(set.iter())
        && tree.min() == set.iter().next()
        && tree.max() == set.iter().next_back()
}

#[quickcheck]
fn second_highest_is_second_largest(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let set: BTreeSet<_> = xs.iter().collect();

    tree.find_second_highest() == set.iter().rev().nth(1).copied()
}

#[quickcheck]
fn balance_matches_definition(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    tree.is_balanced() == naive_balanced(tree.root())
}
