//! Disjoint-set forests with path compression and union by rank.
//!
//! Each registered element owns one slot in an arena; a slot stores the arena
//! index of its parent (a root points at itself) and a rank bounding the
//! height of the subtree below it. Slots are created by [`DisjointSetForest::make_set`]
//! and never destroyed individually; only [`DisjointSetForest::clear`] discards them.

use rustc_hash::FxBuildHasher;
use selkie_graphlib::Label;

use crate::error::{Error, Result};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy)]
struct TreeSlot {
    parent: usize,
    rank: usize,
}

/// A partition of elements into disjoint sets, each represented by a rooted
/// tree in a forest.
///
/// `find_set` applies path compression and `union` merges by rank, so any
/// sequence of operations runs in amortized near-linear time. Both walks are
/// iterative; tree height never translates into call-stack depth.
#[derive(Debug, Clone)]
pub struct DisjointSetForest<E: Label> {
    items: Vec<E>,
    slots: Vec<TreeSlot>,
    index: HashMap<E, usize>,
}

impl<E: Label> DisjointSetForest<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            slots: Vec::new(),
            index: HashMap::default(),
        }
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `element` has been registered via [`Self::make_set`].
    pub fn is_present(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    /// Registers `element` as a new singleton set: its own parent, rank zero.
    ///
    /// Fails with [`Error::AlreadyPresent`] if the element is registered.
    pub fn make_set(&mut self, element: E) -> Result<()> {
        if self.index.contains_key(&element) {
            return Err(Error::AlreadyPresent {
                element: format!("{element:?}"),
            });
        }
        let slot = self.items.len();
        self.index.insert(element.clone(), slot);
        self.items.push(element);
        self.slots.push(TreeSlot { parent: slot, rank: 0 });
        Ok(())
    }

    /// Returns the representative of the set containing `element`, or `None`
    /// if the element was never registered.
    ///
    /// Every slot visited on the way up is repointed directly at the root, so
    /// repeated lookups on the same or related elements get progressively
    /// cheaper. The answer is stable: compression changes path lengths, never
    /// representatives.
    pub fn find_set(&mut self, element: &E) -> Option<&E> {
        let slot = *self.index.get(element)?;
        let root = self.find_root(slot);
        Some(&self.items[root])
    }

    /// Merges the sets containing `e1` and `e2`, returning whether a merge
    /// happened (`Ok(false)` when they already share a representative).
    ///
    /// Fails with [`Error::NotPresent`] if either element was never
    /// registered. The root of strictly greater rank survives; on a rank tie
    /// the root of `e2`'s tree becomes the parent of `e1`'s root and its rank
    /// grows by one. The tie direction is part of the contract: it decides
    /// which representative callers observe afterwards.
    pub fn union(&mut self, e1: &E, e2: &E) -> Result<bool> {
        let s1 = self.slot_of(e1)?;
        let s2 = self.slot_of(e2)?;
        let r1 = self.find_root(s1);
        let r2 = self.find_root(s2);

        if r1 == r2 {
            return Ok(false);
        }

        if self.slots[r1].rank > self.slots[r2].rank {
            self.slots[r2].parent = r1;
        } else {
            self.slots[r1].parent = r2;
            if self.slots[r1].rank == self.slots[r2].rank {
                self.slots[r2].rank += 1;
            }
        }
        Ok(true)
    }

    /// Elements that are currently the root of their own tree.
    pub fn representatives(&self) -> Vec<&E> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(i, slot)| slot.parent == *i)
            .map(|(i, _)| &self.items[i])
            .collect()
    }

    /// All elements whose representative equals the representative of
    /// `element`.
    ///
    /// Fails with [`Error::NotPresent`] if the element was never registered.
    pub fn elements_of_set_containing(&mut self, element: &E) -> Result<Vec<&E>> {
        let slot = self.slot_of(element)?;
        let root = self.find_root(slot);

        let mut members = Vec::new();
        for i in 0..self.slots.len() {
            if self.find_root(i) == root {
                members.push(i);
            }
        }
        Ok(members.into_iter().map(|i| &self.items[i]).collect())
    }

    /// Discards every registered element and tree.
    pub fn clear(&mut self) {
        self.items.clear();
        self.slots.clear();
        self.index.clear();
    }

    fn slot_of(&self, element: &E) -> Result<usize> {
        self.index.get(element).copied().ok_or_else(|| Error::NotPresent {
            element: format!("{element:?}"),
        })
    }

    /// Two-pass iterative find: climb to the root, then repoint every visited
    /// slot at it.
    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.slots[root].parent != root {
            root = self.slots[root].parent;
        }

        let mut current = start;
        while self.slots[current].parent != current {
            let next = self.slots[current].parent;
            self.slots[current].parent = root;
            current = next;
        }

        root
    }
}

impl<E: Label> Default for DisjointSetForest<E> {
    fn default() -> Self {
        Self::new()
    }
}
