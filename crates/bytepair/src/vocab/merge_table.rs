//! # Merge Rule Table

use crate::types::TokenId;

/// A single merge rule, stored in the row of its left token.
///
/// `priority` is the zero-based index of the rule in the source `merges`
/// list; smaller values take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRule {
    /// The right-hand token of the pair.
    pub right: TokenId,

    /// The token the pair collapses into.
    pub new: TokenId,

    /// Rule precedence; the index of the rule in the `merges` list.
    pub priority: u32,
}

/// Merge-rule table indexed by left token id.
///
/// Each row is sorted strictly ascending by `right`, so a `(left, right)`
/// probe is an O(1) row fetch plus a binary search.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MergeTable {
    /// Per-left-id rule rows.
    rows: Vec<Vec<MergeRule>>,
}

impl MergeTable {
    /// Build a table from unordered `(left, right, new, priority)` rules.
    ///
    /// Rows exist (possibly empty) for every id below `len`, so lookups are
    /// always safe. Duplicate `(left, right)` pairs keep the lowest priority.
    ///
    /// ## Arguments
    /// * `len` - The id-array length (`max_id + 1`).
    /// * `rules` - An iterator of `(left, right, new, priority)` tuples.
    ///
    /// ## Returns
    /// A new `MergeTable` instance.
    pub fn from_rules<R>(
        len: usize,
        rules: R,
    ) -> Self
    where
        R: IntoIterator<Item = (TokenId, TokenId, TokenId, u32)>,
    {
        let mut rows: Vec<Vec<MergeRule>> = vec![Vec::new(); len];

        for (left, right, new, priority) in rules {
            rows[left as usize].push(MergeRule {
                right,
                new,
                priority,
            });
        }

        for row in &mut rows {
            row.sort_by_key(|rule| (rule.right, rule.priority));
            row.dedup_by_key(|rule| rule.right);
            row.shrink_to_fit();
        }

        Self { rows }
    }

    /// Grow the row array to cover `len` ids; new rows are empty.
    ///
    /// ## Arguments
    /// * `len` - The minimum row-array length.
    pub fn grow(
        &mut self,
        len: usize,
    ) {
        if len > self.rows.len() {
            self.rows.resize(len, Vec::new());
        }
    }

    /// The row-array length.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The total number of rules across all rows.
    pub fn rule_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Probe for a merge rule for the adjacent pair `(left, right)`.
    ///
    /// ## Arguments
    /// * `left` - The left token of the pair.
    /// * `right` - The right token of the pair.
    ///
    /// ## Returns
    /// The `(new, priority)` of the matching rule, or `None`.
    #[inline(always)]
    pub fn lookup(
        &self,
        left: TokenId,
        right: TokenId,
    ) -> Option<(TokenId, u32)> {
        let row = self.rows.get(left as usize)?;
        let idx = row.binary_search_by_key(&right, |rule| rule.right).ok()?;
        let rule = &row[idx];
        Some((rule.new, rule.priority))
    }

    /// Iterate over the rows, for invariant checks.
    pub fn rows(&self) -> impl Iterator<Item = &[MergeRule]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
