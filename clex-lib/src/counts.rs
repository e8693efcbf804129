use super::token::TokenCategory;

/// Per-category totals of emitted tokens. Error tokens are counted apart and
/// never contribute to [`CategoryCounts::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; TokenCategory::COUNT],
    errors: usize,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: TokenCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn get(&self, category: TokenCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts in category priority order, zero entries included.
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, usize)> + '_ {
        TokenCategory::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }

    /// Adds another set of counts into this one.
    pub fn merge(&mut self, other: &CategoryCounts) {
        for (total, n) in self.counts.iter_mut().zip(other.counts.iter()) {
            *total += n;
        }
        self.errors += other.errors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_are_zero() {
        let counts = CategoryCounts::new();
        assert!(counts.iter().all(|(_, n)| n == 0));
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.errors(), 0);
    }

    #[test]
    fn test_errors_are_not_part_of_total() {
        let mut counts = CategoryCounts::new();
        counts.record(TokenCategory::Keyword);
        counts.record(TokenCategory::Keyword);
        counts.record(TokenCategory::Punctuation);
        counts.record_error();

        assert_eq!(counts.get(TokenCategory::Keyword), 2);
        assert_eq!(counts.get(TokenCategory::Punctuation), 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.errors(), 1);
    }

    #[test]
    fn test_iter_follows_category_order() {
        let mut counts = CategoryCounts::new();
        counts.record(TokenCategory::Operator);
        let order: Vec<TokenCategory> = counts.iter().map(|(c, _)| c).collect();
        assert_eq!(order, TokenCategory::ALL.to_vec());
    }

    #[test]
    fn test_merge() {
        let mut a = CategoryCounts::new();
        a.record(TokenCategory::Number);
        a.record_error();
        let mut b = CategoryCounts::new();
        b.record(TokenCategory::Number);
        b.record(TokenCategory::Identifier);

        a.merge(&b);
        assert_eq!(a.get(TokenCategory::Number), 2);
        assert_eq!(a.get(TokenCategory::Identifier), 1);
        assert_eq!(a.errors(), 1);
    }
}
