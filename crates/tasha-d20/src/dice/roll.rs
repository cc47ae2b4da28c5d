//! Dice roll results and aggregation.

/// The values produced by rolling several dice together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    /// Individual die values, in the order they were rolled.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Wrap already rolled values.
    pub fn from_values(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The same roll with exactly one occurrence of the lowest value removed.
    ///
    /// When several dice tie for lowest, the first one rolled is dropped.
    pub fn drop_lowest(&self) -> RollResult {
        let mut values = self.values.clone();
        if let Some(pos) = values
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| **v)
            .map(|(i, _)| i)
        {
            values.remove(pos);
        }
        RollResult { values }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_extremes() {
        let r = RollResult::from_values([3, 6, 1, 4]);
        assert_eq!(r.total(), 14);
        assert_eq!(r.highest(), 6);
        assert_eq!(r.lowest(), 1);
        assert_eq!(r.count(), 4);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.highest(), 0);
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.drop_lowest().count(), 0);
    }

    #[test]
    fn drop_lowest_removes_one_die() {
        let r = RollResult::from_values([5, 2, 6, 3]);
        assert_eq!(r.drop_lowest().values, vec![5, 6, 3]);
    }

    #[test]
    fn drop_lowest_tie_drops_first_occurrence() {
        let r = RollResult::from_values([4, 1, 6, 1]);
        assert_eq!(r.drop_lowest().values, vec![4, 6, 1]);

        let r = RollResult::from_values([2, 2, 2, 2]);
        let kept = r.drop_lowest();
        assert_eq!(kept.count(), 3);
        assert_eq!(kept.total(), 6);
    }

    #[test]
    fn display() {
        let r = RollResult::from_values([3, 5]);
        assert_eq!(r.to_string(), "[3, 5] = 8");
    }
}
