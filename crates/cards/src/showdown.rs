use super::strength::Strength;

/// Ephemeral resolver for one batch: given the strengths of every
/// successfully classified hand in submission order, decides which are
/// strongest. Two phases by construction: a running maximum over category
/// scores tracks the leading set, then the maximum decisive rank inside
/// that set picks the winners. Decisive ranks are never compared across
/// categories because the ranker's scale is category-relative.
pub struct Showdown {
    entries: Vec<Strength>,
}

impl From<Vec<Strength>> for Showdown {
    fn from(entries: Vec<Strength>) -> Self {
        Self { entries }
    }
}

impl Showdown {
    /// One strongest flag per entry, in input order. Ties propagate:
    /// every leader matching the top decisive rank is flagged. An empty
    /// batch yields an empty flag set.
    pub fn strongest(&self) -> Vec<bool> {
        let mut best = 0u8;
        let mut leaders = Vec::new();
        for (index, strength) in self.entries.iter().enumerate() {
            if strength.score() > best {
                best = strength.score();
                leaders.clear();
                leaders.push(index);
            } else if strength.score() == best {
                leaders.push(index);
            }
        }
        let mut flags = vec![false; self.entries.len()];
        if let Some(top) = leaders.iter().map(|&i| self.entries[i].decisive()).max() {
            for &index in leaders.iter() {
                if self.entries[index].decisive() == top {
                    flags[index] = true;
                }
            }
        }
        flags
    }
}
