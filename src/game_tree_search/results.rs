use smallvec::SmallVec;

/// Tolerance used when checking that results sum to zero.
pub const ZERO_SUM_EPSILON: f64 = 1e-9;

/// Final score of a match for every player, kept in declared player order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Results<P> {
    entries: SmallVec<[(P, f64); 4]>,
}

impl<P> Default for Results<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Results<P> {
    /// Results of a game that has not finished.
    #[inline]
    pub fn empty() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&P, f64)> + '_ {
        self.entries.iter().map(|(p, v)| (p, *v))
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn is_zero_sum(&self) -> bool {
        self.sum().abs() <= ZERO_SUM_EPSILON
    }
}

impl<P: PartialEq> Results<P> {
    pub fn from_pairs<I: IntoIterator<Item = (P, f64)>>(pairs: I) -> Self {
        let mut results = Self::empty();
        for (player, value) in pairs {
            results.set(player, value);
        }
        results
    }

    /// Results where `player` scores `value` and every other player scores `-value`.
    /// The score of `player` is scaled by the number of opponents so the total is zero.
    /// A `value` of `0.0` is a draw.
    pub fn for_player(player: &P, players: &[P], value: f64) -> Self
    where
        P: Clone,
    {
        let opponents = players.iter().filter(|p| *p != player).count();
        let pairs = players.iter().map(|p| {
            if p == player {
                (p.clone(), value * opponents as f64)
            } else {
                // `0.0 - value` keeps draws at positive zero.
                (p.clone(), 0.0 - value)
            }
        });
        Self::from_pairs(pairs)
    }

    pub fn get(&self, player: &P) -> Option<f64> {
        self.entries.iter().find(|(p, _)| p == player).map(|(_, v)| *v)
    }

    fn set(&mut self, player: P, value: f64) {
        match self.entries.iter_mut().find(|(p, _)| *p == player) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((player, value)),
        }
    }
}

impl<P: PartialEq> PartialEq for Results<P> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries.iter().all(|(p, v)| other.get(p) == Some(*v))
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Results<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (p, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{p}: {v:+}")?;
        }
        write!(f, "}}")
    }
}
