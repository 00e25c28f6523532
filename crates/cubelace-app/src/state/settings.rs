use cubelace_solver::SolveStrategy;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Strategies run when the cube is solved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct StrategySet: u8 {
        const BEGINNER = 0b0000_0001;
        const CFOP = 0b0000_0010;
        const KOCIEMBA = 0b0000_0100;
    }
}

impl StrategySet {
    /// Returns the flag of a single strategy.
    #[must_use]
    pub const fn of(strategy: SolveStrategy) -> Self {
        match strategy {
            SolveStrategy::Beginner => Self::BEGINNER,
            SolveStrategy::Cfop => Self::CFOP,
            SolveStrategy::Kociemba => Self::KOCIEMBA,
        }
    }

    /// Iterates over the selected strategies in run order.
    ///
    /// An empty set selects every strategy.
    pub fn strategies(self) -> impl Iterator<Item = SolveStrategy> {
        let set = if self.is_empty() { Self::all() } else { self };
        SolveStrategy::ALL
            .into_iter()
            .filter(move |&strategy| set.contains(Self::of(strategy)))
    }

    /// Returns `true` if `strategy` is the only one selected.
    #[must_use]
    pub fn is_only(self, strategy: SolveStrategy) -> bool {
        self == Self::of(strategy)
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        Self::all()
    }
}

/// User preferences persisted between runs.
///
/// The cube itself is never stored; every session starts from a solved
/// layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub strategies: StrategySet,
    pub close_on_solve: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strategies: StrategySet::default(),
            close_on_solve: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_every_strategy_in_order() {
        let settings = Settings::default();
        assert!(settings.close_on_solve);
        assert_eq!(
            settings.strategies.strategies().collect::<Vec<_>>(),
            SolveStrategy::ALL
        );
    }

    #[test]
    fn test_subset_keeps_run_order() {
        let set = StrategySet::KOCIEMBA | StrategySet::BEGINNER;
        assert_eq!(
            set.strategies().collect::<Vec<_>>(),
            [SolveStrategy::Beginner, SolveStrategy::Kociemba]
        );
    }

    #[test]
    fn test_empty_set_selects_every_strategy() {
        assert_eq!(
            StrategySet::empty().strategies().collect::<Vec<_>>(),
            SolveStrategy::ALL
        );
    }

    #[test]
    fn test_is_only() {
        assert!(StrategySet::CFOP.is_only(SolveStrategy::Cfop));
        assert!(!StrategySet::CFOP.is_only(SolveStrategy::Beginner));
        assert!(!(StrategySet::CFOP | StrategySet::BEGINNER).is_only(SolveStrategy::Cfop));
    }

    #[test]
    fn test_of_matches_each_flag() {
        for strategy in SolveStrategy::ALL {
            assert_eq!(StrategySet::of(strategy).strategies().collect::<Vec<_>>(), [strategy]);
        }
    }
}
