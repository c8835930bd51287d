//! Calculator views.

use sizing_core::SizingError;
use std::fmt;
use std::str::FromStr;

/// One page of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Prerequisites and roadmap; shown first
    #[default]
    Beginner,
    /// Interactive position size
    Calculator,
    /// Grade reference
    Grades,
    /// Sizing method comparison
    Comparison,
    /// Poker analogy
    Poker,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Beginner, Tab::Calculator, Tab::Grades, Tab::Comparison, Tab::Poker]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Beginner => "Start here",
            Tab::Calculator => "Calculator",
            Tab::Grades => "Trade grades",
            Tab::Comparison => "Comparison",
            Tab::Poker => "Poker analogy",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Beginner => 0,
            Tab::Calculator => 1,
            Tab::Grades => 2,
            Tab::Comparison => 3,
            Tab::Poker => 4,
        }
    }

    /// Tab at a zero-based position.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::all().get(index).copied()
    }

    pub fn next(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Tab {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "start" => Ok(Tab::Beginner),
            "calculator" | "calc" => Ok(Tab::Calculator),
            "grades" => Ok(Tab::Grades),
            "comparison" | "compare" => Ok(Tab::Comparison),
            "poker" => Ok(Tab::Poker),
            _ => Err(SizingError::UnknownTab(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_navigation_wraps() {
        assert_eq!(Tab::Beginner.next(), Tab::Calculator);
        assert_eq!(Tab::Poker.next(), Tab::Beginner);
        assert_eq!(Tab::Beginner.previous(), Tab::Poker);
        assert_eq!(Tab::Grades.previous(), Tab::Calculator);
    }

    #[test]
    fn test_tab_index() {
        for (i, tab) in Tab::all().iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(Tab::from_index(i), Some(*tab));
        }
        assert_eq!(Tab::from_index(5), None);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("compare".parse::<Tab>().unwrap(), Tab::Comparison);
        assert!(matches!("roulette".parse::<Tab>(), Err(SizingError::UnknownTab(_))));
    }
}
