//! Search statistics and their table rendering.

use std::collections::HashMap;

use prettytable::{Cell, Row, Table};

use crate::solver::validity::CheckedClue;

/// What the retry loop observed.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// 0-based count of failed attempts before success; equals the budget
    /// when the search was exhausted.
    pub attempts: usize,
    /// Per checked clue, how often it was the first to fail an attempt.
    pub failures: HashMap<CheckedClue, u64>,
}

/// Renders the per-clue first-failure counts, most frequent first.
pub fn render_failure_stats(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Checked Clue"),
        Cell::new("First Failures"),
    ]));

    let mut counted: Vec<(CheckedClue, u64)> = CheckedClue::ALL
        .iter()
        .map(|clue| (*clue, stats.failures.get(clue).copied().unwrap_or(0)))
        .collect();
    counted.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    for (clue, count) in counted {
        table.add_row(Row::new(vec![
            Cell::new(clue.description()),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_clues_appear_even_with_no_failures() {
        let rendered = render_failure_stats(&SearchStats::default());
        for clue in CheckedClue::ALL {
            assert!(rendered.contains(clue.description()));
        }
    }

    #[test]
    fn most_frequent_failure_is_listed_first() {
        let mut stats = SearchStats::default();
        stats.failures.insert(CheckedClue::BlendNextToWater, 9);
        stats.failures.insert(CheckedClue::GreenLeftOfWhite, 2);

        let rendered = render_failure_stats(&stats);
        let water_at = rendered
            .find(CheckedClue::BlendNextToWater.description())
            .unwrap();
        let green_at = rendered
            .find(CheckedClue::GreenLeftOfWhite.description())
            .unwrap();
        assert!(water_at < green_at);
    }
}
