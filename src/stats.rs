//! Opt-in search statistics threaded through [`crate::driver::Solver`], plus
//! an ASCII table renderer for benches and demos, built on `prettytable`.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct StrategyStats {
    pub invocations: u64,
    pub cells_changed: u64,
}

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub by_strategy: HashMap<String, StrategyStats>,
}

impl SearchStats {
    pub fn record(&mut self, strategy: &str, cells_changed: usize) {
        let entry = self.by_strategy.entry(strategy.to_string()).or_default();
        entry.invocations += 1;
        entry.cells_changed += cells_changed as u64;
    }
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    use prettytable::{Cell, Row, Table};

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Invocations"),
        Cell::new("Cells changed"),
    ]));

    let mut rows: Vec<(&String, &StrategyStats)> = stats.by_strategy.iter().collect();
    rows.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (name, s) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&s.invocations.to_string()),
            Cell::new(&s.cells_changed.to_string()),
        ]));
    }

    table.add_row(Row::new(vec![
        Cell::new("nodes_visited"),
        Cell::new(&stats.nodes_visited.to_string()),
        Cell::new(""),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("backtracks"),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(""),
    ]));

    table.to_string()
}
