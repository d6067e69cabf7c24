use super::config::Config;
use super::formatter::{format_cost, is_highlighted};
use super::messages::Message;
use super::task::{Task, TaskStats};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the task list in rank order.
    ///
    /// Rows for tasks at or above the configured threshold are printed in
    /// bold yellow.
    pub fn tasks(tasks: &[Task], config: &Config) -> Result<()> {
        Self::tasks_table(tasks, config).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &[Task], config: &Config) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["#", "ID", "NAME", "COST", "DUE DATE"]);
        for task in tasks {
            let style = if is_highlighted(task.cost, config.highlight_threshold) { "bFy" } else { "" };
            let cells = vec![
                task.rank.to_string(),
                task.id.to_string(),
                task.name.clone(),
                format_cost(task.cost, &config.currency),
                task.due_date_text(),
            ];
            table.add_row(Row::new(cells.iter().map(|text| Cell::new(text).style_spec(style)).collect()));
        }

        table
    }

    pub fn stats(stats: &TaskStats, config: &Config) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![Message::StatsTotalTasks(stats.count)]);
        table.add_row(row![Message::StatsTotalCost(format_cost(stats.total_cost, &config.currency))]);
        table.printstd();

        Ok(())
    }
}
