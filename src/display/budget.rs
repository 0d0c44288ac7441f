//! Budget listing for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BudgetBook;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Limit")]
    limit: String,
}

/// Format the budget mapping as a table
pub fn format_budget_list(book: &BudgetBook, symbol: &str) -> String {
    if book.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = book.iter().map(|(category, limit)| BudgetRow {
        category: category.to_string(),
        limit: limit.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_book() {
        assert_eq!(format_budget_list(&BudgetBook::new(), "$"), "No budgets set.");
    }

    #[test]
    fn test_lists_every_category() {
        let book: BudgetBook = [
            ("Food", Money::from_dollars(100)),
            ("Rent", Money::from_dollars(900)),
        ]
        .into_iter()
        .collect();

        let table = format_budget_list(&book, "$");
        assert!(table.contains("Category"));
        assert!(table.contains("Monthly Limit"));
        assert!(table.contains("Food"));
        assert!(table.contains("$900.00"));
    }
}
