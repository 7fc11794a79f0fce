//! Ordered collection of report tables, one per base modulus.

use tracing::info;

use crate::types::{ReportRow, ReportTable};

/// Tables in the order their base modulus was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBook {
    tables: Vec<ReportTable>,
}

impl ReportBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for `base_modulus`, created on first use.
    pub fn ensure_table(&mut self, base_modulus: f64) -> &mut ReportTable {
        let idx = match self
            .tables
            .iter()
            .position(|t| t.base_modulus() == base_modulus)
        {
            Some(idx) => idx,
            None => {
                let table = ReportTable::new(base_modulus);
                info!(title = table.title(), "created report table");
                self.tables.push(table);
                self.tables.len() - 1
            }
        };
        &mut self.tables[idx]
    }

    pub fn append(&mut self, base_modulus: f64, row: ReportRow) {
        self.ensure_table(base_modulus).push(row);
    }

    pub fn tables(&self) -> &[ReportTable] {
        &self.tables
    }

    pub fn table(&self, title: &str) -> Option<&ReportTable> {
        self.tables.iter().find(|t| t.title() == title)
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows().len()).sum()
    }

    pub fn missing_cells(&self) -> usize {
        self.tables
            .iter()
            .flat_map(|t| t.rows())
            .map(ReportRow::missing_count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(surface: f64) -> ReportRow {
        ReportRow::new(surface, 1.0, 40.0, [Some(0.0); 7], [None; 7])
    }

    #[test]
    fn tables_created_lazily_in_first_seen_order() {
        let mut book = ReportBook::new();
        assert!(book.is_empty());

        book.append(1000.0, row(2000.0));
        book.append(300.0, row(2000.0));
        book.append(1000.0, row(2500.0));

        let titles: Vec<&str> = book.tables().iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["Base_1000", "Base_300"]);

        let first = book.table("Base_1000").unwrap();
        assert_eq!(first.rows().len(), 2);
        assert_eq!(first.rows()[1].cells()[0].as_f64(), Some(2500.0));
        assert_eq!(book.row_count(), 3);
        assert_eq!(book.missing_cells(), 21);
    }

    #[test]
    fn ensure_table_is_idempotent() {
        let mut book = ReportBook::new();
        book.ensure_table(500.0);
        book.ensure_table(500.0);
        assert_eq!(book.tables().len(), 1);
        assert!(book.table("Base_500").unwrap().rows().is_empty());
    }
}
