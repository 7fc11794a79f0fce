//! Report row and table types.

use pv_engine::{Quantity, QueryPoint};
pub use pv_project::table_title;

/// Columns in every table: surface modulus, ratio, thickness, 7 full, 7 half.
pub const COLUMN_COUNT: usize = 17;

pub const HEADER: [&str; COLUMN_COUNT] = [
    "SurfMod", "ModRatio", "Thickness", "σz_h1", "σt_h1", "σr_h1", "τ_h1", "εz_h1", "εt_h1",
    "εr_h1", "σz_h1/2", "σt_h1/2", "σr_h1/2", "τ_h1/2", "εz_h1/2", "εt_h1/2", "εr_h1/2",
];


/// Label of the response column for `quantity` at `point`.
pub fn response_label(quantity: Quantity, point: QueryPoint) -> String {
    format!("{}_{}", quantity.symbol(), point.suffix())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Number(f64),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Empty => None,
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    cells: [Cell; COLUMN_COUNT],
}

impl ReportRow {
    pub fn new(
        surface_modulus: f64,
        modulus_ratio: f64,
        surface_thickness: f64,
        full: [Option<f64>; 7],
        half: [Option<f64>; 7],
    ) -> Self {
        let mut cells = [Cell::Empty; COLUMN_COUNT];
        cells[0] = Cell::Number(surface_modulus);
        cells[1] = Cell::Number(modulus_ratio);
        cells[2] = Cell::Number(surface_thickness);
        for (i, v) in full.into_iter().chain(half).enumerate() {
            cells[3 + i] = v.into();
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    title: String,
    base_modulus: f64,
    rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(base_modulus: f64) -> Self {
        Self {
            title: table_title(base_modulus),
            base_modulus,
            rows: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_modulus(&self) -> f64 {
        self.base_modulus
    }

    /// Always the first row of the persisted table.
    pub fn header(&self) -> &'static [&'static str] {
        &HEADER
    }

    /// Data rows in append order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_agrees_with_quantity_order() {
        let mut expected = vec!["SurfMod".to_string(), "ModRatio".into(), "Thickness".into()];
        for point in QueryPoint::ALL {
            for q in Quantity::ALL {
                expected.push(response_label(q, point));
            }
        }
        assert_eq!(expected, HEADER.to_vec());
    }

    #[test]
    fn row_layout() {
        let mut full = [None; 7];
        full[0] = Some(-0.5);
        let half = [Some(1.0); 7];
        let row = ReportRow::new(2000.0, 4.0, 40.0, full, half);

        let cells = row.cells();
        assert_eq!(cells.len(), COLUMN_COUNT);
        assert_eq!(cells[0], Cell::Number(2000.0));
        assert_eq!(cells[1], Cell::Number(4.0));
        assert_eq!(cells[2], Cell::Number(40.0));
        assert_eq!(cells[3], Cell::Number(-0.5));
        assert!(cells[4].is_empty());
        assert_eq!(cells[10], Cell::Number(1.0));
        assert_eq!(row.missing_count(), 6);
    }
}
