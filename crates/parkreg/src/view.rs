//! View renderer for parkreg.
//!
//! Projects the full record set into a [`Table`]: one [`Row`] per record with
//! name, plate and entry time cells followed by a [`RemoveControl`]. The
//! table is rebuilt from scratch on every render and owns no other state.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::record::RecordMap;
use crate::store::RecordView;

/// Label shown on every removal control.
pub const REMOVE_LABEL: &str = "x";

/// How a table is written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered table with a header row.
    #[default]
    Table,
    /// Tab-separated lines.
    Plain,
    /// The record mapping as JSON.
    Json,
}

/// What a text cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Owner or vehicle label.
    Name,
    /// License plate.
    Plate,
    /// Registration time.
    EntryTime,
}

/// Action that removes one record when activated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RemoveControl {
    plate: String,
}

impl RemoveControl {
    /// Plate of the record this control removes.
    #[must_use]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// Text shown on the control.
    #[must_use]
    pub fn label(&self) -> &'static str {
        REMOVE_LABEL
    }
}

/// One cell of a rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Plain text.
    Text {
        /// What the text is.
        kind: CellKind,
        /// The text itself.
        content: String,
    },
    /// A removal control.
    Remove(RemoveControl),
}

impl Cell {
    /// Build a text cell.
    #[must_use]
    pub fn text(kind: CellKind, content: impl Into<String>) -> Self {
        Self::Text {
            kind,
            content: content.into(),
        }
    }

    /// Build a removal control for `plate`.
    #[must_use]
    pub fn remove(plate: impl Into<String>) -> Self {
        Self::Remove(RemoveControl {
            plate: plate.into(),
        })
    }

    /// Text displayed in the cell.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { content, .. } => content,
            Self::Remove(control) => control.label(),
        }
    }
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// All cells in display order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Contents of the text cells, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                Cell::Text { content, .. } => Some(content.as_str()),
                Cell::Remove(_) => None,
            })
            .collect()
    }

    /// The row's removal control.
    #[must_use]
    pub fn remove_control(&self) -> Option<&RemoveControl> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Remove(control) => Some(control),
            Cell::Text { .. } => None,
        })
    }
}

/// A rendered record table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Rendered rows, in record order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the removal control for `plate`.
    #[must_use]
    pub fn remove_control(&self, plate: &str) -> Option<&RemoveControl> {
        self.rows
            .iter()
            .filter_map(Row::remove_control)
            .find(|control| control.plate() == plate)
    }

    /// Format as a bordered terminal table with a header row.
    #[must_use]
    pub fn to_text_table(&self) -> String {
        let lines = self.rows.iter().map(TableLine::from);
        tabled::Table::new(lines).to_string()
    }

    /// Format as tab-separated lines, one per row, without controls.
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.texts().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Tabled)]
struct TableLine {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Plate")]
    plate: String,
    #[tabled(rename = "Entry")]
    entry_time: String,
    #[tabled(rename = "")]
    action: String,
}

impl From<&Row> for TableLine {
    fn from(row: &Row) -> Self {
        let text = |i: usize| {
            row.cells
                .get(i)
                .map_or_else(String::new, |cell| cell.display_text().to_string())
        };
        Self {
            name: text(0),
            plate: text(1),
            entry_time: text(2),
            action: text(3),
        }
    }
}

/// Render the full record set into a fresh table.
#[must_use]
pub fn render(records: &RecordMap) -> Table {
    let rows = records
        .values()
        .map(|record| Row {
            cells: vec![
                Cell::text(CellKind::Name, &record.name),
                Cell::text(CellKind::Plate, &record.plate),
                Cell::text(CellKind::EntryTime, record.entry_time.as_str()),
                Cell::remove(&record.plate),
            ],
        })
        .collect();
    Table { rows }
}

/// A [`RecordView`] that keeps the most recently rendered table.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    table: Table,
    renders: u64,
}

impl TableView {
    /// Create a view with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// How many times the view has been redrawn.
    #[must_use]
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl RecordView for TableView {
    fn update(&mut self, records: &RecordMap) {
        self.table = render(records);
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EntryTime, VehicleRecord};

    fn records(entries: &[(&str, &str)]) -> RecordMap {
        entries
            .iter()
            .map(|(name, plate)| {
                (
                    (*plate).to_string(),
                    VehicleRecord::new(*name, *plate, EntryTime::at(9, 5)),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_empty() {
        let table = render(&RecordMap::new());
        assert!(table.is_empty());
        assert_eq!(table.to_plain(), "");
    }

    #[test]
    fn test_render_row_cells() {
        let table = render(&records(&[("Alice", "ABC123")]));
        assert_eq!(table.len(), 1);

        let row = &table.rows()[0];
        assert_eq!(row.texts(), ["Alice", "ABC123", "9:5"]);
        assert_eq!(row.cells().len(), 4);
        assert_eq!(row.remove_control().unwrap().plate(), "ABC123");
        assert_eq!(row.cells()[3].display_text(), REMOVE_LABEL);
    }

    #[test]
    fn test_render_follows_map_order() {
        let table = render(&records(&[("c", "C"), ("a", "A"), ("b", "B")]));
        let plates: Vec<&str> = table.rows().iter().map(|row| row.texts()[1]).collect();
        assert_eq!(plates, ["C", "A", "B"]);
    }

    #[test]
    fn test_remove_control_lookup() {
        let table = render(&records(&[("Alice", "ABC123"), ("Bob", "XYZ789")]));
        assert_eq!(table.remove_control("XYZ789").unwrap().plate(), "XYZ789");
        assert!(table.remove_control("NOPE").is_none());
    }

    #[test]
    fn test_cell_builder() {
        let cell = Cell::text(CellKind::Plate, "ABC123");
        assert_eq!(cell.display_text(), "ABC123");
        assert!(matches!(
            cell,
            Cell::Text {
                kind: CellKind::Plate,
                ..
            }
        ));
    }

    #[test]
    fn test_text_table_contains_values() {
        let output = render(&records(&[("Alice", "ABC123")])).to_text_table();
        assert!(output.contains("Name"));
        assert!(output.contains("Alice"));
        assert!(output.contains("ABC123"));
        assert!(output.contains("9:5"));
    }

    #[test]
    fn test_plain_output() {
        let output = render(&records(&[("Alice", "ABC123"), ("Bob", "XYZ789")])).to_plain();
        assert_eq!(output, "Alice\tABC123\t9:5\nBob\tXYZ789\t9:5");
    }

    #[test]
    fn test_table_view_replaces_content() {
        let mut view = TableView::new();
        view.update(&records(&[("Alice", "ABC123"), ("Bob", "XYZ789")]));
        assert_eq!(view.table().len(), 2);

        view.update(&records(&[("Bob", "XYZ789")]));
        assert_eq!(view.table().len(), 1);
        assert_eq!(view.renders(), 2);
    }
}
