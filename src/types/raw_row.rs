// src/types/raw_row.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One input row: original column name -> cell text, in header order.
///
/// Serializes as a JSON object whose keys keep the column order of the
/// source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Build a row from header names and cell values.
    ///
    /// Missing trailing cells become empty strings, surplus cells are ignored.
    pub fn from_cells<H, C>(headers: &[H], cells: &[C]) -> Self
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let mut row = Self::default();
        for (i, header) in headers.iter().enumerate() {
            let value = cells.get(i).map(|c| c.as_ref()).unwrap_or("");
            row.insert(header.as_ref(), value);
        }
        row
    }

    /// Set a cell. A repeated column name keeps its first position and takes the new value.
    fn insert(&mut self, column: &str, value: &str) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.cells.push((column.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
