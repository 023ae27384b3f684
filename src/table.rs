// src/table.rs
//
// Named-column string table. The whole pipeline moves data around in this
// shape: cells are plain strings and a missing value is the empty string.
// Typed interpretation (floats, timestamps) happens at the edges, in the
// clean/split steps.

use crate::csv;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Parse delimiter-separated text; the first row is the header.
    pub fn from_delimited(text: &str, sep: char) -> Self {
        let mut parsed = csv::parse_rows(text, sep);
        if parsed.is_empty() {
            return Self::default();
        }
        let columns = parsed.remove(0);
        let width = columns.len();
        // Ragged rows are padded so every accessor stays index-safe.
        for row in &mut parsed {
            row.resize(width, s!());
        }
        Self {
            columns,
            rows: parsed,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn col(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_col(&self, name: &str) -> bool {
        self.col(name).is_some()
    }

    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let ix = self.col(name)?;
        self.rows.get(row)?.get(ix).map(String::as_str)
    }

    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), s!());
        self.rows.push(row);
    }

    /// Add a column filled with a constant (e.g. tagging rows with a cruise id).
    pub fn add_const_column(&mut self, name: &str, value: &str) {
        self.columns.push(s!(name));
        for row in &mut self.rows {
            row.push(s!(value));
        }
    }

    /// Add a column computed per row.
    pub fn add_column_with<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&[String]) -> String,
    {
        self.columns.push(s!(name));
        for row in &mut self.rows {
            let v = f(row);
            row.push(v);
        }
    }

    /// Rewrite one column in place.
    pub fn map_column<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        if let Some(ix) = self.col(name) {
            for row in &mut self.rows {
                row[ix] = f(&row[ix]);
            }
        }
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|r| keep(r));
    }

    /// Drop the named columns (missing names are ignored).
    pub fn drop_columns(&mut self, names: &[&str]) {
        let drop_ix: Vec<usize> = names.iter().filter_map(|n| self.col(n)).collect();
        if drop_ix.is_empty() {
            return;
        }
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|i| !drop_ix.contains(i))
            .collect();
        self.columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        for row in &mut self.rows {
            *row = keep.iter().map(|&i| row[i].clone()).collect();
        }
    }

    /// New table with only the columns whose name passes `pred`,
    /// in original order.
    pub fn select_columns<F>(&self, pred: F) -> Table
    where
        F: Fn(&str) -> bool,
    {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| pred(c))
            .map(|(i, _)| i)
            .collect();
        Table {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| keep.iter().map(|&i| r[i].clone()).collect())
                .collect(),
        }
    }

    /// True when every cell in the column is missing (or the column is absent).
    pub fn all_missing(&self, name: &str) -> bool {
        match self.col(name) {
            Some(ix) => self.rows.iter().all(|r| r[ix].is_empty()),
            None => true,
        }
    }

    pub fn any_missing(&self, name: &str) -> bool {
        match self.col(name) {
            Some(ix) => self.rows.iter().any(|r| r[ix].is_empty()),
            None => false,
        }
    }

    /// Append another table, aligning columns by name. Columns the other
    /// table lacks are filled with missing; new columns are unioned in.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() {
            *self = other;
            return;
        }
        for c in &other.columns {
            if !self.has_col(c) {
                self.add_const_column(c, "");
            }
        }
        let mapping: Vec<Option<usize>> = self
            .columns
            .iter()
            .map(|c| other.columns.iter().position(|oc| oc == c))
            .collect();
        for orow in &other.rows {
            let row = mapping
                .iter()
                .map(|m| match m {
                    Some(ix) => orow[*ix].clone(),
                    None => s!(),
                })
                .collect();
            self.rows.push(row);
        }
    }

    /// Group row indices by the value of one column, preserving first-seen
    /// group order.
    pub fn group_indices(&self, name: &str) -> Vec<(String, Vec<usize>)> {
        let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
        let Some(ix) = self.col(name) else {
            return groups;
        };
        for (i, row) in self.rows.iter().enumerate() {
            let key = &row[ix];
            match groups.iter_mut().find(|(k, _)| k == key) {
                Some((_, v)) => v.push(i),
                None => groups.push((key.clone(), vec![i])),
            }
        }
        groups
    }

    /// Keep only the rows at the given indices (ascending, deduped by caller).
    pub fn take_rows(&self, ix: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: ix.iter().filter_map(|&i| self.rows.get(i).cloned()).collect(),
        }
    }
}
