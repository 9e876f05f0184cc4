//! Column-oriented records.
//!
//! A dictionary keeps its column names in insertion order and each column
//! as an ordered list of values. Row `i` is the `i`-th value of every
//! column; columns are not required to be the same length.

mod table;

use rustc_hash::FxHashMap;

use crate::{missing_column, EvalError, Value};

/// Ordered headers plus one value list per header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dictionary {
    headers: Vec<String>,
    columns: FxHashMap<String, Vec<Value>>,
}

impl Dictionary {
    /// Empty dictionary declaring `headers`; repeated names are kept once.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Dictionary::default();
        for header in headers {
            dict.declare(header.into());
        }
        dict
    }

    fn declare(&mut self, header: String) {
        if !self.columns.contains_key(&header) {
            self.columns.insert(header.clone(), Vec::new());
            self.headers.push(header);
        }
    }

    /// Append `value` to the declared column `key`.
    pub fn add(&mut self, key: &str, value: Value) -> Result<(), EvalError> {
        self.columns
            .get_mut(key)
            .map(|column| column.push(value))
            .ok_or_else(|| missing_column(key))
    }

    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, key: &str) -> Option<&[Value]> {
        self.columns.get(key).map(Vec::as_slice)
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Union of both dictionaries.
    ///
    /// Headers keep first-seen order, `self` first. On a column collision
    /// the values from `other` win.
    #[must_use]
    pub fn merge(&self, other: &Dictionary) -> Dictionary {
        let mut merged = Dictionary::new(self.headers.iter().chain(&other.headers).cloned());
        for header in &merged.headers {
            let values = other
                .columns
                .get(header)
                .or_else(|| self.columns.get(header));
            if let (Some(values), Some(slot)) = (values, merged.columns.get_mut(header)) {
                slot.clone_from(values);
            }
        }
        merged
    }

    pub fn deep_copy(&self) -> Dictionary {
        Dictionary {
            headers: self.headers.clone(),
            columns: self
                .columns
                .iter()
                .map(|(k, v)| (k.clone(), v.iter().map(Value::deep_copy).collect()))
                .collect(),
        }
    }

    pub fn dispose(&self) {
        self.columns.values().flatten().for_each(Value::dispose);
    }
}
