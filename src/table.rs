//! In-memory table: ordered named columns over rows of loosely typed cells.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Reads a text cell the way a data-frame loader would: empty is null,
    /// then booleans, integers, floats, and finally plain text.
    pub fn infer(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }

        match trimmed {
            "true" | "True" | "TRUE" => return Value::Bool(true),
            "false" | "False" | "FALSE" => return Value::Bool(false),
            _ => {}
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }

        Value::Str(raw.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text written to a delimited file. Whole floats keep a `.0` so they
    /// read back as floats.
    pub fn to_field(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.1}", f),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table, padding short rows with nulls and widening the header
    /// with positional names when a row is longer than it.
    pub fn from_rows(mut columns: Vec<String>, mut rows: Vec<Vec<Value>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        while columns.len() < width {
            columns.push(columns.len().to_string());
        }
        for row in &mut rows {
            row.resize(columns.len(), Value::Null);
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        let mut row = row;
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    /// Promotes mixed integer/float columns to float.
    pub(crate) fn unify_numeric_columns(&mut self) {
        for idx in 0..self.columns.len() {
            let has_float = self.rows.iter().any(|r| matches!(r[idx], Value::Float(_)));
            let has_int = self.rows.iter().any(|r| matches!(r[idx], Value::Int(_)));
            if !(has_float && has_int) {
                continue;
            }
            for row in &mut self.rows {
                if let Value::Int(i) = row[idx] {
                    row[idx] = Value::Float(i as f64);
                }
            }
        }
    }

    /// Turns float columns whose values are all whole numbers into integer columns.
    pub(crate) fn demote_integral_columns(&mut self) {
        for idx in 0..self.columns.len() {
            let mut saw_float = false;
            let all_integral = self.rows.iter().all(|r| match r[idx] {
                Value::Float(f) => {
                    saw_float = true;
                    f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64
                }
                Value::Int(_) | Value::Null => true,
                _ => false,
            });
            if !saw_float || !all_integral {
                continue;
            }
            for row in &mut self.rows {
                if let Value::Float(f) = row[idx] {
                    row[idx] = Value::Int(f as i64);
                }
            }
        }
    }
}
