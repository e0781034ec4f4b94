//! Typed entity tables and encoded matrices

use ndarray::{s, Array2, ArrayView1, ArrayView2};

use crate::vocabulary::{EntityKind, IdFormat};

/// A single raw cell: a category name or a pass-through number
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Number(f32),
}

impl FeatureValue {
    /// Classify a raw cell; anything that parses as a number is numeric
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f32>() {
            Ok(number) if number.is_finite() => FeatureValue::Number(number),
            _ => FeatureValue::Text(trimmed.to_string()),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<f32> for FeatureValue {
    fn from(value: f32) -> Self {
        FeatureValue::Number(value)
    }
}

/// One user or restaurant row
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRecord {
    /// Identifier as it appeared in the source, e.g. `U1077`
    pub raw_id: String,
    /// Identifier with its prefix stripped
    pub id: i64,
    /// Feature cells in the table's declared feature order
    pub values: Vec<FeatureValue>,
}

/// Entity records sharing one declared feature order
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTable {
    pub kind: EntityKind,
    pub id_column: String,
    pub id_format: IdFormat,
    pub features: Vec<String>,
    pub records: Vec<EntityRecord>,
}

impl EntityTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort rows ascending by their original identifier
    ///
    /// Prefixed ids compare as the raw strings they were read as, numeric ids by value.
    pub fn sort_by_raw_id(&mut self) {
        match self.id_format {
            IdFormat::Prefixed => self.records.sort_by(|a, b| a.raw_id.cmp(&b.raw_id)),
            IdFormat::Numeric => self.records.sort_by_key(|r| r.id),
        }
    }
}

/// Numeric matrix produced by the encoder
///
/// Rows follow the table's row order, columns follow `columns`. When the id column
/// was preserved it is column 0.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedMatrix {
    kind: EntityKind,
    columns: Vec<String>,
    ids: Option<Vec<i64>>,
    values: Array2<f32>,
}

impl EncodedMatrix {
    pub(crate) fn new(
        kind: EntityKind,
        columns: Vec<String>,
        ids: Option<Vec<i64>>,
        values: Array2<f32>,
    ) -> Self {
        Self {
            kind,
            columns,
            ids,
            values,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_id_column(&self) -> bool {
        self.ids.is_some()
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Full matrix, id column included when present
    pub fn values(&self) -> &Array2<f32> {
        &self.values
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
        self.values.row(index)
    }

    /// Feature columns only
    pub fn features(&self) -> ArrayView2<'_, f32> {
        let start = usize::from(self.has_id_column());
        self.values.slice(s![.., start..])
    }

    pub fn num_features(&self) -> usize {
        self.values.ncols() - usize::from(self.has_id_column())
    }

    /// Exact integer ids in row order, `None` when the id column was dropped
    pub fn ids(&self) -> Option<&[i64]> {
        self.ids.as_deref()
    }
}
