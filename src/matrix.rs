use std::fmt;
use std::io::Write;
use std::ops::Index;
use std::sync::Arc;

use arrow::array::{ArrayRef, PrimitiveArray};
use arrow::datatypes::{DataType, Field, Schema, UInt32Type, UInt64Type};
use arrow::error::{ArrowError, Result as ArrowResult};
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Dense `(n+1) x (m+1)` edit-distance grid, stored row-major.
///
/// Row `i` holds the distances from the first `i` symbols of `a` to every
/// prefix of `b`, so the bottom-right cell is the Levenshtein distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Allocates a grid for sequences of length `n` and `m` with row 0 and
    /// column 0 set to the base case. Interior cells start at zero.
    pub(crate) fn with_base_case(n: usize, m: usize) -> Self {
        let rows = n + 1;
        let cols = m + 1;
        let mut cells = vec![0; rows * cols];
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }
        for i in 0..rows {
            cells[i * cols] = i;
        }
        DistanceMatrix { rows, cols, cells }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The edit distance between the two full sequences.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Arrow schema used by [`DistanceMatrix::to_record_batch`].
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("row", DataType::UInt32, false),
            Field::new("col", DataType::UInt32, false),
            Field::new("value", DataType::UInt64, false),
        ])
    }

    /// One Arrow row per cell, in row-major order.
    pub fn to_record_batch(&self) -> ArrowResult<RecordBatch> {
        let total = self.cells.len();
        let mut row_idx: Vec<u32> = Vec::with_capacity(total);
        let mut col_idx: Vec<u32> = Vec::with_capacity(total);
        let mut values: Vec<u64> = Vec::with_capacity(total);
        for i in 0..self.rows {
            let row = arrow_index(i)?;
            for (j, &value) in self.row(i).iter().enumerate() {
                row_idx.push(row);
                col_idx.push(arrow_index(j)?);
                values.push(value as u64);
            }
        }

        let col_row: ArrayRef = Arc::new(PrimitiveArray::<UInt32Type>::from(row_idx));
        let col_col: ArrayRef = Arc::new(PrimitiveArray::<UInt32Type>::from(col_idx));
        let col_value: ArrayRef = Arc::new(PrimitiveArray::<UInt64Type>::from(values));
        RecordBatch::try_new(Arc::new(Self::schema()), vec![col_row, col_col, col_value])
    }

    /// Writes the matrix as a single-batch Arrow IPC file and hands the
    /// writer back once the footer is written.
    pub fn write_ipc<W: Write>(&self, writer: W) -> ArrowResult<W> {
        let schema = Arc::new(Self::schema());
        let batch = self.to_record_batch()?;
        let mut arrow_writer = FileWriter::try_new(writer, &schema)?;
        arrow_writer.write(&batch)?;
        arrow_writer.finish()?;
        arrow_writer.into_inner()
    }
}

// Export columns are UInt32; wider grids are refused rather than wrapped.
fn arrow_index(i: usize) -> ArrowResult<u32> {
    u32::try_from(i).map_err(|_| {
        ArrowError::InvalidArgumentError(format!(
            "matrix index {} does not fit in a UInt32 column",
            i
        ))
    })
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = usize;

    fn index(&self, (i, j): (usize, usize)) -> &usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

// Same layout numpy uses for a 2-D array: bracketed rows, right-aligned.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", value, width = width)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cells: Vec<&[usize]> = self.cells.chunks(self.cols).collect();
        let mut state = serializer.serialize_struct("DistanceMatrix", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("cells", &cells)?;
        state.end()
    }
}
