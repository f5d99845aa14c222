use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Per-column schema supplied by the caller alongside the feature matrix.
///
/// The engine never inspects caller objects. Whoever assembled the matrix
/// also states what each column is called and whether its values are
/// categorical identities or samples of a continuous range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Human readable column name, used in dumps and error messages.
    pub name: String,
    /// Treat values as categorical identities rather than a bucketed range.
    pub discrete: bool,
}

impl ColumnMeta {
    /// Create the metadata for one column.
    ///
    /// * `name` - The column name.
    /// * `discrete` - Whether the column holds categorical values.
    pub fn new(name: &str, discrete: bool) -> Self {
        ColumnMeta {
            name: name.to_string(),
            discrete,
        }
    }
}

/// Contiguous column major matrix data container.
///
/// Rows are examples and columns are features. The data is borrowed and is
/// only ever read; slicing a fit down to a subset of rows happens through
/// index views, never by copying or mutating the source.
pub struct Matrix<'a, T> {
    /// The raw data stored in a single slice, one column after another.
    pub data: &'a [T],
    /// Number of rows in the matrix.
    pub rows: usize,
    /// Number of columns in the matrix.
    pub cols: usize,
}

impl<'a, T> Matrix<'a, T> {
    /// Create a new Matrix over borrowed column major data.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        Matrix { data, rows, cols }
    }

    /// Get a single reference to an item in the matrix.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[j * self.rows + i]
    }

    /// Get an entire column in the matrix.
    ///
    /// * `col` - The index of the column to get.
    pub fn get_col(&self, col: usize) -> &[T] {
        &self.data[col * self.rows..(col + 1) * self.rows]
    }

    /// Get access to a row of the data, as an iterator.
    pub fn get_row_iter(&self, row: usize) -> std::iter::StepBy<std::iter::Skip<std::slice::Iter<'a, T>>> {
        self.data.iter().skip(row).step_by(self.rows)
    }
}

impl<'a, T> Matrix<'a, T>
where
    T: Copy,
{
    /// Get a row of the data as a vector.
    pub fn get_row(&self, row: usize) -> Vec<T> {
        self.get_row_iter(row).copied().collect()
    }
}

impl<'a, T> Display for Matrix<'a, T>
where
    T: Display,
{
    /// Format a Matrix.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                val.push_str(self.get(i, j).to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_get() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 2, 3);
        println!("{}", m);
        assert_eq!(m.get(0, 0), &1);
        assert_eq!(m.get(1, 0), &2);
        assert_eq!(m.get(0, 2), &6);
    }

    #[test]
    fn test_matrix_get_col() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 3, 2);
        assert_eq!(m.get_col(0), &vec![1, 2, 3]);
        assert_eq!(m.get_col(1), &vec![5, 6, 7]);
    }

    #[test]
    fn test_matrix_row() {
        let v = vec![1, 2, 3, 5, 6, 7];
        let m = Matrix::new(&v, 3, 2);
        assert_eq!(m.get_row(2), vec![3, 7]);
        assert_eq!(m.get_row(0), vec![1, 5]);
        assert_eq!(m.get_row(1), vec![2, 6]);
    }

    #[test]
    fn test_column_meta() {
        let meta = ColumnMeta::new("age", false);
        assert_eq!(meta.name, "age");
        assert!(!meta.discrete);
    }
}
