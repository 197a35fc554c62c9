//! Cost matrices and the instance-file loader.

use std::ops::Index;
use std::path::Path;

/// A square, read-only integer matrix indexable by `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    values: Vec<u32>,
}

impl Matrix {
    /// Builds a matrix from row-major values.
    ///
    /// Fails when `values` does not hold exactly `size * size` entries.
    pub fn from_values(size: usize, values: Vec<u32>) -> Result<Self, String> {
        if values.len() != size * size {
            return Err(format!(
                "expected {} values for a {size}x{size} matrix, got {}",
                size * size,
                values.len()
            ));
        }
        Ok(Self { size, values })
    }

    /// The dimension N.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Index<usize> for Matrix {
    type Output = [u32];

    fn index(&self, row: usize) -> &[u32] {
        &self.values[row * self.size..(row + 1) * self.size]
    }
}

/// The two matrices defining a QAP instance.
///
/// `distance[i][j]` is the distance between locations `i` and `j`;
/// `flow[a][b]` is the flow between facilities `a` and `b`. Both are
/// immutable once constructed and share the same dimension.
#[derive(Debug, Clone)]
pub struct CostMatrices {
    pub distance: Matrix,
    pub flow: Matrix,
}

impl CostMatrices {
    /// Parses the whitespace-delimited instance format: the dimension N
    /// first, then the N×N flow matrix, then the N×N distance matrix.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut tokens = input.split_whitespace();

        let size_token = tokens.next().ok_or("empty instance file")?;
        let size: usize = size_token
            .parse()
            .map_err(|_| format!("invalid matrix size '{size_token}'"))?;
        if size == 0 {
            return Err("matrix size must be positive".into());
        }

        let mut read_matrix = |name: &str| -> Result<Matrix, String> {
            let mut values = Vec::with_capacity(size * size);
            for _ in 0..size * size {
                let token = tokens
                    .next()
                    .ok_or_else(|| format!("{name} matrix ends before {size}x{size} values"))?;
                let value = token
                    .parse()
                    .map_err(|_| format!("invalid value '{token}' in {name} matrix"))?;
                values.push(value);
            }
            Matrix::from_values(size, values)
        };

        let flow = read_matrix("flow")?;
        let distance = read_matrix("distance")?;

        Ok(Self { distance, flow })
    }

    /// Reads and parses an instance file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let input = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&input)
    }

    /// The shared dimension N.
    pub fn size(&self) -> usize {
        self.distance.size()
    }
}
