/// dense row major matrix used for the dynamic programming tables
pub(crate) struct Matrix<T> {
    rows: usize,
    cols: usize,
    matrix: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Copy,
{
    pub fn new(rows: usize, cols: usize, val: T) -> Self {
        Self {
            rows,
            cols,
            matrix: vec![val; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.matrix[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: T) {
        debug_assert!(row < self.rows);
        debug_assert!(col < self.cols);
        self.matrix[row * self.cols + col] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_access() {
        let mut matrix = Matrix::new(3, 4, 7_usize);
        assert_eq!(7, matrix.get(2, 3));

        matrix.set(1, 2, 42);
        assert_eq!(42, matrix.get(1, 2));
        assert_eq!(7, matrix.get(2, 1));
    }
}
