/// Dense row-major 2-D storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array2<T> {
    vec: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self {
            vec: vec![<T as Default>::default(); rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.vec[row * self.cols..(row + 1) * self.cols]
    }
}

// (row, column)
impl<T> core::ops::Index<(usize, usize)> for Array2<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &self.vec[row * self.cols + col]
    }
}

// (row, column)
impl<T> core::ops::IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.vec[row * self.cols + col]
    }
}
