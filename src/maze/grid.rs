use super::Position;

/// Row-major storage for a `height` x `width` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        let data = vec![value; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_boundary(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row == self.height - 1 || pos.col == self.width - 1
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Returns the row at index `row` as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.width)
    }

    fn ravel_index(&self, pos: Position) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {pos} is out of bounds for a {}x{} grid",
            self.width,
            self.height
        );
        pos.row * self.width + pos.col
    }

    pub fn set(&mut self, pos: Position, value: T) {
        let idx = self.ravel_index(pos);
        self.data[idx] = value;
    }
}

impl<T: Copy> std::ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, index: Position) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}
