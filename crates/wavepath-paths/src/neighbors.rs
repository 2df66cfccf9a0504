/// Cached orthogonal neighbor computation over a row-major cell slice.
///
/// Candidates are always evaluated in the order **+x, −x, +y, −y**
/// (right, left, down, up). Both wave propagation and backtracking take
/// the first match, so this order decides every tie and must not change.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `index` in a grid `width` cells
    /// wide, keeping only those whose current value in `cells` satisfies
    /// `keep`.
    ///
    /// Neighbors that would wrap onto another row or fall off either end of
    /// the slice are never offered to `keep`.
    pub fn orthogonal(
        &mut self,
        index: usize,
        width: usize,
        cells: &[i32],
        keep: impl Fn(i32) -> bool,
    ) -> &[usize] {
        self.buf.clear();
        let col = index % width;
        // +x
        if col + 1 < width && keep(cells[index + 1]) {
            self.buf.push(index + 1);
        }
        // -x
        if col >= 1 && keep(cells[index - 1]) {
            self.buf.push(index - 1);
        }
        // +y
        if index + width < cells.len() && keep(cells[index + width]) {
            self.buf.push(index + width);
        }
        // -y
        if index >= width && keep(cells[index - width]) {
            self.buf.push(index - width);
        }
        &self.buf
    }
}
