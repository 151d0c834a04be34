use std::ops::{Index, IndexMut};

/// A row-major 2D grid of values addressed by `(x, y)`.
///
/// Planes back every channel of an [`Image`](crate::Image) and every
/// [`ScalarField`](crate::ScalarField); the length of `values` always equals
/// `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    values: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Plane<T> {
    /// Wraps row-major values.
    ///
    /// # Panics
    /// Panics if `values.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, values: Vec<T>) -> Self {
        assert_eq!(
            values.len(),
            width * height,
            "values length must equal width * height"
        );
        Self {
            values,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns true if `other` has the same width and height.
    #[inline]
    pub fn same_size<U>(&self, other: &Plane<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Applies `f` to every value, keeping the layout.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Plane<U> {
        Plane {
            values: self.values.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Combines two planes of equal size value by value.
    ///
    /// # Panics
    /// Panics if the sizes differ.
    pub fn zip_map<U, V>(&self, other: &Plane<U>, mut f: impl FnMut(&T, &U) -> V) -> Plane<V> {
        assert!(self.same_size(other), "plane size mismatch");
        Plane {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Iterates `((x, y), &value)` in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let width = self.width;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i % width, i / width), v))
    }
}

impl<T: Clone> Plane<T> {
    pub fn new_filled(width: usize, height: usize, value: T) -> Self {
        Self {
            values: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

impl<T: Clone + Default> Plane<T> {
    pub fn new_default(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, T::default())
    }
}

impl<T> Index<(usize, usize)> for Plane<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        debug_assert!(self.contains(x, y), "({x}, {y}) out of bounds");
        &self.values[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Plane<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        debug_assert!(self.contains(x, y), "({x}, {y}) out of bounds");
        &mut self.values[y * self.width + x]
    }
}
