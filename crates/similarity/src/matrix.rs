//! Dense pairwise cosine similarity matrix.

use crate::tfidf::FeatureVector;
use rayon::prelude::*;

/// N×N cosine similarities, row-major
///
/// Built once from normalized feature vectors. Entries lie in `[0, 1]`,
/// the diagonal is exactly 1.0 and `get(i, j) == get(j, i)` bitwise.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all pairs, one row per rayon task
    pub fn from_vectors(vectors: &[FeatureVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0f32; n * n];

        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        1.0
                    } else {
                        vectors[i].dot(&vectors[j]).clamp(0.0, 1.0)
                    };
                }
            });
        }

        Self { n, data }
    }

    /// Number of movies (rows)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between two movies, `None` when out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        (i < self.n && j < self.n).then(|| self.data[i * self.n + j])
    }

    /// Similarities of one movie to every movie, in catalog order
    pub fn row(&self, i: usize) -> Option<&[f32]> {
        (i < self.n).then(|| &self.data[i * self.n..(i + 1) * self.n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(indices: &[usize], values: &[f32]) -> FeatureVector {
        FeatureVector::new(4, indices.to_vec(), values.to_vec()).unwrap()
    }

    #[test]
    fn test_matrix_shape_and_diagonal() {
        let vectors = vec![
            vector(&[0, 1], &[0.6, 0.8]),
            vector(&[1, 2], &[0.8, 0.6]),
            vector(&[], &[]),
        ];
        let matrix = SimilarityMatrix::from_vectors(&vectors);

        assert_eq!(matrix.len(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), Some(1.0));
        }
        // A movie with no terms still matches itself, nothing else
        assert_eq!(matrix.get(2, 0), Some(0.0));
        assert!((matrix.get(0, 1).unwrap() - 0.64).abs() < 1e-6);
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.row(1).map(<[f32]>::len), Some(3));
        assert!(matrix.row(3).is_none());
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let vectors = vec![
            vector(&[0, 1, 3], &[0.5, 0.5, 0.70710677]),
            vector(&[1, 2, 3], &[0.3, 0.4, 0.8660254]),
            vector(&[0, 3], &[0.70710677, 0.70710677]),
        ];
        let matrix = SimilarityMatrix::from_vectors(&vectors);

        for i in 0..3 {
            for j in 0..3 {
                let a = matrix.get(i, j).unwrap();
                let b = matrix.get(j, i).unwrap();
                assert_eq!(a.to_bits(), b.to_bits());
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SimilarityMatrix::from_vectors(&[]);
        assert!(matrix.is_empty());
        assert!(matrix.row(0).is_none());
    }
}
