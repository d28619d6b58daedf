extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod dataset;
pub mod errors;
pub mod io;
pub mod recommend;
pub mod stress;
pub mod types;
pub mod utils;


use errors::ValidationError;
use types::{InteractionMatrix, SimilarityVector};

/// The full parameter set collected at the boundary. Validation happens here
/// once, before any matrix is allocated; everything downstream assumes
/// validated inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub num_users: usize,
    pub num_items: usize,
    pub sparsity: f64,
    pub target_user: usize,
    pub k: usize,
}

impl Params {

    pub fn validate(&self) -> Result<(), ValidationError> {

        dataset::check_dimensions(self.num_users, self.num_items, self.sparsity)?;

        if self.k == 0 {
            return Err(ValidationError::InvalidParameter {
                parameter: "k",
                requirement: "a positive integer",
            });
        }

        if self.target_user >= self.num_users {
            return Err(ValidationError::TargetUserOutOfRange {
                target_user: self.target_user,
                num_users: self.num_users,
            });
        }

        Ok(())
    }
}

/// Computes the cosine similarity between the target user's row and every
/// user row of the matrix, in one batched pass: the matrix-vector dot
/// products and the row norms are accumulated together while streaming over
/// the matrix once, instead of issuing a per-pair similarity call for each
/// user. The result is aligned to user index and always has length
/// `num_users`; the self-similarity slot is left in place and excluded later
/// by the recommender.
///
/// A row with norm zero scores 0.0 against everything, including another
/// zero row. NaN never escapes this function.
pub fn similarity(
    matrix: &InteractionMatrix,
    target_user: usize,
) -> Result<SimilarityVector, ValidationError> {

    if target_user >= matrix.num_users() {
        return Err(ValidationError::TargetUserOutOfRange {
            target_user,
            num_users: matrix.num_users(),
        });
    }

    let target_row = matrix.row(target_user);
    let target_norm = target_row.iter()
        .map(|&strength| strength * strength)
        .sum::<f64>()
        .sqrt();

    let mut similarities = Vec::with_capacity(matrix.num_users());

    for user in 0..matrix.num_users() {

        let mut dot = 0.0;
        let mut squared_norm = 0.0;

        for (&strength, &target_strength) in matrix.row(user).iter().zip(target_row.iter()) {
            dot += strength * target_strength;
            squared_norm += strength * strength;
        }

        let denominator = squared_norm.sqrt() * target_norm;

        let score = if denominator == 0.0 {
            0.0
        } else {
            // Round-off can push a score slightly past the cosine bounds
            (dot / denominator).min(1.0).max(-1.0)
        };

        similarities.push(score);
    }

    Ok(similarities)
}


#[cfg(test)]
mod tests {

    use similarity;
    use errors::ValidationError;
    use types::InteractionMatrix;

    #[test]
    fn rejects_out_of_range_target_user() {
        let matrix = InteractionMatrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0, 4.0],
        ]);

        let result = similarity(&matrix, 2);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::TargetUserOutOfRange { target_user: 2, num_users: 2 },
        );
    }

    #[test]
    fn vector_is_aligned_to_user_index() {
        let matrix = InteractionMatrix::from_rows(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
        ]);

        let similarities = similarity(&matrix, 0).unwrap();

        assert_eq!(similarities.len(), 3);
        assert!((similarities[0] - 1.0).abs() < 1e-12);
        assert!(similarities[1].abs() < 1e-12);
        assert!((similarities[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_rows_score_zero() {
        let matrix = InteractionMatrix::from_rows(vec![
            vec![2.0, 0.0, 0.0],
            vec![0.0, 0.0, 5.0],
        ]);

        let similarities = similarity(&matrix, 0).unwrap();

        assert!(similarities[1].abs() < 1e-12);
    }

    #[test]
    fn zero_row_scores_zero_against_everything() {
        let matrix = InteractionMatrix::from_rows(vec![
            vec![0.0, 0.0, 0.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 0.0, 0.0],
        ]);

        let similarities = similarity(&matrix, 0).unwrap();

        // Self, non-zero and zero counterparts all resolve to exactly 0.0
        assert_eq!(similarities, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn scores_stay_within_cosine_bounds() {
        let mut rng = ::dataset::seeded_rng(11);
        let matrix = ::dataset::generate(40, 25, 0.3, &mut rng).unwrap();

        for target_user in 0..matrix.num_users() {
            let similarities = similarity(&matrix, target_user).unwrap();

            for &score in similarities.iter() {
                // Non-negative strengths keep cosine within [0, 1]
                assert!(score >= 0.0 && score <= 1.0);
                assert!(!score.is_nan());
            }
        }
    }

    #[test]
    fn collinear_rows_score_one() {
        let matrix = InteractionMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 6.0],
        ]);

        let similarities = similarity(&matrix, 0).unwrap();

        assert!((similarities[1] - 1.0).abs() < 1e-12);
    }
}
