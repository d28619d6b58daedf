use std::cmp;
use std::time::{Duration, Instant};

use dataset;
use errors::ValidationError;
use recommend;
use similarity;

/// One dataset size the harness should exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    pub num_users: usize,
    pub num_items: usize,
    pub sparsity: f64,
}

/// Elapsed wall-clock time of one similarity + ranking query at a scale.
#[derive(Debug, Clone)]
pub struct StressResult {
    pub scale: Scale,
    pub elapsed: Duration,
}

/// Runs the similarity + top-k pipeline once per scale, in the given order,
/// and reports the elapsed wall-clock time of the query step. Dataset
/// generation is excluded from the timing at every scale, so the reported
/// numbers isolate how the engine itself grows with the data. The target
/// user is fixed at 0 and each matrix is dropped when its iteration ends.
pub fn stress_test(
    scales: &[Scale],
    k: usize,
    seed: u64,
) -> Result<Vec<StressResult>, ValidationError> {

    if k == 0 {
        return Err(ValidationError::InvalidParameter {
            parameter: "k",
            requirement: "a positive integer",
        });
    }

    let mut rng = dataset::seeded_rng(seed);
    let mut results = Vec::with_capacity(scales.len());

    for scale in scales {

        let matrix = dataset::generate(
            scale.num_users,
            scale.num_items,
            scale.sparsity,
            &mut rng,
        )?;

        // A degenerate scale such as a single user still reports a timing,
        // its ranking is simply empty after self-exclusion
        let query_start = Instant::now();

        let similarities = similarity(&matrix, 0)?;
        let _ranking = recommend::top_k(&similarities, 0, k);

        let elapsed = query_start.elapsed();

        results.push(StressResult { scale: scale.clone(), elapsed });
    }

    Ok(results)
}

/// The stress ladder used by the command line tool: matrices at 92% sparsity
/// with half as many items as users, doubling the user count at every step.
pub fn default_scales(base_size: usize, num_steps: usize) -> Vec<Scale> {
    (0..num_steps)
        .map(|step| {
            let num_users = base_size << step;

            Scale {
                num_users,
                num_items: cmp::max(num_users / 2, 1),
                sparsity: 0.92,
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {

    use errors::ValidationError;
    use stress;
    use stress::Scale;

    #[test]
    fn reports_one_result_per_scale_in_order() {
        let scales = vec![
            Scale { num_users: 10, num_items: 5, sparsity: 0.5 },
            Scale { num_users: 20, num_items: 10, sparsity: 0.5 },
            Scale { num_users: 40, num_items: 20, sparsity: 0.5 },
        ];

        let results = stress::stress_test(&scales, 5, 42).unwrap();

        assert_eq!(results.len(), 3);
        for (result, scale) in results.iter().zip(scales.iter()) {
            assert_eq!(&result.scale, scale);
        }
    }

    #[test]
    fn degenerate_single_user_scale_still_runs() {
        let scales = vec![
            Scale { num_users: 1, num_items: 3, sparsity: 0.0 },
            Scale { num_users: 5, num_items: 3, sparsity: 0.0 },
        ];

        let results = stress::stress_test(&scales, 5, 42).unwrap();

        assert_eq!(results.len(), 2);
    }

    #[test]
    fn invalid_scale_surfaces_a_validation_error() {
        let scales = vec![
            Scale { num_users: 0, num_items: 3, sparsity: 0.0 },
        ];

        assert!(stress::stress_test(&scales, 5, 42).is_err());
    }

    #[test]
    fn zero_k_is_rejected_before_any_scale_runs() {
        let scales = vec![
            Scale { num_users: 10, num_items: 5, sparsity: 0.5 },
        ];

        assert_eq!(
            stress::stress_test(&scales, 0, 42).unwrap_err(),
            ValidationError::InvalidParameter {
                parameter: "k",
                requirement: "a positive integer",
            },
        );
    }

    #[test]
    fn scale_ladder_doubles_user_counts() {
        let scales = stress::default_scales(100, 3);

        assert_eq!(scales.len(), 3);
        assert_eq!(scales[0].num_users, 100);
        assert_eq!(scales[1].num_users, 200);
        assert_eq!(scales[2].num_users, 400);
        assert_eq!(scales[2].num_items, 200);
    }
}
