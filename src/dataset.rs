/**
 * CosRec
 * Copyright (C) 2026 The CosRec developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use rand::{Rng, SeedableRng, XorShiftRng};

use errors::ValidationError;
use types::InteractionMatrix;

/// Builds a deterministic generator from a caller-supplied seed. The
/// generator is passed explicitly through dataset generation and the stress
/// harness, so reproducing a run only takes reusing its seed.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    // The xorshift state must not be all zeros, the constants guarantee that
    // even for seed 0.
    let low = seed as u32;
    let high = (seed >> 32) as u32;

    XorShiftRng::from_seed([low, high, 0x9E37_79B9, 0x6A09_E667])
}

pub fn check_dimensions(
    num_users: usize,
    num_items: usize,
    sparsity: f64,
) -> Result<(), ValidationError> {

    if num_users == 0 {
        return Err(ValidationError::InvalidParameter {
            parameter: "num_users",
            requirement: "a positive integer",
        });
    }

    if num_items == 0 {
        return Err(ValidationError::InvalidParameter {
            parameter: "num_items",
            requirement: "a positive integer",
        });
    }

    if !(sparsity >= 0.0 && sparsity < 1.0) {
        return Err(ValidationError::InvalidParameter {
            parameter: "sparsity",
            requirement: "a number in [0.0, 1.0)",
        });
    }

    Ok(())
}

/// Generates a synthetic interaction matrix with uniform strengths from
/// [0, 1). Each entry is zeroed independently with probability `sparsity`,
/// so the expected fraction of zeros matches the requested level without
/// favoring any row or column.
pub fn generate<R: Rng>(
    num_users: usize,
    num_items: usize,
    sparsity: f64,
    rng: &mut R,
) -> Result<InteractionMatrix, ValidationError> {

    check_dimensions(num_users, num_items, sparsity)?;

    let num_entries = num_users * num_items;
    let mut strengths = Vec::with_capacity(num_entries);

    for _ in 0..num_entries {
        let strength = rng.next_f64();

        if sparsity > 0.0 && rng.next_f64() < sparsity {
            strengths.push(0.0);
        } else {
            strengths.push(strength);
        }
    }

    Ok(InteractionMatrix::new(num_users, num_items, strengths))
}


#[cfg(test)]
mod tests {

    use dataset;
    use errors::ValidationError;

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut rng_a = dataset::seeded_rng(7);
        let mut rng_b = dataset::seeded_rng(7);

        let matrix_a = dataset::generate(20, 10, 0.5, &mut rng_a).unwrap();
        let matrix_b = dataset::generate(20, 10, 0.5, &mut rng_b).unwrap();

        assert_eq!(matrix_a, matrix_b);
    }

    #[test]
    fn different_seeds_give_different_matrices() {
        let mut rng_a = dataset::seeded_rng(7);
        let mut rng_b = dataset::seeded_rng(8);

        let matrix_a = dataset::generate(20, 10, 0.5, &mut rng_a).unwrap();
        let matrix_b = dataset::generate(20, 10, 0.5, &mut rng_b).unwrap();

        assert_ne!(matrix_a, matrix_b);
    }

    #[test]
    fn dense_regime_has_no_zeros() {
        let mut rng = dataset::seeded_rng(1);
        let matrix = dataset::generate(50, 20, 0.0, &mut rng).unwrap();

        for user in 0..matrix.num_users() {
            for &strength in matrix.row(user) {
                assert!(strength > 0.0);
            }
        }
    }

    #[test]
    fn sparse_regime_is_mostly_zeros() {
        let mut rng = dataset::seeded_rng(1);
        let matrix = dataset::generate(100, 50, 0.92, &mut rng).unwrap();

        let mut num_zeros = 0;
        for user in 0..matrix.num_users() {
            for &strength in matrix.row(user) {
                if strength == 0.0 {
                    num_zeros += 1;
                }
            }
        }

        // Binomial(5000, 0.92) stays comfortably within these bounds
        let fraction = num_zeros as f64 / 5000.0;
        assert!(fraction > 0.88 && fraction < 0.96);
    }

    #[test]
    fn strengths_are_non_negative_and_bounded() {
        let mut rng = dataset::seeded_rng(3);
        let matrix = dataset::generate(30, 30, 0.5, &mut rng).unwrap();

        for user in 0..matrix.num_users() {
            for &strength in matrix.row(user) {
                assert!(strength >= 0.0 && strength < 1.0);
            }
        }
    }

    #[test]
    fn rejects_zero_users_before_generation() {
        let mut rng = dataset::seeded_rng(1);
        let result = dataset::generate(0, 10, 0.5, &mut rng);

        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidParameter {
                parameter: "num_users",
                requirement: "a positive integer",
            },
        );
    }

    #[test]
    fn rejects_out_of_range_sparsity() {
        let mut rng = dataset::seeded_rng(1);

        assert!(dataset::generate(10, 10, 1.0, &mut rng).is_err());
        assert!(dataset::generate(10, 10, -0.1, &mut rng).is_err());
        assert!(dataset::generate(10, 10, 0.0, &mut rng).is_ok());
    }
}
