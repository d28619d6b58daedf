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

use std::error::Error;
use std::fmt;

/// Boundary validation failures. All parameter checking happens here, before
/// any matrix is allocated; the similarity engine and the recommender are
/// total over inputs that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidParameter {
        parameter: &'static str,
        requirement: &'static str,
    },
    TargetUserOutOfRange {
        target_user: usize,
        num_users: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValidationError::InvalidParameter { parameter, requirement } => {
                write!(formatter, "Invalid parameter '{}': must be {}.", parameter, requirement)
            },
            ValidationError::TargetUserOutOfRange { target_user, num_users } => {
                write!(
                    formatter,
                    "Target user {} is out of range, expected a user id below {}.",
                    target_user,
                    num_users,
                )
            },
        }
    }
}

impl Error for ValidationError {}
