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

/// Per-user cosine similarity scores, aligned to user index.
pub type SimilarityVector = Vec<f64>;

/// Dense row-major user-item matrix of non-negative interaction strengths.
/// A value of zero means "no interaction". The dense representation is kept
/// for all sparsity regimes, so memory stays O(users * items) and stress-test
/// timings remain comparable between dense and sparse datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    num_users: usize,
    num_items: usize,
    strengths: Vec<f64>,
}

impl InteractionMatrix {

    pub fn new(num_users: usize, num_items: usize, strengths: Vec<f64>) -> Self {
        assert_eq!(strengths.len(), num_users * num_items);
        InteractionMatrix { num_users, num_items, strengths }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let num_users = rows.len();
        let num_items = rows.first().map_or(0, |row| row.len());

        let mut strengths = Vec::with_capacity(num_users * num_items);
        for row in rows {
            assert_eq!(row.len(), num_items);
            strengths.extend(row);
        }

        InteractionMatrix { num_users, num_items, strengths }
    }

    pub fn num_users(&self) -> usize {
        self.num_users
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn row(&self, user: usize) -> &[f64] {
        let start = user * self.num_items;
        &self.strengths[start..start + self.num_items]
    }
}
