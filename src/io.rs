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

use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::fs::File;
use std::path::Path;

use recommend::ScoredUser;
use stress::StressResult;
use utils;

/// Struct used for JSON serialization of a ranked recommendation. Field
/// names will be used in JSON.
#[derive(Serialize)]
struct Recommendations {
    for_user: u64,
    ranked_users: Vec<RankedUser>,
}

#[derive(Serialize)]
struct RankedUser {
    user: u32,
    score: f64,
}

/// Struct used for JSON serialization of one stress-test measurement.
#[derive(Serialize)]
struct Measurement {
    num_users: usize,
    num_items: usize,
    sparsity: f64,
    seconds: f64,
}

fn open_output(path: Option<String>) -> io::Result<Box<Write>> {
    let out: Box<Write> = match path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout()),
    };

    Ok(out)
}

/// Output a ranked recommendation as a single JSON object. If an
/// `output_path` is supplied, we write to a file at the specified path,
/// otherwise, we output to stdout.
pub fn write_recommendations(
    target_user: usize,
    ranking: &[ScoredUser],
    output_path: Option<String>,
) -> io::Result<()> {

    let mut out = open_output(output_path)?;

    let ranked_users = ranking.iter()
        .map(|scored_user| RankedUser { user: scored_user.user, score: scored_user.score })
        .collect();

    let recommendations_as_json = json!(
        Recommendations {
            for_user: target_user as u64,
            ranked_users,
        });

    write!(out, "{}\n", recommendations_as_json.to_string())?;

    Ok(())
}

/// Output the stress-test measurements in JSON format, one object per line
/// in scale order.
pub fn write_stress_results(
    results: &[StressResult],
    output_path: Option<String>,
) -> io::Result<()> {

    let mut out = open_output(output_path)?;

    for result in results.iter() {

        let measurement_as_json = json!(
            Measurement {
                num_users: result.scale.num_users,
                num_items: result.scale.num_items,
                sparsity: result.scale.sparsity,
                seconds: utils::to_seconds(result.elapsed),
            });

        write!(out, "{}\n", measurement_as_json.to_string())?;
    }

    Ok(())
}
