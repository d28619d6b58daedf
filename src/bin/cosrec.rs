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

extern crate cosrec;
extern crate getopts;

use std::env;
use std::error::Error;
use std::process;
use std::time::Instant;

use getopts::Options;

use cosrec::{dataset, io, recommend, stress, utils, Params};

const NUM_STRESS_STEPS: usize = 3;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("u", "users", "Number of users in the generated dataset (optional, defaults \
        to 500).", "NUMBER");
    opts.optopt("i", "items", "Number of items in the generated dataset (optional, defaults \
        to 300).", "NUMBER");
    opts.optopt("s", "sparsity", "Fraction of zero entries in the generated dataset, in the \
        range [0.0, 1.0) (optional, defaults to 0.92).", "FRACTION");
    opts.optopt("t", "target-user", "User to compute recommendations for (optional, defaults \
        to 0).", "NUMBER");
    opts.optopt("k", "top-k", "Number of similar users to recommend (optional, defaults \
        to 5).", "NUMBER");
    opts.optopt("r", "seed", "Seed for the dataset generator, reusing a seed reproduces the \
        dataset (optional, defaults to 42).", "NUMBER");
    opts.optopt("o", "outputfile", "Output file name for the JSON results (optional, output \
        will be written to stdout by default).", "PATH");
    opts.optopt("x", "stress", "Run a stress test instead of a single query: times the \
        similarity computation on datasets growing up to NUMBER users at 92% sparsity, \
        with half as many items as users and user 0 as the target. The --users, --items, \
        --sparsity and --target-user options do not apply in this mode, only --top-k and \
        --seed are honored.", "NUMBER");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let params = Params {
        num_users: match matches.opt_get_default("u", 500) {
            Ok(num_users) => num_users,
            Err(failure) => return print_option_hint_and_exit(&program, opts, "u", failure),
        },
        num_items: match matches.opt_get_default("i", 300) {
            Ok(num_items) => num_items,
            Err(failure) => return print_option_hint_and_exit(&program, opts, "i", failure),
        },
        sparsity: match matches.opt_get_default("s", 0.92) {
            Ok(sparsity) => sparsity,
            Err(failure) => return print_option_hint_and_exit(&program, opts, "s", failure),
        },
        target_user: match matches.opt_get_default("t", 0) {
            Ok(target_user) => target_user,
            Err(failure) => return print_option_hint_and_exit(&program, opts, "t", failure),
        },
        k: match matches.opt_get_default("k", 5) {
            Ok(k) => k,
            Err(failure) => return print_option_hint_and_exit(&program, opts, "k", failure),
        },
    };

    let seed: u64 = match matches.opt_get_default("r", 42) {
        Ok(seed) => seed,
        Err(failure) => return print_option_hint_and_exit(&program, opts, "r", failure),
    };

    let stress_size: Option<usize> = match matches.opt_get("x") {
        Ok(stress_size) => stress_size,
        Err(failure) => return print_option_hint_and_exit(&program, opts, "x", failure),
    };

    let output_path = matches.opt_str("o");

    let outcome = match stress_size {
        Some(size) => run_stress_test(size, params.k, seed, output_path),
        None => recommend_similar_users(&params, seed, output_path),
    };

    if let Err(failure) = outcome {
        eprintln!("{}", failure);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn print_option_hint_and_exit<F>(
    program: &str,
    opts: Options,
    option: &str,
    failure: F,
) where F: Error {

    let hint = format!("Problem with option '{}': {}", option, failure.to_string());
    print_usage_and_exit(program, opts, Some(&hint))
}

fn recommend_similar_users(
    params: &Params,
    seed: u64,
    output_path: Option<String>,
) -> Result<(), Box<Error>> {

    params.validate()?;

    println!(
        "Generating a {} x {} interaction matrix with sparsity {} (seed {})",
        params.num_users,
        params.num_items,
        params.sparsity,
        seed,
    );

    let generation_start = Instant::now();
    let mut rng = dataset::seeded_rng(seed);
    let matrix = dataset::generate(params.num_users, params.num_items, params.sparsity, &mut rng)?;
    println!("Dataset generated in {}ms.", utils::to_millis(generation_start.elapsed()));

    let similarities = cosrec::similarity(&matrix, params.target_user)?;
    let ranking = recommend::top_k(&similarities, params.target_user, params.k);

    println!("Top-{} similar users for user {}:", params.k, params.target_user);
    for scored_user in ranking.iter() {
        println!("User {} -> similarity {:.4}", scored_user.user, scored_user.score);
    }

    io::write_recommendations(params.target_user, &ranking, output_path)?;

    Ok(())
}

fn run_stress_test(
    size: usize,
    k: usize,
    seed: u64,
    output_path: Option<String>,
) -> Result<(), Box<Error>> {

    // Grow towards the requested size in doubling steps
    let base_size = std::cmp::max(size >> (NUM_STRESS_STEPS - 1), 1);
    let scales = stress::default_scales(base_size, NUM_STRESS_STEPS);

    println!("Running stress test with {} scales (seed {})", scales.len(), seed);

    let results = stress::stress_test(&scales, k, seed)?;

    for result in results.iter() {
        println!(
            "{} users x {} items (sparsity {:.2}): query completed in {:.4} seconds",
            result.scale.num_users,
            result.scale.num_items,
            result.scale.sparsity,
            utils::to_seconds(result.elapsed),
        );
    }

    io::write_stress_results(&results, output_path)?;

    Ok(())
}
