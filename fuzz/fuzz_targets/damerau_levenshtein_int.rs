#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rsdameraulevenshtein::adapters::int;
use rsdameraulevenshtein::distance::damerau_levenshtein::{self, Algorithm, Args};

#[derive(Arbitrary, Debug)]
pub struct Sequences {
    pub s1: Vec<i64>,
    pub s2: Vec<i64>,
}

fn fuzz(seqs: Sequences) {
    let metrics = int::metrics(&seqs.s1, &seqs.s2).expect("fits into memory");
    assert!((0.0..=1.0).contains(&metrics.normalized_distance));
    assert!((metrics.similarity - (1.0 - metrics.normalized_distance)).abs() < f64::EPSILON);

    let full_matrix = Args::default().algorithm(Algorithm::LowranceWagner);
    assert_eq!(
        Ok(metrics.distance),
        damerau_levenshtein::distance(seqs.s1.iter(), seqs.s2.iter(), &full_matrix)
    );
}

fuzz_target!(|seqs: Sequences| {
    fuzz(seqs);
});
