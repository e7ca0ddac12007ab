#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rsdameraulevenshtein::distance::damerau_levenshtein::{self, Algorithm, Args, BatchComparator};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let len1 = texts.s1.chars().count();
    let len2 = texts.s2.chars().count();

    let zhao = Args::default();
    let full_matrix = Args::default().algorithm(Algorithm::LowranceWagner);

    let dist = damerau_levenshtein::distance(texts.s1.chars(), texts.s2.chars(), &zhao)
        .expect("fits into memory");
    assert!(dist <= len1.max(len2));
    assert!(dist >= len1.abs_diff(len2));

    assert_eq!(
        Ok(dist),
        damerau_levenshtein::distance(texts.s1.chars(), texts.s2.chars(), &full_matrix)
    );
    assert_eq!(
        Ok(dist),
        damerau_levenshtein::distance(texts.s2.chars(), texts.s1.chars(), &zhao)
    );
    assert_eq!(
        Ok(dist),
        BatchComparator::new(texts.s1.chars()).distance(texts.s2.chars(), &zhao)
    );
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
