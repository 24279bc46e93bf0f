//! Benchmark workloads for tstree.
//!
//! Deterministic key sets shared by the Criterion benchmarks so that runs
//! are comparable across machines and revisions.

/// Generates `count` distinct lowercase words in a scrambled order.
///
/// Words are base-26 renderings of a multiplicative permutation of
/// `0..count`, padded to a common length, so consecutive outputs rarely
/// share a prefix.
pub fn synthetic_words(count: usize) -> Vec<String> {
    let width = word_width(count);
    // 7919 is prime, so multiplying by it permutes 0..count unless count is
    // a multiple of it.
    let modulus = count.max(1);
    let multiplier = if modulus % 7919 == 0 { 1 } else { 7919 };

    (0..count)
        .map(|i| render((i * multiplier) % modulus, width))
        .collect()
}

/// Returns every word in `words` that begins with `prefix`, in input order.
pub fn words_with_prefix<'a>(words: &'a [String], prefix: &str) -> Vec<&'a str> {
    words
        .iter()
        .filter(|w| w.starts_with(prefix))
        .map(String::as_str)
        .collect()
}

fn word_width(count: usize) -> usize {
    let mut width = 1;
    let mut capacity = 26usize;
    while capacity < count {
        capacity = capacity.saturating_mul(26);
        width += 1;
    }
    width
}

fn render(mut n: usize, width: usize) -> String {
    let mut bytes = vec![b'a'; width];
    for slot in bytes.iter_mut().rev() {
        *slot = b'a' + (n % 26) as u8;
        n /= 26;
    }
    bytes.into_iter().map(char::from).collect()
}
