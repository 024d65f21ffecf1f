//! Gestalt (Ratcliff/Obershelp) similarity over characters.
//!
//! The score is `2 * M / T` where `T` is the total character count of both
//! strings and `M` the number of characters in matching blocks found by
//! repeatedly taking the longest common substring and recursing on the
//! unmatched text to its left and right.

use std::collections::HashMap;

/// Sequences at least this long drop "popular" characters from the index,
/// the same heuristic classic sequence matchers use to stay near-linear.
const POPULAR_MIN_LEN: usize = 200;

/// Similarity ratio in `[0.0, 1.0]`; `0.0` when either side is empty.
///
/// The block alignment prefers the leftmost longest match, which is
/// order-sensitive, so the pair is put in a fixed order first to keep the
/// score symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let matched = SequenceIndex::new(&b).matching_characters(&a);
    (2 * matched) as f64 / (a.len() + b.len()) as f64
}

struct SequenceIndex<'a> {
    b: &'a [char],
    positions: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceIndex<'a> {
    fn new(b: &'a [char]) -> Self {
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            positions.entry(*c).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            positions.retain(|_, js| js.len() <= limit);
        }

        Self { b, positions }
    }

    fn matching_characters(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, size) = self.longest_match(a, alo, ahi, blo, bhi);
            if size == 0 {
                continue;
            }
            total += size;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + size < ahi && j + size < bhi {
                pending.push((i + size, ahi, j + size, bhi));
            }
        }

        total
    }

    /// Longest block `a[i..i+size] == b[j..j+size]` inside the window, ties
    /// broken towards the smallest `i`, then the smallest `j`.
    fn longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        // run length of the match ending at b[j], for the previous a index
        let mut run_at: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut next_run: HashMap<usize, usize> = HashMap::new();
            if let Some(js) = self.positions.get(c) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_at.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            run_at = next_run;
        }

        // Characters dropped as popular never seed a block, but they may
        // still extend one on either side.
        while best_i > alo && best_j > blo && a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        (best_i, best_j, best_size)
    }
}
