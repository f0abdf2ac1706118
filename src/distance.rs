/*!
distance module

Weighted Damerau-Levenshtein distance used to rank dictionary entries.

Insertions and deletions always cost `1.0`. Substitutions and adjacent
transpositions cost `1.0` unless the characters involved form one of the
common typo pairs below, in which case they cost `0.5`:

- substitutions: `I`/`E`, `A`/`E`, `O`/`U`
- transpositions: `IE`, `TH`, `ER`, `ON` (either orientation)

Both tables are keyed by the unordered pair, written with the smaller
character first, so `substitution_cost('E', 'I')` and
`substitution_cost('I', 'E')` look up the same `"EI"` entry.

The result is a ranking score, not a metric: the transposition shortcut can
violate the triangle inequality.
*/

/// Cost of inserting or deleting one character.
pub const INDEL_COST: f64 = 1.0;

/// Cost of a substitution or transposition not listed in the tables.
pub const DEFAULT_EDIT_COST: f64 = 1.0;

/// Discounted substitution costs, keyed by the sorted character pair.
pub static SUBSTITUTION_COSTS: phf::Map<&'static str, f64> = phf::phf_map! {
    "AE" => 0.5,
    "EI" => 0.5,
    "OU" => 0.5,
};

/// Discounted adjacent-transposition costs, keyed by the sorted character pair.
pub static TRANSPOSITION_COSTS: phf::Map<&'static str, f64> = phf::phf_map! {
    "EI" => 0.5,
    "HT" => 0.5,
    "ER" => 0.5,
    "NO" => 0.5,
};

/// Write the unordered pair `{a, b}` into `buf` as an uppercase key with the
/// smaller character first.
fn pair_key(a: char, b: char, buf: &mut [u8; 8]) -> &str {
    let (a, b) = (a.to_ascii_uppercase(), b.to_ascii_uppercase());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let n = lo.encode_utf8(&mut buf[..4]).len();
    let m = hi.encode_utf8(&mut buf[n..n + 4]).len();
    std::str::from_utf8(&buf[..n + m]).unwrap_or_default()
}

fn table_cost(table: &phf::Map<&'static str, f64>, a: char, b: char) -> f64 {
    let mut buf = [0u8; 8];
    table
        .get(pair_key(a, b, &mut buf))
        .copied()
        .unwrap_or(DEFAULT_EDIT_COST)
}

/// Cost of substituting `a` with `b`. Zero when the characters are equal.
pub fn substitution_cost(a: char, b: char) -> f64 {
    if a == b {
        return 0.0;
    }
    table_cost(&SUBSTITUTION_COSTS, a, b)
}

/// Cost of swapping the adjacent characters `a` and `b`.
pub fn transposition_cost(a: char, b: char) -> f64 {
    table_cost(&TRANSPOSITION_COSTS, a, b)
}

/// Weighted Damerau-Levenshtein (optimal string alignment) distance.
///
/// Runs in `O(|a| * |b|)` time and space over `char`s. Returns `0.0` exactly
/// when `a == b`, and the character count of the other string when either
/// side is empty.
pub fn weighted_distance(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (alen, blen) = (a_chars.len(), b_chars.len());

    if alen == 0 {
        return blen as f64 * INDEL_COST;
    }
    if blen == 0 {
        return alen as f64 * INDEL_COST;
    }

    let mut dp: Vec<Vec<f64>> = vec![vec![0.0; blen + 1]; alen + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as f64 * INDEL_COST;
    }
    for j in 0..=blen {
        dp[0][j] = j as f64 * INDEL_COST;
    }

    for i in 1..=alen {
        for j in 1..=blen {
            let deletion = dp[i - 1][j] + INDEL_COST;
            let insertion = dp[i][j - 1] + INDEL_COST;
            let substitution =
                dp[i - 1][j - 1] + substitution_cost(a_chars[i - 1], b_chars[j - 1]);
            let mut cell = deletion.min(insertion).min(substitution);

            // transposition
            if i > 1
                && j > 1
                && a_chars[i - 1] == b_chars[j - 2]
                && a_chars[i - 2] == b_chars[j - 1]
            {
                let swapped =
                    dp[i - 2][j - 2] + transposition_cost(a_chars[i - 2], a_chars[i - 1]);
                cell = cell.min(swapped);
            }

            dp[i][j] = cell;
        }
    }

    dp[alen][blen]
}
