//! Hyphenation code vectors.
//!
//! A hyphenation code assigns a small weight to each gap of a letter sequence.
//! Odd weights allow a break at the gap and even weights forbid it;
//!   when several patterns have something to say about the same gap, the largest weight wins.

use std::fmt;

/// Vector of hyphenation weights.
///
/// The weight at index `i` belongs to the gap before the `i`-th letter
///   of the sequence the code is attached to,
///   so a code for `k` letters has `k+1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HyphenationCode(Vec<u8>);

impl HyphenationCode {
    /// Returns a code of the given length with all weights zero.
    pub fn zeros(len: usize) -> HyphenationCode {
        HyphenationCode(vec![0; len])
    }

    pub fn from_digits(digits: Vec<u8>) -> HyphenationCode {
        HyphenationCode(digits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the weight at the given gap, or zero if the gap is past the end.
    pub fn get(&self, i: usize) -> u8 {
        self.0.get(i).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns whether the weight at the given gap allows a break.
    pub fn is_odd(&self, i: usize) -> bool {
        self.get(i) % 2 == 1
    }

    /// Returns whether every weight is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    /// Superimposes another code onto this one, starting at the given offset.
    ///
    /// Each weight becomes the maximum of itself and the corresponding weight of `other`.
    /// The vector grows if `other` extends past its end.
    ///
    /// ```
    /// # use liang::HyphenationCode;
    /// let mut code = HyphenationCode::from_digits(vec![0, 3, 0]);
    /// code.superimpose(1, &HyphenationCode::from_digits(vec![2, 4, 1]));
    /// assert_eq!(code.as_slice(), &[0, 3, 4, 1]);
    /// ```
    pub fn superimpose(&mut self, start: usize, other: &HyphenationCode) {
        let end = start + other.0.len();
        if end > self.0.len() {
            self.0.resize(end, 0);
        }
        for (mine, theirs) in self.0[start..end].iter_mut().zip(&other.0) {
            if *theirs > *mine {
                *mine = *theirs;
            }
        }
    }
}

impl fmt::Display for HyphenationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in &self.0 {
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! superimpose_tests {
        ( $( ($name: ident, $base: expr, $start: expr, $other: expr, $want: expr), )+ ) => {
            $(
            #[test]
            fn $name() {
                let mut code = HyphenationCode::from_digits($base.to_vec());
                code.superimpose($start, &HyphenationCode::from_digits($other.to_vec()));
                let want: Vec<u8> = $want.to_vec();
                assert_eq!(code.as_slice(), want.as_slice());
            }
            )+
        };
    }

    superimpose_tests!(
        (same_length, [0, 1, 2], 0, [2, 1, 0], [2, 1, 2]),
        (offset, [0, 1, 2, 0], 2, [1, 5], [0, 1, 2, 5]),
        (grows, [1], 2, [0, 3], [1, 0, 0, 3]),
        (empty_other, [4, 4], 1, [], [4, 4]),
        (max_not_sum, [3, 3], 0, [3, 3], [3, 3]),
    );

    fn sample_codes() -> Vec<HyphenationCode> {
        vec![
            HyphenationCode::from_digits(vec![]),
            HyphenationCode::from_digits(vec![0, 0, 0]),
            HyphenationCode::from_digits(vec![1, 0, 4]),
            HyphenationCode::from_digits(vec![0, 5, 2, 3]),
            HyphenationCode::from_digits(vec![9]),
        ]
    }

    #[test]
    fn superimpose_is_idempotent() {
        for a in sample_codes() {
            for b in sample_codes() {
                let mut once = a.clone();
                once.superimpose(0, &b);
                let mut twice = once.clone();
                twice.superimpose(0, &b);
                assert_eq!(once, twice, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn superimpose_is_monotone() {
        for a in sample_codes() {
            for b in sample_codes() {
                let mut c = a.clone();
                c.superimpose(0, &b);
                for i in 0..c.len() {
                    assert!(c.get(i) >= a.get(i), "a={a} b={b} i={i}");
                    assert!(c.get(i) >= b.get(i), "a={a} b={b} i={i}");
                }
            }
        }
    }

    #[test]
    fn parity() {
        let code = HyphenationCode::from_digits(vec![0, 1, 2, 3]);
        let odd: Vec<bool> = (0..5).map(|i| code.is_odd(i)).collect();
        assert_eq!(odd, vec![false, true, false, true, false]);
    }
}
