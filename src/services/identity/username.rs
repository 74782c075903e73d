use super::slug::slugify;
use crate::core::rng::{choose, RandomSource};

pub const USERNAME_MAX: usize = 15;

/// Decorative words a username may carry.
pub const CUTE_WORDS: &[&str] = &[
    "angel", "bby", "spark", "star", "glow", "doll", "prince", "fairy", "sweet", "cutie",
];

const SEPARATORS: &[&str] = &["", "_", "."];
const MAX_TRIES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq)]
enum UsernamePattern {
    BaseNums,
    BaseSepNums,
    WordSepBaseNums,
    BaseSepWordNums,
    XoSepBaseNums,
    ItsBaseNums,
    InitialNums,
}

const PATTERNS: &[UsernamePattern] = &[
    UsernamePattern::BaseNums,
    UsernamePattern::BaseSepNums,
    UsernamePattern::WordSepBaseNums,
    UsernamePattern::BaseSepWordNums,
    UsernamePattern::XoSepBaseNums,
    UsernamePattern::ItsBaseNums,
    UsernamePattern::InitialNums,
];

impl UsernamePattern {
    #[allow(clippy::too_many_arguments)]
    fn apply(
        self,
        f: &str,
        l: &str,
        base: &str,
        word: &str,
        nums: &str,
        sep: &str,
        rng: &mut dyn RandomSource,
    ) -> String {
        match self {
            UsernamePattern::BaseNums => format!("{}{}", base, nums),
            UsernamePattern::BaseSepNums => format!("{}{}{}", base, sep, nums),
            UsernamePattern::WordSepBaseNums => format!("{}{}{}{}", word, sep, base, nums),
            UsernamePattern::BaseSepWordNums => format!("{}{}{}{}", base, sep, word, nums),
            UsernamePattern::XoSepBaseNums => format!("xo{}{}{}", sep, base, nums),
            UsernamePattern::ItsBaseNums => {
                format!("its{}{}", base, nums_or_two_digits(nums, rng))
            }
            UsernamePattern::InitialNums => format!(
                "{}{}{}{}",
                prefix(f, 5),
                sep,
                first_letter(l),
                nums_or_two_digits(nums, rng)
            ),
        }
    }
}

/// Build a decorated username from a first/last name pair. Always
/// succeeds: tries decorated candidates up to the retry ceiling, then
/// falls back to `base_NN`.
pub fn synthesize(first: &str, last: &str, rng: &mut dyn RandomSource) -> String {
    let f = slugify(first);
    let l = slugify(last);
    let plain = format!("{}{}", f, l);

    let base = make_base(&f, &l, rng);

    for _ in 0..MAX_TRIES {
        let word = *choose(rng, CUTE_WORDS);
        let nums = random_digits(rng);
        let sep = *choose(rng, SEPARATORS);
        let pattern = *choose(rng, PATTERNS);

        let raw = pattern.apply(&f, &l, &base, word, &nums, sep, rng);
        let mut u = clean_candidate(&raw, sep);

        if u == plain {
            u = format!("{}_{}", base, rng.int_in_range(10, 99));
        }

        let u = clamp(&u, USERNAME_MAX);

        // The predicate runs on the truncated candidate; truncation can
        // destroy a cute-word match and make an otherwise valid attempt fail.
        if u.len() >= 6 && has_modifier(&u) {
            return u;
        }
    }

    clamp(
        &format!("{}_{}", base, rng.int_in_range(10, 99)),
        USERNAME_MAX,
    )
}

/// Pick one of four root fragments built from the slugged name pair.
fn make_base(f: &str, l: &str, rng: &mut dyn RandomSource) -> String {
    let candidates = [
        f.to_string(),
        format!("{}{}", f, first_letter(l)),
        format!("{}{}", prefix(f, 5), prefix(l, 3)),
        format!("{}{}", prefix(f, 4), prefix(l, 4)),
    ];

    choose(rng, &candidates)
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// 12% no digits, 70% two digits, 18% three digits; leading zeros allowed.
fn random_digits(rng: &mut dyn RandomSource) -> String {
    let roll = rng.next_f64();
    let digits = if roll < 0.12 {
        0
    } else if roll < 0.82 {
        2
    } else {
        3
    };

    let mut out = String::new();
    for _ in 0..digits {
        out.push_str(&rng.int_in_range(0, 9).to_string());
    }
    out
}

fn nums_or_two_digits(nums: &str, rng: &mut dyn RandomSource) -> String {
    if nums.is_empty() {
        rng.int_in_range(10, 99).to_string()
    } else {
        nums.to_string()
    }
}

fn first_letter(l: &str) -> char {
    l.chars().next().unwrap_or('x')
}

// Slugs are pure ASCII, so byte slicing is safe here.
fn prefix(s: &str, n: usize) -> &str {
    &s[..s.len().min(n)]
}

fn clamp(s: &str, max_len: usize) -> String {
    s.chars().take(max_len).collect()
}

/// Explicit separator cleanup pass: collapse runs of two or more
/// separator chars, strip one trailing separator, then collapse any
/// remaining `_.` / `._` pair into the chosen separator.
fn clean_candidate(raw: &str, sep: &str) -> String {
    let fill = if sep.is_empty() { "_" } else { sep };

    let mut u = collapse_runs(raw, fill);
    if u.ends_with('_') || u.ends_with('.') {
        u.pop();
    }
    collapse_pairs(&u, sep)
}

fn collapse_runs(raw: &str, fill: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut run: Option<(char, usize)> = None;

    for c in raw.chars() {
        if c == '_' || c == '.' {
            run = Some(match run {
                Some((head, n)) => (head, n + 1),
                None => (c, 1),
            });
        } else {
            if let Some((head, n)) = run.take() {
                if n == 1 {
                    out.push(head);
                } else {
                    out.push_str(fill);
                }
            }
            out.push(c);
        }
    }
    if let Some((head, n)) = run {
        if n == 1 {
            out.push(head);
        } else {
            out.push_str(fill);
        }
    }
    out
}

fn collapse_pairs(s: &str, sep: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        let pair = i + 1 < chars.len()
            && ((chars[i] == '_' && chars[i + 1] == '.')
                || (chars[i] == '.' && chars[i + 1] == '_'));
        if pair {
            out.push_str(sep);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// A candidate is accepted only if it carries some visible decoration,
/// so it never reads as a bare concatenation of the real name.
fn has_modifier(u: &str) -> bool {
    u.chars().any(|c| c.is_ascii_digit())
        || u.contains('_')
        || u.contains('.')
        || CUTE_WORDS.iter().any(|w| u.contains(w))
        || u.starts_with("xo")
        || u.starts_with("its")
}
