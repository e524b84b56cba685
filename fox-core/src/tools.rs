use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

const NAME_PREFIXES: [&str; 17] = [
    "", "bel", "nar", "xan", "bell", "natr", "ev", "pr", "wof", "spec", "ler", "dom", "mik",
    "vit", "sol", "zum", "qr",
];

const NAME_SUFFIXES: [&str; 19] = [
    "", "us", "ix", "ox", "ith", "ath", "um", "ator", "or", "axia", "imus", "ais", "itur",
    "orex", "o", "y", "er", "alt", "etrot",
];

const NAME_STEMS: [&str; 30] = [
    "adur", "aes", "anim", "apoll", "imac", "educ", "equis", "extr", "guius", "hann", "equi",
    "amora", "hum", "iace", "ille", "inept", "iuv", "obe", "ocul", "orbis", "allon", "oguod",
    "attum", "ayip", "olmar", "ackmet", "urgoe", "ywert", "iger", "ipto",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, table: &[&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

/// prefix + suffix + stem, first letter upper-cased.
pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let raw = format!(
        "{}{}{}",
        pick(rng, &NAME_PREFIXES),
        pick(rng, &NAME_SUFFIXES),
        pick(rng, &NAME_STEMS)
    );
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => raw,
    }
}

pub fn generate_full_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", generate_name(rng), generate_name(rng))
}

pub fn generate_catalog_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-{}", generate_name(rng), rng.gen_range(0..256u32))
}

/// Draws an index with probability proportional to its weight. Weights that
/// cannot form a distribution yield index 0.
pub fn sample_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(e) => {
            log::warn!("Invalid weights {:?}: {}", weights, e);
            0
        }
    }
}

/// `1234567` → `"1,234,567"`.
pub fn commafy(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vec3 {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Vec3 {
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Uniform point in the cube `[0, bound]³`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bound: u8) -> Self {
        Self {
            x: rng.gen_range(0..=bound),
            y: rng.gen_range(0..=bound),
            z: rng.gen_range(0..=bound),
        }
    }
}
