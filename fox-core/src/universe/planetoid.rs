use rand::Rng;

use crate::tools::{sample_weighted, Vec3};

/// Cube edge for planetoid positions inside a system.
pub const PLANETOID_BOUNDS: u8 = 16;

/// Weights for the first body of a system, over `Star..=Orphan`.
pub const FIRST_BODY_WEIGHTS: [f64; 5] = [1.0, 0.0001, 0.001, 0.01, 0.0001];

/// Weights for every later body, over `Star..=Starbase`.
pub const ORBIT_WEIGHTS: [f64; 8] = [0.00001, 0.0, 0.0001, 0.0, 0.0, 0.2, 1.0, 0.2];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetoidKind {
    Star,
    BlackHole,
    Asteroid,
    Technology,
    Orphan,
    GasGiant,
    Planet,
    Starbase,
}

impl PlanetoidKind {
    pub const ALL: [PlanetoidKind; 8] = [
        PlanetoidKind::Star,
        PlanetoidKind::BlackHole,
        PlanetoidKind::Asteroid,
        PlanetoidKind::Technology,
        PlanetoidKind::Orphan,
        PlanetoidKind::GasGiant,
        PlanetoidKind::Planet,
        PlanetoidKind::Starbase,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(PlanetoidKind::Star)
    }

    pub fn sample<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        let weights: &[f64] = if index == 0 { &FIRST_BODY_WEIGHTS } else { &ORBIT_WEIGHTS };
        Self::from_index(sample_weighted(rng, weights))
    }
}

#[derive(Debug, Clone)]
pub struct Planetoid {
    index: usize,
    name: String,
    kind: PlanetoidKind,
    position: Vec3,
}

impl Planetoid {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, system_name: &str, index: usize) -> Self {
        Self {
            index,
            name: format!("{}-{}", system_name, index + 1),
            kind: PlanetoidKind::sample(rng, index),
            position: Vec3::random(rng, PLANETOID_BOUNDS),
        }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn name(&self) -> &str { &self.name }
    pub fn kind(&self) -> PlanetoidKind { self.kind }
    pub fn position(&self) -> Vec3 { self.position }

    pub fn tick(&mut self) {}
}
