use rand::Rng;

use crate::tools::{generate_name, Vec3};
use super::planetoid::Planetoid;

pub const PLANETOIDS_PER_SYSTEM: usize = 16;
pub const SYSTEM_BOUNDS: u8 = 255;

#[derive(Debug, Clone)]
pub struct System {
    index: usize,
    name: String,
    position: Vec3,
    planetoids: Vec<Planetoid>,
}

impl System {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        let name = generate_name(rng);
        let position = Vec3::random(rng, SYSTEM_BOUNDS);
        let planetoids = (0..PLANETOIDS_PER_SYSTEM)
            .map(|i| Planetoid::generate(rng, &name, i))
            .collect();
        Self { index, name, position, planetoids }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn name(&self) -> &str { &self.name }
    pub fn position(&self) -> Vec3 { self.position }
    pub fn planetoids(&self) -> &[Planetoid] { &self.planetoids }

    pub fn tick(&mut self) {
        for planetoid in &mut self.planetoids {
            planetoid.tick();
        }
    }
}
