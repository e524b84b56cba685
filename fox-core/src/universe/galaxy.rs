use rand::Rng;

use crate::tools::{generate_name, Vec3};
use super::system::System;

pub const SYSTEMS_PER_GALAXY: usize = 42;
pub const GALAXY_BOUNDS: u8 = 255;

#[derive(Debug, Clone)]
pub struct Galaxy {
    index: usize,
    name: String,
    position: Vec3,
    systems: Vec<System>,
}

impl Galaxy {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Self {
        let name = generate_name(rng);
        let position = Vec3::random(rng, GALAXY_BOUNDS);
        let systems = (0..SYSTEMS_PER_GALAXY).map(|i| System::generate(rng, i)).collect();
        Self { index, name, position, systems }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn name(&self) -> &str { &self.name }
    pub fn position(&self) -> Vec3 { self.position }
    pub fn systems(&self) -> &[System] { &self.systems }

    pub fn tick(&mut self) {
        for system in &mut self.systems {
            system.tick();
        }
    }
}
