mod galaxy;
mod planetoid;
mod system;

pub use galaxy::{Galaxy, GALAXY_BOUNDS, SYSTEMS_PER_GALAXY};
pub use planetoid::{Planetoid, PlanetoidKind, FIRST_BODY_WEIGHTS, ORBIT_WEIGHTS, PLANETOID_BOUNDS};
pub use system::{System, PLANETOIDS_PER_SYSTEM, SYSTEM_BOUNDS};

use std::time::Instant;
use rand::Rng;

use crate::calendar::{self, SpaceDate};

pub const GALAXIES_PER_UNIVERSE: usize = 128;
pub const UNIVERSE_NAME: &str = "Fox Universe";

/// The whole procedurally generated world plus its clock.
#[derive(Debug, Clone)]
pub struct Universe {
    name: String,
    started: Instant,
    start_year: u32,
    elapsed: u64,
    date: SpaceDate,
    galaxies: Vec<Galaxy>,
}

impl Universe {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_with_start_year(rng, calendar::start_year())
    }

    pub fn generate_with_start_year<R: Rng + ?Sized>(rng: &mut R, start_year: u32) -> Self {
        let galaxies: Vec<Galaxy> = (0..GALAXIES_PER_UNIVERSE).map(|i| Galaxy::generate(rng, i)).collect();
        log::info!("Generated {} galaxies, start year {}", galaxies.len(), start_year);

        let mut universe = Self {
            name: UNIVERSE_NAME.to_string(),
            started: Instant::now(),
            start_year,
            elapsed: 0,
            date: SpaceDate::from_elapsed(0, start_year),
            galaxies,
        };
        universe.tick_at(0);
        universe
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn start_year(&self) -> u32 { self.start_year }
    /// Wall-clock seconds since generation, as of the last tick.
    pub fn elapsed(&self) -> u64 { self.elapsed }
    pub fn date(&self) -> SpaceDate { self.date }
    pub fn galaxies(&self) -> &[Galaxy] { &self.galaxies }

    pub fn galaxy(&self, index: usize) -> Option<&Galaxy> {
        self.galaxies.get(index)
    }

    pub fn tick(&mut self) {
        let elapsed = self.started.elapsed().as_secs();
        self.tick_at(elapsed);
    }

    /// Advances to `elapsed` seconds after generation.
    pub fn tick_at(&mut self, elapsed: u64) {
        self.elapsed = elapsed;
        self.date = SpaceDate::from_elapsed(elapsed, self.start_year);
        for galaxy in &mut self.galaxies {
            galaxy.tick();
        }
    }
}
