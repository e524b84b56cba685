pub const DEFAULT_PILOT: &str = "Fox";
pub const STARTING_CREDITS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    credits: u64,
    galaxy_index: usize,
    system_index: usize,
    planet_index: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PILOT)
    }
}

impl Player {
    /// Blank names fall back to the default pilot.
    pub fn new(name: impl Into<String>) -> Self {
        let mut player = Self {
            name: DEFAULT_PILOT.to_string(),
            credits: STARTING_CREDITS,
            galaxy_index: 0,
            system_index: 0,
            planet_index: 0,
        };
        player.set_name(name);
        player
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn credits(&self) -> u64 { self.credits }
    pub fn galaxy_index(&self) -> usize { self.galaxy_index }
    pub fn system_index(&self) -> usize { self.system_index }
    pub fn planet_index(&self) -> usize { self.planet_index }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        let name = name.trim();
        if !name.is_empty() {
            self.name = name.to_string();
        }
    }

    pub fn set_galaxy_index(&mut self, index: usize) {
        self.galaxy_index = index;
        self.system_index = 0;
        self.planet_index = 0;
    }

    /// Fails without change when the balance is too low.
    pub fn debit(&mut self, amount: u64) -> bool {
        match self.credits.checked_sub(amount) {
            Some(left) => {
                self.credits = left;
                true
            }
            None => false,
        }
    }

    /// Fails without change on overflow.
    pub fn credit(&mut self, amount: u64) -> bool {
        match self.credits.checked_add(amount) {
            Some(total) => {
                self.credits = total;
                true
            }
            None => false,
        }
    }
}
