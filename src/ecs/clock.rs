use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// The Republic's calendar: years since the founding.
///
/// One tick of the `SimTick` schedule is one year. `advance_clock` moves the
/// year forward at the end of each tick (in `SimPhase::Last`), so every phase
/// sees the same year.
#[derive(Resource, Debug)]
pub struct SimClock {
    pub year: u32,
    pub tick_count: u64,
}

impl SimClock {
    pub fn new(start_year: u32) -> Self {
        Self {
            year: start_year,
            tick_count: 0,
        }
    }

    /// Advance the clock by one year.
    pub fn advance(&mut self) {
        self.year += 1;
        self.tick_count += 1;
    }
}

/// Bevy system that closes out the year.
pub fn advance_clock(mut clock: ResMut<SimClock>) {
    clock.advance();
}
