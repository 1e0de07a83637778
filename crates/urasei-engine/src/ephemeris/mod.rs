pub mod julian;
pub mod positions;
pub mod types;

pub use julian::{datetime_to_julian_day, J2000};
pub use positions::{calculate_planet_positions, sun_longitude};
pub use types::{GeoLocation, Planet, PlanetPosition, ALL_PLANETS};
