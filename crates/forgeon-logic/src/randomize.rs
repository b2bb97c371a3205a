//! Randomized request sampling — the "surprise me" generation path.
//!
//! Parameters are drawn from ranges scaled to the sampled dimensions, so a
//! small dungeon gets a proportionally small room count and room size and a
//! large one has space for sprawling layouts.

use rand::Rng;

use crate::request::RequestDescriptor;
use crate::rooms::RoomSet;

const DIMENSION_MIN: u32 = 10;
const DIMENSION_MAX: u32 = 150;

/// Draw one fully randomized generation request.
pub fn random_request(rng: &mut impl Rng) -> RequestDescriptor {
    let width = rng.gen_range(DIMENSION_MIN..=DIMENSION_MAX);
    let height = rng.gen_range(DIMENSION_MIN..=DIMENSION_MAX);

    // Room size scales with the square root of the shorter side.
    let min_side = f64::from(width.min(height));
    let size_low = (min_side / 4.0).sqrt().round() as u32;
    let size_high = (min_side * 4.0).sqrt().round() as u32;
    let max_room_size = rng.gen_range(size_low..=size_high);

    // Room count scales with area, capped so rooms still fit at the drawn size.
    let count_low = (f64::from(width + height) / 4.0).sqrt().round() as u32;
    let count_high = (f64::from(width) * f64::from(height) / (2.0 * f64::from(max_room_size)))
        .sqrt()
        .round() as u32;
    let room_count = rng.gen_range(count_low..=count_high.max(count_low));

    RequestDescriptor {
        width,
        height,
        seed: rng.gen(),
        room_filter: RoomSet::from_bits(rng.gen()),
        room_count,
        max_room_size,
    }
}
