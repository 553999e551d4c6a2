use chromap::{ByteOrder, Config, palette};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod buffer;
mod strategies;

const ORDERS: [ByteOrder; 2] = [ByteOrder::Little, ByteOrder::Big];

fn standard() -> Config {
    Config::new().with_builtin_palette(palette::Builtin::Standard)
}

/// Seeded random values in `[low, high)`
fn random_data(seed: u64, len: usize, low: f64, high: f64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(low..high)).collect()
}
