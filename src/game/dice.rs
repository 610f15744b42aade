use rand::prelude::*;
use rand::Rng;

pub const DIE_FACES: u8 = 6;

/// Uniform roll of a single six-sided die.
pub fn dice_roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(1..=DIE_FACES)
}

/// Two independent rolls, as thrown when trying to leave jail.
pub fn roll_pair<R: Rng + ?Sized>(rng: &mut R) -> (u8, u8) {
    let first = dice_roll(rng);
    let second = dice_roll(rng);
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dice_roll_covers_all_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0usize; DIE_FACES as usize];
        for _ in 0..6_000 {
            let roll = dice_roll(&mut rng);
            assert!((1..=DIE_FACES).contains(&roll), "Roll {} out of range", roll);
            seen[(roll - 1) as usize] += 1;
        }
        for (face, count) in seen.iter().enumerate() {
            assert!(*count > 800, "Face {} rolled only {} times", face + 1, count);
        }
    }

    #[test]
    fn test_roll_pair_draws_independently() {
        let mut rng = StdRng::seed_from_u64(3);
        let doubles = (0..36_000)
            .filter(|_| {
                let (a, b) = roll_pair(&mut rng);
                a == b
            })
            .count();
        let ratio = doubles as f64 / 36_000.0;
        assert!((ratio - 1.0 / 6.0).abs() < 0.02, "Doubles ratio {:.3}", ratio);
    }
}
