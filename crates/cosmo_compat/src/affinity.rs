//! Static affinity tables: best and challenging counterparts per key.

use cosmo_zodiac::{ChineseAnimal, Nakshatra, WesternSign};

use ChineseAnimal as C;
use WesternSign as W;

/// Best and challenging counterparts of one key.
#[derive(Debug, PartialEq, Eq)]
pub struct Affinity<K: 'static> {
    pub key: K,
    pub best: &'static [K],
    pub challenging: &'static [K],
}

const fn affinity<K>(key: K, best: &'static [K], challenging: &'static [K]) -> Affinity<K> {
    Affinity {
        key,
        best,
        challenging,
    }
}

pub static WESTERN_AFFINITY: [Affinity<WesternSign>; 12] = [
    affinity(W::Aries, &[W::Leo, W::Sagittarius, W::Gemini, W::Aquarius], &[W::Cancer, W::Capricorn]),
    affinity(W::Taurus, &[W::Virgo, W::Capricorn, W::Cancer, W::Pisces], &[W::Leo, W::Aquarius]),
    affinity(W::Gemini, &[W::Libra, W::Aquarius, W::Aries, W::Leo], &[W::Virgo, W::Pisces]),
    affinity(W::Cancer, &[W::Scorpio, W::Pisces, W::Taurus, W::Virgo], &[W::Aries, W::Libra]),
    affinity(W::Leo, &[W::Aries, W::Sagittarius, W::Gemini, W::Libra], &[W::Taurus, W::Scorpio]),
    affinity(W::Virgo, &[W::Taurus, W::Capricorn, W::Cancer, W::Scorpio], &[W::Gemini, W::Sagittarius]),
    affinity(W::Libra, &[W::Gemini, W::Aquarius, W::Leo, W::Sagittarius], &[W::Cancer, W::Capricorn]),
    affinity(W::Scorpio, &[W::Cancer, W::Pisces, W::Virgo, W::Capricorn], &[W::Leo, W::Aquarius]),
    affinity(W::Sagittarius, &[W::Aries, W::Leo, W::Libra, W::Aquarius], &[W::Virgo, W::Pisces]),
    affinity(W::Capricorn, &[W::Taurus, W::Virgo, W::Scorpio, W::Pisces], &[W::Aries, W::Libra]),
    affinity(W::Aquarius, &[W::Gemini, W::Libra, W::Aries, W::Sagittarius], &[W::Taurus, W::Scorpio]),
    affinity(W::Pisces, &[W::Cancer, W::Scorpio, W::Taurus, W::Capricorn], &[W::Gemini, W::Sagittarius]),
];

pub static CHINESE_AFFINITY: [Affinity<ChineseAnimal>; 12] = [
    affinity(C::Rat, &[C::Dragon, C::Monkey], &[C::Horse, C::Rooster]),
    affinity(C::Ox, &[C::Snake, C::Rooster], &[C::Goat, C::Horse]),
    affinity(C::Tiger, &[C::Horse, C::Dog], &[C::Monkey, C::Snake]),
    affinity(C::Rabbit, &[C::Goat, C::Pig], &[C::Rooster, C::Dragon]),
    affinity(C::Dragon, &[C::Rat, C::Monkey], &[C::Dog, C::Rabbit]),
    affinity(C::Snake, &[C::Ox, C::Rooster], &[C::Pig, C::Tiger]),
    affinity(C::Horse, &[C::Tiger, C::Dog], &[C::Rat, C::Ox]),
    affinity(C::Goat, &[C::Rabbit, C::Pig], &[C::Ox, C::Dog]),
    affinity(C::Monkey, &[C::Rat, C::Dragon], &[C::Tiger, C::Pig]),
    affinity(C::Rooster, &[C::Ox, C::Snake], &[C::Rabbit, C::Dog]),
    affinity(C::Dog, &[C::Tiger, C::Horse], &[C::Dragon, C::Goat]),
    affinity(C::Pig, &[C::Rabbit, C::Goat], &[C::Snake, C::Monkey]),
];

/// Nakshatras the Vedic counterparts are drawn from, regardless of input.
pub const VEDIC_POOL: [Nakshatra; 10] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
];

fn lookup<K: PartialEq + std::fmt::Debug>(
    table: &'static [Affinity<K>],
    key: K,
) -> (&'static [K], &'static [K]) {
    match table.iter().find(|a| a.key == key) {
        Some(a) => (a.best, a.challenging),
        None => {
            tracing::warn!(?key, "no affinity entry");
            (&[], &[])
        }
    }
}

/// `(best, challenging)` Western counterparts of `sign`.
pub fn western_affinity(sign: WesternSign) -> (&'static [WesternSign], &'static [WesternSign]) {
    lookup(&WESTERN_AFFINITY, sign)
}

/// `(best, challenging)` Chinese counterparts of `animal`.
pub fn chinese_affinity(
    animal: ChineseAnimal,
) -> (&'static [ChineseAnimal], &'static [ChineseAnimal]) {
    lookup(&CHINESE_AFFINITY, animal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_zodiac::{ALL_CHINESE_ANIMALS, ALL_WESTERN_SIGNS};

    #[test]
    fn every_key_has_an_entry_in_order() {
        for (entry, sign) in WESTERN_AFFINITY.iter().zip(ALL_WESTERN_SIGNS) {
            assert_eq!(entry.key, sign);
            assert_eq!(entry.best.len(), 4);
            assert_eq!(entry.challenging.len(), 2);
        }
        for (entry, animal) in CHINESE_AFFINITY.iter().zip(ALL_CHINESE_ANIMALS) {
            assert_eq!(entry.key, animal);
            assert_eq!(entry.best.len(), 2);
            assert_eq!(entry.challenging.len(), 2);
        }
    }

    #[test]
    fn no_key_lists_itself() {
        for entry in &WESTERN_AFFINITY {
            assert!(!entry.best.contains(&entry.key));
            assert!(!entry.challenging.contains(&entry.key));
        }
    }

    #[test]
    fn goat_replaces_sheep() {
        let (best, challenging) = chinese_affinity(ChineseAnimal::Goat);
        assert_eq!(best, &[ChineseAnimal::Rabbit, ChineseAnimal::Pig]);
        assert_eq!(challenging, &[ChineseAnimal::Ox, ChineseAnimal::Dog]);
    }
}
