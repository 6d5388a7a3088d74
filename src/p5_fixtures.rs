// Pattern 5: Fixtures
// Demonstrates reusable test setup: a prepared db handle, a temporary
// directory that cleans itself up, and a factory that builds random data.

use crate::error::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

// ============================================================================
// Example: Stand-in Database Handle
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DummyDb {
    connected: bool,
}

impl DummyDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

pub fn retrieve_users(db: &DummyDb) -> &'static str {
    if db.is_connected() {
        "All users"
    } else {
        "Not Connected to db"
    }
}

// ============================================================================
// Example: Writing to a File
// ============================================================================

/// Creates or truncates `path` and writes `text` to it.
pub fn save_text_in_file<P: AsRef<Path>>(text: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved text");
    Ok(())
}

// ============================================================================
// Example: Mutants
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Power {
    Ice,
    Fire,
    Psycho,
    SelfRecovery,
}

impl Power {
    pub const ALL: [Power; 4] = [Power::Ice, Power::Fire, Power::Psycho, Power::SelfRecovery];

    pub fn label(self) -> &'static str {
        match self {
            Power::Ice => "Ice",
            Power::Fire => "Fire",
            Power::Psycho => "PSYCHO",
            Power::SelfRecovery => "SELF_RECOVER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutantFamily {
    Beast,
    Mind,
    Daemons,
    Angels,
}

impl MutantFamily {
    pub const ALL: [MutantFamily; 4] = [
        MutantFamily::Beast,
        MutantFamily::Mind,
        MutantFamily::Daemons,
        MutantFamily::Angels,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MutantFamily::Beast => "BEAST",
            MutantFamily::Mind => "MIND",
            MutantFamily::Daemons => "DAEMONS",
            MutantFamily::Angels => "ANGELS",
        }
    }
}

/// Ordered by rank: `Weak < Middle < Strong < God`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MutantStrength {
    Weak = 1,
    Middle = 2,
    Strong = 3,
    God = 4,
}

impl MutantStrength {
    pub const ALL: [MutantStrength; 4] = [
        MutantStrength::Weak,
        MutantStrength::Middle,
        MutantStrength::Strong,
        MutantStrength::God,
    ];

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MutantStrength::Weak => "WEAK",
            MutantStrength::Middle => "MIDDLE",
            MutantStrength::Strong => "STRONG",
            MutantStrength::God => "GOD",
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for MutantFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for MutantStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutant {
    pub power: Power,
    pub strength: MutantStrength,
    pub family: MutantFamily,
}

impl Mutant {
    pub fn new(power: Power, strength: MutantStrength, family: MutantFamily) -> Self {
        Mutant {
            power,
            strength,
            family,
        }
    }
}

impl fmt::Display for Mutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has a power of {} and strength {}",
            self.family, self.power, self.strength
        )
    }
}

/// The strongest mutant, or `None` for an empty army.
///
/// Ties go to the first of the strongest in army order.
pub fn fight_mutants(army: &[Mutant]) -> Option<&Mutant> {
    army.iter()
        .reduce(|best, m| if m.strength > best.strength { m } else { best })
}

// ============================================================================
// Example: Factory Fixture
// ============================================================================

/// Builds random armies. Wraps any `Rng` so tests can seed it.
pub struct MutantGenerator<R: Rng> {
    rng: R,
}

impl MutantGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        MutantGenerator::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        MutantGenerator::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MutantGenerator<R> {
    pub fn new(rng: R) -> Self {
        MutantGenerator { rng }
    }

    pub fn mutant(&mut self) -> Mutant {
        let power = Power::ALL[self.rng.gen_range(0..Power::ALL.len())];
        let strength = MutantStrength::ALL[self.rng.gen_range(0..MutantStrength::ALL.len())];
        let family = MutantFamily::ALL[self.rng.gen_range(0..MutantFamily::ALL.len())];
        Mutant::new(power, strength, family)
    }

    pub fn army(&mut self, number_of_mutants: usize) -> Vec<Mutant> {
        (0..number_of_mutants).map(|_| self.mutant()).collect()
    }
}

// ============================================================================
// Fixtures
// ============================================================================



#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn mutant_strategy() -> impl Strategy<Value = Mutant> {
        (
            prop::sample::select(Power::ALL.to_vec()),
            prop::sample::select(MutantStrength::ALL.to_vec()),
            prop::sample::select(MutantFamily::ALL.to_vec()),
        )
            .prop_map(|(power, strength, family)| Mutant::new(power, strength, family))
    }

    proptest! {
        #[test]
        fn survivor_is_at_least_as_strong_as_everyone(
            army in prop::collection::vec(mutant_strategy(), 1..200)
        ) {
            let survivor = fight_mutants(&army).unwrap();
            for mutant in &army {
                prop_assert!(survivor.strength >= mutant.strength);
            }
            let first_max = army.iter().position(|m| m.strength == survivor.strength).unwrap();
            prop_assert!(std::ptr::eq(survivor, &army[first_max]));
        }

        #[test]
        fn written_text_reads_back(text in "[^\r\n]{0,64}") {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("roundtrip.txt");
            save_text_in_file(&text, &path).unwrap();
            prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
        }
    }
}
