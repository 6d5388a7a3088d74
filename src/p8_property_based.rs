// Pattern 8: Property-Based Testing
// Demonstrates capturing printed output and checking it against every
// generated Person instead of a handful of hand-picked ones.

use std::fmt;
use std::io::{self, Write};

pub const VOTING_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub age: u32,
    pub name: String,
}

impl Person {
    pub fn new(age: u32, name: impl Into<String>) -> Self {
        Person {
            age,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeVerdict {
    Minor,
    Adult,
}

impl AgeVerdict {
    pub fn message(self) -> &'static str {
        match self {
            AgeVerdict::Minor => "You are under 18",
            AgeVerdict::Adult => "You can vote, you are an adult",
        }
    }
}

impl fmt::Display for AgeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn classify_age(age: u32) -> AgeVerdict {
    if age < VOTING_AGE {
        AgeVerdict::Minor
    } else {
        AgeVerdict::Adult
    }
}

/// Writes the verdict for `person` as one line to `out`.
pub fn write_age_verdict<W: Write>(person: &Person, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", classify_age(person.age))
}

/// Prints the verdict for `person` to stdout.
pub fn check_person_age(person: &Person) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_age_verdict(person, &mut handle)
}

#[cfg(test)]
fn captured(person: &Person) -> String {
    let mut out = Vec::new();
    write_age_verdict(person, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ============================================================================
// Example: Capturing Output
// ============================================================================


// ============================================================================
// Example: Generated People
// ============================================================================
