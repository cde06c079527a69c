//! A small sample of the London Underground.
//!
//! Used by the server when no network file is configured, and handy for
//! experiments. Times are rough averages in minutes.

use crate::domain::{DomainError, Network, NetworkBuilder};

/// Add a segment in each direction with the same travel time.
fn both_ways(builder: NetworkBuilder, a: &str, b: &str, line: &str, mins: i64) -> NetworkBuilder {
    builder.segment(a, b, line, mins).segment(b, a, line, mins)
}

/// Sections of the Central, Northern and Victoria lines, plus a fictional
/// one-way "New" line from North Acton straight to Notting Hill Gate.
pub fn london_underground() -> Result<Network, DomainError> {
    let central = [
        ("North Acton", "East Acton", 2),
        ("East Acton", "White City", 3),
        ("White City", "Shepherd's Bush", 1),
        ("Shepherd's Bush", "Holland Park", 2),
        ("Holland Park", "Notting Hill Gate", 2),
        ("Notting Hill Gate", "Queensway", 2),
        ("Queensway", "Lancaster Gate", 2),
        ("Lancaster Gate", "Marble Arch", 2),
        ("Marble Arch", "Bond Street", 1),
        ("Bond Street", "Oxford Circus", 2),
    ];
    let northern = [
        ("Highgate", "Archway", 3),
        ("Archway", "Tufnell Park", 2),
        ("Tufnell Park", "Kentish Town", 2),
        ("Kentish Town", "Camden Town", 2),
        ("Camden Town", "Euston", 3),
    ];
    let victoria = [
        ("Euston", "Warren Street", 3),
        ("Warren Street", "Oxford Circus", 3),
    ];

    let mut builder =
        NetworkBuilder::new().segment("North Acton", "Notting Hill Gate", "New", 11);

    for (line, sections) in [
        ("Central", &central[..]),
        ("Northern", &northern[..]),
        ("Victoria", &victoria[..]),
    ] {
        for &(a, b, mins) in sections {
            builder = both_ways(builder, a, b, line, mins);
        }
    }

    builder.build()
}
