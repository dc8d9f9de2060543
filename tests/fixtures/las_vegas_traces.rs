//! Las Vegas traces for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API, ordered so they
//! read as walks along the Strip.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Strip walk, north to south
// ============================================================================

pub const STRIP_WALK: &[Location] = &[
    Location::new("Sinatra", 36.1300035, -115.1654850),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("SW Steakhouse", 36.1262145, -115.1669146),
    Location::new("Carnevino Italian Steakhouse", 36.1249521, -115.1687357),
    Location::new("CUT", 36.1233879, -115.1682073),
    Location::new("Delmonico Steakhouse", 36.1231561, -115.1686955),
    Location::new("Otto Pizzeria", 36.1231219, -115.1684514),
    Location::new("Grand Lux Cafe", 36.1216416, -115.1685024),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Ruth's Chris Steak House", 36.1193113, -115.1722630),
    Location::new("Guy Fieri's Vegas Kitchen", 36.1184064, -115.1722088),
    Location::new("Hash House A Go Go", 36.1181377, -115.1710989),
    Location::new("Yard House", 36.1177147, -115.1691992),
    Location::new("Brooklyn Bowl", 36.1175388, -115.1695094),
    Location::new("Flour & Barley", 36.1173688, -115.1702674),
    Location::new("Rao's", 36.1163982, -115.1763053),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Mr Chow", 36.1161158, -115.1761223),
    Location::new("Bacchanal Buffet", 36.1159581, -115.1762929),
    Location::new("Beijing Noodle No. 9", 36.1158277, -115.1758038),
    Location::new("Spago by Wolfgang Puck", 36.1139368, -115.1741462),
    Location::new("Le Cirque", 36.1135689, -115.1749763),
    Location::new("Gordon Ramsay Steak", 36.1127744, -115.1712029),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Gordon Ramsay BurGR", 36.1107195, -115.1720818),
    Location::new("P.F. Chang's", 36.1103352, -115.1723830),
    Location::new("Lobster Me Planet Hollywood", 36.1094857, -115.1708325),
    Location::new("Earl of Sandwich Planet Hollywood", 36.1093912, -115.1720087),
    Location::new("The Crack Shack", 36.1050709, -115.1735287),
    Location::new("Best Friend", 36.1049396, -115.1739173),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("Outback Steakhouse Strip", 36.1037287, -115.1724577),
    Location::new("Emeril's New Orleans Fish House", 36.1028578, -115.1688386),
    Location::new("L'Atelier De Joel Robuchon", 36.1026401, -115.1695890),
    Location::new("Il Fornaio", 36.1024474, -115.1740110),
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Wolfgang Puck Bar & Grill", 36.1022046, -115.1696020),
    Location::new("America", 36.1021028, -115.1750921),
    Location::new("Pyramid Cafe", 36.0956586, -115.1761902),
    Location::new("Diablo's Cantina", 36.0955372, -115.1751818),
    Location::new("TENDER Steak & Seafood", 36.0949700, -115.1761289),
    Location::new("Burger Bar", 36.0943773, -115.1760142),
    Location::new("Charlie Palmer Steak", 36.0910624, -115.1743364),
    Location::new("Strip Steak", 36.0908722, -115.1776176),
];

// ============================================================================
// South Strip, with a repeated stop
// ============================================================================

pub const SOUTH_STRIP_WALK: &[Location] = &[
    Location::new("kabuki Japanese", 36.0675472, -115.1779391),
    Location::new("Tahiti Joe's Restaurant", 36.0592855, -115.1716402),
    Location::new("Denny's South", 36.0591086, -115.1717250),
    Location::new("Denny's South", 36.0591086, -115.1717250),
    Location::new("Dickey's Barbecue Pit", 36.0544257, -115.1715391),
    Location::new("Buffalo Wild Wings South", 36.0543044, -115.1714860),
    Location::new("Matryoshka", 36.0492150, -115.1710486),
    Location::new("Bootlegger Bistro", 36.0492047, -115.1715744),
    Location::new("Mikos Izakaya", 36.0429503, -115.1527627),
    Location::new("Budget Suites South", 36.0366259, -115.1713361),
];

pub fn strip_walk() -> Vec<(f64, f64)> {
    STRIP_WALK.iter().map(Location::coords).collect()
}

pub fn south_strip_walk() -> Vec<(f64, f64)> {
    SOUTH_STRIP_WALK.iter().map(Location::coords).collect()
}

/// A wavy east-west line of `n` points starting at the Bellagio fountains.
pub fn wavy_line(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.001;
            (36.1126 + 0.01 * (t * 7.0).sin(), -115.1767 + t)
        })
        .collect()
}
