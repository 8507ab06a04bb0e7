/// One promotional entry displayed by the carousel.
///
/// The deck is fixed configuration: it is built once at startup and never
/// mutated afterwards. `image` is a file name resolved against the assets
/// directory; a file that is missing or undecodable is rendered as a
/// generated placeholder instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub outcome: &'static str,
    pub image: &'static str,
}

pub fn builtin_deck() -> Vec<Slide> {
    vec![
        Slide {
            title: "Transit Pulse",
            badge: "Featured",
            description: "Live city transit dashboard that folds vehicle positions, \
                          headway gaps and service alerts into a single map view.",
            tech: &["TypeScript", "React", "MapLibre"],
            outcome: "Adopted by two local advocacy groups for service audits",
            image: "transit-pulse.jpg",
        },
        Slide {
            title: "Ledger Lens",
            badge: "Open Source",
            description: "Personal finance explorer that turns exported bank CSVs \
                          into linked, filterable spending charts.",
            tech: &["Rust", "WebAssembly", "D3"],
            outcome: "1.2k downloads in the first release month",
            image: "ledger-lens.png",
        },
        Slide {
            title: "Trail Cache",
            badge: "Mobile",
            description: "Offline-first hiking companion with downloadable trail \
                          bundles, elevation profiles and waypoint notes.",
            tech: &["Kotlin", "SQLite", "Mapbox"],
            outcome: "Kept working through a week with zero coverage",
            image: "trail-cache.jpg",
        },
        Slide {
            title: "Studio Metronome",
            badge: "Weekend Build",
            description: "Polyrhythm practice metronome with per-limb accent \
                          patterns and a tap-tempo trainer.",
            tech: &["Rust", "cpal"],
            outcome: "Sub-2ms click jitter on commodity audio hardware",
            image: "studio-metronome.png",
        },
        Slide {
            title: "Harbor Watch",
            badge: "Client Work",
            description: "Monitoring wall for a small shipping operator: berth \
                          occupancy, tide windows and arrival ETAs at a glance.",
            tech: &["Go", "Postgres", "Grafana"],
            outcome: "Replaced a nightly spreadsheet ritual outright",
            image: "harbor-watch.jpg",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_is_nonempty_and_fully_populated() {
        let deck = builtin_deck();
        assert_eq!(deck.len(), 5);
        for slide in &deck {
            assert!(!slide.title.is_empty());
            assert!(!slide.badge.is_empty());
            assert!(!slide.description.is_empty());
            assert!(!slide.tech.is_empty());
            assert!(!slide.outcome.is_empty());
            assert!(!slide.image.is_empty());
        }
    }
}
