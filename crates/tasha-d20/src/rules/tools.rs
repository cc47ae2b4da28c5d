//! Tool proficiency names shared by several tables.

/// Every Artisan's Tools option.
pub const ARTISANS_TOOLS: &[&str] = &[
    "Artisan's Tools - Alchemist's Supplies",
    "Artisan's Tools - Brewer's Supplies",
    "Artisan's Tools - Calligrapher's Supplies",
    "Artisan's Tools - Carpenter's Tools",
    "Artisan's Tools - Cartographer's Tools",
    "Artisan's Tools - Cobbler's Tools",
    "Artisan's Tools - Cook's Utensils",
    "Artisan's Tools - Glassblower's Tools",
    "Artisan's Tools - Jeweler's Tools",
    "Artisan's Tools - Leatherworker's Tools",
    "Artisan's Tools - Mason's Tools",
    "Artisan's Tools - Painter's Supplies",
    "Artisan's Tools - Potter's Tools",
    "Artisan's Tools - Smith's Tools",
    "Artisan's Tools - Tinker's Tools",
    "Artisan's Tools - Weaver's Tools",
    "Artisan's Tools - Woodcarver's Tools",
];

/// Every Musical Instrument option.
pub const MUSICAL_INSTRUMENTS: &[&str] = &[
    "Musical Instrument - Bagpipes",
    "Musical Instrument - Birdpipes",
    "Musical Instrument - Drum",
    "Musical Instrument - Dulcimer",
    "Musical Instrument - Flute",
    "Musical Instrument - Glaur",
    "Musical Instrument - Hand Drum",
    "Musical Instrument - Horn",
    "Musical Instrument - Longhorn",
    "Musical Instrument - Lute",
    "Musical Instrument - Lyre",
    "Musical Instrument - Pan Flute",
    "Musical Instrument - Shawm",
    "Musical Instrument - Songhorn",
    "Musical Instrument - Tantan",
    "Musical Instrument - Thelarr",
    "Musical Instrument - Tocken",
    "Musical Instrument - Viol",
    "Musical Instrument - Wargong",
    "Musical Instrument - Yarting",
    "Musical Instrument - Zulkoon",
];

/// Every Gaming Set option.
pub const GAMING_SETS: &[&str] = &[
    "Gaming Set - Dice Set",
    "Gaming Set - Dragonchess Set",
    "Gaming Set - Playing Card Set",
    "Gaming Set - Three-Dragon Ante Set",
];

/// The Monk's choice: one Artisan's Tools or one Musical Instrument.
pub const ARTISANS_TOOLS_OR_INSTRUMENTS: &[&str] = &[
    "Artisan's Tools - Alchemist's Supplies",
    "Artisan's Tools - Brewer's Supplies",
    "Artisan's Tools - Calligrapher's Supplies",
    "Artisan's Tools - Carpenter's Tools",
    "Artisan's Tools - Cartographer's Tools",
    "Artisan's Tools - Cobbler's Tools",
    "Artisan's Tools - Cook's Utensils",
    "Artisan's Tools - Glassblower's Tools",
    "Artisan's Tools - Jeweler's Tools",
    "Artisan's Tools - Leatherworker's Tools",
    "Artisan's Tools - Mason's Tools",
    "Artisan's Tools - Painter's Supplies",
    "Artisan's Tools - Potter's Tools",
    "Artisan's Tools - Smith's Tools",
    "Artisan's Tools - Tinker's Tools",
    "Artisan's Tools - Weaver's Tools",
    "Artisan's Tools - Woodcarver's Tools",
    "Musical Instrument - Bagpipes",
    "Musical Instrument - Birdpipes",
    "Musical Instrument - Drum",
    "Musical Instrument - Dulcimer",
    "Musical Instrument - Flute",
    "Musical Instrument - Glaur",
    "Musical Instrument - Hand Drum",
    "Musical Instrument - Horn",
    "Musical Instrument - Longhorn",
    "Musical Instrument - Lute",
    "Musical Instrument - Lyre",
    "Musical Instrument - Pan Flute",
    "Musical Instrument - Shawm",
    "Musical Instrument - Songhorn",
    "Musical Instrument - Tantan",
    "Musical Instrument - Thelarr",
    "Musical Instrument - Tocken",
    "Musical Instrument - Viol",
    "Musical Instrument - Wargong",
    "Musical Instrument - Yarting",
    "Musical Instrument - Zulkoon",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monk_list_is_artisans_then_instruments() {
        let combined: Vec<&str> = ARTISANS_TOOLS
            .iter()
            .chain(MUSICAL_INSTRUMENTS)
            .copied()
            .collect();
        assert_eq!(ARTISANS_TOOLS_OR_INSTRUMENTS, combined.as_slice());
    }
}
