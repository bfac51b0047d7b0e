//! Fixed bank-file catalogue.
//!
//! The filenames are an external contract with the republished maps and must
//! match exactly; the game client looks these up byte-for-byte inside the
//! publisher folder.

/// Bank files eligible for relocation, one per supported map.
pub const BANK_FILES: [&str; 6] = [
    "CrashRPGMaximum.SC2Bank",
    "HSF.SC2Bank",
    "PBRPG.SC2Bank",
    "CDRPG.SC2Bank",
    "NeoStarBank.SC2Bank",
    "NeoStarLadder.SC2Bank",
];

/// Human-readable map title for listings.
pub fn map_title(bank_file: &str) -> &'static str {
    match bank_file {
        "CrashRPGMaximum.SC2Bank" => "Crash Landing RPG",
        "HSF.SC2Bank" => "Hell Special Forces",
        "PBRPG.SC2Bank" => "Phantom Breaker RPG",
        "CDRPG.SC2Bank" => "Certain Death RPG",
        "NeoStarBank.SC2Bank" => "NeoStar Defense RPG",
        "NeoStarLadder.SC2Bank" => "NeoStar Defense RPG ladder",
        _ => "unknown map",
    }
}
