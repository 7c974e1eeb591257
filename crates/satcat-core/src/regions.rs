//! Default GCAT state-code tables for region classification.
//!
//! Codes follow <https://planet4589.org/space/gcat/web/intro/states.html>.
//! The two tables must stay disjoint. Any code listed in neither table is
//! classified as Western-aligned, so new national programs land there until
//! someone adds them here.

/// Western European states and EU-level institutions.
pub const WESTERN_EUROPE_STATES: [&str; 34] = [
    "F",    // France
    "D",    // Germany
    "I",    // Italy
    "UK",   // United Kingdom
    "E",    // Spain
    "NL",   // Netherlands
    "B",    // Belgium
    "S",    // Sweden
    "N",    // Norway
    "DK",   // Denmark
    "SF",   // Finland
    "A",    // Austria
    "CH",   // Switzerland
    "P",    // Portugal
    "IRL",  // Ireland
    "L",    // Luxembourg
    "GR",   // Greece
    "PL",   // Poland
    "CZ",   // Czech Republic
    "H",    // Hungary
    "RO",   // Romania
    "BG",   // Bulgaria
    "HR",   // Croatia
    "SK",   // Slovakia
    "SLO",  // Slovenia
    "EST",  // Estonia
    "LV",   // Latvia
    "LT",   // Lithuania
    "CY",   // Cyprus
    "M",    // Malta
    "ESA",  // European Space Agency
    "EUME", // Eumetsat
    "EUTE", // Eutelsat
    "SES",  // SES (Luxembourg)
];

/// States excluded from the Western-aligned bucket.
pub const EXCLUDED_STATES: [&str; 10] = [
    "PRC",  // China
    "RUS",  // Russia
    "SU",   // Soviet Union
    "CIS",  // Commonwealth of Independent States
    "BY",   // Belarus
    "DPRK", // North Korea
    "IR",   // Iran
    "SYR",  // Syria
    "VE",   // Venezuela
    "CU",   // Cuba
];
