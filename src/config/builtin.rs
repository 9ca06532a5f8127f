//! Default coverage table, used when no coverage file is configured.
//!
//! South-west Chicago suburbs around Joliet. Other deployments should ship
//! their own TOML file instead of editing this table.

pub const DEPLOYMENT_NAME: &str = "joliet-metro";

pub const SERVICE_AREA: &[&str] = &[
    // Joliet
    "60431", "60432", "60433", "60434", "60435", "60436",
    // Crest Hill, Shorewood, Lockport, Romeoville
    "60403", "60404", "60441", "60446",
    // Plainfield
    "60544", "60585", "60586",
    // Bolingbrook, Homer Glen, Lemont
    "60440", "60490", "60491", "60439",
    // New Lenox, Mokena, Frankfort, Manhattan
    "60451", "60448", "60423", "60442",
    // Channahon, Minooka, Elwood
    "60410", "60447", "60421",
];

pub const EXTENDED_AREA: &[&str] = &[
    // Naperville
    "60540", "60563", "60564", "60565",
    // Aurora, Oswego, Montgomery, Yorkville
    "60502", "60504", "60505", "60506", "60543", "60538", "60560",
    // Orland Park, Tinley Park
    "60462", "60467", "60477", "60487",
    // Monee, Peotone, Wilmington, Coal City, Morris
    "60449", "60468", "60481", "60416", "60450",
    // north-west suburbs, by appointment
    "60008", "60134", "60188",
];
