// DOM ids the frontend binds to. The static page markup owns these.
pub const CANVAS_ID: &str = "terrain-canvas";
pub const HERO_ID: &str = "hero-content";
pub const SECTION_ID: &str = "services-journey";
pub const TOPO_LAYER_ID: &str = "topo-background";
pub const CARD_ID_PREFIX: &str = "journey-card-";

// Password wall elements
pub const GATE_ID: &str = "passord-vegg";
pub const GATE_INPUT_ID: &str = "passord-input";
pub const GATE_BUTTON_ID: &str = "passord-knapp";
pub const GATE_ERROR_ID: &str = "passord-feil";

// Unlock flag persisted in localStorage. Cosmetic gate, not a security
// boundary; the flag is the only persisted value in the whole app.
pub const UNLOCK_STORAGE_KEY: &str = "akser_unlocked";
pub const GATE_PASSPHRASE: &str = "småkraft";
pub const GATE_ERROR_MS: i32 = 2000;

// Brand emerald (#10b981), full opacity for the journey wireframe
pub const WIRE_COLOR: [f32; 4] = [0.063, 0.725, 0.506, 1.0];
