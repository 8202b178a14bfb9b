//! Item catalog
//!
//! The fixed set of unlockable items. Order here is the canonical display and
//! iteration order; nothing at runtime adds, removes, or renames entries.

/// Key of the item that starts unlocked and can never be locked
pub const ALWAYS_UNLOCKED: &str = "video-camera";

/// Static definition of one unlockable item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    /// Stable identifier used for lookups and persistence
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Display icon (emoji)
    pub icon: &'static str,
    /// Unlocked flag before any snapshot is applied
    pub default_unlocked: bool,
}

impl ItemDef {
    const fn new(key: &'static str, name: &'static str, icon: &'static str) -> Self {
        Self {
            key,
            name,
            icon,
            default_unlocked: false,
        }
    }

    const fn unlocked(mut self) -> Self {
        self.default_unlocked = true;
        self
    }

    /// True for the pinned item
    pub fn is_always_unlocked(&self) -> bool {
        self.key == ALWAYS_UNLOCKED
    }
}

const ITEMS: [ItemDef; 21] = [
    ItemDef::new("video-camera", "Video Camera", "📹").unlocked(),
    ItemDef::new("head-gear", "Head Gear", "🪖"),
    ItemDef::new("sanity-meds", "Sanity Meds", "💊"),
    ItemDef::new("firelights", "Firelights", "🔥"),
    ItemDef::new("parabolic-mic", "Parabolic Mic", "🎤"),
    ItemDef::new("sound-sensor", "Sound Sensor", "📡"),
    ItemDef::new("motion-sensor", "Motion Sensor", "📊"),
    ItemDef::new("lighters", "Lighters", "🔥"),
    ItemDef::new("thermometer", "Thermometer", "🌡️"),
    ItemDef::new("emf-reader", "EMF Reader", "📱"),
    ItemDef::new("dots", "DOTS", "👁️"),
    ItemDef::new("tripod", "Tripod", "📐"),
    ItemDef::new("writing-book", "Writing Book", "📖"),
    ItemDef::new("flashlight", "Flashlight", "🔦"),
    ItemDef::new("ultraviolet", "Ultraviolet", "💜"),
    ItemDef::new("spirit-box", "Spirit Box", "📻"),
    ItemDef::new("crucifix", "Crucifix", "✝️"),
    ItemDef::new("salt", "Salt", "🧂"),
    ItemDef::new("smudges", "Smudges", "🌿"),
    ItemDef::new("sound-recorder", "Sound Recorder", "🎙️"),
    ItemDef::new("photo-camera", "Photo Camera", "📷"),
];

/// All items in canonical order
pub fn defaults() -> &'static [ItemDef] {
    &ITEMS
}

/// Number of catalog items
pub fn len() -> usize {
    ITEMS.len()
}

/// Canonical position of `key`, if it is a catalog key
pub fn index_of(key: &str) -> Option<usize> {
    ITEMS.iter().position(|item| item.key == key)
}

/// Look up an item definition by key
pub fn find(key: &str) -> Option<&'static ItemDef> {
    index_of(key).map(|i| &ITEMS[i])
}

/// Whether `key` names a catalog item
pub fn contains(key: &str) -> bool {
    index_of(key).is_some()
}

/// Catalog keys in canonical order
pub fn keys() -> impl Iterator<Item = &'static str> {
    ITEMS.iter().map(|item| item.key)
}
