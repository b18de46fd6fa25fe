use serde::{Deserialize, Serialize};

/// Placeholder shown when a creation's image fails to load
pub const FALLBACK_IMAGE_URL: &str = "https://placehold.co/400x400/111319/FFFFFF?text=Error";

/// A previously generated spatial image, as shown in the Creations gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creation {
    pub id: u32,
    pub name: String,
    /// Creation date (YYYY-MM-DD)
    pub date: String,
    pub image_url: String,
}

impl Creation {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        date: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            image_url: image_url.into(),
        }
    }
}

/// Static placeholder catalog for the Creations page
///
/// There is no creation history yet, so the gallery renders these six
/// entries, newest first.
pub fn sample_creations() -> Vec<Creation> {
    const SAMPLES: [(u32, &str, &str, &str); 6] = [
        (1, "Alpine_Dream_01", "2024-08-12", "8B5CF6"),
        (2, "Cyber_Cityscape", "2024-08-11", "EC4899"),
        (3, "Forest_Whispers", "2024-08-11", "10B981"),
        (4, "Oceanic_Glow", "2024-08-10", "3B82F6"),
        (5, "Desert_Mirage", "2024-08-09", "F59E0B"),
        (6, "Retro_Future_Car", "2024-08-09", "EF4444"),
    ];

    SAMPLES
        .iter()
        .map(|&(id, name, date, color)| {
            Creation::new(
                id,
                name,
                date,
                format!("https://placehold.co/400x400/{color}/FFFFFF?text=AI+Image+{id}"),
            )
        })
        .collect()
}
