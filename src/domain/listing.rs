// src/domain/listing.rs

use serde::Deserialize;
use std::fmt;

/// The two mutually exclusive listing categories a page may display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stay,
    Property,
}

impl Mode {
    pub fn page_path(self) -> &'static str {
        match self {
            Mode::Stay => "/stays",
            Mode::Property => "/properties",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Mode::Stay => "Short Stays",
            Mode::Property => "Properties",
        }
    }

    pub fn grid_id(self) -> &'static str {
        match self {
            Mode::Stay => "stay-grid",
            Mode::Property => "property-grid",
        }
    }

    /// Placeholder background when a listing has no images at all.
    pub fn placeholder_color(self) -> &'static str {
        match self {
            Mode::Stay => "#ddd",
            Mode::Property => "#cce0ff",
        }
    }

    pub fn no_results_message(self) -> &'static str {
        match self {
            Mode::Stay => "No stays found matching your search. Try adjusting your filters.",
            Mode::Property => "No properties found. Try a different location or price range.",
        }
    }
}

/// One short-stay or for-sale/rent property record, as supplied by the
/// listing store. Read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub desc: String,
    #[serde(default)]
    pub amenities: Option<String>,
    pub dates: String,

    /// Minor-unit-free KES amount.
    pub price: i64,
    /// Display suffix for the price (properties only, e.g. "per month").
    #[serde(default, rename = "priceLabel")]
    pub price_label: Option<String>,

    /// Property category ("apartment", "house", ...). Properties only.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Normalized room-category token ("studio", "1", "2", "3"). When
    /// absent, room matching falls back to text heuristics.
    #[serde(default)]
    pub rooms: Option<String>,

    pub rating: Rating,

    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Legacy single-image field, consulted only when `images` is absent.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "imageColor")]
    pub image_color: Option<String>,
}

impl Listing {
    /// The ordered image URLs to show for this listing. An explicit `images`
    /// sequence wins even when empty; otherwise the legacy `image` field
    /// supplies a one-element gallery.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.images {
            Some(images) => images.iter().map(String::as_str).collect(),
            None => self.image.as_deref().map(|img| vec![img]).unwrap_or_default(),
        }
    }

    pub fn placeholder_color(&self, mode: Mode) -> &str {
        self.image_color
            .as_deref()
            .unwrap_or_else(|| mode.placeholder_color())
    }

    /// Display suffix after the formatted price: "night" for stays, the
    /// listing's own label (or nothing) for properties.
    pub fn price_suffix(&self, mode: Mode) -> &str {
        match mode {
            Mode::Stay => "night",
            Mode::Property => self.price_label.as_deref().unwrap_or(""),
        }
    }
}

/// A display rating that may arrive as a number (4.85) or a string ("New").
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{n}"),
            Rating::Text(s) => f.write_str(s),
        }
    }
}

/// Groups a non-negative amount by thousands: 1234567 -> "1,234,567".
pub fn format_price(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
