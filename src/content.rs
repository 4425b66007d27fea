//! Content store
//!
//! Static page copy, photo URLs and competition rules. Everything is fixed at
//! startup and rendered verbatim; images only carry position-derived ids.

use serde::Serialize;

pub const DEFAULT_EVALUATION_FORM_URL: &str = "https://forms.gle/YOUR_FORM_LINK_HERE";

const CAROUSEL_PHOTOS: [&str; 5] = [
    "https://placehold.co/800x600/FF5555/FFFFFF?text=Marching+Band+1",
    "https://placehold.co/800x600/FFFFFF/FF5555?text=Performance",
    "https://placehold.co/800x600/FF5555/FFFFFF?text=Team+Spirit",
    "https://placehold.co/800x600/FFFFFF/FF5555?text=Trophy+Moment",
    "https://placehold.co/800x600/FF5555/FFFFFF?text=Practice",
];

const GALLERY_PHOTOS: [&str; 6] = [
    "https://placehold.co/600x400/FF6666/FFFFFF?text=Image+A",
    "https://placehold.co/600x400/FFFFFF/FF6666?text=Image+B",
    "https://placehold.co/600x400/FF6666/FFFFFF?text=Image+C",
    "https://placehold.co/600x400/FFFFFF/FF6666?text=Image+D",
    "https://placehold.co/600x400/FF6666/FFFFFF?text=Image+E",
    "https://placehold.co/600x400/FFFFFF/FF6666?text=Image+F",
];

const RULES: [&str; 5] = [
    "Semua peserta harus tiba 1 jam sebelum jadwal penampilan.",
    "Durasi penampilan maksimal 15 menit, termasuk persiapan.",
    "Penggunaan alat peraga di luar alat musik standar tidak diizinkan.",
    "Pakaian seragam lengkap adalah wajib untuk semua anggota tim.",
    "Keputusan juri bersifat mutlak dan tidak dapat diganggu gugat.",
];

/// One rendered photo tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    pub id: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentStore {
    pub brand: String,
    pub hero_title: String,
    pub hero_tagline: String,
    pub carousel_heading: String,
    pub rules_heading: String,
    pub gallery_heading: String,
    pub evaluation_label: String,
    pub evaluation_form_url: String,
    pub carousel_photos: Vec<String>,
    pub gallery_photos: Vec<String>,
    pub rules: Vec<String>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            brand: "Marching Fest".to_string(),
            hero_title: "National Marching Band Competition".to_string(),
            hero_tagline: "Jadilah bagian dari semangat, melodi, dan kebanggaan dalam kompetisi marching band paling bergengsi tahun ini!".to_string(),
            carousel_heading: "Momen Penuh Semangat".to_string(),
            rules_heading: "Peraturan Kompetisi".to_string(),
            gallery_heading: "Galeri Acara".to_string(),
            evaluation_label: "Formulir Evaluasi".to_string(),
            evaluation_form_url: DEFAULT_EVALUATION_FORM_URL.to_string(),
            carousel_photos: CAROUSEL_PHOTOS.iter().map(|s| s.to_string()).collect(),
            gallery_photos: GALLERY_PHOTOS.iter().map(|s| s.to_string()).collect(),
            rules: RULES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ContentStore {
    pub fn with_evaluation_form_url(mut self, url: impl Into<String>) -> Self {
        self.evaluation_form_url = url.into();
        self
    }

    /// Carousel tiles: `carousel-1`, alt "Participant 1", ...
    pub fn carousel_blocks(&self) -> Vec<ImageBlock> {
        image_blocks(&self.carousel_photos, "carousel", "Participant")
    }

    /// Gallery tiles: `gallery-1`, alt "Gallery Image 1", ...
    pub fn gallery_blocks(&self) -> Vec<ImageBlock> {
        image_blocks(&self.gallery_photos, "gallery", "Gallery Image")
    }
}

fn image_blocks(photos: &[String], id_prefix: &str, alt_prefix: &str) -> Vec<ImageBlock> {
    photos
        .iter()
        .enumerate()
        .map(|(index, src)| ImageBlock {
            id: format!("{}-{}", id_prefix, index + 1),
            src: src.clone(),
            alt: format!("{} {}", alt_prefix, index + 1),
        })
        .collect()
}
