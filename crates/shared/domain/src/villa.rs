//! Villa and villa image types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tag::Tag;

/// A rentable villa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Villa {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub region: String,
    pub address: Option<String>,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub price_per_night: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Image belonging to one villa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VillaImage {
    pub id: Uuid,
    pub villa_id: Uuid,
    pub url: String,
    pub alt: Option<String>,
    pub sort_order: i32,
    pub is_cover_image: bool,
}

/// Villa with its images and tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VillaDetail {
    #[serde(flatten)]
    pub villa: Villa,
    pub images: Vec<VillaImage>,
    pub tags: Vec<Tag>,
}

impl VillaDetail {
    /// Build a detail view; images are ordered by `sort_order`.
    pub fn new(villa: Villa, mut images: Vec<VillaImage>, tags: Vec<Tag>) -> Self {
        images.sort_by_key(|image| image.sort_order);
        Self {
            villa,
            images,
            tags,
        }
    }

    pub fn cover_image(&self) -> Option<&VillaImage> {
        cover_image(&self.images)
    }
}

/// Pick the image to display for a villa.
///
/// The first image flagged as cover wins. Without a flagged image the lowest
/// `sort_order` is used. Several flagged images are tolerated since the database does
/// not enforce a single cover.
pub fn cover_image(images: &[VillaImage]) -> Option<&VillaImage> {
    images
        .iter()
        .filter(|image| image.is_cover_image)
        .min_by_key(|image| image.sort_order)
        .or_else(|| images.iter().min_by_key(|image| image.sort_order))
}
