// SPDX-License-Identifier: MPL-2.0
//! Study-material catalog entries.
//!
//! A [`StudyMaterial`] describes one piece of content (PDF document or video
//! link) tagged with a subject and a curriculum year. The mutually exclusive
//! `fileUrl` / `videoUrl` pair of the wire model is represented by the
//! [`MaterialSource`] enum, so a record can never carry both or neither.

pub mod filter;

use std::fmt;

// =============================================================================
// Year
// =============================================================================

/// Curriculum year (1-4), the primary partition of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u8);

impl Year {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// All years in ascending order, for year-selector widgets.
    pub const ALL: [Year; 4] = [Year(1), Year(2), Year(3), Year(4)];

    /// Returns `Some(Year)` when `value` is within 1-4.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Identifier
// =============================================================================

/// Opaque material identifier.
///
/// Generated client-side from the current time, matching the placeholder
/// behavior of the prototype; there is no uniqueness guarantee across
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaterialId(String);

impl MaterialId {
    /// Creates an identifier from the current wall-clock time in milliseconds.
    #[must_use]
    pub fn from_current_time() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Source and kind
// =============================================================================

/// Material content kind, mirroring the `type` discriminator of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Pdf,
    Video,
}

/// Where the material's content lives.
///
/// Exactly one of the two URL fields of the original record is populated,
/// consistent with its kind; the enum makes that invariant structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialSource {
    /// A PDF document. The value is a placeholder URL, not a real reference.
    PdfFile(String),
    /// An external video link.
    VideoLink(String),
}

impl MaterialSource {
    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        match self {
            Self::PdfFile(_) => MaterialKind::Pdf,
            Self::VideoLink(_) => MaterialKind::Video,
        }
    }

    /// The `fileUrl` view of the record: set only for PDF materials.
    #[must_use]
    pub fn file_url(&self) -> Option<&str> {
        match self {
            Self::PdfFile(url) => Some(url),
            Self::VideoLink(_) => None,
        }
    }

    /// The `videoUrl` view of the record: set only for video materials.
    #[must_use]
    pub fn video_url(&self) -> Option<&str> {
        match self {
            Self::PdfFile(_) => None,
            Self::VideoLink(url) => Some(url),
        }
    }
}

// =============================================================================
// StudyMaterial
// =============================================================================

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyMaterial {
    pub id: MaterialId,
    pub title: String,
    pub subject: String,
    pub year: Year,
    pub source: MaterialSource,
    /// ISO-8601 creation timestamp. Set once, never mutated.
    pub uploaded_at: String,
}

impl StudyMaterial {
    /// Creates a new record with a time-derived id and the current timestamp,
    /// the way the upload stub mints records.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        year: Year,
        source: MaterialSource,
    ) -> Self {
        Self {
            id: MaterialId::from_current_time(),
            title: title.into(),
            subject: subject.into(),
            year,
            source,
            uploaded_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        self.source.kind()
    }

    /// Date portion of `uploaded_at` for display. Full RFC 3339 timestamps
    /// are shortened; already-plain dates pass through unchanged.
    #[must_use]
    pub fn display_date(&self) -> &str {
        match chrono::DateTime::parse_from_rfc3339(&self.uploaded_at) {
            Ok(_) => self.uploaded_at.get(..10).unwrap_or(&self.uploaded_at),
            Err(_) => &self.uploaded_at,
        }
    }
}

/// The hardcoded student-facing catalog, pending the listing endpoint.
///
/// Disjoint from admin uploads: records created on the admin screen are never
/// merged into this list (treated as a pending-moderation seam).
#[must_use]
pub fn mock_catalog() -> Vec<StudyMaterial> {
    let year2 = Year::new(2).expect("2 is a valid year");
    let year3 = Year::new(3).expect("3 is a valid year");

    vec![
        StudyMaterial {
            id: "1".into(),
            title: "Introduction to Data Structures".to_string(),
            subject: "Data Structures".to_string(),
            year: year2,
            source: MaterialSource::PdfFile("#".to_string()),
            uploaded_at: "2024-01-15".to_string(),
        },
        StudyMaterial {
            id: "2".into(),
            title: "Algorithms Complexity Analysis".to_string(),
            subject: "Algorithms".to_string(),
            year: year2,
            source: MaterialSource::VideoLink("#".to_string()),
            uploaded_at: "2024-01-16".to_string(),
        },
        StudyMaterial {
            id: "3".into(),
            title: "Object Oriented Programming Concepts".to_string(),
            subject: "OOP".to_string(),
            year: year2,
            source: MaterialSource::PdfFile("#".to_string()),
            uploaded_at: "2024-01-17".to_string(),
        },
        StudyMaterial {
            id: "4".into(),
            title: "Database Design Principles".to_string(),
            subject: "Database Systems".to_string(),
            year: year3,
            source: MaterialSource::PdfFile("#".to_string()),
            uploaded_at: "2024-01-18".to_string(),
        },
        StudyMaterial {
            id: "5".into(),
            title: "Network Security Fundamentals".to_string(),
            subject: "Computer Networks".to_string(),
            year: year3,
            source: MaterialSource::VideoLink("#".to_string()),
            uploaded_at: "2024-01-19".to_string(),
        },
    ]
}
