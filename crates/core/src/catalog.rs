//! The read-only seed dataset.
//!
//! The platform ships a fixed, versioned set of events, students, admins and
//! certificates as JSON fixtures. They are embedded into the binary at build
//! time and can be swapped for files on disk. The catalog is built once at
//! startup and then shared immutably; nothing in the platform mutates it.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::certificate::CertificateRecord;
use crate::event::Event;
use crate::student::{Admin, Student};

// ---------------------------------------------------------------------------
// Embedded fixtures
// ---------------------------------------------------------------------------

const SEED_EVENTS: &str = include_str!("../seed/events.json");
const SEED_STUDENTS: &str = include_str!("../seed/students.json");
const SEED_ADMINS: &str = include_str!("../seed/admins.json");
const SEED_CERTIFICATES: &str = include_str!("../seed/certificates.json");

/// File names looked up inside a seed directory.
pub const EVENTS_FILE: &str = "events.json";
pub const STUDENTS_FILE: &str = "students.json";
pub const ADMINS_FILE: &str = "admins.json";
pub const CERTIFICATES_FILE: &str = "certificates.json";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data in {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {entity} id in seed data: {id}")]
    DuplicateId { entity: &'static str, id: String },
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Everything the platform knows, loaded once.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub events: Vec<Event>,
    pub students: Vec<Student>,
    pub admins: Vec<Admin>,
    pub certificates: Vec<CertificateRecord>,
}

impl Catalog {
    /// Build the catalog from the fixtures compiled into the crate.
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_EVENTS, SEED_STUDENTS, SEED_ADMINS, SEED_CERTIFICATES)
    }

    /// Build the catalog from the four fixture documents.
    pub fn from_json(
        events: &str,
        students: &str,
        admins: &str,
        certificates: &str,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            events: parse(EVENTS_FILE, events)?,
            students: parse(STUDENTS_FILE, students)?,
            admins: parse(ADMINS_FILE, admins)?,
            certificates: parse(CERTIFICATES_FILE, certificates)?,
        };
        catalog.check_unique_ids()?;

        tracing::debug!(
            events = catalog.events.len(),
            students = catalog.students.len(),
            admins = catalog.admins.len(),
            certificates = catalog.certificates.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the four fixture files from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| CatalogError::Io { path, source })
        };

        Self::from_json(
            &read(EVENTS_FILE)?,
            &read(STUDENTS_FILE)?,
            &read(ADMINS_FILE)?,
            &read(CERTIFICATES_FILE)?,
        )
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        ensure_unique("event", self.events.iter().map(|e| e.id))?;
        ensure_unique("student", self.students.iter().map(|s| s.id))?;
        ensure_unique("admin", self.admins.iter().map(|a| a.id))?;
        ensure_unique("certificate", self.certificates.iter().map(|c| c.id.as_str()))?;
        Ok(())
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    file: &'static str,
    raw: &str,
) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Json { file, source })
}

fn ensure_unique<K, I>(entity: &'static str, ids: I) -> Result<(), CatalogError>
where
    K: Eq + Hash + ToString,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for id in ids {
        let label = id.to_string();
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { entity, id: label });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn embedded_seed_loads() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.events.len(), 8);
        assert_eq!(catalog.students.len(), 2);
        assert_eq!(catalog.admins.len(), 1);
        assert_eq!(catalog.certificates.len(), 5);
    }

    #[test]
    fn seed_certificates_are_all_verified() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.certificates.iter().all(|c| c.verified));
    }

    #[test]
    fn empty_documents_give_empty_catalog() {
        let catalog = Catalog::from_json("[]", "[]", "[]", "[]").unwrap();
        assert!(catalog.events.is_empty());
        assert!(catalog.certificates.is_empty());
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = Catalog::from_json("[]", "[]", "[]", "{not json").unwrap_err();
        assert_matches!(err, CatalogError::Json { file: CERTIFICATES_FILE, .. });
    }

    #[test]
    fn duplicate_certificate_ids_are_rejected() {
        let cert = SEED_CERTIFICATES.trim();
        // Concatenate the seed array with itself.
        let inner = &cert[1..cert.len() - 1];
        let doubled = format!("[{inner},{inner}]");

        let err = Catalog::from_json("[]", "[]", "[]", &doubled).unwrap_err();
        assert_matches!(
            err,
            CatalogError::DuplicateId { entity: "certificate", ref id } if id == "CERT2026001"
        );
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(EVENTS_FILE), SEED_EVENTS).unwrap();
        std::fs::write(dir.path().join(STUDENTS_FILE), SEED_STUDENTS).unwrap();
        std::fs::write(dir.path().join(ADMINS_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(CERTIFICATES_FILE), "[]").unwrap();

        let catalog = Catalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.events.len(), 8);
        assert!(catalog.admins.is_empty());
        assert!(catalog.certificates.is_empty());
    }

    #[test]
    fn missing_directory_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_dir(dir.path()).unwrap_err();
        assert_matches!(err, CatalogError::Io { ref path, .. } if path.ends_with(EVENTS_FILE));
    }
}
