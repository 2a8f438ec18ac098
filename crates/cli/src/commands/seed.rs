//! Seed the database with cafe records from a YAML file.
//!
//! The file is a YAML list of cafe entries matching the creation payload,
//! with the amenity flags inline:
//!
//! ```yaml
//! - name: Attendant Fitzrovia
//!   map_url: https://maps.example.com/attendant
//!   img_url: https://img.example.com/attendant.jpg
//!   location: Fitzrovia
//!   seats: 20-30
//!   has_toilet: true
//!   has_wifi: true
//!   has_sockets: true
//!   can_take_calls: false
//!   coffee_price: "£2.80"
//! ```

use std::path::Path;

use tracing::{info, warn};

use brewdex_api::db::{self, CafeRepository, RepositoryError};
use brewdex_api::models::cafe::NewCafe;

use super::migrate::database_url;

/// Load cafes from a YAML file and insert them through the repository.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
/// * `skip_existing` - If true, cafes whose name already exists are skipped
///   with a warning; otherwise the first collision aborts the run
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the database is
/// unreachable, or an insert fails.
pub async fn run(file_path: &str, skip_existing: bool) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading seed file");

    // Read and parse the YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let cafes: Vec<NewCafe> = serde_yaml::from_str(&content)?;
    info!(cafes = cafes.len(), "Parsed seed file");

    let pool = db::create_pool(&database_url()?).await?;
    db::MIGRATOR.run(&pool).await?;

    let repo = CafeRepository::new(&pool);
    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for cafe in &cafes {
        match repo.create(cafe).await {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "Seeded cafe");
                inserted += 1;
            }
            Err(RepositoryError::Conflict(_)) if skip_existing => {
                warn!(name = %cafe.name, "Cafe already exists, skipping");
                skipped += 1;
            }
            Err(e) => {
                pool.close().await;
                return Err(e.into());
            }
        }
    }

    pool.close().await;
    info!(inserted, skipped, "Seeding complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_file_parses_with_flat_amenity_flags() {
        let yaml = r#"
- name: Attendant Fitzrovia
  map_url: https://maps.example.com/attendant
  img_url: https://img.example.com/attendant.jpg
  location: Fitzrovia
  seats: 20-30
  has_toilet: true
  has_wifi: true
  has_sockets: true
  can_take_calls: false
  coffee_price: "£2.80"
"#;

        let cafes: Vec<NewCafe> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cafes.len(), 1);

        let cafe = cafes.first().unwrap();
        assert_eq!(cafe.name, "Attendant Fitzrovia");
        assert_eq!(cafe.coffee_price, "£2.80");
        assert!(cafe.amenities.has_wifi);
        assert!(!cafe.amenities.can_take_calls);
    }
}
