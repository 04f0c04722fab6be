//! Enumerate image files eligible for submission to the Face API

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use log::{info, warn};

/// File types the detection endpoint accepts
const ALLOWED_TYPES: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// List image files in a directory, skipping anything the API can't process
///
/// Results are sorted so submission order is stable between runs.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    info!("Finding image files in directory: {}", dir.display());

    if !dir.is_dir() {
        bail!("Supplied image directory {} does not exist", dir.display());
    }

    let mut images: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            warn!("{} is not a file and will be ignored", path.display());
            continue;
        }
        if is_image(&path) {
            images.push(path);
        } else {
            warn!("{} is not an allowed file type and will be ignored", path.display());
        }
    }

    images.sort();

    match images.is_empty() {
        true => warn!("No image files found in directory: {}", dir.display()),
        false => info!("Found {} image files in directory: {}", images.len(), dir.display()),
    }

    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_TYPES.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
