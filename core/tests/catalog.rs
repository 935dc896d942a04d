use std::collections::HashSet;

use folio_core::images::validate_image_url;
use folio_core::catalog::REMOTE_IMAGE_HOSTS;
use folio_core::{catalog, resolve_image_src, PLACEHOLDER_IMAGE};

#[test]
fn ids_are_pairwise_distinct() {
    let ids: HashSet<&str> = catalog().iter().map(|entry| entry.id).collect();
    assert_eq!(ids.len(), catalog().len());
}

#[test]
fn catalog_images_are_fetchable() {
    assert!(validate_image_url(PLACEHOLDER_IMAGE, REMOTE_IMAGE_HOSTS).is_ok());
    for entry in catalog() {
        for url in entry.image.iter().chain(entry.project_images.iter()) {
            assert!(
                validate_image_url(url, REMOTE_IMAGE_HOSTS).is_ok(),
                "{} has unusable image {url}",
                entry.id
            );
        }
    }
}

#[test]
fn cards_without_image_use_placeholder() {
    for entry in catalog() {
        let src = resolve_image_src(entry.image);
        match entry.image {
            Some(image) => assert_eq!(src, image),
            None => assert_eq!(src, PLACEHOLDER_IMAGE),
        }
    }
}
