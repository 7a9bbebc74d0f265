use crate::models::Image;

/// URL of the image to show in listings: the first entry flagged primary in
/// array order, else the first entry, else nothing. The primary flag is not
/// enforced server-side, so zero or several flagged entries are both
/// possible. Callers substitute the placeholder asset on `None`.
pub fn primary_image(images: &[Image]) -> Option<&str> {
    images
        .iter()
        .find(|i| i.is_primary)
        .or_else(|| images.first())
        .map(|i| i.url.as_str())
}

/// Gallery order: the primary-flagged image moved to the front, the rest
/// keeping their relative order.
pub fn ordered_images(images: &[Image]) -> Vec<Image> {
    match images.iter().position(|i| i.is_primary) {
        Some(primary) => {
            let mut out = Vec::with_capacity(images.len());
            out.push(images[primary].clone());
            out.extend(
                images
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != primary)
                    .map(|(_, img)| img.clone()),
            );
            out
        }
        None => images.to_vec(),
    }
}
