//! Reading a picked `<input type="file">` entry into an image item.

#[cfg(test)]
#[path = "file_pick_test.rs"]
mod file_pick_test;

use storefront::model::ImageUpload;

/// MIME type to send for a picked file; browsers leave it empty when they
/// cannot guess.
#[must_use]
pub fn content_type_or_default(raw: &str) -> String {
    if raw.trim().is_empty() {
        "application/octet-stream".to_owned()
    } else {
        raw.to_owned()
    }
}

/// Merge a newly picked item into the widget's list, capped at `max`. The
/// new item replaces the oldest once the cap is reached.
#[must_use]
pub fn with_picked(mut current: Vec<ImageUpload>, picked: ImageUpload, max: usize) -> Vec<ImageUpload> {
    if max == 0 {
        return Vec::new();
    }
    current.push(picked);
    let overflow = current.len().saturating_sub(max);
    current.drain(..overflow);
    current
}

/// Read the first file of a file input: its bytes plus an object URL for the
/// preview.
#[cfg(feature = "csr")]
pub async fn read_picked(input: &web_sys::HtmlInputElement) -> Result<Option<ImageUpload>, String> {
    use storefront::model::ImageFile;

    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let preview = web_sys::Url::create_object_url_with_blob(&file).map_err(|e| format!("{e:?}"))?;
    let image = ImageFile { name: file.name(), content_type: content_type_or_default(&file.type_()), bytes };
    Ok(Some(ImageUpload::picked(image, preview)))
}
