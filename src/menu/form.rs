//! Menu create/edit draft and its submission.
//!
//! DESIGN
//! ======
//! [`MenuDraft`] holds exactly what the form shows: the name and price as
//! typed, the ticked allergen ids, and the image widget's items. Nothing is
//! checked while editing; [`MenuDraft::to_form`] validates and builds the
//! multipart payload in one step, so an invalid draft can never produce a
//! request.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are [`MenuFormError`] values whose `Display` is the
//! alert text. A failing submit callback gets one generic alert; the callback
//! is expected to have logged the detail.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::future::Future;

use crate::error::{ApiError, MenuFormError};
use crate::model::{ImageUpload, Menu};
use crate::net::MultipartForm;
use crate::notify::Notifier;

/// The image widget keeps at most this many items.
pub const MAX_IMAGES: usize = 1;

/// Crop hint handed to the image widget.
pub const IMAGE_ASPECT_RATIO: &str = "4:3";

/// Alert shown when the submit callback fails.
pub const SUBMIT_FAILED: &str = "Failed to save the menu.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuDraft {
    pub name: String,
    /// Price as typed.
    pub price: String,
    /// Ticked allergen ids in the order they were ticked.
    pub allergy_ids: Vec<i64>,
    pub images: Vec<ImageUpload>,
}

impl MenuDraft {
    /// Start a draft from an existing menu, or an empty one for create.
    #[must_use]
    pub fn for_menu(menu: Option<&Menu>) -> Self {
        let Some(menu) = menu else {
            return Self::default();
        };
        Self {
            name: menu.name.clone(),
            price: menu.price.to_string(),
            allergy_ids: menu.allergy_ids.clone(),
            images: menu
                .image_url
                .iter()
                .filter(|url| !url.is_empty())
                .map(ImageUpload::existing)
                .collect(),
        }
    }

    #[must_use]
    pub fn has_allergy(&self, id: i64) -> bool {
        self.allergy_ids.contains(&id)
    }

    /// Tick `id` if unticked, untick it otherwise.
    pub fn toggle_allergy(&mut self, id: i64) {
        if let Some(pos) = self.allergy_ids.iter().position(|a| *a == id) {
            self.allergy_ids.remove(pos);
        } else {
            self.allergy_ids.push(id);
        }
    }

    /// Replace the image items, keeping the first [`MAX_IMAGES`].
    pub fn set_images(&mut self, mut images: Vec<ImageUpload>) {
        images.truncate(MAX_IMAGES);
        self.images = images;
    }

    /// Validate and build the multipart payload. `menu_id` is sent as `id`
    /// when editing.
    ///
    /// Field order: `id`, `name`, `price`, one `allergyIds` per ticked
    /// allergen, then `image` when a new file was picked.
    ///
    /// # Errors
    ///
    /// [`MenuFormError::EmptyName`] for a blank name,
    /// [`MenuFormError::InvalidPrice`] for a price that is not a positive
    /// number.
    pub fn to_form(&self, menu_id: Option<i64>) -> Result<MultipartForm, MenuFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }
        let price = parse_price(&self.price)?;

        let mut form = MultipartForm::new();
        if let Some(id) = menu_id {
            form.append_text("id", id);
        }
        form.append_text("name", name);
        form.append_text("price", price);
        for id in &self.allergy_ids {
            form.append_text("allergyIds", id);
        }
        match self.images.first().and_then(|img| img.file.clone()) {
            Some(file) => form.append_file("image", file),
            None => tracing::warn!(?menu_id, "no image file selected; submitting menu without image"),
        }
        Ok(form)
    }
}

/// Parse a typed price the way the browser's `Number()` reads decimal input,
/// then require a finite value above zero.
///
/// Surrounding whitespace is ignored and blank input reads as zero.
///
/// # Errors
///
/// Returns [`MenuFormError::InvalidPrice`] when the input is not a positive
/// finite number.
pub fn parse_price(raw: &str) -> Result<f64, MenuFormError> {
    let trimmed = raw.trim();
    let value = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().map_err(|_| MenuFormError::InvalidPrice)?
    };
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MenuFormError::InvalidPrice)
    }
}

/// Result of one submit attempt. The modal closes only on `Submitted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(MenuFormError),
    Failed,
    Submitted,
}

impl SubmitOutcome {
    #[must_use]
    pub fn closes_modal(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Validate `draft`, hand the payload to `on_submit`, and alert on any
/// failure.
pub async fn submit_menu<N, F, Fut>(draft: &MenuDraft, menu_id: Option<i64>, notifier: &N, on_submit: F) -> SubmitOutcome
where
    N: Notifier + ?Sized,
    F: FnOnce(MultipartForm) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let form = match draft.to_form(menu_id) {
        Ok(form) => form,
        Err(err) => {
            notifier.alert(&err.to_string());
            return SubmitOutcome::Invalid(err);
        }
    };
    match on_submit(form).await {
        Ok(()) => SubmitOutcome::Submitted,
        Err(err) => {
            tracing::error!(?menu_id, error = %err, "menu submit failed");
            notifier.alert(SUBMIT_FAILED);
            SubmitOutcome::Failed
        }
    }
}
