//! Single-slot image picker with preview.

use leptos::prelude::*;
use storefront::model::ImageUpload;

/// File input plus previews of the current items. Picking past `max_images`
/// replaces the oldest item.
#[component]
pub fn ImageUploadField(
    #[prop(into)] images: Signal<Vec<ImageUpload>>,
    on_change: Callback<Vec<ImageUpload>>,
    #[prop(default = 1)] max_images: usize,
    #[prop(default = "4:3")] aspect_ratio: &'static str,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let frame_style = format!("aspect-ratio: {}", aspect_ratio.replace(':', " / "));

    let on_pick = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file_pick::read_picked(&input).await {
                    Ok(Some(picked)) => {
                        let next = crate::util::file_pick::with_picked(images.get_untracked(), picked, max_images);
                        on_change.run(next);
                    }
                    Ok(None) => {}
                    Err(err) => log::warn!("image read failed: {err}"),
                }
            });
        }
    };

    let remove = move |index: usize| {
        let mut next = images.get_untracked();
        if index < next.len() {
            next.remove(index);
        }
        on_change.run(next);
    };

    view! {
        <div class="image-upload">
            <div class="image-upload__previews">
                {move || {
                    images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let style = frame_style.clone();
                            view! {
                                <div class="image-upload__frame" style=style>
                                    <img class="image-upload__preview" src=item.preview_url alt="Menu image preview"/>
                                    <button
                                        type="button"
                                        class="image-upload__remove"
                                        aria-label="Remove image"
                                        on:click=move |_| remove(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <input type="file" accept="image/*" class="image-upload__input" node_ref=input_ref on:change=on_pick/>
        </div>
    }
}
