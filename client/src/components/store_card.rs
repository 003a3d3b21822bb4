//! Card for one store in consumer and owner lists.

use leptos::prelude::*;
use storefront::model::Store;

/// Store summary: image, name, rating, opening status, and like count.
///
/// Expects a normalized store (`is_open`, CDN `image`, `like_count`).
#[component]
pub fn StoreCard(
    store: Store,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] on_like: Option<Callback<i64>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = store.id;
    let hours = match (&store.open_time, &store.close_time) {
        (Some(open), Some(close)) => format!("{open} - {close}"),
        _ => String::new(),
    };
    let rating = format!("★ {:.1} ({})", store.rating(), store.review_count());
    let status = if store.is_open { "Open" } else { "Closed" };
    let link = href.unwrap_or_else(|| "#".to_owned());

    view! {
        <div class="store-card" class:store-card--closed=!store.is_open>
            <a class="store-card__link" href=link>
                <img class="store-card__image" src=store.image.clone().unwrap_or_default() alt=store.name.clone()/>
                <span class="store-card__name">{store.name.clone()}</span>
            </a>
            <span class="store-card__rating">{rating}</span>
            <span class="store-card__status">{status}</span>
            <span class="store-card__hours">{hours}</span>
            {store.district_category.clone().map(|d| view! { <span class="store-card__district">{d}</span> })}
            {store.distance.map(|d| view! { <span class="store-card__distance">{format!("{d:.0} m")}</span> })}
            <div class="store-card__actions">
                <button
                    class="btn store-card__like"
                    disabled=on_like.is_none()
                    on:click=move |_| {
                        if let Some(on_like) = on_like {
                            on_like.run(id);
                        }
                    }
                >
                    {format!("♥ {}", store.like_count)}
                </button>
                {on_delete
                    .map(|on_delete| {
                        view! {
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                "Delete"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
