//! Pagination Bar Component
//!
//! "Showing X to Y of Z" summary plus a sliding window of page buttons.

use leptos::prelude::*;

use crate::listing::{PageControls, PageRange};

#[component]
pub fn PaginationBar(
    /// Noun for the summary, e.g. "users"
    noun: &'static str,
    #[prop(into)] range: Signal<PageRange>,
    #[prop(into)] controls: Signal<Option<PageControls>>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-bar">
            <span class="pagination-info">
                {move || {
                    let r = range.get();
                    format!("Showing {} to {} of {} {}", r.first, r.last, r.total, noun)
                }}
            </span>
            {move || controls.get().map(|c| {
                let current = c.current;
                view! {
                    <div class="pagination">
                        <button
                            class="page-btn"
                            disabled=!c.has_prev
                            on:click=move |_| on_page.run(current - 1)
                        >
                            "‹"
                        </button>
                        {c.pages.into_iter().map(|page| view! {
                            <button
                                class=if page == current { "page-btn active" } else { "page-btn" }
                                on:click=move |_| on_page.run(page)
                            >
                                {page}
                            </button>
                        }).collect_view()}
                        <button
                            class="page-btn"
                            disabled=!c.has_next
                            on:click=move |_| on_page.run(current + 1)
                        >
                            "›"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
