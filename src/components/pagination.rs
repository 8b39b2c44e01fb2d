//! Pagination Control
//!
//! Previous/Next buttons around a page indicator. Emits the requested
//! page to the caller; the caller's state update is the source of truth,
//! so no clamping happens here.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    current_page: ReadSignal<usize>,
    total_pages: Memo<usize>,
    on_page_change: impl Fn(usize) + Copy + 'static,
) -> impl IntoView {
    let prev_disabled = move || current_page.get() <= 1;
    let next_disabled = move || {
        let total = total_pages.get();
        total == 0 || current_page.get() >= total
    };

    view! {
        <div class="pagination">
            <button
                disabled=prev_disabled
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change(page - 1);
                    }
                }
            >
                "Previous"
            </button>
            <span class="page-indicator">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                disabled=next_disabled
                on:click=move |_| on_page_change(current_page.get() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
