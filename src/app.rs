//! Pokédex App
//!
//! Root component: kicks off the list and detail fetches, owns the view
//! state, and derives the filtered/sorted/paged view via memos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{DetailModal, Pagination, PokemonCard, SearchAndFilter};
use crate::context::AppContext;
use crate::models::Pokemon;
use crate::pipeline::{self, SortKey, PAGE_SIZE};
use crate::store::{
    store_begin_fetch, store_fail_detail, store_resolve_detail, store_set_references,
    CatalogState, CatalogStateStoreFields,
};

#[component]
pub fn App() -> impl IntoView {
    // Network-owned data
    let store = Store::new(CatalogState::default());

    // View state
    let (search_term, set_search_term) = signal(String::new());
    let (selected_type, set_selected_type) = signal(String::new());
    let (sort_key, set_sort_key) = signal(SortKey::Unsorted);
    let (current_page, set_current_page) = signal(1usize);
    let (selected, set_selected) = signal::<Option<Pokemon>>(None);

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let ctx = AppContext::new(
        (search_term, set_search_term),
        (selected_type, set_selected_type),
        (sort_key, set_sort_key),
        (current_page, set_current_page),
        (selected, set_selected),
    );
    provide_context(ctx);

    // Fetch the reference list once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let url = api::list_url(api::API_BASE, api::LIST_LIMIT, 0);
            match api::fetch_list(&url).await {
                Ok(list) => {
                    web_sys::console::log_1(
                        &format!(
                            "[APP] Loaded {} references ({} upstream)",
                            list.results.len(),
                            list.count
                        )
                        .into(),
                    );
                    store_set_references(&store, list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] List fetch failed: {e}").into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    // Resolve details for every reference. begin_fetch claims the url in
    // the cache first, so a reference already in flight, resolved, or
    // failed is never fetched twice. Responses land in any order; each
    // cache write re-triggers the derived-view memo.
    Effect::new(move |_| {
        for reference in store.references().get() {
            if !store_begin_fetch(&store, &reference.url) {
                continue;
            }
            spawn_local(async move {
                match api::fetch_detail(&reference.url).await {
                    Ok(pokemon) => store_resolve_detail(&store, reference.url, pokemon),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[APP] Detail fetch failed for {}: {e}", reference.url)
                                .into(),
                        );
                        store_fail_detail(&store, &reference.url, e.to_string());
                    }
                }
            });
        }
    });

    // Derived view: filter -> resolve -> sort, recomputed on any change
    // to references, cache, search, type filter, or sort
    let filtered = Memo::new(move |_| {
        let refs = store.references().get();
        let cache = store.cache().read();
        pipeline::compute(
            &refs,
            &cache,
            &search_term.get(),
            &selected_type.get(),
            sort_key.get(),
        )
    });

    let page_count = Memo::new(move |_| {
        filtered.with(|items| pipeline::total_pages(items.len(), PAGE_SIZE))
    });

    let page_items = Memo::new(move |_| {
        filtered.with(|items| pipeline::page_slice(items, current_page.get(), PAGE_SIZE).to_vec())
    });

    let progress = move || {
        let total = store.references().with(|refs| refs.len());
        let resolved = store.cache().read().resolved_count();
        format!("{resolved} of {total} details loaded")
    };

    view! {
        <div class="container">
            <h1>"Pokémon List"</h1>

            <Show when=move || error.get().is_some()>
                <p class="error">
                    {move || format!("Error fetching data: {}", error.get().unwrap_or_default())}
                </p>
            </Show>

            <Show when=move || loading.get() && error.get().is_none()>
                <p class="loading">"Loading..."</p>
            </Show>

            <Show when=move || !loading.get() && error.get().is_none()>
                <SearchAndFilter/>

                <div class="pokemon-grid">
                    {move || page_items.get().into_iter().map(|pokemon| view! {
                        <PokemonCard pokemon=pokemon/>
                    }).collect_view()}
                </div>

                <p class="item-count">{progress}</p>

                <Pagination
                    current_page=current_page
                    total_pages=page_count
                    on_page_change=move |page| ctx.go_to_page(page)
                />
            </Show>

            <DetailModal/>
        </div>
    }
}
