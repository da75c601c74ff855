//! Grid of finding cards.

#[cfg(test)]
#[path = "findings_grid_test.rs"]
mod findings_grid_test;

use leptos::prelude::*;
use triage::Finding;
use triage::findings::cards;

fn card_class(critical: bool) -> &'static str {
    if critical { "finding-card finding-card--critical" } else { "finding-card" }
}

/// Render `findings` in the order given.
#[component]
pub fn FindingsGrid(#[prop(into)] findings: Signal<Vec<Finding>>) -> impl IntoView {
    view! {
        <div class="findings-grid">
            {move || {
                cards(&findings.get())
                    .into_iter()
                    .map(|card| {
                        let meta = card.meta_line();
                        view! {
                            <article class=card_class(card.critical)>
                                <h4 class="finding-card__title">{card.title}</h4>
                                <p class="finding-card__description">{card.description}</p>
                                <p class="finding-card__meta">{meta}</p>
                            </article>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
